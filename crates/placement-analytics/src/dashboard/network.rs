use super::domain::StudentRecord;
use indexmap::IndexSet;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    Student,
    Company,
}

impl NodeKind {
    /// Render weight; companies draw larger than students.
    pub const fn weight(self) -> u32 {
        match self {
            Self::Student => 5,
            Self::Company => 15,
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Company => "company",
        }
    }

    /// Node id namespaced by kind, so a student id can never collide with a company name.
    pub fn node_id(self, key: &str) -> String {
        format!("{}:{}", self.prefix(), key)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkNode {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: NodeKind,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkLink {
    pub source: String,
    pub target: String,
    pub value: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct NetworkGraph {
    pub nodes: Vec<NetworkNode>,
    pub links: Vec<NetworkLink>,
}

impl NetworkGraph {
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &NetworkNode> {
        self.nodes.iter().filter(move |node| node.kind == kind)
    }
}

/// Bipartite student ↔ company graph over placed students with a named employer.
///
/// Students are keyed by record id and companies by name, each added once at
/// first encounter. Every qualifying record adds its own link, so two students
/// at one company produce two links.
pub fn build_network(records: &[StudentRecord]) -> NetworkGraph {
    let mut students: IndexSet<&str> = IndexSet::new();
    let mut companies: IndexSet<&str> = IndexSet::new();
    let mut graph = NetworkGraph::default();

    for record in records {
        let Some(company) = record.placed_company() else {
            continue;
        };

        let student_id = NodeKind::Student.node_id(&record.id);
        if students.insert(record.id.as_str()) {
            graph.nodes.push(NetworkNode {
                id: student_id.clone(),
                name: record.name.clone(),
                kind: NodeKind::Student,
                value: NodeKind::Student.weight(),
            });
        }

        let company_id = NodeKind::Company.node_id(company);
        if companies.insert(company) {
            graph.nodes.push(NetworkNode {
                id: company_id.clone(),
                name: company.to_string(),
                kind: NodeKind::Company,
                value: NodeKind::Company.weight(),
            });
        }

        graph.links.push(NetworkLink {
            source: student_id,
            target: company_id,
            value: 1,
        });
    }

    tracing::debug!(
        students = students.len(),
        companies = companies.len(),
        links = graph.links.len(),
        "built recruiter network"
    );

    graph
}
