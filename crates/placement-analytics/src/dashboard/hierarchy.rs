use super::domain::StudentRecord;
use indexmap::IndexMap;
use serde::Serialize;

pub const HIERARCHY_ROOT: &str = "Domains";

/// Sunburst-ready tree: synthetic root, one child per domain, one leaf per role.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HierarchyNode {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<usize>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<HierarchyNode>,
}

impl HierarchyNode {
    fn branch(name: &str, children: Vec<HierarchyNode>) -> Self {
        Self {
            name: name.to_string(),
            value: None,
            children,
        }
    }

    fn leaf(name: &str, value: usize) -> Self {
        Self {
            name: name.to_string(),
            value: Some(value),
            children: Vec::new(),
        }
    }

    /// Sum of leaf values below (and including) this node.
    pub fn total(&self) -> usize {
        self.value.unwrap_or(0) + self.children.iter().map(HierarchyNode::total).sum::<usize>()
    }

    pub fn child(&self, name: &str) -> Option<&HierarchyNode> {
        self.children.iter().find(|child| child.name == name)
    }
}

/// Groups records by domain, then role, counting each pair.
///
/// Records without both a domain and a role are skipped. Domains and roles keep
/// the order in which they first appear.
pub fn build_hierarchy(records: &[StudentRecord]) -> HierarchyNode {
    let grouped = records
        .iter()
        .filter(|record| !record.domain.is_empty() && !record.role.is_empty())
        .fold(
            IndexMap::<&str, IndexMap<&str, usize>>::new(),
            |mut domains, record| {
                *domains
                    .entry(record.domain.as_str())
                    .or_default()
                    .entry(record.role.as_str())
                    .or_insert(0) += 1;
                domains
            },
        );

    let children = grouped
        .into_iter()
        .map(|(domain, roles)| {
            let leaves = roles
                .into_iter()
                .map(|(role, count)| HierarchyNode::leaf(role, count))
                .collect();
            HierarchyNode::branch(domain, leaves)
        })
        .collect();

    HierarchyNode::branch(HIERARCHY_ROOT, children)
}
