use super::domain::{PlacementStatus, StudentRecord};
use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

pub const UNKNOWN_DOMAIN: &str = "Unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FlowLayer {
    Status,
    Domain,
    Company,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowNode {
    pub index: usize,
    pub name: String,
    pub layer: FlowLayer,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlowLink {
    pub source: usize,
    pub target: usize,
    pub value: usize,
}

/// Layered status → domain → company graph with dense integer node indices.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowGraph {
    pub nodes: Vec<FlowNode>,
    pub links: Vec<FlowLink>,
}

impl FlowGraph {
    pub fn layer(&self, layer: FlowLayer) -> impl Iterator<Item = &FlowNode> {
        self.nodes.iter().filter(move |node| node.layer == layer)
    }

    pub fn node(&self, index: usize) -> Option<&FlowNode> {
        self.nodes.get(index)
    }
}

/// Pair counts gathered in one pass over the records, all in first-seen order.
struct FlowCounts<'a> {
    domains_by_status: IndexMap<PlacementStatus, IndexMap<&'a str, usize>>,
    companies_by_domain: IndexMap<&'a str, IndexMap<&'a str, usize>>,
}

impl<'a> FlowCounts<'a> {
    fn collect(records: &'a [StudentRecord]) -> Self {
        let mut counts = Self {
            domains_by_status: IndexMap::new(),
            companies_by_domain: IndexMap::new(),
        };

        for record in records {
            let domain = if record.domain.is_empty() {
                UNKNOWN_DOMAIN
            } else {
                record.domain.as_str()
            };

            *counts
                .domains_by_status
                .entry(record.status)
                .or_default()
                .entry(domain)
                .or_insert(0) += 1;

            if let Some(company) = record.placed_company() {
                *counts
                    .companies_by_domain
                    .entry(domain)
                    .or_default()
                    .entry(company)
                    .or_insert(0) += 1;
            }
        }

        counts
    }
}

/// Builds the sankey structure in three ordered phases.
///
/// Status nodes take indices `0..k` in first-seen order. Domains follow, in the
/// order they are reached while walking statuses. Companies come last, in the
/// order they are reached while walking domains. Domain → company links are
/// only emitted for domains registered by a status → domain link. Domain and
/// company names live in separate layers, so a shared name yields two nodes.
pub fn build_flow(records: &[StudentRecord]) -> FlowGraph {
    let counts = FlowCounts::collect(records);

    let statuses: Vec<PlacementStatus> = counts.domains_by_status.keys().copied().collect();
    let domains: IndexSet<&str> = counts
        .domains_by_status
        .values()
        .flat_map(|domains| domains.keys().copied())
        .collect();
    let companies: IndexSet<&str> = counts
        .companies_by_domain
        .iter()
        .filter(|(domain, _)| domains.contains(*domain))
        .flat_map(|(_, companies)| companies.keys().copied())
        .collect();

    let domain_offset = statuses.len();
    let company_offset = domain_offset + domains.len();

    let nodes = statuses
        .iter()
        .map(|status| (status.label(), FlowLayer::Status))
        .chain(domains.iter().map(|domain| (*domain, FlowLayer::Domain)))
        .chain(companies.iter().map(|company| (*company, FlowLayer::Company)))
        .enumerate()
        .map(|(index, (name, layer))| FlowNode {
            index,
            name: name.to_string(),
            layer,
        })
        .collect();

    let mut links = Vec::new();
    for (status_index, domain_counts) in counts.domains_by_status.values().enumerate() {
        for (domain, count) in domain_counts {
            if let Some(domain_index) = domains.get_index_of(domain) {
                links.push(FlowLink {
                    source: status_index,
                    target: domain_offset + domain_index,
                    value: *count,
                });
            }
        }
    }

    for (domain, company_counts) in &counts.companies_by_domain {
        let Some(domain_index) = domains.get_index_of(domain) else {
            tracing::debug!(domain, "skipping company flow for unregistered domain");
            continue;
        };
        for (company, count) in company_counts {
            if let Some(company_index) = companies.get_index_of(company) {
                links.push(FlowLink {
                    source: domain_offset + domain_index,
                    target: company_offset + company_index,
                    value: *count,
                });
            }
        }
    }

    FlowGraph { nodes, links }
}
