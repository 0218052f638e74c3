use super::domain::StudentRecord;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    Name,
    Company,
    Role,
    Domain,
    Status,
    Salary,
}

impl SortKey {
    pub const fn ordered() -> [Self; 6] {
        [
            Self::Name,
            Self::Company,
            Self::Role,
            Self::Domain,
            Self::Status,
            Self::Salary,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Company => "company",
            Self::Role => "role",
            Self::Domain => "domain",
            Self::Status => "status",
            Self::Salary => "salary",
        }
    }

    fn compare(self, a: &StudentRecord, b: &StudentRecord) -> Ordering {
        match self {
            Self::Name => collate(&a.name, &b.name),
            Self::Company => collate(&a.company, &b.company),
            Self::Role => collate(&a.role, &b.role),
            Self::Domain => collate(&a.domain, &b.domain),
            Self::Status => collate(a.status.label(), b.status.label()),
            Self::Salary => a.salary.total_cmp(&b.salary),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        Self::ordered()
            .into_iter()
            .find(|key| key.label() == wanted)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ordered().iter().map(|key| key.label()).collect();
                format!("unknown sort key '{raw}' (expected one of {})", known.join(", "))
            })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

/// Case-insensitive primary order; on a tie lowercase sorts before uppercase.
fn collate(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));

    folded.then_with(|| {
        a.chars()
            .zip(b.chars())
            .find(|(left, right)| left != right)
            .map(|(left, right)| match (left.is_lowercase(), right.is_lowercase()) {
                (true, false) => Ordering::Less,
                (false, true) => Ordering::Greater,
                _ => left.cmp(&right),
            })
            .unwrap_or(Ordering::Equal)
    })
}

fn matches_search(record: &StudentRecord, needle: &str) -> bool {
    [
        record.name.as_str(),
        record.company.as_str(),
        record.role.as_str(),
        record.domain.as_str(),
        record.status.label(),
    ]
    .into_iter()
    .any(|field| field.to_lowercase().contains(needle))
}

/// Roster rows matching `search_term`, optionally sorted.
///
/// The search is a case-insensitive substring match over name, company, role,
/// domain and status; a blank term keeps every record. Sorting is stable in
/// both directions, and without a key the filtered order is returned as-is.
pub fn filter_and_sort<'a>(
    records: &'a [StudentRecord],
    search_term: &str,
    sort_key: Option<SortKey>,
    direction: SortDirection,
) -> Vec<&'a StudentRecord> {
    let needle = search_term.trim().to_lowercase();

    let mut rows: Vec<&StudentRecord> = if needle.is_empty() {
        records.iter().collect()
    } else {
        records
            .iter()
            .filter(|record| matches_search(record, &needle))
            .collect()
    };

    if let Some(key) = sort_key {
        match direction {
            SortDirection::Ascending => rows.sort_by(|a, b| key.compare(a, b)),
            SortDirection::Descending => rows.sort_by(|a, b| key.compare(b, a)),
        }
    }

    rows
}
