use chrono::NaiveDate;
use indexmap::IndexSet;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PlacementStatus {
    Placed,
    NotPlaced,
    InProcess,
}

impl PlacementStatus {
    pub const fn ordered() -> [Self; 3] {
        [Self::Placed, Self::NotPlaced, Self::InProcess]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Placed => "Placed",
            Self::NotPlaced => "Not Placed",
            Self::InProcess => "In Process",
        }
    }

    pub const fn is_placed(self) -> bool {
        matches!(self, Self::Placed)
    }
}

impl fmt::Display for PlacementStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownStatus(pub String);

impl fmt::Display for UnknownStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown placement status '{}' (expected Placed, Not Placed or In Process)",
            self.0
        )
    }
}

impl std::error::Error for UnknownStatus {}

impl FromStr for PlacementStatus {
    type Err = UnknownStatus;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let compact: String = raw
            .chars()
            .filter(|ch| !ch.is_whitespace() && *ch != '_' && *ch != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match compact.as_str() {
            "placed" => Ok(Self::Placed),
            "notplaced" | "unplaced" => Ok(Self::NotPlaced),
            "inprocess" | "inprogress" => Ok(Self::InProcess),
            _ => Err(UnknownStatus(raw.to_string())),
        }
    }
}

// Serialized with the dashboard labels so JSON exports read the same as the UI.
impl Serialize for PlacementStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for PlacementStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// One student's placement outcome as exported by the placement cell.
///
/// `company`, `role` and a positive `salary` only make sense for placed
/// students, but consumers never rely on that: every metric filters on status
/// and non-empty fields itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentRecord {
    pub id: String,
    pub name: String,
    pub status: PlacementStatus,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub salary: f64,
    #[serde(default)]
    pub domain: String,
    #[serde(default)]
    pub skillset: IndexSet<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub joining_date: Option<NaiveDate>,
}

impl StudentRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, status: PlacementStatus) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            status,
            company: String::new(),
            role: String::new(),
            salary: 0.0,
            domain: String::new(),
            skillset: IndexSet::new(),
            joining_date: None,
        }
    }

    pub fn with_placement(
        mut self,
        company: impl Into<String>,
        role: impl Into<String>,
        salary: f64,
    ) -> Self {
        self.company = company.into();
        self.role = role.into();
        self.salary = salary;
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = domain.into();
        self
    }

    pub fn with_skills<I, S>(mut self, skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skillset = skills.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_joining_date(mut self, date: NaiveDate) -> Self {
        self.joining_date = Some(date);
        self
    }

    /// Placed with a named employer; the only records that count toward company metrics.
    pub fn placed_company(&self) -> Option<&str> {
        if self.status.is_placed() && !self.company.is_empty() {
            Some(&self.company)
        } else {
            None
        }
    }

    /// Salary of a placed student, when one was reported.
    pub fn placed_salary(&self) -> Option<f64> {
        (self.status.is_placed() && self.salary > 0.0).then_some(self.salary)
    }

    /// True when placement-only fields are filled in for a student who is not placed.
    pub fn has_placement_mismatch(&self) -> bool {
        !self.status.is_placed()
            && (!self.company.is_empty() || !self.role.is_empty() || self.salary > 0.0)
    }
}
