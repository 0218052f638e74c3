use super::domain::StudentRecord;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Student records grouped by department, in the order departments were first seen.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DepartmentDirectory {
    departments: IndexMap<String, Vec<StudentRecord>>,
}

impl DepartmentDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, department: impl Into<String>, record: StudentRecord) {
        self.departments
            .entry(department.into())
            .or_default()
            .push(record);
    }

    /// Replaces any records already held for `department`.
    pub fn insert(&mut self, department: impl Into<String>, records: Vec<StudentRecord>) {
        self.departments.insert(department.into(), records);
    }

    pub fn departments(&self) -> impl Iterator<Item = &str> {
        self.departments.keys().map(String::as_str)
    }

    pub fn records(&self, department: &str) -> Option<&[StudentRecord]> {
        self.departments.get(department).map(Vec::as_slice)
    }

    /// The department a dashboard opens on: the first one loaded.
    pub fn default_department(&self) -> Option<&str> {
        self.departments.keys().next().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[StudentRecord])> {
        self.departments
            .iter()
            .map(|(name, records)| (name.as_str(), records.as_slice()))
    }

    pub fn total_students(&self) -> usize {
        self.departments.values().map(Vec::len).sum()
    }

    pub fn len(&self) -> usize {
        self.departments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.departments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::PlacementStatus;

    #[test]
    fn keeps_departments_in_first_seen_order() {
        let mut directory = DepartmentDirectory::new();
        directory.push("ECE", StudentRecord::new("ECE-1", "A", PlacementStatus::Placed));
        directory.push("CSE", StudentRecord::new("CSE-1", "B", PlacementStatus::NotPlaced));
        directory.push("ECE", StudentRecord::new("ECE-2", "C", PlacementStatus::InProcess));

        assert_eq!(directory.departments().collect::<Vec<_>>(), vec!["ECE", "CSE"]);
        assert_eq!(directory.default_department(), Some("ECE"));
        assert_eq!(directory.records("ECE").map(<[StudentRecord]>::len), Some(2));
        assert_eq!(directory.records("MECH"), None);
        assert_eq!(directory.total_students(), 3);
    }

    #[test]
    fn empty_directory_has_no_default() {
        let directory = DepartmentDirectory::new();
        assert!(directory.is_empty());
        assert_eq!(directory.default_department(), None);
    }
}
