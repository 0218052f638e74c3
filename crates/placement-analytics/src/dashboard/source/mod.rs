mod mock;
mod normalizer;
mod parser;

pub use mock::MockDirectory;

use super::directory::DepartmentDirectory;
use super::domain::{StudentRecord, UnknownStatus};
use indexmap::IndexMap;
use normalizer::clean_text;
use std::io::Read;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum RecordSourceError {
    #[error("failed to read placement records: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid placement CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("invalid placement JSON data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("line {line}: {source}")]
    InvalidStatus { line: u64, source: UnknownStatus },
    #[error("line {line}: salary '{value}' is not a non-negative amount")]
    InvalidSalary { line: u64, value: String },
    #[error("line {line}: joining date '{value}' is not YYYY-MM-DD")]
    InvalidDate { line: u64, value: String },
    #[error("line {line}: missing {field}")]
    MissingField { line: u64, field: &'static str },
    #[error("department {department}, student {id}: salary must be a non-negative amount")]
    NegativeSalary { department: String, id: String },
    #[error("department {department}, record {position}: missing {field}")]
    MissingRecordField {
        department: String,
        position: usize,
        field: &'static str,
    },
    #[error("records listed under an empty department name")]
    UnnamedDepartment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    /// One row per student with a `department` column.
    Csv,
    /// An object mapping department name to an array of records.
    Json,
}

impl RecordFormat {
    /// JSON for `.json` files, CSV for everything else.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Csv,
        }
    }
}

pub struct RecordImporter;

impl RecordImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<DepartmentDirectory, RecordSourceError> {
        let path = path.as_ref();
        let format = RecordFormat::for_path(path);
        let file = std::fs::File::open(path)?;
        let directory = Self::from_reader(file, format)?;
        tracing::info!(
            path = %path.display(),
            departments = directory.len(),
            students = directory.total_students(),
            "loaded placement records"
        );
        Ok(directory)
    }

    pub fn from_reader<R: Read>(
        reader: R,
        format: RecordFormat,
    ) -> Result<DepartmentDirectory, RecordSourceError> {
        let directory = match format {
            RecordFormat::Csv => {
                let mut directory = DepartmentDirectory::new();
                for row in parser::parse_rows(reader)? {
                    directory.push(row.department, row.record);
                }
                directory
            }
            RecordFormat::Json => {
                let departments: IndexMap<String, Vec<StudentRecord>> =
                    serde_json::from_reader(reader)?;
                normalize_json_departments(departments)?
            }
        };

        for (department, records) in directory.iter() {
            records
                .iter()
                .filter(|record| record.has_placement_mismatch())
                .for_each(|record| warn_mismatch(department, record));
        }

        Ok(directory)
    }
}

/// Applies the CSV row rules to JSON input: cleaned text, named departments,
/// non-empty ids and non-negative salaries. Positions are 1-based per department.
fn normalize_json_departments(
    departments: IndexMap<String, Vec<StudentRecord>>,
) -> Result<DepartmentDirectory, RecordSourceError> {
    let mut grouped: IndexMap<String, Vec<StudentRecord>> = IndexMap::new();

    for (raw_department, records) in departments {
        let department = clean_text(&raw_department);
        if department.is_empty() {
            return Err(RecordSourceError::UnnamedDepartment);
        }

        let records = records
            .into_iter()
            .enumerate()
            .map(|(index, record)| normalize_json_record(&department, index + 1, record))
            .collect::<Result<Vec<_>, _>>()?;
        grouped.entry(department).or_default().extend(records);
    }

    let mut directory = DepartmentDirectory::new();
    for (department, records) in grouped {
        directory.insert(department, records);
    }
    Ok(directory)
}

fn normalize_json_record(
    department: &str,
    position: usize,
    mut record: StudentRecord,
) -> Result<StudentRecord, RecordSourceError> {
    record.id = clean_text(&record.id);
    if record.id.is_empty() {
        return Err(RecordSourceError::MissingRecordField {
            department: department.to_string(),
            position,
            field: "id",
        });
    }

    if !(record.salary.is_finite() && record.salary >= 0.0) {
        return Err(RecordSourceError::NegativeSalary {
            department: department.to_string(),
            id: record.id,
        });
    }

    record.name = clean_text(&record.name);
    record.company = clean_text(&record.company);
    record.role = clean_text(&record.role);
    record.domain = clean_text(&record.domain);
    record.skillset = record
        .skillset
        .iter()
        .map(|skill| clean_text(skill))
        .filter(|skill| !skill.is_empty())
        .collect();

    Ok(record)
}

fn warn_mismatch(department: &str, record: &StudentRecord) {
    tracing::warn!(
        department,
        id = %record.id,
        status = %record.status,
        "placement details recorded for a student who is not placed"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::domain::PlacementStatus;
    use std::io::Cursor;

    #[test]
    fn csv_rows_group_into_departments() {
        let csv = "department,id,name,status,company,role,salary,domain,skillset,joining_date\n\
MECH,MECH-1,Student 1,Placed,Infosys,Business Analyst,65000,IoT,Java,2024-02-10\n\
CIVIL,CIVIL-1,Student 1,In Process,,,,AR/VR,,\n\
MECH,MECH-2,Student 2,Not Placed,,,,IoT,SQL,\n";

        let directory =
            RecordImporter::from_reader(Cursor::new(csv), RecordFormat::Csv).expect("import");
        assert_eq!(
            directory.departments().collect::<Vec<_>>(),
            vec!["MECH", "CIVIL"]
        );
        assert_eq!(directory.records("MECH").map(|records| records.len()), Some(2));
    }

    #[test]
    fn json_maps_departments_to_records() {
        let json = r#"{
            "CSE": [
                {"id": "CSE-1", "name": "Student 1", "status": "Placed", "company": "Google",
                 "role": "Software Engineer", "salary": 150000, "domain": "AI/ML",
                 "skillset": ["Python", "Python", "AWS"], "joiningDate": "2024-06-01"},
                {"id": "CSE-2", "name": "Student 2", "status": "In Process", "domain": "IoT"}
            ],
            "ECE": []
        }"#;

        let directory =
            RecordImporter::from_reader(Cursor::new(json), RecordFormat::Json).expect("import");
        let records = directory.records("CSE").expect("cse present");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].skillset.len(), 2);
        assert_eq!(records[1].status, PlacementStatus::InProcess);
        assert!(records[1].company.is_empty());
        assert_eq!(directory.records("ECE").map(<[StudentRecord]>::len), Some(0));
    }

    #[test]
    fn json_rejects_negative_salary() {
        let json = r#"{"CSE": [{"id": "CSE-9", "name": "X", "status": "Placed", "salary": -1}]}"#;
        let error = RecordImporter::from_reader(Cursor::new(json), RecordFormat::Json)
            .expect_err("negative salary rejected");
        assert!(matches!(error, RecordSourceError::NegativeSalary { ref id, .. } if id == "CSE-9"));
    }

    #[test]
    fn json_rejects_blank_ids_with_department_and_position() {
        let json = r#"{"CSE": [
            {"id": "CSE-1", "name": "A", "status": "Placed", "company": "IBM"},
            {"id": "  ", "name": "B", "status": "Placed", "company": "TCS"}
        ]}"#;
        let error = RecordImporter::from_reader(Cursor::new(json), RecordFormat::Json)
            .expect_err("blank id rejected");
        match error {
            RecordSourceError::MissingRecordField {
                department,
                position,
                field,
            } => {
                assert_eq!(department, "CSE");
                assert_eq!(position, 2);
                assert_eq!(field, "id");
            }
            other => panic!("expected missing id, got {other:?}"),
        }
    }

    #[test]
    fn json_rejects_blank_department_names() {
        let json = r#"{" ": [{"id": "X-1", "name": "C", "status": "Not Placed"}]}"#;
        let error = RecordImporter::from_reader(Cursor::new(json), RecordFormat::Json)
            .expect_err("blank department rejected");
        assert!(matches!(error, RecordSourceError::UnnamedDepartment));
    }

    #[test]
    fn json_text_is_cleaned_like_csv_cells() {
        let json = r#"{" CSE ": [
            {"id": " CSE-1 ", "name": "Asha  K", "status": "Placed",
             "company": "\ufeffTech   Mahindra", "role": " SDE ", "domain": "AI/ML ",
             "skillset": [" Python", "", "Python "]}
        ], "CSE": [{"id": "CSE-2", "name": "Bala", "status": "Not Placed"}]}"#;
        let directory =
            RecordImporter::from_reader(Cursor::new(json), RecordFormat::Json).expect("import");

        assert_eq!(directory.departments().collect::<Vec<_>>(), vec!["CSE"]);
        let records = directory.records("CSE").expect("cse present");
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, "CSE-1");
        assert_eq!(records[0].name, "Asha K");
        assert_eq!(records[0].company, "Tech Mahindra");
        assert_eq!(records[0].role, "SDE");
        assert_eq!(records[0].domain, "AI/ML");
        assert_eq!(
            records[0].skillset.iter().collect::<Vec<_>>(),
            vec!["Python"]
        );
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(RecordFormat::for_path(Path::new("out/ece.JSON")), RecordFormat::Json);
        assert_eq!(RecordFormat::for_path(Path::new("ece.csv")), RecordFormat::Csv);
        assert_eq!(RecordFormat::for_path(Path::new("records")), RecordFormat::Csv);
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = RecordImporter::from_path("./does-not-exist.csv").expect_err("io error");
        match error {
            RecordSourceError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
