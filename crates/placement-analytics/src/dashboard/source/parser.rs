use super::super::domain::{PlacementStatus, StudentRecord};
use super::normalizer::{clean_text, split_skills};
use super::RecordSourceError;
use chrono::{DateTime, NaiveDate};
use serde::{Deserialize, Deserializer};
use std::io::Read;

/// A parsed CSV row, tagged with its department.
#[derive(Debug)]
pub(crate) struct DepartmentRow {
    pub(crate) department: String,
    pub(crate) record: StudentRecord,
}

pub(crate) fn parse_rows<R: Read>(reader: R) -> Result<Vec<DepartmentRow>, RecordSourceError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = csv_reader.headers()?.clone();
    let mut rows = Vec::new();

    for result in csv_reader.records() {
        let raw = result?;
        let line = raw.position().map(|position| position.line()).unwrap_or(0);
        let row: CsvRow = raw.deserialize(Some(&headers))?;
        rows.push(row.into_department_row(line)?);
    }

    Ok(rows)
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    department: String,
    id: String,
    name: String,
    status: String,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    company: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    role: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    salary: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    domain: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    skillset: Option<String>,
    #[serde(default, deserialize_with = "empty_string_as_none")]
    joining_date: Option<String>,
}

impl CsvRow {
    fn into_department_row(self, line: u64) -> Result<DepartmentRow, RecordSourceError> {
        let department = clean_text(&self.department);
        if department.is_empty() {
            return Err(RecordSourceError::MissingField {
                line,
                field: "department",
            });
        }

        let id = clean_text(&self.id);
        if id.is_empty() {
            return Err(RecordSourceError::MissingField { line, field: "id" });
        }

        let status: PlacementStatus = self
            .status
            .parse()
            .map_err(|source| RecordSourceError::InvalidStatus { line, source })?;

        let salary = match self.salary.as_deref() {
            Some(raw) => parse_salary(raw).ok_or_else(|| RecordSourceError::InvalidSalary {
                line,
                value: raw.to_string(),
            })?,
            None => 0.0,
        };

        let joining_date = match self.joining_date.as_deref() {
            Some(raw) => Some(parse_date(raw).ok_or_else(|| {
                RecordSourceError::InvalidDate {
                    line,
                    value: raw.to_string(),
                }
            })?),
            None => None,
        };

        let record = StudentRecord {
            id,
            name: clean_text(&self.name),
            status,
            company: self.company.as_deref().map(clean_text).unwrap_or_default(),
            role: self.role.as_deref().map(clean_text).unwrap_or_default(),
            salary,
            domain: self.domain.as_deref().map(clean_text).unwrap_or_default(),
            skillset: self
                .skillset
                .as_deref()
                .map(|cell| split_skills(cell).collect())
                .unwrap_or_default(),
            joining_date,
        };

        Ok(DepartmentRow { department, record })
    }
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Non-negative, finite amount; thousands separators are tolerated.
pub(crate) fn parse_salary(value: &str) -> Option<f64> {
    let digits: String = value.chars().filter(|ch| *ch != ',' && *ch != '_').collect();
    digits
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|salary| salary.is_finite() && *salary >= 0.0)
}

/// Accepts `YYYY-MM-DD` or a full RFC 3339 timestamp.
pub(crate) fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }

    DateTime::parse_from_rfc3339(trimmed)
        .ok()
        .map(|dt| dt.naive_utc().date())
}
