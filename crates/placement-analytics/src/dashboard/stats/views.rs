use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompanyCount {
    pub name: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DomainCount {
    pub domain: String,
    pub count: usize,
}

/// Supply of a skill among students against (external or simulated) market demand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkillGap {
    pub skill: String,
    pub supply: usize,
    pub demand: u32,
    /// `demand - supply`; the ranking key.
    pub gap: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentStats {
    pub total_students: usize,
    pub placed_students: usize,
    pub placement_percentage: f64,
    pub average_salary: f64,
    pub highest_salary: f64,
    pub top_companies: Vec<CompanyCount>,
    pub skill_gaps: Vec<SkillGap>,
    pub domain_distribution: Vec<DomainCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KpiCard {
    pub title: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanySalaryEntry {
    pub company: String,
    pub placed: usize,
    pub average_salary_lakhs: f64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanyShare {
    pub name: String,
    pub count: usize,
    pub is_others: bool,
}
