pub mod demand;
mod presentation;
mod summary;
pub mod views;

pub use demand::{DemandLoadError, DemandSource, DemandTable, SimulatedDemand};
pub use presentation::{
    company_salary_breakdown, company_share, format_inr, kpi_cards, OTHERS_LABEL, RUPEES_PER_LAKH,
};
pub use summary::{compute_stats, SKILL_GAP_LIMIT, TOP_COMPANY_LIMIT};
pub use views::{
    CompanyCount, CompanySalaryEntry, CompanyShare, DepartmentStats, DomainCount, KpiCard,
    SkillGap,
};
