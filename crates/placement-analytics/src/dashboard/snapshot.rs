use super::domain::StudentRecord;
use super::flow::{build_flow, FlowGraph};
use super::hierarchy::{build_hierarchy, HierarchyNode};
use super::network::{build_network, NetworkGraph};
use super::stats::{
    company_salary_breakdown, company_share, compute_stats, kpi_cards, CompanySalaryEntry,
    CompanyShare, DemandSource, DepartmentStats, KpiCard,
};
use serde::Serialize;

/// Companies shown individually in the share chart before the rest fold into "Others".
pub const COMPANY_SHARE_SLICES: usize = 5;

/// Every projection the dashboard renders for one department.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentDashboard {
    pub department: String,
    pub stats: DepartmentStats,
    pub kpis: Vec<KpiCard>,
    pub company_salaries: Vec<CompanySalaryEntry>,
    pub company_share: Vec<CompanyShare>,
    pub domain_hierarchy: HierarchyNode,
    pub recruiter_network: NetworkGraph,
    pub student_flow: FlowGraph,
}

impl DepartmentDashboard {
    pub fn build<D>(department: &str, records: &[StudentRecord], demand: &D) -> Self
    where
        D: DemandSource + ?Sized,
    {
        let stats = compute_stats(records, demand);
        let kpis = kpi_cards(&stats);
        let company_share = company_share(&stats.top_companies, COMPANY_SHARE_SLICES);

        tracing::debug!(
            department,
            students = stats.total_students,
            placed = stats.placed_students,
            "built department dashboard"
        );

        Self {
            department: department.to_string(),
            kpis,
            company_salaries: company_salary_breakdown(records),
            company_share,
            domain_hierarchy: build_hierarchy(records),
            recruiter_network: build_network(records),
            student_flow: build_flow(records),
            stats,
        }
    }
}
