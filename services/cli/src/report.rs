use crate::infra::DataSources;
use clap::Args;
use placement_analytics::dashboard::stats::format_inr;
use placement_analytics::dashboard::{
    filter_and_sort, DepartmentDashboard, FlowLayer, NodeKind, SortDirection, SortKey,
};
use placement_analytics::error::AppError;

#[derive(Args, Debug, Default)]
pub(crate) struct ReportArgs {
    /// Department to report on (defaults to the first one loaded)
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Emit the full dashboard snapshot as JSON
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct StudentsArgs {
    /// Department to list (defaults to the first one loaded)
    #[arg(long)]
    pub(crate) department: Option<String>,
    /// Case-insensitive match on name, company, role, domain or status
    #[arg(long, default_value = "")]
    pub(crate) search: String,
    /// Column to sort by: name, company, role, domain, status or salary
    #[arg(long)]
    pub(crate) sort: Option<SortKey>,
    /// Sort in descending order
    #[arg(long)]
    pub(crate) descending: bool,
    /// Show at most this many rows
    #[arg(long)]
    pub(crate) limit: Option<usize>,
}

pub(crate) fn run_departments(sources: &DataSources) -> Result<(), AppError> {
    let directory = &sources.directory;
    println!(
        "Departments from {} ({} students)",
        sources.origin,
        directory.total_students()
    );
    for (name, records) in directory.iter() {
        let placed = records
            .iter()
            .filter(|record| record.status.is_placed())
            .count();
        println!("- {name}: {} students, {placed} placed", records.len());
    }
    Ok(())
}

pub(crate) fn run_report(args: ReportArgs, sources: &DataSources) -> Result<(), AppError> {
    let (department, records) = sources.department(args.department.as_deref())?;
    let dashboard = DepartmentDashboard::build(department, records, sources.demand.as_ref());

    if args.json {
        println!("{}", serde_json::to_string_pretty(&dashboard)?);
    } else {
        println!("Source: {}", sources.origin);
        render_dashboard(&dashboard);
    }
    Ok(())
}

pub(crate) fn run_students(args: StudentsArgs, sources: &DataSources) -> Result<(), AppError> {
    let StudentsArgs {
        department,
        search,
        sort,
        descending,
        limit,
    } = args;

    let (department, records) = sources.department(department.as_deref())?;
    let direction = if descending {
        SortDirection::Descending
    } else {
        SortDirection::Ascending
    };
    let rows = filter_and_sort(records, &search, sort, direction);
    let shown = visible_rows(rows.len(), limit);

    println!("{department} students");
    println!(
        "{:<10} {:<16} {:<12} {:<16} {:<20} {:<20} {:>12}",
        "ID", "Name", "Status", "Company", "Role", "Domain", "Salary"
    );
    for record in rows.iter().take(shown) {
        let salary = record
            .placed_salary()
            .map(format_inr)
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<10} {:<16} {:<12} {:<16} {:<20} {:<20} {:>12}",
            record.id,
            record.name,
            record.status.label(),
            or_dash(&record.company),
            or_dash(&record.role),
            or_dash(&record.domain),
            salary
        );
    }
    println!(
        "Showing {shown} of {} matching students ({} total)",
        rows.len(),
        records.len()
    );
    Ok(())
}

/// Rows printed for `--limit`; a limit past the match count shows every match.
fn visible_rows(matched: usize, limit: Option<usize>) -> usize {
    limit.map_or(matched, |limit| limit.min(matched))
}

fn or_dash(value: &str) -> &str {
    if value.is_empty() {
        "-"
    } else {
        value
    }
}

pub(crate) fn render_dashboard(dashboard: &DepartmentDashboard) {
    let stats = &dashboard.stats;

    println!("Placement report: {}", dashboard.department);
    for card in &dashboard.kpis {
        println!("- {}: {}", card.title, card.value);
    }
    println!("- Highest Salary: {}", format_inr(stats.highest_salary));

    println!("\nTop companies");
    if dashboard.company_salaries.is_empty() {
        println!("  (no placements recorded)");
    }
    for entry in &dashboard.company_salaries {
        println!(
            "  - {}: {} placed | avg {:.2} LPA",
            entry.company, entry.placed, entry.average_salary_lakhs
        );
    }

    if !dashboard.company_share.is_empty() {
        let shares: Vec<String> = dashboard
            .company_share
            .iter()
            .map(|share| format!("{} {}", share.name, share.count))
            .collect();
        println!("Company share: {}", shares.join(" | "));
    }

    println!("\nSkill gaps (demand vs supply)");
    for gap in &stats.skill_gaps {
        println!(
            "  - {}: demand {} | supply {} | gap {:+}",
            gap.skill, gap.demand, gap.supply, gap.gap
        );
    }

    println!("\nDomain distribution");
    for entry in &stats.domain_distribution {
        println!("  - {}: {}", entry.domain, entry.count);
    }

    let hierarchy = &dashboard.domain_hierarchy;
    let roles: usize = hierarchy
        .children
        .iter()
        .map(|domain| domain.children.len())
        .sum();
    let network = &dashboard.recruiter_network;
    let flow = &dashboard.student_flow;

    println!("\nCharts");
    println!(
        "- Domain hierarchy: {} domains, {} roles, {} students",
        hierarchy.children.len(),
        roles,
        hierarchy.total()
    );
    println!(
        "- Recruiter network: {} students, {} companies, {} links",
        network.nodes_of(NodeKind::Student).count(),
        network.nodes_of(NodeKind::Company).count(),
        network.links.len()
    );
    println!(
        "- Student flow: {} statuses, {} domains, {} companies, {} links",
        flow.layer(FlowLayer::Status).count(),
        flow.layer(FlowLayer::Domain).count(),
        flow.layer(FlowLayer::Company).count(),
        flow.links.len()
    );
}
