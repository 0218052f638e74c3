use super::super::domain::StudentRecord;
use super::summary::{count_by, rank_counts, TOP_COMPANY_LIMIT};
use super::views::{CompanyCount, CompanySalaryEntry, CompanyShare, DepartmentStats, KpiCard};
use indexmap::IndexMap;

pub const RUPEES_PER_LAKH: f64 = 100_000.0;
pub const OTHERS_LABEL: &str = "Others";

/// Rupee amount with Indian digit grouping and no fraction digits, e.g. `₹12,34,567`.
///
/// Rounds half away from zero; non-finite input renders as `₹0`.
pub fn format_inr(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let rounded = amount.abs().round();
    let digits = format!("{rounded:.0}");
    let sign = if amount < 0.0 && rounded > 0.0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(&digits))
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

pub fn kpi_cards(stats: &DepartmentStats) -> Vec<KpiCard> {
    vec![
        KpiCard {
            title: "Total Students",
            value: stats.total_students.to_string(),
        },
        KpiCard {
            title: "Placed Students",
            value: stats.placed_students.to_string(),
        },
        KpiCard {
            title: "Placement Rate",
            value: format!("{:.1}%", stats.placement_percentage),
        },
        KpiCard {
            title: "Average Salary",
            value: format_inr(stats.average_salary),
        },
    ]
}

/// Top companies by placements, each with the mean reported salary in lakhs.
pub fn company_salary_breakdown(records: &[StudentRecord]) -> Vec<CompanySalaryEntry> {
    let placements = rank_counts(
        count_by(records.iter().filter_map(StudentRecord::placed_company)),
        Some(TOP_COMPANY_LIMIT),
    );

    let salaries = records
        .iter()
        .filter_map(|record| Some((record.placed_company()?, record.placed_salary()?)))
        .fold(
            IndexMap::<&str, (f64, usize)>::new(),
            |mut totals, (company, salary)| {
                let entry = totals.entry(company).or_insert((0.0, 0));
                entry.0 += salary;
                entry.1 += 1;
                totals
            },
        );

    placements
        .into_iter()
        .map(|(company, placed)| {
            let average_salary_lakhs = match salaries.get(company) {
                Some((sum, count)) if *count > 0 => sum / *count as f64 / RUPEES_PER_LAKH,
                _ => 0.0,
            };
            CompanySalaryEntry {
                company: company.to_string(),
                placed,
                average_salary_lakhs,
            }
        })
        .collect()
}

/// The first `shown` ranked companies plus an "Others" slice holding the rest.
pub fn company_share(top_companies: &[CompanyCount], shown: usize) -> Vec<CompanyShare> {
    let total: usize = top_companies.iter().map(|company| company.count).sum();

    let mut shares: Vec<CompanyShare> = top_companies
        .iter()
        .take(shown)
        .map(|company| CompanyShare {
            name: company.name.clone(),
            count: company.count,
            is_others: false,
        })
        .collect();

    let displayed: usize = shares.iter().map(|share| share.count).sum();
    let others = total - displayed;
    if others > 0 {
        shares.push(CompanyShare {
            name: OTHERS_LABEL.to_string(),
            count: others,
            is_others: true,
        });
    }

    shares
}
