use super::super::domain::StudentRecord;
use super::demand::DemandSource;
use super::views::{CompanyCount, DepartmentStats, DomainCount, SkillGap};
use indexmap::IndexMap;

pub const TOP_COMPANY_LIMIT: usize = 10;
pub const SKILL_GAP_LIMIT: usize = 8;

/// Summary statistics for one department's records.
///
/// Total over any input: an empty slice yields zero counts and empty rankings.
/// Rankings are stable, so equal counts keep the order in which the key was
/// first seen in `records`.
pub fn compute_stats<D>(records: &[StudentRecord], demand: &D) -> DepartmentStats
where
    D: DemandSource + ?Sized,
{
    let total_students = records.len();
    let placed_students = records
        .iter()
        .filter(|record| record.status.is_placed())
        .count();
    let placement_percentage = if total_students > 0 {
        placed_students as f64 / total_students as f64 * 100.0
    } else {
        0.0
    };

    let salaries: Vec<f64> = records.iter().filter_map(StudentRecord::placed_salary).collect();
    let average_salary = if salaries.is_empty() {
        0.0
    } else {
        salaries.iter().sum::<f64>() / salaries.len() as f64
    };
    let highest_salary = salaries.iter().copied().fold(0.0, f64::max);

    let top_companies = rank_counts(
        count_by(records.iter().filter_map(StudentRecord::placed_company)),
        Some(TOP_COMPANY_LIMIT),
    )
    .into_iter()
    .map(|(name, count)| CompanyCount {
        name: name.to_string(),
        count,
    })
    .collect();

    let domain_distribution = rank_counts(
        count_by(
            records
                .iter()
                .map(|record| record.domain.as_str())
                .filter(|domain| !domain.is_empty()),
        ),
        None,
    )
    .into_iter()
    .map(|(domain, count)| DomainCount {
        domain: domain.to_string(),
        count,
    })
    .collect();

    let skill_gaps = skill_gaps(records, demand);

    DepartmentStats {
        total_students,
        placed_students,
        placement_percentage,
        average_salary,
        highest_salary,
        top_companies,
        skill_gaps,
        domain_distribution,
    }
}

fn skill_gaps<D>(records: &[StudentRecord], demand: &D) -> Vec<SkillGap>
where
    D: DemandSource + ?Sized,
{
    let supply = count_by(
        records
            .iter()
            .flat_map(|record| record.skillset.iter().map(String::as_str)),
    );

    let mut gaps: Vec<SkillGap> = supply
        .into_iter()
        .map(|(skill, supply)| {
            let demand = demand.demand(skill);
            SkillGap {
                skill: skill.to_string(),
                supply,
                demand,
                gap: i64::from(demand) - supply as i64,
            }
        })
        .collect();

    gaps.sort_by(|a, b| b.gap.cmp(&a.gap));
    gaps.truncate(SKILL_GAP_LIMIT);
    gaps
}

/// Occurrence count per key, in first-seen key order.
pub(crate) fn count_by<'a, I>(keys: I) -> IndexMap<&'a str, usize>
where
    I: IntoIterator<Item = &'a str>,
{
    keys.into_iter().fold(IndexMap::new(), |mut counts, key| {
        *counts.entry(key).or_insert(0) += 1;
        counts
    })
}

/// Descending by count; ties stay in first-seen order.
pub(crate) fn rank_counts<'a>(
    counts: IndexMap<&'a str, usize>,
    limit: Option<usize>,
) -> Vec<(&'a str, usize)> {
    let mut ranked: Vec<(&str, usize)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::super::demand::DemandTable;
    use super::*;
    use crate::dashboard::domain::PlacementStatus;

    fn placed(id: &str, company: &str, salary: f64) -> StudentRecord {
        StudentRecord::new(id, format!("Student {id}"), PlacementStatus::Placed)
            .with_placement(company, "Software Engineer", salary)
            .with_domain("Web Development")
    }

    #[test]
    fn worked_example_from_placement_cell() {
        let records = vec![
            placed("1", "Google", 100_000.0),
            placed("2", "Google", 200_000.0),
            StudentRecord::new("3", "Student 3", PlacementStatus::NotPlaced),
        ];

        let stats = compute_stats(&records, &DemandTable::default());

        assert_eq!(stats.total_students, 3);
        assert_eq!(stats.placed_students, 2);
        assert!((stats.placement_percentage - 66.666_666).abs() < 0.001);
        assert_eq!(stats.average_salary, 150_000.0);
        assert_eq!(stats.highest_salary, 200_000.0);
        assert_eq!(
            stats.top_companies,
            vec![CompanyCount {
                name: "Google".to_string(),
                count: 2
            }]
        );
    }

    #[test]
    fn empty_input_yields_zeroes() {
        let stats = compute_stats(&[], &DemandTable::default());
        assert_eq!(stats.total_students, 0);
        assert_eq!(stats.placed_students, 0);
        assert_eq!(stats.placement_percentage, 0.0);
        assert_eq!(stats.average_salary, 0.0);
        assert_eq!(stats.highest_salary, 0.0);
        assert!(stats.top_companies.is_empty());
        assert!(stats.domain_distribution.is_empty());
        assert!(stats.skill_gaps.is_empty());
    }

    #[test]
    fn salary_stats_ignore_unpaid_and_unplaced_records() {
        let records = vec![
            placed("1", "TCS", 0.0),
            StudentRecord::new("2", "Student 2", PlacementStatus::InProcess)
                .with_placement("", "", 900_000.0),
        ];
        let stats = compute_stats(&records, &DemandTable::default());
        assert_eq!(stats.average_salary, 0.0);
        assert_eq!(stats.highest_salary, 0.0);
        assert_eq!(stats.placed_students, 1);
    }

    #[test]
    fn top_companies_break_ties_by_first_appearance_and_cap_at_ten() {
        let mut records = Vec::new();
        for (index, company) in [
            "Wipro", "HCL", "Intel", "IBM", "Apple", "Amazon", "Meta", "Google", "TCS", "Infosys",
            "Cognizant", "Deloitte",
        ]
        .iter()
        .enumerate()
        {
            records.push(placed(&format!("a{index}"), company, 50_000.0));
        }
        records.push(placed("b1", "Deloitte", 50_000.0));

        let stats = compute_stats(&records, &DemandTable::default());
        let names: Vec<&str> = stats
            .top_companies
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();

        assert_eq!(names.len(), TOP_COMPANY_LIMIT);
        assert_eq!(names[0], "Deloitte");
        assert_eq!(&names[1..4], &["Wipro", "HCL", "Intel"]);
        assert!(!names.contains(&"Cognizant"));
    }

    #[test]
    fn placed_records_without_company_are_not_ranked() {
        let records = vec![placed("1", "", 70_000.0), placed("2", "Accenture", 70_000.0)];
        let stats = compute_stats(&records, &DemandTable::default());
        assert_eq!(stats.top_companies.len(), 1);
        assert_eq!(stats.top_companies[0].name, "Accenture");
    }

    #[test]
    fn domain_distribution_counts_every_status() {
        let records = vec![
            placed("1", "IBM", 1.0),
            StudentRecord::new("2", "Student 2", PlacementStatus::NotPlaced).with_domain("IoT"),
            StudentRecord::new("3", "Student 3", PlacementStatus::InProcess).with_domain("IoT"),
            StudentRecord::new("4", "Student 4", PlacementStatus::InProcess),
        ];
        let stats = compute_stats(&records, &DemandTable::default());
        assert_eq!(
            stats.domain_distribution,
            vec![
                DomainCount {
                    domain: "IoT".to_string(),
                    count: 2
                },
                DomainCount {
                    domain: "Web Development".to_string(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn skill_gaps_rank_by_unmet_demand() {
        let records = vec![
            StudentRecord::new("1", "A", PlacementStatus::NotPlaced).with_skills(["Java", "SQL"]),
            StudentRecord::new("2", "B", PlacementStatus::Placed).with_skills(["Java", "AWS"]),
        ];
        let demand: DemandTable = [("Java", 10), ("SQL", 3), ("AWS", 30)].into_iter().collect();

        let stats = compute_stats(&records, &demand);
        let ranked: Vec<(&str, usize, u32, i64)> = stats
            .skill_gaps
            .iter()
            .map(|gap| (gap.skill.as_str(), gap.supply, gap.demand, gap.gap))
            .collect();

        assert_eq!(
            ranked,
            vec![("AWS", 1, 30, 29), ("Java", 2, 10, 8), ("SQL", 1, 3, 2)]
        );
    }

    #[test]
    fn skill_gaps_keep_at_most_eight_skills() {
        let skills: Vec<String> = (0..12).map(|index| format!("skill-{index}")).collect();
        let records =
            vec![StudentRecord::new("1", "A", PlacementStatus::NotPlaced).with_skills(skills)];
        let stats = compute_stats(&records, &DemandTable::default());
        assert_eq!(stats.skill_gaps.len(), SKILL_GAP_LIMIT);
        assert_eq!(stats.skill_gaps[0].skill, "skill-0");
    }
}
