use super::super::directory::DepartmentDirectory;
use super::super::domain::{PlacementStatus, StudentRecord};
use chrono::NaiveDate;
use indexmap::IndexSet;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DEPARTMENTS: &[&str] = &["CSE", "ECE", "MECH", "CIVIL", "EEE"];

const COMPANIES: &[&str] = &[
    "Google",
    "Microsoft",
    "Amazon",
    "Facebook",
    "Apple",
    "IBM",
    "Intel",
    "Infosys",
    "TCS",
    "Wipro",
    "Accenture",
    "Deloitte",
    "Cognizant",
    "HCL",
    "Tech Mahindra",
];

const ROLES: &[&str] = &[
    "Software Engineer",
    "Data Scientist",
    "Product Manager",
    "UI/UX Designer",
    "DevOps Engineer",
    "QA Engineer",
    "Network Engineer",
    "System Architect",
    "Business Analyst",
];

const DOMAINS: &[&str] = &[
    "Web Development",
    "Mobile Development",
    "Data Science",
    "Cloud Computing",
    "Cybersecurity",
    "AI/ML",
    "IoT",
    "Blockchain",
    "AR/VR",
];

const SKILLS: &[&str] = &[
    "JavaScript",
    "Python",
    "Java",
    "C++",
    "React",
    "Angular",
    "Vue",
    "Node.js",
    "Django",
    "Flask",
    "MongoDB",
    "SQL",
    "AWS",
    "Azure",
    "GCP",
    "Docker",
    "Kubernetes",
    "Git",
    "TensorFlow",
    "PyTorch",
];

const PLACEMENT_YEAR: i32 = 2024;

/// Demo dataset shaped like a placement cell's spreadsheet export.
pub struct MockDirectory;

impl MockDirectory {
    /// Five departments of 50–79 students each; the same seed gives the same data.
    pub fn generate(seed: u64) -> DepartmentDirectory {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut directory = DepartmentDirectory::new();

        for department in DEPARTMENTS {
            let student_count = rng.gen_range(50..80);
            let records = (1..=student_count)
                .map(|number| mock_student(&mut rng, department, number))
                .collect();
            directory.insert(*department, records);
        }

        tracing::debug!(
            seed,
            students = directory.total_students(),
            "generated mock placement records"
        );
        directory
    }
}

fn pick<'a>(rng: &mut StdRng, values: &[&'a str]) -> &'a str {
    values[rng.gen_range(0..values.len())]
}

fn mock_student(rng: &mut StdRng, department: &str, number: usize) -> StudentRecord {
    let company = pick(rng, COMPANIES);
    let role = pick(rng, ROLES);
    let domain = pick(rng, DOMAINS);
    let status = PlacementStatus::ordered()[rng.gen_range(0..3)];

    let skill_count = rng.gen_range(3..8);
    let mut skillset = IndexSet::with_capacity(skill_count);
    while skillset.len() < skill_count {
        skillset.insert(pick(rng, SKILLS).to_string());
    }

    let salary = f64::from(rng.gen_range(50..200) * 1000);
    let joining_month = rng.gen_range(1..=12);
    let joining_day = rng.gen_range(1..=28);

    let mut record = StudentRecord::new(
        format!("{department}-{number}"),
        format!("Student {number}"),
        status,
    )
    .with_domain(domain);
    record.skillset = skillset;

    if status.is_placed() {
        record = record.with_placement(company, role, salary);
        record.joining_date = NaiveDate::from_ymd_opt(PLACEMENT_YEAR, joining_month, joining_day);
    }

    record
}
