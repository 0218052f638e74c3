use crate::cli::SourceArgs;
use placement_analytics::config::AppConfig;
use placement_analytics::dashboard::{
    DemandSource, DemandTable, DepartmentDirectory, MockDirectory, RecordImporter,
    SimulatedDemand, StudentRecord,
};
use placement_analytics::error::AppError;
use std::path::PathBuf;

/// Where the loaded records came from, for report headers.
#[derive(Debug, Clone)]
pub(crate) enum RecordOrigin {
    File(PathBuf),
    Mock { seed: u64 },
}

impl std::fmt::Display for RecordOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RecordOrigin::File(path) => write!(f, "{}", path.display()),
            RecordOrigin::Mock { seed } => write!(f, "mock data (seed {seed})"),
        }
    }
}

pub(crate) struct DataSources {
    pub(crate) directory: DepartmentDirectory,
    pub(crate) demand: Box<dyn DemandSource>,
    pub(crate) origin: RecordOrigin,
}

impl DataSources {
    /// Flags win over configuration; without a records file the mock directory is used.
    pub(crate) fn load(args: &SourceArgs, config: &AppConfig) -> Result<Self, AppError> {
        let seed = args.seed.unwrap_or(config.data.demand_seed);
        let records_path = args
            .data
            .clone()
            .or_else(|| config.data.records_path.clone());

        let (directory, origin) = match records_path {
            Some(path) => (RecordImporter::from_path(&path)?, RecordOrigin::File(path)),
            None => {
                tracing::info!(seed, "no placement records configured, using mock data");
                (MockDirectory::generate(seed), RecordOrigin::Mock { seed })
            }
        };

        Ok(Self {
            directory,
            demand: load_demand(args, config, seed)?,
            origin,
        })
    }

    /// Resolves `requested` case-insensitively, or the first department when absent.
    pub(crate) fn department(
        &self,
        requested: Option<&str>,
    ) -> Result<(&str, &[StudentRecord]), AppError> {
        let name = match requested {
            Some(requested) => self
                .directory
                .departments()
                .find(|name| name.eq_ignore_ascii_case(requested.trim()))
                .ok_or_else(|| AppError::UnknownDepartment {
                    requested: requested.to_string(),
                    available: self.directory.departments().map(str::to_string).collect(),
                })?,
            None => self
                .directory
                .default_department()
                .ok_or(AppError::NoDepartments)?,
        };

        let records = self.directory.records(name).unwrap_or_default();
        Ok((name, records))
    }
}

pub(crate) fn load_demand(
    args: &SourceArgs,
    config: &AppConfig,
    seed: u64,
) -> Result<Box<dyn DemandSource>, AppError> {
    let demand_path = args
        .demand
        .clone()
        .or_else(|| config.data.demand_path.clone());

    match demand_path {
        Some(path) => {
            let table = DemandTable::from_path(&path)?;
            tracing::info!(path = %path.display(), skills = table.len(), "loaded skill demand");
            Ok(Box::new(table))
        }
        None => {
            tracing::debug!(seed, "using simulated skill demand");
            Ok(Box::new(SimulatedDemand::new(seed)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use placement_analytics::config::{AppEnvironment, DataConfig, TelemetryConfig};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const RECORDS_HEADER: &str =
        "department,id,name,status,company,role,salary,domain,skillset,joining_date";

    fn config(records_path: Option<PathBuf>, demand_path: Option<PathBuf>) -> AppConfig {
        AppConfig {
            environment: AppEnvironment::Test,
            data: DataConfig {
                records_path,
                demand_path,
                demand_seed: 2024,
            },
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
        }
    }

    fn write_temp(suffix: &str, contents: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(suffix)
            .tempfile()
            .expect("create temp file");
        file.write_all(contents.as_bytes()).expect("write temp file");
        file
    }

    fn records_file(department: &str) -> NamedTempFile {
        write_temp(
            ".csv",
            &format!(
                "{RECORDS_HEADER}\n{department},{department}-1,Asha,Placed,IBM,SDE,90000,IoT,Python,\n"
            ),
        )
    }

    fn sources_with(directory: DepartmentDirectory) -> DataSources {
        DataSources {
            directory,
            demand: Box::new(SimulatedDemand::new(1)),
            origin: RecordOrigin::Mock { seed: 1 },
        }
    }

    #[test]
    fn data_flag_wins_over_configured_path() {
        let flagged = records_file("ECE");
        let configured = records_file("MECH");
        let args = SourceArgs {
            data: Some(flagged.path().to_path_buf()),
            ..SourceArgs::default()
        };

        let app_config = config(Some(configured.path().to_path_buf()), None);
        let sources = DataSources::load(&args, &app_config).expect("sources load");
        assert_eq!(sources.directory.departments().collect::<Vec<_>>(), vec!["ECE"]);
        assert!(matches!(sources.origin, RecordOrigin::File(ref path) if path == flagged.path()));
    }

    #[test]
    fn configured_path_used_without_flag() {
        let configured = records_file("MECH");
        let sources = DataSources::load(
            &SourceArgs::default(),
            &config(Some(configured.path().to_path_buf()), None),
        )
        .expect("sources load");
        assert_eq!(sources.directory.departments().collect::<Vec<_>>(), vec!["MECH"]);
    }

    #[test]
    fn mock_directory_used_when_nothing_configured() {
        let args = SourceArgs {
            seed: Some(7),
            ..SourceArgs::default()
        };
        let sources = DataSources::load(&args, &config(None, None)).expect("sources load");

        assert_eq!(sources.directory, MockDirectory::generate(7));
        assert!(matches!(sources.origin, RecordOrigin::Mock { seed: 7 }));
        assert_eq!(sources.origin.to_string(), "mock data (seed 7)");
    }

    #[test]
    fn missing_records_file_is_an_error() {
        let args = SourceArgs {
            data: Some(PathBuf::from("./no-such-placements.csv")),
            ..SourceArgs::default()
        };
        let error = DataSources::load(&args, &config(None, None))
            .err()
            .expect("missing file rejected");
        assert!(matches!(error, AppError::Records(_)));
    }

    #[test]
    fn department_lookup_ignores_case_and_defaults_to_first() {
        let sources = sources_with(MockDirectory::generate(3));

        let (name, records) = sources.department(Some(" cse ")).expect("cse found");
        assert_eq!(name, "CSE");
        assert!(!records.is_empty());

        let (name, _) = sources.department(None).expect("default department");
        assert_eq!(name, "CSE");
    }

    #[test]
    fn unknown_department_lists_available_ones() {
        let sources = sources_with(MockDirectory::generate(3));
        let error = sources.department(Some("AERO")).expect_err("unknown department");
        match error {
            AppError::UnknownDepartment {
                requested,
                available,
            } => {
                assert_eq!(requested, "AERO");
                assert_eq!(available, vec!["CSE", "ECE", "MECH", "CIVIL", "EEE"]);
            }
            other => panic!("expected unknown department, got {other}"),
        }
    }

    #[test]
    fn empty_directory_has_no_default_department() {
        let sources = sources_with(DepartmentDirectory::new());
        let error = sources.department(None).expect_err("no departments");
        assert!(matches!(error, AppError::NoDepartments));
    }

    #[test]
    fn demand_flag_wins_over_config_then_simulation() {
        let flagged = write_temp(".csv", "skill,demand\nPython,40\n");
        let configured = write_temp(".csv", "skill,demand\nPython,5\nSQL,9\n");
        let app_config = config(None, Some(configured.path().to_path_buf()));

        let args = SourceArgs {
            demand: Some(flagged.path().to_path_buf()),
            ..SourceArgs::default()
        };
        let demand = load_demand(&args, &app_config, 11).expect("flag demand");
        assert_eq!(demand.demand("Python"), 40);
        assert_eq!(demand.demand("SQL"), 0);

        let demand =
            load_demand(&SourceArgs::default(), &app_config, 11).expect("configured demand");
        assert_eq!(demand.demand("Python"), 5);
        assert_eq!(demand.demand("SQL"), 9);

        let simulated = SimulatedDemand::new(11);
        let demand = load_demand(&SourceArgs::default(), &config(None, None), 11)
            .expect("simulated demand");
        for skill in ["Python", "SQL", "Docker"] {
            assert_eq!(demand.demand(skill), simulated.demand(skill));
        }
    }
}
