use std::env;
use std::fmt;
use std::path::PathBuf;

const DEFAULT_DEMAND_SEED: u64 = 2024;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub data: DataConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let records_path = non_empty_var("PLACEMENT_DATA_PATH").map(PathBuf::from);
        let demand_path = non_empty_var("PLACEMENT_DEMAND_PATH").map(PathBuf::from);
        let demand_seed = match non_empty_var("PLACEMENT_DEMAND_SEED") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidSeed { value: raw })?,
            None => DEFAULT_DEMAND_SEED,
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            data: DataConfig {
                records_path,
                demand_path,
                demand_seed,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Where placement records and skill demand figures come from.
#[derive(Debug, Clone)]
pub struct DataConfig {
    /// CSV or JSON export of student records. Mock data is generated when unset.
    pub records_path: Option<PathBuf>,
    /// `skill,demand` CSV. Simulated demand is used when unset.
    pub demand_path: Option<PathBuf>,
    pub demand_seed: u64,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidSeed { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSeed { value } => write!(
                f,
                "PLACEMENT_DEMAND_SEED must be an unsigned 64-bit integer (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
