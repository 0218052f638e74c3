use crate::config::ConfigError;
use crate::dashboard::source::RecordSourceError;
use crate::dashboard::stats::DemandLoadError;
use crate::telemetry::TelemetryError;
use std::fmt;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Io(std::io::Error),
    Json(serde_json::Error),
    Records(RecordSourceError),
    Demand(DemandLoadError),
    UnknownDepartment {
        requested: String,
        available: Vec<String>,
    },
    NoDepartments,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
            AppError::Json(err) => write!(f, "json error: {}", err),
            AppError::Records(err) => write!(f, "record source error: {}", err),
            AppError::Demand(err) => write!(f, "demand source error: {}", err),
            AppError::UnknownDepartment {
                requested,
                available,
            } => write!(
                f,
                "unknown department '{}' (available: {})",
                requested,
                available.join(", ")
            ),
            AppError::NoDepartments => write!(f, "no departments found in placement records"),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Io(err) => Some(err),
            AppError::Json(err) => Some(err),
            AppError::Records(err) => Some(err),
            AppError::Demand(err) => Some(err),
            AppError::UnknownDepartment { .. } | AppError::NoDepartments => None,
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

impl From<RecordSourceError> for AppError {
    fn from(value: RecordSourceError) -> Self {
        Self::Records(value)
    }
}

impl From<DemandLoadError> for AppError {
    fn from(value: DemandLoadError) -> Self {
        Self::Demand(value)
    }
}
