use crate::config::TelemetryConfig;
use std::fmt;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
pub enum TelemetryError {
    /// `APP_LOG_LEVEL` is not a valid tracing filter directive.
    InvalidLogLevel { value: String, source: ParseError },
    /// A global subscriber was already installed, typically by an embedding host.
    AlreadyInstalled(Box<dyn std::error::Error + Send + Sync>),
}

impl fmt::Display for TelemetryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TelemetryError::InvalidLogLevel { value, .. } => write!(
                f,
                "APP_LOG_LEVEL '{}' is not a valid filter (try info, debug or placement_analytics=debug)",
                value
            ),
            TelemetryError::AlreadyInstalled(err) => {
                write!(f, "placement dashboard logging is already set up: {err}")
            }
        }
    }
}

impl std::error::Error for TelemetryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TelemetryError::InvalidLogLevel { source, .. } => Some(source),
            TelemetryError::AlreadyInstalled(err) => Some(&**err),
        }
    }
}

fn configured_filter(level: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_new(level.trim()).map_err(|source| TelemetryError::InvalidLogLevel {
        value: level.to_string(),
        source,
    })
}

/// Installs the global subscriber. `RUST_LOG` wins over the configured level.
///
/// Output goes to stderr so report text and JSON on stdout stay clean.
pub fn init(config: &TelemetryConfig) -> Result<(), TelemetryError> {
    let env_filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => configured_filter(&config.log_level)?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .with_ansi(false)
        .try_init()
        .map_err(TelemetryError::AlreadyInstalled)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_levels_and_crate_directives() {
        assert!(configured_filter("info").is_ok());
        assert!(configured_filter(" debug ").is_ok());
        assert!(configured_filter("warn,placement_analytics=trace").is_ok());
    }

    #[test]
    fn invalid_level_names_the_setting() {
        let error = configured_filter("placement=verbose").expect_err("invalid directive");
        assert!(matches!(
            error,
            TelemetryError::InvalidLogLevel { ref value, .. } if value == "placement=verbose"
        ));
        assert!(error.to_string().starts_with("APP_LOG_LEVEL 'placement=verbose'"));
    }
}
