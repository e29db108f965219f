use crate::error::ConfigError;
use std::path::Path;

// Declare the modules that make up this crate.
pub mod error;
pub mod settings;

// Re-export the core types to provide a clean public API.
pub use settings::{DashboardSettings, DataSettings, LoggingSettings, ServerSettings, Settings};

/// Prefix for environment overrides, e.g. `PADDOCK__SERVER__PORT=9000`.
const ENV_PREFIX: &str = "PADDOCK";

/// Loads the application settings.
///
/// Sources are layered: built-in defaults, then the TOML file at `path`
/// (or an optional `config.toml` in the working directory when no path is
/// given), then `PADDOCK__*` environment variables.
pub fn load_config(path: Option<&Path>) -> Result<Settings, ConfigError> {
    let file = match path {
        Some(path) => config::File::from(path).required(true),
        None => config::File::with_name("config.toml").required(false),
    };

    let builder = config::Config::builder()
        .add_source(file)
        .add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let settings = builder.try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

/// Parses settings from a TOML document, without consulting the environment.
pub fn parse_config(toml: &str) -> Result<Settings, ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from_str(toml, config::FileFormat::Toml))
        .build()?
        .try_deserialize::<Settings>()?;
    validate(&settings)?;
    Ok(settings)
}

fn validate(settings: &Settings) -> Result<(), ConfigError> {
    let dashboard = &settings.dashboard;
    if dashboard.leaderboard_size == 0 || dashboard.circuit_leaderboard_size == 0 {
        return Err(ConfigError::ValidationError(
            "dashboard leaderboard sizes must be greater than zero".to_string(),
        ));
    }
    if dashboard.lookback_years < 0 {
        return Err(ConfigError::ValidationError(format!(
            "dashboard.lookback_years must not be negative, got {}",
            dashboard.lookback_years
        )));
    }
    Ok(())
}
