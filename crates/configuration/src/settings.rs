use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// The root configuration structure for the entire application.
///
/// Every section is optional; omitted keys fall back to the defaults below.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub data: DataSettings,
    pub server: ServerSettings,
    pub dashboard: DashboardSettings,
    pub logging: LoggingSettings,
}

/// Where the source CSV tables live.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    /// Directory holding `races.csv`, `results.csv`, `drivers.csv`,
    /// `constructors.csv` and `circuits.csv`.
    pub directory: PathBuf,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("data"),
        }
    }
}

/// HTTP listener settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: IpAddr,
    pub port: u16,
}

impl ServerSettings {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8050,
        }
    }
}

/// Defaults for the dashboard's filters and chart sizes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DashboardSettings {
    /// The default year range is `[max_year - lookback_years, max_year]`.
    pub lookback_years: i32,
    /// Number of entries in the season-wide leaderboards.
    pub leaderboard_size: usize,
    /// Number of entries in the per-circuit leaderboards.
    pub circuit_leaderboard_size: usize,
    pub default_drivers: Vec<String>,
    pub default_constructors: Vec<String>,
    pub default_circuit: Option<String>,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            lookback_years: 20,
            leaderboard_size: 15,
            circuit_leaderboard_size: 10,
            default_drivers: vec![
                "Lewis Hamilton".to_string(),
                "Max Verstappen".to_string(),
                "Michael Schumacher".to_string(),
            ],
            default_constructors: vec![
                "Ferrari".to_string(),
                "Mercedes".to_string(),
                "Red Bull".to_string(),
            ],
            default_circuit: Some("Autodromo Nazionale di Monza".to_string()),
        }
    }
}

/// Logging output. `RUST_LOG` takes precedence over `level` when set.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    /// When set, logs are also written to a daily rolling file in this directory.
    pub directory: Option<PathBuf>,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}
