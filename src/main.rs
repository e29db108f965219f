use anyhow::Context;
use clap::{Parser, Subcommand};
use configuration::Settings;
use core_types::YearRange;
use dashboard::Dashboard;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;

mod logging;
mod summary;

/// The entry point for the Paddock Formula 1 analytics dashboard.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load PADDOCK__* overrides from a .env file, if there is one.
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let mut settings = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    apply_overrides(&mut settings, &cli);

    let _guard = logging::init(&settings.logging);
    log_startup(&settings, &cli.command);

    match cli.command {
        Commands::Serve(_) => web_server::run_server(&settings).await,
        Commands::Summary(args) => {
            let store = data_store::load_from_dir(&settings.data.directory).with_context(|| {
                format!(
                    "Failed to load race data from {}",
                    settings.data.directory.display()
                )
            })?;
            let dashboard = Dashboard::new(Arc::new(store), settings.dashboard.clone());

            let default = dashboard.default_years();
            let years = YearRange::checked(
                args.from.unwrap_or(default.from),
                args.to.unwrap_or(default.to),
            )?;
            tracing::info!(%years, "Printing season summary.");
            summary::print_summary(&dashboard, years);
            Ok(())
        }
    }
}

/// Command-line flags win over the configuration file and environment.
fn apply_overrides(settings: &mut Settings, cli: &Cli) {
    if let Some(directory) = &cli.data_dir {
        settings.data.directory = directory.clone();
    }
    if let Commands::Serve(args) = &cli.command {
        if let Some(host) = args.host {
            settings.server.host = host;
        }
        if let Some(port) = args.port {
            settings.server.port = port;
        }
    }
}

/// Logs the effective settings and the chosen command. Call after `logging::init`.
fn log_startup(settings: &Settings, command: &Commands) {
    tracing::debug!(?settings, "Configuration loaded.");
    let data = settings.data.directory.display();
    match command {
        Commands::Serve(_) => tracing::info!(
            addr = %settings.server.socket_addr(),
            %data,
            "Starting dashboard server."
        ),
        Commands::Summary(args) => tracing::info!(
            from = ?args.from,
            to = ?args.to,
            %data,
            "Building season summary."
        ),
    }
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Explore historical Formula 1 results by driver, constructor and circuit.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding the source CSV files; overrides `data.directory`.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Load the dataset and serve the dashboard API.
    Serve(ServeArgs),
    /// Print the headline numbers and leaderboards for a range of seasons.
    Summary(SummaryArgs),
}

#[derive(Parser)]
struct ServeArgs {
    /// Address to bind; overrides `server.host`.
    #[arg(long)]
    host: Option<IpAddr>,

    /// Port to listen on; overrides `server.port`.
    #[arg(long)]
    port: Option<u16>,
}

#[derive(Parser)]
struct SummaryArgs {
    /// First season to include (defaults to the dashboard's initial range).
    #[arg(long)]
    from: Option<i32>,

    /// Last season to include.
    #[arg(long)]
    to: Option<i32>,
}
