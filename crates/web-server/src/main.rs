use tracing_subscriber::EnvFilter;

// This main function is the entry point when running `cargo run -p web-server`.
// It loads the settings and hands over to the crate's `run_server`.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let settings = configuration::load_config(None)?;

    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref(), &settings.logging.level))
        .init();
    tracing::debug!(?settings, "Configuration loaded.");

    web_server::run_server(&settings).await
}

/// `RUST_LOG` when it parses, otherwise the configured level.
fn log_filter(rust_log: Option<&str>, level: &str) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_is_the_fallback() {
        assert_eq!(log_filter(None, "warn").to_string(), "warn");
        assert_eq!(log_filter(Some("web_server=trace"), "warn").to_string(), "web_server=trace");
    }
}
