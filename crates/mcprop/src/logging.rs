use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Build the default filter directive for a log level.
///
/// The same level applies to this crate and to `mcprop_core`.
pub fn default_filter(level: &str) -> String {
    format!("mcprop={level},mcprop_core={level}")
}

/// Initialize logging to stderr.
///
/// Stdout is reserved for results, so diagnostics (including the core's
/// non-finite sample warnings) go to stderr. The log level can be controlled
/// via the `level` parameter or the `RUST_LOG` environment variable.
pub fn init_logging(level: &str) -> color_eyre::Result<()> {
    // Build filter from RUST_LOG env var or use provided level
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(level)));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init()?;

    tracing::debug!("mcprop logging initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter_parses() {
        let directive = default_filter("debug");
        assert_eq!(directive, "mcprop=debug,mcprop_core=debug");
        assert!(EnvFilter::try_new(&directive).is_ok());
    }
}
