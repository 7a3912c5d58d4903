/// Configures structured logging for the whole application.
///
/// Honors `RUST_LOG` for filtering and defaults to `info`:
///
/// ```text
/// RUST_LOG=debug cargo run    # Show all logs including channel traffic
/// RUST_LOG=info cargo run     # Show info logs only
/// RUST_LOG=warn cargo run     # Show warnings and errors only
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .compact()
        .init();
}
