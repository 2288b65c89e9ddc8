/// Configure tracing once at application startup for the entire process.
///
/// Verbosity follows `RUST_LOG` (default `info`). Output goes to stderr so it
/// never interleaves with the dashboard drawn on stdout:
///
/// ```bash
/// RUST_LOG=debug cargo run                         # every actor request
/// RUST_LOG=user_dashboard::seeder=debug cargo run  # just the seeder
/// ```
pub fn setup_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_timer(tracing_subscriber::fmt::time::uptime())
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
