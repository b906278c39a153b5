use tracing_subscriber::EnvFilter;

/// Initialise the global `tracing` subscriber.
///
/// Respects `RUST_LOG`. Otherwise logs `flaskcli` at debug level when
/// `verbose` is set and only warnings when it is not. Logs go to stderr so
/// they never mix with child process output captured from stdout.
pub fn init_tracing(verbose: bool) {
    let fallback = if verbose { "flaskcli=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
