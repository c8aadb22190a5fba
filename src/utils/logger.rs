use tracing_subscriber::EnvFilter;

/// Directive used when `RUST_LOG` is unset or unparsable.
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "time_to_sound=debug,info"
    } else {
        "time_to_sound=info"
    }
}

/// Sends diagnostics to stderr; stdout belongs to the status lines and the bar.
pub fn init_cli_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .try_init();

    if installed.is_err() {
        tracing::debug!("A global subscriber was already set, keeping it");
    }
}
