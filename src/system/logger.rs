use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Checked before `RUST_LOG`.
const LOG_ENV: &str = "LOADKIT_LOG";

const fn default_directives(verbose: bool) -> &'static str {
    if verbose { "loadkit=debug,info" } else { "info" }
}

/// Picks the filter from the first log variable that is set. A directive
/// string that fails to parse falls back to the default level.
fn log_filter(directives: Option<&str>, verbose: bool) -> EnvFilter {
    let fallback = || EnvFilter::new(default_directives(verbose));
    directives.map_or_else(fallback, |value| {
        EnvFilter::try_new(value).unwrap_or_else(|err| {
            eprintln!("Ignoring invalid log filter '{}': {}", value, err);
            fallback()
        })
    })
}

/// Installs the global subscriber. Logs go to stderr so command output on
/// stdout stays machine-readable.
pub(crate) fn init_logging(verbose: bool, no_color: bool) {
    let directives = std::env::var(LOG_ENV)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok();
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(log_filter(directives.as_deref(), verbose))
        .with_ansi(!no_color)
        .with_writer(std::io::stderr)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
