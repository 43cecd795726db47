use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

/// Used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "info,skip_hire_selector=debug";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Installs the global `fmt` subscriber. A second call is a no-op.
pub fn init_tracing() {
    let fmt_layer = tracing_subscriber::fmt::layer().with_target(true);

    if let Err(err) = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt_layer)
        .try_init()
    {
        eprintln!("tracing already initialised: {err}");
    }
}
