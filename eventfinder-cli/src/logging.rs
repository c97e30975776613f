use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Install the tracing subscriber. Logs go to stderr so they never mix with
/// command output.
///
/// Filter comes from `RUST_LOG` (default `warn`). Set
/// `EVENTFINDER_LOG_FORMAT=json` for JSON lines.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let json = std::env::var("EVENTFINDER_LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let result = if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().compact().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(err) = result {
        eprintln!("tracing init skipped: {err}");
    }
}
