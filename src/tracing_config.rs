use std::{env, error::Error, io};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const FORMAT_VAR: &str = "CLOCKFACE_LOG_FORMAT";

/// Output style of the log layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    fn parse(value: Option<&str>) -> Self {
        match value.map(str::trim) {
            Some(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Installs the global subscriber for the clockface binary.
///
/// `RUST_LOG` selects levels (default `info`). `CLOCKFACE_LOG_FORMAT=json`
/// switches to JSON lines. Logs go to stderr; stdout is reserved for
/// rendered output.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn init() -> Result<(), Box<dyn Error>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);
    let layer = fmt::layer().with_writer(io::stderr).with_target(true);

    match LogFormat::parse(env::var(FORMAT_VAR).ok().as_deref()) {
        LogFormat::Json => registry.with(layer.json()).try_init()?,
        LogFormat::Pretty => registry.with(layer.pretty()).try_init()?,
    }

    Ok(())
}
