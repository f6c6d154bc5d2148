//! Tracing subscriber setup.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset or cannot be parsed.
const DEFAULT_FILTER: &str = "weathercast=debug,weathercast_core=info,tower_http=debug";

/// Repository call lines are process output and stay on under any filter.
const REPOSITORY_CALLS: &str = "weathercast_core::repository::logging=info";

/// Builds the log filter from `RUST_LOG`-style directives.
///
/// Falls back to [`DEFAULT_FILTER`] when `directives` is missing or invalid,
/// then re-enables repository call lines on top of whatever was chosen.
pub fn env_filter(directives: Option<&str>) -> Result<EnvFilter> {
    let filter = directives
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER));

    Ok(filter.add_directive(REPOSITORY_CALLS.parse()?))
}

/// Installs the global subscriber, writing to stdout.
pub fn init() -> Result<()> {
    let directives = std::env::var("RUST_LOG").ok();

    tracing_subscriber::registry()
        .with(env_filter(directives.as_deref())?)
        .with(tracing_subscriber::fmt::layer())
        .init();

    Ok(())
}
