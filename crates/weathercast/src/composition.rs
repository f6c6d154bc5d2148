//! Composition root.
//!
//! The only place that picks concrete repositories. Everything else asks the
//! [`Registry`] for a `Repository<T>` and never sees what sits underneath
//! the logging decorator.

use anyhow::Result;
use weathercast_core::{
    forecast::ForecastRecord,
    registry::Registry,
    repository::SampleRepository,
};

use crate::config::Config;

/// Build the registry with every repository the server exposes.
pub fn build_registry(config: &Config) -> Result<Registry> {
    let seed = config.forecast_seed;

    let registry = Registry::builder()
        .bind_decorated::<ForecastRecord, _, _>(move || match seed {
            Some(seed) => SampleRepository::seeded(seed),
            None => SampleRepository::from_entropy(),
        })?
        .build();

    tracing::debug!(?registry, seeded = seed.is_some(), "Registry built");
    Ok(registry)
}
