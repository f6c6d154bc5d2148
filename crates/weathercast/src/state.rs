//! Application state shared by request handlers.

use std::sync::Arc;

use weathercast_core::registry::{Registry, Result};
use weathercast_core::repository::{Record, Repository};

use crate::{composition::build_registry, config::Config};

/// Shared application state.
///
/// Cloned for each request handler. Holds the frozen registry; repositories
/// themselves are built per request and never stored here.
#[derive(Clone)]
pub struct AppState {
    /// Repository bindings, resolved once per request.
    pub registry: Arc<Registry>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates state from an already-built registry.
    pub fn new(registry: Registry, config: Config) -> Self {
        Self {
            registry: Arc::new(registry),
            config: Arc::new(config),
        }
    }

    /// Runs the composition root for `config`.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let registry = build_registry(&config)?;
        Ok(Self::new(registry, config))
    }

    /// Resolves a fresh repository for the current unit of work.
    pub fn repository<T: Record>(&self) -> Result<Box<dyn Repository<T>>> {
        self.registry.resolve::<T>()
    }
}
