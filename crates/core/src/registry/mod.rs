//! Composition of decorated repositories.
//!
//! A [`Registry`] maps each element type to exactly one construction rule.
//! Every rule builds the base repository and wraps it in a
//! [`LoggingRepository`](crate::repository::LoggingRepository), so callers
//! only ever receive the decorated capability.

mod bindings;
mod error;
mod http_mapping;

pub use bindings::{Registry, RegistryBuilder};
pub use error::{RegistryError, Result};
pub use http_mapping::registry_error_to_status_code;
