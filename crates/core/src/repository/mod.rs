//! The repository capability and its implementations.
//!
//! [`SampleRepository`] produces data; [`LoggingRepository`] wraps any other
//! implementation and records each call before delegating to it.

mod logging;
mod sample;
mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use logging::LoggingRepository;
pub use sample::{local_today, SampleRepository};
pub use traits::{Labeled, Record, Repository};
