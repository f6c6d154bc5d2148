//! Sample repository backed by generated mock data.

use std::any::{Any, TypeId};

use chrono::{Local, NaiveDate};
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::forecast::{generate_forecasts, ForecastRecord, FORECAST_DAYS};

use super::{Labeled, Repository};

/// The current calendar date in the local timezone.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Repository that generates a fresh forecast on every call.
///
/// Only [`ForecastRecord`] has sample data. Listing any other element type
/// yields an empty vec and leaves the generator untouched.
pub struct SampleRepository<R = StdRng> {
    rng: R,
    clock: fn() -> NaiveDate,
}

impl SampleRepository<StdRng> {
    /// Creates a repository seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Creates a repository with a reproducible sequence.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> SampleRepository<R> {
    /// Creates a new sample repository drawing from `rng`.
    ///
    /// Dates are anchored on [`local_today`] unless replaced with
    /// [`with_clock`](Self::with_clock).
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            clock: local_today,
        }
    }

    /// Replaces the source of "today" (useful for testing).
    pub fn with_clock(mut self, clock: fn() -> NaiveDate) -> Self {
        self.clock = clock;
        self
    }
}

impl<R> Labeled for SampleRepository<R> {
    const LABEL: &'static str = "SampleRepository";
}

impl<T, R> Repository<T> for SampleRepository<R>
where
    T: 'static,
    R: Rng + Send,
{
    fn list(&mut self) -> Vec<T> {
        if TypeId::of::<T>() != TypeId::of::<ForecastRecord>() {
            return Vec::new();
        }

        let forecasts: Box<dyn Any> = Box::new(generate_forecasts(
            &mut self.rng,
            (self.clock)(),
            FORECAST_DAYS,
        ));

        forecasts
            .downcast::<Vec<T>>()
            .map(|forecasts| *forecasts)
            .unwrap_or_default()
    }
}
