//! Mock forecast generation.
//!
//! Pure functions over an explicit random-number generator, so callers
//! decide whether results are reproducible (seeded) or not.

use chrono::{Duration, NaiveDate};
use rand::Rng;

use super::ForecastRecord;

/// Number of days a sample forecast covers.
pub const FORECAST_DAYS: u32 = 5;

/// Vocabulary sample summaries are drawn from.
pub const SUMMARIES: [&str; 10] = [
    "Freezing",
    "Bracing",
    "Chilly",
    "Cool",
    "Mild",
    "Warm",
    "Balmy",
    "Hot",
    "Sweltering",
    "Scorching",
];

/// Generate `count` forecasts for the days following `today`.
///
/// Record `i` (starting at 1) is dated `today + i` days, so every date is
/// strictly after `today`. Temperatures fall in `[-20, 55)` °C and each
/// summary is one of [`SUMMARIES`].
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use rand::{rngs::StdRng, SeedableRng};
/// use weathercast_core::forecast::generate_forecasts;
///
/// let mut rng = StdRng::seed_from_u64(7);
/// let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
/// let forecasts = generate_forecasts(&mut rng, today, 5);
///
/// assert_eq!(forecasts.len(), 5);
/// assert!(forecasts.iter().all(|f| f.date > today));
/// ```
pub fn generate_forecasts<R>(rng: &mut R, today: NaiveDate, count: u32) -> Vec<ForecastRecord>
where
    R: Rng + ?Sized,
{
    (1..=count)
        .map(|day| {
            let date = today + Duration::days(i64::from(day));
            let temperature_c = rng.random_range(-20..55);
            let summary = SUMMARIES[rng.random_range(0..SUMMARIES.len())];
            ForecastRecord::new(date, temperature_c).with_summary(summary)
        })
        .collect()
}
