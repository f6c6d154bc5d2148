mod conversions;
mod mock_data;
mod types;

pub use conversions::celsius_to_fahrenheit;
pub use mock_data::{generate_forecasts, FORECAST_DAYS, SUMMARIES};
pub use types::ForecastRecord;
