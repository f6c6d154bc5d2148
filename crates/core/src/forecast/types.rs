use chrono::NaiveDate;
use serde::{ser::SerializeStruct, Deserialize, Serialize, Serializer};

use crate::repository::Record;

use super::celsius_to_fahrenheit;

/// A single day's weather forecast.
///
/// The Fahrenheit temperature is never stored; it is derived from
/// `temperature_c` on demand and on serialization.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastRecord {
    pub date: NaiveDate,
    pub temperature_c: i32,
    #[serde(default)]
    pub summary: Option<String>,
}

impl ForecastRecord {
    /// Creates a forecast without a summary.
    pub fn new(date: NaiveDate, temperature_c: i32) -> Self {
        Self {
            date,
            temperature_c,
            summary: None,
        }
    }

    /// Sets the summary for this forecast.
    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    /// Temperature in Fahrenheit, derived from the Celsius reading.
    pub fn temperature_f(&self) -> i32 {
        celsius_to_fahrenheit(self.temperature_c)
    }
}

impl Record for ForecastRecord {
    const NAME: &'static str = "WeatherForecast";
}

impl Serialize for ForecastRecord {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("ForecastRecord", 4)?;
        state.serialize_field("date", &self.date)?;
        state.serialize_field("temperatureC", &self.temperature_c)?;
        state.serialize_field("temperatureF", &self.temperature_f())?;
        state.serialize_field("summary", &self.summary)?;
        state.end()
    }
}
