use axum::{extract::State, Json};
use weathercast_core::forecast::ForecastRecord;

use crate::{handlers::AppError, state::AppState};

/// GET /weatherforecast - Mock forecast for the next five days.
///
/// Resolves a fresh repository from the registry for this request; the
/// logging decorator writes one call line before the list is produced.
#[axum::debug_handler]
pub async fn get_weather_forecast(
    State(state): State<AppState>,
) -> Result<Json<Vec<ForecastRecord>>, AppError> {
    let mut repository = state.repository::<ForecastRecord>()?;
    let forecasts = repository.list();

    tracing::debug!(
        route = "GetWeatherForecast",
        count = forecasts.len(),
        "Listed forecasts"
    );

    Ok(Json(forecasts))
}
