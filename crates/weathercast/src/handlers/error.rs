use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use weathercast_core::registry::{registry_error_to_status_code, RegistryError};

/// Application error type that wraps `anyhow::Error`.
///
/// Registry errors keep their mapped status code; anything else is a 500.
pub struct AppError(pub anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = if let Some(registry_error) = self.0.downcast_ref::<RegistryError>() {
            let code = registry_error_to_status_code(registry_error);
            StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        } else {
            StatusCode::INTERNAL_SERVER_ERROR
        };

        tracing::error!(error = %self.0, status = %status_code, "Request failed");

        (status_code, self.0.to_string()).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_error_uses_mapped_status() {
        let response = AppError::from(RegistryError::Unbound { element: "Widget" }).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_other_errors_are_internal() {
        let response = AppError(anyhow::anyhow!("boom")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
