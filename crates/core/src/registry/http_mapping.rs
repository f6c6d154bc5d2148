//! Pure functions for mapping registry errors to HTTP status codes.

use super::RegistryError;

/// Maps a [`RegistryError`] to an HTTP status code.
///
/// Both variants describe a wiring mistake in the composition root rather
/// than anything the client sent, so both map to 500.
///
/// # Examples
///
/// ```
/// use weathercast_core::registry::{registry_error_to_status_code, RegistryError};
///
/// let error = RegistryError::Unbound { element: "WeatherForecast" };
/// assert_eq!(registry_error_to_status_code(&error), 500);
/// ```
pub fn registry_error_to_status_code(error: &RegistryError) -> u16 {
    match error {
        RegistryError::AlreadyBound { .. } => 500,
        RegistryError::Unbound { .. } => 500,
    }
}
