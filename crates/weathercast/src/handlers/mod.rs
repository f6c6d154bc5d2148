pub mod error;
pub mod forecast;
pub mod health;

pub use error::AppError;
