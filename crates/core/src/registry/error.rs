use thiserror::Error;

/// Errors that can occur while binding or resolving repositories.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Repository<{element}> is already bound")]
    AlreadyBound { element: &'static str },
    #[error("No binding for Repository<{element}>")]
    Unbound { element: &'static str },
}

/// Result type for registry operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
