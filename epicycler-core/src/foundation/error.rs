/// Convenience result type used across Epicycler.
pub type EpicycleResult<T> = Result<T, EpicycleError>;

/// Top-level error taxonomy used by pipeline APIs.
#[derive(thiserror::Error, Debug)]
pub enum EpicycleError {
    /// Invalid user-provided input (e.g. a non-positive resample spacing).
    #[error("validation error: {0}")]
    Validation(String),

    /// Degenerate spectrum input (e.g. an empty point sequence fed to the DFT).
    #[error("spectrum error: {0}")]
    Spectrum(String),

    /// Wrapped lower-level error from dependencies.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl EpicycleError {
    /// Build an [`EpicycleError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build an [`EpicycleError::Spectrum`] value.
    pub fn spectrum(msg: impl Into<String>) -> Self {
        Self::Spectrum(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
