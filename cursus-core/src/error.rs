// cursus-core/src/error.rs

use crate::domain::error::{ConfigError, DomainError};
use crate::infrastructure::error::InfrastructureError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum CursusError {
    // --- DOMAIN ERRORS (grading rules, config shape, score ranges) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Domain(#[from] DomainError),

    // --- INFRASTRUCTURE ERRORS (IO, Parsing) ---
    #[error(transparent)]
    #[diagnostic(transparent)]
    Infrastructure(#[from] InfrastructureError),
}

// Shortcut so `GradingEngine::new(config)?` works in use cases returning CursusError
impl From<ConfigError> for CursusError {
    fn from(err: ConfigError) -> Self {
        CursusError::Domain(DomainError::Config(err))
    }
}

impl From<std::io::Error> for CursusError {
    fn from(err: std::io::Error) -> Self {
        CursusError::Infrastructure(InfrastructureError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversions_land_in_their_layer() {
        let err: CursusError = ConfigError::InvalidScale(0.0).into();
        assert!(matches!(
            err,
            CursusError::Domain(DomainError::Config(ConfigError::InvalidScale(_)))
        ));

        let err: CursusError = std::io::Error::other("disk").into();
        match err {
            CursusError::Infrastructure(InfrastructureError::Io(_)) => {}
            CursusError::Infrastructure(other) => panic!("unexpected infrastructure error: {other}"),
            CursusError::Domain(other) => panic!("unexpected domain error: {other}"),
        }
    }
}
