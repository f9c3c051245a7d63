pub mod cohort;
pub mod error;
pub mod grading;

// Handy re-exports to simplify imports elsewhere
pub use error::{ConfigError, DomainError};
