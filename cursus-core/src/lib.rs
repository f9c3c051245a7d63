// cursus-core/src/lib.rs

// 1. Mandatory documentation for production code
#![allow(missing_docs)]

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports (Interfaces / Traits)
// Where grades come from and where results go.
pub mod ports;

// 2. Domain (Business core)
// Grading engine, configuration schema, rounding, mentions, decisions.
// Depends on NOTHING else (neither infra nor app).
pub mod domain;

// 3. Infrastructure (Adapters)
// YAML/JSON config loading, cohort files, atomic result files.
pub mod infrastructure;

// 4. Application (Use Cases)
// Cohort evaluation and summary statistics.
pub mod application;

// --- GLOBAL ERROR HANDLING ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
// use cursus_core::{CursusError, GradingEngine, GradingConfig};
pub use domain::grading::{Decision, GradingConfig, GradingEngine, StudentResult, SubjectGrade};
pub use error::CursusError;
