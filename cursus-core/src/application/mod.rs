// cursus-core/src/application/mod.rs

pub mod evaluation;

// --- RE-EXPORTS (FACADE PATTERN) ---
// `use cursus_core::application::{evaluate_cohort, run_evaluation};`

pub use evaluation::{evaluate_cohort, run_evaluation, summarize};
