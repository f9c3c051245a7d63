// cursus-core/src/ports/mod.rs

pub mod grades;

pub use grades::{CohortSource, ResultSink};
