// cursus-core/src/domain/grading/mod.rs

pub mod config;
pub mod decision;
pub mod engine;
pub mod presets;
pub mod rounding;
pub mod subject;

// Re-exports
pub use config::{
    CompensationPolicy, CompensationScope, GradingConfig, MentionBand, MissingComponentPolicy,
    ResolvedWeights, WeightPair,
};
pub use decision::{Decision, NOT_EVALUATED};
pub use engine::{GradingEngine, StudentResult};
pub use presets::Preset;
pub use rounding::{RoundingMode, round_to};
pub use subject::{SubjectGrade, SubjectResult};
