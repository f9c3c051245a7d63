pub mod grading;

pub use crate::domain::grading::GradingConfig;
pub use grading::{apply_env_overrides, load_grading_config};
