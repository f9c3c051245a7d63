pub mod cohort_file;
pub mod report_file;

pub use cohort_file::FileCohortSource;
pub use report_file::FileResultSink;
