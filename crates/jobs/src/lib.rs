pub mod evaluation;
pub mod runner;

pub use evaluation::EvaluationJob;
pub use runner::JobRunner;
