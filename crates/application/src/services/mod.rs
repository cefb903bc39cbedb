pub mod membership_evaluator;

pub use membership_evaluator::{MembershipEvaluator, OwnerEvaluation};
