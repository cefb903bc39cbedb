//! Blockscope Application Layer
//!
//! Ports for every collaborator of the evaluation cycle, the membership
//! evaluator, and the use cases the job and the API drive.
pub mod ports;
pub mod services;
pub mod use_cases;
