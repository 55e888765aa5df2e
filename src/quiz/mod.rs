//! Multiple-choice quiz over catalog meanings

pub mod builder;
pub mod models;

pub use builder::{build_question, DISTRACTOR_COUNT};
pub use models::*;
