//! Ebbinghaus-style vocabulary review
//!
//! The [`review`] module schedules words along a fixed interval ladder and
//! persists progress; [`quiz`] builds multiple-choice questions from the
//! [`catalog`]. Front ends talk to the scheduler through
//! [`review::ReviewService`].

pub mod catalog;
pub mod config;
pub mod quiz;
pub mod review;

pub use catalog::{Catalog, WordEntry};
pub use config::AppConfig;
pub use review::{ReviewScheduler, ReviewService, ReviewSession};
