//! Spaced repetition review for vocabulary
//!
//! This module provides:
//! - The fixed Ebbinghaus interval ladder and date arithmetic
//! - Whole-store progress persistence behind a key-value seam
//! - Due-word selection and outcome recording
//! - Review sessions over a day's due words

pub mod algorithm;
pub mod clock;
pub mod models;
pub mod scheduler;
pub mod session;
pub mod storage;

pub use clock::{Clock, FixedClock, SystemClock};
pub use models::*;
pub use scheduler::{ReconcileMode, ReviewScheduler, ReviewService};
pub use session::ReviewSession;
pub use storage::{
    FileKeyValueStore, KeyValueStore, MemoryKeyValueStore, ProgressStorage, ProgressStorageError,
    PROGRESS_KEY,
};
