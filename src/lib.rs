mod convertor;
mod difficulty;
mod error;
mod interval;
mod legacy;
mod parameters;
mod queue;
mod rating;
mod review;
mod scheduler;
mod stability;
mod state;
#[cfg(test)]
mod test_helpers;

pub use convertor::{from_legacy, to_legacy};
pub use difficulty::next_difficulty;
pub use error::{Result, SchedulerError};
pub use interval::next_interval;
pub use legacy::{DEFAULT_EASE, IntervalBounds, LegacyConfig, LegacyRecord, MAX_EASE, MIN_EASE};
pub use parameters::{
    DEFAULT_MAXIMUM_INTERVAL, DEFAULT_REQUEST_RETENTION, DEFAULT_WEIGHTS, Parameters, Weights,
};
pub use queue::{DEFAULT_REVIEW_LIMIT, Due, due_for_review};
pub use rating::Rating;
pub use review::{ReviewRequest, ReviewResponse, ReviewSession, SessionStats, ValidReview};
pub use scheduler::{ItemState, NextStates, Scheduler, Strategy, StoredRecord};
pub use stability::{initial_stability, next_stability};
pub use state::{MemoryState, Stage, retrievability};
