use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, FromRepr};

use crate::error::{InvalidStageSnafu, Result, SchedulerError};
use crate::parameters::{D_NEUTRAL, TARGET_RETENTION};

pub(crate) const MILLIS_PER_DAY: i64 = 86_400_000;

/// Lifecycle stage of an item. Persisted as its integer code.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, FromRepr, Serialize, Deserialize,
)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Stage {
    #[default]
    New = 0,
    Learning = 1,
    Review = 2,
    Relearning = 3,
}

impl TryFrom<u8> for Stage {
    type Error = SchedulerError;

    fn try_from(code: u8) -> Result<Self> {
        Stage::from_repr(code).ok_or_else(|| InvalidStageSnafu { code }.build())
    }
}

impl From<Stage> for u8 {
    fn from(stage: Stage) -> u8 {
        stage as u8
    }
}

/// Memory record for one learner-item pair.
///
/// The serialized field names follow the columns the flashcard app stores,
/// and every field falls back to the fresh-card value when missing.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MemoryState {
    #[serde(rename = "state")]
    pub stage: Stage,
    /// 1 (easy) to 5 (hard).
    pub difficulty: f32,
    /// Days; 0 until the item first graduates.
    pub stability: f32,
    pub retrievability: f32,
    #[serde(rename = "reps")]
    pub repetitions: u32,
    pub lapses: u32,
    /// Epoch milliseconds.
    #[serde(rename = "last_review")]
    pub last_reviewed_at: i64,
    /// Epoch milliseconds.
    #[serde(rename = "next_review")]
    pub next_review_at: i64,
    pub scheduled_days: u32,
}

impl Default for MemoryState {
    fn default() -> Self {
        Self {
            stage: Stage::New,
            difficulty: D_NEUTRAL,
            stability: 0.0,
            retrievability: 1.0,
            repetitions: 0,
            lapses: 0,
            last_reviewed_at: 0,
            next_review_at: 0,
            scheduled_days: 0,
        }
    }
}

impl MemoryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// New items are always due; everything else once its review time has
    /// passed.
    pub fn is_due(&self, now: i64) -> bool {
        self.stage == Stage::New || self.next_review_at <= now
    }
}

/// Exponential recall proxy used throughout the scheduler.
pub fn retrievability(stability: f32) -> f32 {
    TARGET_RETENTION.powf(stability.max(0.0))
}
