use log::debug;
use strum::Display;

use crate::convertor::from_legacy;
use crate::difficulty::next_difficulty;
use crate::error::Result;
use crate::interval::next_interval;
use crate::legacy::{LegacyConfig, LegacyRecord};
use crate::parameters::Parameters;
use crate::rating::Rating;
use crate::stability::{initial_stability, next_stability};
use crate::state::{MILLIS_PER_DAY, MemoryState, Stage, retrievability};

/// A record as found at the storage boundary. Its shape decides which
/// model schedules it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StoredRecord {
    Native(MemoryState),
    Legacy(LegacyRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum Strategy {
    Fsrs,
    Legacy,
}

impl Strategy {
    pub fn of(record: &StoredRecord) -> Self {
        match record {
            StoredRecord::Native(_) => Strategy::Fsrs,
            StoredRecord::Legacy(_) => Strategy::Legacy,
        }
    }
}

impl StoredRecord {
    pub fn strategy(&self) -> Strategy {
        Strategy::of(self)
    }

    pub fn is_due(&self, now: i64) -> bool {
        match self {
            StoredRecord::Native(state) => state.is_due(now),
            StoredRecord::Legacy(record) => record.is_due(now),
        }
    }

    /// Upgrades a legacy record to the memory-model shape.
    pub fn into_native(self) -> MemoryState {
        match self {
            StoredRecord::Native(state) => state,
            StoredRecord::Legacy(record) => from_legacy(&record),
        }
    }
}

impl From<MemoryState> for StoredRecord {
    fn from(state: MemoryState) -> Self {
        StoredRecord::Native(state)
    }
}

impl From<LegacyRecord> for StoredRecord {
    fn from(record: LegacyRecord) -> Self {
        StoredRecord::Legacy(record)
    }
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub struct ItemState {
    pub memory: MemoryState,
    /// Days until the item is due again.
    pub interval: u32,
}

/// Outcome of each of the four answers, for labelling the answer buttons.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NextStates {
    pub again: ItemState,
    pub hard: ItemState,
    pub good: ItemState,
    pub easy: ItemState,
}

impl NextStates {
    pub fn get(&self, rating: Rating) -> &ItemState {
        match rating {
            Rating::Again => &self.again,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        }
    }
}

/// Computes review transitions. Holds only configuration, so one instance
/// can be shared freely; callers must still serialize transitions on the
/// same record, or concurrent updates to it are lost.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Scheduler {
    parameters: Parameters,
    legacy: LegacyConfig,
}

impl Scheduler {
    pub fn new(parameters: Parameters) -> Result<Self> {
        parameters.validate()?;
        Ok(Self {
            parameters,
            legacy: LegacyConfig::default(),
        })
    }

    pub fn with_legacy_config(mut self, legacy: LegacyConfig) -> Result<Self> {
        legacy.validate()?;
        self.legacy = legacy;
        Ok(self)
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn legacy_config(&self) -> &LegacyConfig {
        &self.legacy
    }

    /// Applies one rating to `state` at `now` (epoch milliseconds).
    ///
    /// The due time saturates at `i64::MAX`, so for a `now` within
    /// `scheduled_days` of the end of the range it is no longer exactly
    /// `scheduled_days` after `last_reviewed_at`.
    pub fn next_state(&self, state: MemoryState, rating: Rating, now: i64) -> MemoryState {
        let w = &self.parameters.w;
        let repetitions = state.repetitions.saturating_add(1);
        let current_stability = if state.stability.is_finite() {
            state.stability.max(0.0)
        } else {
            0.0
        };

        let (stage, stability, lapses) = match state.stage {
            Stage::New if rating == Rating::Again => (Stage::Learning, 0.0, state.lapses),
            Stage::Learning | Stage::Relearning if rating == Rating::Again => {
                (state.stage, current_stability, state.lapses)
            }
            Stage::New | Stage::Learning | Stage::Relearning => {
                (Stage::Review, initial_stability(rating), state.lapses)
            }
            Stage::Review => {
                let stability = next_stability(
                    w,
                    current_stability,
                    state.difficulty,
                    rating,
                    repetitions,
                );
                if rating == Rating::Again {
                    (Stage::Relearning, stability, state.lapses.saturating_add(1))
                } else {
                    (Stage::Review, stability, state.lapses)
                }
            }
        };

        let scheduled_days = if rating.is_recalled() {
            next_interval(
                stability,
                self.parameters.request_retention,
                self.parameters.maximum_interval,
            )
        } else {
            0
        };

        let next = MemoryState {
            stage,
            difficulty: next_difficulty(w, state.difficulty, rating),
            stability,
            retrievability: retrievability(stability),
            repetitions,
            lapses,
            last_reviewed_at: now,
            next_review_at: now.saturating_add(scheduled_days as i64 * MILLIS_PER_DAY),
            scheduled_days,
        };
        debug!(
            "{rating}: {} -> {}, stability {} -> {}, due in {} days",
            state.stage, next.stage, state.stability, next.stability, next.scheduled_days
        );
        next
    }

    /// Parses the answer label and applies it. An unknown label leaves the
    /// caller's state untouched and yields [`crate::SchedulerError::InvalidRating`].
    pub fn review(&self, state: MemoryState, rating_label: &str, now: i64) -> Result<MemoryState> {
        let rating = Rating::from_label(rating_label)?;
        Ok(self.next_state(state, rating, now))
    }

    pub fn next_states(&self, state: MemoryState, now: i64) -> NextStates {
        let get_next_state = |rating| {
            let memory = self.next_state(state, rating, now);
            ItemState {
                memory,
                interval: memory.scheduled_days,
            }
        };
        NextStates {
            again: get_next_state(Rating::Again),
            hard: get_next_state(Rating::Hard),
            good: get_next_state(Rating::Good),
            easy: get_next_state(Rating::Easy),
        }
    }

    /// Schedules a stored record with the model matching its shape; the
    /// result keeps that shape.
    pub fn review_record(&self, record: StoredRecord, rating: Rating, now: i64) -> StoredRecord {
        match record {
            StoredRecord::Native(state) => StoredRecord::Native(self.next_state(state, rating, now)),
            StoredRecord::Legacy(record) => {
                StoredRecord::Legacy(self.legacy.next_record(record, rating, now))
            }
        }
    }
}
