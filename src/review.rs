use log::{info, warn};
use serde::{Deserialize, Serialize};
use snafu::OptionExt;

use crate::error::{MissingFieldSnafu, Result, SchedulerError};
use crate::rating::Rating;
use crate::scheduler::Scheduler;
use crate::state::MemoryState;

/// Body of a rating request. Every field is optional on the wire so that a missing one
/// can be reported by name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReviewRequest {
    pub record_id: Option<i64>,
    /// Answer label, e.g. `良好(C)`.
    pub difficulty: Option<String>,
    pub deck_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidReview {
    pub record_id: i64,
    pub rating: Rating,
    pub deck_id: i64,
}

impl ReviewRequest {
    /// Zero ids and blank labels count as missing.
    pub fn validate(&self) -> Result<ValidReview> {
        let record_id = self
            .record_id
            .filter(|&id| id != 0)
            .context(MissingFieldSnafu { field: "record_id" })?;
        let label = self
            .difficulty
            .as_deref()
            .filter(|label| !label.trim().is_empty())
            .context(MissingFieldSnafu {
                field: "difficulty",
            })?;
        let deck_id = self
            .deck_id
            .filter(|&id| id != 0)
            .context(MissingFieldSnafu { field: "deck_id" })?;
        Ok(ValidReview {
            record_id,
            rating: Rating::from_label(label)?,
            deck_id,
        })
    }
}

/// Answer to a rating request: the updated record, or `{"error": "..."}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ReviewResponse {
    // Listed first so that an error body is never read as a defaulted record.
    Error { error: String },
    Updated(MemoryState),
}

impl ReviewResponse {
    pub fn error(err: &SchedulerError) -> Self {
        ReviewResponse::Error {
            error: err.to_string(),
        }
    }
}

impl From<Result<MemoryState>> for ReviewResponse {
    fn from(result: Result<MemoryState>) -> Self {
        match result {
            Ok(state) => ReviewResponse::Updated(state),
            Err(err) => ReviewResponse::error(&err),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub reviewed: u32,
    pub rejected: u32,
    /// Reviews that demoted an item from REVIEW to RELEARNING.
    pub lapses: u32,
    /// Indexed by rating code minus one.
    pub ratings: [u32; 4],
}

impl SessionStats {
    pub fn count(&self, rating: Rating) -> u32 {
        self.ratings[rating as usize - 1]
    }
}

/// Per-session context for one study run: the scheduler in use plus the
/// running tallies the study screens display.
///
/// Loading and persisting the record stay with the caller, which must not
/// run two reviews of one record concurrently.
#[derive(Debug, Clone)]
pub struct ReviewSession<'a> {
    scheduler: &'a Scheduler,
    stats: SessionStats,
}

impl<'a> ReviewSession<'a> {
    pub fn new(scheduler: &'a Scheduler) -> Self {
        Self {
            scheduler,
            stats: SessionStats::default(),
        }
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Validates `request` and applies it to `state`, the record the caller
    /// loaded for `request.record_id`.
    pub fn apply(
        &mut self,
        request: &ReviewRequest,
        state: MemoryState,
        now: i64,
    ) -> Result<MemoryState> {
        let review = match request.validate() {
            Ok(review) => review,
            Err(err) => {
                warn!("rejected review request {request:?}: {err}");
                self.stats.rejected += 1;
                return Err(err);
            }
        };
        let next = self.scheduler.next_state(state, review.rating, now);
        self.stats.reviewed += 1;
        self.stats.ratings[review.rating as usize - 1] += 1;
        if next.lapses > state.lapses {
            self.stats.lapses += 1;
        }
        info!(
            "updated record {} in deck {}: {} -> {}",
            review.record_id, review.deck_id, state.stage, next.stage
        );
        Ok(next)
    }

    pub fn respond(
        &mut self,
        request: &ReviewRequest,
        state: MemoryState,
        now: i64,
    ) -> ReviewResponse {
        self.apply(request, state, now).into()
    }
}
