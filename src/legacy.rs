use log::{debug, warn};
use serde::{Deserialize, Serialize};
use snafu::ensure;

use crate::error::{InvalidParametersSnafu, Result};
use crate::rating::Rating;

pub const DEFAULT_EASE: f32 = 2.5;
pub const MIN_EASE: f32 = 1.3;
pub const MAX_EASE: f32 = 2.5;

const MILLIS_PER_MINUTE: i64 = 60_000;

/// Review record as the legacy front-end stored it, scheduled in minutes
/// with an ease factor until it is upgraded with [`crate::from_legacy`].
/// Field names match that JSON; missing fields mean "never reviewed".
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyRecord {
    /// Epoch milliseconds.
    #[serde(rename = "nextReview")]
    pub next_review_at: i64,
    #[serde(rename = "interval")]
    pub interval_minutes: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ease: Option<f32>,
    /// Epoch milliseconds.
    #[serde(rename = "lastReview")]
    pub last_reviewed_at: i64,
    #[serde(rename = "reviewCount", alias = "repetitions")]
    pub repetitions: u32,
}

impl LegacyRecord {
    pub fn is_due(&self, now: i64) -> bool {
        self.next_review_at <= now
    }

    /// Ease used for interval growth: 2.5 when absent, otherwise clamped into
    /// `[1.3, 2.5]`.
    pub fn effective_ease(&self) -> f32 {
        match self.ease {
            Some(ease) if ease.is_finite() => ease.clamp(MIN_EASE, MAX_EASE),
            Some(ease) => {
                warn!("non-finite legacy ease {ease}, using {DEFAULT_EASE}");
                DEFAULT_EASE
            }
            None => {
                if self.repetitions > 0 {
                    warn!("reviewed legacy record without ease, using {DEFAULT_EASE}");
                }
                DEFAULT_EASE
            }
        }
    }
}

/// Interval growth for one rating, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntervalBounds {
    /// Used when the item has no interval yet.
    pub initial: u32,
    pub min: u32,
    pub max: u32,
    pub multiplier: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacyConfig {
    pub again_minutes: u32,
    pub hard: IntervalBounds,
    pub good: IntervalBounds,
    pub easy: IntervalBounds,
}

impl Default for LegacyConfig {
    fn default() -> Self {
        Self {
            again_minutes: 1,
            hard: IntervalBounds {
                initial: 5,
                min: 5,
                max: 4320,
                multiplier: 0.8,
            },
            good: IntervalBounds {
                initial: 10,
                min: 10,
                max: 10080,
                multiplier: 1.0,
            },
            easy: IntervalBounds {
                initial: 240,
                min: 240,
                max: 43200,
                multiplier: 1.3,
            },
        }
    }
}

impl IntervalBounds {
    fn is_valid(&self) -> bool {
        self.min <= self.max
            && (self.min..=self.max).contains(&self.initial)
            && self.multiplier.is_finite()
            && self.multiplier > 0.0
    }
}

impl LegacyConfig {
    pub fn validate(&self) -> Result<()> {
        ensure!(self.again_minutes >= 1, InvalidParametersSnafu);
        ensure!(
            [&self.hard, &self.good, &self.easy]
                .iter()
                .all(|bounds| bounds.is_valid()),
            InvalidParametersSnafu
        );
        Ok(())
    }

    /// Next interval in minutes.
    pub fn next_interval(&self, current_minutes: u32, ease: f32, rating: Rating) -> u32 {
        let bounds = match rating {
            Rating::Again => return self.again_minutes,
            Rating::Hard => &self.hard,
            Rating::Good => &self.good,
            Rating::Easy => &self.easy,
        };
        if current_minutes == 0 {
            return bounds.initial;
        }
        let grown = (current_minutes as f64 * ease as f64 * bounds.multiplier).trunc();
        let grown = if grown >= u32::MAX as f64 {
            u32::MAX
        } else {
            grown as u32
        };
        grown.max(bounds.min).min(bounds.max)
    }

    /// The due time saturates at `i64::MAX` for a `now` at the end of the
    /// timestamp range.
    pub fn next_record(&self, record: LegacyRecord, rating: Rating, now: i64) -> LegacyRecord {
        let interval_minutes =
            self.next_interval(record.interval_minutes, record.effective_ease(), rating);
        let next = LegacyRecord {
            next_review_at: now.saturating_add(interval_minutes as i64 * MILLIS_PER_MINUTE),
            interval_minutes,
            ease: record.ease,
            last_reviewed_at: now,
            repetitions: record.repetitions.saturating_add(1),
        };
        debug!(
            "legacy review {rating}: {} -> {} minutes",
            record.interval_minutes, next.interval_minutes
        );
        next
    }
}
