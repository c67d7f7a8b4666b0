use log::warn;

use crate::legacy::LegacyRecord;
use crate::parameters::{D_MAX, D_MIN, D_NEUTRAL};
use crate::state::{MemoryState, Stage, retrievability};

const MINUTES_PER_DAY: u32 = 1440;

/// Lossy in both directions: the legacy shape keeps a single `ease` in place
/// of difficulty and has no stability or lapse count. Only the review
/// timestamps and the repetition count survive a round trip.
pub fn to_legacy(state: &MemoryState) -> LegacyRecord {
    LegacyRecord {
        next_review_at: state.next_review_at,
        interval_minutes: state.scheduled_days.saturating_mul(MINUTES_PER_DAY),
        ease: Some(state.difficulty),
        last_reviewed_at: state.last_reviewed_at,
        repetitions: state.repetitions,
    }
}

pub fn from_legacy(record: &LegacyRecord) -> MemoryState {
    let difficulty = match record.ease {
        Some(ease) if ease.is_finite() => ease.clamp(D_MIN, D_MAX),
        Some(ease) => {
            warn!("non-finite legacy ease {ease}, using neutral difficulty");
            D_NEUTRAL
        }
        None => D_NEUTRAL,
    };
    let stability = record.interval_minutes as f32 / MINUTES_PER_DAY as f32;
    MemoryState {
        stage: if record.repetitions > 0 {
            Stage::Review
        } else {
            Stage::New
        },
        difficulty,
        stability,
        retrievability: retrievability(stability),
        repetitions: record.repetitions,
        lapses: 0,
        last_reviewed_at: record.last_reviewed_at,
        next_review_at: record.next_review_at,
        scheduled_days: record.interval_minutes / MINUTES_PER_DAY,
    }
}

impl From<&MemoryState> for LegacyRecord {
    fn from(state: &MemoryState) -> Self {
        to_legacy(state)
    }
}

impl From<&LegacyRecord> for MemoryState {
    fn from(record: &LegacyRecord) -> Self {
        from_legacy(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::TestHelper;

    #[test]
    fn test_to_legacy() {
        let state = MemoryState {
            stage: Stage::Review,
            difficulty: 3.29,
            stability: 7.2,
            retrievability: 0.47,
            repetitions: 5,
            lapses: 1,
            last_reviewed_at: 1_000,
            next_review_at: 1_000 + 8 * 86_400_000,
            scheduled_days: 8,
        };
        assert_eq!(
            to_legacy(&state),
            LegacyRecord {
                next_review_at: 1_000 + 8 * 86_400_000,
                interval_minutes: 11520,
                ease: Some(3.29),
                last_reviewed_at: 1_000,
                repetitions: 5,
            }
        );
    }

    #[test]
    fn test_from_legacy() {
        let record = LegacyRecord {
            next_review_at: 9_000,
            interval_minutes: 2160,
            ease: Some(2.5),
            last_reviewed_at: 4_000,
            repetitions: 3,
        };
        let state = from_legacy(&record);
        assert_eq!(state.stage, Stage::Review);
        assert_eq!(state.difficulty, 2.5);
        state.stability.assert_approx_eq(1.5);
        assert_eq!(state.scheduled_days, 1);
        state.retrievability.assert_approx_eq(0.9f32.powf(1.5));
        assert_eq!(state.lapses, 0);
        assert_eq!(
            (state.repetitions, state.last_reviewed_at, state.next_review_at),
            (3, 4_000, 9_000)
        );
    }

    #[test]
    fn test_from_empty_legacy_record() {
        let state = from_legacy(&LegacyRecord::default());
        assert_eq!(state, MemoryState::default());

        let state = from_legacy(&LegacyRecord {
            ease: Some(f32::NAN),
            ..Default::default()
        });
        assert_eq!(state.difficulty, 3.0);
        let state = from_legacy(&LegacyRecord {
            ease: Some(0.2),
            ..Default::default()
        });
        assert_eq!(state.difficulty, 1.0);
    }

    #[test]
    fn test_round_trip_keeps_timestamps_and_repetitions() {
        let records = [
            LegacyRecord::default(),
            LegacyRecord {
                next_review_at: 1_700_000_600_000,
                interval_minutes: 10,
                ease: None,
                last_reviewed_at: 1_700_000_000_000,
                repetitions: 1,
            },
            LegacyRecord {
                next_review_at: 1_700_259_200_000,
                interval_minutes: 4320,
                ease: Some(1.3),
                last_reviewed_at: 1_700_000_000_000,
                repetitions: 12,
            },
        ];
        for record in records {
            let back = to_legacy(&from_legacy(&record));
            assert_eq!(back.next_review_at, record.next_review_at);
            assert_eq!(back.last_reviewed_at, record.last_reviewed_at);
            assert_eq!(back.repetitions, record.repetitions);
        }
    }

    #[test]
    fn test_round_trip_is_lossy() {
        let state = MemoryState {
            stage: Stage::Relearning,
            stability: 1.05,
            lapses: 2,
            repetitions: 4,
            ..Default::default()
        };
        let back = from_legacy(&to_legacy(&state));
        assert_eq!(back.stage, Stage::Review);
        assert_eq!(back.lapses, 0);
        assert_eq!(back.stability, 0.0);
    }
}
