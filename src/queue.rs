use itertools::Itertools;

use crate::legacy::LegacyRecord;
use crate::scheduler::StoredRecord;
use crate::state::MemoryState;

/// Batch size the study screens ask for.
pub const DEFAULT_REVIEW_LIMIT: usize = 20;

/// Anything that carries a review due date.
pub trait Due {
    fn next_review_at(&self) -> i64;
    fn is_due(&self, now: i64) -> bool;
}

impl Due for MemoryState {
    fn next_review_at(&self) -> i64 {
        self.next_review_at
    }

    fn is_due(&self, now: i64) -> bool {
        MemoryState::is_due(self, now)
    }
}

impl Due for LegacyRecord {
    fn next_review_at(&self) -> i64 {
        self.next_review_at
    }

    fn is_due(&self, now: i64) -> bool {
        LegacyRecord::is_due(self, now)
    }
}

impl Due for StoredRecord {
    fn next_review_at(&self) -> i64 {
        match self {
            StoredRecord::Native(state) => state.next_review_at,
            StoredRecord::Legacy(record) => record.next_review_at,
        }
    }

    fn is_due(&self, now: i64) -> bool {
        StoredRecord::is_due(self, now)
    }
}

/// Keys of the records due at `now`, most overdue first, at most `limit`.
/// Records with the same due date keep their input order.
pub fn due_for_review<K, R, I>(records: I, now: i64, limit: usize) -> Vec<K>
where
    R: Due,
    I: IntoIterator<Item = (K, R)>,
{
    records
        .into_iter()
        .filter(|(_, record)| record.is_due(now))
        .sorted_by_key(|(_, record)| record.next_review_at())
        .take(limit)
        .map(|(key, _)| key)
        .collect()
}
