use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use super::employee::EmployeeId;

/// Strategy for minting employee ids.
///
/// Implementations must never hand out the same id twice for the lifetime of
/// a directory, including under rapid successive calls. A directory seeded
/// with pre-existing records needs a source configured past those ids
/// (see [`SequentialIds::starting_at`]).
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> EmployeeId;
}

/// Monotonic counter ids: `"1"`, `"2"`, `"3"`, ...
pub struct SequentialIds {
    next: AtomicU64,
}

impl SequentialIds {
    /// Start counting at `first`.
    pub fn starting_at(first: u64) -> Self {
        Self {
            next: AtomicU64::new(first),
        }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

impl IdSource for SequentialIds {
    fn next_id(&self) -> EmployeeId {
        EmployeeId::new(self.next.fetch_add(1, Ordering::SeqCst).to_string())
    }
}

/// Random v4 UUID ids.
#[derive(Default)]
pub struct UuidIds;

impl IdSource for UuidIds {
    fn next_id(&self) -> EmployeeId {
        EmployeeId::new(Uuid::new_v4().to_string())
    }
}
