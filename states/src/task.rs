//! Task identity and cooperative cancellation.
//!
//! A [`TaskId`] names one spawned unit of async work: the label of the slot that
//! spawned it plus a generation counter. A [`TaskHandle`] pairs that id with the
//! `CancellationToken` the work races against.
//!
//! ```ignore
//! let handle = TaskHandle::new(TaskId::new("users", 1), CancellationToken::new());
//! handle.cancel();
//! assert!(handle.is_cancelled());
//! ```

use tokio_util::sync::CancellationToken;

/// Unique identifier for a spawned task.
///
/// Two ids from the same slot differ only in their generation; the higher
/// generation is the more recent spawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskId {
    label: &'static str,
    generation: u64,
}

impl TaskId {
    pub fn new(label: &'static str, generation: u64) -> Self {
        Self { label, generation }
    }

    /// Label of the slot that spawned the task.
    pub fn label(&self) -> &'static str {
        self.label
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Handle to a spawned task.
///
/// Cancellation does not abort anything by force: the task observes the token
/// at its next `select!` point, and the owner re-checks it before applying a
/// delivered result.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: TaskId,
    cancel_token: CancellationToken,
}

impl TaskHandle {
    pub fn new(id: TaskId, cancel_token: CancellationToken) -> Self {
        Self { id, cancel_token }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Clone of the token, for passing into the async work.
    pub fn cancellation_token(&self) -> CancellationToken {
        self.cancel_token.clone()
    }

    pub fn cancel(&self) {
        self.cancel_token.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_token.is_cancelled()
    }
}
