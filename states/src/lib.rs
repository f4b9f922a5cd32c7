//! Async task plumbing shared by the business and UI crates.

mod slot;
mod task;

pub use slot::{LatestOnlyUpdater, TaskSlot};
pub use task::{TaskHandle, TaskId};
