//! Latest-only delivery of async results to the UI thread.
//!
//! A [`TaskSlot`] owns at most one in-flight task. The task runs on the tokio
//! runtime the slot was built with and reports back through a `flume` channel;
//! the UI thread drains that channel with [`TaskSlot::poll`] once per frame.
//!
//! Results are only handed out when they come from the task the slot is
//! currently tracking and that task has not been cancelled. Spawning again
//! supersedes (and cancels) the previous task.

use std::future::Future;

use flume::{Receiver, Sender};
use log::trace;
use tokio::runtime::Handle;
use tokio_util::sync::CancellationToken;

use crate::task::{TaskHandle, TaskId};

/// Sends one task's output back to its [`TaskSlot`].
#[derive(Debug, Clone)]
pub struct LatestOnlyUpdater<T> {
    task: TaskId,
    send: Sender<(TaskId, T)>,
}

impl<T> LatestOnlyUpdater<T> {
    pub fn set(&self, value: T) {
        if self.send.send((self.task, value)).is_err() {
            trace!("Slot for {:?} was dropped before delivery", self.task);
        }
    }
}

#[derive(Debug)]
pub struct TaskSlot<T> {
    label: &'static str,
    runtime: Handle,
    send: Sender<(TaskId, T)>,
    recv: Receiver<(TaskId, T)>,
    generation: u64,
    current: Option<TaskHandle>,
}

impl<T> TaskSlot<T> {
    pub fn new(label: &'static str, runtime: Handle) -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            label,
            runtime,
            send,
            recv,
            generation: 0,
            current: None,
        }
    }

    /// True while a spawned task has neither delivered nor been cancelled.
    pub fn is_pending(&self) -> bool {
        self.current.as_ref().is_some_and(|handle| !handle.is_cancelled())
    }

    /// Id of the task currently tracked by the slot.
    pub fn current_task(&self) -> Option<TaskId> {
        self.current.as_ref().map(TaskHandle::id)
    }

    /// Cancels the tracked task. Anything it delivers later is discarded.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.current.take() {
            trace!("Cancelling {:?}", handle.id());
            handle.cancel();
        }
    }

    /// Drains delivered results, returning the one from the tracked task.
    pub fn poll(&mut self) -> Option<T> {
        let mut latest = None;

        while let Ok((id, value)) = self.recv.try_recv() {
            match &self.current {
                Some(handle) if handle.id() == id && !handle.is_cancelled() => {
                    latest = Some(value);
                }
                _ => trace!("Dropping stale result from {id:?}"),
            }
        }

        if latest.is_some() {
            self.current = None;
        }
        latest
    }
}

impl<T> TaskSlot<T>
where
    T: Send + 'static,
{
    /// Spawns `future` as the slot's tracked task, cancelling any previous one.
    pub fn spawn<Fut>(&mut self, future: Fut) -> TaskId
    where
        Fut: Future<Output = T> + Send + 'static,
    {
        self.cancel();
        self.generation += 1;

        let id = TaskId::new(self.label, self.generation);
        let handle = TaskHandle::new(id, CancellationToken::new());
        let updater = LatestOnlyUpdater {
            task: id,
            send: self.send.clone(),
        };

        let task_token = handle.cancellation_token();
        self.runtime.spawn(async move {
            tokio::select! {
                _ = task_token.cancelled() => {
                    trace!("{id:?} cancelled before completion");
                }
                value = future => {
                    if task_token.is_cancelled() {
                        trace!("{id:?} finished after cancellation");
                    } else {
                        updater.set(value);
                    }
                }
            }
        });

        self.current = Some(handle);
        id
    }
}

impl<T> Drop for TaskSlot<T> {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::oneshot;
    use tokio::task::yield_now;

    async fn wait_for<T: Send + 'static>(slot: &mut TaskSlot<T>) -> Option<T> {
        for _ in 0..50 {
            if let Some(value) = slot.poll() {
                return Some(value);
            }
            yield_now().await;
        }
        None
    }

    #[tokio::test]
    async fn delivers_result_of_tracked_task() {
        let mut slot = TaskSlot::new("test", Handle::current());

        let id = slot.spawn(async { 1 });
        assert!(slot.is_pending());
        assert_eq!(slot.current_task(), Some(id));

        assert_eq!(wait_for(&mut slot).await, Some(1));
        assert!(!slot.is_pending());
        assert_eq!(slot.current_task(), None);
    }

    #[tokio::test]
    async fn superseded_task_result_is_dropped() {
        let mut slot = TaskSlot::new("test", Handle::current());
        let (tx, rx) = oneshot::channel::<u32>();

        let first = slot.spawn(async move { rx.await.unwrap_or(0) });
        let second = slot.spawn(async { 2 });
        let _ = tx.send(1);

        assert!(second.generation() > first.generation());
        assert_eq!(wait_for(&mut slot).await, Some(2));
    }

    #[tokio::test]
    async fn cancelled_task_never_delivers() {
        let mut slot = TaskSlot::new("test", Handle::current());
        let (tx, rx) = oneshot::channel::<u32>();

        slot.spawn(async move { rx.await.unwrap_or(0) });
        slot.cancel();
        let _ = tx.send(7);

        for _ in 0..10 {
            yield_now().await;
        }
        assert_eq!(slot.poll(), None);
        assert!(!slot.is_pending());
    }

    #[tokio::test]
    async fn cancel_drops_the_running_future() {
        let mut slot = TaskSlot::new("test", Handle::current());
        let (alive_tx, alive_rx) = oneshot::channel::<()>();

        slot.spawn(async move {
            let _alive = alive_tx;
            std::future::pending::<u32>().await
        });
        yield_now().await;
        slot.cancel();

        // The sender only goes away once the task stops polling the future.
        assert!(alive_rx.await.is_err());
        assert_eq!(slot.poll(), None);
    }

    #[tokio::test]
    async fn result_queued_before_cancel_is_discarded() {
        let mut slot = TaskSlot::new("test", Handle::current());

        slot.spawn(async { 3 });
        for _ in 0..10 {
            yield_now().await;
        }
        slot.cancel();

        assert_eq!(slot.poll(), None);
    }
}
