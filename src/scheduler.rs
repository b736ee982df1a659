//! Owned repeating-task scheduler
//!
//! Replaces an ambient timer: the caller creates a [`Scheduler`] at startup
//! and owns the handle; dropping it (or calling [`Scheduler::shutdown`])
//! aborts the background task.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;
use tokio::time::{MissedTickBehavior, interval};
use tracing::debug;

pub struct Scheduler {
    handle: JoinHandle<()>,
}

impl Scheduler {
    /// Spawn a task that runs `task` immediately and then once per
    /// `period`. A tick that lands while the task is still running is
    /// delayed, not stacked.
    pub fn start<F, Fut>(period: Duration, mut task: F) -> Self
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                debug!("Scheduler tick");
                task().await;
            }
        });
        Self { handle }
    }

    /// Stop the repeating task. Equivalent to dropping the scheduler.
    pub fn shutdown(self) {}
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
