//! Task polling utilities
//!
//! The UI thread never awaits. Work spawned on the tokio runtime is checked
//! once per frame through these helpers.

use futures::FutureExt;
use tokio::task::JoinHandle;

/// Result of polling a task
pub enum PollResult<T> {
    /// No task to poll (task was None)
    NoTask,
    /// Task is still running
    Pending,
    /// Task completed with result (may be Ok or join error)
    Complete(Result<T, tokio::task::JoinError>),
}

/// Poll an optional task handle and return its result if finished.
///
/// A finished task is taken out of `task`, so the next call returns
/// `PollResult::NoTask`.
///
/// # Example
/// ```ignore
/// match poll_task(&mut self.task) {
///     PollResult::Complete(Ok(Ok(joke))) => { /* resolved */ }
///     PollResult::Complete(Ok(Err(e))) => { /* request failed */ }
///     PollResult::Complete(Err(e)) => { /* task panicked or was aborted */ }
///     PollResult::Pending => ctx.request_repaint(),
///     PollResult::NoTask => {}
/// }
/// ```
pub fn poll_task<T>(task: &mut Option<JoinHandle<T>>) -> PollResult<T> {
    let Some(handle) = task else {
        return PollResult::NoTask;
    };

    if !handle.is_finished() {
        return PollResult::Pending;
    }

    // The UI loop never yields to tokio, so the coop budget is never refilled.
    // Polling unconstrained keeps a finished handle from reporting Pending.
    match tokio::task::unconstrained(&mut *handle).now_or_never() {
        Some(result) => {
            task.take();
            PollResult::Complete(result)
        }
        None => {
            tracing::warn!("Task not ready despite is_finished()");
            PollResult::Pending
        }
    }
}

/// Abort and drop an optional task handle. Returns whether a task was running.
pub fn abort_task<T>(task: &mut Option<JoinHandle<T>>) -> bool {
    match task.take() {
        Some(handle) => {
            handle.abort();
            true
        }
        None => false,
    }
}
