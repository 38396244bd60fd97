//! The handle a callback-style computation uses to settle its task.

use std::fmt;

use futures::channel::oneshot;

/// One-shot settlement handle passed to the computation given to
/// [`Task::new`](super::Task::new).
///
/// Every settling method consumes the settler, so a computation can settle
/// its task at most once. Dropping the settler without calling any of them
/// fails the task with [`TaskError::Abandoned`](super::TaskError::Abandoned).
///
/// The settler is `Send`, so it can be moved into a spawned job and settled
/// from there:
///
/// ```rust
/// use adequate::task::Task;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// let task: Task<u32, String> = Task::new(|settler| {
///     tokio::spawn(async move { settler.resolve(7) });
/// });
/// assert_eq!(task.fork().await, Ok(7));
/// # }
/// ```
pub struct Settler<T, E> {
    sender: oneshot::Sender<Result<T, E>>,
}

impl<T, E> Settler<T, E> {
    pub(crate) fn channel() -> (Self, oneshot::Receiver<Result<T, E>>) {
        let (sender, receiver) = oneshot::channel();
        (Self { sender }, receiver)
    }

    /// Settles the task successfully.
    pub fn resolve(self, value: T) {
        self.settle(Ok(value));
    }

    /// Settles the task with a failure.
    pub fn reject(self, error: E) {
        self.settle(Err(error));
    }

    /// Settles the task with either outcome.
    pub fn settle(self, result: Result<T, E>) {
        if self.sender.send(result).is_err() {
            tracing::trace!("settlement discarded, task was dropped before settling");
        }
    }

    /// Returns `false` once the task this settler belongs to has been dropped.
    ///
    /// Long-running computations can poll this to stop early.
    pub fn is_observed(&self) -> bool {
        !self.sender.is_canceled()
    }
}

impl<T, E> fmt::Debug for Settler<T, E> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Settler")
            .field("observed", &self.is_observed())
            .finish()
    }
}
