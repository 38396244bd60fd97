//! `Task` - a lazy, memoized asynchronous computation.
//!
//! A [`Task<T, E>`] describes work that eventually settles with a value of
//! type `T` or fails with a [`TaskError<E>`]. Building a task runs nothing.
//! The first observer (a call to [`Task::fork`], an `.await`, or
//! [`Task::fork_with`]) starts the computation; every later observer,
//! including one attaching after settlement, receives the same memoized
//! outcome without running the computation again.
//!
//! ```text
//! Pending --first settlement--> Settled(Ok(T) | Err(TaskError<E>))
//! ```
//!
//! Settlement happens once and is terminal. Failures are memoized exactly
//! like successes.
//!
//! # Examples
//!
//! ```rust
//! use adequate::task::Task;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let price: Task<u32, String> = Task::pure(40);
//! let tax: Task<u32, String> = Task::pure(2);
//!
//! let total = price.map2(tax, |price, tax| price + tax);
//! assert_eq!(total.fork().await, Ok(42));
//! assert_eq!(total.await, Ok(42));
//! # }
//! ```
//!
//! Callback-style construction hands the computation a [`Settler`]:
//!
//! ```rust
//! use adequate::task::{Task, TaskError};
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let parsed: Task<i32, String> = Task::new(|settler| match "12x".parse::<i32>() {
//!     Ok(number) => settler.resolve(number),
//!     Err(error) => settler.reject(error.to_string()),
//! });
//!
//! assert_eq!(
//!     parsed.fork().await,
//!     Err(TaskError::Rejected(String::from("invalid digit found in string")))
//! );
//! # }
//! ```
//!
//! # Laws
//!
//! Compared by the outcome of `fork`, `Task` satisfies the functor,
//! applicative and monad laws:
//!
//! ```text
//! task.fmap(identity) == task
//! Task::pure(a).flat_map(f) == f(a)
//! task.flat_map(Task::pure) == task
//! task.flat_map(f).flat_map(g) == task.flat_map(|x| f(x).flat_map(g))
//! ```

mod cancel;
mod error;
mod settle;

pub use cancel::CancelToken;
pub use error::TaskError;
pub use settle::Settler;

use std::fmt;
use std::future::{Future, IntoFuture};
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use futures::future::{self, BoxFuture, FutureExt, Shared};
use tokio::task::JoinHandle;

/// What observing a task yields.
pub type TaskOutcome<T, E> = Result<T, TaskError<E>>;

/// Process-unique identifier of a task, used in log fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u64);

impl TaskId {
    fn next() -> Self {
        static NEXT_ID: AtomicU64 = AtomicU64::new(1);
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw numeric id.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// A lazy asynchronous computation with a memoized outcome.
///
/// Cloning a task is cheap; all clones share the same computation and the
/// same outcome. Values and errors must be `Clone` because every observer
/// gets its own copy of the outcome.
pub struct Task<T, E> {
    id: TaskId,
    shared: Shared<BoxFuture<'static, TaskOutcome<T, E>>>,
}

impl<T, E> Clone for Task<T, E> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            shared: self.shared.clone(),
        }
    }
}

impl<T, E> fmt::Debug for Task<T, E>
where
    T: Clone + fmt::Debug,
    E: Clone + fmt::Debug,
{
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Task")
            .field("id", &self.id)
            .field("outcome", &self.shared.peek())
            .finish()
    }
}

// =============================================================================
// Constructors
// =============================================================================

impl<T, E> Task<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    fn from_outcome<Fut>(computation: Fut) -> Self
    where
        Fut: Future<Output = TaskOutcome<T, E>> + Send + 'static,
    {
        let id = TaskId::next();
        let settling = async move {
            tracing::trace!(task = %id, "task computation started");
            let outcome = computation.await;
            match &outcome {
                Ok(_) => tracing::debug!(task = %id, outcome = "resolved", "task settled"),
                Err(error) => tracing::debug!(task = %id, outcome = error.kind(), "task settled"),
            }
            outcome
        };
        Self {
            id,
            shared: settling.boxed().shared(),
        }
    }

    /// Creates a task from a callback-style computation.
    ///
    /// `computation` runs when the task is first observed, not before. It
    /// may settle synchronously or move the [`Settler`] into another job and
    /// settle later. If the settler is dropped unsettled the task fails with
    /// [`TaskError::Abandoned`].
    pub fn new<F>(computation: F) -> Self
    where
        F: FnOnce(Settler<T, E>) + Send + 'static,
    {
        Self::from_outcome(async move {
            let (settler, settlement) = Settler::channel();
            computation(settler);
            match settlement.await {
                Ok(result) => result.map_err(TaskError::Rejected),
                Err(_) => Err(TaskError::Abandoned),
            }
        })
    }

    /// Wraps a future whose `Err` becomes a rejection.
    ///
    /// The future is not polled until the task is first observed.
    pub fn from_future<Fut>(future: Fut) -> Self
    where
        Fut: Future<Output = Result<T, E>> + Send + 'static,
    {
        Self::from_outcome(async move { future.await.map_err(TaskError::Rejected) })
    }

    /// A task that resolves to `value`.
    pub fn pure(value: T) -> Self {
        Self::from_outcome(future::ready(Ok(value)))
    }

    /// A task that is rejected with `error`.
    pub fn rejected(error: E) -> Self {
        Self::from_outcome(future::ready(Err(TaskError::Rejected(error))))
    }

    /// A task that resolves to `value` once `duration` has elapsed, counted
    /// from the first observation.
    pub fn delayed(duration: Duration, value: T) -> Self {
        Self::from_outcome(async move {
            tokio::time::sleep(duration).await;
            Ok(value)
        })
    }

    // =========================================================================
    // Observation
    // =========================================================================

    /// This task's id.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Whether the outcome is already memoized.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.shared.peek().is_some()
    }

    /// The memoized outcome, without starting or waiting for the computation.
    #[must_use]
    pub fn peek(&self) -> Option<TaskOutcome<T, E>> {
        self.shared.peek().cloned()
    }

    /// Observes the task, starting the computation if nobody has yet.
    ///
    /// # Errors
    ///
    /// Returns the memoized [`TaskError`] if the task failed.
    pub async fn fork(&self) -> TaskOutcome<T, E> {
        if let Some(outcome) = self.shared.peek() {
            tracing::trace!(task = %self.id, "replaying memoized outcome");
            return outcome.clone();
        }
        self.shared.clone().await
    }

    /// Observes the task with callbacks, on a job spawned on the current
    /// tokio runtime. Exactly one of the callbacks runs.
    ///
    /// # Panics
    ///
    /// Panics when called outside a tokio runtime.
    pub fn fork_with<R, S>(&self, on_rejected: R, on_resolved: S) -> JoinHandle<()>
    where
        R: FnOnce(TaskError<E>) + Send + 'static,
        S: FnOnce(T) + Send + 'static,
    {
        let task = self.clone();
        tokio::spawn(async move {
            match task.fork().await {
                Ok(value) => on_resolved(value),
                Err(error) => on_rejected(error),
            }
        })
    }

    // =========================================================================
    // Combinators
    // =========================================================================

    /// Transforms the resolved value; failures pass through unchanged.
    pub fn fmap<B, F>(self, function: F) -> Task<B, E>
    where
        B: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> B + Send + 'static,
    {
        Task::from_outcome(async move { self.fork().await.map(function) })
    }

    /// Transforms a rejection payload. `Abandoned` and `Cancelled` pass through.
    pub fn map_rejection<E2, F>(self, function: F) -> Task<T, E2>
    where
        E2: Clone + Send + Sync + 'static,
        F: FnOnce(E) -> E2 + Send + 'static,
    {
        Task::from_outcome(async move {
            self.fork()
                .await
                .map_err(|error| error.map_rejection(function))
        })
    }

    /// Applies the function this task resolves to to the value `argument`
    /// resolves to.
    ///
    /// Both tasks are started together. Whichever fails first decides the
    /// failure of the result, without waiting for the other.
    ///
    /// ```rust
    /// use adequate::task::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let add_one: Task<fn(i32) -> i32, ()> = Task::pure(|n| n + 1);
    /// assert_eq!(add_one.apply(Task::pure(1)).await, Ok(2));
    /// # }
    /// ```
    pub fn apply<A, B>(self, argument: Task<A, E>) -> Task<B, E>
    where
        T: FnOnce(A) -> B,
        A: Clone + Send + Sync + 'static,
        B: Clone + Send + Sync + 'static,
    {
        Task::from_outcome(async move {
            let (function, value) = future::try_join(self.fork(), argument.fork()).await?;
            Ok(function(value))
        })
    }

    /// Combines two tasks started together, with the failure rules of
    /// [`Task::apply`].
    pub fn map2<U, R, F>(self, other: Task<U, E>, function: F) -> Task<R, E>
    where
        U: Clone + Send + Sync + 'static,
        R: Clone + Send + Sync + 'static,
        F: FnOnce(T, U) -> R + Send + 'static,
    {
        Task::from_outcome(async move {
            let (left, right) = future::try_join(self.fork(), other.fork()).await?;
            Ok(function(left, right))
        })
    }

    /// Pairs the values of two tasks started together.
    pub fn product<U>(self, other: Task<U, E>) -> Task<(T, U), E>
    where
        U: Clone + Send + Sync + 'static,
    {
        self.map2(other, |left, right| (left, right))
    }

    /// Sequences a dependent task after this one.
    ///
    /// `function` runs only after this task resolves; a failure here skips it.
    pub fn flat_map<U, F>(self, function: F) -> Task<U, E>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> Task<U, E> + Send + 'static,
    {
        Task::from_outcome(async move {
            let value = self.fork().await?;
            function(value).fork().await
        })
    }

    /// Alias for [`Task::flat_map`].
    pub fn and_then<U, F>(self, function: F) -> Task<U, E>
    where
        U: Clone + Send + Sync + 'static,
        F: FnOnce(T) -> Task<U, E> + Send + 'static,
    {
        self.flat_map(function)
    }

    /// A task that fails with [`TaskError::Cancelled`] if `token` fires
    /// before this one settles.
    ///
    /// The source keeps its own memoized outcome; only the derived task is
    /// cancelled. An outcome already memoized wins over the token.
    pub fn cancel_on(self, token: CancelToken) -> Self {
        Self::from_outcome(async move {
            if token.is_cancelled() && !self.is_settled() {
                tracing::debug!(task = %self.id, "task cancelled before first observation");
                return Err(TaskError::Cancelled);
            }
            tokio::select! {
                biased;
                outcome = self.fork() => outcome,
                () = token.cancelled() => {
                    tracing::debug!(task = %self.id, "task cancelled before settling");
                    Err(TaskError::Cancelled)
                }
            }
        })
    }

    /// Runs every task concurrently and collects the values in input order.
    ///
    /// The first failure to settle decides the result.
    ///
    /// ```rust
    /// use adequate::task::Task;
    ///
    /// # #[tokio::main(flavor = "current_thread")]
    /// # async fn main() {
    /// let all = Task::<_, ()>::sequence(vec![Task::pure(1), Task::pure(2)]);
    /// assert_eq!(all.await, Ok(vec![1, 2]));
    /// # }
    /// ```
    pub fn sequence(tasks: Vec<Self>) -> Task<Vec<T>, E> {
        Task::from_outcome(async move {
            future::try_join_all(tasks.iter().map(|task| task.fork())).await
        })
    }

    /// Builds one task per item with `function`, then [`Task::sequence`]s them.
    pub fn traverse<A, I, F>(items: I, function: F) -> Task<Vec<T>, E>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::sequence(items.into_iter().map(function).collect())
    }
}

impl<T, E> IntoFuture for Task<T, E>
where
    T: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    type Output = TaskOutcome<T, E>;
    type IntoFuture = Shared<BoxFuture<'static, TaskOutcome<T, E>>>;

    fn into_future(self) -> Self::IntoFuture {
        self.shared
    }
}
