//! Transformations from synchronous contexts into [`Task`].
//!
//! The resulting tasks are already decided; observing them never waits.

use crate::task::Task;
use crate::typeclass::Identity;

/// `Some(x)` resolves to `x`; `None` is rejected with `absent_error`.
///
/// ```rust
/// use adequate::natural::option_to_task;
/// use adequate::task::TaskError;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// assert_eq!(option_to_task(Some(1), "missing").await, Ok(1));
/// assert_eq!(
///     option_to_task(None::<i32>, "missing").await,
///     Err(TaskError::Rejected("missing"))
/// );
/// # }
/// ```
pub fn option_to_task<A, E>(option: Option<A>, absent_error: E) -> Task<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    result_to_task(option.ok_or(absent_error))
}

/// `Ok` resolves, `Err` is rejected.
pub fn result_to_task<A, E>(result: Result<A, E>) -> Task<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    match result {
        Ok(value) => Task::pure(value),
        Err(error) => Task::rejected(error),
    }
}

/// Always resolves to the wrapped value.
pub fn identity_to_task<A, E>(identity: Identity<A>) -> Task<A, E>
where
    A: Clone + Send + Sync + 'static,
    E: Clone + Send + Sync + 'static,
{
    Task::pure(identity.into_inner())
}
