//! Failure channel of a [`Task`](super::Task).

use thiserror::Error;

/// Why a task did not produce a value.
///
/// `Rejected` carries the error the computation reported. The other two
/// variants are produced by the task machinery itself.
///
/// ```rust
/// use adequate::task::TaskError;
///
/// let error: TaskError<String> = TaskError::Rejected("disk full".into());
/// assert_eq!(error.to_string(), "task rejected: disk full");
/// assert_eq!(error.into_rejection(), Some(String::from("disk full")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TaskError<E> {
    /// The computation called [`Settler::reject`](super::Settler::reject).
    #[error("task rejected: {0}")]
    Rejected(E),

    /// The computation dropped its settler without settling.
    #[error("task computation finished without settling")]
    Abandoned,

    /// A [`CancelToken`](super::CancelToken) fired before the task settled.
    #[error("task cancelled")]
    Cancelled,
}

impl<E> TaskError<E> {
    /// Returns the rejection payload, if this is a rejection.
    pub fn into_rejection(self) -> Option<E> {
        match self {
            Self::Rejected(error) => Some(error),
            Self::Abandoned | Self::Cancelled => None,
        }
    }

    /// Maps the rejection payload, keeping `Abandoned` and `Cancelled` as they are.
    pub fn map_rejection<E2, F>(self, function: F) -> TaskError<E2>
    where
        F: FnOnce(E) -> E2,
    {
        match self {
            Self::Rejected(error) => TaskError::Rejected(function(error)),
            Self::Abandoned => TaskError::Abandoned,
            Self::Cancelled => TaskError::Cancelled,
        }
    }

    /// Short label used in log fields.
    pub(crate) const fn kind(&self) -> &'static str {
        match self {
            Self::Rejected(_) => "rejected",
            Self::Abandoned => "abandoned",
            Self::Cancelled => "cancelled",
        }
    }
}
