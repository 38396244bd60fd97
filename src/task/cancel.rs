//! Cooperative cancellation for tasks.

use std::sync::Arc;

use tokio::sync::watch;

/// A clonable cancellation signal.
///
/// All clones share one flag. Once [`cancel`](Self::cancel) is called the
/// flag stays set, and every task derived with
/// [`Task::cancel_on`](super::Task::cancel_on) that has not settled yet fails
/// with [`TaskError::Cancelled`](super::TaskError::Cancelled).
///
/// ```rust
/// use adequate::task::CancelToken;
///
/// let token = CancelToken::new();
/// let observer = token.clone();
/// token.cancel();
/// assert!(observer.is_cancelled());
/// ```
#[derive(Debug, Clone)]
pub struct CancelToken {
    sender: Arc<watch::Sender<bool>>,
}

impl CancelToken {
    /// Creates a token that has not fired.
    #[must_use]
    pub fn new() -> Self {
        let (sender, _receiver) = watch::channel(false);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Fires the token. Calling it again has no further effect.
    pub fn cancel(&self) {
        let already_cancelled = self.sender.send_replace(true);
        if !already_cancelled {
            tracing::debug!("cancel token fired");
        }
    }

    /// Whether [`cancel`](Self::cancel) has been called on any clone.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        *self.sender.borrow()
    }

    /// Completes once the token has fired.
    pub async fn cancelled(&self) {
        let mut receiver = self.sender.subscribe();
        let fired = receiver.wait_for(|cancelled| *cancelled).await.is_ok();
        if !fired {
            // The sender lives as long as `self`, so the channel cannot close here.
            std::future::pending::<()>().await;
        }
    }
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}
