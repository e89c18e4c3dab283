//! Cooperative cancellation for discovery and document generation.

use crate::errors::{Error, Result};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable flag checked between directory entries and between files.
///
/// Cancelling any clone cancels them all. A cancelled run returns
/// [`Error::Interrupted`] and writes no output document.
///
/// # Examples
///
/// ```
/// use ccdoc::CancellationToken;
/// use std::thread;
///
/// let token = CancellationToken::new();
/// let handler_token = token.clone();
///
/// // A signal handler would do this from another thread.
/// thread::spawn(move || handler_token.cancel()).join().unwrap();
///
/// assert!(token.is_cancelled());
/// assert!(token.check().is_err());
/// ```
#[derive(Debug, Clone)]
pub struct CancellationToken {
    inner: Arc<AtomicBool>,
}

impl CancellationToken {
    /// Creates a new `CancellationToken` in a non-cancelled state.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Signals cancellation to this token and all of its clones.
    pub fn cancel(&self) {
        self.inner.store(true, Ordering::SeqCst);
    }

    /// Returns `true` once `cancel()` has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.inner.load(Ordering::Relaxed)
    }

    /// Returns `Err(Error::Interrupted)` if the token has been cancelled.
    pub fn check(&self) -> Result<()> {
        if self.is_cancelled() {
            Err(Error::Interrupted)
        } else {
            Ok(())
        }
    }
}

/// Equivalent to [`CancellationToken::new`].
impl Default for CancellationToken {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_state() {
        let token = CancellationToken::default();
        let clone = token.clone();
        assert!(clone.check().is_ok());
        token.cancel();
        assert!(clone.is_cancelled());
        assert!(matches!(clone.check(), Err(Error::Interrupted)));
    }
}
