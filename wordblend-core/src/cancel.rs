//! Cooperative cancellation

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A cloneable cancellation token polled by the blend stream controller.
///
/// Cancellation is cooperative: tripping the token asks the controller to
/// stop between iterations and exit normally with the partial count. It is
/// a one-way switch; there is no reset.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a fresh, untripped token
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation; safe to call from another thread (e.g. a
    /// signal handler)
    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
