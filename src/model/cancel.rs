use std::{
    fmt,
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
};

/// Cooperative cancellation signal.
///
/// Clones share the same flag so the caller can keep one handle and pass
/// another into a sort. Raising the flag never interrupts a sort directly;
/// the sort polls it after each paced suspension and returns early.
///
/// ```
/// use sort_trace::Cancellation;
///
/// let signal = Cancellation::new();
/// let handle = signal.clone();
///
/// assert!(!signal.is_cancelled());
/// handle.cancel();
/// assert!(signal.is_cancelled());
/// ```
#[derive(Clone, Default)]
pub struct Cancellation(Arc<AtomicBool>);

impl Cancellation {
    /// Create a new signal that has not been raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request that any sort observing this signal stops early.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Release);
    }

    /// Whether [`cancel`](Self::cancel) was called on this signal or any of
    /// its clones.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

impl fmt::Debug for Cancellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Cancellation")
            .field(&self.is_cancelled())
            .finish()
    }
}
