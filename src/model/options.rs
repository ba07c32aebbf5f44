use std::time::Duration;

use super::cancel::Cancellation;

/// Execution parameters for a single sort call.
///
/// Parameters are passed per invocation and never stored on an algorithm so
/// the same algorithm value can be reused across runs.
///
/// ```
/// use std::time::Duration;
/// use sort_trace::{Cancellation, SortOptions};
///
/// let signal = Cancellation::new();
///
/// let options = SortOptions::new()
///     .delay_ms(25)
///     .cancellation(signal.clone())
///     .verbose_limit(200);
///
/// assert_eq!(options.get_delay(), Duration::from_millis(25));
/// ```
#[derive(Clone, Debug)]
#[must_use]
pub struct SortOptions {
    pub(crate) delay: Duration,
    pub(crate) cancellation: Cancellation,
    pub(crate) verbose_limit: usize,
}

impl SortOptions {
    /// Pacing delay used if none is specified.
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(100);

    /// Word sequences at least this long omit per-step logs by default.
    pub const DEFAULT_VERBOSE_LIMIT: usize = 50;

    /// Create options with the default delay and a signal that is never
    /// raised.
    pub fn new() -> Self {
        Self::default()
    }

    /// Suspension inserted after each observable mutation.
    ///
    /// A zero delay disables pacing entirely.
    pub fn delay(self, delay: Duration) -> Self {
        Self { delay, ..self }
    }

    /// Same as [`delay`](Self::delay) but in milliseconds.
    pub fn delay_ms(self, millis: u64) -> Self {
        self.delay(Duration::from_millis(millis))
    }

    /// Signal that the caller can raise to stop the sort early.
    pub fn cancellation(self, cancellation: Cancellation) -> Self {
        Self {
            cancellation,
            ..self
        }
    }

    /// Sequence length from which per-comparison and per-swap logs are
    /// omitted by word algorithms.
    ///
    /// Array updates and pacing are unaffected.
    pub fn verbose_limit(self, verbose_limit: usize) -> Self {
        Self {
            verbose_limit,
            ..self
        }
    }

    pub const fn get_delay(&self) -> Duration {
        self.delay
    }

    pub const fn get_cancellation(&self) -> &Cancellation {
        &self.cancellation
    }

    pub const fn get_verbose_limit(&self) -> usize {
        self.verbose_limit
    }
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            delay: Self::DEFAULT_DELAY,
            cancellation: Cancellation::new(),
            verbose_limit: Self::DEFAULT_VERBOSE_LIMIT,
        }
    }
}
