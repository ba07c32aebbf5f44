use std::{marker::PhantomData, time::Duration};

use crate::{
    model::{
        cancel::Cancellation, descriptor::Descriptor, event::Observer, options::SortOptions,
        outcome::Outcome,
    },
    util::pause::pause,
};

/// Marker for an observed cancellation, propagated with `?` out of the
/// algorithm bodies.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Cancelled;

/// Result of a step that may observe the cancellation signal.
pub(crate) type Step<T = ()> = Result<T, Cancelled>;

/// Execution context of a single sort call.
///
/// Bundles the observer with the call's parameters and decides which events
/// actually reach the observer.
pub(crate) struct Tracer<'a, T, O: ?Sized> {
    observer: &'a mut O,
    #[cfg_attr(not(feature = "tracing"), allow(dead_code))]
    descriptor: Descriptor,
    delay: Duration,
    cancellation: &'a Cancellation,
    verbose_limit: usize,
    /// Whether compare and swap events are emitted.
    indexed: bool,
    /// Whether per-step log messages are emitted.
    verbose: bool,
    _elem: PhantomData<fn(&T)>,
}

impl<'a, T, O> Tracer<'a, T, O>
where
    O: Observer<T> + ?Sized,
{
    pub(crate) fn new(
        descriptor: Descriptor,
        options: &'a SortOptions,
        observer: &'a mut O,
    ) -> Self {
        Self {
            observer,
            descriptor,
            delay: options.delay,
            cancellation: &options.cancellation,
            verbose_limit: options.verbose_limit,
            indexed: true,
            verbose: true,
            _elem: PhantomData,
        }
    }

    /// Word algorithms only report array updates and log messages, and go
    /// quiet on long inputs.
    pub(crate) fn for_words(mut self, len: usize) -> Self {
        self.indexed = false;
        self.verbose = len < self.verbose_limit;

        self
    }

    /// Emit the start message and decide whether there is anything to do.
    ///
    /// Returns `Ok(false)` for sequences that are trivially sorted, i.e.
    /// shorter than two elements or consisting of a single repeated value.
    /// An already raised signal ends the call before any event is emitted.
    pub(crate) fn begin(&mut self, data: &[T], message: &str) -> Step<bool>
    where
        T: PartialEq,
    {
        debug!(
            algorithm = self.descriptor.name,
            len = data.len(),
            delay = ?self.delay,
            "sort started"
        );

        if self.cancellation.is_cancelled() {
            return Err(Cancelled);
        }

        self.observer.on_log(message);

        let trivial = data.len() < 2 || data.windows(2).all(|pair| pair[0] == pair[1]);

        if trivial {
            trace!(algorithm = self.descriptor.name, "nothing to sort");
        }

        Ok(!trivial)
    }

    /// Log message that is always emitted.
    pub(crate) fn narrate(&mut self, message: &str) {
        self.observer.on_log(message);
    }

    /// Per-step log message, omitted for quiet runs.
    pub(crate) fn detail<F>(&mut self, message: F)
    where
        F: FnOnce() -> String,
    {
        if self.verbose {
            self.observer.on_log(&message());
        }
    }

    pub(crate) fn compared(&mut self, i: usize, j: usize) {
        if self.indexed {
            self.observer.on_compare(i, j);
        }
    }

    pub(crate) fn swapped(&mut self, i: usize, j: usize) {
        if self.indexed {
            self.observer.on_swap(i, j);
        }
    }

    pub(crate) fn updated(&mut self, data: &[T]) {
        self.observer.on_array_updated(data);
    }

    /// Suspend for the configured delay, then check the cancellation signal.
    ///
    /// This is the only place where a running sort observes cancellation.
    pub(crate) async fn pause(&mut self) -> Step {
        if !self.delay.is_zero() {
            pause(self.delay).await;
        }

        if self.cancellation.is_cancelled() {
            Err(Cancelled)
        } else {
            Ok(())
        }
    }

    /// Emit the completion message unless the run was cancelled.
    pub(crate) fn finish(self, result: Step, message: &str) -> Outcome {
        let outcome = match result {
            Ok(()) => {
                self.observer.on_log(message);

                Outcome::Completed
            }
            Err(Cancelled) => Outcome::Cancelled,
        };

        debug!(
            algorithm = self.descriptor.name,
            outcome = ?outcome,
            "sort finished"
        );

        outcome
    }
}
