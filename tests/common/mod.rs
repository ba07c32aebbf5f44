#![allow(unused)]

use std::future::Future;

use sort_trace::{Cancellation, Observer};

/// Drive a future to completion on the runtime selected by the features.
#[cfg(feature = "async_tokio")]
pub fn block_on<F: Future>(fut: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()
        .expect("could not start runtime")
        .block_on(fut)
}

/// Drive a future to completion on the runtime selected by the features.
#[cfg(feature = "async_std")]
pub fn block_on<F: Future>(fut: F) -> F::Output {
    async_std::task::block_on(fut)
}

/// Drive a future to completion on the runtime selected by the features.
#[cfg(not(any(feature = "async_tokio", feature = "async_std")))]
pub fn block_on<F: Future>(fut: F) -> F::Output {
    futures::executor::block_on(fut)
}

pub fn words(words: &[&str]) -> Vec<String> {
    words.iter().map(|&word| word.to_owned()).collect()
}

/// Whether `a` and `b` hold the same multiset of elements.
pub fn is_permutation<T: Ord + Clone>(a: &[T], b: &[T]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_unstable();
    b.sort_unstable();

    a == b
}

/// Checks that every snapshot is a permutation of the initial sequence and
/// raises the signal after a given amount of snapshots.
pub struct Watchdog<T> {
    initial: Vec<T>,
    signal: Cancellation,
    cancel_after: Option<usize>,
    pub snapshots: usize,
    pub swaps: usize,
    pub comparisons: usize,
    pub messages: Vec<String>,
}

impl<T: Clone> Watchdog<T> {
    pub fn new(initial: &[T], signal: Cancellation) -> Self {
        Self {
            initial: initial.to_vec(),
            signal,
            cancel_after: None,
            snapshots: 0,
            swaps: 0,
            comparisons: 0,
            messages: Vec::new(),
        }
    }

    pub fn cancel_after(mut self, snapshots: usize) -> Self {
        self.cancel_after = Some(snapshots);

        self
    }
}

impl<T: Ord + Clone + std::fmt::Debug> Observer<T> for Watchdog<T> {
    fn on_array_updated(&mut self, snapshot: &[T]) {
        assert!(
            is_permutation(snapshot, &self.initial),
            "{snapshot:?} is no permutation of {:?}",
            self.initial
        );

        self.snapshots += 1;

        if self.cancel_after == Some(self.snapshots) {
            self.signal.cancel();
        }
    }

    fn on_log(&mut self, message: &str) {
        self.messages.push(message.to_owned());
    }

    fn on_compare(&mut self, _: usize, _: usize) {
        self.comparisons += 1;
    }

    fn on_swap(&mut self, _: usize, _: usize) {
        self.swaps += 1;
    }
}
