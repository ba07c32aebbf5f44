//! Classical sorting algorithms that narrate what they do.
//!
//! ## Description
//!
//! Every algorithm sorts a caller-owned slice in place and reports each
//! comparison, swap, and change of element order to an [`Observer`] while
//! it runs. After every observable mutation the sort suspends for a
//! configurable delay, which paces playback, and checks a [`Cancellation`]
//! signal so that a run can be stopped early.
//!
//! Numeric algorithms: [`BubbleSort`], [`InsertionSort`], [`QuickSort`],
//! [`HeapSort`], and [`RadixSort`].
//!
//! Word algorithms: [`WordQuickSort`] and [`WordRadixSort`].
//!
//! ## Usage
//!
//! ```
//! use sort_trace::{numeric::NumericAlgorithm, Cancellation, EventLog, SortOptions};
//!
//! # #[cfg(feature = "async_tokio")]
//! # tokio::runtime::Builder::new_current_thread().enable_time().build().unwrap().block_on(async {
//! let mut data = vec![170, 45, 75, 90, 802, 24, 2, 66];
//!
//! // Raising this signal from anywhere stops the sort after its current step
//! let signal = Cancellation::new();
//!
//! let options = SortOptions::new()
//!     .delay_ms(1)
//!     .cancellation(signal.clone());
//!
//! let mut log = EventLog::new();
//! let outcome = NumericAlgorithm::Radix.sort(&mut data, &options, &mut log).await;
//!
//! assert!(outcome.is_completed());
//! assert_eq!(data, [2, 24, 45, 66, 75, 90, 170, 802]);
//!
//! for message in log.messages() {
//!     println!("{message}");
//! }
//! # });
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | Enables the `async_tokio` feature |
//! | `async_tokio` | Pacing delays are `tokio` timers. | [`tokio`]
//! | `async_std` | Pacing delays are `async-std` timers. Mutually exclusive with `async_tokio`. | [`async-std`]
//! | `tracing` | The start and outcome of every sort are logged through `tracing::debug`. | [`tracing`]
//! | `serde` | Events, outcomes, and descriptors implement `serde::Serialize`. | [`serde`]
//!
//! Without either async feature the delay blocks the current thread.
//!
//! [`tokio`]: https://docs.rs/tokio
//! [`async-std`]: https://docs.rs/async-std
//! [`tracing`]: https://docs.rs/tracing
//! [`serde`]: https://docs.rs/serde

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::similar_names
)]

#[macro_use]
mod util;

#[doc(inline)]
pub use self::{
    error::{ParseError, ParseResult, UnknownAlgorithm},
    model::{
        cancel::Cancellation,
        descriptor::Descriptor,
        event::{Event, EventLog, Observer},
        options::SortOptions,
        outcome::Outcome,
    },
    numeric::{BubbleSort, HeapSort, InsertionSort, NumericAlgorithm, QuickSort, RadixSort},
    text::{TextAlgorithm, WordQuickSort, WordRadixSort},
};

pub mod numeric;
pub mod text;

/// Types shared by all algorithms.
pub mod model;

mod error;
mod tracer;
