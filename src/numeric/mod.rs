//! Algorithms sorting `i32` sequences.
//!
//! All of them emit the full set of events, including comparisons and swaps,
//! except [`RadixSort`] which has nothing to compare and only reports array
//! updates and log messages.

use std::{fmt, str::FromStr};

use crate::{
    error::{ParseError, ParseResult, UnknownAlgorithm},
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
};

pub use self::{
    bubble::BubbleSort, heap::HeapSort, insertion::InsertionSort, quick::QuickSort,
    radix::RadixSort,
};

mod bubble;
mod heap;
mod insertion;
pub(crate) mod quick;
mod radix;

/// Any of the numeric algorithms, selectable at runtime.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum NumericAlgorithm {
    Bubble,
    Insertion,
    Quick,
    Heap,
    Radix,
}

impl NumericAlgorithm {
    pub const ALL: [Self; 5] = [
        Self::Bubble,
        Self::Insertion,
        Self::Quick,
        Self::Heap,
        Self::Radix,
    ];

    pub const fn descriptor(self) -> Descriptor {
        match self {
            Self::Bubble => BubbleSort::DESCRIPTOR,
            Self::Insertion => InsertionSort::DESCRIPTOR,
            Self::Quick => QuickSort::DESCRIPTOR,
            Self::Heap => HeapSort::DESCRIPTOR,
            Self::Radix => RadixSort::DESCRIPTOR,
        }
    }

    /// Short identifier as accepted by [`FromStr`].
    pub const fn key(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Insertion => "insertion",
            Self::Quick => "quick",
            Self::Heap => "heap",
            Self::Radix => "radix",
        }
    }

    /// Sort `data` in place with the selected algorithm.
    pub async fn sort<O>(self, data: &mut [i32], options: &SortOptions, observer: &mut O) -> Outcome
    where
        O: Observer<i32> + ?Sized,
    {
        match self {
            Self::Bubble => BubbleSort.sort(data, options, observer).await,
            Self::Insertion => InsertionSort.sort(data, options, observer).await,
            Self::Quick => QuickSort.sort(data, options, observer).await,
            Self::Heap => HeapSort.sort(data, options, observer).await,
            Self::Radix => RadixSort.sort(data, options, observer).await,
        }
    }
}

impl FromStr for NumericAlgorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}

impl fmt::Display for NumericAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.descriptor().name)
    }
}

/// Parse comma-separated integers such as `"5, 3, 8, 1"`.
///
/// Malformed input is rejected here so the algorithms never see it.
///
/// ```
/// use sort_trace::numeric::parse_numbers;
///
/// assert_eq!(parse_numbers(" 5,3 , 8,1").unwrap(), [5, 3, 8, 1]);
/// assert!(parse_numbers("5, three").is_err());
/// ```
pub fn parse_numbers(input: &str) -> ParseResult<Vec<i32>> {
    if input.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    input
        .split(',')
        .map(str::trim)
        .enumerate()
        .map(|(position, token)| {
            token.parse().map_err(|source| ParseError::InvalidNumber {
                position,
                token: token.to_owned(),
                source,
            })
        })
        .collect()
}
