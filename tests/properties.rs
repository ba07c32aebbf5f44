use futures::executor::block_on;
use proptest::prelude::*;
use sort_trace::{
    numeric::NumericAlgorithm,
    text::{compare_words, first_unsorted, TextAlgorithm},
    Cancellation, EventLog, SortOptions, WordQuickSort, WordRadixSort,
};

use crate::common::{is_permutation, Watchdog};

mod common;

fn unpaced() -> SortOptions {
    SortOptions::new().delay_ms(0)
}

fn sort_numbers(algorithm: NumericAlgorithm, data: &mut [i32]) -> Watchdog<i32> {
    let mut watchdog = Watchdog::new(data, Cancellation::new());
    let outcome = block_on(algorithm.sort(data, &unpaced(), &mut watchdog));
    assert!(outcome.is_completed(), "{algorithm}");

    watchdog
}

proptest! {
    #[test]
    fn numeric_sorts(input in prop::collection::vec(-1000_i32..1000, 0..40)) {
        for algorithm in NumericAlgorithm::ALL {
            let mut data = input.clone();
            let _ = sort_numbers(algorithm, &mut data);

            prop_assert!(is_permutation(&data, &input), "{}", algorithm);
            prop_assert!(data.windows(2).all(|w| w[0] <= w[1]), "{}: {:?}", algorithm, data);
        }
    }

    #[test]
    fn numeric_idempotent(input in prop::collection::vec(any::<i32>(), 0..30)) {
        let mut sorted = input;
        sorted.sort_unstable();

        for algorithm in NumericAlgorithm::ALL {
            let mut data = sorted.clone();
            let watchdog = sort_numbers(algorithm, &mut data);

            prop_assert_eq!(&data, &sorted);
            prop_assert_eq!(watchdog.swaps, 0, "{}", algorithm);
        }
    }

    #[test]
    fn bubble_comparison_bound(input in prop::collection::vec(any::<i32>(), 2..30)) {
        let n = input.len();
        let mut data = input;
        let watchdog = sort_numbers(NumericAlgorithm::Bubble, &mut data);

        prop_assert!(watchdog.comparisons <= n * (n - 1) / 2);
    }

    #[test]
    fn cancelled_numeric_stays_permutation(
        input in prop::collection::vec(-50_i32..50, 2..30),
        cancel_after in 1_usize..20,
    ) {
        for algorithm in NumericAlgorithm::ALL {
            let signal = Cancellation::new();
            let options = unpaced().cancellation(signal.clone());
            let mut watchdog = Watchdog::new(&input, signal).cancel_after(cancel_after);
            let mut data = input.clone();

            let outcome = block_on(algorithm.sort(&mut data, &options, &mut watchdog));

            prop_assert!(is_permutation(&data, &input), "{}", algorithm);

            if outcome.is_cancelled() {
                prop_assert!(watchdog.snapshots >= cancel_after, "{}", algorithm);
                prop_assert!(!watchdog.messages.iter().any(|msg| msg.ends_with("complete")));
            }
        }
    }

    #[test]
    fn word_quick_sort_orders(input in prop::collection::vec("[a-zA-Z0-9]{0,6}", 0..40)) {
        let mut data = input.clone();
        let mut watchdog = Watchdog::new(&input, Cancellation::new());
        let outcome = block_on(WordQuickSort.sort(&mut data, &unpaced(), &mut watchdog));

        prop_assert!(outcome.is_completed());
        prop_assert!(is_permutation(&data, &input));
        prop_assert!(data.windows(2).all(|w| compare_words(&w[0], &w[1]).is_le()));
        prop_assert_eq!(watchdog.comparisons, 0);
        prop_assert_eq!(watchdog.swaps, 0);
    }

    #[test]
    fn word_radix_sort_orders(input in prop::collection::vec("[a-zA-Z]{0,6}", 0..40)) {
        let mut data = input.clone();
        let mut watchdog = Watchdog::new(&input, Cancellation::new());
        let outcome = block_on(WordRadixSort.sort(&mut data, &unpaced(), &mut watchdog));

        prop_assert!(outcome.is_completed());
        prop_assert!(is_permutation(&data, &input));
        prop_assert_eq!(first_unsorted(&data), None, "{:?}", data);
    }

    #[test]
    fn word_radix_pass_count(input in prop::collection::vec("[a-z]{1,8}", 2..20)) {
        prop_assume!(input.windows(2).any(|w| w[0] != w[1]));

        let max_len = input.iter().map(String::len).max().unwrap();
        let mut data = input;
        let mut log = EventLog::new();
        let _ = block_on(WordRadixSort.sort(&mut data, &unpaced(), &mut log));

        let passes = log.messages().filter(|msg| msg.starts_with("Letter")).count();
        prop_assert_eq!(passes, max_len);
    }

    #[test]
    fn cancelled_words_stay_permutation(
        input in prop::collection::vec("[a-z]{1,5}", 2..40),
        cancel_after in 1_usize..5,
    ) {
        for algorithm in TextAlgorithm::ALL {
            let signal = Cancellation::new();
            let options = unpaced().cancellation(signal.clone());
            let mut watchdog = Watchdog::new(&input, signal).cancel_after(cancel_after);
            let mut data = input.clone();

            let _ = block_on(algorithm.sort(&mut data, &options, &mut watchdog));

            prop_assert!(is_permutation(&data, &input), "{}", algorithm);
        }
    }
}
