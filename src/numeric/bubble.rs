use crate::{
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
    tracer::{Step, Tracer},
};

/// Adjacent-pair passes with a shrinking bound.
///
/// Every pass runs to its end, even if nothing was swapped, so the emitted
/// trace only depends on the input length and the swaps performed.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BubbleSort;

impl BubbleSort {
    pub const DESCRIPTOR: Descriptor = Descriptor::new(
        "Bubble sort",
        "Like bubbles in soda, the big numbers float to the top.",
    );

    /// Sort `data` in place while reporting every step to `observer`.
    pub async fn sort<O>(
        &self,
        data: &mut [i32],
        options: &SortOptions,
        observer: &mut O,
    ) -> Outcome
    where
        O: Observer<i32> + ?Sized,
    {
        let mut tracer = Tracer::new(Self::DESCRIPTOR, options, observer);
        let result = run(data, &mut tracer).await;

        tracer.finish(result, "Bubble sort complete")
    }
}

async fn run<O>(data: &mut [i32], tracer: &mut Tracer<'_, i32, O>) -> Step
where
    O: Observer<i32> + ?Sized,
{
    if !tracer.begin(data, "Starting bubble sort")? {
        return Ok(());
    }

    let n = data.len();

    for i in 0..n - 1 {
        for j in 0..n - i - 1 {
            tracer.compared(j, j + 1);
            tracer.detail(|| format!("Comparing {} and {}", data[j], data[j + 1]));

            if data[j] > data[j + 1] {
                tracer.swapped(j, j + 1);
                tracer.detail(|| format!("Swapping {} and {}", data[j], data[j + 1]));

                data.swap(j, j + 1);
                tracer.updated(data);
                tracer.pause().await?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::{Cancellation, EventLog};

    fn sort(data: &mut [i32]) -> EventLog<i32> {
        let mut log = EventLog::new();
        let options = SortOptions::new().delay_ms(0);
        let outcome = block_on(BubbleSort.sort(data, &options, &mut log));
        assert!(outcome.is_completed());

        log
    }

    #[test]
    fn first_events() {
        let mut data = [5, 3, 8, 1];
        let log = sort(&mut data);

        assert_eq!(data, [1, 3, 5, 8]);
        assert_eq!(log.comparisons().next(), Some((0, 1)));
        assert_eq!(log.swaps().next(), Some((0, 1)));
        assert_eq!(log.snapshots().next(), Some([3, 5, 8, 1].as_slice()));
    }

    #[test]
    fn full_comparison_count() {
        let mut data = [1, 2, 3, 4, 5, 6];
        let log = sort(&mut data);

        assert_eq!(log.comparisons().count(), 6 * 5 / 2);
        assert_eq!(log.swaps().count(), 0);
        assert_eq!(log.snapshots().count(), 0);
    }

    #[test]
    fn snapshot_per_swap() {
        let mut data = [4, 3, 2, 1];
        let log = sort(&mut data);

        assert_eq!(log.swaps().count(), 6);
        assert_eq!(log.snapshots().count(), 6);
        assert_eq!(log.messages().last(), Some("Bubble sort complete"));
    }

    #[test]
    fn stops_after_first_swap() {
        let signal = Cancellation::new();
        let mut log = EventLog::new();
        let options = SortOptions::new().delay_ms(0).cancellation(signal.clone());
        let mut data = [3, 2, 1];

        struct CancelOnSwap<'a>(&'a Cancellation, &'a mut EventLog<i32>);

        impl Observer<i32> for CancelOnSwap<'_> {
            fn on_array_updated(&mut self, snapshot: &[i32]) {
                self.1.on_array_updated(snapshot);
                self.0.cancel();
            }

            fn on_swap(&mut self, i: usize, j: usize) {
                self.1.on_swap(i, j);
            }
        }

        let mut observer = CancelOnSwap(&signal, &mut log);
        let outcome = block_on(BubbleSort.sort(&mut data, &options, &mut observer));

        assert!(outcome.is_cancelled());
        assert_eq!(data, [2, 3, 1]);
        assert_eq!(log.swaps().count(), 1);
    }
}
