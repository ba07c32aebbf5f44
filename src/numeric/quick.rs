use std::{cmp::Ordering, fmt::Debug};

use crate::{
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
    tracer::{Step, Tracer},
};

/// Lomuto quicksort with the last element of each range as pivot.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct QuickSort;

impl QuickSort {
    pub const DESCRIPTOR: Descriptor = Descriptor::new(
        "Quick sort",
        "Divide and conquer: pick a pivot and sort everything around it.",
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

        tracer.finish(result, "Quick sort complete")
    }
}

async fn run<O>(data: &mut [i32], tracer: &mut Tracer<'_, i32, O>) -> Step
where
    O: Observer<i32> + ?Sized,
{
    if !tracer.begin(data, "Starting quick sort")? {
        return Ok(());
    }

    quick_sort(data, tracer, i32::cmp).await
}

/// Quicksort over any element type, shared with the word adapter.
///
/// Ranges are processed through an explicit stack in the same order a
/// recursive implementation would visit them, so adversarial inputs cannot
/// exhaust the call stack. `data` must hold at least one element.
pub(crate) async fn quick_sort<T, O, F>(
    data: &mut [T],
    tracer: &mut Tracer<'_, T, O>,
    cmp: F,
) -> Step
where
    T: Debug,
    O: Observer<T> + ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    let mut ranges = vec![(0, data.len() - 1)];

    while let Some((low, high)) = ranges.pop() {
        if low >= high {
            continue;
        }

        tracer.detail(|| format!("Sorting positions {low} to {high}"));

        let pivot = partition(data, low, high, tracer, &cmp).await?;

        tracer.detail(|| format!("Pivot {:?} settled at position {pivot}", data[pivot]));

        // Left range on top so it's handled first
        ranges.push((pivot + 1, high));

        if pivot > low {
            ranges.push((low, pivot - 1));
        }
    }

    Ok(())
}

/// Partition `data[low..=high]` around `data[high]` and return the pivot's
/// final position.
async fn partition<T, O, F>(
    data: &mut [T],
    low: usize,
    high: usize,
    tracer: &mut Tracer<'_, T, O>,
    cmp: &F,
) -> Step<usize>
where
    T: Debug,
    O: Observer<T> + ?Sized,
    F: Fn(&T, &T) -> Ordering,
{
    tracer.detail(|| format!("Picking pivot {:?}, the last in range", data[high]));

    // Next slot for an element that is not greater than the pivot
    let mut boundary = low;

    for j in low..high {
        tracer.compared(j, high);
        tracer.detail(|| format!("Comparing {:?} with pivot {:?}", data[j], data[high]));

        if cmp(&data[j], &data[high]).is_le() {
            if boundary != j {
                tracer.swapped(boundary, j);
                tracer.detail(|| format!("Swapping {:?} and {:?}", data[boundary], data[j]));

                data.swap(boundary, j);
                tracer.updated(data);
                tracer.pause().await?;
            }

            boundary += 1;
        }
    }

    if boundary != high {
        tracer.swapped(boundary, high);
        tracer.detail(|| format!("Moving pivot {:?} to position {boundary}", data[high]));

        data.swap(boundary, high);
        tracer.updated(data);
        tracer.pause().await?;
    }

    Ok(boundary)
}
