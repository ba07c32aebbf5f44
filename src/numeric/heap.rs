use crate::{
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
    tracer::{Step, Tracer},
};

/// In-place binary max-heap: build the heap, then repeatedly move the root
/// behind the shrinking heap.
///
/// Input that is already sorted is detected by a compare-only pass and left
/// untouched, since building a heap would otherwise shuffle it.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct HeapSort;

impl HeapSort {
    pub const DESCRIPTOR: Descriptor = Descriptor::new(
        "Heap sort",
        "Build a pyramid out of the numbers, then take it apart piece by piece.",
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

        tracer.finish(result, "Heap sort complete")
    }
}

async fn run<O>(data: &mut [i32], tracer: &mut Tracer<'_, i32, O>) -> Step
where
    O: Observer<i32> + ?Sized,
{
    if !tracer.begin(data, "Starting heap sort")? {
        return Ok(());
    }

    if already_sorted(data, tracer) {
        tracer.narrate("Already in order, nothing to rearrange");

        return Ok(());
    }

    let n = data.len();

    tracer.narrate("Building the heap");

    for i in (0..n / 2).rev() {
        sift_down(data, n, i, tracer).await?;
    }

    tracer.narrate("Taking the heap apart");

    for end in (1..n).rev() {
        tracer.swapped(0, end);
        tracer.detail(|| format!("Moving root {} to position {end}", data[0]));

        data.swap(0, end);
        tracer.updated(data);
        tracer.pause().await?;

        sift_down(data, end, 0, tracer).await?;
    }

    Ok(())
}

fn already_sorted<O>(data: &[i32], tracer: &mut Tracer<'_, i32, O>) -> bool
where
    O: Observer<i32> + ?Sized,
{
    for i in 1..data.len() {
        tracer.compared(i - 1, i);
        tracer.detail(|| format!("Checking {} against {}", data[i - 1], data[i]));

        if data[i - 1] > data[i] {
            return false;
        }
    }

    true
}

/// Restore the heap property for the subtree at `root` within `data[..len]`.
///
/// Descends at most `log2(len)` levels.
async fn sift_down<O>(
    data: &mut [i32],
    len: usize,
    mut root: usize,
    tracer: &mut Tracer<'_, i32, O>,
) -> Step
where
    O: Observer<i32> + ?Sized,
{
    loop {
        let mut largest = root;
        let left = 2 * root + 1;
        let right = left + 1;

        if left < len {
            tracer.compared(left, largest);
            tracer.detail(|| format!("Comparing left child {} with {}", data[left], data[largest]));

            if data[left] > data[largest] {
                largest = left;
                tracer.detail(|| format!("Left child {} is larger", data[largest]));
            }
        }

        if right < len {
            tracer.compared(right, largest);
            tracer.detail(|| {
                format!("Comparing right child {} with {}", data[right], data[largest])
            });

            if data[right] > data[largest] {
                largest = right;
                tracer.detail(|| format!("Right child {} is larger", data[largest]));
            }
        }

        if largest == root {
            return Ok(());
        }

        tracer.swapped(root, largest);
        tracer.detail(|| format!("Swapping {} and {}", data[root], data[largest]));

        data.swap(root, largest);
        tracer.updated(data);
        tracer.pause().await?;

        root = largest;
    }
}
