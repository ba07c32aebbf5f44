use crate::{
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
    tracer::{Step, Tracer},
};

/// Grows a sorted prefix by sliding each new element left into its place.
///
/// Each step to the left is reported as a comparison followed by a swap of
/// the two neighboring positions. The element is moved by actual swaps so
/// every intermediate snapshot holds all initial elements.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InsertionSort;

impl InsertionSort {
    pub const DESCRIPTOR: Descriptor = Descriptor::new(
        "Insertion sort",
        "Like sorting cards in your hand, every element is slid into its place.",
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

        tracer.finish(result, "Insertion sort complete")
    }
}

async fn run<O>(data: &mut [i32], tracer: &mut Tracer<'_, i32, O>) -> Step
where
    O: Observer<i32> + ?Sized,
{
    if !tracer.begin(data, "Starting insertion sort")? {
        return Ok(());
    }

    for i in 1..data.len() {
        let key = data[i];
        let mut j = i;

        tracer.detail(|| format!("Taking {key} from position {i}"));

        while j > 0 && data[j - 1] > key {
            tracer.compared(j - 1, i);
            tracer.detail(|| format!("Shifting {} to the right", data[j - 1]));

            data.swap(j - 1, j);
            tracer.swapped(j - 1, j);
            j -= 1;

            tracer.updated(data);
            tracer.pause().await?;
        }

        tracer.detail(|| format!("Inserting {key} at position {j}"));
        tracer.updated(data);
    }

    Ok(())
}
