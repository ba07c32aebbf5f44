use crate::{
    model::{descriptor::Descriptor, event::Observer, options::SortOptions, outcome::Outcome},
    tracer::{Step, Tracer},
    util::permute::Rearrange,
};

/// One bucket per byte value plus one for positions past the end of a key.
const BUCKETS: usize = 257;

/// Least-significant-digit radix sort over the decimal representation of the
/// numbers.
///
/// Every number is rendered as its distance to the minimum, zero-padded to a
/// common width, so that ordering the keys character by character is the
/// same as ordering the numbers. Negative numbers are supported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct RadixSort;

impl RadixSort {
    pub const DESCRIPTOR: Descriptor = Descriptor::new(
        "Radix sort",
        "Sort digit by digit, starting from the last one.",
    );

    /// Sort `data` in place while reporting every step to `observer`.
    ///
    /// Only array updates and log messages are emitted.
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

        tracer.finish(result, "Radix sort complete")
    }
}

async fn run<O>(data: &mut [i32], tracer: &mut Tracer<'_, i32, O>) -> Step
where
    O: Observer<i32> + ?Sized,
{
    if !tracer.begin(data, "Starting radix sort")? {
        return Ok(());
    }

    let mut keys = decimal_keys(data);
    string_radix_sort(&mut keys, data, tracer).await?;

    tracer.updated(data);

    Ok(())
}

/// Render each number as zero-padded decimal distance to the minimum.
fn decimal_keys(data: &[i32]) -> Vec<String> {
    let min = data.iter().copied().min().map_or(0, i64::from);
    let max = data.iter().copied().max().map_or(0, i64::from);
    let width = (max - min).to_string().len();

    data.iter()
        .map(|&n| format!("{:0width$}", i64::from(n) - min))
        .collect()
}

/// Radix sort `keys` from their last character to their first while moving
/// `data` along with them.
///
/// Each pass is a stable counting sort on one character position. Keys that
/// are too short for a position sort before all others. The number of passes
/// is always the length of the longest key.
pub(crate) async fn string_radix_sort<T, O>(
    keys: &mut [String],
    data: &mut [T],
    tracer: &mut Tracer<'_, T, O>,
) -> Step
where
    T: PartialEq + std::fmt::Debug,
    O: Observer<T> + ?Sized,
{
    let max_len = keys.iter().map(String::len).max().unwrap_or(0);

    tracer.narrate(&format!("Longest key: {max_len} characters"));

    for position in (0..max_len).rev() {
        tracer.narrate(&format!("Sorting by character {} of {max_len}", position + 1));

        let mut rearrange = Rearrange::new(counting_order(keys, position));

        for k in 0..keys.len() {
            let Some(from) = rearrange.place(keys, k) else {
                continue;
            };

            data.swap(k, from);

            if data[k] != data[from] {
                tracer.detail(|| format!("Moving {:?} to position {k}", data[k]));
                tracer.updated(data);
                tracer.pause().await?;
            }
        }
    }

    Ok(())
}

fn bucket(key: &str, position: usize) -> usize {
    key.as_bytes()
        .get(position)
        .map_or(0, |&byte| usize::from(byte) + 1)
}

/// Stable order of `keys` by the character at `position`.
///
/// `order[k]` is the index of the key that belongs at `k`.
fn counting_order(keys: &[String], position: usize) -> Vec<usize> {
    let mut count = [0_usize; BUCKETS];

    for key in keys {
        count[bucket(key, position)] += 1;
    }

    for i in 1..BUCKETS {
        count[i] += count[i - 1];
    }

    let mut order = vec![0; keys.len()];

    for (idx, key) in keys.iter().enumerate().rev() {
        let bucket = bucket(key, position);
        count[bucket] -= 1;
        order[count[bucket]] = idx;
    }

    order
}
