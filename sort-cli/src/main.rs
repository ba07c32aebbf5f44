use std::{
    env,
    fmt::Display,
    fs::File,
    io::{self, BufWriter, Write},
    time::{Duration, Instant},
};

use rand::Rng;
use serde::Serialize;
use sort_trace::{
    numeric::{parse_numbers, NumericAlgorithm},
    text::{count_frequency, generate_words, most_frequent, split_words},
    Cancellation, Descriptor, Event, EventLog, Observer, Outcome, SortOptions, TextAlgorithm,
};
use tokio::runtime::Runtime;

const DEFAULT_NUMBERS: &str = "5, 3, 8, 1, 9, 2";
const DEFAULT_TEXT: &str = "The quick brown fox jumps over the lazy dog";
const TOP_WORDS: usize = 10;

fn main() {
    // A missing `.env` file is fine, variables may come from the environment
    let _ = dotenv::dotenv();

    Runtime::new()
        .expect("failed to create runtime")
        .block_on(async_main());
}

async fn async_main() {
    let mode = env::var("SORT_MODE").unwrap_or_else(|_| "numbers".to_owned());
    let algorithm = env::var("SORT_ALGORITHM").unwrap_or_else(|_| "quick".to_owned());

    let delay = env::var("SORT_DELAY_MS").ok().map(|ms| {
        ms.parse()
            .map(Duration::from_millis)
            .expect("`SORT_DELAY_MS` must be an integer")
    });

    let generate = env::var("SORT_GENERATE").ok().map(|count| {
        count
            .parse::<usize>()
            .expect("`SORT_GENERATE` must be an integer")
    });

    let input = env::var("SORT_INPUT").ok();
    let trace_path = env::var("SORT_TRACE_PATH").ok();

    let signal = Cancellation::new();
    tokio::spawn(cancel_on_ctrl_c(signal.clone()));

    match mode.trim().to_ascii_lowercase().as_str() {
        "numbers" => {
            let algorithm: NumericAlgorithm = algorithm.parse().unwrap_or_else(|err| exit(err));

            let data = match generate {
                Some(count) => random_numbers(count),
                None => parse_numbers(input.as_deref().unwrap_or(DEFAULT_NUMBERS))
                    .unwrap_or_else(|err| exit(err)),
            };

            let options = SortOptions::new()
                .delay(delay.unwrap_or(SortOptions::DEFAULT_DELAY))
                .cancellation(signal);

            sort_numbers(algorithm, data, &options, trace_path.as_deref()).await;
        }
        "words" => {
            let algorithm: TextAlgorithm = algorithm.parse().unwrap_or_else(|err| exit(err));

            let words = match generate {
                Some(count) => generate_words(count),
                None => split_words(input.as_deref().unwrap_or(DEFAULT_TEXT)),
            };

            if words.is_empty() {
                exit("no words to sort");
            }

            let delay = delay.unwrap_or_else(|| word_delay(words.len()));
            let options = SortOptions::new().delay(delay).cancellation(signal);

            sort_words(algorithm, words, &options, trace_path.as_deref()).await;
        }
        other => exit(format!("unknown mode `{other}`, expected `numbers` or `words`")),
    }
}

async fn sort_numbers(
    algorithm: NumericAlgorithm,
    mut data: Vec<i32>,
    options: &SortOptions,
    trace_path: Option<&str>,
) {
    print_header(algorithm.descriptor());
    println!("Input: {data:?}");

    let mut printer = Printer::new(trace_path.is_some());
    let outcome = algorithm.sort(&mut data, options, &mut printer).await;

    print_outcome(outcome);
    println!("Result: {data:?}");

    if let Some(path) = trace_path {
        write_trace(path, printer.log.events());
    }
}

async fn sort_words(
    algorithm: TextAlgorithm,
    mut words: Vec<String>,
    options: &SortOptions,
    trace_path: Option<&str>,
) {
    print_header(algorithm.descriptor());
    println!("Words: {}", words.len());

    let mut printer = Printer::new(trace_path.is_some());
    let start = Instant::now();
    let outcome = algorithm.sort(&mut words, options, &mut printer).await;
    let elapsed = start.elapsed();

    print_outcome(outcome);
    println!("Elapsed: {elapsed:?}");

    match algorithm.first_unsorted(&words) {
        None => println!("Check: words are sorted"),
        Some(idx) => println!(
            "Check: `{}` at position {idx} is out of order after `{}`",
            words[idx],
            words[idx - 1]
        ),
    }

    println!("Result: {}", words.join(" "));

    let frequency = count_frequency(&words);
    println!("Most frequent words:");

    for (word, count) in most_frequent(&frequency, TOP_WORDS) {
        println!("  {word}: {count}");
    }

    if let Some(path) = trace_path {
        write_trace(path, printer.log.events());
    }
}

/// Prints every event as it arrives and optionally records it.
struct Printer<T> {
    record: bool,
    log: EventLog<T>,
}

impl<T> Printer<T> {
    fn new(record: bool) -> Self {
        Self {
            record,
            log: EventLog::new(),
        }
    }
}

impl<T: Clone + std::fmt::Debug> Observer<T> for Printer<T> {
    fn on_array_updated(&mut self, snapshot: &[T]) {
        println!("  {snapshot:?}");

        if self.record {
            self.log.on_array_updated(snapshot);
        }
    }

    fn on_log(&mut self, message: &str) {
        println!("{message}");

        if self.record {
            self.log.on_log(message);
        }
    }

    fn on_compare(&mut self, i: usize, j: usize) {
        if self.record {
            self.log.on_compare(i, j);
        }
    }

    fn on_swap(&mut self, i: usize, j: usize) {
        if self.record {
            self.log.on_swap(i, j);
        }
    }
}

async fn cancel_on_ctrl_c(signal: Cancellation) {
    if tokio::signal::ctrl_c().await.is_ok() {
        println!("[INFO] Cancelling...");
        signal.cancel();
    }
}

/// Pacing for word runs, shorter for larger inputs.
const fn word_delay(count: usize) -> Duration {
    if count > 100 {
        Duration::from_millis(1)
    } else {
        Duration::from_millis(10)
    }
}

fn random_numbers(count: usize) -> Vec<i32> {
    let mut rng = rand::thread_rng();

    (0..count).map(|_| rng.gen_range(0..1000)).collect()
}

fn print_header(descriptor: Descriptor) {
    println!("[INFO] {descriptor}");
}

fn print_outcome(outcome: Outcome) {
    match outcome {
        Outcome::Completed => println!("[INFO] Completed"),
        Outcome::Cancelled => println!("[INFO] Cancelled"),
    }
}

fn write_trace<T: Serialize>(path: &str, events: &[Event<T>]) {
    let file = File::create(path).expect("failed to create trace file");
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, events).expect("failed to serialize trace");
    writer.flush().expect("failed to write trace file");

    println!("[INFO] Trace written to {path}");
}

fn exit(err: impl Display) -> ! {
    let _ = writeln!(io::stderr(), "[ERROR] {err}");

    std::process::exit(1)
}
