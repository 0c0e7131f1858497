use std::error::Error;
use std::fs::File;
use std::hint::black_box;
use std::io::{self, BufReader};
use std::num::NonZeroUsize;
use std::time::Instant;

use indicatif::{ParallelProgressIterator, ProgressBar, ProgressStyle};
use rayon::prelude::*;

pub mod args;
pub mod config;
pub mod errors;
pub mod input;
pub mod top_k;
pub mod traits;


pub use crate::top_k::{BoundedTopK, Entry, Fill};
pub use crate::traits::TotalOrderKey;

use crate::config::{Config, Source};
use crate::errors::TopKError;

/// Loads every candidate from the configured source.
///
/// # Errors
///
/// Returns [`TopKError::IoError`] if the input file cannot be opened or a read fails.
pub fn load_candidates(source: &Source) -> Result<Vec<Entry>, TopKError> {
    match source {
        Source::Random { count, seed } => {
            log::info!("Generating {} random candidates (seed {})", count, seed);
            Ok(input::generate_random(*count, *seed))
        }
        Source::File(path) => {
            log::info!("Reading candidates from {}", path.display());
            let file = File::open(path)?;
            input::read_candidates(BufReader::new(file))
        }
        Source::Stdin => {
            log::info!("Reading candidates from stdin");
            input::read_candidates(io::stdin().lock())
        }
    }
}

/// Selects the `capacity` lowest-ranked candidates.
///
/// Candidates are split into batches of `batch_size`. Each batch is selected into its own
/// [`BoundedTopK`] on the rayon pool and the partial results are merged in batch order, so
/// the outcome is identical to inserting every candidate into one collection in sequence.
///
/// # Examples
///
/// ```
/// use std::num::NonZeroUsize;
/// use topk_select::select;
/// use topk_select::top_k::Entry;
///
/// let candidates: Vec<Entry> = (0..100u32).map(|id| Entry::new(100.0 - id as f32, id)).collect();
/// let top = select(&candidates, NonZeroUsize::new(3).unwrap(), 16, false);
///
/// let ids: Vec<u32> = top.iter().map(|e| e.id).collect();
/// assert_eq!(ids, vec![99, 98, 97]);
/// ```
pub fn select(
    candidates: &[Entry],
    capacity: NonZeroUsize,
    batch_size: usize,
    progress: bool,
) -> BoundedTopK {
    let batch_size = batch_size.max(1);

    if candidates.len() <= batch_size {
        let mut top = BoundedTopK::with_capacity(capacity);
        top.extend(candidates.iter().copied());
        return top;
    }

    let num_batches = candidates.len().div_ceil(batch_size);
    let pb = if progress {
        let pb = ProgressBar::new(num_batches as u64);
        pb.set_style(
            ProgressStyle::with_template("{bar:40} {pos}/{len} batches [{elapsed_precise}]")
                .unwrap_or_else(|_| ProgressStyle::default_bar()),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let top = candidates
        .par_chunks(batch_size)
        .progress_with(pb.clone())
        .map(|batch| {
            let mut top = BoundedTopK::with_capacity(capacity);
            top.extend(batch.iter().copied());
            top
        })
        .reduce(
            || BoundedTopK::with_capacity(capacity),
            |mut acc, partial| {
                acc.merge(&partial);
                acc
            },
        );

    pb.finish_and_clear();
    top
}

/// Runs the command line program described by `config`.
///
/// Loads the candidates, selects them `config.repeat` times (reporting the elapsed time when
/// repeated) and prints the kept entries in ascending order as `rank<TAB>id<TAB>score`.
pub fn run(config: Config) -> Result<(), Box<dyn Error>> {
    let candidates = load_candidates(&config.source)?;

    log::info!(
        "Selecting the {} lowest of {} candidates on {} threads",
        config.capacity,
        candidates.len(),
        config.num_threads
    );

    let start = Instant::now();
    let mut top = select(&candidates, config.capacity, config.batch_size, config.progress);
    for _ in 1..config.repeat {
        top = black_box(select(
            black_box(&candidates),
            config.capacity,
            config.batch_size,
            false,
        ));
    }
    let elapsed = start.elapsed();

    if config.repeat > 1 {
        log::info!(
            "{} runs done in {}ms ({:.3}ms per run)",
            config.repeat,
            elapsed.as_millis(),
            elapsed.as_secs_f64() * 1000.0 / config.repeat as f64
        );
    } else {
        log::debug!("Selection done in {}ms", elapsed.as_millis());
    }

    for (rank, entry) in top.iter().enumerate() {
        println!("{}\t{}\t{}", rank + 1, entry.id, entry.score);
    }

    Ok(())
}
