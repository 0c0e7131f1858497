use crate::args::Args;
use crate::errors::TopKError;
use std::num::NonZeroUsize;
use std::path::PathBuf;

/// Where candidates are read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    /// `count` generated candidates, reproducible from `seed`
    Random { count: usize, seed: u64 },
    File(PathBuf),
    Stdin,
}

/// Configuration structure containing runtime settings.
///
/// # Fields
///
/// * `num_threads` - Number of threads available for batch selection
/// * `capacity` - Number of candidates to keep and output at program completion
/// * `batch_size` - Number of candidates selected by one worker at a time
/// * `repeat` - Number of times the full selection is run, for timing
/// * `source` - Where candidates come from
/// * `progress` - Bool to determine if a progress bar is drawn
/// * `verbose` - Bool to determine if debug logging is enabled
///
#[derive(Clone, Debug)]
pub struct Config {
    pub num_threads: usize,
    pub capacity: NonZeroUsize,
    pub batch_size: usize,
    pub repeat: usize,
    pub source: Source,
    pub progress: bool,
    pub verbose: bool,
}

impl Config {
    /// Builds a new Config instance from provided command line arguments.
    ///
    /// # Parameters
    ///
    /// * `args` - Reference to Args structure containing command line arguments
    ///
    /// # Returns
    ///
    /// * `Result<Config, TopKError>` - New Config instance or error if validation fails
    ///
    /// # Details
    ///
    /// Random generation takes precedence, then an input file, and stdin is used when
    /// neither was given.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// * The capacity is zero
    /// * The batch size or repeat count is zero
    /// * Both an input file and random generation were requested
    /// * More random candidates were requested than there are `u32` ids
    ///
    pub fn build(args: &Args) -> Result<Config, TopKError> {
        let num_threads = rayon::current_num_threads();
        log::debug!("Selecting with up to {} threads", num_threads);

        let capacity = NonZeroUsize::new(args.capacity).ok_or(TopKError::ZeroCapacity)?;

        if args.batch_size == 0 {
            return Err(TopKError::ConfigError(
                "batch size must be greater than zero".to_string(),
            ));
        }
        if args.repeat == 0 {
            return Err(TopKError::ConfigError(
                "repeat count must be greater than zero".to_string(),
            ));
        }

        let source = match (&args.random, &args.input) {
            (Some(_), Some(_)) => {
                return Err(TopKError::ConfigError(
                    "--random and --input cannot be used together".to_string(),
                ))
            }
            (Some(count), None) => {
                if *count > u32::MAX as usize {
                    return Err(TopKError::ConfigError(format!(
                        "cannot generate {} candidates, ids are limited to {}",
                        count,
                        u32::MAX
                    )));
                }
                Source::Random {
                    count: *count,
                    seed: args.seed,
                }
            }
            (None, Some(path)) => Source::File(PathBuf::from(path)),
            (None, None) => Source::Stdin,
        };

        Ok(Config {
            num_threads,
            capacity,
            batch_size: args.batch_size,
            repeat: args.repeat,
            source,
            progress: args.progress,
            verbose: args.verbose,
        })
    }
}
