use clap::Parser;
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// (optional) Number of lowest-scoring candidates to keep
    #[arg(short = 'k', long = "capacity", default_value_t = 64)]
    pub capacity: usize,

    /// (optional) Path to a file with one `score id` candidate per line, defaults to stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<String>,

    /// (optional) Generate this many random candidates instead of reading any input
    #[arg(short = 'r', long = "random")]
    pub random: Option<usize>,

    /// (optional) Seed for random candidate generation
    #[arg(short = 's', long = "seed", default_value_t = 42)]
    pub seed: u64,

    /// (optional) Number of candidates each worker selects from at one time
    #[arg(short = 'b', long = "batch-size", default_value_t = 1000)]
    pub batch_size: usize,

    /// (optional) Run the selection this many times and report the elapsed time
    #[arg(short = 'n', long = "repeat", default_value_t = 1)]
    pub repeat: usize,

    /// (optional) Show a progress bar while batches are selected
    #[arg(short, long)]
    pub progress: bool,

    #[arg(short, long)]
    pub verbose: bool,
}
