use std::io::BufRead;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};

use crate::errors::TopKError;
use crate::top_k::Entry;

/// Parses one line of a candidate stream.
///
/// A candidate line holds a score followed by an id, separated by whitespace and/or a
/// comma. Blank lines and lines starting with `#` carry no candidate.
///
/// # Parameters
///
/// * `line_no` - 1-based line number, used in error messages
/// * `line` - The raw line without its terminator
///
/// # Returns
///
/// * `Ok(Some(entry))` for a candidate line
/// * `Ok(None)` for a blank or comment line
///
/// # Errors
///
/// Returns [`TopKError::ParseError`] if the line does not hold exactly two fields, the
/// score is not a valid `f32`, or the id is not a valid `u32`.
///
/// # Examples
///
/// ```
/// use topk_select::input::parse_line;
/// use topk_select::top_k::Entry;
///
/// assert_eq!(parse_line(1, "0.25 7").unwrap(), Some(Entry::new(0.25, 7)));
/// assert_eq!(parse_line(2, "1e3,8").unwrap(), Some(Entry::new(1000.0, 8)));
/// assert_eq!(parse_line(3, "# header").unwrap(), None);
/// assert!(parse_line(4, "0.25").is_err());
/// ```
pub fn parse_line(line_no: usize, line: &str) -> Result<Option<Entry>, TopKError> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let parse_error = |message: String| TopKError::ParseError {
        line: line_no,
        message,
    };

    let fields: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|field| !field.is_empty())
        .collect();

    let [score, id] = fields.as_slice() else {
        return Err(parse_error(format!(
            "expected `score id`, found {} field(s)",
            fields.len()
        )));
    };

    let score: f32 = score
        .parse()
        .map_err(|e| parse_error(format!("invalid score {:?}: {}", score, e)))?;
    let id: u32 = id
        .parse()
        .map_err(|e| parse_error(format!("invalid id {:?}: {}", id, e)))?;

    Ok(Some(Entry::new(score, id)))
}

/// Reads every candidate from `reader`, one per line.
///
/// Malformed lines are logged and skipped so a single bad record does not discard the
/// rest of the stream.
///
/// # Errors
///
/// Returns [`TopKError::IoError`] if reading from `reader` fails.
pub fn read_candidates<R: BufRead>(reader: R) -> Result<Vec<Entry>, TopKError> {
    let mut candidates = Vec::new();
    let mut skipped = 0usize;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        match parse_line(idx + 1, &line) {
            Ok(Some(entry)) => candidates.push(entry),
            Ok(None) => {}
            Err(e) => {
                log::warn!("Skipping candidate: {}", e);
                skipped += 1;
            }
        }
    }

    if skipped > 0 {
        log::warn!("Skipped {} malformed line(s)", skipped);
    }
    log::debug!("Read {} candidates", candidates.len());

    Ok(candidates)
}

/// Generates `count` candidates with shuffled ids `0..count` and scores drawn uniformly
/// from `[0, 1)`.
///
/// The same `seed` always yields the same candidates in the same order.
///
/// `count` is expected to fit in a `u32`; [`Config::build`](crate::config::Config::build)
/// enforces this for the command line.
pub fn generate_random(count: usize, seed: u64) -> Vec<Entry> {
    let mut rng = StdRng::seed_from_u64(seed);

    let mut ids: Vec<u32> = (0..count as u32).collect();
    ids.shuffle(&mut rng);

    ids.into_iter()
        .map(|id| Entry::new(rng.random::<f32>(), id))
        .collect()
}
