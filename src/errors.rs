/// Error type representing the failures that can occur while configuring a selection or
/// reading its candidates.
///
/// Inserting into a [`BoundedTopK`](crate::top_k::BoundedTopK) never fails, so none of these
/// variants come from the hot path.
#[derive(Debug)]
pub enum TopKError {
    /// A collection was requested with a capacity of zero.
    ///
    /// A zero-capacity collection would discard every candidate, which is almost certainly
    /// a caller bug, so construction is rejected instead.
    ZeroCapacity,

    /// Represents underlying I/O errors from the standard library.
    ///
    /// This variant wraps [`std::io::Error`] and is used when the candidate stream
    /// cannot be opened or read.
    IoError(std::io::Error),

    /// A line of the candidate stream could not be parsed as `score id`.
    ///
    /// `line` is 1-based.
    ParseError { line: usize, message: String },

    /// Represents invalid or contradictory runtime settings.
    ConfigError(String),
}

impl From<std::io::Error> for TopKError {
    /// Converts a [`std::io::Error`] into a [`TopKError`].
    ///
    /// # Examples
    /// ```
    /// use std::fs::File;
    /// use topk_select::errors::TopKError;
    ///
    /// fn open_candidates() -> Result<(), TopKError> {
    ///     let _file = File::open("nonexistent-candidates.txt")?;
    ///     Ok(())
    /// }
    /// assert!(matches!(open_candidates(), Err(TopKError::IoError(_))));
    /// ```
    fn from(err: std::io::Error) -> Self {
        TopKError::IoError(err)
    }
}

impl std::fmt::Display for TopKError {
    /// Formats the error for display purposes.
    ///
    /// # Examples
    /// ```
    /// use topk_select::errors::TopKError;
    /// let err = TopKError::ParseError { line: 3, message: "missing id".to_string() };
    /// assert_eq!(format!("{}", err), "Parse error on line 3: missing id");
    /// ```
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TopKError::ZeroCapacity => write!(f, "Capacity must be greater than zero"),
            TopKError::IoError(e) => write!(f, "IO error: {}", e),
            TopKError::ParseError { line, message } => {
                write!(f, "Parse error on line {}: {}", line, message)
            }
            TopKError::ConfigError(e) => write!(f, "Config error: {}", e),
        }
    }
}

impl std::error::Error for TopKError {
    /// Returns the lower-level source of this error, if any.
    ///
    /// Only [`TopKError::IoError`] wraps another error.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TopKError::IoError(e) => Some(e),
            _ => None,
        }
    }
}
