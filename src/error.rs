use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the trip-data pipeline.
///
/// The selector variants (`UnknownCity`, `UnknownMonth`, `UnknownDay`) come
/// out of `FromStr` and are meant to be caught by the prompt/CLI layer for
/// re-prompting. The load variants are fatal for the affected load: one bad
/// record rejects the whole file, since the derived calendar columns assume
/// every start time parsed.
#[derive(Debug, Error)]
pub enum DataError {
    /// City name outside the closed three-city set.
    #[error("unknown city '{name}' (expected Chicago, New York City, or Washington)")]
    UnknownCity { name: String },

    /// Month selector that is not "all" or one of January through June.
    #[error("unknown month '{name}' (expected \"all\" or January through June)")]
    UnknownMonth { name: String },

    /// Weekday selector that is not "all" or a weekday name.
    #[error("unknown day '{name}' (expected \"all\" or a weekday name)")]
    UnknownDay { name: String },

    /// The city data file could not be opened or read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record failed to decode.
    #[error("{}: row {row}: malformed record: {source}", path.display())]
    MalformedRecord {
        path: PathBuf,
        /// 1-based data row; 0 means the header record itself.
        row: usize,
        #[source]
        source: csv::Error,
    },

    /// A `Start Time` value did not match the expected timestamp layout.
    #[error("{}: row {row}: unparseable start time '{value}'", path.display())]
    MalformedTimestamp {
        path: PathBuf,
        row: usize,
        value: String,
    },
}
