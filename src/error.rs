use std::num::ParseIntError;

use camino::Utf8PathBuf as PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum LumiError {
    #[error("Couldn't access file '{path}'")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Couldn't parse JSON from '{path}'")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Expected 'path' or 'path:first:last', got '{0}'")]
    MalformedSource(String),
    #[error("Run bound '{value}' is not an integer")]
    InvalidBound {
        value: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Run '{key}' is not an integer")]
    InvalidRun {
        key: String,
        #[source]
        source: ParseIntError,
    },
    #[error("Line {line}: expected a run/lumi pair, got '{content}'")]
    InvalidPair { line: usize, content: String },
}

pub type Result<T, E = LumiError> = std::result::Result<T, E>;
