
use std::io;

use super::line_counter::Location;

/// Everything that can stop a generation run.
///
/// A single error aborts the whole run: skipping one terminal would shift
/// the priorities of every terminal declared after it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed pattern `{pattern}` at position {position}: {reason}")]
    MalformedPattern {
        pattern: String,
        position: usize,
        reason: &'static str,
    },

    #[error("{file}:{location}: malformed declaration: {reason}")]
    MalformedDeclaration {
        file: String,
        location: Location,
        reason: String,
    },

    #[error("{file}:{location}: terminal `{name}` is declared twice")]
    DuplicateTerminal {
        file: String,
        location: Location,
        name: String,
    },

    #[error("no terminals declared")]
    NoPatterns,

    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
}

impl Error {
    pub fn io(path: &str, source: io::Error) -> Self {
        Error::Io {
            path: path.to_string(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
