use std::fmt;
use std::path::PathBuf;

/// Result type for emokbd-corpus operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while reading sources or caches
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// JSON parsing failed
    Json(serde_json::Error),

    /// UnicodeData.txt could not be read as `;` separated records
    Csv(csv::Error),

    /// Source files needed to build the corpus are not present
    MissingSources(Vec<PathBuf>),

    /// Cache file is malformed
    Cache { file: PathBuf, line: usize, reason: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Json(err) => write!(f, "JSON error: {}", err),
            Error::Csv(err) => write!(f, "UnicodeData error: {}", err),
            Error::MissingSources(paths) => {
                write!(f, "Corpus source files not found:")?;
                for path in paths {
                    write!(f, "\n  {}", path.display())?;
                }
                Ok(())
            }
            Error::Cache { file, line, reason } => {
                write!(f, "Cache error: {}:{}: {}", file.display(), line, reason)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Json(err) => Some(err),
            Error::Csv(err) => Some(err),
            Error::MissingSources(_) | Error::Cache { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}
