use std::fmt;

/// Result type for emokbd-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// Board or layout construction failed
    Engine(emokbd_engine::Error),

    /// Corpus could not be loaded or built
    Corpus(emokbd_corpus::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),

    /// Logging could not be initialised
    Logging(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Engine(err) => write!(f, "{}", err),
            Error::Corpus(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Logging(msg) => write!(f, "Logging error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Engine(err) => Some(err),
            Error::Corpus(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) | Error::Logging(_) => None,
        }
    }
}

impl From<emokbd_engine::Error> for Error {
    fn from(err: emokbd_engine::Error) -> Self {
        Error::Engine(err)
    }
}

impl From<emokbd_corpus::Error> for Error {
    fn from(err: emokbd_corpus::Error) -> Self {
        Error::Corpus(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
