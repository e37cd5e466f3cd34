use std::fmt;

/// Result type for emokbd-engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the engine layer
#[derive(Debug)]
pub enum Error {
    /// Layout has no key characters at all
    EmptyLayout,

    /// The same key character appears twice in a layout
    DuplicateKey(char),

    /// Grid position outside the layout
    OutOfBounds { x: usize, y: usize },

    /// Key character not present on the layout
    KeyNotFound(char),

    /// No layout with the requested name or index
    UnknownLayout(String),

    /// Board constructed without any layout
    NoLayouts,

    /// Recency file could not be read or written
    Io(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyLayout => write!(f, "Layout error: layout has no keys"),
            Error::DuplicateKey(key) => {
                write!(f, "Layout error: key '{}' appears more than once", key)
            }
            Error::OutOfBounds { x, y } => {
                write!(f, "Position x:{} y:{} is outside the layout", x, y)
            }
            Error::KeyNotFound(key) => write!(f, "Key '{}' not found on layout", key),
            Error::UnknownLayout(name) => write!(f, "Unknown keyboard layout '{}'", name),
            Error::NoLayouts => write!(f, "Layout error: no layouts configured"),
            Error::Io(err) => write!(f, "IO error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}
