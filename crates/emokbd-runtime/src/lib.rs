//! Ambient plumbing for the emokbd picker: where files live, what the
//! configuration says, where logs go, and how a ready [`Board`] is put
//! together from the corpus, the recent list and the configured layouts.

mod error;

pub mod config;
pub mod environment;
pub mod logging;
pub mod paths;

pub use config::{Config, LayoutConfig};
pub use environment::Environment;
pub use error::{Error, Result};
pub use logging::init_logging;
pub use paths::{DirKind, DirOverrides, Dirs};

pub use emokbd_engine::Board;
