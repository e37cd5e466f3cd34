mod args;
mod commands;
pub mod context;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{CacheCommand, Cli, Commands};
pub use commands::run;
