//! Testing infrastructure for emokbd integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: isolated config/state/cache directories and CLI execution
//! - `assertions`: checks over the JSON output of the CLI
//! - `fixtures`: a small emojibase + UnicodeData corpus and sample files

pub mod assertions;
pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
