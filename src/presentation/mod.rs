//! Presentation Layer
//!
//! This layer handles CLI argument parsing (via clap). Rendering lives in
//! [`crate::ui`].

pub mod cli;

pub use cli::{Cli, ColorWhen, Commands, ViewArg};
