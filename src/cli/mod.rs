//! Command line interface

pub mod commands;
pub mod display;
pub mod manifests;

pub use commands::{CliArgs, Commands};
