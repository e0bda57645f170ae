//! CLI definition for the `factoid` binary.
//!
//! The parser lives in the library so it stays unit-testable; `main.rs` is
//! the composition root that initializes logging and dispatches.

#![deny(unused_crate_dependencies)]

pub mod commands;
pub mod parser;

pub use commands::Commands;
pub use parser::Cli;

// Dependencies used by the main.rs binary only
use anyhow as _;
use factoid_axum as _;
use factoid_core as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;
