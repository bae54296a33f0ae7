//! Command Line Interface (CLI) layer for nftprep.
//!
//! This module defines argument parsing (`args`), error types (`errors`),
//! and the orchestration logic (`runner`) for the single-item and batch
//! flows. It wires user-provided options to the library workflows exposed
//! via `nftprep::api`.
//!
//! If you are embedding nftprep into another application, prefer using
//! the high-level `nftprep::api` module instead of calling the CLI code.
pub mod args;
pub mod errors;
pub mod runner;

pub use args::CliArgs;
pub use runner::run;
