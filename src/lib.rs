//! pondo - Personal Task Tracking Library
//!
//! This library provides the core functionality for the pondo CLI tool:
//! a single JSON file of tasks under `~/.pondo`, and the operations that
//! read and rewrite it.
//!
//! # Core Concepts
//!
//! - **Task**: a named item that is pending until marked done
//! - **Store**: `~/.pondo/tasks.json`, rewritten whole on every change
//! - **Task ID**: `T` plus three uppercase alphanumerics, e.g. `T4QZ`
//!
//! # Module Organization
//!
//! - `cli`: Command-line interface using clap
//! - `config`: Storage path resolution
//! - `error`: Error types, exit codes, and result aliases
//! - `id`: Task ID generation
//! - `ops`: init / add / list / done
//! - `output`: Human and JSON rendering
//! - `storage`: Load, save, and initialization of the tasks file
//! - `task`: The task record

pub mod cli;
pub mod config;
pub mod error;
pub mod id;
pub mod ops;
pub mod output;
pub mod storage;
pub mod task;

pub use error::{Error, Result};
