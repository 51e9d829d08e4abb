//! Command-line interface for pondo
//!
//! This module defines the CLI structure using clap derive macros.
//! Each subcommand is implemented in its own submodule.

use std::io;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, Subcommand};

use crate::config::{Config, CONFIG_DIR_NAME, HOME_ENV};
use crate::error::{Error, Result};
use crate::id::RandomIdGenerator;
use crate::output::OutputOptions;
use crate::storage::TaskStore;

mod add;
mod done;
mod init;
mod list;

/// pondo - a tiny personal task tracker
///
/// Keeps a list of tasks in ~/.pondo/tasks.json. Add tasks, list them,
/// and mark them done.
#[derive(Parser, Debug)]
#[command(name = "pondo")]
#[command(author, version, about, long_about = None)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Print version
    #[arg(short = 'v', long = "version", action = clap::ArgAction::Version)]
    pub version: Option<bool>,

    /// Directory to keep .pondo in (defaults to your home directory)
    #[arg(long, global = true, env = HOME_ENV, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the task store in ~/.pondo
    Init,

    /// Add a new task
    Add {
        /// Task text; multiple words are joined with spaces
        #[arg(value_name = "TASK")]
        words: Vec<String>,
    },

    /// List all tasks
    #[command(visible_alias = "ls")]
    List,

    /// Mark a task as done
    Done {
        /// Task ID (e.g. T4QZ)
        id: Option<String>,
    },
}

impl Commands {
    /// Name reported in JSON envelopes
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init => "init",
            Commands::Add { .. } => "add",
            Commands::List => "list",
            Commands::Done { .. } => "done",
        }
    }
}

impl Cli {
    /// Name of the invoked subcommand, or `pondo` when there is none.
    pub fn command_name(&self) -> &'static str {
        self.command.as_ref().map_or("pondo", Commands::name)
    }

    /// Execute the CLI command
    pub fn run(self) -> Result<()> {
        let options = OutputOptions {
            json: self.json,
            quiet: self.quiet,
        };

        let Some(command) = self.command else {
            return print_usage();
        };

        let config = Config::resolve(self.home.as_deref())
            .map_err(|err| escalate_for_init(&command, err))?;
        let store = TaskStore::new(config);

        match command {
            Commands::Init => init::run(&store, options),
            Commands::Add { words } => add::run(&store, &mut RandomIdGenerator, &words, options),
            Commands::List => list::run(&store, options),
            Commands::Done { id } => done::run(&store, id.as_deref().unwrap_or(""), options),
        }
    }
}

/// Only init treats a missing home directory as fatal.
fn escalate_for_init(command: &Commands, err: Error) -> Error {
    match (command, err) {
        (Commands::Init, Error::HomeNotFound) => Error::InitFailed {
            path: PathBuf::from(CONFIG_DIR_NAME),
            source: io::Error::new(
                io::ErrorKind::NotFound,
                "could not determine the home directory",
            ),
        },
        (_, err) => err,
    }
}

/// Print the long help text on stdout.
pub fn print_usage() -> Result<()> {
    Cli::command().print_long_help()?;
    println!();
    Ok(())
}
