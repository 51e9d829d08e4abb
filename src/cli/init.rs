//! pondo init command implementation
//!
//! Creates the configuration directory and an empty tasks file.

use std::path::PathBuf;

use crate::error::Result;
use crate::ops;
use crate::output::{emit_success, HumanOutput, OutputOptions, SUCCESS_MARK};
use crate::storage::TaskStore;

#[derive(serde::Serialize)]
struct InitReport {
    config_dir: PathBuf,
    tasks_file: PathBuf,
    already_initialized: bool,
    created: InitCreated,
}

#[derive(serde::Serialize)]
struct InitCreated {
    config_dir: bool,
    tasks_file: bool,
}

pub fn run(store: &TaskStore, options: OutputOptions) -> Result<()> {
    let outcome = ops::init(store)?;
    let dir = store.config_dir().display().to_string();

    let report = InitReport {
        config_dir: store.config_dir().to_path_buf(),
        tasks_file: store.tasks_file().to_path_buf(),
        already_initialized: outcome.already_initialized(),
        created: InitCreated {
            config_dir: outcome.created_dir,
            tasks_file: outcome.created_file,
        },
    };

    let human = if outcome.already_initialized() {
        HumanOutput::new(format!("pondo is already initialized in {dir}"))
    } else {
        let mut human = HumanOutput::new(format!("{SUCCESS_MARK} Initialized pondo in {dir}"));
        human.push_next_step("pondo add <task>");
        human
    };

    emit_success(options, "init", &report, Some(&human))
}
