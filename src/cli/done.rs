//! pondo done command implementation

use crate::error::Result;
use crate::ops;
use crate::output::{emit_success, HumanOutput, OutputOptions, SUCCESS_MARK};
use crate::storage::TaskStore;

#[derive(serde::Serialize)]
struct DoneReport<'a> {
    task: &'a crate::task::Task,
    already_done: bool,
}

pub fn run(store: &TaskStore, id: &str, options: OutputOptions) -> Result<()> {
    let outcome = ops::done(store, id)?;

    let header = if outcome.already_done {
        format!("Task already done: {}", outcome.task.name)
    } else {
        format!("{SUCCESS_MARK} Marked task as done: {}", outcome.task.name)
    };

    let report = DoneReport {
        task: &outcome.task,
        already_done: outcome.already_done,
    };
    emit_success(options, "done", &report, Some(&HumanOutput::new(header)))
}
