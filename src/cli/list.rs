//! pondo list command implementation

use crate::error::Result;
use crate::ops;
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::storage::TaskStore;
use crate::task::Task;

pub const EMPTY_MESSAGE: &str = "No tasks yet. Add one with: pondo add <task>";

#[derive(serde::Serialize)]
struct ListReport<'a> {
    total: usize,
    pending: usize,
    completed: usize,
    tasks: &'a [Task],
}

pub fn run(store: &TaskStore, options: OutputOptions) -> Result<()> {
    let tasks = ops::list(store)?;

    let completed = tasks.iter().filter(|task| task.done).count();
    let report = ListReport {
        total: tasks.len(),
        pending: tasks.len() - completed,
        completed,
        tasks: &tasks,
    };

    emit_success(options, "list", &report, Some(&render(&tasks)))
}

fn render(tasks: &[Task]) -> HumanOutput {
    if tasks.is_empty() {
        return HumanOutput::new(EMPTY_MESSAGE);
    }

    let mut human = HumanOutput::new("Tasks:");
    for task in tasks {
        human.push_line(task_line(task));
    }
    human
}

fn task_line(task: &Task) -> String {
    format!("  {} {}  {}", task.status().glyph(), task.id, task.name)
}
