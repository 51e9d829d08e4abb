//! pondo add command implementation

use crate::error::Result;
use crate::id::IdGenerator;
use crate::ops;
use crate::output::{emit_success, HumanOutput, OutputOptions, SUCCESS_MARK};
use crate::storage::TaskStore;

pub fn run<G>(store: &TaskStore, ids: &mut G, words: &[String], options: OutputOptions) -> Result<()>
where
    G: IdGenerator + ?Sized,
{
    let task = ops::add(store, ids, &words.join(" "))?;

    let human = HumanOutput::new(format!(
        "{SUCCESS_MARK} Added task: {} (ID: {})",
        task.name, task.id
    ));
    emit_success(options, "add", &task, Some(&human))
}
