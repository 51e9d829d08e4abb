//! Task operations: init, add, list, done.
//!
//! Each operation is one load-mutate-save unit against the store and returns
//! a typed result. Nothing here prints; the CLI layer renders outcomes and
//! errors.

use chrono::Utc;

use crate::error::{Error, Result};
use crate::id::IdGenerator;
use crate::storage::{InitOutcome, TaskStore};
use crate::task::Task;

/// How many IDs `add` draws before giving up on finding an unused one
pub const MAX_ID_ATTEMPTS: usize = 32;

/// Result of `done`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoneOutcome {
    pub task: Task,
    /// The task was already completed; nothing was written.
    pub already_done: bool,
}

/// Create the store if it is missing.
pub fn init(store: &TaskStore) -> Result<InitOutcome> {
    store.initialize_if_absent()
}

/// Append a new pending task named `raw_name` (trimmed).
pub fn add<G>(store: &TaskStore, ids: &mut G, raw_name: &str) -> Result<Task>
where
    G: IdGenerator + ?Sized,
{
    let name = raw_name.trim();
    if name.is_empty() {
        return Err(Error::Validation("Task name is required".to_string()));
    }

    let mut tasks = store.load()?;
    let id = unused_id(ids, &tasks)?;
    let task = Task::new(id, name, Utc::now());
    tasks.push(task.clone());
    store.save(&tasks)?;

    tracing::info!(id = %task.id, name = %task.name, "task added");
    Ok(task)
}

/// All tasks in creation order.
pub fn list(store: &TaskStore) -> Result<Vec<Task>> {
    store.load()
}

/// Mark the first task matching `task_id` as completed.
pub fn done(store: &TaskStore, task_id: &str) -> Result<DoneOutcome> {
    let task_id = task_id.trim();
    if task_id.is_empty() {
        return Err(Error::Validation("Task ID is required".to_string()));
    }

    let mut tasks = store.load()?;
    let task = tasks
        .iter_mut()
        .find(|task| task.matches_id(task_id))
        .ok_or_else(|| Error::TaskNotFound(task_id.to_string()))?;

    if !task.complete(Utc::now()) {
        tracing::debug!(id = %task.id, "task already completed");
        return Ok(DoneOutcome {
            task: task.clone(),
            already_done: true,
        });
    }

    let task = task.clone();
    store.save(&tasks)?;

    tracing::info!(id = %task.id, name = %task.name, "task completed");
    Ok(DoneOutcome {
        task,
        already_done: false,
    })
}

fn unused_id<G>(ids: &mut G, existing: &[Task]) -> Result<String>
where
    G: IdGenerator + ?Sized,
{
    for _ in 0..MAX_ID_ATTEMPTS {
        let candidate = ids.generate();
        if !existing.iter().any(|task| task.id == candidate) {
            return Ok(candidate);
        }
        tracing::debug!(id = %candidate, "generated id already in use, retrying");
    }
    Err(Error::IdExhausted(MAX_ID_ATTEMPTS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::id::RandomIdGenerator;
    use tempfile::TempDir;

    /// Hands out the given IDs in order, then repeats the last one.
    struct Scripted(Vec<&'static str>);

    impl IdGenerator for Scripted {
        fn generate(&mut self) -> String {
            if self.0.len() > 1 {
                self.0.remove(0).to_string()
            } else {
                self.0[0].to_string()
            }
        }
    }

    fn setup() -> (TempDir, TaskStore) {
        let temp = TempDir::new().unwrap();
        let store = TaskStore::new(Config::from_home(temp.path()));
        init(&store).unwrap();
        (temp, store)
    }

    #[test]
    fn add_appends_one_pending_task() {
        let (_temp, store) = setup();
        let task = add(&store, &mut RandomIdGenerator, "  Write report  ").unwrap();

        assert_eq!(task.name, "Write report");
        assert!(!task.done);
        assert!(task.completed_at.is_none());

        let tasks = store.load().unwrap();
        assert_eq!(tasks, vec![task]);
    }

    #[test]
    fn add_rejects_blank_names_without_touching_store() {
        let (_temp, store) = setup();
        for name in ["", "   ", "\t\n"] {
            let err = add(&store, &mut RandomIdGenerator, name).unwrap_err();
            assert!(matches!(err, Error::Validation(ref msg) if msg == "Task name is required"));
        }
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn add_validates_before_checking_initialization() {
        let temp = TempDir::new().unwrap();
        let store = TaskStore::new(Config::from_home(temp.path()));
        let err = add(&store, &mut RandomIdGenerator, " ").unwrap_err();
        assert!(matches!(err, Error::Validation(_)));
        assert!(!store.config_dir().exists());
    }

    #[test]
    fn add_requires_init() {
        let temp = TempDir::new().unwrap();
        let store = TaskStore::new(Config::from_home(temp.path()));
        let err = add(&store, &mut RandomIdGenerator, "x").unwrap_err();
        assert!(matches!(err, Error::NotInitialized(_)));
    }

    #[test]
    fn add_skips_ids_already_in_use() {
        let (_temp, store) = setup();
        let mut ids = Scripted(vec!["T111", "T111", "T222"]);
        let first = add(&store, &mut ids, "one").unwrap();
        let second = add(&store, &mut ids, "two").unwrap();
        assert_eq!(first.id, "T111");
        assert_eq!(second.id, "T222");
    }

    #[test]
    fn add_gives_up_when_every_draw_collides() {
        let (_temp, store) = setup();
        let mut ids = Scripted(vec!["T111"]);
        add(&store, &mut ids, "one").unwrap();
        let err = add(&store, &mut ids, "two").unwrap_err();
        assert!(matches!(err, Error::IdExhausted(MAX_ID_ATTEMPTS)));
        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn list_returns_creation_order() {
        let (_temp, store) = setup();
        let mut ids = Scripted(vec!["T003", "T001", "T002"]);
        for name in ["c", "a", "b"] {
            add(&store, &mut ids, name).unwrap();
        }
        let names: Vec<String> = list(&store).unwrap().into_iter().map(|t| t.name).collect();
        assert_eq!(names, ["c", "a", "b"]);
    }

    #[test]
    fn done_completes_only_the_matching_task() {
        let (_temp, store) = setup();
        let mut ids = Scripted(vec!["T001", "T002", "T003"]);
        for name in ["a", "b", "c"] {
            add(&store, &mut ids, name).unwrap();
        }
        let before = store.load().unwrap();

        let outcome = done(&store, "T002").unwrap();
        assert!(!outcome.already_done);
        assert_eq!(outcome.task.name, "b");

        let after = store.load().unwrap();
        assert_eq!(after[0], before[0]);
        assert_eq!(after[2], before[2]);
        assert!(after[1].done);
        assert!(after[1].completed_at.is_some());
    }

    #[test]
    fn done_unknown_id_leaves_store_unchanged() {
        let (_temp, store) = setup();
        add(&store, &mut Scripted(vec!["T001"]), "a").unwrap();
        let before = std::fs::read(store.tasks_file()).unwrap();

        let err = done(&store, "nonexistent-id").unwrap_err();
        assert!(matches!(err, Error::TaskNotFound(ref id) if id == "nonexistent-id"));
        assert_eq!(std::fs::read(store.tasks_file()).unwrap(), before);
    }

    #[test]
    fn done_requires_an_id() {
        let (_temp, store) = setup();
        let err = done(&store, "  ").unwrap_err();
        assert!(matches!(err, Error::Validation(ref msg) if msg == "Task ID is required"));
    }

    #[test]
    fn done_twice_keeps_first_completion_time() {
        let (_temp, store) = setup();
        add(&store, &mut Scripted(vec!["T001"]), "a").unwrap();
        let first = done(&store, "t001").unwrap();
        let second = done(&store, "T001").unwrap();
        assert!(second.already_done);
        assert_eq!(second.task.completed_at, first.task.completed_at);
    }

    #[test]
    fn done_mutates_first_of_duplicate_ids() {
        let (_temp, store) = setup();
        let now = Utc::now();
        store
            .save(&[Task::new("T001", "first", now), Task::new("T001", "second", now)])
            .unwrap();

        let outcome = done(&store, "T001").unwrap();
        assert_eq!(outcome.task.name, "first");
        let tasks = store.load().unwrap();
        assert!(tasks[0].done);
        assert!(!tasks[1].done);
    }
}
