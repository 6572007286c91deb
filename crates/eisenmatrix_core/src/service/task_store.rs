//! Task store: sole owner of the task collection.
//!
//! # Responsibility
//! - Apply add/delete/toggle/edit/move/drag mutations.
//! - Persist the full collection after every applied mutation.
//!
//! # Invariants
//! - The collection is one ordered sequence; quadrant views are filters
//!   that preserve sequence order.
//! - Every applied mutation swaps in a new immutable snapshot; readers
//!   holding an older snapshot never observe a partial update.
//! - Ignored mutations neither replace the snapshot nor touch storage.
//! - Persistence failures are logged and never undo in-memory changes.

use crate::model::quadrant::Quadrant;
use crate::model::task::{normalize_text, Task, TaskId, TaskRecord};
use crate::repo::kv_repo::{load_or_default, save_best_effort, KvRepository};
use crate::service::drag::{reconcile, DragOutcome};
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;

/// Storage key of the serialized task collection.
pub const TASKS_KEY: &str = "eisenhower-tasks";

/// Why a mutation was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Text was empty after trimming.
    BlankText,
    /// No task has the requested id.
    TaskNotFound,
    /// The requested state is already the current state.
    NoChange,
}

/// Result of one store mutation. Ignored mutations are not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MutationOutcome {
    Applied,
    Ignored(IgnoreReason),
}

impl MutationOutcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }
}

/// Read-side filter for quadrant views.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub hide_completed: bool,
}

impl TaskFilter {
    fn accepts(self, task: &Task) -> bool {
        !(self.hide_completed && task.completed)
    }
}

/// In-memory task collection backed by a key-value repository.
pub struct TaskStore<R: KvRepository> {
    repo: R,
    tasks: Arc<[Task]>,
}

impl<R: KvRepository> TaskStore<R> {
    /// Loads the collection stored under `TASKS_KEY`, or starts empty.
    ///
    /// Each stored element is decoded on its own: records without usable
    /// text are dropped, other missing or malformed fields are default-filled.
    /// When anything was dropped or filled, the normalized collection is
    /// written back once so generated ids stay stable across loads.
    pub fn load(repo: R) -> Self {
        let values: Vec<Value> = load_or_default(&repo, TASKS_KEY, Vec::new());
        let record_count = values.len();
        let mut filled_count = 0usize;
        let tasks: Vec<Task> = values
            .into_iter()
            .filter_map(TaskRecord::from_value)
            .filter_map(|record| {
                let canonical = record.is_canonical();
                let task = record.into_task()?;
                if !canonical {
                    filled_count += 1;
                }
                Some(task)
            })
            .collect();
        let dropped_count = record_count - tasks.len();
        info!(
            "event=store_load module=service status=ok task_count={} dropped_count={dropped_count}",
            tasks.len()
        );

        let store = Self {
            repo,
            tasks: tasks.into(),
        };
        if dropped_count > 0 || filled_count > 0 {
            let saved = save_best_effort(&store.repo, TASKS_KEY, &*store.tasks);
            info!(
                "event=store_normalize module=service status={} dropped_count={dropped_count} filled_count={filled_count}",
                if saved { "ok" } else { "error" }
            );
        }
        store
    }

    /// Current snapshot of the whole collection.
    pub fn tasks(&self) -> Arc<[Task]> {
        Arc::clone(&self.tasks)
    }

    pub fn get(&self, id: &TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == *id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Tasks of `quadrant` in collection order.
    pub fn tasks_for_quadrant(&self, quadrant: Quadrant) -> Vec<Task> {
        self.tasks_for_quadrant_filtered(quadrant, TaskFilter::default())
    }

    pub fn tasks_for_quadrant_filtered(&self, quadrant: Quadrant, filter: TaskFilter) -> Vec<Task> {
        self.tasks
            .iter()
            .filter(|task| task.quadrant == quadrant && filter.accepts(task))
            .cloned()
            .collect()
    }

    /// Appends a new open task to the end of the collection.
    ///
    /// Returns the new id, or `None` when `text` is blank.
    pub fn add(&mut self, quadrant: Quadrant, text: &str) -> Option<TaskId> {
        let Ok(task) = Task::new(quadrant, text) else {
            debug!("event=task_add module=service status=skip reason=blank_text");
            return None;
        };
        let id = task.id.clone();
        let mut next = self.tasks.to_vec();
        next.push(task);
        self.commit(next);
        info!("event=task_add module=service status=ok task_id={id} quadrant={quadrant}");
        Some(id)
    }

    /// Removes the task with `id`.
    pub fn delete(&mut self, id: &TaskId) -> MutationOutcome {
        if self.get(id).is_none() {
            return self.ignored("task_delete", id, IgnoreReason::TaskNotFound);
        }
        let next = self
            .tasks
            .iter()
            .filter(|task| task.id != *id)
            .cloned()
            .collect();
        self.commit(next);
        info!("event=task_delete module=service status=ok task_id={id}");
        MutationOutcome::Applied
    }

    /// Flips the completion flag of the task with `id`.
    pub fn toggle_complete(&mut self, id: &TaskId) -> MutationOutcome {
        let outcome = self.update(id, |task| {
            task.completed = !task.completed;
            true
        });
        self.log_outcome("task_toggle", id, outcome)
    }

    /// Replaces the text of the task with `id` when `text` is not blank.
    pub fn edit_text(&mut self, id: &TaskId, text: &str) -> MutationOutcome {
        let Ok(text) = normalize_text(text) else {
            return self.ignored("task_edit", id, IgnoreReason::BlankText);
        };
        let outcome = self.update(id, |task| task.text != text && task.set_text(&text).is_ok());
        self.log_outcome("task_edit", id, outcome)
    }

    /// Reassigns the task with `id`; its position in the sequence is kept.
    pub fn move_to_quadrant(&mut self, id: &TaskId, quadrant: Quadrant) -> MutationOutcome {
        let outcome = self.update(id, |task| {
            if task.quadrant == quadrant {
                return false;
            }
            task.quadrant = quadrant;
            true
        });
        self.log_outcome("task_move", id, outcome)
    }

    /// Reconciles one drag-end event and commits the resulting collection.
    pub fn apply_drag(&mut self, active_id: &TaskId, over_id: Option<&str>) -> DragOutcome {
        let reconciliation = reconcile(&self.tasks, active_id, over_id);
        match reconciliation.tasks {
            Some(next) => {
                self.commit(next);
                info!(
                    "event=task_drag module=service status=ok task_id={active_id} outcome={:?}",
                    reconciliation.outcome
                );
            }
            None => debug!(
                "event=task_drag module=service status=skip task_id={active_id} outcome={:?}",
                reconciliation.outcome
            ),
        }
        reconciliation.outcome
    }

    fn update(&mut self, id: &TaskId, mutate: impl FnOnce(&mut Task) -> bool) -> MutationOutcome {
        let Some(index) = self.tasks.iter().position(|task| task.id == *id) else {
            return MutationOutcome::Ignored(IgnoreReason::TaskNotFound);
        };
        let mut next = self.tasks.to_vec();
        if !mutate(&mut next[index]) {
            return MutationOutcome::Ignored(IgnoreReason::NoChange);
        }
        self.commit(next);
        MutationOutcome::Applied
    }

    fn commit(&mut self, next: Vec<Task>) {
        self.tasks = next.into();
        save_best_effort(&self.repo, TASKS_KEY, &*self.tasks);
    }

    fn ignored(&self, event: &str, id: &TaskId, reason: IgnoreReason) -> MutationOutcome {
        self.log_outcome(event, id, MutationOutcome::Ignored(reason))
    }

    fn log_outcome(&self, event: &str, id: &TaskId, outcome: MutationOutcome) -> MutationOutcome {
        match outcome {
            MutationOutcome::Applied => {
                info!("event={event} module=service status=ok task_id={id}");
            }
            MutationOutcome::Ignored(reason) => {
                debug!("event={event} module=service status=skip task_id={id} reason={reason:?}");
            }
        }
        outcome
    }
}
