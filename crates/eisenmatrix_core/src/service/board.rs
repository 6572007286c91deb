//! Board dispatcher: one entry point per UI intent.
//!
//! # Responsibility
//! - Pair the task store with the drag-preview session.
//! - Give front ends (FFI, CLI) a single object to send intents to.
//!
//! # Invariants
//! - Drag-preview state is cleared at the end of every drag-end event,
//!   whatever the reconciliation outcome.

use crate::model::quadrant::Quadrant;
use crate::model::task::{Task, TaskId};
use crate::repo::kv_repo::KvRepository;
use crate::service::drag::{DragOutcome, DragSession};
use crate::service::task_store::{MutationOutcome, TaskStore};

/// Intents a board front end can send.
pub trait BoardDispatcher {
    fn add(&mut self, quadrant: Quadrant, text: &str) -> Option<TaskId>;
    fn delete(&mut self, id: &TaskId) -> MutationOutcome;
    fn toggle_complete(&mut self, id: &TaskId) -> MutationOutcome;
    fn edit_text(&mut self, id: &TaskId, text: &str) -> MutationOutcome;
    fn move_to_quadrant(&mut self, id: &TaskId, quadrant: Quadrant) -> MutationOutcome;
    /// Captures the dragged task as the drag preview.
    fn drag_start(&mut self, active_id: &TaskId) -> Option<Task>;
    /// Completes the active drag; `over_id` is `None` when released outside
    /// every drop zone.
    fn drag_end(&mut self, active_id: &TaskId, over_id: Option<&str>) -> DragOutcome;
}

/// Task store plus drag session for one board.
pub struct Board<R: KvRepository> {
    store: TaskStore<R>,
    drag: DragSession,
}

impl<R: KvRepository> Board<R> {
    /// Loads the board from `repo`.
    pub fn load(repo: R) -> Self {
        Self {
            store: TaskStore::load(repo),
            drag: DragSession::new(),
        }
    }

    /// Read access for rendering.
    pub fn store(&self) -> &TaskStore<R> {
        &self.store
    }

    pub fn drag_preview(&self) -> Option<&Task> {
        self.drag.preview()
    }
}

impl<R: KvRepository> BoardDispatcher for Board<R> {
    fn add(&mut self, quadrant: Quadrant, text: &str) -> Option<TaskId> {
        self.store.add(quadrant, text)
    }

    fn delete(&mut self, id: &TaskId) -> MutationOutcome {
        self.store.delete(id)
    }

    fn toggle_complete(&mut self, id: &TaskId) -> MutationOutcome {
        self.store.toggle_complete(id)
    }

    fn edit_text(&mut self, id: &TaskId, text: &str) -> MutationOutcome {
        self.store.edit_text(id, text)
    }

    fn move_to_quadrant(&mut self, id: &TaskId, quadrant: Quadrant) -> MutationOutcome {
        self.store.move_to_quadrant(id, quadrant)
    }

    fn drag_start(&mut self, active_id: &TaskId) -> Option<Task> {
        let task = self.store.get(active_id).cloned();
        self.drag.start(task.clone());
        task
    }

    fn drag_end(&mut self, active_id: &TaskId, over_id: Option<&str>) -> DragOutcome {
        let outcome = self.store.apply_drag(active_id, over_id);
        self.drag.finish();
        outcome
    }
}
