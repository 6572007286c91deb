//! Drag reconciliation engine.
//!
//! # Responsibility
//! - Translate one drag-end event into the next task collection.
//! - Track the drag-preview task between drag start and drag end.
//!
//! # Invariants
//! - Reconciliation is pure: it never mutates its input slice.
//! - Unresolved references produce `DragOutcome::Unchanged`, never errors.
//! - A same-quadrant reorder emits the other quadrants first (original
//!   order) followed by the reordered quadrant.
//! - A reassignment only touches the dragged task's `quadrant`.

use crate::model::quadrant::Quadrant;
use crate::model::task::{Task, TaskId};

/// Resolved drop target of a drag-end event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Released over a quadrant panel.
    Quadrant(Quadrant),
    /// Released over another task card.
    Task(TaskId),
}

impl DropTarget {
    /// Quadrant identifiers take precedence over task ids.
    pub fn parse(over_id: &str) -> Self {
        match Quadrant::from_id(over_id) {
            Some(quadrant) => Self::Quadrant(quadrant),
            None => Self::Task(TaskId::from(over_id)),
        }
    }
}

/// Why a drag-end event left the collection untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragSkip {
    /// Released outside any drop zone.
    NoDropTarget,
    /// The dragged task no longer exists.
    ActiveTaskNotFound,
    /// The drop target names neither a quadrant nor a task.
    DropTargetNotFound,
    /// Dropped on the quadrant the task already belongs to.
    AlreadyInQuadrant,
    /// Dropped onto its own card.
    DroppedOnSelf,
}

/// Effect of one drag-end event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragOutcome {
    /// Task moved to another quadrant; global position kept.
    Reassigned {
        task_id: TaskId,
        from: Quadrant,
        to: Quadrant,
    },
    /// Task moved inside its quadrant; indices are quadrant-relative.
    Reordered {
        task_id: TaskId,
        quadrant: Quadrant,
        from_index: usize,
        to_index: usize,
    },
    Unchanged(DragSkip),
}

impl DragOutcome {
    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Unchanged(_))
    }
}

/// Result of reconciling one drag-end event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    pub outcome: DragOutcome,
    /// Next collection; `None` when `outcome` is `Unchanged`.
    pub tasks: Option<Vec<Task>>,
}

impl Reconciliation {
    fn unchanged(skip: DragSkip) -> Self {
        Self {
            outcome: DragOutcome::Unchanged(skip),
            tasks: None,
        }
    }
}

/// Computes the collection that results from dropping `active_id` on
/// `over_id`.
pub fn reconcile(tasks: &[Task], active_id: &TaskId, over_id: Option<&str>) -> Reconciliation {
    let Some(over_id) = over_id else {
        return Reconciliation::unchanged(DragSkip::NoDropTarget);
    };
    let Some(active) = tasks.iter().find(|task| task.id == *active_id) else {
        return Reconciliation::unchanged(DragSkip::ActiveTaskNotFound);
    };

    match DropTarget::parse(over_id) {
        DropTarget::Quadrant(target) => reassign(tasks, active, target),
        DropTarget::Task(over_task_id) => {
            let Some(over) = tasks.iter().find(|task| task.id == over_task_id) else {
                return Reconciliation::unchanged(DragSkip::DropTargetNotFound);
            };
            if over.id == active.id {
                return Reconciliation::unchanged(DragSkip::DroppedOnSelf);
            }
            if over.quadrant == active.quadrant {
                reorder_within_quadrant(tasks, active, over)
            } else {
                reassign(tasks, active, over.quadrant)
            }
        }
    }
}

fn reassign(tasks: &[Task], active: &Task, target: Quadrant) -> Reconciliation {
    if active.quadrant == target {
        return Reconciliation::unchanged(DragSkip::AlreadyInQuadrant);
    }

    let next = tasks
        .iter()
        .map(|task| {
            let mut task = task.clone();
            if task.id == active.id {
                task.quadrant = target;
            }
            task
        })
        .collect();

    Reconciliation {
        outcome: DragOutcome::Reassigned {
            task_id: active.id.clone(),
            from: active.quadrant,
            to: target,
        },
        tasks: Some(next),
    }
}

fn reorder_within_quadrant(tasks: &[Task], active: &Task, over: &Task) -> Reconciliation {
    let quadrant = active.quadrant;
    let (mut members, others): (Vec<Task>, Vec<Task>) = tasks
        .iter()
        .cloned()
        .partition(|task| task.quadrant == quadrant);

    let (Some(from_index), Some(to_index)) =
        (position_of(&members, &active.id), position_of(&members, &over.id))
    else {
        return Reconciliation::unchanged(DragSkip::DropTargetNotFound);
    };
    let moved = members.remove(from_index);
    members.insert(to_index, moved);

    let mut next = others;
    next.extend(members);

    Reconciliation {
        outcome: DragOutcome::Reordered {
            task_id: active.id.clone(),
            quadrant,
            from_index,
            to_index,
        },
        tasks: Some(next),
    }
}

fn position_of(tasks: &[Task], id: &TaskId) -> Option<usize> {
    tasks.iter().position(|task| task.id == *id)
}

/// Drag-preview state: the task rendered under the pointer.
///
/// At most one drag is active at a time.
#[derive(Debug, Clone, Default)]
pub struct DragSession {
    preview: Option<Task>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a drag; `None` clears any stale preview.
    pub fn start(&mut self, task: Option<Task>) {
        self.preview = task;
    }

    pub fn preview(&self) -> Option<&Task> {
        self.preview.as_ref()
    }

    /// Ends the drag and returns the preview that was shown.
    pub fn finish(&mut self) -> Option<Task> {
        self.preview.take()
    }
}
