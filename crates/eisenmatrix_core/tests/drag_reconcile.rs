use eisenmatrix_core::repo::kv_repo::save;
use eisenmatrix_core::{
    reconcile, Board, BoardDispatcher, DragOutcome, DragSkip, MemoryKvRepository, Quadrant, Task,
    TaskId, TASKS_KEY,
};

use eisenmatrix_core::Quadrant::{
    NotUrgentImportant as Nui, UrgentImportant as Ui, UrgentNotImportant as Uni,
};

fn task(id: &str, quadrant: Quadrant) -> Task {
    Task::with_id(TaskId::from(id), quadrant, id, 1_700_000_000_000).unwrap()
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

fn quadrant_ids(tasks: &[Task], quadrant: Quadrant) -> Vec<&str> {
    tasks
        .iter()
        .filter(|task| task.quadrant == quadrant)
        .map(|task| task.id.as_str())
        .collect()
}

fn board(tasks: &[Task]) -> Board<MemoryKvRepository> {
    let repo = MemoryKvRepository::new();
    save(&repo, TASKS_KEY, tasks).unwrap();
    Board::load(repo)
}

fn sample() -> Vec<Task> {
    vec![
        task("A", Ui),
        task("x", Nui),
        task("B", Ui),
        task("y", Uni),
        task("C", Ui),
        task("z", Nui),
    ]
}

#[test]
fn drop_on_other_quadrant_changes_only_that_field() {
    let tasks = sample();

    let result = reconcile(&tasks, &TaskId::from("B"), Some("urgent-not-important"));

    assert_eq!(
        result.outcome,
        DragOutcome::Reassigned {
            task_id: TaskId::from("B"),
            from: Ui,
            to: Uni,
        }
    );
    let next = result.tasks.expect("reassignment should produce tasks");
    assert_eq!(next.len(), tasks.len());
    for (before, after) in tasks.iter().zip(&next) {
        if before.id.as_str() == "B" {
            let mut expected = before.clone();
            expected.quadrant = Uni;
            assert_eq!(after, &expected);
        } else {
            assert_eq!(after, before);
        }
    }
    assert_eq!(quadrant_ids(&next, Uni), vec!["B", "y"]);
}

#[test]
fn drop_on_own_quadrant_is_unchanged() {
    let result = reconcile(&sample(), &TaskId::from("A"), Some("urgent-important"));

    assert_eq!(result.outcome, DragOutcome::Unchanged(DragSkip::AlreadyInQuadrant));
    assert!(result.tasks.is_none());
}

#[test]
fn reorder_within_quadrant_moves_dragged_task_to_target_index() {
    let tasks = sample();

    let result = reconcile(&tasks, &TaskId::from("A"), Some("C"));

    assert_eq!(
        result.outcome,
        DragOutcome::Reordered {
            task_id: TaskId::from("A"),
            quadrant: Ui,
            from_index: 0,
            to_index: 2,
        }
    );
    let next = result.tasks.unwrap();
    assert_eq!(quadrant_ids(&next, Ui), vec!["B", "C", "A"]);
}

#[test]
fn reorder_appends_reordered_quadrant_after_other_tasks() {
    let result = reconcile(&sample(), &TaskId::from("C"), Some("A"));

    let next = result.tasks.unwrap();
    assert_eq!(ids(&next), vec!["x", "y", "z", "C", "A", "B"]);
}

#[test]
fn reorder_keeps_other_quadrants_relative_order() {
    let tasks = sample();

    let next = reconcile(&tasks, &TaskId::from("B"), Some("A")).tasks.unwrap();

    for quadrant in [Nui, Uni] {
        assert_eq!(quadrant_ids(&next, quadrant), quadrant_ids(&tasks, quadrant));
    }
    assert_eq!(quadrant_ids(&next, Ui), vec!["B", "A", "C"]);
}

#[test]
fn drop_on_task_in_other_quadrant_reassigns_without_moving() {
    let tasks = sample();

    let result = reconcile(&tasks, &TaskId::from("A"), Some("z"));

    assert_eq!(
        result.outcome,
        DragOutcome::Reassigned {
            task_id: TaskId::from("A"),
            from: Ui,
            to: Nui,
        }
    );
    let next = result.tasks.unwrap();
    assert_eq!(ids(&next), ids(&tasks));
    assert_eq!(quadrant_ids(&next, Nui), vec!["A", "x", "z"]);
}

#[test]
fn unresolved_references_are_no_ops() {
    let tasks = sample();

    let cases = [
        (TaskId::from("A"), None, DragSkip::NoDropTarget),
        (TaskId::from("ghost"), Some("C"), DragSkip::ActiveTaskNotFound),
        (TaskId::from("A"), Some("nowhere"), DragSkip::DropTargetNotFound),
        (TaskId::from("A"), Some("A"), DragSkip::DroppedOnSelf),
    ];
    for (active, over, skip) in cases {
        let result = reconcile(&tasks, &active, over);
        assert_eq!(result.outcome, DragOutcome::Unchanged(skip));
        assert!(result.tasks.is_none());
    }
}

#[test]
fn board_drag_end_commits_and_clears_preview() {
    let mut board = board(&sample());

    let preview = board.drag_start(&TaskId::from("A"));
    assert_eq!(preview.map(|task| task.id), Some(TaskId::from("A")));
    assert!(board.drag_preview().is_some());

    let outcome = board.drag_end(&TaskId::from("A"), Some("C"));

    assert!(outcome.is_change());
    assert!(board.drag_preview().is_none());
    assert_eq!(
        ids(&board.store().tasks_for_quadrant(Ui)),
        vec!["B", "C", "A"]
    );
}

#[test]
fn board_drag_end_no_op_still_clears_preview() {
    let mut board = board(&sample());
    let before = board.store().tasks();

    board.drag_start(&TaskId::from("B"));
    let outcome = board.drag_end(&TaskId::from("B"), Some("not-a-target"));

    assert_eq!(outcome, DragOutcome::Unchanged(DragSkip::DropTargetNotFound));
    assert!(board.drag_preview().is_none());
    assert_eq!(board.store().tasks(), before);

    board.drag_start(&TaskId::from("B"));
    board.drag_end(&TaskId::from("B"), None);
    assert!(board.drag_preview().is_none());
    assert_eq!(board.store().tasks(), before);
}

#[test]
fn drag_start_with_unknown_task_clears_stale_preview() {
    let mut board = board(&sample());

    board.drag_start(&TaskId::from("A"));
    assert!(board.drag_start(&TaskId::from("ghost")).is_none());
    assert!(board.drag_preview().is_none());
}

#[test]
fn drag_to_quadrant_via_board_persists_quadrant() {
    let mut board = board(&sample());

    board.drag_start(&TaskId::from("y"));
    board.drag_end(&TaskId::from("y"), Some("not-urgent-not-important"));

    let moved = board.store().get(&TaskId::from("y")).unwrap();
    assert_eq!(moved.quadrant, Quadrant::NotUrgentNotImportant);
    assert_eq!(ids(&board.store().tasks()), ids(&sample()));
}
