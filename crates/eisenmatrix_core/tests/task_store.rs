use eisenmatrix_core::repo::kv_repo::save;
use eisenmatrix_core::{
    IgnoreReason, KvRepository, KvResult, MemoryKvRepository, MutationOutcome, Quadrant,
    SqliteKvRepository, Task, TaskFilter, TaskId, TaskStore, TASKS_KEY,
};
use std::cell::Cell;
use std::rc::Rc;

fn task(id: &str, quadrant: Quadrant) -> Task {
    Task::with_id(TaskId::from(id), quadrant, id, 1_700_000_000_000).unwrap()
}

fn seeded(tasks: &[Task]) -> TaskStore<MemoryKvRepository> {
    let repo = MemoryKvRepository::new();
    save(&repo, TASKS_KEY, tasks).unwrap();
    TaskStore::load(repo)
}

fn ids(tasks: &[Task]) -> Vec<&str> {
    tasks.iter().map(|task| task.id.as_str()).collect()
}

#[test]
fn add_appends_one_open_task() {
    let mut store = seeded(&[task("a", Quadrant::UrgentImportant)]);

    let id = store
        .add(Quadrant::NotUrgentImportant, "Buy milk")
        .expect("non-blank text should be added");

    let tasks = store.tasks();
    assert_eq!(tasks.len(), 2);
    let added = &tasks[1];
    assert_eq!(added.id, id);
    assert_ne!(added.id, tasks[0].id);
    assert_eq!(added.text, "Buy milk");
    assert_eq!(added.quadrant, Quadrant::NotUrgentImportant);
    assert!(!added.completed);
}

#[test]
fn add_blank_text_leaves_collection_unchanged() {
    let mut store = seeded(&[task("a", Quadrant::UrgentImportant)]);
    let before = store.tasks();

    assert_eq!(store.add(Quadrant::UrgentImportant, ""), None);
    assert_eq!(store.add(Quadrant::UrgentImportant, "   \t"), None);

    assert_eq!(store.tasks(), before);
}

#[test]
fn delete_removes_only_matching_task() {
    let mut store = seeded(&[
        task("a", Quadrant::UrgentImportant),
        task("b", Quadrant::UrgentImportant),
    ]);

    assert_eq!(store.delete(&TaskId::from("a")), MutationOutcome::Applied);
    assert_eq!(ids(&store.tasks()), vec!["b"]);
}

#[test]
fn delete_missing_id_is_a_no_op() {
    let mut store = seeded(&[task("a", Quadrant::UrgentImportant)]);
    let before = store.tasks();

    let outcome = store.delete(&TaskId::from("missing"));

    assert_eq!(outcome, MutationOutcome::Ignored(IgnoreReason::TaskNotFound));
    assert_eq!(
        serde_json::to_string(&*store.tasks()).unwrap(),
        serde_json::to_string(&*before).unwrap()
    );
}

#[test]
fn toggle_twice_restores_original_state() {
    let mut store = seeded(&[task("a", Quadrant::UrgentNotImportant)]);
    let original = store.tasks()[0].clone();
    let id = original.id.clone();

    assert!(store.toggle_complete(&id).is_applied());
    assert!(store.get(&id).unwrap().completed);
    assert!(store.toggle_complete(&id).is_applied());

    assert_eq!(store.get(&id), Some(&original));
}

#[test]
fn toggle_missing_id_is_ignored() {
    let mut store = seeded(&[]);
    assert_eq!(
        store.toggle_complete(&TaskId::from("nope")),
        MutationOutcome::Ignored(IgnoreReason::TaskNotFound)
    );
}

#[test]
fn edit_text_trims_and_rejects_blank() {
    let mut store = seeded(&[task("a", Quadrant::UrgentImportant)]);
    let id = TaskId::from("a");

    assert_eq!(
        store.edit_text(&id, "   "),
        MutationOutcome::Ignored(IgnoreReason::BlankText)
    );
    assert_eq!(store.get(&id).unwrap().text, "a");

    assert!(store.edit_text(&id, "  renamed ").is_applied());
    assert_eq!(store.get(&id).unwrap().text, "renamed");

    assert_eq!(
        store.edit_text(&id, "renamed"),
        MutationOutcome::Ignored(IgnoreReason::NoChange)
    );
    assert_eq!(
        store.edit_text(&TaskId::from("missing"), "x"),
        MutationOutcome::Ignored(IgnoreReason::TaskNotFound)
    );
}

#[test]
fn move_to_quadrant_keeps_sequence_position() {
    let mut store = seeded(&[
        task("a", Quadrant::UrgentImportant),
        task("b", Quadrant::NotUrgentImportant),
        task("c", Quadrant::NotUrgentImportant),
    ]);

    assert!(store
        .move_to_quadrant(&TaskId::from("a"), Quadrant::NotUrgentImportant)
        .is_applied());

    assert_eq!(ids(&store.tasks()), vec!["a", "b", "c"]);
    assert_eq!(
        ids(&store.tasks_for_quadrant(Quadrant::NotUrgentImportant)),
        vec!["a", "b", "c"]
    );
    assert!(store.tasks_for_quadrant(Quadrant::UrgentImportant).is_empty());
    assert_eq!(
        store.move_to_quadrant(&TaskId::from("a"), Quadrant::NotUrgentImportant),
        MutationOutcome::Ignored(IgnoreReason::NoChange)
    );
}

#[test]
fn tasks_for_quadrant_preserves_order_and_filters_completed() {
    let mut store = seeded(&[
        task("a", Quadrant::UrgentImportant),
        task("b", Quadrant::NotUrgentNotImportant),
        task("c", Quadrant::UrgentImportant),
        task("d", Quadrant::UrgentImportant),
    ]);
    store.toggle_complete(&TaskId::from("c"));

    assert_eq!(
        ids(&store.tasks_for_quadrant(Quadrant::UrgentImportant)),
        vec!["a", "c", "d"]
    );
    let open = store.tasks_for_quadrant_filtered(
        Quadrant::UrgentImportant,
        TaskFilter {
            hide_completed: true,
        },
    );
    assert_eq!(ids(&open), vec!["a", "d"]);
}

#[test]
fn snapshots_are_not_affected_by_later_mutations() {
    let mut store = seeded(&[task("a", Quadrant::UrgentImportant)]);
    let snapshot = store.tasks();

    store.add(Quadrant::UrgentImportant, "b");
    store.delete(&TaskId::from("a"));

    assert_eq!(ids(&snapshot), vec!["a"]);
    assert_eq!(store.len(), 1);
}

#[test]
fn every_mutation_is_persisted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.sqlite3");

    let added_id = {
        let mut store = TaskStore::load(SqliteKvRepository::open(&path).unwrap());
        assert!(store.is_empty());
        let id = store.add(Quadrant::UrgentNotImportant, "call plumber").unwrap();
        store.toggle_complete(&id);
        store.move_to_quadrant(&id, Quadrant::NotUrgentNotImportant);
        id
    };

    let reopened = TaskStore::load(SqliteKvRepository::open(&path).unwrap());
    let task = reopened.get(&added_id).expect("task should be persisted");
    assert_eq!(task.text, "call plumber");
    assert!(task.completed);
    assert_eq!(task.quadrant, Quadrant::NotUrgentNotImportant);
}

#[test]
fn load_drops_blank_records_and_fills_defaults() {
    let repo = MemoryKvRepository::new();
    repo.put(
        TASKS_KEY,
        r#"[
            {"id": "a", "text": "keep me", "quadrant": "urgent-not-important"},
            {"id": "b", "text": "   "},
            {"text": "no id", "quadrant": "bogus", "extra": true}
        ]"#,
    )
    .unwrap();

    let store = TaskStore::load(repo);
    let tasks = store.tasks();

    assert_eq!(tasks.len(), 2);
    assert_eq!(tasks[0].id, TaskId::from("a"));
    assert_eq!(tasks[0].quadrant, Quadrant::UrgentNotImportant);
    assert_eq!(tasks[1].text, "no id");
    assert!(!tasks[1].id.as_str().is_empty());
    assert_eq!(tasks[1].quadrant, Quadrant::UrgentImportant);
}

#[test]
fn generated_ids_survive_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.sqlite3");
    SqliteKvRepository::open(&path)
        .unwrap()
        .put(
            TASKS_KEY,
            r#"[{"text": "imported", "quadrant": "urgent-important"}]"#,
        )
        .unwrap();

    let listed_id = {
        let store = TaskStore::load(SqliteKvRepository::open(&path).unwrap());
        store.tasks()[0].id.clone()
    };

    let mut reloaded = TaskStore::load(SqliteKvRepository::open(&path).unwrap());
    assert_eq!(reloaded.tasks()[0].id, listed_id);
    assert!(reloaded.toggle_complete(&listed_id).is_applied());
}

/// Memory repository that counts writes.
#[derive(Default)]
struct CountingRepo {
    inner: MemoryKvRepository,
    puts: Rc<Cell<usize>>,
}

impl KvRepository for CountingRepo {
    fn get(&self, key: &str) -> KvResult<Option<String>> {
        self.inner.get(key)
    }

    fn put(&self, key: &str, value: &str) -> KvResult<()> {
        self.puts.set(self.puts.get() + 1);
        self.inner.put(key, value)
    }
}

#[test]
fn load_writes_back_only_when_records_were_normalized() {
    let canonical = CountingRepo::default();
    let canonical_puts = Rc::clone(&canonical.puts);
    canonical
        .inner
        .put(
            TASKS_KEY,
            r#"[{"id":"a","text":"a","quadrant":"urgent-important","completed":false,"createdAt":1}]"#,
        )
        .unwrap();
    let store = TaskStore::load(canonical);
    assert_eq!(store.len(), 1);
    assert_eq!(canonical_puts.get(), 0);

    let partial = CountingRepo::default();
    let partial_puts = Rc::clone(&partial.puts);
    partial
        .inner
        .put(TASKS_KEY, r#"[{"id":"a","text":"a"}]"#)
        .unwrap();
    let store = TaskStore::load(partial);
    assert_eq!(store.len(), 1);
    assert_eq!(partial_puts.get(), 1);
}

#[test]
fn one_malformed_record_does_not_discard_the_rest() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("board.sqlite3");
    SqliteKvRepository::open(&path)
        .unwrap()
        .put(
            TASKS_KEY,
            r#"[
                {"id": "keep", "text": "keep me", "quadrant": "not-urgent-important",
                 "completed": false, "createdAt": 1700000000000},
                {"id": "float", "text": "float time", "quadrant": "urgent-important",
                 "completed": "true", "createdAt": 1700000000000.0},
                "not a record",
                {"id": "typed", "text": false}
            ]"#,
        )
        .unwrap();

    {
        let mut store = TaskStore::load(SqliteKvRepository::open(&path).unwrap());
        assert_eq!(ids(&store.tasks()), vec!["keep", "float"]);
        let float = store.get(&TaskId::from("float")).unwrap();
        assert!(float.completed);
        assert_eq!(float.created_at, 1_700_000_000_000);
        store.add(Quadrant::UrgentImportant, "new");
    }

    let reopened = TaskStore::load(SqliteKvRepository::open(&path).unwrap());
    let tasks = reopened.tasks();
    let texts: Vec<&str> = tasks.iter().map(|task| task.text.as_str()).collect();
    assert_eq!(texts, vec!["keep me", "float time", "new"]);
}
