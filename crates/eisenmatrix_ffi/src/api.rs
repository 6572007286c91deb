//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose one function per board intent to Dart via FRB.
//! - Own the single board instance of the process.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - The board is loaded once, on first use, and stays authoritative for
//!   the process even when its database cannot be opened.
//! - Reference-not-found and blank input are reported as `applied=false`,
//!   never as failures.

use eisenmatrix_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, quadrant_descriptors,
    session_locale, Board, BoardConfig, BoardDispatcher, ConfigOverrides, DragOutcome,
    KvRepository, Locale, MemoryKvRepository, MutationOutcome, Quadrant, SqliteKvRepository,
    Task, TaskFilter, TaskId, Translations,
};
use log::{info, warn};
use std::sync::{Mutex, OnceLock, PoisonError};

type SharedRepo = Box<dyn KvRepository + Send>;

static BOARD: OnceLock<Mutex<Board<SharedRepo>>> = OnceLock::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir` (idempotent).
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err.to_string(),
    }
}

/// One localized UI string, keyed by dotted path (e.g.
/// `quadrants.urgent-important.title`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringEntry {
    pub key: String,
    pub value: String,
}

/// Localized dictionary for the session locale.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardStrings {
    /// Resolved locale code (`en|ru|zh`).
    pub locale: String,
    pub entries: Vec<StringEntry>,
}

/// Static presentation data for one quadrant panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadrantItem {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub color: String,
    pub bg_color: String,
    pub border_color: String,
}

/// Task card data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskItem {
    pub id: String,
    pub text: String,
    pub quadrant: String,
    pub completed: bool,
    pub created_at: i64,
}

/// Ordered cards of one quadrant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardTasksResponse {
    pub ok: bool,
    pub items: Vec<TaskItem>,
    /// Diagnostics message; empty on success.
    pub message: String,
}

/// Generic action response envelope for board intents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardActionResponse {
    /// `false` only for malformed input such as an unknown quadrant id.
    pub ok: bool,
    /// Whether the board changed.
    pub applied: bool,
    /// Affected task id, when known.
    pub task_id: Option<String>,
    /// Localized confirmation title; empty when nothing should be shown.
    pub title: String,
    /// Localized confirmation description or diagnostics message.
    pub message: String,
}

impl BoardActionResponse {
    fn applied(task_id: String, title: &str, message: &str) -> Self {
        Self {
            ok: true,
            applied: true,
            task_id: Some(task_id),
            title: title.to_string(),
            message: message.to_string(),
        }
    }

    fn silent(task_id: String, applied: bool) -> Self {
        Self {
            ok: true,
            applied,
            task_id: Some(task_id),
            title: String::new(),
            message: String::new(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            applied: false,
            task_id: None,
            title: String::new(),
            message: message.into(),
        }
    }
}

/// Feeds the platform locale tag (e.g. Dart `Platform.localeName`).
///
/// Returns the resolved session locale code (`en|ru|zh`).
///
/// # FFI contract
/// - Call before any other `board_*` function; the session locale is fixed
///   on first use and later tags are ignored.
/// - `EISENMATRIX_LOCALE`, when set, takes precedence over `tag`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_set_locale(tag: String) -> String {
    resolve_locale(Some(tag.as_str())).code().to_string()
}

/// Returns every UI string for the session locale.
///
/// # FFI contract
/// - Sync call, no I/O after the first locale resolution.
/// - Entry order is stable across calls.
#[flutter_rust_bridge::frb(sync)]
pub fn board_strings() -> BoardStrings {
    let locale = resolve_locale(None);
    let mut entries = Vec::new();
    if let Ok(value) = serde_json::to_value(locale.translations()) {
        flatten_strings(&value, "", &mut entries);
    }
    BoardStrings {
        locale: locale.code().to_string(),
        entries,
    }
}

/// Returns the four quadrant panels in display order.
#[flutter_rust_bridge::frb(sync)]
pub fn board_quadrants() -> Vec<QuadrantItem> {
    quadrant_descriptors(strings())
        .into_iter()
        .map(|descriptor| QuadrantItem {
            id: descriptor.id.as_str().to_string(),
            title: descriptor.title.to_string(),
            subtitle: descriptor.subtitle.to_string(),
            color: descriptor.color,
            bg_color: descriptor.bg_color,
            border_color: descriptor.border_color,
        })
        .collect()
}

/// Lists one quadrant's tasks in board order.
///
/// # FFI contract
/// - Sync call; the first board call may open the database.
/// - Unknown quadrant ids return `ok=false` and no items.
#[flutter_rust_bridge::frb(sync)]
pub fn board_tasks(quadrant: String, hide_completed: bool) -> BoardTasksResponse {
    let Some(quadrant) = Quadrant::from_id(quadrant.trim()) else {
        return BoardTasksResponse {
            ok: false,
            items: Vec::new(),
            message: format!("board_tasks failed: unknown quadrant `{quadrant}`"),
        };
    };
    let items = with_board(|board| {
        board
            .store()
            .tasks_for_quadrant_filtered(quadrant, TaskFilter { hide_completed })
    })
    .iter()
    .map(to_task_item)
    .collect();
    BoardTasksResponse {
        ok: true,
        items,
        message: String::new(),
    }
}

/// Adds a task at the end of `quadrant`.
#[flutter_rust_bridge::frb(sync)]
pub fn board_add(quadrant: String, text: String) -> BoardActionResponse {
    let Some(quadrant) = Quadrant::from_id(quadrant.trim()) else {
        return BoardActionResponse::failure(format!(
            "board_add failed: unknown quadrant `{quadrant}`"
        ));
    };
    let t = strings();
    match with_board(|board| board.add(quadrant, &text)) {
        Some(id) => {
            BoardActionResponse::applied(id.to_string(), t.task_added, t.task_added_description)
        }
        None => BoardActionResponse {
            ok: true,
            applied: false,
            task_id: None,
            title: String::new(),
            message: String::new(),
        },
    }
}

/// Deletes a task; unknown ids are a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn board_delete(task_id: String) -> BoardActionResponse {
    let t = strings();
    let outcome = with_board(|board| board.delete(&TaskId::from(task_id.as_str())));
    respond(task_id, outcome, t.task_deleted, t.task_deleted_description)
}

/// Flips a task's completion flag.
#[flutter_rust_bridge::frb(sync)]
pub fn board_toggle_complete(task_id: String) -> BoardActionResponse {
    let outcome = with_board(|board| board.toggle_complete(&TaskId::from(task_id.as_str())));
    BoardActionResponse::silent(task_id, outcome.is_applied())
}

/// Replaces a task's text; blank text is a silent no-op.
#[flutter_rust_bridge::frb(sync)]
pub fn board_edit_text(task_id: String, text: String) -> BoardActionResponse {
    let t = strings();
    let outcome = with_board(|board| board.edit_text(&TaskId::from(task_id.as_str()), &text));
    respond(task_id, outcome, t.task_updated, t.task_updated_description)
}

/// Moves a task to `quadrant` from the card menu.
#[flutter_rust_bridge::frb(sync)]
pub fn board_move(task_id: String, quadrant: String) -> BoardActionResponse {
    let Some(quadrant) = Quadrant::from_id(quadrant.trim()) else {
        return BoardActionResponse::failure(format!(
            "board_move failed: unknown quadrant `{quadrant}`"
        ));
    };
    let t = strings();
    let outcome =
        with_board(|board| board.move_to_quadrant(&TaskId::from(task_id.as_str()), quadrant));
    respond(task_id, outcome, t.task_moved, t.task_moved_description)
}

/// Starts a drag and returns the preview card, if the task exists.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_start(task_id: String) -> Option<TaskItem> {
    with_board(|board| board.drag_start(&TaskId::from(task_id.as_str())))
        .as_ref()
        .map(to_task_item)
}

/// Current drag preview card.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_preview() -> Option<TaskItem> {
    with_board(|board| board.drag_preview().map(to_task_item))
}

/// Completes a drag.
///
/// `over_id` is a quadrant id, a task id, or `None` when the card was
/// released outside every drop zone. The drag preview is always cleared.
#[flutter_rust_bridge::frb(sync)]
pub fn board_drag_end(active_id: String, over_id: Option<String>) -> BoardActionResponse {
    let t = strings();
    let outcome =
        with_board(|board| board.drag_end(&TaskId::from(active_id.as_str()), over_id.as_deref()));
    match outcome {
        DragOutcome::Reassigned { task_id, .. } => {
            BoardActionResponse::applied(task_id.to_string(), t.task_moved, t.task_moved_description)
        }
        DragOutcome::Reordered { task_id, .. } => {
            BoardActionResponse::silent(task_id.to_string(), true)
        }
        DragOutcome::Unchanged(_) => BoardActionResponse::silent(active_id, false),
    }
}

fn respond(
    task_id: String,
    outcome: MutationOutcome,
    title: &str,
    message: &str,
) -> BoardActionResponse {
    if outcome.is_applied() {
        BoardActionResponse::applied(task_id, title, message)
    } else {
        BoardActionResponse::silent(task_id, false)
    }
}

fn board_config() -> BoardConfig {
    BoardConfig::from_env(ConfigOverrides::default())
}

fn strings() -> &'static Translations {
    resolve_locale(None).translations()
}

fn resolve_locale(platform_tag: Option<&str>) -> Locale {
    let configured = board_config().locale;
    session_locale(preferred_locale_tag(configured.as_deref(), platform_tag))
}

fn preferred_locale_tag<'a>(
    configured: Option<&'a str>,
    platform_tag: Option<&'a str>,
) -> Option<&'a str> {
    configured.or_else(|| platform_tag.map(str::trim).filter(|tag| !tag.is_empty()))
}

fn with_board<T>(f: impl FnOnce(&mut Board<SharedRepo>) -> T) -> T {
    let board = BOARD.get_or_init(|| Mutex::new(Board::load(open_repo())));
    let mut guard = board.lock().unwrap_or_else(PoisonError::into_inner);
    f(&mut guard)
}

fn open_repo() -> SharedRepo {
    let config = board_config();
    match SqliteKvRepository::open(&config.db_path) {
        Ok(repo) => {
            info!("event=board_open module=ffi status=ok mode=file");
            Box::new(repo)
        }
        Err(err) => {
            warn!("event=board_open module=ffi status=error mode=memory_fallback error={err}");
            Box::new(MemoryKvRepository::new())
        }
    }
}

fn to_task_item(task: &Task) -> TaskItem {
    TaskItem {
        id: task.id.to_string(),
        text: task.text.clone(),
        quadrant: task.quadrant.as_str().to_string(),
        completed: task.completed,
        created_at: task.created_at,
    }
}

fn flatten_strings(value: &serde_json::Value, prefix: &str, out: &mut Vec<StringEntry>) {
    match value {
        serde_json::Value::Object(map) => {
            for (key, child) in map {
                flatten_strings(child, &format!("{prefix}{key}."), out);
            }
        }
        serde_json::Value::String(text) => out.push(StringEntry {
            key: prefix.trim_end_matches('.').to_string(),
            value: text.clone(),
        }),
        _ => {}
    }
}
