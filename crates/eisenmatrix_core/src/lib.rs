//! Core domain logic for the EisenMatrix task board.
//! This crate is the single source of truth for task invariants.

pub mod config;
pub mod db;
pub mod i18n;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{BoardConfig, ConfigOverrides};
pub use i18n::{quadrant_descriptors, session_locale, Locale, Translations};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::quadrant::{Quadrant, QuadrantDescriptor, UnknownQuadrant};
pub use model::task::{Task, TaskId, TaskRecord, TaskValidationError};
pub use repo::kv_repo::{
    load_or_default, save_best_effort, KvRepoError, KvRepository, KvResult, MemoryKvRepository,
    SqliteKvRepository,
};
pub use service::board::{Board, BoardDispatcher};
pub use service::drag::{reconcile, DragOutcome, DragSession, DragSkip, DropTarget, Reconciliation};
pub use service::task_store::{IgnoreReason, MutationOutcome, TaskFilter, TaskStore, TASKS_KEY};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
