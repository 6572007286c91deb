//! Domain model for the four-quadrant task board.
//!
//! # Responsibility
//! - Define canonical task and quadrant structures used by core logic.
//! - Keep one flat task shape; quadrant grouping is a projection.
//!
//! # Invariants
//! - Every task is identified by a stable `TaskId`.
//! - Every task belongs to exactly one `Quadrant` at all times.

pub mod quadrant;
pub mod task;
