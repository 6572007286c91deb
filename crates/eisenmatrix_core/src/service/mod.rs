//! Board use-case services.
//!
//! # Responsibility
//! - Own task mutations and drag reconciliation above the repository layer.
//! - Keep front ends decoupled from storage details.

pub mod board;
pub mod drag;
pub mod task_store;
