//! Flutter-facing bindings for the EisenMatrix core.

pub mod api;
