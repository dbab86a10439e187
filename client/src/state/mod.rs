//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Components read signals from a single page-level state provided via
//! context; only the shadow controller writes to them.

pub mod generator;
