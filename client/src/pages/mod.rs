//! Route-level page components.

pub mod generator;
