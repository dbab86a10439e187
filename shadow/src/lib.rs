//! Box-shadow state synchronization core.
//!
//! This crate owns the canonical shadow parameters and derives the CSS
//! `box-shadow` value from them. It has no browser dependencies: the host UI
//! layer implements the surface traits in [`surface`] and forwards input
//! events to the [`controller::ShadowStateController`], which pushes the
//! derived rule back out to every surface on each change.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`controller`] | [`controller::ShadowStateController`]: seeding, updates, rendering |
//! | [`params`] | [`params::ShadowParameters`], the field set, and typed field values |
//! | [`color`] | `#RRGGBB` validation and channel decoding |
//! | [`rule`] | Rule string construction and clipboard text normalization |
//! | [`surface`] | Traits for the input, readout, preview, display, and clipboard collaborators |
//! | [`copy_status`] | Copy action and the ticketed status-line revert |
//! | [`consts`] | Shared constants (revert delay, status messages) |
//! | [`error`] | [`error::ShadowError`] |

pub mod color;
pub mod consts;
pub mod controller;
pub mod copy_status;
pub mod error;
pub mod params;
pub mod rule;
pub mod surface;

pub use controller::ShadowStateController;
pub use error::ShadowError;
pub use params::{Field, FieldValue, ShadowParameters};
