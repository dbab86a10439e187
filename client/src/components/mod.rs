//! Reusable UI components for the generator page.

pub mod copy_instructions;
pub mod preview_box;
pub mod rules_area;
pub mod shadow_controls;
