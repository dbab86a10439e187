//! Browser access for the generator page.
//!
//! `clipboard` writes the copied rule through `navigator.clipboard`, and
//! `dom_inputs` reads the live control values back out of the document so
//! the controller can be seeded from what the browser actually shows. Both
//! degrade to plain fallbacks when compiled for the server.

pub mod clipboard;
pub mod dom_inputs;
