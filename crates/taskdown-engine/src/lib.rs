//! Core rendering engine for taskdown.
//!
//! Turns user-authored, loosely-markdown task descriptions and notes into
//! HTML fragments for inline display. The engine is a pure function of its
//! input string: no configuration, no I/O, no state across calls. The
//! caller inserts the returned fragment into a trusted display surface, so
//! the escaping performed here is the sole sanitization boundary.

pub mod rendering;

// Re-export key types for easier usage
pub use rendering::{NO_DESCRIPTION, render, render_opt};
