//! Block-level rendering.
//!
//! Split in two phases the way the inline/escape layers never are:
//! [`classify`] extracts per-line local facts, and [`builder`] runs the
//! explicit block state machine over them.

pub mod builder;
pub mod classify;
pub mod kinds;

pub use builder::FragmentBuilder;
pub use classify::{LineClass, LineClassifier};
