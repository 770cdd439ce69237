//! Cadre engine crate.
//!
//! Computes the outline of rectangular borders whose corners and edges carry
//! independent styling, either as one closed path or as eight separately
//! stroked segments. Drawing is left to the consumer.

pub mod border;
pub mod coords;
pub mod logging;
pub mod paint;
pub mod path;
