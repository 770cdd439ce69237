//! Paint model shared between the border engine and renderers.
//!
//! Scope:
//! - color representation (linear premultiplied alpha)
//! - stroke description handed to renderers
//!
//! Geometry types remain in `coords`.

pub mod color;
mod stroke;

pub use color::Color;
pub use stroke::{LineCap, LineJoin, StrokeStyle};
