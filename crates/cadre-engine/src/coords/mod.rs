//! Coordinate and geometry types shared by the border engine and its consumers.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Because +Y points down, increasing angles turn clockwise on screen.

mod angle;
mod rect;
mod vec2;

pub use angle::Angle;
pub use rect::Rect;
pub use vec2::Vec2;
