//! Renderer-agnostic path model.
//!
//! Responsibilities:
//! - record move / line / arc / close steps in order
//! - report the points those steps visit
//! - convert to `kurbo::BezPath` for linebender-based renderers

mod bez;
mod border_path;
mod op;

pub use bez::ARC_TOLERANCE;
pub use border_path::BorderPath;
pub use op::{ArcOp, PathOp};
