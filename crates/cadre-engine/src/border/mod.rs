//! Border geometry.
//!
//! Responsibilities:
//! - identity tables for the four corners and four edges
//! - corner arcs and edge lines that know their own endpoints inside a rect
//! - sparse style sets with defaulting
//! - assembling the eight segments into one closed outline
//!
//! Tracing order is always clockwise from the top-leading corner:
//! corner, edge, corner, edge, ...
//!
//! Extending segments:
//! - implement [`BorderSegment`] for the new piece
//! - add a variant to [`Segment`]

mod assembler;
mod corner;
mod corner_segment;
mod corner_set;
mod edge;
mod edge_segment;
mod edge_set;
mod segment;

pub use assembler::Border;
pub use corner::Corner;
pub use corner_segment::CornerSegment;
pub use corner_set::{CornerPatch, CornerSet};
pub use edge::Edge;
pub use edge_segment::EdgeSegment;
pub use edge_set::{EdgePatch, EdgeSet};
pub use segment::{BorderSegment, Segment};
