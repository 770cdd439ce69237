use crate::coords::{Rect, Vec2};
use crate::paint::{Color, StrokeStyle};
use crate::path::BorderPath;

use super::{CornerSegment, EdgeSegment};

/// Shared capability of the styled pieces a border is made of.
///
/// Implementors are immutable values: [`inset`](BorderSegment::inset) returns a
/// new segment.
pub trait BorderSegment {
    fn color(&self) -> Color;
    fn stroke_width(&self) -> f32;
    fn dashed(&self) -> bool;
    fn inset_amount(&self) -> f32;

    /// Where this segment begins when traced clockwise inside `rect`.
    fn starting_point(&self, rect: Rect) -> Vec2;

    /// Where this segment ends when traced clockwise inside `rect`.
    fn ending_point(&self, rect: Rect) -> Vec2;

    /// Appends this segment to `path`, continuing from the path's current point.
    fn append_to_path(&self, path: &mut BorderPath, rect: Rect);

    /// Returns a copy with the inset amount increased by `amount`.
    fn inset(&self, amount: f32) -> Self
    where
        Self: Sized;

    fn stroke_style(&self) -> StrokeStyle {
        if self.dashed() {
            StrokeStyle::dashed(self.stroke_width())
        } else {
            StrokeStyle::solid(self.stroke_width())
        }
    }

    /// Standalone path for stroking this segment on its own.
    fn path(&self, rect: Rect) -> BorderPath {
        let mut path = BorderPath::with_capacity(2);
        path.move_to(self.starting_point(rect));
        self.append_to_path(&mut path, rect);
        path
    }
}

/// Either kind of border segment, for callers that walk all eight in order.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Segment {
    Corner(CornerSegment),
    Edge(EdgeSegment),
}

impl Segment {
    #[inline]
    pub fn as_corner(&self) -> Option<&CornerSegment> {
        match self {
            Segment::Corner(c) => Some(c),
            Segment::Edge(_) => None,
        }
    }

    #[inline]
    pub fn as_edge(&self) -> Option<&EdgeSegment> {
        match self {
            Segment::Edge(e) => Some(e),
            Segment::Corner(_) => None,
        }
    }
}

impl From<CornerSegment> for Segment {
    #[inline]
    fn from(c: CornerSegment) -> Self {
        Segment::Corner(c)
    }
}

impl From<EdgeSegment> for Segment {
    #[inline]
    fn from(e: EdgeSegment) -> Self {
        Segment::Edge(e)
    }
}

impl BorderSegment for Segment {
    fn color(&self) -> Color {
        match self {
            Segment::Corner(c) => c.color(),
            Segment::Edge(e) => e.color(),
        }
    }

    fn stroke_width(&self) -> f32 {
        match self {
            Segment::Corner(c) => c.stroke_width(),
            Segment::Edge(e) => e.stroke_width(),
        }
    }

    fn dashed(&self) -> bool {
        match self {
            Segment::Corner(c) => c.dashed(),
            Segment::Edge(e) => e.dashed(),
        }
    }

    fn inset_amount(&self) -> f32 {
        match self {
            Segment::Corner(c) => c.inset_amount(),
            Segment::Edge(e) => e.inset_amount(),
        }
    }

    fn starting_point(&self, rect: Rect) -> Vec2 {
        match self {
            Segment::Corner(c) => c.starting_point(rect),
            Segment::Edge(e) => e.starting_point(rect),
        }
    }

    fn ending_point(&self, rect: Rect) -> Vec2 {
        match self {
            Segment::Corner(c) => c.ending_point(rect),
            Segment::Edge(e) => e.ending_point(rect),
        }
    }

    fn append_to_path(&self, path: &mut BorderPath, rect: Rect) {
        match self {
            Segment::Corner(c) => c.append_to_path(path, rect),
            Segment::Edge(e) => e.append_to_path(path, rect),
        }
    }

    fn inset(&self, amount: f32) -> Self {
        match self {
            Segment::Corner(c) => Segment::Corner(c.inset(amount)),
            Segment::Edge(e) => Segment::Edge(e.inset(amount)),
        }
    }
}
