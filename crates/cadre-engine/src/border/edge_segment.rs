use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::path::BorderPath;

use super::{BorderSegment, CornerSegment, Edge};

/// Styled straight line along one side of a border.
///
/// The line is shortened at each end by the radius of the neighboring corner so
/// that it meets the corner's arc. Those radii are not style inputs: they stay
/// zero until [`resolve_radii`](EdgeSegment::resolve_radii) copies them from the
/// actual corner segments.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct EdgeSegment {
    edge: Edge,
    color: Color,
    stroke_width: f32,
    dashed: bool,
    starting_radius: f32,
    ending_radius: f32,
    inset_amount: f32,
}

impl EdgeSegment {
    pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

    #[inline]
    pub const fn new(edge: Edge, color: Color, stroke_width: f32, dashed: bool) -> Self {
        Self {
            edge,
            color,
            stroke_width,
            dashed,
            starting_radius: 0.0,
            ending_radius: 0.0,
            inset_amount: 0.0,
        }
    }

    /// Black, 1px solid edge.
    #[inline]
    pub const fn plain(edge: Edge) -> Self {
        Self::new(edge, Color::BLACK, Self::DEFAULT_STROKE_WIDTH, false)
    }

    #[inline]
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    #[inline]
    pub const fn with_stroke_width(self, stroke_width: f32) -> Self {
        Self { stroke_width, ..self }
    }

    #[inline]
    pub const fn with_dashed(self, dashed: bool) -> Self {
        Self { dashed, ..self }
    }

    #[inline]
    pub const fn edge(&self) -> Edge {
        self.edge
    }

    #[inline]
    pub const fn starting_radius(&self) -> f32 {
        self.starting_radius
    }

    #[inline]
    pub const fn ending_radius(&self) -> f32 {
        self.ending_radius
    }

    /// Returns a copy that ends short of `starting` and `ending` by their radii.
    ///
    /// `starting` and `ending` should be the segments for this edge's starting
    /// and ending corners. Only their radii are read; which corner they belong
    /// to is not checked.
    pub fn resolve_radii(&self, starting: &CornerSegment, ending: &CornerSegment) -> Self {
        Self {
            starting_radius: starting.radius(),
            ending_radius: ending.radius(),
            ..*self
        }
    }
}

impl From<Edge> for EdgeSegment {
    #[inline]
    fn from(edge: Edge) -> Self {
        EdgeSegment::plain(edge)
    }
}

impl BorderSegment for EdgeSegment {
    #[inline]
    fn color(&self) -> Color {
        self.color
    }

    #[inline]
    fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    #[inline]
    fn dashed(&self) -> bool {
        self.dashed
    }

    #[inline]
    fn inset_amount(&self) -> f32 {
        self.inset_amount
    }

    fn starting_point(&self, rect: Rect) -> Vec2 {
        self.edge
            .point_after_start(rect, self.starting_radius)
            .inset(self.inset_amount)
    }

    fn ending_point(&self, rect: Rect) -> Vec2 {
        self.edge
            .point_before_end(rect, self.ending_radius)
            .inset(self.inset_amount)
    }

    fn append_to_path(&self, path: &mut BorderPath, rect: Rect) {
        path.line_to(self.ending_point(rect));
    }

    #[inline]
    fn inset(&self, amount: f32) -> Self {
        Self { inset_amount: self.inset_amount + amount, ..*self }
    }
}
