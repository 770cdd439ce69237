use crate::coords::{Angle, Rect, Vec2};
use crate::paint::Color;
use crate::path::BorderPath;

use super::{BorderSegment, Corner};

/// Styled quarter-circle arc at one corner of a border.
///
/// `radius` is the arc radius before inset is subtracted. A zero radius
/// collapses the arc to the rectangle vertex.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct CornerSegment {
    corner: Corner,
    radius: f32,
    color: Color,
    stroke_width: f32,
    dashed: bool,
    inset_amount: f32,
}

impl CornerSegment {
    pub const DEFAULT_RADIUS: f32 = 0.0;
    pub const DEFAULT_STROKE_WIDTH: f32 = 1.0;

    #[inline]
    pub const fn new(corner: Corner, radius: f32, color: Color, stroke_width: f32, dashed: bool) -> Self {
        Self { corner, radius, color, stroke_width, dashed, inset_amount: 0.0 }
    }

    /// Square, black, 1px solid corner.
    #[inline]
    pub const fn plain(corner: Corner) -> Self {
        Self::new(corner, Self::DEFAULT_RADIUS, Color::BLACK, Self::DEFAULT_STROKE_WIDTH, false)
    }

    #[inline]
    pub const fn with_radius(self, radius: f32) -> Self {
        Self { radius, ..self }
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
    pub const fn corner(&self) -> Corner {
        self.corner
    }

    #[inline]
    pub const fn radius(&self) -> f32 {
        self.radius
    }

    /// `radius - inset_amount`. Negative when the inset exceeds the radius;
    /// [`append_to_path`](BorderSegment::append_to_path) traces such an arc
    /// with radius zero, as a point at its center.
    #[inline]
    pub fn arc_radius(&self) -> f32 {
        self.radius - self.inset_amount
    }

    #[inline]
    pub fn starting_angle(&self) -> Angle {
        self.corner.starting_angle()
    }

    /// Center of the arc, `radius` diagonally inward from the vertex.
    pub fn arc_center(&self, rect: Rect) -> Vec2 {
        // Both points are already inset.
        let start = self.starting_point(rect);
        let end = self.ending_point(rect);
        match self.corner {
            Corner::TopLeading | Corner::BottomTrailing => Vec2::new(end.x, start.y),
            Corner::TopTrailing | Corner::BottomLeading => Vec2::new(start.x, end.y),
        }
    }
}

impl From<Corner> for CornerSegment {
    #[inline]
    fn from(corner: Corner) -> Self {
        CornerSegment::plain(corner)
    }
}

impl BorderSegment for CornerSegment {
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

    /// Ending point of the preceding edge, as if that edge ended at this arc.
    fn starting_point(&self, rect: Rect) -> Vec2 {
        self.corner
            .preceding_edge()
            .point_before_end(rect, self.radius)
            .inset(self.inset_amount)
    }

    /// Starting point of the following edge, as if that edge started at this arc.
    fn ending_point(&self, rect: Rect) -> Vec2 {
        self.corner
            .following_edge()
            .point_after_start(rect, self.radius)
            .inset(self.inset_amount)
    }

    fn append_to_path(&self, path: &mut BorderPath, rect: Rect) {
        let radius = self.arc_radius().max(0.0);
        path.arc(self.arc_center(rect), radius, self.starting_angle(), Angle::QUARTER_TURN);
    }

    #[inline]
    fn inset(&self, amount: f32) -> Self {
        Self { inset_amount: self.inset_amount + amount, ..*self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::PathOp;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    fn approx(a: Vec2, b: Vec2) -> bool {
        a.distance(b) < 1e-3
    }

    fn rounded(corner: Corner) -> CornerSegment {
        CornerSegment::plain(corner).with_radius(20.0)
    }

    // ── defaults ──────────────────────────────────────────────────────────

    #[test]
    fn plain_uses_style_defaults() {
        let c = CornerSegment::plain(Corner::TopTrailing);
        assert_eq!(c.radius(), 0.0);
        assert_eq!(c.color(), Color::BLACK);
        assert_eq!(c.stroke_width(), 1.0);
        assert!(!c.dashed());
        assert_eq!(c.inset_amount(), 0.0);
    }

    #[test]
    fn zero_radius_collapses_to_vertex() {
        for corner in Corner::ALL {
            let c = CornerSegment::plain(corner);
            assert_eq!(c.starting_point(RECT), corner.point(RECT));
            assert_eq!(c.ending_point(RECT), corner.point(RECT));
            assert_eq!(c.arc_center(RECT), corner.point(RECT));
        }
    }

    // ── geometry ──────────────────────────────────────────────────────────

    #[test]
    fn top_leading_arc_geometry() {
        let c = rounded(Corner::TopLeading);
        assert_eq!(c.starting_point(RECT), Vec2::new(0.0, 20.0));
        assert_eq!(c.ending_point(RECT), Vec2::new(20.0, 0.0));
        assert_eq!(c.arc_center(RECT), Vec2::new(20.0, 20.0));
    }

    #[test]
    fn centers_sit_diagonally_inward() {
        assert_eq!(rounded(Corner::TopTrailing).arc_center(RECT), Vec2::new(80.0, 20.0));
        assert_eq!(rounded(Corner::BottomTrailing).arc_center(RECT), Vec2::new(80.0, 80.0));
        assert_eq!(rounded(Corner::BottomLeading).arc_center(RECT), Vec2::new(20.0, 80.0));
    }

    #[test]
    fn traced_arc_hits_its_own_endpoints() {
        for corner in Corner::ALL {
            let c = rounded(corner);
            let mut path = BorderPath::new();
            c.append_to_path(&mut path, RECT);

            let PathOp::Arc(arc) = path.ops()[0] else { panic!("expected arc") };
            assert!(approx(arc.start_point(), c.starting_point(RECT)), "{corner:?} start");
            assert!(approx(arc.end_point(), c.ending_point(RECT)), "{corner:?} end");
            assert_eq!(arc.sweep_angle, Angle::QUARTER_TURN);
        }
    }

    // ── inset ─────────────────────────────────────────────────────────────

    #[test]
    fn inset_is_non_mutating() {
        let c = rounded(Corner::TopLeading);
        let inset = c.inset(4.0);
        assert_eq!(c.inset_amount(), 0.0);
        assert_eq!(inset.inset_amount(), 4.0);
        assert_eq!(inset.radius(), 20.0);
        assert_eq!(inset.arc_radius(), 16.0);
    }

    #[test]
    fn inset_shifts_points_on_both_axes() {
        let c = rounded(Corner::TopLeading).inset(2.0);
        assert_eq!(c.starting_point(RECT), Vec2::new(-2.0, 18.0));
        assert_eq!(c.ending_point(RECT), Vec2::new(18.0, -2.0));
        assert_eq!(c.arc_center(RECT), Vec2::new(18.0, 18.0));
    }

    #[test]
    fn inset_past_the_radius_traces_the_center() {
        let c = CornerSegment::plain(Corner::TopLeading).with_radius(2.0).inset(5.0);
        assert_eq!(c.arc_radius(), -3.0);

        let path = c.path(RECT);
        let PathOp::Arc(arc) = path.ops()[1] else { panic!("expected arc") };
        assert_eq!(arc.radius, 0.0);
        assert_eq!(arc.center, Vec2::new(-3.0, -3.0));
        assert!(approx(arc.start_point(), arc.center));
        assert!(approx(arc.end_point(), arc.center));

        // The op list and the kurbo conversion agree on where the arc went.
        let bez = path.to_bez_path();
        let points: Vec<_> = bez.elements().iter().filter_map(|el| el.end_point()).collect();
        assert_eq!(points, vec![kurbo::Point::new(-5.0, -3.0), kurbo::Point::new(-3.0, -3.0)]);
    }

    #[test]
    fn inset_is_additive() {
        let c = rounded(Corner::BottomLeading).with_color(Color::BLUE);
        let twice = c.inset(1.5).inset(2.5);
        let once = c.inset(4.0);
        assert_eq!(twice, once);
        assert_eq!(twice.path(RECT), once.path(RECT));
    }
}
