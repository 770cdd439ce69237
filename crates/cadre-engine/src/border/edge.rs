use crate::coords::{Rect, Vec2};

use super::Corner;

/// One of the four rectangle sides.
///
/// Each edge is traversed clockwise, from its starting corner to its ending corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Edge {
    Top,
    Trailing,
    Bottom,
    Leading,
}

impl Edge {
    /// All edges in clockwise order, starting at the top.
    pub const ALL: [Edge; 4] = [Edge::Top, Edge::Trailing, Edge::Bottom, Edge::Leading];

    /// Position in [`Edge::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub const fn starting_corner(self) -> Corner {
        match self {
            Edge::Top => Corner::TopLeading,
            Edge::Trailing => Corner::TopTrailing,
            Edge::Bottom => Corner::BottomTrailing,
            Edge::Leading => Corner::BottomLeading,
        }
    }

    #[inline]
    pub const fn ending_corner(self) -> Corner {
        match self {
            Edge::Top => Corner::TopTrailing,
            Edge::Trailing => Corner::BottomTrailing,
            Edge::Bottom => Corner::BottomLeading,
            Edge::Leading => Corner::TopLeading,
        }
    }

    #[inline]
    pub fn starting_point(self, rect: Rect) -> Vec2 {
        self.starting_corner().point(rect)
    }

    #[inline]
    pub fn ending_point(self, rect: Rect) -> Vec2 {
        self.ending_corner().point(rect)
    }

    /// Unit vector of clockwise travel along this edge.
    #[inline]
    pub const fn direction(self) -> Vec2 {
        match self {
            Edge::Top => Vec2::new(1.0, 0.0),
            Edge::Trailing => Vec2::new(0.0, 1.0),
            Edge::Bottom => Vec2::new(-1.0, 0.0),
            Edge::Leading => Vec2::new(0.0, -1.0),
        }
    }

    /// Point `distance` into the edge from its starting corner.
    #[inline]
    pub fn point_after_start(self, rect: Rect, distance: f32) -> Vec2 {
        self.starting_point(rect) + self.direction() * distance
    }

    /// Point `distance` into the edge from its ending corner.
    #[inline]
    pub fn point_before_end(self, rect: Rect, distance: f32) -> Vec2 {
        self.ending_point(rect) - self.direction() * distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECT: Rect = Rect::new(0.0, 0.0, 100.0, 60.0);

    #[test]
    fn corner_mapping_is_clockwise() {
        assert_eq!(Edge::Top.starting_corner(), Corner::TopLeading);
        assert_eq!(Edge::Top.ending_corner(), Corner::TopTrailing);
        assert_eq!(Edge::Trailing.starting_corner(), Corner::TopTrailing);
        assert_eq!(Edge::Trailing.ending_corner(), Corner::BottomTrailing);
        assert_eq!(Edge::Bottom.starting_corner(), Corner::BottomTrailing);
        assert_eq!(Edge::Bottom.ending_corner(), Corner::BottomLeading);
        assert_eq!(Edge::Leading.starting_corner(), Corner::BottomLeading);
        assert_eq!(Edge::Leading.ending_corner(), Corner::TopLeading);
    }

    #[test]
    fn consecutive_edges_share_a_corner() {
        for (i, edge) in Edge::ALL.iter().enumerate() {
            let next = Edge::ALL[(i + 1) % 4];
            assert_eq!(edge.ending_corner(), next.starting_corner());
        }
    }

    #[test]
    fn endpoints_delegate_to_corner_points() {
        assert_eq!(Edge::Bottom.starting_point(RECT), Vec2::new(100.0, 60.0));
        assert_eq!(Edge::Bottom.ending_point(RECT), Vec2::new(0.0, 60.0));
    }

    #[test]
    fn direction_points_from_start_to_end() {
        for edge in Edge::ALL {
            let span = edge.ending_point(RECT) - edge.starting_point(RECT);
            let along = span.x * edge.direction().x + span.y * edge.direction().y;
            assert!(along > 0.0, "{edge:?}");
        }
    }

    #[test]
    fn offsets_move_into_the_edge() {
        assert_eq!(Edge::Leading.point_after_start(RECT, 10.0), Vec2::new(0.0, 50.0));
        assert_eq!(Edge::Leading.point_before_end(RECT, 10.0), Vec2::new(0.0, 10.0));
        assert_eq!(Edge::Bottom.point_after_start(RECT, 10.0), Vec2::new(90.0, 60.0));
    }
}
