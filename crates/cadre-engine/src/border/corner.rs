use crate::coords::{Angle, Rect, Vec2};

use super::Edge;

/// One of the four rectangle corners.
///
/// Ordering follows clockwise traversal starting at the top-leading corner.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub enum Corner {
    TopLeading,
    TopTrailing,
    BottomTrailing,
    BottomLeading,
}

impl Corner {
    /// All corners in clockwise order.
    pub const ALL: [Corner; 4] = [
        Corner::TopLeading,
        Corner::TopTrailing,
        Corner::BottomTrailing,
        Corner::BottomLeading,
    ];

    /// Position in [`Corner::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The rectangle vertex at this corner.
    #[inline]
    pub fn point(self, rect: Rect) -> Vec2 {
        match self {
            Corner::TopLeading => Vec2::new(rect.min_x(), rect.min_y()),
            Corner::TopTrailing => Vec2::new(rect.max_x(), rect.min_y()),
            Corner::BottomTrailing => Vec2::new(rect.max_x(), rect.max_y()),
            Corner::BottomLeading => Vec2::new(rect.min_x(), rect.max_y()),
        }
    }

    /// Angle at which this corner's arc begins. Every corner arc sweeps a
    /// clockwise quarter turn from here.
    #[inline]
    pub fn starting_angle(self) -> Angle {
        match self {
            Corner::TopLeading => Angle::degrees(180.0),
            Corner::TopTrailing => Angle::degrees(270.0),
            Corner::BottomTrailing => Angle::degrees(0.0),
            Corner::BottomLeading => Angle::degrees(90.0),
        }
    }

    /// The edge that ends at this corner.
    #[inline]
    pub const fn preceding_edge(self) -> Edge {
        match self {
            Corner::TopLeading => Edge::Leading,
            Corner::TopTrailing => Edge::Top,
            Corner::BottomTrailing => Edge::Trailing,
            Corner::BottomLeading => Edge::Bottom,
        }
    }

    /// The edge that starts at this corner.
    #[inline]
    pub const fn following_edge(self) -> Edge {
        match self {
            Corner::TopLeading => Edge::Top,
            Corner::TopTrailing => Edge::Trailing,
            Corner::BottomTrailing => Edge::Bottom,
            Corner::BottomLeading => Edge::Leading,
        }
    }
}
