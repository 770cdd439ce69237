use crate::coords::Rect;
use crate::path::BorderPath;

use super::{BorderSegment, Corner, CornerSegment, CornerSet, Edge, EdgeSegment, EdgeSet, Segment};

/// A rectangular border assembled from independently styled corners and edges.
///
/// Edges are resolved against their neighboring corners once, at construction,
/// so every edge ends exactly where the adjacent arc begins.
///
/// ```
/// use cadre_engine::border::{Border, CornerPatch, CornerSet, EdgeSet};
/// use cadre_engine::coords::Rect;
///
/// let border = Border::new(CornerSet::all(CornerPatch::new().radius(20.0)), EdgeSet::none());
/// let path = border.build_path(Rect::new(0.0, 0.0, 100.0, 100.0));
/// assert_eq!(path.ops().len(), 10);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Border {
    corners: CornerSet,
    /// Always holds all four edges, already resolved.
    edges: EdgeSet,
}

impl Border {
    pub fn new(corners: CornerSet, edges: EdgeSet) -> Self {
        let edges = Edge::ALL
            .into_iter()
            .map(|edge| {
                edges.resolve(edge).resolve_radii(
                    &corners.resolve(edge.starting_corner()),
                    &corners.resolve(edge.ending_corner()),
                )
            })
            .collect();

        log::debug!(
            "border assembled: {} corner override(s), radii {:?}",
            corners.len(),
            Corner::ALL.map(|c| corners.resolve(c).radius()),
        );

        Self { corners, edges }
    }

    /// The style overrides this border was built from.
    #[inline]
    pub fn corners(&self) -> &CornerSet {
        &self.corners
    }

    /// All four resolved edges.
    #[inline]
    pub fn edges(&self) -> &EdgeSet {
        &self.edges
    }

    #[inline]
    pub fn corner(&self, corner: Corner) -> CornerSegment {
        self.corners.resolve(corner)
    }

    #[inline]
    pub fn edge(&self, edge: Edge) -> EdgeSegment {
        self.edges.resolve(edge)
    }

    /// The eight segments in tracing order:
    /// top-leading, top, top-trailing, trailing, bottom-trailing, bottom,
    /// bottom-leading, leading.
    pub fn segments(&self) -> [Segment; 8] {
        core::array::from_fn(|i| {
            let corner = Corner::ALL[i / 2];
            if i % 2 == 0 {
                Segment::Corner(self.corner(corner))
            } else {
                Segment::Edge(self.edge(corner.following_edge()))
            }
        })
    }

    /// Closed outline of the border inside `rect`.
    ///
    /// Degenerate input (radius larger than half a side, empty rect) is not
    /// rejected; the path simply self-intersects or collapses.
    pub fn build_path(&self, rect: Rect) -> BorderPath {
        let segments = self.segments();
        let mut path = BorderPath::with_capacity(segments.len() + 2);

        path.move_to(self.corner(Corner::TopLeading).starting_point(rect));
        for segment in &segments {
            segment.append_to_path(&mut path, rect);
        }
        path.close();

        for corner in Corner::ALL {
            let arc_radius = self.corner(corner).arc_radius();
            if arc_radius < 0.0 {
                log::warn!("{corner:?} arc radius is negative ({arc_radius}); inset exceeds the corner radius");
            }
        }
        log::trace!("built border path: {} ops for {rect:?}", path.ops().len());

        path
    }

    /// [`build_path`](Self::build_path) converted to a `kurbo::BezPath`.
    #[inline]
    pub fn to_bez_path(&self, rect: Rect) -> kurbo::BezPath {
        self.build_path(rect).to_bez_path()
    }

    /// Returns a copy with every segment inset by `amount`.
    ///
    /// Resolved edge radii are kept; only the inset amounts change.
    pub fn inset(&self, amount: f32) -> Self {
        Self {
            corners: self.corners.inset(amount),
            edges: self.edges.inset(amount),
        }
    }
}

impl Default for Border {
    /// Square black 1px corners and edges, all four edges resolved.
    fn default() -> Self {
        Self::new(CornerSet::none(), EdgeSet::none())
    }
}
