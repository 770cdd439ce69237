use crate::paint::Color;

use super::{BorderSegment, Edge, EdgeSegment};

/// Optional per-attribute overrides for an edge.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgePatch {
    pub color: Option<Color>,
    pub stroke_width: Option<f32>,
    pub dashed: Option<bool>,
}

impl EdgePatch {
    #[inline]
    pub const fn new() -> Self {
        Self { color: None, stroke_width: None, dashed: None }
    }

    #[inline]
    pub const fn color(self, color: Color) -> Self {
        Self { color: Some(color), ..self }
    }

    #[inline]
    pub const fn stroke_width(self, stroke_width: f32) -> Self {
        Self { stroke_width: Some(stroke_width), ..self }
    }

    #[inline]
    pub const fn dashed(self, dashed: bool) -> Self {
        Self { dashed: Some(dashed), ..self }
    }

    /// Builds a fresh, unresolved segment for `edge`: patch value, else `base`
    /// value, else default.
    pub fn apply(self, edge: Edge, base: Option<&EdgeSegment>) -> EdgeSegment {
        let fallback = EdgeSegment::plain(edge);
        let base = base.unwrap_or(&fallback);
        EdgeSegment::new(
            edge,
            self.color.unwrap_or(base.color()),
            self.stroke_width.unwrap_or(base.stroke_width()),
            self.dashed.unwrap_or(base.dashed()),
        )
    }
}

/// Sparse edge-to-style mapping.
///
/// Absent edges read as [`EdgeSegment::plain`]. All builder operations return a
/// new set.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct EdgeSet {
    slots: [Option<EdgeSegment>; 4],
}

impl EdgeSet {
    #[inline]
    pub const fn none() -> Self {
        Self { slots: [None; 4] }
    }

    pub fn all(patch: EdgePatch) -> Self {
        Edge::ALL
            .into_iter()
            .fold(Self::none(), |set, edge| set.with_edge(edge, patch))
    }

    #[inline]
    pub fn edge(edge: Edge, patch: EdgePatch) -> Self {
        Self::none().with_edge(edge, patch)
    }

    #[inline]
    pub fn get(&self, edge: Edge) -> Option<&EdgeSegment> {
        self.slots[edge.index()].as_ref()
    }

    #[inline]
    pub fn contains(&self, edge: Edge) -> bool {
        self.slots[edge.index()].is_some()
    }

    #[inline]
    pub fn resolve(&self, edge: Edge) -> EdgeSegment {
        self.get(edge).copied().unwrap_or_else(|| EdgeSegment::plain(edge))
    }

    /// Stored segments in clockwise order.
    pub fn iter(&self) -> impl Iterator<Item = &EdgeSegment> {
        self.slots.iter().flatten()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    #[inline]
    pub fn with_segment(&self, segment: EdgeSegment) -> Self {
        let mut slots = self.slots;
        slots[segment.edge().index()] = Some(segment);
        Self { slots }
    }

    pub fn with_edge(&self, edge: Edge, patch: EdgePatch) -> Self {
        self.with_segment(patch.apply(edge, self.get(edge)))
    }

    /// All four edges, materialized and inset by `amount`.
    pub fn inset(&self, amount: f32) -> Self {
        Edge::ALL
            .into_iter()
            .map(|edge| self.resolve(edge).inset(amount))
            .collect()
    }
}

impl FromIterator<EdgeSegment> for EdgeSet {
    fn from_iter<I: IntoIterator<Item = EdgeSegment>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), |set, segment| set.with_segment(segment))
    }
}
