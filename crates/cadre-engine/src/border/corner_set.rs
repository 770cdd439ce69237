use crate::paint::Color;

use super::{BorderSegment, Corner, CornerSegment, Edge};

/// Optional per-attribute overrides for a corner.
///
/// Unset attributes are inherited from the segment being replaced, or fall back
/// to the [`CornerSegment::plain`] defaults when there is none.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerPatch {
    pub radius: Option<f32>,
    pub color: Option<Color>,
    pub stroke_width: Option<f32>,
    pub dashed: Option<bool>,
}

impl CornerPatch {
    #[inline]
    pub const fn new() -> Self {
        Self { radius: None, color: None, stroke_width: None, dashed: None }
    }

    #[inline]
    pub const fn radius(self, radius: f32) -> Self {
        Self { radius: Some(radius), ..self }
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

    /// Builds a fresh segment for `corner`: patch value, else `base` value, else default.
    pub fn apply(self, corner: Corner, base: Option<&CornerSegment>) -> CornerSegment {
        let fallback = CornerSegment::plain(corner);
        let base = base.unwrap_or(&fallback);
        CornerSegment::new(
            corner,
            self.radius.unwrap_or(base.radius()),
            self.color.unwrap_or(base.color()),
            self.stroke_width.unwrap_or(base.stroke_width()),
            self.dashed.unwrap_or(base.dashed()),
        )
    }
}

/// Sparse corner-to-style mapping.
///
/// Absent corners read as [`CornerSegment::plain`]. All builder operations
/// return a new set.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CornerSet {
    slots: [Option<CornerSegment>; 4],
}

impl CornerSet {
    /// No overrides.
    #[inline]
    pub const fn none() -> Self {
        Self { slots: [None; 4] }
    }

    /// Every corner styled by `patch`.
    pub fn all(patch: CornerPatch) -> Self {
        Corner::ALL
            .into_iter()
            .fold(Self::none(), |set, corner| set.with_corner(corner, patch))
    }

    /// Only `corner` styled by `patch`.
    #[inline]
    pub fn corner(corner: Corner, patch: CornerPatch) -> Self {
        Self::none().with_corner(corner, patch)
    }

    /// Both corners touching `side` styled by `patch`.
    #[inline]
    pub fn side(side: Edge, patch: CornerPatch) -> Self {
        Self::none().with_side(side, patch)
    }

    #[inline]
    pub fn get(&self, corner: Corner) -> Option<&CornerSegment> {
        self.slots[corner.index()].as_ref()
    }

    #[inline]
    pub fn contains(&self, corner: Corner) -> bool {
        self.slots[corner.index()].is_some()
    }

    /// The stored segment, or the default one when absent.
    #[inline]
    pub fn resolve(&self, corner: Corner) -> CornerSegment {
        self.get(corner).copied().unwrap_or_else(|| CornerSegment::plain(corner))
    }

    /// Stored segments in clockwise order.
    pub fn iter(&self) -> impl Iterator<Item = &CornerSegment> {
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

    /// Replaces the entry for `segment.corner()`.
    #[inline]
    pub fn with_segment(&self, segment: CornerSegment) -> Self {
        let mut slots = self.slots;
        slots[segment.corner().index()] = Some(segment);
        Self { slots }
    }

    pub fn with_corner(&self, corner: Corner, patch: CornerPatch) -> Self {
        self.with_segment(patch.apply(corner, self.get(corner)))
    }

    /// Writes the same style to both corners of `side`.
    ///
    /// Unset attributes are inherited from the side's starting corner.
    pub fn with_side(&self, side: Edge, patch: CornerPatch) -> Self {
        let start = side.starting_corner();
        let end = side.ending_corner();
        let styled = patch.apply(start, self.get(start));

        self.with_segment(styled)
            .with_segment(CornerSegment::new(
                end,
                styled.radius(),
                styled.color(),
                styled.stroke_width(),
                styled.dashed(),
            ))
    }

    /// All four corners, materialized and inset by `amount`.
    pub fn inset(&self, amount: f32) -> Self {
        Corner::ALL
            .into_iter()
            .map(|corner| self.resolve(corner).inset(amount))
            .collect()
    }
}

impl FromIterator<CornerSegment> for CornerSet {
    /// Later segments for the same corner replace earlier ones.
    fn from_iter<I: IntoIterator<Item = CornerSegment>>(iter: I) -> Self {
        iter.into_iter().fold(Self::none(), |set, segment| set.with_segment(segment))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── lookup ────────────────────────────────────────────────────────────

    #[test]
    fn none_resolves_to_defaults() {
        let set = CornerSet::none();
        assert!(set.is_empty());
        for corner in Corner::ALL {
            assert!(!set.contains(corner));
            assert_eq!(set.resolve(corner), CornerSegment::plain(corner));
        }
    }

    #[test]
    fn all_fills_every_corner() {
        let set = CornerSet::all(CornerPatch::new().radius(8.0).color(Color::RED));
        assert_eq!(set.len(), 4);
        for corner in Corner::ALL {
            let c = set.get(corner).unwrap();
            assert_eq!(c.corner(), corner);
            assert_eq!(c.radius(), 8.0);
            assert_eq!(c.color(), Color::RED);
            assert_eq!(c.stroke_width(), 1.0);
        }
    }

    #[test]
    fn from_iter_keys_by_corner() {
        let set: CornerSet = [
            CornerSegment::plain(Corner::BottomLeading).with_radius(3.0),
            CornerSegment::plain(Corner::TopLeading).with_radius(5.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(set.len(), 2);
        let radii: Vec<f32> = set.iter().map(|c| c.radius()).collect();
        assert_eq!(radii, vec![5.0, 3.0]);
    }

    // ── builders ──────────────────────────────────────────────────────────

    #[test]
    fn with_corner_inherits_unset_attributes() {
        let set = CornerSet::corner(Corner::TopTrailing, CornerPatch::new().radius(10.0).stroke_width(4.0));
        let set = set.with_corner(Corner::TopTrailing, CornerPatch::new().color(Color::GREEN));

        let c = set.resolve(Corner::TopTrailing);
        assert_eq!(c.radius(), 10.0);
        assert_eq!(c.stroke_width(), 4.0);
        assert_eq!(c.color(), Color::GREEN);
    }

    #[test]
    fn builders_do_not_mutate_the_original() {
        let base = CornerSet::none();
        let _ = base.with_corner(Corner::TopLeading, CornerPatch::new().radius(2.0));
        assert!(base.is_empty());
    }

    #[test]
    fn each_side_touches_exactly_its_two_corners() {
        let base = CornerSet::all(CornerPatch::new().radius(1.0));
        for side in Edge::ALL {
            let set = base.with_side(side, CornerPatch::new().radius(9.0));
            for corner in Corner::ALL {
                let touched = corner == side.starting_corner() || corner == side.ending_corner();
                let want = if touched { 9.0 } else { 1.0 };
                assert_eq!(set.resolve(corner).radius(), want, "{side:?} {corner:?}");
            }
        }
    }

    #[test]
    fn side_inherits_from_its_starting_corner() {
        let set = CornerSet::corner(Corner::BottomTrailing, CornerPatch::new().color(Color::BLUE).dashed(true))
            .with_side(Edge::Bottom, CornerPatch::new().radius(6.0));

        for corner in [Corner::BottomTrailing, Corner::BottomLeading] {
            let c = set.resolve(corner);
            assert_eq!(c.color(), Color::BLUE);
            assert!(c.dashed());
            assert_eq!(c.radius(), 6.0);
        }
        assert!(!set.contains(Corner::TopLeading));
    }

    #[test]
    fn inset_materializes_all_corners() {
        let set = CornerSet::corner(Corner::TopLeading, CornerPatch::new().radius(5.0)).inset(2.0);
        assert_eq!(set.len(), 4);
        assert!(set.iter().all(|c| c.inset_amount() == 2.0));
        assert_eq!(set.resolve(Corner::TopLeading).radius(), 5.0);
    }
}
