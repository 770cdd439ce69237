/// Shape drawn at the open ends of a stroked segment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineCap {
    Butt,
    Round,
    #[default]
    Square,
}

/// Shape drawn where two stroked pieces of one path meet.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Default)]
pub enum LineJoin {
    Bevel,
    Round,
    #[default]
    Miter,
}

/// Renderer-agnostic stroke description for a single border segment.
///
/// Border segments always use square caps and miter joins so that adjacent
/// segments overlap cleanly where they meet.
#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
    /// Alternating on/off lengths in logical pixels. Empty = solid.
    pub dash: Vec<f32>,
}

impl StrokeStyle {
    /// Solid stroke of the given width.
    #[inline]
    pub fn solid(width: f32) -> Self {
        Self { width, cap: LineCap::Square, join: LineJoin::Miter, dash: Vec::new() }
    }

    /// Dashed stroke whose dash and gap are both `width * 5 / 3`.
    #[inline]
    pub fn dashed(width: f32) -> Self {
        Self { dash: vec![(width * 5.0) / 3.0], ..Self::solid(width) }
    }

    #[inline]
    pub fn is_dashed(&self) -> bool {
        !self.dash.is_empty()
    }

    /// Converts to a `kurbo::Stroke` for renderers built on the linebender stack.
    pub fn to_kurbo(&self) -> kurbo::Stroke {
        let cap = match self.cap {
            LineCap::Butt => kurbo::Cap::Butt,
            LineCap::Round => kurbo::Cap::Round,
            LineCap::Square => kurbo::Cap::Square,
        };
        let join = match self.join {
            LineJoin::Bevel => kurbo::Join::Bevel,
            LineJoin::Round => kurbo::Join::Round,
            LineJoin::Miter => kurbo::Join::Miter,
        };

        kurbo::Stroke::new(self.width as f64)
            .with_caps(cap)
            .with_join(join)
            .with_dashes(0.0, self.dash.iter().map(|&d| d as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn solid_has_no_dash() {
        let s = StrokeStyle::solid(2.0);
        assert!(!s.is_dashed());
        assert_eq!(s.cap, LineCap::Square);
        assert_eq!(s.join, LineJoin::Miter);
    }

    #[test]
    fn dashed_pattern_scales_with_width() {
        let s = StrokeStyle::dashed(3.0);
        assert_eq!(s.dash, vec![5.0]);
    }

    #[test]
    fn kurbo_stroke_carries_width_and_dashes() {
        let k = StrokeStyle::dashed(6.0).to_kurbo();
        assert_eq!(k.width, 6.0);
        assert_eq!(k.dash_pattern.as_slice(), &[10.0]);
        assert_eq!(k.join, kurbo::Join::Miter);
        assert_eq!(k.start_cap, kurbo::Cap::Square);
    }
}
