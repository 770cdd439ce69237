use super::Vec2;

/// Axis-aligned rectangle in logical pixels (top-left origin).
///
/// Width and height may in principle be negative; the border engine does not
/// normalize, it takes `min_*`/`max_*` at face value.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Rect {
    pub origin: Vec2,
    pub size: Vec2,
}

impl Rect {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            origin: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    #[inline]
    pub fn min_x(self) -> f32 {
        self.origin.x.min(self.origin.x + self.size.x)
    }

    #[inline]
    pub fn max_x(self) -> f32 {
        self.origin.x.max(self.origin.x + self.size.x)
    }

    #[inline]
    pub fn min_y(self) -> f32 {
        self.origin.y.min(self.origin.y + self.size.y)
    }

    #[inline]
    pub fn max_y(self) -> f32 {
        self.origin.y.max(self.origin.y + self.size.y)
    }

    #[inline]
    pub fn min(self) -> Vec2 {
        Vec2::new(self.min_x(), self.min_y())
    }

    #[inline]
    pub fn max(self) -> Vec2 {
        Vec2::new(self.max_x(), self.max_y())
    }

    #[inline]
    pub fn width(self) -> f32 {
        self.size.x.abs()
    }

    #[inline]
    pub fn height(self) -> f32 {
        self.size.y.abs()
    }
}
