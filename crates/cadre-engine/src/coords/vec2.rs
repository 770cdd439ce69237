use core::ops::{Add, Mul, Sub};

/// 2D point or vector in logical pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Shifts the point by `-amount` on both axes.
    ///
    /// This is the inset rule every border segment applies to its computed points.
    #[inline]
    pub fn inset(self, amount: f32) -> Vec2 {
        Vec2::new(self.x - amount, self.y - amount)
    }

    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let d = self - other;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl From<Vec2> for kurbo::Point {
    #[inline]
    fn from(v: Vec2) -> kurbo::Point {
        kurbo::Point::new(v.x as f64, v.y as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_moves_both_axes_toward_origin() {
        assert_eq!(Vec2::new(10.0, 4.0).inset(3.0), Vec2::new(7.0, 1.0));
    }

    #[test]
    fn inset_is_additive() {
        let p = Vec2::new(12.5, -3.0);
        assert_eq!(p.inset(1.5).inset(2.0), p.inset(3.5));
    }

    #[test]
    fn distance_pythagorean() {
        assert_eq!(Vec2::new(0.0, 0.0).distance(Vec2::new(3.0, 4.0)), 5.0);
    }
}
