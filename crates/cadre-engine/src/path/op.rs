use crate::coords::{Angle, Vec2};

/// Circular arc around `center`.
///
/// Positive `sweep_angle` turns clockwise on screen (y-down space). `radius` is
/// passed through as given; a negative radius is a caller error and mirrors the
/// arc through its center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ArcOp {
    pub center: Vec2,
    pub radius: f32,
    pub start_angle: Angle,
    pub sweep_angle: Angle,
}

impl ArcOp {
    #[inline]
    pub const fn new(center: Vec2, radius: f32, start_angle: Angle, sweep_angle: Angle) -> Self {
        Self { center, radius, start_angle, sweep_angle }
    }

    #[inline]
    pub fn end_angle(&self) -> Angle {
        self.start_angle + self.sweep_angle
    }

    /// Point on the arc's circle at `angle`.
    #[inline]
    pub fn point_at(&self, angle: Angle) -> Vec2 {
        let (sin, cos) = angle.to_radians().sin_cos();
        self.center + Vec2::new(cos, sin) * self.radius
    }

    #[inline]
    pub fn start_point(&self) -> Vec2 {
        self.point_at(self.start_angle)
    }

    #[inline]
    pub fn end_point(&self) -> Vec2 {
        self.point_at(self.end_angle())
    }
}

/// A single path-construction step.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PathOp {
    MoveTo(Vec2),
    LineTo(Vec2),
    /// Arc; the current point connects to the arc start with a straight line
    /// (or moves there when the path is empty).
    Arc(ArcOp),
    Close,
}
