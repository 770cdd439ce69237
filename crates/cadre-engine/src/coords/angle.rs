use core::ops::Add;

/// Plane angle, stored in radians.
///
/// In the canonical y-down space a positive angle turns clockwise on screen:
/// 0° points along +X, 90° along +Y (down).
#[derive(Debug, Copy, Clone, Default, PartialEq, PartialOrd)]
pub struct Angle {
    radians: f32,
}

impl Angle {
    pub const ZERO: Angle = Angle { radians: 0.0 };

    /// 90°, the sweep of every corner arc.
    pub const QUARTER_TURN: Angle = Angle { radians: core::f32::consts::FRAC_PI_2 };

    #[inline]
    pub const fn radians(radians: f32) -> Self {
        Self { radians }
    }

    #[inline]
    pub fn degrees(degrees: f32) -> Self {
        Self { radians: degrees.to_radians() }
    }

    #[inline]
    pub const fn to_radians(self) -> f32 {
        self.radians
    }

    #[inline]
    pub fn to_degrees(self) -> f32 {
        self.radians.to_degrees()
    }
}

impl Add for Angle {
    type Output = Angle;
    #[inline]
    fn add(self, rhs: Angle) -> Angle {
        Angle::radians(self.radians + rhs.radians)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn degrees_round_trip() {
        assert!((Angle::degrees(270.0).to_degrees() - 270.0).abs() < 1e-4);
    }

    #[test]
    fn quarter_turn_is_ninety_degrees() {
        assert!((Angle::QUARTER_TURN.to_degrees() - 90.0).abs() < 1e-4);
        let sum = Angle::degrees(180.0) + Angle::QUARTER_TURN;
        assert!((sum.to_degrees() - 270.0).abs() < 1e-4);
    }
}
