use crate::coords::{Angle, Vec2};

use super::{ArcOp, PathOp};

/// Ordered list of path-construction steps.
///
/// Performance characteristics:
/// - every builder call is an O(1) push
/// - no geometry is flattened until a consumer asks for it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BorderPath {
    ops: Vec<PathOp>,
}

impl BorderPath {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { ops: Vec::with_capacity(capacity) }
    }

    #[inline]
    pub fn ops(&self) -> &[PathOp] {
        &self.ops
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    #[inline]
    pub fn move_to(&mut self, p: Vec2) {
        self.ops.push(PathOp::MoveTo(p));
    }

    #[inline]
    pub fn line_to(&mut self, p: Vec2) {
        self.ops.push(PathOp::LineTo(p));
    }

    #[inline]
    pub fn arc(&mut self, center: Vec2, radius: f32, start_angle: Angle, sweep_angle: Angle) {
        self.ops.push(PathOp::Arc(ArcOp::new(center, radius, start_angle, sweep_angle)));
    }

    #[inline]
    pub fn close(&mut self) {
        self.ops.push(PathOp::Close);
    }

    /// Points visited by the ops, in order. An arc contributes its start and end
    /// point; `Close` contributes nothing.
    pub fn vertices(&self) -> Vec<Vec2> {
        let mut out = Vec::with_capacity(self.ops.len() * 2);
        for op in &self.ops {
            match op {
                PathOp::MoveTo(p) | PathOp::LineTo(p) => out.push(*p),
                PathOp::Arc(arc) => {
                    out.push(arc.start_point());
                    out.push(arc.end_point());
                }
                PathOp::Close => {}
            }
        }
        out
    }
}
