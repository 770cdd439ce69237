use kurbo::{BezPath, PathEl, Point, Shape};

use super::{ArcOp, BorderPath, PathOp};

/// Flattening tolerance for arcs, in logical pixels.
///
/// Same value vello uses internally.
pub const ARC_TOLERANCE: f64 = 0.1;

impl BorderPath {
    /// Converts the op list into a `kurbo::BezPath`, approximating arcs with cubics.
    pub fn to_bez_path(&self) -> BezPath {
        let mut path = BezPath::new();
        for op in self.ops() {
            match *op {
                PathOp::MoveTo(p) => path.move_to(Point::from(p)),
                PathOp::LineTo(p) => path.insert_point(p.into()),
                PathOp::Arc(arc) => path.insert_arc(arc),
                PathOp::Close => path.close_path(),
            }
        }
        path
    }
}

/// Appends to a bezpath without the caller tracking whether a subpath is open.
trait BuildBezpath {
    fn insert_arc(&mut self, arc: ArcOp);
    fn insert_point(&mut self, point: Point);
}

impl BuildBezpath for BezPath {
    fn insert_arc(&mut self, arc: ArcOp) {
        // Degenerate corners collapse to their center; kurbo would emit nothing useful.
        if arc.radius <= 0.0 {
            self.insert_point(arc.center.into());
            return;
        }

        let radius = arc.radius as f64;
        let kurbo_arc = kurbo::Arc::new(
            Point::from(arc.center),
            kurbo::Vec2::new(radius, radius),
            arc.start_angle.to_radians() as f64,
            arc.sweep_angle.to_radians() as f64,
            0.0,
        );

        let mut elements = kurbo_arc.path_elements(ARC_TOLERANCE);
        match elements.next() {
            Some(PathEl::MoveTo(a)) if !self.elements().is_empty() => self.push(PathEl::LineTo(a)),
            Some(el) => self.push(el),
            None => return,
        }
        self.extend(elements);
    }

    fn insert_point(&mut self, point: Point) {
        if self.elements().is_empty() {
            self.push(PathEl::MoveTo(point));
        } else {
            self.push(PathEl::LineTo(point));
        }
    }
}
