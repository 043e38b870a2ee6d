use crate::model::overlay::MarkShape;
use kurbo::{BezPath, Circle, Point, Rect, RoundedRect, Shape};
use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, SQRT_2};

const TOLERANCE: f64 = 0.1;

/// Corner radius of [`MarkShape::Rounded`], as a fraction of the edge.
pub const ROUNDED_CORNER_FRACTION: f64 = 0.2;

impl MarkShape {
    /// Outline of this shape fitted into the `edge × edge` square centered at `center`.
    ///
    /// Every shape stays inside that square; circle and polygons touch it at their extremes.
    pub fn path(self, center: Point, edge: f64) -> BezPath {
        let edge = edge.max(0.0);
        match self {
            Self::Square => square_path(center, edge),
            Self::Circle => circle_path(center, edge),
            Self::Rounded => rounded_path(center, edge),
            Self::Hexagon => hexagon_path(center, edge),
            Self::Octagon => octagon_path(center, edge),
            Self::Diamond => diamond_path(center, edge),
        }
    }
}

fn bounds(center: Point, edge: f64) -> Rect {
    Rect::from_center_size(center, (edge, edge))
}

fn square_path(center: Point, edge: f64) -> BezPath {
    bounds(center, edge).to_path(TOLERANCE)
}

fn circle_path(center: Point, edge: f64) -> BezPath {
    Circle::new(center, edge / 2.0).to_path(TOLERANCE)
}

fn rounded_path(center: Point, edge: f64) -> BezPath {
    RoundedRect::from_rect(bounds(center, edge), edge * ROUNDED_CORNER_FRACTION).to_path(TOLERANCE)
}

fn hexagon_path(center: Point, edge: f64) -> BezPath {
    let r = edge / 2.0;
    polygon((0..6).map(|k| {
        let a = -FRAC_PI_2 + FRAC_PI_3 * f64::from(k);
        Point::new(center.x + r * a.cos(), center.y + r * a.sin())
    }))
}

fn octagon_path(center: Point, edge: f64) -> BezPath {
    let b = bounds(center, edge);
    // Corner cut that makes all eight sides equal.
    let c = edge / (2.0 + SQRT_2);
    polygon([
        Point::new(b.x0 + c, b.y0),
        Point::new(b.x1 - c, b.y0),
        Point::new(b.x1, b.y0 + c),
        Point::new(b.x1, b.y1 - c),
        Point::new(b.x1 - c, b.y1),
        Point::new(b.x0 + c, b.y1),
        Point::new(b.x0, b.y1 - c),
        Point::new(b.x0, b.y0 + c),
    ])
}

fn diamond_path(center: Point, edge: f64) -> BezPath {
    let b = bounds(center, edge);
    polygon([
        Point::new(center.x, b.y0),
        Point::new(b.x1, center.y),
        Point::new(center.x, b.y1),
        Point::new(b.x0, center.y),
    ])
}

fn polygon(points: impl IntoIterator<Item = Point>) -> BezPath {
    let mut path = BezPath::new();
    for (i, p) in points.into_iter().enumerate() {
        if i == 0 {
            path.move_to(p);
        } else {
            path.line_to(p);
        }
    }
    path.close_path();
    path
}

/// Convert a kurbo path into the `vello_cpu` re-export.
pub(crate) fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/shape.rs"]
mod tests;
