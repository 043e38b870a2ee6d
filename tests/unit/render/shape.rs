use super::*;

const C: Point = Point::new(500.0, 500.0);

#[test]
fn every_shape_fits_its_bounding_square() {
    for shape in MarkShape::ALL {
        let bb = shape.path(C, 220.0).bounding_box();
        assert!(bb.x0 >= 390.0 - 1e-6, "{shape}: {bb:?}");
        assert!(bb.y0 >= 390.0 - 1e-6, "{shape}: {bb:?}");
        assert!(bb.x1 <= 610.0 + 1e-6, "{shape}: {bb:?}");
        assert!(bb.y1 <= 610.0 + 1e-6, "{shape}: {bb:?}");
        assert!(shape.path(C, 220.0).contains(C), "{shape} must contain its center");
    }
}

#[test]
fn square_covers_corners_but_circle_does_not() {
    let near_corner = Point::new(391.0, 391.0);
    assert!(MarkShape::Square.path(C, 220.0).contains(near_corner));
    for shape in [
        MarkShape::Circle,
        MarkShape::Rounded,
        MarkShape::Hexagon,
        MarkShape::Octagon,
        MarkShape::Diamond,
    ] {
        assert!(
            !shape.path(C, 220.0).contains(near_corner),
            "{shape} must leave the corner uncovered"
        );
    }
}

#[test]
fn circle_area_matches_diameter() {
    let area = MarkShape::Circle.path(C, 250.0).area().abs();
    let expected = std::f64::consts::PI * 125.0 * 125.0;
    assert!((area - expected).abs() / expected < 1e-3);
}

#[test]
fn octagon_sides_are_equal() {
    let path = MarkShape::Octagon.path(C, 100.0);
    let pts: Vec<Point> = path
        .elements()
        .iter()
        .filter_map(|el| match el {
            kurbo::PathEl::MoveTo(p) | kurbo::PathEl::LineTo(p) => Some(*p),
            _ => None,
        })
        .collect();
    assert_eq!(pts.len(), 8);
    let first = pts[0].distance(pts[1]);
    for i in 0..8 {
        let d = pts[i].distance(pts[(i + 1) % 8]);
        assert!((d - first).abs() < 1e-9);
    }
}

#[test]
fn negative_edge_collapses_to_empty() {
    let bb = MarkShape::Square.path(C, -5.0).bounding_box();
    assert_eq!(bb.width(), 0.0);
}

#[test]
fn cpu_conversion_preserves_elements() {
    let path = MarkShape::Circle.path(C, 100.0);
    let cpu = bezpath_to_cpu(&path);
    assert_eq!(cpu.elements().len(), path.elements().len());
}
