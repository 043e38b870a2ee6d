use super::*;

fn tiny() -> OverlaySource {
    OverlaySource::Decoded(image::RgbaImage::new(2, 2))
}

#[test]
fn relative_size_bounds_are_inclusive() {
    OverlaySpec::new(tiny(), 0.10, MarkShape::Square, 0).unwrap();
    OverlaySpec::new(tiny(), 0.35, MarkShape::Circle, 12).unwrap();
    assert!(OverlaySpec::new(tiny(), 0.09, MarkShape::Square, 0).is_err());
    assert!(OverlaySpec::new(tiny(), 0.36, MarkShape::Square, 0).is_err());
    assert!(OverlaySpec::new(tiny(), f64::NAN, MarkShape::Square, 0).is_err());
}

#[test]
fn shapes_round_trip_through_their_names() {
    for shape in MarkShape::ALL {
        assert_eq!(shape.as_str().parse::<MarkShape>().unwrap(), shape);
    }
    assert_eq!("CIRCLE".parse::<MarkShape>().unwrap(), MarkShape::Circle);
    assert!("star".parse::<MarkShape>().is_err());
}

#[test]
fn shape_serde_is_lowercase() {
    let v = serde_json::to_value(MarkShape::Hexagon).unwrap();
    assert_eq!(v, serde_json::json!("hexagon"));
    let s: MarkShape = serde_json::from_value(serde_json::json!("diamond")).unwrap();
    assert_eq!(s, MarkShape::Diamond);
}

#[test]
fn debug_does_not_dump_pixels() {
    let dbg = format!("{:?}", OverlaySource::Bytes(vec![0u8; 4096]));
    assert_eq!(dbg, "Bytes(4096)");
}

#[test]
fn data_url_debug_shows_only_the_header() {
    let dbg = format!(
        "{:?}",
        OverlaySource::DataUrl("data:image/png;base64,AAAA".to_owned())
    );
    assert_eq!(dbg, "DataUrl(\"data:image/png;base64\")");
}
