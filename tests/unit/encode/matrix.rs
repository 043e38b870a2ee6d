use super::*;
use crate::foundation::color::Rgb8;
use crate::model::request::{EcLevel, PLACEHOLDER_PAYLOAD};

#[test]
fn hello_fits_version_one_at_high() {
    let grid = encode_modules(&EncodingRequest::new("HELLO")).unwrap();
    assert_eq!(grid.width, 21);
    assert_eq!(grid.dark.len(), 21 * 21);
    // Finder pattern corners are always dark; the separator beside them is light.
    assert!(grid.is_dark(0, 0));
    assert!(grid.is_dark(20, 0));
    assert!(grid.is_dark(0, 20));
    assert!(!grid.is_dark(7, 0));
    assert!(!grid.is_dark(21, 0));
}

#[test]
fn empty_payload_encodes_placeholder() {
    let empty = encode_modules(&EncodingRequest::new("")).unwrap();
    let placeholder = encode_modules(&EncodingRequest::new(PLACEHOLDER_PAYLOAD)).unwrap();
    assert_eq!(empty, placeholder);
}

#[test]
fn oversized_payload_reports_capacity() {
    let big = "x".repeat(2000);
    let err = encode_modules(&EncodingRequest::new(big.clone())).unwrap_err();
    match err {
        QrMarkError::EncodingCapacityExceeded {
            level,
            payload_bytes,
        } => {
            assert_eq!(level, EcLevel::H);
            assert_eq!(payload_bytes, 2000);
        }
        other => panic!("unexpected error: {other}"),
    }

    // The same payload fits once the caller lowers the level.
    encode_modules(&EncodingRequest::new(big).with_level(EcLevel::L)).unwrap();
}

#[test]
fn rasterize_maps_modules_with_margin() {
    let req = EncodingRequest::new("HELLO").with_colors(Rgb8::new(10, 20, 30), Rgb8::WHITE);
    let img = encode_matrix(&req, 1000).unwrap();
    assert_eq!(img.dimensions(), (1000, 1000));

    // 21 modules + 2*2 margin over 1000px is exactly 40px per module.
    let fg = [10, 20, 30, 255];
    let bg = [255, 255, 255, 255];
    assert_eq!(img.get_pixel(0, 0).0, bg);
    assert_eq!(img.get_pixel(79, 79).0, bg);
    assert_eq!(img.get_pixel(80, 80).0, fg);
    assert_eq!(img.get_pixel(119, 119).0, fg);
    assert_eq!(img.get_pixel(365, 85).0, bg);
    assert_eq!(img.get_pixel(999, 999).0, bg);
}

#[test]
fn rasterize_handles_fractional_scale() {
    let req = EncodingRequest::new("HELLO");
    let grid = encode_modules(&req).unwrap();
    let img = rasterize(&grid, &req, 333);
    assert_eq!(img.dimensions(), (333, 333));
    for px in img.pixels() {
        assert!(px.0 == [0, 0, 0, 255] || px.0 == [255, 255, 255, 255]);
    }
}

#[test]
fn zero_margin_puts_finder_in_the_corner() {
    let mut req = EncodingRequest::new("HELLO");
    req.quiet_margin = 0;
    let img = encode_matrix(&req, 210).unwrap();
    assert_eq!(img.get_pixel(0, 0).0, [0, 0, 0, 255]);
    assert_eq!(img.get_pixel(209, 0).0, [0, 0, 0, 255]);
}
