use super::*;

fn tiny() -> CompositedImage {
    CompositedImage::from_raw(2, vec![255u8; 16]).unwrap()
}

#[test]
fn default_filename_pattern() {
    assert_eq!(
        default_export_filename(DEFAULT_PRODUCT, "sanga"),
        "siddiq-studio-sanga-qr.png"
    );
    assert_eq!(default_export_filename("My Brand", "clash"), "My-Brand-clash-qr.png");
}

#[test]
fn png_bytes_decode_back() {
    let out = export_png(&tiny(), "badge").unwrap();
    assert_eq!(out.filename, "badge.png");
    assert_eq!(&out.bytes[..8], b"\x89PNG\r\n\x1a\n");

    let decoded = image::load_from_memory(&out.bytes).unwrap().to_rgba8();
    assert_eq!(decoded.dimensions(), (2, 2));
    assert_eq!(decoded.as_raw(), tiny().as_raw());
}

#[test]
fn hints_are_sanitized() {
    assert_eq!(export_filename("../../etc/passwd"), "etcpasswd.png");
    assert_eq!(export_filename("code.PNG"), "code.png");
    assert_eq!(export_filename("  "), "siddiq-studio-absolute-qr.png");
    assert_eq!(export_filename("///"), "siddiq-studio-absolute-qr.png");
}

#[test]
fn empty_image_cannot_be_exported() {
    let empty = CompositedImage::from_raw(0, Vec::new()).unwrap();
    let err = export_png(&empty, "x").unwrap_err();
    assert!(matches!(err, QrMarkError::ExportSerializationFailed(_)));
}
