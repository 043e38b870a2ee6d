use super::*;
use std::path::PathBuf;

#[test]
fn empty_object_yields_defaults() {
    let cfg = QrConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, QrConfig::default());
    assert!(cfg.to_overlay(Path::new(".")).unwrap().is_none());
}

#[test]
fn camel_case_fields_parse() {
    let json = r##"{
        "value": "https://example.com",
        "fgColor": "#141212",
        "bgColor": "#ece5d8",
        "level": "Q",
        "includeImage": true,
        "imageSrc": "logo.png",
        "imageSize": 30,
        "margin": 4,
        "logoPadding": 8,
        "logoShape": "circle"
    }"##;
    let cfg = QrConfig::from_reader(json.as_bytes()).unwrap();
    let req = cfg.to_request().unwrap();
    assert_eq!(req.payload, "https://example.com");
    assert_eq!(req.foreground, Rgb8::new(0x14, 0x12, 0x12));
    assert_eq!(req.level, EcLevel::Q);
    assert_eq!(req.quiet_margin, 4);

    let overlay = cfg.to_overlay(Path::new("assets")).unwrap().unwrap();
    assert_eq!(
        overlay.source,
        OverlaySource::Path(PathBuf::from("assets").join("logo.png"))
    );
    assert!((overlay.relative_size - 0.30).abs() < 1e-12);
    assert_eq!(overlay.shape, MarkShape::Circle);
    assert_eq!(overlay.padding_pixels, 8);
}

#[test]
fn data_url_sources_and_zero_padding_fallback() {
    let cfg = QrConfig {
        include_image: true,
        image_src: Some("data:image/png;base64,AAAA".to_owned()),
        logo_padding: 0,
        ..QrConfig::default()
    };
    let overlay = cfg.to_overlay(Path::new(".")).unwrap().unwrap();
    assert!(matches!(overlay.source, OverlaySource::DataUrl(_)));
    assert_eq!(overlay.padding_pixels, DEFAULT_LOGO_PADDING);
}

#[test]
fn image_src_without_include_flag_is_ignored() {
    let cfg = QrConfig {
        include_image: false,
        image_src: Some("logo.png".to_owned()),
        ..QrConfig::default()
    };
    assert!(cfg.to_overlay(Path::new(".")).unwrap().is_none());
}

#[test]
fn out_of_range_image_size_is_rejected() {
    let cfg = QrConfig {
        include_image: true,
        image_src: Some("logo.png".to_owned()),
        image_size: 50,
        ..QrConfig::default()
    };
    assert!(matches!(
        cfg.to_overlay(Path::new(".")),
        Err(QrMarkError::Validation(_))
    ));
}

#[test]
fn bad_json_is_a_validation_error() {
    let err = QrConfig::from_reader(r#"{"fgColor": "blue"}"#.as_bytes()).unwrap_err();
    assert!(err.to_string().contains("parse config JSON"));

    let err = QrConfig::from_path("does/not/exist.json").unwrap_err();
    assert!(matches!(err, QrMarkError::Validation(_)));
}
