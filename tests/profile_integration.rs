//! Integration tests for style profiles and config files

use std::fs;

use gridsvg::{
    render_bitmap, Bitmap, ConfigError, IntRect, PixelSource, RenderConfig, RenderError, Style,
    StyleProfile,
};
use pretty_assertions::assert_eq;

const CONFIG: &str = r##"
[style]
preset = "dots"
pixel_margin = 20
corner_radius = 100
border = 1
safe_areas = [{ x = 0, y = 0, width = 2, height = 2 }]

[svg]
standalone = false
pretty_print = false
fill = "#0b0b0b"
"##;

#[test]
fn test_config_file_round_trip() {
    let path = std::env::temp_dir().join(format!("gridsvg-config-{}.toml", std::process::id()));
    fs::write(&path, CONFIG).unwrap();
    let config = RenderConfig::from_file(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(config.profile.style, Style::Dots);
    assert_eq!(config.profile.pixel_margin, 20);
    assert_eq!(config.profile.border, 1);
    assert_eq!(config.profile.safe_areas, vec![IntRect::from_xywh(0, 0, 2, 2)]);
    assert!(!config.svg.standalone);
    assert_eq!(config.svg.fill.as_deref(), Some("#0b0b0b"));
}

#[test]
fn test_missing_config_file() {
    let err = RenderConfig::from_file(std::path::Path::new("/nonexistent/gridsvg.toml")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_unknown_config_key_is_rejected() {
    let err = RenderConfig::from_str("[svg]\nmerge = true").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_safe_area_cells_stay_square() {
    let config = RenderConfig::from_str(CONFIG).unwrap();
    let bitmap = Bitmap::parse("#..\n...\n..#").unwrap();
    let svg = render_bitmap(&bitmap, &config).unwrap();

    assert!(svg.starts_with("<svg "));
    // The safe cell keeps full size with split sides; "dots" would otherwise
    // inset and round it
    assert!(svg.contains(r#"d="M1 1.5 L1 1 L1.5 1 L2 1 L2 1.5 L2 2 L1.5 2 L1 2 Z""#));
    // The styled cell outside is a margined circle
    assert!(svg.contains(r#"d="M3.1 3.5 A0.4 0.4 0 0 1 3.5 3.1"#));
}

#[test]
fn test_style_all_ignores_safe_areas() {
    let mut config = RenderConfig::from_str(CONFIG).unwrap();
    config.profile.style_all = true;
    let bitmap = Bitmap::parse("#").unwrap();
    let svg = render_bitmap(&bitmap, &config).unwrap();
    assert!(svg.contains(r#"d="M1.1 1.5 A0.4 0.4 0 0 1 1.5 1.1"#));
}

#[test]
fn test_styled_bitmap_canvas_includes_border() {
    let bitmap = Bitmap::parse("##\n##").unwrap();
    let profile = StyleProfile::new(Style::Holes).with_border(3);
    let source = profile.apply(&bitmap);
    assert_eq!(source.size().to_string(), "8x8");
    assert_eq!(source.sample_style(gridsvg::IntPoint::new(2, 2)), None);
    assert!(source.sample_style(gridsvg::IntPoint::new(3, 3)).is_some());
}

#[test]
fn test_invalid_profile_is_a_render_error() {
    let config = RenderConfig::new().with_profile(StyleProfile::default().with_pixel_margin(300));
    let bitmap = Bitmap::parse("#").unwrap();
    let err = render_bitmap(&bitmap, &config).unwrap_err();
    assert_eq!(
        err.to_string(),
        "invalid config: pixel_margin must be between 0 and 100 percent, got 300"
    );
    assert!(matches!(err, RenderError::Config(_)));
}
