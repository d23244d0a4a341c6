// Host-side integration tests for configuration, colors and the viewport.

use app_core::color::{parse_hex_rgb, srgb_to_linear};
use app_core::{SceneConfig, SceneError, Viewport, ZFollow, DEFAULT_SEED};

#[test]
fn default_config_matches_shipped_scene() {
    let config = SceneConfig::default();
    assert_eq!(config.seed, DEFAULT_SEED);
    assert_eq!(config.total_decorations(), 1500);
    assert_eq!(config.bound, 30.0);
    assert_eq!(config.camera_start.z, 30.0);
    assert_eq!(config.motion.z_follow, ZFollow::Live);
    assert!((config.clear_color[0] - 33.0 / 255.0).abs() < 1e-6);
    assert!(config.text.content.contains('\n'));
}

#[test]
fn seed_override_parsing() {
    assert_eq!(SceneConfig::default().with_seed_str(Some("7")).seed, 7);
    assert_eq!(SceneConfig::default().with_seed_str(Some(" 12 ")).seed, 12);
    assert_eq!(SceneConfig::default().with_seed_str(Some("abc")).seed, DEFAULT_SEED);
    assert_eq!(SceneConfig::default().with_seed_str(Some("")).seed, DEFAULT_SEED);
    assert_eq!(SceneConfig::default().with_seed_str(None).seed, DEFAULT_SEED);
}

#[test]
fn hex_colors() {
    let rgb = parse_hex_rgb("#ff8000").unwrap();
    assert_eq!(rgb, [1.0, 128.0 / 255.0, 0.0]);
    assert_eq!(parse_hex_rgb("000000").unwrap(), [0.0; 3]);
    for bad in ["#12345", "#1234567", "#+12345", "#gg0000", ""] {
        assert!(matches!(parse_hex_rgb(bad), Err(SceneError::InvalidColor(_))), "{bad}");
    }
    assert!(SceneConfig::default().with_clear_color_hex("nope").is_err());
}

#[test]
fn srgb_transfer_endpoints() {
    assert_eq!(srgb_to_linear(0.0), 0.0);
    assert!((srgb_to_linear(1.0) - 1.0).abs() < 1e-6);
    assert!(srgb_to_linear(0.5) < 0.5);
}

#[test]
fn pixel_ratio_is_capped_at_two() {
    assert_eq!(Viewport::new(10, 10, 3.0).render_pixel_ratio(), 2.0);
    assert_eq!(Viewport::new(10, 10, 1.5).render_pixel_ratio(), 1.5);
    assert_eq!(Viewport::new(10, 10, 0.0).render_pixel_ratio(), 1.0);
    assert_eq!(Viewport::new(100, 50, 3.0).physical_size(), (200, 100));
    assert!(Viewport::new(0, 50, 1.0).is_empty());
}
