// Host-side integration tests for typeface decoding and outline parsing.

mod common;

use app_core::font::parse_outline;
use app_core::{Font, PathCommand, SceneError};
use common::*;
use glam::Vec2;

#[test]
fn decodes_metrics_and_glyphs() {
    let font = test_font();
    assert_eq!(font.family_name, "Test Sans");
    assert_eq!(font.glyph_count(), 3);
    assert_eq!(font.glyph('A').unwrap().advance, 120.0);
    assert!(font.glyph(' ').unwrap().commands.is_empty());
    assert!(font.glyph('Z').is_none());
    assert!((font.scale_for(0.5) - 0.005).abs() < 1e-7);
    // (yMax - yMin + underline) * size / resolution
    assert!((font.line_height(1.0) - 1.3).abs() < 1e-6);
}

#[test]
fn quadratic_lists_end_point_before_control() {
    let cmds = parse_outline('x', "m 0 0 q 10 0 5 5").unwrap();
    assert_eq!(
        cmds,
        vec![
            PathCommand::MoveTo(Vec2::ZERO),
            PathCommand::QuadTo {
                to: Vec2::new(10.0, 0.0),
                ctrl: Vec2::new(5.0, 5.0),
            },
        ]
    );
}

#[test]
fn cubic_takes_six_numbers() {
    let cmds = parse_outline('x', "m 0 0 b 30 0 10 10 20 10 z").unwrap();
    assert_eq!(
        cmds[1],
        PathCommand::CubicTo {
            to: Vec2::new(30.0, 0.0),
            ctrl1: Vec2::new(10.0, 10.0),
            ctrl2: Vec2::new(20.0, 10.0),
        }
    );
}

#[test]
fn malformed_outlines_report_position() {
    let err = parse_outline('g', "m 0").unwrap_err();
    assert!(matches!(err, SceneError::MalformedOutline { glyph: 'g', index: 0 }));

    let err = parse_outline('g', "m 0 0 x 1 2").unwrap_err();
    assert!(matches!(err, SceneError::MalformedOutline { index: 3, .. }));

    let err = parse_outline('g', "l 1 abc").unwrap_err();
    assert!(matches!(err, SceneError::MalformedOutline { index: 2, .. }));
}

#[test]
fn invalid_json_is_a_decode_error() {
    assert!(matches!(
        Font::from_json("{ not json"),
        Err(SceneError::FontDecode(_))
    ));
    assert!(matches!(
        Font::from_json(r#"{"glyphs": {}}"#),
        Err(SceneError::FontDecode(_))
    ));
}
