#![allow(dead_code)]

use app_core::{Font, SceneConfig, TextSpec};

/// Tiny typeface: a solid square "A", a square "O" with a square hole, and a
/// blank space. Font units, resolution 100.
pub const TEST_FONT_JSON: &str = r#"{
  "familyName": "Test Sans",
  "resolution": 100,
  "underlineThickness": 10,
  "boundingBox": { "xMin": 0, "yMin": -20, "xMax": 100, "yMax": 100 },
  "ascender": 100,
  "descender": -20,
  "glyphs": {
    "A": { "ha": 120, "x_min": 0, "x_max": 100, "o": "m 0 0 l 0 100 l 100 100 l 100 0 z" },
    "O": { "ha": 120, "o": "m 0 0 l 0 100 l 100 100 l 100 0 z m 25 25 l 75 25 l 75 75 l 25 75 z" },
    " ": { "ha": 50 }
  }
}"#;

pub fn test_font() -> Font {
    Font::from_json(TEST_FONT_JSON).expect("test font parses")
}

pub fn flat_spec(content: &str) -> TextSpec {
    TextSpec {
        content: content.to_string(),
        size: 1.0,
        depth: 0.2,
        curve_segments: 4,
        steps: 1,
        bevel: None,
    }
}

pub fn test_config() -> SceneConfig {
    let mut config = SceneConfig::default();
    config.text.content = "AO".to_string();
    config
}
