//! Decoder for the JSON "typeface" font format (glyph outlines as compact
//! path strings in font units).

use crate::error::{SceneError, SceneResult};
use fnv::FnvHashMap;
use glam::Vec2;
use serde::Deserialize;
use std::collections::HashMap;

#[derive(Deserialize)]
struct TypefaceJson {
    glyphs: HashMap<String, GlyphJson>,
    resolution: f32,
    #[serde(rename = "boundingBox")]
    bounding_box: BoundingBoxJson,
    #[serde(rename = "underlineThickness", default)]
    underline_thickness: f32,
    #[serde(rename = "familyName", default)]
    family_name: String,
}

#[derive(Deserialize)]
struct GlyphJson {
    ha: f32,
    #[serde(default)]
    o: Option<String>,
}

#[derive(Deserialize)]
struct BoundingBoxJson {
    #[serde(rename = "yMin")]
    y_min: f32,
    #[serde(rename = "yMax")]
    y_max: f32,
}

/// One outline command in font units.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Vec2),
    LineTo(Vec2),
    QuadTo { ctrl: Vec2, to: Vec2 },
    CubicTo { ctrl1: Vec2, ctrl2: Vec2, to: Vec2 },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Glyph {
    pub advance: f32,
    pub commands: Vec<PathCommand>,
}

#[derive(Clone, Debug)]
pub struct Font {
    pub family_name: String,
    pub resolution: f32,
    pub ascent_to_descent: f32,
    pub underline_thickness: f32,
    glyphs: FnvHashMap<char, Glyph>,
}

impl Font {
    pub fn from_json(text: &str) -> SceneResult<Self> {
        let raw: TypefaceJson = serde_json::from_str(text)?;
        let mut glyphs = FnvHashMap::default();
        for (key, g) in raw.glyphs {
            let mut chars = key.chars();
            let (Some(ch), None) = (chars.next(), chars.next()) else {
                continue;
            };
            let commands = match &g.o {
                Some(o) => parse_outline(ch, o)?,
                None => Vec::new(),
            };
            glyphs.insert(
                ch,
                Glyph {
                    advance: g.ha,
                    commands,
                },
            );
        }
        log::info!(
            "[font] loaded {:?}: {} glyphs, resolution {}",
            raw.family_name,
            glyphs.len(),
            raw.resolution
        );
        Ok(Self {
            family_name: raw.family_name,
            resolution: raw.resolution,
            ascent_to_descent: raw.bounding_box.y_max - raw.bounding_box.y_min,
            underline_thickness: raw.underline_thickness,
            glyphs,
        })
    }

    #[inline]
    pub fn glyph(&self, ch: char) -> Option<&Glyph> {
        self.glyphs.get(&ch)
    }

    #[inline]
    pub fn glyph_count(&self) -> usize {
        self.glyphs.len()
    }

    /// World units per font unit at the given text size.
    #[inline]
    pub fn scale_for(&self, size: f32) -> f32 {
        size / self.resolution
    }

    #[inline]
    pub fn line_height(&self, size: f32) -> f32 {
        (self.ascent_to_descent + self.underline_thickness) * self.scale_for(size)
    }
}

/// Parse an outline string such as `"m 0 0 l 10 0 q 20 10 15 5 z"`.
///
/// Curve commands list the end point first and the control point(s) after.
pub fn parse_outline(glyph: char, outline: &str) -> SceneResult<Vec<PathCommand>> {
    let tokens: Vec<&str> = outline.split_whitespace().collect();
    let mut out = Vec::new();
    let mut i = 0;
    while i < tokens.len() {
        let op = tokens[i];
        i += 1;
        let arity = match op {
            "m" | "l" => 2,
            "q" => 4,
            "b" => 6,
            "z" => 0,
            _ => return Err(SceneError::MalformedOutline { glyph, index: i - 1 }),
        };
        if i + arity > tokens.len() {
            return Err(SceneError::MalformedOutline { glyph, index: i - 1 });
        }
        let mut nums = [0.0f32; 6];
        for (k, slot) in nums.iter_mut().take(arity).enumerate() {
            *slot = tokens[i + k]
                .parse()
                .map_err(|_| SceneError::MalformedOutline { glyph, index: i + k })?;
        }
        i += arity;
        let p = |k: usize| Vec2::new(nums[k], nums[k + 1]);
        match op {
            "m" => out.push(PathCommand::MoveTo(p(0))),
            "l" => out.push(PathCommand::LineTo(p(0))),
            "q" => out.push(PathCommand::QuadTo {
                to: p(0),
                ctrl: p(2),
            }),
            "b" => out.push(PathCommand::CubicTo {
                to: p(0),
                ctrl1: p(2),
                ctrl2: p(4),
            }),
            _ => {}
        }
    }
    Ok(out)
}
