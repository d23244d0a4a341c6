use crate::error::{SceneError, SceneResult};

/// Parse `#rrggbb` (or `rrggbb`) into sRGB-encoded 0..1 components.
pub fn parse_hex_rgb(hex: &str) -> SceneResult<[f32; 3]> {
    let digits = hex.strip_prefix('#').unwrap_or(hex);
    if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SceneError::InvalidColor(hex.to_string()));
    }
    let mut rgb = [0.0f32; 3];
    for (i, c) in rgb.iter_mut().enumerate() {
        let byte = u8::from_str_radix(&digits[i * 2..i * 2 + 2], 16)
            .map_err(|_| SceneError::InvalidColor(hex.to_string()))?;
        *c = byte as f32 / 255.0;
    }
    Ok(rgb)
}

/// sRGB-encoded component to linear, for clearing an sRGB surface.
#[inline]
pub fn srgb_to_linear(c: f32) -> f32 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}
