use crate::animate::{MotionParams, ZFollow};
use crate::color::parse_hex_rgb;
use crate::constants::*;
use crate::error::SceneResult;
use crate::geometry::DecorationKind;
use crate::intro::IntroParams;
use crate::text::TextSpec;
use glam::Vec3;

/// Everything tunable about the scene. `Default` reproduces the shipped look.
#[derive(Clone, Debug)]
pub struct SceneConfig {
    pub seed: u64,
    pub bound: f32,
    pub decorations: Vec<(DecorationKind, usize)>,
    pub text: TextSpec,
    pub camera_start: Vec3,
    pub intro: IntroParams,
    pub motion: MotionParams,
    pub clear_color: [f32; 3],
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: DEFAULT_SEED,
            bound: DECORATION_BOUND,
            decorations: DecorationKind::ALL
                .iter()
                .map(|k| (*k, k.default_count()))
                .collect(),
            text: TextSpec::default(),
            camera_start: camera_start_vec3(),
            intro: IntroParams::default(),
            motion: MotionParams::default(),
            clear_color: parse_hex_rgb(CLEAR_COLOR_HEX).unwrap_or([0.13; 3]),
        }
    }
}

impl SceneConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_z_follow(mut self, z_follow: ZFollow) -> Self {
        self.motion.z_follow = z_follow;
        self
    }

    pub fn with_clear_color_hex(mut self, hex: &str) -> SceneResult<Self> {
        self.clear_color = parse_hex_rgb(hex)?;
        Ok(self)
    }

    /// Parse an optional seed override (decimal). Invalid values are logged
    /// and ignored.
    pub fn with_seed_str(self, raw: Option<&str>) -> Self {
        match raw.map(str::trim).filter(|s| !s.is_empty()) {
            Some(s) => match s.parse::<u64>() {
                Ok(seed) => self.with_seed(seed),
                Err(_) => {
                    log::warn!("[config] ignoring invalid seed {:?}", s);
                    self
                }
            },
            None => self,
        }
    }

    pub fn total_decorations(&self) -> usize {
        self.decorations.iter().map(|(_, n)| n).sum()
    }
}
