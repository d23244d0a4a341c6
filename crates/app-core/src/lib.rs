pub mod animate;
pub mod assemble;
pub mod camera;
pub mod clock;
pub mod color;
pub mod config;
pub mod constants;
pub mod context;
pub mod error;
pub mod font;
pub mod frame;
pub mod geometry;
#[cfg(feature = "gpu")]
pub mod gpu;
pub mod intro;
pub mod pointer;
pub mod populate;
pub mod sampler;
pub mod scene;
pub mod text;
pub mod transform;
pub mod triangulate;
pub mod viewport;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use animate::*;
pub use assemble::*;
pub use camera::*;
pub use clock::*;
pub use config::*;
pub use constants::*;
pub use context::*;
pub use error::*;
pub use font::{Font, Glyph, PathCommand};
pub use frame::*;
pub use geometry::{DecorationKind, MeshData};
#[cfg(feature = "gpu")]
pub use gpu::GpuRenderer;
pub use intro::*;
pub use pointer::*;
pub use populate::*;
pub use sampler::*;
pub use scene::*;
pub use text::{Bevel, TextSpec};
pub use transform::*;
pub use viewport::*;
