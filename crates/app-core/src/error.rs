use thiserror::Error;

/// Failures the core can report. Everything else (sampling, population,
/// animation) is infallible for documented inputs.
#[derive(Debug, Error)]
pub enum SceneError {
    #[error("typeface json: {0}")]
    FontDecode(#[from] serde_json::Error),

    #[error("glyph {glyph:?}: malformed outline near token {index}")]
    MalformedOutline { glyph: char, index: usize },

    #[error("invalid hex color {0:?}")]
    InvalidColor(String),

    #[error("text produced no geometry")]
    EmptyText,

    #[error("gpu: {0}")]
    Gpu(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
