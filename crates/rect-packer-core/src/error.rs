use thiserror::Error;

#[derive(Debug, Error)]
pub enum PackError {
    #[error("invalid container dimensions: {width}x{height}")]
    InvalidContainer { width: f64, height: f64 },
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("nothing to pack")]
    Empty,
    #[error("rendering support is not compiled in (enable the `render` feature)")]
    RenderUnavailable,
    #[error("encoding error: {0}")]
    Encode(String),
}

pub type Result<T> = std::result::Result<T, PackError>;
