use palette_align::EngineError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Unsupported PNG color type: {0}")]
    UnsupportedColorType(String),

    #[error("Sprite error: {0}")]
    Engine(#[from] EngineError),

    #[error("Report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}
