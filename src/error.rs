use thiserror::Error;

#[derive(Debug, Error)]
pub enum WidgetError {
    #[error("preference store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference store JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("preference store at {path} is not a key-value object")]
    InvalidStore { path: String },
}

pub type Result<T> = std::result::Result<T, WidgetError>;
