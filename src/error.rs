use thiserror::Error;

/// Errors produced while converting, persisting or rendering annotations.
#[derive(Error, Debug)]
pub enum AnnotationError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Image Error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Invalid image dimensions, expected positive width and height but got {width}x{height}.")]
    InvalidImageDimensions { width: f64, height: f64 },

    #[error("Cannot open the image viewer: {0}")]
    Viewer(#[from] opener::OpenError),

    #[error("Font Error: {0}")]
    Font(String),
}

pub type Result<T> = std::result::Result<T, AnnotationError>;
