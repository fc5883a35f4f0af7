use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("'{0}' is not a text file")]
    Decode(String),

    #[error("Fullscreen error: {0}")]
    Fullscreen(String),
}

/// Convenience type alias for Results with AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AppError = io_err.into();
        assert!(matches!(app_err, AppError::Io(_)));
        assert!(app_err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_display() {
        let err = AppError::Decode("photo.png".to_string());
        assert_eq!(err.to_string(), "'photo.png' is not a text file");

        let err = AppError::Fullscreen("request denied".to_string());
        assert_eq!(err.to_string(), "Fullscreen error: request denied");
    }
}
