use std::path::PathBuf;

use thiserror::Error;

/// qrtool error types
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("QR encoding failed: {0}")]
    Encoding(#[from] qrcode::types::QrError),

    #[error("Cannot decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Unusable image {}: {reason}", path.display())]
    ImageContent { path: PathBuf, reason: String },

    #[error("Failed to encode PNG: {0}")]
    Render(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub(crate) fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Process exit status the CLI reports for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            Error::Validation(_) => 2,
            Error::Encoding(_) => 3,
            Error::ImageDecode { .. } | Error::ImageContent { .. } => 4,
            Error::Io(_) => 5,
            Error::Render(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes_are_distinct_per_kind() {
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope"));
        let enc = Error::from(qrcode::types::QrError::DataTooLong);

        assert_eq!(Error::validation("empty").exit_code(), 2);
        assert_eq!(enc.exit_code(), 3);
        assert_eq!(io.exit_code(), 5);
        assert_ne!(Error::Render("x".into()).exit_code(), 0);
    }

    #[test]
    fn test_encoding_error_keeps_library_message() {
        let err = Error::from(qrcode::types::QrError::DataTooLong);
        assert!(err.to_string().starts_with("QR encoding failed:"));
    }
}
