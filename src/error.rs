//! Crate-level error type and `Result` alias.
//!
//! Validation failures are usage errors (exit code 2); everything else that can
//! go wrong while encoding or writing the file is a general failure (exit code 1).
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Exit code for failures that are not caused by bad flags.
pub const EXIT_GENERAL_FAILURE: u8 = 1;
/// Exit code for invalid or missing command-line flags.
pub const EXIT_USAGE: u8 = 2;

#[derive(Debug, Error)]
pub enum Error {
    #[error("URL is required. Please use -u <URL>")]
    MissingUrl,

    #[error("URL must be at most {max} characters, got {len}.")]
    UrlTooLong { len: usize, max: usize },

    #[error("Size of the QR code must be between {min} and {max}, got {size}.")]
    SizeOutOfRange { size: i64, min: u32, max: u32 },

    #[error("Invalid correction level '{0}'. Choose from L, M, Q, H.")]
    InvalidLevel(String),

    #[error("Unsupported file format '{0}'. Only png and svg are supported.")]
    UnsupportedFormat(String),

    #[error("QR encoding failed: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
}

impl Error {
    /// Whether the error was caused by the flags the user passed.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            Error::MissingUrl
                | Error::UrlTooLong { .. }
                | Error::SizeOutOfRange { .. }
                | Error::InvalidLevel(_)
                | Error::UnsupportedFormat(_)
        )
    }

    pub fn exit_code(&self) -> u8 {
        if self.is_usage() {
            EXIT_USAGE
        } else {
            EXIT_GENERAL_FAILURE
        }
    }
}
