//! Flag validation.
//!
//! Raw flag values from [`crate::cli::Cli`] are checked once and turned into an
//! immutable [`Settings`] value. Checks run in a fixed order (URL, size,
//! correction level, format) and the first failure is returned.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use qrcode::EcLevel;

use crate::cli::Cli;
use crate::error::{Error, Result};

/// Longest URL accepted, in characters.
pub const MAX_URL_LENGTH: usize = 2048;
/// Smallest PNG side length in pixels.
pub const MIN_SIZE: u32 = 100;
/// Largest PNG side length in pixels.
pub const MAX_SIZE: u32 = 4096;

/// Error correction level for a QR code.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Debug)]
pub enum CorrectionLevel {
    /// Tolerates ~7% erroneous codewords.
    Low,
    /// Tolerates ~15% erroneous codewords.
    Medium,
    /// Tolerates ~25% erroneous codewords.
    Quartile,
    /// Tolerates ~30% erroneous codewords.
    High,
}

impl CorrectionLevel {
    pub fn ec_level(self) -> EcLevel {
        match self {
            CorrectionLevel::Low => EcLevel::L,
            CorrectionLevel::Medium => EcLevel::M,
            CorrectionLevel::Quartile => EcLevel::Q,
            CorrectionLevel::High => EcLevel::H,
        }
    }
}

impl FromStr for CorrectionLevel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "L" => Ok(CorrectionLevel::Low),
            "M" => Ok(CorrectionLevel::Medium),
            "Q" => Ok(CorrectionLevel::Quartile),
            "H" => Ok(CorrectionLevel::High),
            other => Err(Error::InvalidLevel(other.to_string())),
        }
    }
}

impl fmt::Display for CorrectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let letter = match self {
            CorrectionLevel::Low => "L",
            CorrectionLevel::Medium => "M",
            CorrectionLevel::Quartile => "Q",
            CorrectionLevel::High => "H",
        };
        f.write_str(letter)
    }
}

/// Output file format.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    Png,
    Svg,
}

impl OutputFormat {
    /// File extension, without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Png => "png",
            OutputFormat::Svg => "svg",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "png" => Ok(OutputFormat::Png),
            "svg" => Ok(OutputFormat::Svg),
            other => Err(Error::UnsupportedFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Validated settings for a single invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Settings {
    pub url: String,
    pub level: CorrectionLevel,
    pub format: OutputFormat,
    pub size: u32,
    pub directory: PathBuf,
    pub filename: Option<String>,
    pub display: bool,
}

impl Settings {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        validate_url(&cli.url)?;
        let size = validate_size(cli.size)?;
        let level = cli.level.parse::<CorrectionLevel>()?;
        let format = cli.format.parse::<OutputFormat>()?;

        Ok(Settings {
            url: cli.url.clone(),
            level,
            format,
            size,
            directory: cli.directory.clone(),
            filename: cli.output.clone().filter(|name| !name.is_empty()),
            display: !cli.no_display,
        })
    }
}

pub fn validate_url(url: &str) -> Result<()> {
    if url.is_empty() {
        return Err(Error::MissingUrl);
    }
    let len = url.chars().count();
    if len > MAX_URL_LENGTH {
        return Err(Error::UrlTooLong { len, max: MAX_URL_LENGTH });
    }
    Ok(())
}

pub fn validate_size(size: i64) -> Result<u32> {
    if size < i64::from(MIN_SIZE) || size > i64::from(MAX_SIZE) {
        return Err(Error::SizeOutOfRange { size, min: MIN_SIZE, max: MAX_SIZE });
    }
    // In range, so the cast cannot truncate.
    Ok(size as u32)
}
