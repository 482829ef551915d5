//! # urlqr
//!
//! Turns a URL into a QR code image file from the command line.
//!
//! The QR symbol itself is encoded by the [`qrcode`](https://docs.rs/qrcode) crate.
//! This crate validates the flags, converts the encoder's output into a
//! [`symbol::ModuleBitmap`], renders it as a PNG (using `image`) or as an SVG
//! document with one `<rect>` per dark module, and writes the file.
//!
//! ## Usage
//!
//! ```text
//! urlqr -u 'https://www.example.com' -s 256 -l M -f png -d /path/to/save
//! urlqr -u 'https://www.example.com' -s 512 -l Q -f svg -nodisplay
//! ```
//!
//! Exit codes: `0` on success, `1` when encoding or writing fails, `2` for
//! invalid flags.
//!
//! ## Library example
//!
//! ```no_run
//! use urlqr::helper::to_svg_string;
//! use urlqr::settings::CorrectionLevel;
//! use urlqr::symbol::encode;
//!
//! let bitmap = encode("https://example.com", CorrectionLevel::Medium).unwrap();
//! std::fs::write("example.svg", to_svg_string(&bitmap)).unwrap();
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line flags.
//! - [`settings`]: Flag validation.
//! - [`symbol`]: Module bitmap produced by the encoder.
//! - [`helper`]: SVG, raster, and console renderers.
//! - [`output`]: File naming and writing.

pub mod cli;
pub mod error;
pub mod helper;
pub mod logging;
pub mod output;
pub mod settings;
pub mod symbol;

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing::debug;

pub use error::{Error, Result};

use crate::cli::{normalize_args, Cli};
use crate::error::EXIT_USAGE;
use crate::settings::{OutputFormat, Settings};

/// Encodes the URL from `settings`, writes the image, and returns its path.
///
/// Prints the console preview first unless `settings.display` is off.
pub fn generate(settings: &Settings) -> Result<PathBuf> {
    let bitmap = symbol::encode(&settings.url, settings.level)?;

    if settings.display {
        helper::print_qr(&bitmap);
    }

    let path = output::resolve_output_path(settings, Local::now().naive_local())?;
    match settings.format {
        OutputFormat::Png => output::write_png(&bitmap, settings.size, &path)?,
        OutputFormat::Svg => output::write_svg(&bitmap, &path)?,
    }
    Ok(path)
}

/// Run the CLI with the given arguments (program name first).
///
/// Errors are printed to stderr as `Error: <message>` and turned into the exit
/// code; nothing below this function exits the process.
pub fn run<I, T>(args: I) -> ExitCode
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let args = normalize_args(args);
    if args.len() <= 1 {
        eprintln!("{}", Cli::usage());
        return ExitCode::from(EXIT_USAGE);
    }

    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version land here too, with exit code 0.
            let _ = e.print();
            return ExitCode::from(e.exit_code() as u8);
        }
    };

    logging::init_logger(cli.verbose);

    let result = Settings::from_cli(&cli).and_then(|settings| {
        debug!(?settings, "validated flags");
        generate(&settings)
    });

    match result {
        Ok(path) => {
            println!("QR code saved as: {}", path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}
