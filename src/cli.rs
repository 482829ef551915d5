//! Command-line flags.
//!
//! The flag set keeps the single-letter names of the original tool, including the
//! single-dash long flag `-nodisplay`. clap only understands long flags with two
//! dashes, so [`normalize_args`] rewrites that one before parsing.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::{ArgAction, CommandFactory, Parser};

const EXAMPLES: &str = "\
Examples:
  urlqr -u 'https://www.example.com' -s 256 -l M -f png -d /path/to/save
  urlqr -u 'https://www.example.com' -s 512 -l Q -f svg";

#[derive(Parser, Debug, Clone)]
#[command(name = "urlqr", author, version, about, long_about = None, after_help = EXAMPLES)]
pub struct Cli {
    /// URL to generate QR code for (max URL length 2048)
    #[arg(short = 'u', long = "url", default_value = "")]
    pub url: String,

    /// Correction level (L, M, Q, H)
    #[arg(short = 'l', long = "level", default_value = "M")]
    pub level: String,

    /// Output format (png, svg)
    #[arg(short = 'f', long = "format", default_value = "png")]
    pub format: String,

    /// Size of the QR code in pixels (min 100, max 4096)
    #[arg(short = 's', long = "size", default_value_t = 256, allow_negative_numbers = true)]
    pub size: i64,

    /// Directory to save the file
    #[arg(short = 'd', long = "dir", default_value = ".")]
    pub directory: PathBuf,

    /// Filename to save QR code to
    #[arg(short = 'o', long = "output")]
    pub output: Option<String>,

    /// Skip the QR code preview on the console
    #[arg(long = "nodisplay", action = ArgAction::SetTrue)]
    pub no_display: bool,

    /// Enable debug logging
    #[arg(short = 'v', long = "verbose", action = ArgAction::SetTrue)]
    pub verbose: bool,
}

impl Cli {
    /// Usage text printed when the tool is run without any flags.
    pub fn usage() -> String {
        Cli::command().render_help().to_string()
    }
}

/// Rewrite `-nodisplay` (optionally `=true`/`=false`) into clap's `--nodisplay`.
///
/// The first element is the program name and is passed through untouched, as is
/// everything after a `--` terminator.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut out = Vec::new();
    let mut terminated = false;
    for (i, arg) in args.into_iter().map(Into::into).enumerate() {
        if i == 0 || terminated {
            out.push(arg);
            continue;
        }
        match arg.to_str() {
            Some("--") => {
                terminated = true;
                out.push(arg);
            }
            Some("-nodisplay") | Some("-nodisplay=true") | Some("--nodisplay=true") => {
                out.push(OsString::from("--nodisplay"));
            }
            // An explicit false is the default.
            Some("-nodisplay=false") | Some("--nodisplay=false") => {}
            _ => out.push(arg),
        }
    }
    out
}
