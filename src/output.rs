//! Output file naming and writing.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::NaiveDateTime;
use image::ImageFormat;
use regex::Regex;
use tracing::info;

use crate::error::Result;
use crate::helper::{to_image, to_svg_string};
use crate::settings::{OutputFormat, Settings};
use crate::symbol::ModuleBitmap;

static UNSAFE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9]+").expect("filename pattern"));

/// Replaces every run of characters outside `[A-Za-z0-9]` with a single `_`.
pub fn sanitize_filename(input: &str) -> String {
    UNSAFE_RUN.replace_all(input, "_").into_owned()
}

/// `qrcode{YYYYMMDDhhmmss}{sanitized url}.{ext}`
pub fn default_filename(url: &str, timestamp: NaiveDateTime, format: OutputFormat) -> String {
    format!(
        "qrcode{}{}.{}",
        timestamp.format("%Y%m%d%H%M%S"),
        sanitize_filename(url),
        format.extension()
    )
}

/// Sanitizes a user-supplied file name and gives it the extension of `format`.
///
/// A trailing `.png`/`.svg` that matches the format is kept as the extension
/// rather than being folded into the sanitized stem.
pub fn explicit_filename(name: &str, format: OutputFormat) -> String {
    let suffix = format!(".{}", format.extension());
    let stem = match name.len().checked_sub(suffix.len()) {
        Some(split)
            if name.is_char_boundary(split) && name[split..].eq_ignore_ascii_case(&suffix) =>
        {
            &name[..split]
        }
        _ => name,
    };
    format!("{}{}", sanitize_filename(stem), suffix)
}

/// Absolute path of the file to write for these settings.
pub fn resolve_output_path(settings: &Settings, now: NaiveDateTime) -> Result<PathBuf> {
    let dir = std::path::absolute(&settings.directory)?;
    let filename = match &settings.filename {
        Some(name) => explicit_filename(name, settings.format),
        None => default_filename(&settings.url, now, settings.format),
    };
    Ok(dir.join(filename))
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

/// Rasterizes `bitmap` to a `size`×`size` PNG at `path`.
pub fn write_png(bitmap: &ModuleBitmap, size: u32, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let img = to_image(bitmap, size);
    img.save_with_format(path, ImageFormat::Png)?;
    info!(path = %path.display(), width = img.width(), "wrote PNG");
    Ok(())
}

/// Writes `bitmap` as an SVG document at `path`.
pub fn write_svg(bitmap: &ModuleBitmap, path: &Path) -> Result<()> {
    ensure_parent(path)?;
    let svg = to_svg_string(bitmap);
    fs::write(path, svg.as_bytes())?;
    info!(path = %path.display(), bytes = svg.len(), "wrote SVG");
    Ok(())
}
