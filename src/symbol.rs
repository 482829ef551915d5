//! QR symbol as a module bitmap.
//!
//! The encoding itself (segment selection, error correction, masking and module
//! placement) is done by the [`qrcode`] crate. This module only converts its
//! output into a plain boolean grid with a quiet zone, which is what the
//! renderers in [`crate::helper`] consume.
use qrcode::{Color, QrCode};
use tracing::debug;

use crate::error::Result;
use crate::settings::CorrectionLevel;

/// Width of the light border around the symbol, in modules.
pub const QUIET_ZONE: usize = 4;

/// A rectangular grid of dark (`true`) and light (`false`) modules.
///
/// Rows are stored top to bottom, each row left to right. Bitmaps produced by
/// [`encode`] are square and already include the quiet zone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModuleBitmap {
    width: usize,
    height: usize,
    modules: Vec<bool>,
}

impl ModuleBitmap {
    /// Builds a bitmap from explicit rows.
    ///
    /// Returns `None` if there are no rows, the rows are empty, or they differ in
    /// length.
    pub fn from_rows<R: AsRef<[bool]>>(rows: &[R]) -> Option<Self> {
        let width = rows.first()?.as_ref().len();
        if width == 0 || rows.iter().any(|row| row.as_ref().len() != width) {
            return None;
        }
        let modules = rows.iter().flat_map(|row| row.as_ref().iter().copied()).collect();
        Some(ModuleBitmap { width, height: rows.len(), modules })
    }

    fn with_quiet_zone(code: &QrCode) -> Self {
        let inner = code.width();
        let side = inner + 2 * QUIET_ZONE;
        let mut modules = vec![false; side * side];
        for (i, color) in code.to_colors().into_iter().enumerate() {
            if color == Color::Dark {
                let (x, y) = (i % inner + QUIET_ZONE, i / inner + QUIET_ZONE);
                modules[y * side + x] = true;
            }
        }
        ModuleBitmap { width: side, height: side, modules }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the color of the module at the given coordinates: `true` for dark.
    /// Coordinates outside the bitmap are light.
    pub fn get(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height && self.modules[y * self.width + x]
    }

    pub fn dark_count(&self) -> usize {
        self.modules.iter().filter(|&&dark| dark).count()
    }

    /// Iterates over the rows, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.modules.chunks(self.width)
    }
}

/// Encodes `data` at the given correction level.
///
/// # Errors
///
/// Returns [`crate::Error::Encode`] if the data does not fit in the largest QR
/// version at this level.
pub fn encode(data: &str, level: CorrectionLevel) -> Result<ModuleBitmap> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), level.ec_level())?;
    let bitmap = ModuleBitmap::with_quiet_zone(&code);
    debug!(
        symbol_width = code.width(),
        bitmap_width = bitmap.width(),
        dark_modules = bitmap.dark_count(),
        level = %level,
        "encoded QR symbol"
    );
    Ok(bitmap)
}
