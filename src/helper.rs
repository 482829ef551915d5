use image::{GrayImage, ImageBuffer, Luma};

use crate::symbol::ModuleBitmap;

/// Side length of one module in generated SVG documents, in pixels.
pub const UNIT_SIZE: usize = 6;

/*---- Utilities ----*/

// Returns a string of SVG code for an image depicting the given bitmap.
// Every dark module becomes its own UNIT_SIZE square; light modules are left
// out. The string always uses Unix newlines (\n), regardless of the platform.
pub fn to_svg_string(bitmap: &ModuleBitmap) -> String {
	let mut result = String::new();
	result += "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n";
	result += &format!(
		"<svg width=\"{}\" height=\"{}\" xmlns=\"http://www.w3.org/2000/svg\">\n",
		bitmap.width() * UNIT_SIZE, bitmap.height() * UNIT_SIZE);
	for (y, row) in bitmap.rows().enumerate() {
		for (x, &dark) in row.iter().enumerate() {
			if dark {
				result += &format!(
					"<rect x=\"{}\" y=\"{}\" width=\"{2}\" height=\"{2}\" fill=\"#000\"/>\n",
					x * UNIT_SIZE, y * UNIT_SIZE, UNIT_SIZE);
			}
		}
	}
	result += "</svg>";
	result
}

/// Renders the bitmap as text, two module rows per line.
///
/// With `inverse == false` dark modules are blank and light modules are drawn
/// with block characters, which reads correctly on a dark terminal background.
pub fn to_small_string(bitmap: &ModuleBitmap, inverse: bool) -> String {
	let mut result = String::new();
	let rows: Vec<&[bool]> = bitmap.rows().collect();
	let mut pairs = rows.chunks_exact(2);
	for pair in &mut pairs {
		for (&top, &bottom) in pair[0].iter().zip(pair[1].iter()) {
			let c = match (top != inverse, bottom != inverse) {
				(true, true) => ' ',
				(false, false) => '█',
				(true, false) => '▄',
				(false, true) => '▀',
			};
			result.push(c);
		}
		result.push('\n');
	}
	if let [last] = pairs.remainder() {
		for &dark in last.iter() {
			result.push(if dark != inverse { ' ' } else { '▀' });
		}
		result.push('\n');
	}
	result
}

/// Prints the given bitmap to the console.
pub fn print_qr(bitmap: &ModuleBitmap) {
	println!("{}", to_small_string(bitmap, false));
}

/// Rasterizes the bitmap into a square grayscale image.
///
/// The image is `size` pixels wide unless the bitmap has more modules than that,
/// in which case it is one pixel per module. Modules are scaled by the largest
/// whole factor that fits and the symbol is centered.
///
/// # Example
///
/// ```
/// use urlqr::helper::to_image;
/// use urlqr::settings::CorrectionLevel;
/// use urlqr::symbol::encode;
///
/// let bitmap = encode("Hello, World!", CorrectionLevel::Low).unwrap();
/// let img = to_image(&bitmap, 256);
/// assert_eq!(img.dimensions(), (256, 256));
/// ```
pub fn to_image(bitmap: &ModuleBitmap, size: u32) -> GrayImage {
    let dim = bitmap.width().max(bitmap.height()) as u32;
    let real = size.max(dim);
    let scale = real / dim;
    let offset = (real - dim * scale) / 2;

    let mut img: GrayImage = ImageBuffer::new(real, real);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let dark = x >= offset
            && y >= offset
            && bitmap.get(((x - offset) / scale) as usize, ((y - offset) / scale) as usize);
        *pixel = if dark {
            Luma([0u8]) // Black
        } else {
            Luma([255u8]) // White
        };
    }
    img
}
