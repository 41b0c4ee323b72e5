//! Synthetic spritesheets and PNG helpers.

use palette_align::{Color, PixelBuffer, QUADRANT_SIZE, SHEET_HEIGHT, SHEET_WIDTH};
use std::path::{Path, PathBuf};

/// Colors used by the fixture sheets
pub mod colors {
    use palette_align::Color;

    pub const BACKGROUND: Color = Color::new(0, 255, 0);
    pub const NORMAL_BODY: Color = Color::new(200, 40, 40);
    pub const NORMAL_EYE: Color = Color::new(250, 250, 250);
    pub const SHINY_BODY: Color = Color::new(40, 40, 200);
    pub const SHINY_EYE: Color = Color::new(250, 250, 0);
    /// Drawn only in the back views
    pub const NORMAL_BACK_MARK: Color = Color::new(9, 99, 199);
    pub const SHINY_BACK_MARK: Color = Color::new(199, 99, 9);
}

/// Which part of a 64×64 view a pixel belongs to: 0 background, 1 body,
/// 2 eye. Front and back views differ so the sheet is not symmetric.
pub fn view_slot(back: bool, x: u32, y: u32) -> usize {
    let (eye_x, eye_y) = if back { (40, 20) } else { (24, 20) };
    if !(12..52).contains(&x) || !(12..52).contains(&y) {
        0
    } else if (eye_x..eye_x + 4).contains(&x) && (eye_y..eye_y + 4).contains(&y) {
        2
    } else {
        1
    }
}

/// A 256×64 sheet where each rendering draws the shared shape with its own
/// colors.
pub fn consistent_sheet() -> PixelBuffer {
    let normal = [colors::BACKGROUND, colors::NORMAL_BODY, colors::NORMAL_EYE];
    let shiny = [colors::BACKGROUND, colors::SHINY_BODY, colors::SHINY_EYE];
    let quadrants = [&normal, &shiny, &normal, &shiny];

    let pixels = (0..SHEET_HEIGHT)
        .flat_map(|y| {
            (0..SHEET_WIDTH).map(move |x| {
                let quadrant = (x / QUADRANT_SIZE) as usize;
                let back = quadrant >= 2;
                quadrants[quadrant][view_slot(back, x % QUADRANT_SIZE, y)]
            })
        })
        .collect();
    PixelBuffer::new(SHEET_WIDTH, SHEET_HEIGHT, pixels).unwrap()
}

/// [`consistent_sheet`] with a 2×2 mark that only the back views use.
pub fn sheet_with_back_only_color() -> PixelBuffer {
    let mut sheet = consistent_sheet();
    for (dx, dy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
        sheet = with_pixel(&sheet, 128 + 30 + dx, 40 + dy, colors::NORMAL_BACK_MARK);
        sheet = with_pixel(&sheet, 192 + 30 + dx, 40 + dy, colors::SHINY_BACK_MARK);
    }
    sheet
}

/// Replace one pixel of a sheet.
pub fn with_pixel(sheet: &PixelBuffer, x: u32, y: u32, color: Color) -> PixelBuffer {
    let mut pixels = sheet.pixels().to_vec();
    pixels[(y * sheet.width() + x) as usize] = color;
    PixelBuffer::new(sheet.width(), sheet.height(), pixels).unwrap()
}

/// Encode a buffer as an 8-bit RGB PNG.
pub fn encode_rgb_png(buffer: &PixelBuffer) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut bytes, buffer.width(), buffer.height());
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&buffer.to_rgb_bytes()).unwrap();
    }
    bytes
}

/// Write a buffer as an RGB PNG into `dir` and return its path.
pub fn write_png(dir: &Path, name: &str, buffer: &PixelBuffer) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, encode_rgb_png(buffer)).unwrap();
    path
}

/// Header fields and PLTE of a PNG file.
pub struct PngInfo {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    pub palette: Vec<u8>,
}

pub fn read_png_info(path: &Path) -> PngInfo {
    let bytes = std::fs::read(path).unwrap();
    let reader = png::Decoder::new(bytes.as_slice()).read_info().unwrap();
    let info = reader.info();
    PngInfo {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
        palette: info
            .palette
            .as_ref()
            .map(|p| p.to_vec())
            .unwrap_or_default(),
    }
}
