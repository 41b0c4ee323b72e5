//! PNG decode to pixel buffers and indexed PNG encode.

use palette_align::{Color, IndexedImage, Palette, PixelBuffer, HARDWARE_PALETTE_SIZE};
use std::io::Cursor;

use crate::error::AppError;

/// Decode a PNG into an RGB pixel buffer.
///
/// Palette and low-bit-depth images are expanded and 16-bit samples
/// stripped. Grayscale is replicated to RGB; alpha is dropped.
pub fn decode_png(bytes: &[u8]) -> Result<PixelBuffer, AppError> {
    let mut decoder = png::Decoder::new(bytes);
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder
        .read_info()
        .map_err(|e| AppError::PngDecode(e.to_string()))?;

    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| AppError::PngDecode(e.to_string()))?;
    let data = &buf[..frame.buffer_size()];

    let samples = match frame.color_type {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => return Err(AppError::UnsupportedColorType(format!("{other:?}"))),
    };

    let row_len = frame.line_size;
    let width = frame.width as usize;
    let mut rgb = Vec::with_capacity(width * frame.height as usize * 3);
    for row in data.chunks(row_len) {
        for px in row[..width * samples].chunks_exact(samples) {
            match samples {
                1 | 2 => rgb.extend_from_slice(&[px[0], px[0], px[0]]),
                _ => rgb.extend_from_slice(&px[..3]),
            }
        }
    }

    tracing::debug!(
        width = frame.width,
        height = frame.height,
        color_type = ?frame.color_type,
        "Decoded PNG"
    );

    Ok(PixelBuffer::from_rgb_bytes(frame.width, frame.height, &rgb)?)
}

/// PLTE entries of an indexed PNG; `None` for other color types.
pub fn decode_plte(bytes: &[u8]) -> Result<Option<Vec<Color>>, AppError> {
    let reader = png::Decoder::new(bytes)
        .read_info()
        .map_err(|e| AppError::PngDecode(e.to_string()))?;
    let info = reader.info();
    if info.color_type != png::ColorType::Indexed {
        return Ok(None);
    }
    Ok(info.palette.as_ref().map(|plte| {
        plte.chunks_exact(3)
            .map(|rgb| Color::new(rgb[0], rgb[1], rgb[2]))
            .collect()
    }))
}

/// Read and decode a PNG file.
pub fn read_png(path: &std::path::Path) -> Result<PixelBuffer, AppError> {
    let bytes = std::fs::read(path)?;
    decode_png(&bytes)
}

/// Encode a sprite view as a 4-bit indexed PNG with a 16-entry PLTE.
///
/// Slots beyond the palette's length are filled with black so every written
/// sprite carries a full hardware palette.
pub fn encode_sprite(image: &IndexedImage) -> Result<Vec<u8>, AppError> {
    let plte = plte_bytes(&image.palette().padded(HARDWARE_PALETTE_SIZE));
    encode_png(
        image.width(),
        image.height(),
        png::ColorType::Indexed,
        png::BitDepth::Four,
        Some(&plte),
        &image.packed(4),
    )
}

/// Encode a diff image at 8 bits per pixel, palette in first-seen order.
///
/// Falls back to truecolor if the buffer has more colors than an 8-bit
/// palette holds.
pub fn encode_diff(buffer: &PixelBuffer) -> Result<Vec<u8>, AppError> {
    let palette = Palette::extract(buffer);
    if palette.len() > 256 {
        tracing::debug!(colors = palette.len(), "Diff has too many colors, writing RGB");
        return encode_png(
            buffer.width(),
            buffer.height(),
            png::ColorType::Rgb,
            png::BitDepth::Eight,
            None,
            &buffer.to_rgb_bytes(),
        );
    }

    let image = IndexedImage::from_buffer(buffer, &palette)?;
    let plte = plte_bytes(palette.colors());
    encode_png(
        image.width(),
        image.height(),
        png::ColorType::Indexed,
        png::BitDepth::Eight,
        Some(&plte),
        image.indices(),
    )
}

fn plte_bytes(colors: &[Color]) -> Vec<u8> {
    colors.iter().flat_map(|c| c.to_bytes()).collect()
}

/// Encode packed pixel data as a PNG.
fn encode_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    plte: Option<&[u8]>,
    packed: &[u8],
) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        encoder.set_compression(png::Compression::Default);
        encoder.set_filter(png::FilterType::NoFilter);
        if let Some(plte) = plte {
            encoder.set_palette(plte);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(packed)
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
