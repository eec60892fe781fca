use std::path::Path;

use image::{
    ExtendedColorType, ImageEncoder,
    codecs::png::{CompressionType, FilterType, PngEncoder},
};

use crate::{
    assets::raster::Raster,
    foundation::error::{ColorizeError, ColorizeResult},
};

/// Fixed PNG output settings: maximum deflate effort and no per-row filtering.
///
/// Nothing but `IHDR`/`IDAT`/`IEND` is written, so no text, time or ICC metadata leaks into the
/// output and identical rasters encode to identical bytes.
pub const PNG_COMPRESSION: CompressionType = CompressionType::Best;
pub const PNG_FILTER: FilterType = FilterType::NoFilter;

/// Quantize one `[0, 1]` channel to 8 bits, rounding to nearest.
pub fn quantize_channel(v: f32) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// Encode to an 8-bit straight-alpha RGBA PNG held in memory.
pub fn encode_png(raster: &Raster) -> image::ImageResult<Vec<u8>> {
    let rgba8: Vec<u8> = raster
        .pixels()
        .iter()
        .flat_map(|px| px.map(quantize_channel))
        .collect();

    let mut out = Vec::new();
    PngEncoder::new_with_quality(&mut out, PNG_COMPRESSION, PNG_FILTER).write_image(
        &rgba8,
        raster.width(),
        raster.height(),
        ExtendedColorType::Rgba8,
    )?;
    Ok(out)
}

/// Encode and write `raster` to `path`, replacing any existing file.
pub fn write_png(raster: &Raster, path: &Path) -> ColorizeResult<()> {
    let bytes = encode_png(raster).map_err(|e| ColorizeError::save(path, e))?;
    std::fs::write(path, bytes).map_err(|e| ColorizeError::save(path, e))
}

#[cfg(test)]
#[path = "../../tests/unit/assets/encode.rs"]
mod tests;
