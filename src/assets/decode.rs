use std::{io::Cursor, path::Path};

use image::{
    ColorType, DynamicImage, ImageDecoder, ImageFormat,
    codecs::png::PngDecoder,
    error::{DecodingError, ImageFormatHint},
};

use crate::{
    assets::raster::Raster,
    foundation::error::{ColorizeError, ColorizeResult},
};

/// Color interpretation of the decoded source, before normalization.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SourceSpace {
    /// Already RGB(A); no channel conversion needed.
    Srgb,
    /// Grayscale (with or without alpha); expanded to sRGB by channel replication.
    Gray,
}

/// A PNG decoded and normalized into the reference representation, plus what the loader still
/// needs to finish color management.
#[derive(Clone, Debug)]
pub struct DecodedPng {
    pub raster: Raster,
    /// Embedded `iCCP` payload, if any. Not yet applied to `raster`.
    pub icc_profile: Option<Vec<u8>>,
    pub source_space: SourceSpace,
    /// Whether the source carried its own alpha channel.
    pub source_had_alpha: bool,
}

/// Decode PNG bytes to straight-alpha sRGB `f32` RGBA.
///
/// Grayscale sources are expanded to RGB, 16-bit sources are scaled to `[0, 1]`, and sources
/// without alpha get an opaque alpha channel. The embedded ICC profile is returned, not applied.
pub fn decode_png(bytes: &[u8]) -> image::ImageResult<DecodedPng> {
    let mut decoder = PngDecoder::new(Cursor::new(bytes))?;
    let icc_profile = decoder.icc_profile()?;
    let color = decoder.color_type();
    let img = DynamicImage::from_decoder(decoder)?;
    let (width, height) = (img.width(), img.height());

    let source_space = source_space(color);
    if source_space != SourceSpace::Srgb {
        tracing::debug!(?color, "converting source to srgb");
    }

    let source_had_alpha = color.has_alpha();
    let pixels = if source_had_alpha {
        img.to_rgba32f()
            .into_raw()
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect()
    } else {
        tracing::debug!(?color, "adding opaque alpha channel");
        add_opaque_alpha(&img.to_rgb32f().into_raw())
    };

    let mut raster = Raster::new(width, height, pixels).map_err(|e| {
        image::ImageError::Decoding(DecodingError::new(
            ImageFormatHint::Exact(ImageFormat::Png),
            e,
        ))
    })?;
    raster.clamp_to_unit();

    Ok(DecodedPng {
        raster,
        icc_profile,
        source_space,
        source_had_alpha,
    })
}

/// Read `path` fully and decode it; every failure is a load error naming `path`.
pub fn read_png(path: &Path) -> ColorizeResult<DecodedPng> {
    let bytes = std::fs::read(path).map_err(|e| ColorizeError::load(path, e))?;
    decode_png(&bytes).map_err(|e| ColorizeError::load(path, e))
}

fn source_space(color: ColorType) -> SourceSpace {
    match color {
        ColorType::L8 | ColorType::La8 | ColorType::L16 | ColorType::La16 => SourceSpace::Gray,
        _ => SourceSpace::Srgb,
    }
}

fn add_opaque_alpha(rgb: &[f32]) -> Vec<[f32; 4]> {
    rgb.chunks_exact(3)
        .map(|c| [c[0], c[1], c[2], 1.0])
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
