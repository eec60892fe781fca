use crate::foundation::core::Extent;
use crate::foundation::error::{ColorizeError, ColorizeResult};

/// One straight-alpha sRGB pixel, channels in `[0.0, 1.0]`.
pub type Rgba32F = [f32; 4];

/// A fully decoded image: straight-alpha RGBA, `f32` per channel, sRGB.
///
/// Pixels are tightly packed, row-major. Every raster the loader returns has an alpha channel and
/// channel values in `[0.0, 1.0]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgba32F>,
}

impl Raster {
    pub fn new(width: u32, height: u32, pixels: Vec<Rgba32F>) -> ColorizeResult<Self> {
        let expected = Extent::new(width, height)
            .pixel_count()
            .ok_or_else(|| ColorizeError::validation("raster size overflow"))?;
        if pixels.len() != expected {
            return Err(ColorizeError::validation(format!(
                "raster {width}x{height} expects {expected} pixels, got {}",
                pixels.len()
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// A raster with every pixel set to `px`.
    pub fn filled(width: u32, height: u32, px: Rgba32F) -> ColorizeResult<Self> {
        let n = Extent::new(width, height)
            .pixel_count()
            .ok_or_else(|| ColorizeError::validation("raster size overflow"))?;
        Self::new(width, height, vec![px; n])
    }

    /// Build from tightly packed RGBA `f32` samples (4 per pixel).
    pub fn from_interleaved(width: u32, height: u32, samples: &[f32]) -> ColorizeResult<Self> {
        if !samples.len().is_multiple_of(4) {
            return Err(ColorizeError::validation(
                "interleaved rgba samples must come in groups of 4",
            ));
        }
        let pixels = samples
            .chunks_exact(4)
            .map(|c| [c[0], c[1], c[2], c[3]])
            .collect();
        Self::new(width, height, pixels)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn extent(&self) -> Extent {
        Extent::new(self.width, self.height)
    }

    pub fn pixels(&self) -> &[Rgba32F] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Rgba32F] {
        &mut self.pixels
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba32F> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let idx = (y as usize) * (self.width as usize) + (x as usize);
        self.pixels.get(idx).copied()
    }

    /// Fails unless every channel of every pixel is a finite value in `[0.0, 1.0]`.
    pub fn ensure_unit_range(&self) -> ColorizeResult<()> {
        for (i, px) in self.pixels.iter().enumerate() {
            if let Some(v) = px.iter().find(|v| !(0.0..=1.0).contains(*v)) {
                let w = self.width.max(1) as usize;
                return Err(ColorizeError::validation(format!(
                    "channel value {v} at ({}, {}) is outside [0, 1]",
                    i % w,
                    i / w
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn clamp_to_unit(&mut self) {
        for px in &mut self.pixels {
            for c in px.iter_mut() {
                *c = if c.is_nan() { 0.0 } else { c.clamp(0.0, 1.0) };
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/raster.rs"]
mod tests;
