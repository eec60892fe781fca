use std::fmt;

use serde::Deserialize;

use crate::foundation::error::{ColorizeError, ColorizeResult};

/// Width and height of a raster, in pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Extent {
    pub width: u32,
    pub height: u32,
}

impl Extent {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Number of pixels, or `None` if it does not fit in `usize`.
    pub fn pixel_count(self) -> Option<usize> {
        (self.width as usize).checked_mul(self.height as usize)
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// A tint color as written in a manifest: straight (non-premultiplied) RGBA bytes.
///
/// Manifests spell colors as `[r, g, b]` or `[r, g, b, a]`; the three-component form is opaque.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    pub fn from_components(components: &[u8]) -> ColorizeResult<Self> {
        match *components {
            [r, g, b] => Ok(Self::rgb(r, g, b)),
            [r, g, b, a] => Ok(Self::rgba(r, g, b, a)),
            _ => Err(ColorizeError::validation(format!(
                "color must have 3 ([r,g,b]) or 4 ([r,g,b,a]) components, got {}",
                components.len()
            ))),
        }
    }

    /// Map every byte channel onto `[0.0, 1.0]` by dividing by 255.
    pub fn normalized(self) -> NormColor {
        fn unit(v: u8) -> f32 {
            f32::from(v) / 255.0
        }
        NormColor([unit(self.r), unit(self.g), unit(self.b), unit(self.a)])
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let components = Vec::<u8>::deserialize(deserializer)?;
        Self::from_components(&components).map_err(serde::de::Error::custom)
    }
}

/// RGBA color with every channel in `[0.0, 1.0]`.
///
/// Built either from a byte [`Color`], which always lands in range, or through the checked
/// [`NormColor::new`] for colors computed in float.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NormColor([f32; 4]);

impl NormColor {
    /// Reject NaN and channels outside `[0.0, 1.0]`.
    pub fn new(rgba: [f32; 4]) -> ColorizeResult<Self> {
        if let Some(bad) = rgba.iter().find(|c| !(0.0..=1.0).contains(*c)) {
            return Err(ColorizeError::validation(format!(
                "normalized color channel {bad} is outside [0, 1]"
            )));
        }
        Ok(Self(rgba))
    }

    pub fn channels(self) -> [f32; 4] {
        self.0
    }
}

impl From<Color> for NormColor {
    fn from(c: Color) -> Self {
        c.normalized()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
