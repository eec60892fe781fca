use crate::{
    assets::raster::{Raster, Rgba32F},
    foundation::{
        core::NormColor,
        error::{ColorizeError, ColorizeResult},
    },
};

/// A mask and the color it tints with.
///
/// Each mask channel weights the matching image channel: a gray mask weights R, G and B alike and
/// its alpha channel weights the image alpha.
#[derive(Clone, Debug, PartialEq)]
pub struct TintLayer {
    pub mask: Raster,
    pub color: NormColor,
}

impl TintLayer {
    pub fn new(mask: Raster, color: impl Into<NormColor>) -> Self {
        Self {
            mask,
            color: color.into(),
        }
    }
}

/// Multiplicative tint of one pixel: `px * (1 - w) + px * w * color`, per channel.
///
/// This never moves a channel toward `color` on its own; at full weight the result is
/// `px * color`, and a zero channel stays zero.
pub fn tint(px: Rgba32F, weight: Rgba32F, color: NormColor) -> Rgba32F {
    let c = color.channels();
    let mut out = [0.0f32; 4];
    for i in 0..4 {
        out[i] = px[i] * (1.0 - weight[i]) + px[i] * weight[i] * c[i];
    }
    out
}

/// Apply one mask/color layer to `image`.
pub fn tint_in_place(image: &mut Raster, mask: &Raster, color: NormColor) -> ColorizeResult<()> {
    check_layer(image, mask)?;
    apply(image, mask, color);
    Ok(())
}

/// Apply `layers` to `base` in order, each on top of the result of the previous ones.
///
/// Every layer's extent and mask range are checked before any pixel is touched, so one bad mask
/// fails the whole call. No layers returns `base` unchanged.
pub fn composite(mut base: Raster, layers: &[TintLayer]) -> ColorizeResult<Raster> {
    base.ensure_unit_range()?;
    for layer in layers {
        check_layer(&base, &layer.mask)?;
    }
    for layer in layers {
        apply(&mut base, &layer.mask, layer.color);
    }
    // `px * (1 - w) + px * w` can land one ulp above `px`.
    base.clamp_to_unit();
    Ok(base)
}

fn apply(image: &mut Raster, mask: &Raster, color: NormColor) {
    for (px, w) in image.pixels_mut().iter_mut().zip(mask.pixels()) {
        *px = tint(*px, *w, color);
    }
}

fn check_layer(base: &Raster, mask: &Raster) -> ColorizeResult<()> {
    if base.extent() != mask.extent() {
        return Err(ColorizeError::DimensionMismatch {
            base: base.extent(),
            mask: mask.extent(),
        });
    }
    mask.ensure_unit_range()
}

#[cfg(test)]
#[path = "../../tests/unit/effects/tint.rs"]
mod tests;
