use lcms2::{Intent, PixelFormat, Profile, Transform};

use crate::assets::raster::{Raster, Rgba32F};

/// Transform `raster` from the embedded `icc` profile into sRGB (perceptual intent).
///
/// Alpha is carried through untouched. On error `raster` is left exactly as it was; the transform
/// is only built, never partially applied.
pub fn transform_to_srgb(raster: &mut Raster, icc: &[u8]) -> Result<(), lcms2::Error> {
    let src = Profile::new_icc(icc)?;
    let dst = Profile::new_srgb();
    let transform: Transform<Rgba32F, Rgba32F> = Transform::new(
        &src,
        PixelFormat::RGBA_FLT,
        &dst,
        PixelFormat::RGBA_FLT,
        Intent::Perceptual,
    )?;
    transform.transform_in_place(raster.pixels_mut());
    raster.clamp_to_unit();
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/color_profile.rs"]
mod tests;
