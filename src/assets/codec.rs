use std::path::{Path, PathBuf};

use crate::{
    assets::{color_profile, decode, encode, raster::Raster},
    foundation::error::{ColorProfileWarning, ColorizeError, ColorizeResult},
};

/// Reads rasters from storage and writes them back.
///
/// Implementations own every file handle they open; nothing outlives a single call.
pub trait ImageCodec {
    /// Decode `path` into a normalized sRGB RGBA raster.
    fn load(&self, path: &Path) -> ColorizeResult<LoadedRaster>;

    /// Encode `raster` to `path` with the codec's fixed output settings.
    fn save(&self, raster: &Raster, path: &Path) -> ColorizeResult<()>;
}

/// Available codec backends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CodecKind {
    /// PNG via the `image` crate, ICC handling via `lcms2`.
    #[default]
    Png,
}

/// Backend-agnostic codec configuration.
#[derive(Clone, Debug)]
pub struct CodecSettings {
    /// Directory that relative load/save paths are resolved against. `None` uses paths as given.
    pub search_path: Option<PathBuf>,
    /// Apply embedded ICC profiles on load.
    pub apply_icc_profiles: bool,
}

impl Default for CodecSettings {
    fn default() -> Self {
        Self {
            search_path: None,
            apply_icc_profiles: true,
        }
    }
}

impl CodecSettings {
    /// Check that `search_path` is an existing directory and make it absolute, so that resolving
    /// an already-resolved path is a no-op.
    pub fn validated(&self) -> ColorizeResult<Self> {
        let search_path = match &self.search_path {
            Some(dir) if !dir.is_dir() => {
                return Err(ColorizeError::validation(format!(
                    "codec search path '{}' is not a directory",
                    dir.display()
                )));
            }
            Some(dir) => Some(std::fs::canonicalize(dir).map_err(|e| {
                ColorizeError::validation(format!(
                    "codec search path '{}': {e}",
                    dir.display()
                ))
            })?),
            None => None,
        };
        Ok(Self {
            search_path,
            ..self.clone()
        })
    }

    /// Resolve `path` against `search_path`. Absolute paths, and every path when no search path
    /// is set, are returned unchanged.
    pub fn resolve(&self, path: &Path) -> PathBuf {
        match &self.search_path {
            Some(root) if path.is_relative() => root.join(path),
            _ => path.to_path_buf(),
        }
    }
}

/// Create a codec implementation.
pub fn create_codec(
    kind: CodecKind,
    settings: &CodecSettings,
) -> ColorizeResult<Box<dyn ImageCodec>> {
    let settings = settings.validated()?;
    match kind {
        CodecKind::Png => Ok(Box::new(PngCodec::new(settings))),
    }
}

/// Outcome of a load: the raster, plus a warning when its embedded color profile could not be
/// applied and the untransformed pixels were kept.
#[derive(Clone, Debug)]
#[must_use]
pub struct LoadedRaster {
    pub raster: Raster,
    pub warning: Option<ColorProfileWarning>,
}

impl LoadedRaster {
    /// Accept the raster, logging any profile warning.
    pub fn into_raster(self) -> Raster {
        if let Some(w) = &self.warning {
            tracing::warn!(path = %w.path.display(), reason = %w.reason, "color profile not applied");
        }
        self.raster
    }

    /// Accept the raster only if its profile (if any) was applied.
    pub fn into_strict(self) -> ColorizeResult<Raster> {
        match self.warning {
            Some(w) => Err(w.into()),
            None => Ok(self.raster),
        }
    }
}

/// The PNG codec.
#[derive(Clone, Debug, Default)]
pub struct PngCodec {
    settings: CodecSettings,
}

impl PngCodec {
    pub fn new(settings: CodecSettings) -> Self {
        Self { settings }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.settings.resolve(path)
    }
}

impl ImageCodec for PngCodec {
    fn load(&self, path: &Path) -> ColorizeResult<LoadedRaster> {
        let path = self.resolve(path);
        let decoded = decode::read_png(&path)?;
        let mut raster = decoded.raster;

        let warning = match decoded.icc_profile {
            Some(icc) if self.settings.apply_icc_profiles => {
                match color_profile::transform_to_srgb(&mut raster, &icc) {
                    Ok(()) => {
                        tracing::debug!(path = %path.display(), "applied embedded icc profile");
                        None
                    }
                    Err(e) => Some(ColorProfileWarning {
                        path: path.clone(),
                        reason: e.to_string(),
                    }),
                }
            }
            _ => None,
        };

        Ok(LoadedRaster { raster, warning })
    }

    fn save(&self, raster: &Raster, path: &Path) -> ColorizeResult<()> {
        encode::write_png(raster, &self.resolve(path))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/codec.rs"]
mod tests;
