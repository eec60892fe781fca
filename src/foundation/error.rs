use std::path::PathBuf;

use crate::foundation::core::Extent;

/// Convenience result type used across the crate.
pub type ColorizeResult<T> = Result<T, ColorizeError>;

/// Every way a load, composite, save or batch can fail.
#[derive(thiserror::Error, Debug)]
pub enum ColorizeError {
    /// Manifest file unreadable or malformed.
    #[error("manifest error: {}: {reason}", .path.display())]
    Manifest { path: PathBuf, reason: String },

    /// Image file missing or not decodable.
    #[error("load error: cannot load {}: {reason}", .path.display())]
    Load { path: PathBuf, reason: String },

    /// Output image could not be encoded or written.
    #[error("save error: cannot write {}: {reason}", .path.display())]
    Save { path: PathBuf, reason: String },

    /// A mask's extent differs from its base.
    #[error("dimension mismatch: base is {base}, mask is {mask}")]
    DimensionMismatch { base: Extent, mask: Extent },

    /// Embedded color profile not applied while profiles are strict.
    #[error(transparent)]
    ColorProfile(#[from] ColorProfileWarning),

    /// Invalid user-provided data or settings.
    #[error("validation error: {0}")]
    Validation(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ColorizeError {
    /// Build a [`ColorizeError::Manifest`] value.
    pub fn manifest(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Manifest {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`ColorizeError::Load`] value.
    pub fn load(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`ColorizeError::Save`] value.
    pub fn save(path: impl Into<PathBuf>, reason: impl ToString) -> Self {
        Self::Save {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Build a [`ColorizeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}

/// Non-fatal failure to apply an embedded ICC profile.
///
/// The loader keeps the untransformed raster and hands this back next to it; see
/// [`crate::LoadedRaster`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("color profile warning: {}: {reason}", .path.display())]
pub struct ColorProfileWarning {
    pub path: PathBuf,
    pub reason: String,
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
