use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::foundation::{
    core::Color,
    error::{ColorizeError, ColorizeResult},
};

/// File extension appended to every stem named in a manifest.
pub const IMAGE_EXTENSION: &str = "png";

/// One tint layer: a mask image stem and the color applied under it.
///
/// Serialized as a two-element array, `["mask_stem", [r, g, b(, a)]]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, Color)")]
pub struct LayerSpec {
    pub mask: String,
    pub color: Color,
}

impl From<(String, Color)> for LayerSpec {
    fn from((mask, color): (String, Color)) -> Self {
        Self { mask, color }
    }
}

impl LayerSpec {
    pub fn mask_path(&self, root: &Path) -> PathBuf {
        stem_path(root, &self.mask)
    }
}

/// One manifest entry: recolor `file` with `colors`, in order, and write the result as `id`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RecolorJob {
    pub id: String,
    pub file: String,
    pub colors: Vec<LayerSpec>,
}

impl RecolorJob {
    pub fn base_path(&self, root: &Path) -> PathBuf {
        stem_path(root, &self.file)
    }

    pub fn output_path(&self, output_dir: &Path) -> PathBuf {
        stem_path(output_dir, &self.id)
    }

    fn validate(&self) -> ColorizeResult<()> {
        if self.id.is_empty() {
            return Err(ColorizeError::validation("job id must not be empty"));
        }
        if self.file.is_empty() {
            return Err(ColorizeError::validation(format!(
                "job '{}': file must not be empty",
                self.id
            )));
        }
        if let Some(i) = self.colors.iter().position(|l| l.mask.is_empty()) {
            return Err(ColorizeError::validation(format!(
                "job '{}': layer {i} has an empty mask name",
                self.id
            )));
        }
        Ok(())
    }
}

/// Ordered list of recolor jobs.
///
/// The JSON document is either a single job object or an array of them; a single object is
/// read as a one-element list.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Manifest {
    jobs: Vec<RecolorJob>,
}

impl Manifest {
    pub fn from_json_str(json: &str) -> ColorizeResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| ColorizeError::validation(e.to_string()))?;
        let jobs = match value {
            serde_json::Value::Array(_) => Vec::<RecolorJob>::deserialize(value),
            other => RecolorJob::deserialize(other).map(|job| vec![job]),
        }
        .map_err(|e| ColorizeError::validation(e.to_string()))?;

        for job in &jobs {
            job.validate()?;
        }
        Ok(Self { jobs })
    }

    pub fn jobs(&self) -> &[RecolorJob] {
        &self.jobs
    }

    pub fn into_jobs(self) -> Vec<RecolorJob> {
        self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}

/// Read and parse the manifest at `path`. File-existence of referenced images is not checked.
pub fn read_manifest(path: &Path) -> ColorizeResult<Manifest> {
    let json = std::fs::read_to_string(path).map_err(|e| ColorizeError::manifest(path, e))?;
    Manifest::from_json_str(&json).map_err(|e| match e {
        ColorizeError::Validation(reason) => ColorizeError::manifest(path, reason),
        other => other,
    })
}

fn stem_path(dir: &Path, stem: &str) -> PathBuf {
    dir.join(format!("{stem}.{IMAGE_EXTENSION}"))
}

#[cfg(test)]
#[path = "../../tests/unit/composition/manifest.rs"]
mod tests;
