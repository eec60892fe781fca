use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::{
    assets::{
        codec::{CodecKind, CodecSettings, ImageCodec, LoadedRaster, create_codec},
        raster::Raster,
    },
    composition::manifest::{RecolorJob, read_manifest},
    effects::tint::{TintLayer, composite},
    foundation::error::ColorizeResult,
};

/// Manifest file name looked up by [`run_in_dir`].
pub const MANIFEST_FILE_NAME: &str = "test.col";
/// Output directory name created by [`run_in_dir`].
pub const OUTPUT_DIR_NAME: &str = "autocolor";

/// Batch configuration.
#[derive(Clone, Debug, Default)]
pub struct BatchOpts {
    /// Codec backend used for every load and save.
    pub codec: CodecKind,
    /// Settings handed to the codec factory.
    pub codec_settings: CodecSettings,
    /// Treat an embedded color profile that cannot be applied as a job failure.
    pub strict_color_profiles: bool,
}

/// What a finished batch wrote.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    /// Output files, in manifest order.
    pub outputs: Vec<PathBuf>,
    /// Inputs whose embedded color profile was skipped.
    pub color_profile_warnings: usize,
}

/// Run every job in `manifest_path` with default options, writing into `output_dir`.
pub fn run(manifest_path: &Path, output_dir: &Path) -> ColorizeResult<BatchReport> {
    run_with(manifest_path, output_dir, &BatchOpts::default())
}

/// Run the batch rooted at `dir`: reads `dir/test.col`, writes into `dir/autocolor/`.
pub fn run_in_dir(dir: &Path, opts: &BatchOpts) -> ColorizeResult<BatchReport> {
    run_with(
        &dir.join(MANIFEST_FILE_NAME),
        &dir.join(OUTPUT_DIR_NAME),
        opts,
    )
}

/// Run every job in `manifest_path`, in order, writing `<output_dir>/<id>.png` for each.
///
/// Relative `manifest_path` and `output_dir` resolve against the codec search path, like every
/// image path. Image stems are resolved relative to the manifest's directory. The first failing
/// job stops the batch; outputs of jobs that already finished stay on disk.
#[tracing::instrument(skip(opts))]
pub fn run_with(
    manifest_path: &Path,
    output_dir: &Path,
    opts: &BatchOpts,
) -> ColorizeResult<BatchReport> {
    let settings = opts.codec_settings.validated()?;
    let manifest_path = settings.resolve(manifest_path);
    let output_dir = settings.resolve(output_dir);

    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("create output dir '{}'", output_dir.display()))?;

    let manifest = read_manifest(&manifest_path)?;
    let assets_root = manifest_path.parent().unwrap_or_else(|| Path::new("."));
    let codec = create_codec(opts.codec, &settings)?;

    let mut report = BatchReport::default();
    for job in manifest.jobs() {
        let done = run_job(
            job,
            assets_root,
            &output_dir,
            codec.as_ref(),
            opts.strict_color_profiles,
        )?;
        report.color_profile_warnings += done.color_profile_warnings;
        report.outputs.push(done.output);
    }

    tracing::info!(
        jobs = report.outputs.len(),
        color_profile_warnings = report.color_profile_warnings,
        "batch finished"
    );
    Ok(report)
}

/// Result of a single job.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JobOutput {
    pub output: PathBuf,
    pub color_profile_warnings: usize,
}

/// Load, composite and save one job. Nothing is written unless every input loads and fits.
#[tracing::instrument(skip_all, fields(id = %job.id))]
pub fn run_job(
    job: &RecolorJob,
    assets_root: &Path,
    output_dir: &Path,
    codec: &dyn ImageCodec,
    strict_color_profiles: bool,
) -> ColorizeResult<JobOutput> {
    let mut warnings = 0usize;
    let mut accept = |loaded: LoadedRaster| -> ColorizeResult<Raster> {
        if loaded.warning.is_some() {
            warnings += 1;
        }
        if strict_color_profiles {
            loaded.into_strict()
        } else {
            Ok(loaded.into_raster())
        }
    };

    let base = accept(codec.load(&job.base_path(assets_root))?)?;
    let mut layers = Vec::with_capacity(job.colors.len());
    for spec in &job.colors {
        let mask = accept(codec.load(&spec.mask_path(assets_root))?)?;
        layers.push(TintLayer::new(mask, spec.color));
    }

    let image = composite(base, &layers)?;

    let output = job.output_path(output_dir);
    codec.save(&image, &output)?;
    tracing::info!(output = %output.display(), layers = job.colors.len(), "wrote recolored sprite");

    Ok(JobOutput {
        output,
        color_profile_warnings: warnings,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/batch.rs"]
mod tests;
