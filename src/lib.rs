//! Batch sprite recoloring.
//!
//! A manifest lists jobs; each job names a base sprite and an ordered list of `(mask, color)`
//! layers. The pipeline per job is:
//!
//! 1. **Load**: decode base and masks to straight-alpha sRGB `f32` rasters (gray expanded to RGB,
//!    opaque alpha added, embedded ICC profile applied when possible)
//! 2. **Composite**: tint the base under each mask in turn, `I * (1 - w) + I * w * color`
//! 3. **Save**: encode a deterministic, metadata-free PNG named after the job id
//!
//! Jobs run sequentially and the first failure stops the batch.
#![forbid(unsafe_code)]

mod assets;
mod composition;
mod effects;
mod foundation;
mod render;

pub use assets::codec::{
    CodecKind, CodecSettings, ImageCodec, LoadedRaster, PngCodec, create_codec,
};
pub use assets::color_profile::transform_to_srgb;
pub use assets::decode::{DecodedPng, SourceSpace, decode_png, read_png};
pub use assets::encode::{PNG_COMPRESSION, PNG_FILTER, encode_png, quantize_channel, write_png};
pub use assets::raster::{Raster, Rgba32F};
pub use composition::manifest::{IMAGE_EXTENSION, LayerSpec, Manifest, RecolorJob, read_manifest};
pub use effects::tint::{TintLayer, composite, tint, tint_in_place};
pub use foundation::core::{Color, Extent, NormColor};
pub use foundation::error::{ColorProfileWarning, ColorizeError, ColorizeResult};
pub use render::batch::{
    BatchOpts, BatchReport, JobOutput, MANIFEST_FILE_NAME, OUTPUT_DIR_NAME, run, run_in_dir,
    run_job, run_with,
};
