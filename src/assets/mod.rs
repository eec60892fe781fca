pub(crate) mod codec;
pub(crate) mod color_profile;
pub(crate) mod decode;
pub(crate) mod encode;
pub(crate) mod raster;
