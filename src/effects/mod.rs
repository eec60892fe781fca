pub(crate) mod tint;
