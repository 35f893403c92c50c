pub(crate) mod base;
pub(crate) mod color;
pub(crate) mod polyline_outline;
