pub(crate) mod base;
pub(crate) mod constant;
pub(crate) mod intervals;
