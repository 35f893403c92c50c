pub(crate) mod interval;
