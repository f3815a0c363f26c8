pub(crate) mod palette;
