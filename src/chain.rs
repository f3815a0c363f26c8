pub(crate) mod manager;
pub(crate) mod snapshot;
pub(crate) mod track;
