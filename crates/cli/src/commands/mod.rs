pub(crate) mod ask;
pub(crate) mod catalog;
pub(crate) mod serve;
