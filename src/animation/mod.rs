pub(crate) mod ease;
pub(crate) mod morph;
pub(crate) mod shape;
