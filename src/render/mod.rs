pub(crate) mod compositor;
pub(crate) mod overlay;
pub(crate) mod shape;
pub(crate) mod surface;
