pub(crate) mod config;
pub(crate) mod overlay;
pub(crate) mod request;
pub(crate) mod suggestion;
pub(crate) mod theme;
