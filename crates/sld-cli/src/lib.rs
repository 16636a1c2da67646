//! CLI library components for `sld-classify`.

pub mod classify;
pub mod logging;
pub mod render;
