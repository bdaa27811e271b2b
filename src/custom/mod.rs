//! Named custom drawing handlers and their registry.

pub mod registry;
pub mod watermark;
