//! Canvas and the layer-composition pipeline.

pub mod canvas;
pub mod pipeline;
