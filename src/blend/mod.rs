//! Per-pixel blend math.

pub mod tint;
