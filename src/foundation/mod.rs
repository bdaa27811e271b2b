//! Shared primitives: geometry re-exports, colors, and the error type.

pub mod core;
pub mod error;
