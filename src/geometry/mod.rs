//! Curve geometry.

pub mod bezier;
