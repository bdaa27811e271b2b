//! Card records and per-component input assembly.

pub mod data;
