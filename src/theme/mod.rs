//! Theme definition data model (consumed from JSON).

pub mod model;
