//! Text shaping seam, straight-text layout, and curved-text fitting.

pub mod curved;
pub mod layout;
pub mod shaper;
