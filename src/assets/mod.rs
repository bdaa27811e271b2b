//! Asset decoding and the memoizing asset library.

pub mod decode;
pub mod store;
