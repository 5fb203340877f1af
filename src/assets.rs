//! Image file I/O: decoding and resampling inputs, encoding and writing outputs.

pub mod decode;
pub mod encode;
