// src/prelude.rs
//
// Удобные re-export'ы для `use barscan::prelude::*;`.

pub use crate::api::{scan_middle, scan_rows, ScanOptions};
pub use crate::core::types::{
    Padding, PixelBuffer, PixelView, RunLengthResult, ScanError, ScanWindow,
};
pub use crate::scanline::decode;
pub use crate::source::{ImageSource, SourceError};
