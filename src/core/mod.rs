// src/core/mod.rs

pub mod types;

pub use types::{Padding, PixelBuffer, PixelView, RunLengthResult, ScanError, ScanWindow};
