#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc, clippy::must_use_candidate)]

// Публичные модули
pub mod api;      // высокий уровень: выбор окон, ScanOptions
pub mod core;     // общие типы (PixelBuffer, ScanWindow и др.)
pub mod prelude;  // удобные re-export'ы

pub mod scanline; // ядро: окно из двух строк -> run-length паттерн
pub mod source;   // адаптер источников (PNM-файл, сырые пиксели)
pub mod synth;    // синтетическая генерация полос

// Реэкспорт базовых типов в корень
pub use crate::core::types::{
    Padding, PixelBuffer, PixelView, RunLengthResult, ScanError, ScanWindow,
};
pub use crate::source::{ImageSource, SourceError};

pub use crate::api::{scan_middle, scan_rows, ScanOptions};

/// One-shot: декодировать конкретное окно буфера.
/// Тонкая обёртка над [`scanline::decode`] для владельческого буфера.
#[inline]
pub fn scan(buf: &PixelBuffer, window: ScanWindow) -> Result<RunLengthResult, ScanError> {
    scanline::decode(buf.as_view(), window)
}
