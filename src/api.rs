// src/api.rs
//
// Верхнеуровневый слой над scanline::decode: выбор окон по высоте
// картинки. Сам декодер окна — в crate::scanline.

use crate::core::types::{PixelBuffer, RunLengthResult, ScanError, ScanWindow};
use crate::scanline;

/// Настройки сканирования по высоте.
#[derive(Clone, Debug)]
pub struct ScanOptions {
    /// Сколько двухстрочных окон брать (равномерно по высоте).
    /// 1 — только середина.
    pub scan_rows: usize,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self { scan_rows: 1 }
    }
}

/// Сканировать две средние строки — вариант по умолчанию.
///
/// # Errors
///
/// [`ScanError::InvalidWindow`], если в буфере меньше двух строк.
pub fn scan_middle(buf: &PixelBuffer) -> Result<RunLengthResult, ScanError> {
    scanline::decode(buf.as_view(), ScanWindow::middle(buf))
}

/// Сканировать несколько окон, равномерно распределённых по высоте.
/// Возвращает пары (верхняя строка окна, результат); буфера ниже двух
/// строк дают пустой список.
pub fn scan_rows(buf: &PixelBuffer, opts: &ScanOptions) -> Vec<(usize, RunLengthResult)> {
    if buf.height < 2 {
        return Vec::new();
    }
    let mut out = Vec::new();
    let top_max = buf.height - 2;
    let rows = opts.scan_rows.clamp(1, top_max + 1);
    for i in 0..rows {
        // равномерная выборка верхних строк окон по высоте
        let y = (i * top_max) / (rows - 1).max(1);
        if let Ok(res) = scanline::decode(buf.as_view(), ScanWindow::rows(buf, y)) {
            out.push((y, res));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synth::synthesize_image;

    #[test]
    fn scan_middle_finds_bars() {
        // тихая зона 4, бар 2, зазор 1, бар 1, тихая зона 4
        let img = synthesize_image(&[4, 2, 1, 1, 4], 1, 3, 8);
        let res = scan_middle(&img).unwrap();
        assert_eq!(res.lines, vec![4, 2, 1, 1, 4]);
        assert!(!res.padding.left);
        assert!(!res.padding.right);
    }

    #[test]
    fn scan_middle_needs_two_rows() {
        let img = synthesize_image(&[3], 1, 3, 1);
        assert!(scan_middle(&img).is_err());
    }

    #[test]
    fn scan_rows_samples_uniformly() {
        let img = synthesize_image(&[2, 2, 2], 1, 4, 10);
        let all = scan_rows(&img, &ScanOptions { scan_rows: 3 });
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].0, 0);
        assert_eq!(all[2].0, 8);
        for (_, res) in &all {
            assert_eq!(res.lines, vec![2, 2, 2]);
        }
    }

    #[test]
    fn scan_rows_on_short_image_is_empty() {
        let img = synthesize_image(&[5], 1, 1, 1);
        assert!(scan_rows(&img, &ScanOptions::default()).is_empty());
    }
}
