//! Синтетическая генерация полосатых картинок для демо, тестов и бенчей.
//!
//! Паттерн задаётся ширинами полос в модулях; первая полоса — белая
//! (тихая зона), дальше цвета чередуются.

use crate::core::types::PixelBuffer;

/// Одна строка пикселей по ширинам полос. `unit` — пикселей на модуль,
/// `channels` — байт на пиксель (цветовые каналы заполняются яркостью,
/// четвёртый и далее — 255, как альфа).
pub fn synthesize_row(modules: &[usize], unit: usize, channels: usize) -> Vec<u8> {
    let mut pix = Vec::new();
    let mut black = false;
    for &m in modules {
        let val = if black { 0u8 } else { 255u8 };
        for _ in 0..m * unit {
            for c in 0..channels {
                pix.push(if c < 3 { val } else { 255 });
            }
        }
        black = !black;
    }
    pix
}

/// Готовый буфер высотой `height`: строка из [`synthesize_row`],
/// продублированная по вертикали.
pub fn synthesize_image(
    modules: &[usize],
    unit: usize,
    channels: usize,
    height: usize,
) -> PixelBuffer {
    let row = synthesize_row(modules, unit, channels);
    let width = row.len() / channels.max(1);
    let mut data = Vec::with_capacity(row.len() * height);
    for _ in 0..height {
        data.extend_from_slice(&row);
    }
    PixelBuffer::new(data, width, height, channels)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_alternates_from_white() {
        // 1 белый, 2 чёрных, 1 белый модуль; unit=1, RGB.
        let row = synthesize_row(&[1, 2, 1], 1, 3);
        assert_eq!(row.len(), 4 * 3);
        assert_eq!(&row[..3], &[255, 255, 255]);
        assert_eq!(&row[3..6], &[0, 0, 0]);
        assert_eq!(&row[6..9], &[0, 0, 0]);
        assert_eq!(&row[9..], &[255, 255, 255]);
    }

    #[test]
    fn rgba_gets_opaque_alpha() {
        let row = synthesize_row(&[1], 1, 4);
        assert_eq!(row, vec![255, 255, 255, 255]);
        let dark = synthesize_row(&[0, 1], 1, 4);
        assert_eq!(dark, vec![0, 0, 0, 255]);
    }

    #[test]
    fn image_stacks_rows() {
        let img = synthesize_image(&[2, 1], 3, 1, 4);
        assert_eq!((img.width, img.height, img.channels), (9, 4, 1));
        assert_eq!(img.data.len(), 9 * 4);
        assert_eq!(&img.data[..9], &img.data[9..18]);
    }
}
