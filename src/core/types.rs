// src/core/types.rs
//
// Общие типы, независимые от алгоритма сканирования.

use std::fmt;

/// «Владельческий» пиксельный буфер — результат работы адаптера
/// источников ([`crate::source`]).
///
/// Буфер `data` — построчно (row-major), по `channels` байт на пиксель
/// (interleaved: RGBA → 4, RGB → 3, серый → 1).
/// Инвариант: `data.len() >= width * height * channels`.
/// После создания буфер не мутируется — декодер работает на собственной
/// рабочей копии яркостей.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PixelBuffer {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl PixelBuffer {
    #[inline]
    pub fn new(data: Vec<u8>, width: usize, height: usize, channels: usize) -> Self {
        Self { data, width, height, channels }
    }

    /// RGBA, 4 байта на пиксель.
    #[inline]
    pub fn from_rgba(data: Vec<u8>, width: usize, height: usize) -> Self {
        Self::new(data, width, height, 4)
    }

    /// RGB, 3 байта на пиксель.
    #[inline]
    pub fn from_rgb(data: Vec<u8>, width: usize, height: usize) -> Self {
        Self::new(data, width, height, 3)
    }

    /// Градации серого, 1 байт на пиксель.
    #[inline]
    pub fn from_gray(data: Vec<u8>, width: usize, height: usize) -> Self {
        Self::new(data, width, height, 1)
    }

    /// Байт на одну строку изображения.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width * self.channels
    }

    #[inline]
    pub fn as_view(&self) -> PixelView<'_> {
        PixelView {
            data: &self.data,
            width: self.width,
            height: self.height,
            channels: self.channels,
        }
    }
}

/// Заимствованное представление пиксельного буфера.
/// Удобно, когда данные уже лежат у вызывающего (FFI, mmap и т.п.).
#[derive(Clone, Copy, Debug)]
pub struct PixelView<'a> {
    pub data: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl<'a> PixelView<'a> {
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width * self.channels
    }
}

/// Позволяем `.into()` из PixelView в PixelBuffer (копия буфера).
impl<'a> From<PixelView<'a>> for PixelBuffer {
    #[inline]
    fn from(v: PixelView<'a>) -> Self {
        Self {
            data: v.data.to_vec(),
            width: v.width,
            height: v.height,
            channels: v.channels,
        }
    }
}

/// Окно сканирования: байтовый диапазон ровно двух соседних строк.
/// Инвариант: `start` выровнен на границу строки,
/// `end - start == 2 * width * channels`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ScanWindow {
    pub start: usize,
    pub end: usize,
}

impl ScanWindow {
    /// Окно на строки `y` и `y + 1`.
    #[inline]
    pub fn rows(buf: &PixelBuffer, y: usize) -> Self {
        let rb = buf.row_bytes();
        let start = y * rb;
        Self { start, end: start + 2 * rb }
    }

    /// Окно на две средние строки — вариант по умолчанию для 1D-скана.
    #[inline]
    pub fn middle(buf: &PixelBuffer) -> Self {
        Self::rows(buf, buf.height.saturating_sub(2) / 2)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Флаги «нет тихой зоны»: `true`, если крайний столбец окна
/// классифицирован как тёмный (скан начинается/кончается внутри бара).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Padding {
    pub left: bool,
    pub right: bool,
}

/// Результат сканирования окна: чередующиеся ширины тёмных/светлых
/// полос и флаги тихих зон. Первый элемент `lines` всегда считается
/// от нулевого столбца; его цвет вызывающий восстанавливает сам,
/// чередуясь от цвета первого столбца.
///
/// Гарантии: `lines` суммируется ровно в `width`, не пуст,
/// нулевых ширин нет.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RunLengthResult {
    pub lines: Vec<usize>,
    pub padding: Padding,
}

/// Ошибки сканирования.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScanError {
    /// Окно не соответствует ровно двум полным строкам буфера.
    InvalidWindow {
        /// Ожидаемая длина окна в байтах (`2 * width * channels`).
        expected: usize,
        /// Фактическая длина `end - start`.
        got: usize,
    },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidWindow { expected, got } => write!(
                f,
                "окно сканирования должно покрывать ровно две строки: ожидалось {expected} байт, получено {got}"
            ),
        }
    }
}

impl std::error::Error for ScanError {}
