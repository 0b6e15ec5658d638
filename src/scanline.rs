//! Сканирование пары строк: из пикселей — в run-length паттерн.
//!
//! Алгоритм (три прохода, без мутации входного буфера):
//! 1) Градации серого `g = (R*3 + G*4 + B*2) / 9` по двум строкам окна
//!    в приватную рабочую копию + суммы по столбцам; суммы делим на 2 —
//!    получаем среднюю яркость столбца.
//! 2) Порог (pivot) по средним яркостям и классификация каждого столбца
//!    тёмный/светлый голосованием двух строк; заодно снимаем флаги
//!    тихих зон по крайним столбцам.
//! 3) Run-length кодирование бинарной строки.
//!
//! Внимание: скан min/max в проходе 2 — смещённый (см. комментарий
//! к `pivot` ниже). Это поведенческий контракт, а не настоящие min/max.

use crate::core::types::{Padding, PixelView, RunLengthResult, ScanError, ScanWindow};

/// Яркость пикселя по первым трём каналам; для буферов уже
/// более узких (серый, 1–2 канала) берём первый байт как есть.
#[inline]
fn luma(px: &[u8]) -> f32 {
    if px.len() >= 3 {
        (f32::from(px[0]) * 3.0 + f32::from(px[1]) * 4.0 + f32::from(px[2]) * 2.0) / 9.0
    } else {
        f32::from(px[0])
    }
}

/// Порог по средним яркостям столбцов.
///
/// Скан намеренно смещённый: `min` стартует с нуля и может только
/// уменьшаться (яркости неотрицательны, так что на практике остаётся 0),
/// а `max` — просто последнее значение, не уменьшившее `min`.
/// Воспроизводится дословно ради совместимости с потребителями,
/// завязанными на низкий pivot.
#[inline]
fn pivot(avg: &[f32]) -> f32 {
    let mut min = 0.0f32;
    let mut max = 0.0f32;
    for &s in avg {
        if s < min {
            min = s;
        } else {
            max = s;
        }
    }
    min + (max - min) / 2.0
}

/// Декодировать окно из двух строк в run-length паттерн.
///
/// Чистая функция: вход не мутируется, результат аллоцируется заново,
/// отдельные вызовы можно гнать параллельно на независимых буферах.
///
/// # Errors
///
/// [`ScanError::InvalidWindow`] — окно не покрывает ровно две полные
/// строки буфера (`end - start != 2 * width * channels` либо диапазон
/// выходит за пределы данных).
pub fn decode(view: PixelView<'_>, window: ScanWindow) -> Result<RunLengthResult, ScanError> {
    let w = view.width;
    let ch = view.channels;
    let expected = 2 * w * ch;
    let got = window.len();

    let err = ScanError::InvalidWindow { expected, got };
    if expected == 0 || got != expected {
        return Err(err);
    }
    let px = view.data.get(window.start..window.end).ok_or(err)?;

    // --- 1) Серый + суммы столбцов (рабочая копия, вход не трогаем)
    let mut gray = vec![0.0f32; 2 * w];
    let mut avg = vec![0.0f32; w];
    for row in 0..2 {
        for col in 0..w {
            let i = (row * w + col) * ch;
            let g = luma(&px[i..i + ch]);
            gray[row * w + col] = g;
            avg[col] += g;
        }
    }
    for s in &mut avg {
        *s /= 2.0;
    }

    // --- 2) Порог и голосование двух строк
    let p = pivot(&avg);
    let mut bmp = Vec::with_capacity(w);
    let mut padding = Padding::default();
    for col in 0..w {
        let mut above = 0u32;
        let mut value = 0.0f32;
        for row in 0..2 {
            value = gray[row * w + col];
            if value > p {
                above += 1;
            }
        }
        // Яркость выше pivot — фон; тёмный столбец — когда порог не взят
        // в большинстве строк. `value` после цикла — яркость второй строки:
        // флаги тихих зон снимаются именно по ней.
        let dark = above < 2;
        if col == 0 {
            padding.left = value <= p;
        }
        if col == w - 1 {
            padding.right = value <= p;
        }
        bmp.push(dark);
    }

    // --- 3) Run-length кодирование
    let lines = runs(&bmp);

    Ok(RunLengthResult { lines, padding })
}

/// Превратить бинарную строку в последовательность ширин полос
/// (run-lengths), начиная с нулевого столбца (как есть).
pub fn runs(bmp: &[bool]) -> Vec<usize> {
    if bmp.is_empty() {
        return Vec::new();
    }
    let mut v = Vec::new();
    let mut cur = bmp[0];
    let mut len = 1usize;
    for &b in &bmp[1..] {
        if b == cur {
            len += 1;
        } else {
            v.push(len);
            cur = b;
            len = 1;
        }
    }
    v.push(len);
    v
}
