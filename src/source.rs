//! Адаптер источников изображений.
//!
//! Ядро сканера видит только готовый [`PixelBuffer`]; откуда взялись
//! пиксели — забота этого модуля. Вид источника задаётся явно
//! (закрытый набор вариантов), никакого «угадывания окружения»:
//! вызывающий сам говорит, путь это, URL или сырой пиксельный объект.
//!
//! Из файлов читаем бинарный PNM без зависимостей: P5 (серый, 1 канал)
//! и P6 (RGB, 3 канала), 8 бит, maxval=255.

use std::io::{self, Read};
use std::path::PathBuf;
use std::{fmt, fs};

use crate::core::types::PixelBuffer;

/// Источник изображения. Разрешается в [`PixelBuffer`] методом
/// [`ImageSource::resolve`]; ядро сканера эти варианты не видит.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ImageSource {
    /// Путь к PNM-файлу (P5/P6).
    Path(PathBuf),
    /// Сетевой адрес. Зарезервирован: крейт без сетевого стека,
    /// разрешение вернёт [`SourceError::UnsupportedSource`].
    Url(String),
    /// Готовый пиксельный объект от вызывающего.
    Raw(PixelBuffer),
}

/// Ошибки получения изображения. До ядра сканера они не доходят:
/// оно вызывается только с уже разрешённым буфером.
#[derive(Debug)]
pub enum SourceError {
    /// Вид источника не поддерживается этой сборкой.
    UnsupportedSource(String),
    /// Ошибка чтения файла.
    Io(io::Error),
    /// Файл прочитан, но это не корректный P5/P6.
    MalformedImage(String),
    /// Сырой объект не сходится сам с собой: буфер короче,
    /// чем `width * height * channels`, или размеры нулевые.
    MalformedPixels { expected: usize, got: usize },
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedSource(s) => write!(f, "источник не поддерживается: {s}"),
            Self::Io(e) => write!(f, "ошибка чтения: {e}"),
            Self::MalformedImage(s) => write!(f, "некорректный PNM: {s}"),
            Self::MalformedPixels { expected, got } => write!(
                f,
                "пиксельный объект не сходится: нужно минимум {expected} байт, есть {got}"
            ),
        }
    }
}

impl std::error::Error for SourceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for SourceError {
    #[inline]
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

impl ImageSource {
    /// Разрешить источник в пиксельный буфер.
    ///
    /// # Errors
    ///
    /// См. [`SourceError`]: неподдерживаемый вид источника, ошибка
    /// ввода-вывода, битый PNM либо несогласованный сырой объект.
    pub fn resolve(self) -> Result<PixelBuffer, SourceError> {
        match self {
            Self::Path(p) => {
                let mut file = fs::File::open(p)?;
                let mut buf = Vec::new();
                file.read_to_end(&mut buf)?;
                read_pnm(&buf)
            }
            Self::Url(u) => Err(SourceError::UnsupportedSource(format!(
                "сетевые источники недоступны без HTTP-стека ({u})"
            ))),
            Self::Raw(px) => validate_raw(px),
        }
    }
}

/// Проверка формы сырого пиксельного объекта (аналог «present but
/// missing data/width/height» из контракта адаптера).
fn validate_raw(px: PixelBuffer) -> Result<PixelBuffer, SourceError> {
    // Размеры приходят извне: произведение считаем только checked-арифметикой.
    let expected = match px
        .width
        .checked_mul(px.height)
        .and_then(|n| n.checked_mul(px.channels))
    {
        Some(n) => n,
        None => {
            return Err(SourceError::MalformedPixels {
                expected: usize::MAX,
                got: px.data.len(),
            })
        }
    };
    if expected == 0 || px.data.len() < expected {
        return Err(SourceError::MalformedPixels { expected, got: px.data.len() });
    }
    Ok(px)
}

/// Минимальный парсер бинарного PNM: P5 → 1 канал, P6 → 3 канала.
pub fn read_pnm(buf: &[u8]) -> Result<PixelBuffer, SourceError> {
    let mut i = 0usize;

    fn read_token(buf: &[u8], i: &mut usize) -> Option<String> {
        while *i < buf.len() {
            let c = buf[*i];
            if c == b'#' {
                while *i < buf.len() && buf[*i] != b'\n' {
                    *i += 1;
                }
            } else if c.is_ascii_whitespace() {
                *i += 1;
            } else {
                break;
            }
        }
        if *i >= buf.len() {
            return None;
        }
        let start = *i;
        while *i < buf.len() && !buf[*i].is_ascii_whitespace() {
            *i += 1;
        }
        Some(String::from_utf8_lossy(&buf[start..*i]).to_string())
    }

    fn read_dim(buf: &[u8], i: &mut usize, what: &str) -> Result<usize, SourceError> {
        read_token(buf, i)
            .ok_or_else(|| SourceError::MalformedImage(format!("нет {what}")))?
            .parse()
            .map_err(|_| SourceError::MalformedImage(format!("неверный {what}")))
    }

    let magic = read_token(buf, &mut i)
        .ok_or_else(|| SourceError::MalformedImage("нет магической сигнатуры".into()))?;
    let channels = match magic.as_str() {
        "P5" => 1,
        "P6" => 3,
        other => {
            return Err(SourceError::MalformedImage(format!(
                "поддерживаются только P5/P6 (binary), получено {other}"
            )))
        }
    };
    let width = read_dim(buf, &mut i, "width")?;
    let height = read_dim(buf, &mut i, "height")?;
    let maxval = read_dim(buf, &mut i, "maxval")?;
    if maxval != 255 {
        return Err(SourceError::MalformedImage(
            "поддерживается только maxval=255".into(),
        ));
    }

    // Ровно один whitespace-байт между хедером и данными.
    if i < buf.len() && buf[i].is_ascii_whitespace() {
        i += 1;
    }

    // Хедер не доверенный: размеры могут быть сколь угодно дикими.
    let need = width
        .checked_mul(height)
        .and_then(|n| n.checked_mul(channels))
        .ok_or_else(|| {
            SourceError::MalformedImage(format!("размеры {width}x{height} переполняют usize"))
        })?;
    let data = &buf[i.min(buf.len())..];
    if data.len() < need || need == 0 {
        return Err(SourceError::MalformedImage(format!(
            "данных {} байт, нужно {need}",
            data.len()
        )));
    }

    Ok(PixelBuffer::new(data[..need].to_vec(), width, height, channels))
}
