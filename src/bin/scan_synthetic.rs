use std::env;
use std::fs;
use std::io::{self, Write};

use barscan::prelude::*;
use barscan::synth::synthesize_image;

fn main() {
    // Паттерн по умолчанию: тихая зона 10, затем бары пошире/поуже.
    let mut modules: Vec<usize> = vec![10, 2, 1, 1, 2, 3, 1, 10];
    let mut unit: usize = 2; // ширина модуля в пикселях
    let mut height: usize = 16; // высота картинки
    let mut channels: usize = 4; // RGBA по умолчанию
    let mut write_pgm: Option<String> = None;

    // Примитивный парсер аргументов:
    // --modules 10,2,1,1,2,3,1,10  --unit 2  --height 16  --channels 3  --write-pgm out.pgm
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--modules" => {
                if let Some(v) = args.next() {
                    let parsed: Vec<usize> =
                        v.split(',').filter_map(|t| t.trim().parse().ok()).collect();
                    if !parsed.is_empty() {
                        modules = parsed;
                    }
                }
            }
            "--unit" => {
                if let Some(v) = args.next() {
                    unit = v.parse().unwrap_or(2);
                }
            }
            "--height" => {
                if let Some(v) = args.next() {
                    height = v.parse().unwrap_or(16);
                }
            }
            "--channels" => {
                if let Some(v) = args.next() {
                    channels = v.parse().unwrap_or(4);
                }
            }
            "--write-pgm" => {
                if let Some(v) = args.next() {
                    write_pgm = Some(v);
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                eprintln!("Неизвестный аргумент: {other}");
                print_help();
                std::process::exit(2);
            }
        }
    }

    let img = synthesize_image(&modules, unit, channels.max(1), height.max(2));
    println!(
        "Синтетика: {}x{}, {} канал(а), модули {:?}, unit={unit}",
        img.width, img.height, img.channels, modules
    );

    match scan_middle(&img) {
        Ok(res) => {
            println!("lines: {:?}", res.lines);
            println!(
                "padding: left={} right={}",
                res.padding.left, res.padding.right
            );

            // Самопроверка: ширины должны совпасть с modules * unit
            // (нулевые модули при генерации схлопываются с соседями).
            let expected: Vec<usize> = modules.iter().map(|m| m * unit).collect();
            if res.lines == expected {
                println!("OK: паттерн восстановлен точно.");
            } else {
                println!("Внимание: паттерн не совпал с ожидаемым {expected:?}");
            }
        }
        Err(e) => {
            eprintln!("Ошибка сканирования: {e}");
            std::process::exit(1);
        }
    }

    // По необходимости сохраним серый PGM (P5) с яркостью первого канала
    if let Some(path) = write_pgm {
        if let Err(e) = write_pgm_p5(&path, &img) {
            eprintln!("Ошибка записи PGM: {e}");
        } else {
            println!("PGM сохранён: {path}");
        }
    }
}

fn write_pgm_p5(path: &str, img: &PixelBuffer) -> io::Result<()> {
    let mut f = fs::File::create(path)?;
    write!(f, "P5\n{} {}\n255\n", img.width, img.height)?;
    let mut gray = Vec::with_capacity(img.width * img.height);
    for px in img.data.chunks(img.channels) {
        gray.push(px[0]);
    }
    f.write_all(&gray)
}

fn print_help() {
    eprintln!(
        r#"Использование:
  cargo run --bin scan_synthetic -- [--modules <w1,w2,...>] [--unit <px>] [--height <px>] [--channels <n>] [--write-pgm <file.pgm>]

Генерирует полосатую картинку (первая полоса белая, цвета чередуются),
сканирует две средние строки и сверяет run-length паттерн с исходными
ширинами.

Примеры:
  cargo run --bin scan_synthetic
  cargo run --bin scan_synthetic -- --modules 8,1,1,1,8 --unit 3 --channels 3
  cargo run --bin scan_synthetic -- --write-pgm bars.pgm
"#
    );
}
