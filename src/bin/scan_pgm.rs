use std::env;
use std::path::PathBuf;

use barscan::prelude::*;

fn main() {
    let mut path: Option<String> = None;
    let mut row: Option<usize> = None;
    let mut scan_count: Option<usize> = None;

    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "--row" => {
                if let Some(v) = args.next() {
                    match parse_row(&v) {
                        Some(y) => row = Some(y),
                        None => {
                            eprintln!("Неверное значение --row: {v}");
                            print_help();
                            std::process::exit(2);
                        }
                    }
                }
            }
            "--rows" => {
                if let Some(v) = args.next() {
                    scan_count = Some(v.parse().unwrap_or(1));
                }
            }
            "--help" | "-h" => {
                print_help();
                return;
            }
            other => {
                if path.is_none() {
                    path = Some(other.to_string());
                } else {
                    eprintln!("Лишний аргумент: {other}");
                    print_help();
                    std::process::exit(2);
                }
            }
        }
    }

    let path = match path {
        Some(p) => p,
        None => {
            print_help();
            std::process::exit(2);
        }
    };

    let buf = match ImageSource::Path(PathBuf::from(&path)).resolve() {
        Ok(b) => b,
        Err(e) => {
            eprintln!("Не удалось прочитать изображение: {e}");
            std::process::exit(1);
        }
    };
    println!(
        "{path}: {}x{}, {} канал(а)",
        buf.width, buf.height, buf.channels
    );

    if let Some(y) = row {
        report(y, barscan::scan(&buf, ScanWindow::rows(&buf, y)));
        return;
    }

    match scan_count {
        Some(n) => {
            let opts = ScanOptions { scan_rows: n };
            let all = scan_rows(&buf, &opts);
            if all.is_empty() {
                println!("Нет ни одного окна (высота меньше двух строк?).");
            }
            for (y, res) in all {
                report(y, Ok(res));
            }
        }
        None => report(buf.height.saturating_sub(2) / 2, scan_middle(&buf)),
    }
}

fn parse_row(v: &str) -> Option<usize> {
    v.parse().ok()
}

fn report(y: usize, res: Result<RunLengthResult, ScanError>) {
    match res {
        Ok(r) => {
            let l = if r.padding.left { "бар" } else { "зона" };
            let rg = if r.padding.right { "бар" } else { "зона" };
            println!("row={y}: {:?}  края: слева {l}, справа {rg}", r.lines);
        }
        Err(e) => {
            eprintln!("row={y}: {e}");
            std::process::exit(1);
        }
    }
}

fn print_help() {
    eprintln!(
        r#"Использование:
  cargo run --bin scan_pgm -- <path.pgm|path.ppm> [--row <Y>] [--rows <N>]

Требуется бинарный PNM: P5 (серый) или P6 (RGB), 8 бит, maxval=255.
По умолчанию сканируются две средние строки.

Примеры:
  cargo run --bin scan_pgm -- ./code.pgm
  cargo run --bin scan_pgm -- ./code.ppm --row 10
  cargo run --bin scan_pgm -- ./code.pgm --rows 15
"#
    );
}

#[cfg(test)]
mod tests {
    use super::parse_row;

    #[test]
    fn row_argument_must_be_numeric() {
        assert_eq!(parse_row("10"), Some(10));
        assert_eq!(parse_row("0"), Some(0));
        assert!(parse_row("abc").is_none());
        assert!(parse_row("-1").is_none());
        assert!(parse_row("1.5").is_none());
    }
}
