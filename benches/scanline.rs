use criterion::{black_box, criterion_group, criterion_main, Criterion};

use barscan::scanline::{decode, runs};
use barscan::{PixelBuffer, ScanWindow};

fn make_window(width: usize, channels: usize, seed: u32) -> PixelBuffer {
    // Немного «полосатого» шума, чтобы бенч был стабильным и не совсем рандомным
    let mut x = seed;
    let mut data = Vec::with_capacity(2 * width * channels);
    for _ in 0..2 * width {
        x = x.wrapping_mul(1664525).wrapping_add(1013904223);
        let v = ((x >> 24) & 0xFF) as u8;
        for c in 0..channels {
            data.push(if c < 3 { v } else { 255 });
        }
    }
    PixelBuffer::new(data, width, 2, channels)
}

fn bench_scanline(c: &mut Criterion) {
    let width = 2048usize;
    let rgba = make_window(width, 4, 123);
    let rgb = make_window(width, 3, 321);
    let win_rgba = ScanWindow::rows(&rgba, 0);
    let win_rgb = ScanWindow::rows(&rgb, 0);

    c.bench_function("decode_rgba_2048", |b| {
        b.iter(|| {
            let res = decode(black_box(rgba.as_view()), black_box(win_rgba)).unwrap();
            black_box(res.lines.len())
        })
    });

    c.bench_function("decode_rgb_2048", |b| {
        b.iter(|| {
            let res = decode(black_box(rgb.as_view()), black_box(win_rgb)).unwrap();
            black_box(res.lines.len())
        })
    });

    c.bench_function("runs_2048", |b| {
        let bmp: Vec<bool> = (0..width).map(|i| (i / 7) % 2 == 0).collect();
        b.iter(|| {
            let r = runs(black_box(&bmp));
            black_box(r.len())
        })
    });
}

criterion_group!(benches, bench_scanline);
criterion_main!(benches);
