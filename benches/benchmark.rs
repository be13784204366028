use std::io::Cursor;

use criterion::{criterion_group, criterion_main, Criterion};

use texpack::{Box3i, Color, ColorRegionMut, Point3i, Size3i, TextureFormat};

criterion_main!(benches);
criterion_group!(benches, decode_bc1, decode_bc3, decode_bc7, decode_rgba8);

fn decode_bc1(c: &mut Criterion) {
    // Flat red, 4-color ramp.
    decode(c, "decode_bc1", TextureFormat::Bc1, &[0x00, 0xF8, 0, 0, 0, 0, 0, 0]);
}

fn decode_bc3(c: &mut Criterion) {
    let mut block = [0u8; 16];
    block[0] = 200;
    block[1] = 50;
    block[8] = 0x00;
    block[9] = 0xF8;
    decode(c, "decode_bc3", TextureFormat::Bc3, &block);
}

fn decode_bc7(c: &mut Criterion) {
    // Mode 0, partition 0, all endpoints and p-bits set.
    let mut block = [0u8; 16];
    block[0] = 0b0000_0001;
    for bit in 5..83 {
        block[bit / 8] |= 1 << (bit % 8);
    }
    decode(c, "decode_bc7", TextureFormat::Bc7, &block);
}

fn decode_rgba8(c: &mut Criterion) {
    decode(c, "decode_rgba8", TextureFormat::Rgba8, &[10, 20, 30, 40]);
}

fn decode(c: &mut Criterion, name: &str, format: TextureFormat, unit: &[u8]) {
    let size = Size3i::flat(64, 64);
    let layout = format.byte_layout(size);
    let data: Vec<u8> = unit.iter().copied().cycle().take(layout.total).collect();
    let mut colors = vec![Color::TRANSPARENT_BLACK; 64 * 64];

    c.bench_function(name, |b| {
        b.iter(|| {
            let mut stream = Cursor::new(&data);
            format
                .decode(
                    &mut stream,
                    layout.row_pitch,
                    layout.slice_pitch,
                    ColorRegionMut::new(&mut colors, 0, 64, 64),
                    Box3i::of(size),
                    Point3i::ZERO,
                )
                .unwrap();
        })
    });
}
