#![warn(clippy::all)]

//! Decoding each block format through the public stream interface.

use std::io::Cursor;

use byteorder::{ByteOrder, LE};
use texpack::{
    Box3i, Color, ColorRegionMut, Error, Point3i, Size3i, TextureFormat,
};

fn decode_one_block(format: TextureFormat, bytes: &[u8]) -> texpack::Result<[Color; 16]> {
    let mut stream = Cursor::new(bytes.to_vec());
    let mut decoded = [Color::TRANSPARENT_BLACK; 16];
    let pitch = format.unit_bytes();
    format.decode(
        &mut stream,
        pitch,
        pitch,
        ColorRegionMut::new(&mut decoded, 0, 4, 4),
        Box3i::of(Size3i::flat(4, 4)),
        Point3i::ZERO,
    )?;
    Ok(decoded)
}

fn bc4_half(c0: u8, c1: u8, index: u8) -> [u8; 8] {
    let mut bits = 0u64;
    for i in 0..16 {
        bits |= (index as u64 & 7) << (3 * i);
    }
    let mut bytes = [0u8; 8];
    bytes[0] = c0;
    bytes[1] = c1;
    LE::write_u48(&mut bytes[2..], bits);
    bytes
}

#[test]
fn bc1_stream_decode() {
    // Flat red, 4-color ramp.
    let texels = decode_one_block(TextureFormat::Bc1, &[0x00, 0xF8, 0, 0, 0, 0, 0, 0]).unwrap();
    for texel in texels {
        assert_eq!(texel, Color::rgb(1.0, 0.0, 0.0));
    }
}

#[test]
fn bc1_transparent_sentinel() {
    // c0 <= c1 selects the 3-color ramp; index 3 is transparent black.
    let mut bytes = [0u8; 8];
    LE::write_u16(&mut bytes[0..], 0x0000);
    LE::write_u16(&mut bytes[2..], 0xF800);
    LE::write_u32(&mut bytes[4..], 0xFFFF_FFFF);
    let texels = decode_one_block(TextureFormat::Bc1, &bytes).unwrap();
    for texel in texels {
        assert_eq!(texel, Color::TRANSPARENT_BLACK);
    }
}

#[test]
fn bc2_literal_alpha() {
    let mut bytes = [0u8; 16];
    LE::write_u64(&mut bytes[0..8], 0x5555_5555_5555_5555); // nibble 5 everywhere
    LE::write_u16(&mut bytes[8..], 0xFFFF);
    let texels = decode_one_block(TextureFormat::Bc2, &bytes).unwrap();
    for texel in texels {
        assert_eq!(texel.a, 5.0 / 15.0);
        assert_eq!(texel.r, 1.0);
    }
}

#[test]
fn bc3_interpolated_alpha() {
    let mut bytes = [0u8; 16];
    bytes[0..8].copy_from_slice(&bc4_half(200, 50, 3));
    LE::write_u16(&mut bytes[8..], 0xFFFF);
    let texels = decode_one_block(TextureFormat::Bc3, &bytes).unwrap();
    let expected = (4.0 * 200.0 + 3.0 * 50.0) / 7.0 / 255.0;
    for texel in texels {
        assert_eq!(texel.a, expected);
    }
}

#[test]
fn bc4_unsigned_and_signed() {
    let texels = decode_one_block(TextureFormat::Bc4, &bc4_half(255, 0, 0)).unwrap();
    assert_eq!(texels[0], Color::new(1.0, 0.0, 0.0, 1.0));

    let texels =
        decode_one_block(TextureFormat::Bc4Signed, &bc4_half(0u8.wrapping_sub(127), 0, 0)).unwrap();
    assert_eq!(texels[0].r, -1.0);
}

#[test]
fn bc5_two_channels() {
    let mut bytes = [0u8; 16];
    bytes[0..8].copy_from_slice(&bc4_half(255, 0, 0));
    bytes[8..16].copy_from_slice(&bc4_half(51, 0, 0));
    let texels = decode_one_block(TextureFormat::Bc5, &bytes).unwrap();
    for texel in texels {
        assert_eq!(texel, Color::new(1.0, 51.0 / 255.0, 0.0, 1.0));
    }
}

#[test]
fn bc6h_is_not_decoded() {
    let result = decode_one_block(TextureFormat::Bc6hUnsigned, &[0u8; 16]);
    assert!(matches!(result, Err(Error::Unsupported(_))));
    let result = decode_one_block(TextureFormat::Bc6hSigned, &[0u8; 16]);
    assert!(matches!(result, Err(Error::Unsupported(_))));
}

#[test]
fn bc7_unhandled_modes_are_reported() {
    let mut bytes = [0u8; 16];
    bytes[0] = 0b100; // mode 2
    let result = decode_one_block(TextureFormat::Bc7, &bytes);
    assert!(matches!(
        result,
        Err(Error::UnsupportedMode {
            format: "BC7",
            mode: 2
        })
    ));

    // A zero mode byte selects the reserved mode.
    let result = decode_one_block(TextureFormat::Bc7, &[0u8; 16]);
    assert!(matches!(
        result,
        Err(Error::UnsupportedMode {
            format: "BC7",
            mode: 8
        })
    ));
}

#[test]
fn bc7_mode0_stream_decode() {
    // Mode bit, zero partition, six equal endpoint triples, p-bits set,
    // all indices zero: a flat block regardless of partitioning.
    let mut bytes = [0u8; 16];
    bytes[0] = 0b0000_0001;
    // Endpoints: 18 4-bit fields of 0xF starting at bit 5, then 6 p-bits.
    let mut bit = 5;
    for _ in 0..18 {
        set_bits(&mut bytes, bit, 4, 0xF);
        bit += 4;
    }
    set_bits(&mut bytes, bit, 6, 0x3F);
    let texels = decode_one_block(TextureFormat::Bc7, &bytes).unwrap();
    for texel in texels {
        assert_eq!(texel, Color::WHITE);
    }
}

fn set_bits(bytes: &mut [u8], start: usize, count: usize, value: u64) {
    for i in 0..count {
        if value >> i & 1 != 0 {
            bytes[(start + i) / 8] |= 1 << ((start + i) % 8);
        }
    }
}
