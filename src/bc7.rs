//! BC7: 16-byte blocks in eight layout modes, selected by the position of
//! the lowest set bit of the first byte.
//!
//! Only the mode 0 layout is decoded. The other modes are recognized by the
//! dispatcher and reported with their mode id, so a caller can tell a
//! not-yet-handled layout apart from a malformed block (a first byte of
//! zero selects the reserved mode 8 and is always an error).

use crate::{bitreader::BitReaderLsb, ramp, Color, Error, Result};

pub(crate) const BLOCK_SIZE: usize = 16;

/// Field widths of one block layout mode.
///
/// Modes 4 and 5 carry rotation/selection bits and a second index plane;
/// those fields live outside this table because no two-plane mode is
/// decoded yet.
#[derive(Clone, Copy, Debug)]
struct Bc7Mode {
    id: u8,
    color_bits: u8,
    alpha_bits: u8,
    weight_bits: u8,
    plane_count: u8,
    subset_count: u8,
    pat_bits: u8,
    p_bits: u8,
    sp_bits: u8,
}

#[rustfmt::skip]
static BC7_MODES: [Bc7Mode; 8] = [
    Bc7Mode { id: 0, color_bits: 4, alpha_bits: 0, weight_bits: 3, plane_count: 1, subset_count: 3, pat_bits: 4, p_bits: 1, sp_bits: 0 },
    Bc7Mode { id: 1, color_bits: 6, alpha_bits: 0, weight_bits: 3, plane_count: 1, subset_count: 2, pat_bits: 6, p_bits: 0, sp_bits: 1 },
    Bc7Mode { id: 2, color_bits: 5, alpha_bits: 0, weight_bits: 2, plane_count: 1, subset_count: 3, pat_bits: 6, p_bits: 0, sp_bits: 0 },
    Bc7Mode { id: 3, color_bits: 7, alpha_bits: 0, weight_bits: 2, plane_count: 1, subset_count: 2, pat_bits: 6, p_bits: 1, sp_bits: 0 },
    Bc7Mode { id: 4, color_bits: 5, alpha_bits: 6, weight_bits: 2, plane_count: 2, subset_count: 1, pat_bits: 0, p_bits: 0, sp_bits: 0 },
    Bc7Mode { id: 5, color_bits: 7, alpha_bits: 8, weight_bits: 2, plane_count: 2, subset_count: 1, pat_bits: 0, p_bits: 0, sp_bits: 0 },
    Bc7Mode { id: 6, color_bits: 7, alpha_bits: 7, weight_bits: 4, plane_count: 1, subset_count: 1, pat_bits: 0, p_bits: 1, sp_bits: 0 },
    Bc7Mode { id: 7, color_bits: 5, alpha_bits: 5, weight_bits: 2, plane_count: 1, subset_count: 2, pat_bits: 6, p_bits: 1, sp_bits: 0 },
];

pub(crate) fn decode_block(bytes: &[u8; 16]) -> Result<[Color; 16]> {
    let mode_id = bytes[0].trailing_zeros() as u8;
    if mode_id >= 8 {
        return Err(Error::UnsupportedMode {
            format: "BC7",
            mode: 8,
        });
    }
    let mode = &BC7_MODES[mode_id as usize];
    if mode.id != 0 {
        return Err(Error::UnsupportedMode {
            format: "BC7",
            mode: mode.id,
        });
    }
    Ok(decode_mode0(bytes, mode))
}

fn decode_mode0(bytes: &[u8; 16], mode: &Bc7Mode) -> [Color; 16] {
    debug_assert_eq!(mode.plane_count, 1);

    let reader = &mut BitReaderLsb::new(bytes);
    reader.skip(mode.id as usize + 1);

    let partition = reader.read(mode.pat_bits as usize) as usize;
    let endpoint_count = mode.subset_count as usize * 2;

    // Endpoint fields are channel-major on the wire: all six red values,
    // then all six green, then all six blue.
    let mut endpoints = [[0u32; 4]; 6];
    for channel in 0..3 {
        for endpoint in endpoints.iter_mut().take(endpoint_count) {
            endpoint[channel] = reader.read(mode.color_bits as usize);
        }
    }
    if mode.alpha_bits > 0 {
        for endpoint in endpoints.iter_mut().take(endpoint_count) {
            endpoint[3] = reader.read(mode.alpha_bits as usize);
        }
    }

    let mut p_bits = [0u32; 6];
    if mode.p_bits > 0 {
        for p in p_bits.iter_mut().take(endpoint_count) {
            *p = reader.read(1);
        }
    } else if mode.sp_bits > 0 {
        for subset in 0..mode.subset_count as usize {
            let p = reader.read(1);
            p_bits[subset * 2] = p;
            p_bits[subset * 2 + 1] = p;
        }
    }

    // The p-bit extends the endpoint by one low bit, then the top bits
    // replicate downward to fill 8 bits.
    let expand = |v: u32, p: u32| {
        let v = (v << 1 | p) << (7 - mode.color_bits);
        v | v >> (mode.color_bits + 1)
    };

    let pattern = partition_pattern(mode.subset_count, partition);
    let anchors = anchor_positions(mode.subset_count, partition);

    let mut indices = [0usize; 16];
    for (i, index) in indices.iter_mut().enumerate() {
        // Anchor texels store one bit less; their top index bit is zero.
        let anchored = anchors.contains(&(i as u8));
        *index = reader.read(mode.weight_bits as usize - anchored as usize) as usize;
    }

    let mut texels = [Color::TRANSPARENT_BLACK; 16];
    for (i, texel) in texels.iter_mut().enumerate() {
        let subset = pattern[i] as usize;
        let e0 = endpoints[subset * 2];
        let e1 = endpoints[subset * 2 + 1];
        let (p0, p1) = (p_bits[subset * 2], p_bits[subset * 2 + 1]);
        let w = ramp::WEIGHTS_3BIT[indices[i]];
        *texel = Color::new(
            ramp::lerp64(expand(e0[0], p0), expand(e1[0], p1), w) as f64 / 255.0,
            ramp::lerp64(expand(e0[1], p0), expand(e1[1], p1), w) as f64 / 255.0,
            ramp::lerp64(expand(e0[2], p0), expand(e1[2], p1), w) as f64 / 255.0,
            1.0,
        );
    }
    texels
}

fn partition_pattern(subset_count: u8, partition: usize) -> &'static [u8; 16] {
    match subset_count {
        2 => &PARTITIONS_2[partition],
        _ => &PARTITIONS_3[partition],
    }
}

fn anchor_positions(subset_count: u8, partition: usize) -> &'static [u8] {
    match subset_count {
        2 => &ANCHORS_2[partition],
        _ => &ANCHORS_3[partition],
    }
}

#[rustfmt::skip]
static PARTITIONS_2: [[u8; 16]; 64] = [
    [ 0,0,1,1,0,0,1,1,0,0,1,1,0,0,1,1 ], [ 0,0,0,1,0,0,0,1,0,0,0,1,0,0,0,1 ],
    [ 0,1,1,1,0,1,1,1,0,1,1,1,0,1,1,1 ], [ 0,0,0,1,0,0,1,1,0,0,1,1,0,1,1,1 ],
    [ 0,0,0,0,0,0,0,1,0,0,0,1,0,0,1,1 ], [ 0,0,1,1,0,1,1,1,0,1,1,1,1,1,1,1 ],
    [ 0,0,0,1,0,0,1,1,0,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,1,0,0,1,1,0,1,1,1 ],
    [ 0,0,0,0,0,0,0,0,0,0,0,1,0,0,1,1 ], [ 0,0,1,1,0,1,1,1,1,1,1,1,1,1,1,1 ],
    [ 0,0,0,0,0,0,0,1,0,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,0,0,0,0,1,0,1,1,1 ],
    [ 0,0,0,1,0,1,1,1,1,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,0,1,1,1,1,1,1,1,1 ],
    [ 0,0,0,0,1,1,1,1,1,1,1,1,1,1,1,1 ], [ 0,0,0,0,0,0,0,0,0,0,0,0,1,1,1,1 ],
    [ 0,0,0,0,1,0,0,0,1,1,1,0,1,1,1,1 ], [ 0,1,1,1,0,0,0,1,0,0,0,0,0,0,0,0 ],
    [ 0,0,0,0,0,0,0,0,1,0,0,0,1,1,1,0 ], [ 0,1,1,1,0,0,1,1,0,0,0,1,0,0,0,0 ],
    [ 0,0,1,1,0,0,0,1,0,0,0,0,0,0,0,0 ], [ 0,0,0,0,1,0,0,0,1,1,0,0,1,1,1,0 ],
    [ 0,0,0,0,0,0,0,0,1,0,0,0,1,1,0,0 ], [ 0,1,1,1,0,0,1,1,0,0,1,1,0,0,0,1 ],
    [ 0,0,1,1,0,0,0,1,0,0,0,1,0,0,0,0 ], [ 0,0,0,0,1,0,0,0,1,0,0,0,1,1,0,0 ],
    [ 0,1,1,0,0,1,1,0,0,1,1,0,0,1,1,0 ], [ 0,0,1,1,0,1,1,0,0,1,1,0,1,1,0,0 ],
    [ 0,0,0,1,0,1,1,1,1,1,1,0,1,0,0,0 ], [ 0,0,0,0,1,1,1,1,1,1,1,1,0,0,0,0 ],
    [ 0,1,1,1,0,0,0,1,1,0,0,0,1,1,1,0 ], [ 0,0,1,1,1,0,0,1,1,0,0,1,1,1,0,0 ],
    [ 0,1,0,1,0,1,0,1,0,1,0,1,0,1,0,1 ], [ 0,0,0,0,1,1,1,1,0,0,0,0,1,1,1,1 ],
    [ 0,1,0,1,1,0,1,0,0,1,0,1,1,0,1,0 ], [ 0,0,1,1,0,0,1,1,1,1,0,0,1,1,0,0 ],
    [ 0,0,1,1,1,1,0,0,0,0,1,1,1,1,0,0 ], [ 0,1,0,1,0,1,0,1,1,0,1,0,1,0,1,0 ],
    [ 0,1,1,0,1,0,0,1,0,1,1,0,1,0,0,1 ], [ 0,1,0,1,1,0,1,0,1,0,1,0,0,1,0,1 ],
    [ 0,1,1,1,0,0,1,1,1,1,0,0,1,1,1,0 ], [ 0,0,0,1,0,0,1,1,1,1,0,0,1,0,0,0 ],
    [ 0,0,1,1,0,0,1,0,0,1,0,0,1,1,0,0 ], [ 0,0,1,1,1,0,1,1,1,1,0,1,1,1,0,0 ],
    [ 0,1,1,0,1,0,0,1,1,0,0,1,0,1,1,0 ], [ 0,0,1,1,1,1,0,0,1,1,0,0,0,0,1,1 ],
    [ 0,1,1,0,0,1,1,0,1,0,0,1,1,0,0,1 ], [ 0,0,0,0,0,1,1,0,0,1,1,0,0,0,0,0 ],
    [ 0,1,0,0,1,1,1,0,0,1,0,0,0,0,0,0 ], [ 0,0,1,0,0,1,1,1,0,0,1,0,0,0,0,0 ],
    [ 0,0,0,0,0,0,1,0,0,1,1,1,0,0,1,0 ], [ 0,0,0,0,0,1,0,0,1,1,1,0,0,1,0,0 ],
    [ 0,1,1,0,1,1,0,0,1,0,0,1,0,0,1,1 ], [ 0,0,1,1,0,1,1,0,1,1,0,0,1,0,0,1 ],
    [ 0,1,1,0,0,0,1,1,1,0,0,1,1,1,0,0 ], [ 0,0,1,1,1,0,0,1,1,1,0,0,0,1,1,0 ],
    [ 0,1,1,0,1,1,0,0,1,1,0,0,1,0,0,1 ], [ 0,1,1,0,0,0,1,1,0,0,1,1,1,0,0,1 ],
    [ 0,1,1,1,1,1,1,0,1,0,0,0,0,0,0,1 ], [ 0,0,0,1,1,0,0,0,1,1,1,0,0,1,1,1 ],
    [ 0,0,0,0,1,1,1,1,0,0,1,1,0,0,1,1 ], [ 0,0,1,1,0,0,1,1,1,1,1,1,0,0,0,0 ],
    [ 0,0,1,0,0,0,1,0,1,1,1,0,1,1,1,0 ], [ 0,1,0,0,0,1,0,0,0,1,1,1,0,1,1,1 ],
];

#[rustfmt::skip]
static PARTITIONS_3: [[u8; 16]; 64] = [
    [ 0,0,1,1,0,0,1,1,0,2,2,1,2,2,2,2 ], [ 0,0,0,1,0,0,1,1,2,2,1,1,2,2,2,1 ],
    [ 0,0,0,0,2,0,0,1,2,2,1,1,2,2,1,1 ], [ 0,2,2,2,0,0,2,2,0,0,1,1,0,1,1,1 ],
    [ 0,0,0,0,0,0,0,0,1,1,2,2,1,1,2,2 ], [ 0,0,1,1,0,0,1,1,0,0,2,2,0,0,2,2 ],
    [ 0,0,2,2,0,0,2,2,1,1,1,1,1,1,1,1 ], [ 0,0,1,1,0,0,1,1,2,2,1,1,2,2,1,1 ],
    [ 0,0,0,0,0,0,0,0,1,1,1,1,2,2,2,2 ], [ 0,0,0,0,1,1,1,1,1,1,1,1,2,2,2,2 ],
    [ 0,0,0,0,1,1,1,1,2,2,2,2,2,2,2,2 ], [ 0,0,1,2,0,0,1,2,0,0,1,2,0,0,1,2 ],
    [ 0,1,1,2,0,1,1,2,0,1,1,2,0,1,1,2 ], [ 0,1,2,2,0,1,2,2,0,1,2,2,0,1,2,2 ],
    [ 0,0,1,1,0,1,1,2,1,1,2,2,1,2,2,2 ], [ 0,0,1,1,2,0,0,1,2,2,0,0,2,2,2,0 ],
    [ 0,0,0,1,0,0,1,1,0,1,1,2,1,1,2,2 ], [ 0,1,1,1,0,0,1,1,2,0,0,1,2,2,0,0 ],
    [ 0,0,0,0,1,1,2,2,1,1,2,2,1,1,2,2 ], [ 0,0,2,2,0,0,2,2,0,0,2,2,1,1,1,1 ],
    [ 0,1,1,1,0,1,1,1,0,2,2,2,0,2,2,2 ], [ 0,0,0,1,0,0,0,1,2,2,2,1,2,2,2,1 ],
    [ 0,0,0,0,0,0,1,1,0,1,2,2,0,1,2,2 ], [ 0,0,0,0,1,1,0,0,2,2,1,0,2,2,1,0 ],
    [ 0,1,2,2,0,1,2,2,0,0,1,1,0,0,0,0 ], [ 0,0,1,2,0,0,1,2,1,1,2,2,2,2,2,2 ],
    [ 0,1,1,0,1,2,2,1,1,2,2,1,0,1,1,0 ], [ 0,0,0,0,0,1,1,0,1,2,2,1,1,2,2,1 ],
    [ 0,0,2,2,1,1,0,2,1,1,0,2,0,0,2,2 ], [ 0,1,1,0,0,1,1,0,2,0,0,2,2,2,2,2 ],
    [ 0,0,1,1,0,1,2,2,0,1,2,2,0,0,1,1 ], [ 0,0,0,0,2,0,0,0,2,2,1,1,2,2,2,1 ],
    [ 0,0,0,0,0,0,0,2,1,1,2,2,1,2,2,2 ], [ 0,2,2,2,0,0,2,2,0,0,1,2,0,0,1,1 ],
    [ 0,0,1,1,0,0,1,2,0,0,2,2,0,2,2,2 ], [ 0,1,2,0,0,1,2,0,0,1,2,0,0,1,2,0 ],
    [ 0,0,0,0,1,1,1,1,2,2,2,2,0,0,0,0 ], [ 0,1,2,0,1,2,0,1,2,0,1,2,0,1,2,0 ],
    [ 0,1,2,0,2,0,1,2,1,2,0,1,0,1,2,0 ], [ 0,0,1,1,2,2,0,0,1,1,2,2,0,0,1,1 ],
    [ 0,0,1,1,1,1,2,2,2,2,0,0,0,0,1,1 ], [ 0,1,0,1,0,1,0,1,2,2,2,2,2,2,2,2 ],
    [ 0,0,0,0,0,0,0,0,2,1,2,1,2,1,2,1 ], [ 0,0,2,2,1,1,2,2,0,0,2,2,1,1,2,2 ],
    [ 0,0,2,2,0,0,1,1,0,0,2,2,0,0,1,1 ], [ 0,2,2,0,1,2,2,1,0,2,2,0,1,2,2,1 ],
    [ 0,1,0,1,2,2,2,2,2,2,2,2,0,1,0,1 ], [ 0,0,0,0,2,1,2,1,2,1,2,1,2,1,2,1 ],
    [ 0,1,0,1,0,1,0,1,0,1,0,1,2,2,2,2 ], [ 0,2,2,2,0,1,1,1,0,2,2,2,0,1,1,1 ],
    [ 0,0,0,2,1,1,1,2,0,0,0,2,1,1,1,2 ], [ 0,0,0,0,2,1,1,2,2,1,1,2,2,1,1,2 ],
    [ 0,2,2,2,0,1,1,1,0,1,1,1,0,2,2,2 ], [ 0,0,0,2,1,1,1,2,1,1,1,2,0,0,0,2 ],
    [ 0,1,1,0,0,1,1,0,0,1,1,0,2,2,2,2 ], [ 0,0,0,0,0,0,0,0,2,1,1,2,2,1,1,2 ],
    [ 0,1,1,0,0,1,1,0,2,2,2,2,2,2,2,2 ], [ 0,0,2,2,0,0,1,1,0,0,1,1,0,0,2,2 ],
    [ 0,0,2,2,1,1,2,2,1,1,2,2,0,0,2,2 ], [ 0,0,0,0,0,0,0,0,0,0,0,0,2,1,1,2 ],
    [ 0,0,0,2,0,0,0,1,0,0,0,2,0,0,0,1 ], [ 0,2,2,2,1,2,2,2,0,2,2,2,1,2,2,2 ],
    [ 0,1,0,1,2,2,2,2,2,2,2,2,2,2,2,2 ], [ 0,1,1,1,2,0,1,1,2,2,0,1,2,2,2,0 ],
];

#[rustfmt::skip]
static ANCHORS_2: [[u8; 2]; 64] = [
    [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ],
    [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ],
    [ 0, 15 ], [ 0,  2 ], [ 0,  8 ], [ 0,  2 ], [ 0,  2 ], [ 0,  8 ], [ 0,  8 ], [ 0, 15 ],
    [ 0,  2 ], [ 0,  8 ], [ 0,  2 ], [ 0,  2 ], [ 0,  8 ], [ 0,  8 ], [ 0,  2 ], [ 0,  2 ],
    [ 0, 15 ], [ 0, 15 ], [ 0,  6 ], [ 0,  8 ], [ 0,  2 ], [ 0,  8 ], [ 0, 15 ], [ 0, 15 ],
    [ 0,  2 ], [ 0,  8 ], [ 0,  2 ], [ 0,  2 ], [ 0,  2 ], [ 0, 15 ], [ 0, 15 ], [ 0,  6 ],
    [ 0,  6 ], [ 0,  2 ], [ 0,  6 ], [ 0,  8 ], [ 0, 15 ], [ 0, 15 ], [ 0,  2 ], [ 0,  2 ],
    [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0, 15 ], [ 0,  2 ], [ 0,  2 ], [ 0, 15 ],
];

#[rustfmt::skip]
static ANCHORS_3: [[u8; 3]; 64] = [
    [ 0,  3, 15 ], [ 0,  3,  8 ], [ 0, 15,  8 ], [ 0, 15,  3 ],
    [ 0,  8, 15 ], [ 0,  3, 15 ], [ 0, 15,  3 ], [ 0, 15,  8 ],
    [ 0,  8, 15 ], [ 0,  8, 15 ], [ 0,  6, 15 ], [ 0,  6, 15 ],
    [ 0,  6, 15 ], [ 0,  5, 15 ], [ 0,  3, 15 ], [ 0,  3,  8 ],
    [ 0,  3, 15 ], [ 0,  3,  8 ], [ 0,  8, 15 ], [ 0, 15,  3 ],
    [ 0,  3, 15 ], [ 0,  3,  8 ], [ 0,  6, 15 ], [ 0, 10,  8 ],
    [ 0,  5,  3 ], [ 0,  8, 15 ], [ 0,  8,  6 ], [ 0,  6, 10 ],
    [ 0,  8, 15 ], [ 0,  5, 15 ], [ 0, 15, 10 ], [ 0, 15,  8 ],
    [ 0,  8, 15 ], [ 0, 15,  3 ], [ 0,  3, 15 ], [ 0,  5, 10 ],
    [ 0,  6, 10 ], [ 0, 10,  8 ], [ 0,  8,  9 ], [ 0, 15, 10 ],
    [ 0, 15,  6 ], [ 0,  3, 15 ], [ 0, 15,  8 ], [ 0,  5, 15 ],
    [ 0, 15,  3 ], [ 0, 15,  6 ], [ 0, 15,  6 ], [ 0, 15,  8 ],
    [ 0,  3, 15 ], [ 0, 15,  3 ], [ 0,  5, 15 ], [ 0,  5, 15 ],
    [ 0,  5, 15 ], [ 0,  8, 15 ], [ 0,  5, 15 ], [ 0, 10, 15 ],
    [ 0,  5, 15 ], [ 0, 10, 15 ], [ 0,  8, 15 ], [ 0, 13, 15 ],
    [ 0, 15,  3 ], [ 0, 12, 15 ], [ 0,  3, 15 ], [ 0,  3,  8 ],
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitwriter::BitWriterLsb;

    fn mode0_block(
        partition: u32,
        endpoints: [[u32; 3]; 6],
        p_bits: [u32; 6],
        indices: [u32; 16],
    ) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        let mut writer = BitWriterLsb::new(&mut bytes);
        writer.write_bool(true);
        writer.write_u32(4, partition);
        for channel in 0..3 {
            for endpoint in &endpoints {
                writer.write_u32(4, endpoint[channel]);
            }
        }
        for p in p_bits {
            writer.write_u32(1, p);
        }
        let anchors = &ANCHORS_3[partition as usize];
        for (i, index) in indices.iter().enumerate() {
            let count = if anchors.contains(&(i as u8)) { 2 } else { 3 };
            writer.write_u32(count, *index);
        }
        bytes
    }

    #[test]
    fn unhandled_modes_report_their_id() {
        for (byte, mode) in [(0b10u8, 1u8), (0b100, 2), (0b1000_0000, 7), (0, 8)] {
            let mut bytes = [0u8; 16];
            bytes[0] = byte;
            assert!(matches!(
                decode_block(&bytes),
                Err(Error::UnsupportedMode {
                    format: "BC7",
                    mode: m,
                }) if m == mode
            ));
        }
    }

    #[test]
    fn flat_mode0_block() {
        // All six endpoints identical, so every subset and index agrees.
        let block = mode0_block(7, [[0b1010, 0b0101, 0b1111]; 6], [1; 6], [0; 16]);
        let texels = decode_block(&block).unwrap();
        // 4 color bits and the p-bit expand 0b10101 to 173, 0b01011 to 90,
        // 0b11111 to 255.
        let expected = Color::new(173.0 / 255.0, 90.0 / 255.0, 255.0 / 255.0, 1.0);
        for texel in texels {
            assert_eq!(texel, expected);
        }
    }

    #[test]
    fn anchor_texels_drop_their_top_index_bit() {
        // Every subset ramps from 0 to 255. All stored index bits are ones,
        // so anchors read 3 and everything else reads 7.
        let endpoints = [[0; 3], [15; 3], [0; 3], [15; 3], [0; 3], [15; 3]];
        let p_bits = [0, 1, 0, 1, 0, 1];
        let mut indices = [7u32; 16];
        for &anchor in &ANCHORS_3[0] {
            indices[anchor as usize] = 3;
        }
        let block = mode0_block(0, endpoints, p_bits, indices);
        let texels = decode_block(&block).unwrap();

        let anchored = ramp::lerp64(0, 255, ramp::WEIGHTS_3BIT[3]) as f64 / 255.0;
        for (i, texel) in texels.iter().enumerate() {
            let expected = if ANCHORS_3[0].contains(&(i as u8)) {
                anchored
            } else {
                1.0
            };
            assert_eq!(texel.r, expected, "texel {i}");
            assert_eq!(texel.g, expected);
            assert_eq!(texel.b, expected);
            assert_eq!(texel.a, 1.0);
        }
    }

    #[test]
    fn anchors_lie_in_their_subset() {
        for partition in 0..64 {
            let pattern = &PARTITIONS_2[partition];
            for (subset, &anchor) in ANCHORS_2[partition].iter().enumerate() {
                assert_eq!(pattern[anchor as usize] as usize, subset);
            }
            let pattern = &PARTITIONS_3[partition];
            for (subset, &anchor) in ANCHORS_3[partition].iter().enumerate() {
                assert_eq!(pattern[anchor as usize] as usize, subset);
            }
        }
    }
}
