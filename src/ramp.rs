//! Integer-math palette interpolation shared by the block codecs.
//!
//! Two stored endpoints expand into an ordered ramp indexed by the per-pixel
//! index field. Which ramp a 3-bit block gets is decided by comparing the
//! raw stored endpoint values, before any normalization: strictly greater
//! selects the 7-step ramp, ties and less-than select the 5-step ramp with
//! its two sentinel slots.

use crate::Color;

/// 2-bit interpolation weights in 64ths (BC1 color ramp).
pub(crate) const WEIGHTS_2BIT: [u32; 4] = [0, 21, 43, 64];

/// 3-bit interpolation weights in 64ths (BC7).
pub(crate) const WEIGHTS_3BIT: [u32; 8] = [0, 9, 18, 27, 37, 46, 55, 64];

/// `((64-w)*c0 + w*c1 + 32) >> 6` in whatever integer domain the endpoints
/// are stored in.
pub(crate) fn lerp64(c0: u32, c1: u32, w: u32) -> u32 {
    ((64 - w) * c0 + w * c1 + 32) >> 6
}

fn unpack565(c: u16) -> (u32, u32, u32) {
    (
        (c >> 11) as u32 & 0x1F,
        (c >> 5) as u32 & 0x3F,
        c as u32 & 0x1F,
    )
}

/// Expands a BC1 endpoint pair into its 4-entry ramp.
///
/// `c0 > c1` on the raw 565 words selects the 4-color ramp; otherwise the
/// block trades the last two steps for a midpoint and a transparent-black
/// sentinel (the BC1 1-bit alpha coincidence).
pub(crate) fn bc1_ramp(c0: u16, c1: u16) -> [Color; 4] {
    let (r0, g0, b0) = unpack565(c0);
    let (r1, g1, b1) = unpack565(c1);
    let entry = |w: u32| {
        Color::rgb(
            lerp64(r0, r1, w) as f64 / 31.0,
            lerp64(g0, g1, w) as f64 / 63.0,
            lerp64(b0, b1, w) as f64 / 31.0,
        )
    };
    if c0 > c1 {
        [
            entry(WEIGHTS_2BIT[0]),
            entry(WEIGHTS_2BIT[1]),
            entry(WEIGHTS_2BIT[2]),
            entry(WEIGHTS_2BIT[3]),
        ]
    } else {
        [entry(0), entry(32), entry(64), Color::TRANSPARENT_BLACK]
    }
}

/// Expands an 8-bit unsigned endpoint pair into its 8-entry ramp,
/// normalized to `[0, 1]`.
pub(crate) fn unorm_ramp8(c0: u8, c1: u8) -> [f64; 8] {
    let (a, b) = (c0 as u32, c1 as u32);
    let mut ramp = [0.0; 8];
    if c0 > c1 {
        // 7-step: monotone in the index.
        for (k, slot) in ramp.iter_mut().enumerate() {
            *slot = ((7 - k as u32) * a + k as u32 * b) as f64 / (7.0 * 255.0);
        }
    } else {
        // 5-step plus full-range sentinels in slots 6 and 7.
        for (k, slot) in ramp.iter_mut().take(6).enumerate() {
            *slot = ((5 - k as u32) * a + k as u32 * b) as f64 / (5.0 * 255.0);
        }
        ramp[6] = 0.0;
        ramp[7] = 1.0;
    }
    ramp
}

/// Signed variant: endpoints are `i8`, normalized by `max(v/127, -1)`.
pub(crate) fn snorm_ramp8(c0: i8, c1: i8) -> [f64; 8] {
    let (a, b) = (c0 as i32, c1 as i32);
    let norm = |v: i32, steps: i32| (v as f64 / (steps as f64 * 127.0)).max(-1.0);
    let mut ramp = [0.0; 8];
    if c0 > c1 {
        for (k, slot) in ramp.iter_mut().enumerate() {
            *slot = norm((7 - k as i32) * a + k as i32 * b, 7);
        }
    } else {
        for (k, slot) in ramp.iter_mut().take(6).enumerate() {
            *slot = norm((5 - k as i32) * a + k as i32 * b, 5);
        }
        ramp[6] = -1.0;
        ramp[7] = 1.0;
    }
    ramp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_step_ramp_is_strictly_increasing() {
        let ramp = unorm_ramp8(50, 200);
        // 50 < 200 stored swapped: use a pair that selects 7-step mode.
        let ramp_desc = unorm_ramp8(200, 50);
        for w in ramp_desc.windows(2) {
            assert!(w[0] > w[1], "descending endpoints give a descending ramp");
        }
        // 50 <= 200 selects the sentinel ramp instead.
        assert_eq!(ramp[6], 0.0);
        assert_eq!(ramp[7], 1.0);
    }

    #[test]
    fn ramp_entries_stay_between_endpoints() {
        let ramp = unorm_ramp8(230, 10);
        let (lo, hi) = (10.0 / 255.0, 230.0 / 255.0);
        for v in ramp {
            assert!(v >= lo - 1e-12 && v <= hi + 1e-12);
        }
    }

    #[test]
    fn ties_resolve_to_sentinel_mode() {
        let ramp = unorm_ramp8(128, 128);
        assert_eq!(ramp[0], 128.0 / 255.0);
        assert_eq!(ramp[5], 128.0 / 255.0);
        assert_eq!(ramp[6], 0.0);
        assert_eq!(ramp[7], 1.0);
    }

    #[test]
    fn seven_step_index_three_blend() {
        // Stored 200 > 50: 7-step mode, index 3 interpolates 4:3.
        let ramp = unorm_ramp8(200, 50);
        assert_eq!(ramp[3], (4.0 * 200.0 + 3.0 * 50.0) / 7.0 / 255.0);
    }

    #[test]
    fn signed_ramp_normalization() {
        let ramp = snorm_ramp8(127, -127);
        assert_eq!(ramp[0], 1.0);
        assert_eq!(ramp[7], -1.0);
        // -128 clamps to -1 rather than overshooting.
        let ramp = snorm_ramp8(127, -128);
        assert!(ramp[7] >= -1.0);
    }

    #[test]
    fn bc1_four_color_ramp_weights() {
        // c0 > c1 as raw words.
        let c0 = 0xF800u16; // pure red
        let c1 = 0x0000u16;
        let ramp = bc1_ramp(c0, c1);
        assert_eq!(ramp[0], Color::rgb(1.0, 0.0, 0.0));
        assert_eq!(ramp[3], Color::rgb(0.0, 0.0, 0.0));
        let r1 = (lerp64(31, 0, 21)) as f64 / 31.0;
        assert_eq!(ramp[1].r, r1);
        assert_eq!(ramp[1].a, 1.0);
    }

    #[test]
    fn bc1_sentinel_ramp_has_transparent_slot() {
        // c0 <= c1 selects the 3-color ramp.
        let ramp = bc1_ramp(0x0000, 0xF800);
        assert_eq!(ramp[3], Color::TRANSPARENT_BLACK);
        assert_eq!(ramp[1].r, lerp64(0, 31, 32) as f64 / 31.0);
    }
}
