//! Packed ARGB pixel helpers and the single-pixel luma formula.
//!
//! A packed pixel is a `u32` laid out as `A << 24 | R << 16 | G << 8 | B`,
//! the same layout Android's `Bitmap.getPixels` and most framebuffer APIs
//! hand out. These helpers work on the integer value, so they are
//! independent of target endianness.

/// Red weight, in thousandths.
pub const LUMA_R: u32 = 299;
/// Green weight, in thousandths.
pub const LUMA_G: u32 = 587;
/// Blue weight, in thousandths.
pub const LUMA_B: u32 = 114;

/// Pack four 8-bit channels into one ARGB `u32`.
#[inline(always)]
pub const fn pack_argb(a: u8, r: u8, g: u8, b: u8) -> u32 {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Split an ARGB `u32` into `[a, r, g, b]`.
#[inline(always)]
pub const fn unpack_argb(v: u32) -> [u8; 4] {
    v.to_be_bytes()
}

#[inline(always)]
pub const fn alpha(v: u32) -> u8 {
    (v >> 24) as u8
}

#[inline(always)]
pub const fn red(v: u32) -> u8 {
    (v >> 16) as u8
}

#[inline(always)]
pub const fn green(v: u32) -> u8 {
    (v >> 8) as u8
}

#[inline(always)]
pub const fn blue(v: u32) -> u8 {
    v as u8
}

/// Rec. 601 luma, rounded half up: `round(0.299·R + 0.587·G + 0.114·B)`.
///
/// Computed exactly in integer arithmetic. The weights sum to 1000, so the
/// result is always in `0..=255` and `luma(y, y, y) == y`.
#[inline(always)]
pub const fn luma(r: u8, g: u8, b: u8) -> u8 {
    luma_weighted(r, g, b, [LUMA_R, LUMA_G, LUMA_B])
}

/// Weighted sum of three 8-bit channels with weights in thousandths,
/// rounded half up. Weights must sum to 1000.
#[inline(always)]
pub(crate) const fn luma_weighted(c0: u8, c1: u8, c2: u8, w: [u32; 3]) -> u8 {
    ((c0 as u32 * w[0] + c1 as u32 * w[1] + c2 as u32 * w[2] + 500) / 1000) as u8
}

/// Grayscale one packed ARGB pixel, keeping its alpha.
#[inline(always)]
pub const fn grayscale_px(v: u32) -> u32 {
    let y = luma(red(v), green(v), blue(v)) as u32;
    (v & 0xFF00_0000) | y << 16 | y << 8 | y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_unpack() {
        let v = pack_argb(0x12, 0x34, 0x56, 0x78);
        assert_eq!(v, 0x1234_5678);
        assert_eq!(unpack_argb(v), [0x12, 0x34, 0x56, 0x78]);
        assert_eq!((alpha(v), red(v), green(v), blue(v)), (0x12, 0x34, 0x56, 0x78));
    }

    #[test]
    fn luma_primaries() {
        assert_eq!(luma(255, 0, 0), 76);
        assert_eq!(luma(0, 255, 0), 150);
        assert_eq!(luma(0, 0, 255), 29);
        assert_eq!(luma(255, 255, 255), 255);
        assert_eq!(luma(0, 0, 0), 0);
    }

    #[test]
    fn luma_of_gray_is_identity() {
        for y in 0..=255u8 {
            assert_eq!(luma(y, y, y), y);
        }
    }

    #[test]
    fn luma_rounds_half_up() {
        // 0.114·250 = 28.5 exactly
        assert_eq!(luma(0, 0, 250), 29);
        // 0.299·2 + 0.114·43 = 5.5 exactly
        assert_eq!(luma(2, 0, 43), 6);
        // 2.99 → 3
        assert_eq!(luma(10, 0, 0), 3);
        assert_eq!(luma(0, 0, 5), 1);
        // 0.114·4 = 0.456 → 0
        assert_eq!(luma(0, 0, 4), 0);
    }

    #[test]
    fn grayscale_px_keeps_alpha() {
        assert_eq!(
            grayscale_px(pack_argb(255, 255, 0, 0)),
            pack_argb(255, 76, 76, 76)
        );
        assert_eq!(
            grayscale_px(pack_argb(0, 0, 0, 255)),
            pack_argb(0, 29, 29, 29)
        );
        assert_eq!(
            grayscale_px(pack_argb(7, 0, 255, 0)),
            pack_argb(7, 150, 150, 150)
        );
    }
}
