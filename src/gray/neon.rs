use core::arch::aarch64::{
    uint32x4_t, vaddq_u32, vandq_u32, vcvtq_f32_u32, vcvtq_u32_f32, vdivq_f32, vdupq_n_f32,
    vdupq_n_u32, vmulq_u32, vorrq_u32, vreinterpretq_u8_u32, vreinterpretq_u32_u8, vshlq_n_u32,
    vshrq_n_u32,
};

use archmage::prelude::*;
use safe_unaligned_simd::aarch64::{vld1q_u8, vst1q_u8};

use super::{Weights, copy_luma_px, luma_px};

// ===========================================================================
// ARM NEON: 4 pixels per vector
// ===========================================================================

#[rite]
fn luma_vec_neon(_token: NeonToken, v: uint32x4_t, w: Weights) -> uint32x4_t {
    let lo = vdupq_n_u32(0xFF);
    let c0 = vandq_u32(v, lo);
    let c1 = vandq_u32(vshrq_n_u32::<8>(v), lo);
    let c2 = vandq_u32(vshrq_n_u32::<16>(v), lo);
    let alpha = vandq_u32(v, vdupq_n_u32(0xFF00_0000));

    let s01 = vaddq_u32(
        vmulq_u32(c0, vdupq_n_u32(w[0])),
        vmulq_u32(c1, vdupq_n_u32(w[1])),
    );
    let s2 = vaddq_u32(vmulq_u32(c2, vdupq_n_u32(w[2])), vdupq_n_u32(500));
    let sum = vcvtq_f32_u32(vaddq_u32(s01, s2));
    let y = vcvtq_u32_f32(vdivq_f32(sum, vdupq_n_f32(1000.0)));

    let yy = vorrq_u32(y, vshlq_n_u32::<8>(y));
    vorrq_u32(alpha, vorrq_u32(yy, vshlq_n_u32::<16>(y)))
}

#[rite]
pub(super) fn luma_row_neon(token: NeonToken, row: &mut [u8], w: Weights) {
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let v = vreinterpretq_u32_u8(vld1q_u8(arr));
        let gray = vreinterpretq_u8_u32(luma_vec_neon(token, v, w));
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        vst1q_u8(out, gray);
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        luma_px(px, w);
    }
}

#[rite]
pub(super) fn copy_luma_row_neon(token: NeonToken, src: &[u8], dst: &mut [u8], w: Weights) {
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let v = vreinterpretq_u32_u8(vld1q_u8(s));
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        vst1q_u8(d, vreinterpretq_u8_u32(luma_vec_neon(token, v, w)));
        i += 16;
    }
    for (s, d) in src[i..].chunks_exact(4).zip(dst[i..].chunks_exact_mut(4)) {
        copy_luma_px(s, d, w);
    }
}

// ===========================================================================
// ARM arcane wrappers (dispatch targets for incant!)
// ===========================================================================

#[arcane]
pub(super) fn luma_impl_neon(t: NeonToken, b: &mut [u8], w: Weights) {
    luma_row_neon(t, b, w);
}
#[arcane]
pub(super) fn copy_luma_impl_neon(t: NeonToken, s: &[u8], d: &mut [u8], w: Weights) {
    copy_luma_row_neon(t, s, d, w);
}
#[arcane]
pub(super) fn luma_strided_neon(
    t: NeonToken,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: Weights,
) {
    for y in 0..height {
        luma_row_neon(t, &mut buf[y * stride..][..width * 4], w);
    }
}
