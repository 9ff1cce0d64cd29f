use core::arch::wasm32::{
    f32x4_convert_u32x4, f32x4_div, f32x4_splat, i32x4_add, i32x4_mul, i32x4_shl, u32x4_shr,
    u32x4_splat, u32x4_trunc_sat_f32x4, v128, v128_and, v128_or,
};

use archmage::prelude::*;
use safe_unaligned_simd::wasm32::{v128_load, v128_store};

use super::{Weights, copy_luma_px, luma_px};

// ===========================================================================
// WASM SIMD128: 4 pixels per vector
// ===========================================================================

#[rite]
fn luma_vec_wasm128(_token: Wasm128Token, v: v128, w: Weights) -> v128 {
    let lo = u32x4_splat(0xFF);
    let c0 = v128_and(v, lo);
    let c1 = v128_and(u32x4_shr(v, 8), lo);
    let c2 = v128_and(u32x4_shr(v, 16), lo);
    let alpha = v128_and(v, u32x4_splat(0xFF00_0000));

    let s01 = i32x4_add(
        i32x4_mul(c0, u32x4_splat(w[0])),
        i32x4_mul(c1, u32x4_splat(w[1])),
    );
    let s2 = i32x4_add(i32x4_mul(c2, u32x4_splat(w[2])), u32x4_splat(500));
    let sum = f32x4_convert_u32x4(i32x4_add(s01, s2));
    let y = u32x4_trunc_sat_f32x4(f32x4_div(sum, f32x4_splat(1000.0)));

    let yy = v128_or(y, i32x4_shl(y, 8));
    v128_or(alpha, v128_or(yy, i32x4_shl(y, 16)))
}

#[rite]
pub(super) fn luma_row_wasm128(token: Wasm128Token, row: &mut [u8], w: Weights) {
    let n = row.len();
    let mut i = 0;
    while i + 16 <= n {
        let arr: &[u8; 16] = row[i..i + 16].try_into().unwrap();
        let gray = luma_vec_wasm128(token, v128_load(arr), w);
        let out: &mut [u8; 16] = (&mut row[i..i + 16]).try_into().unwrap();
        v128_store(out, gray);
        i += 16;
    }
    for px in row[i..].chunks_exact_mut(4) {
        luma_px(px, w);
    }
}

#[rite]
pub(super) fn copy_luma_row_wasm128(token: Wasm128Token, src: &[u8], dst: &mut [u8], w: Weights) {
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 16 <= n {
        let s: &[u8; 16] = src[i..i + 16].try_into().unwrap();
        let d: &mut [u8; 16] = (&mut dst[i..i + 16]).try_into().unwrap();
        v128_store(d, luma_vec_wasm128(token, v128_load(s), w));
        i += 16;
    }
    for (s, d) in src[i..].chunks_exact(4).zip(dst[i..].chunks_exact_mut(4)) {
        copy_luma_px(s, d, w);
    }
}

// ===========================================================================
// WASM arcane wrappers (dispatch targets for incant!)
// ===========================================================================

#[arcane]
pub(super) fn luma_impl_wasm128(t: Wasm128Token, b: &mut [u8], w: Weights) {
    luma_row_wasm128(t, b, w);
}
#[arcane]
pub(super) fn copy_luma_impl_wasm128(t: Wasm128Token, s: &[u8], d: &mut [u8], w: Weights) {
    copy_luma_row_wasm128(t, s, d, w);
}
#[arcane]
pub(super) fn luma_strided_wasm128(
    t: Wasm128Token,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: Weights,
) {
    for y in 0..height {
        luma_row_wasm128(t, &mut buf[y * stride..][..width * 4], w);
    }
}
