use core::arch::x86_64::__m256i;

use archmage::prelude::*;
use safe_unaligned_simd::x86_64::{_mm256_loadu_si256, _mm256_storeu_si256};

use super::{Weights, copy_luma_px, luma_px};

// ===========================================================================
// x86-64 AVX2: 8 pixels per vector
// ===========================================================================

/// Luma of eight 4-byte pixels held as u32 lanes. Alpha (byte 3) passes through.
///
/// The weighted sum is exact in i32 (max 255 500). Dividing by 1000 in f32 and
/// truncating equals integer division for every sum below 2^24, so this
/// matches the scalar tier bit for bit.
#[rite]
fn luma_vec_v3(_token: X64V3Token, v: __m256i, w: Weights) -> __m256i {
    let lo = _mm256_set1_epi32(0xFF);
    let c0 = _mm256_and_si256(v, lo);
    let c1 = _mm256_and_si256(_mm256_srli_epi32::<8>(v), lo);
    let c2 = _mm256_and_si256(_mm256_srli_epi32::<16>(v), lo);
    let alpha = _mm256_and_si256(v, _mm256_set1_epi32(0xFF00_0000u32 as i32));

    let s01 = _mm256_add_epi32(
        _mm256_mullo_epi32(c0, _mm256_set1_epi32(w[0] as i32)),
        _mm256_mullo_epi32(c1, _mm256_set1_epi32(w[1] as i32)),
    );
    let s2 = _mm256_add_epi32(
        _mm256_mullo_epi32(c2, _mm256_set1_epi32(w[2] as i32)),
        _mm256_set1_epi32(500),
    );
    let sum = _mm256_cvtepi32_ps(_mm256_add_epi32(s01, s2));
    let y = _mm256_cvttps_epi32(_mm256_div_ps(sum, _mm256_set1_ps(1000.0)));

    let yy = _mm256_or_si256(y, _mm256_slli_epi32::<8>(y));
    _mm256_or_si256(alpha, _mm256_or_si256(yy, _mm256_slli_epi32::<16>(y)))
}

#[rite]
pub(super) fn luma_row_v3(token: X64V3Token, row: &mut [u8], w: Weights) {
    let n = row.len();
    let mut i = 0;
    while i + 32 <= n {
        let arr: &[u8; 32] = row[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(arr);
        let gray = luma_vec_v3(token, v, w);
        let out: &mut [u8; 32] = (&mut row[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(out, gray);
        i += 32;
    }
    for px in row[i..].chunks_exact_mut(4) {
        luma_px(px, w);
    }
}

#[rite]
pub(super) fn copy_luma_row_v3(token: X64V3Token, src: &[u8], dst: &mut [u8], w: Weights) {
    let n = src.len().min(dst.len());
    let mut i = 0;
    while i + 32 <= n {
        let s: &[u8; 32] = src[i..i + 32].try_into().unwrap();
        let v = _mm256_loadu_si256(s);
        let d: &mut [u8; 32] = (&mut dst[i..i + 32]).try_into().unwrap();
        _mm256_storeu_si256(d, luma_vec_v3(token, v, w));
        i += 32;
    }
    for (s, d) in src[i..].chunks_exact(4).zip(dst[i..].chunks_exact_mut(4)) {
        copy_luma_px(s, d, w);
    }
}

// ===========================================================================
// x86-64 arcane wrappers (dispatch targets for incant!)
// ===========================================================================

#[arcane]
pub(super) fn luma_impl_v3(t: X64V3Token, b: &mut [u8], w: Weights) {
    luma_row_v3(t, b, w);
}
#[arcane]
pub(super) fn copy_luma_impl_v3(t: X64V3Token, s: &[u8], d: &mut [u8], w: Weights) {
    copy_luma_row_v3(t, s, d, w);
}
#[arcane]
pub(super) fn luma_strided_v3(
    t: X64V3Token,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: Weights,
) {
    for y in 0..height {
        luma_row_v3(t, &mut buf[y * stride..][..width * 4], w);
    }
}
