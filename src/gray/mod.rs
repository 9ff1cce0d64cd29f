// ---------------------------------------------------------------------------
// Row-level grayscale with SIMD dispatch.
//
// Architecture: #[rite] row functions contain the SIMD loops.
// #[arcane] wrappers dispatch via incant!: contiguous (single call)
// and strided (loop over rows, single dispatch).
//
// Kernels see 4-byte pixels with alpha in byte 3. `Weights` says which of
// bytes 0..3 is red, green, blue. SIMD tiers load those bytes as
// little-endian u32 lanes: lane = b0 | b1 << 8 | b2 << 16 | b3 << 24.
// ---------------------------------------------------------------------------

//! Grayscale kernels.
//!
//! Entry points come in three shapes:
//!
//! - **Packed ARGB `u32`** ([`grayscale_argb_inplace`], [`grayscale_argb`],
//!   [`grayscale_argb_inplace_strided`]): the layout [`PixelBuffer`] stores.
//!   Endian-independent.
//! - **Byte rows** in B,G,R,A or R,G,B,A order ([`grayscale_bgra_inplace`],
//!   [`grayscale_rgba_inplace`] and friends).
//! - **Whole buffer**: [`grayscale`].
//!
//! Every pixel becomes `Y = round(0.299·R + 0.587·G + 0.114·B)` in all three
//! color channels; alpha is copied through. Empty input is a no-op.

use archmage::incant;

use crate::SizeError;
use crate::buffer::PixelBuffer;
use crate::pixel::{LUMA_B, LUMA_G, LUMA_R, luma_weighted};

mod scalar;
use scalar::*;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "x86_64")]
use avx2::*;

#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "aarch64")]
use neon::*;

#[cfg(target_arch = "wasm32")]
mod wasm;
#[cfg(target_arch = "wasm32")]
use wasm::*;


/// Luma weights in thousandths for bytes 0, 1, 2 of a 4-byte pixel.
type Weights = [u32; 3];

const BGRA: Weights = [LUMA_B, LUMA_G, LUMA_R];
const RGBA: Weights = [LUMA_R, LUMA_G, LUMA_B];

// ===========================================================================
// Validation helpers
// ===========================================================================

#[inline]
fn check_inplace(len: usize) -> Result<(), SizeError> {
    if !len.is_multiple_of(4) {
        Err(SizeError::NotPixelAligned)
    } else {
        Ok(())
    }
}

#[inline]
fn check_copy(src_len: usize, dst_len: usize, bpp: usize) -> Result<(), SizeError> {
    if !src_len.is_multiple_of(bpp) {
        return Err(SizeError::NotPixelAligned);
    }
    if dst_len < src_len {
        return Err(SizeError::PixelCountMismatch);
    }
    Ok(())
}

#[inline]
fn check_strided(
    len: usize,
    width: usize,
    height: usize,
    stride: usize,
    bpp: usize,
) -> Result<(), SizeError> {
    if width == 0 || height == 0 {
        return Err(SizeError::InvalidStride);
    }
    let row = width.checked_mul(bpp).ok_or(SizeError::InvalidStride)?;
    if row > stride {
        return Err(SizeError::InvalidStride);
    }
    let total = (height - 1)
        .checked_mul(stride)
        .ok_or(SizeError::InvalidStride)?
        .checked_add(row)
        .ok_or(SizeError::InvalidStride)?;
    if len < total {
        return Err(SizeError::InvalidStride);
    }
    Ok(())
}

// ===========================================================================
// Per-pixel fallbacks (remainders and scalar tier)
// ===========================================================================

#[inline(always)]
fn luma_px(px: &mut [u8], w: Weights) {
    let y = luma_weighted(px[0], px[1], px[2], w);
    px[0] = y;
    px[1] = y;
    px[2] = y;
}

#[inline(always)]
fn copy_luma_px(s: &[u8], d: &mut [u8], w: Weights) {
    let y = luma_weighted(s[0], s[1], s[2], w);
    d[0] = y;
    d[1] = y;
    d[2] = y;
    d[3] = s[3];
}

// ===========================================================================
// Dispatch: byte rows
// ===========================================================================

#[inline]
fn luma_bytes(buf: &mut [u8], w: Weights) {
    if buf.is_empty() {
        return;
    }
    incant!(luma_impl(buf, w), [v3, neon, wasm128, scalar]);
}

#[inline]
fn copy_luma_bytes(src: &[u8], dst: &mut [u8], w: Weights) {
    if src.is_empty() {
        return;
    }
    incant!(copy_luma_impl(src, dst, w), [v3, neon, wasm128, scalar]);
}

#[inline]
fn luma_bytes_strided(buf: &mut [u8], width: usize, height: usize, stride: usize, w: Weights) {
    incant!(
        luma_strided(buf, width, height, stride, w),
        [v3, neon, wasm128, scalar]
    );
}

// ===========================================================================
// Public API: packed ARGB u32
// ===========================================================================

/// Grayscale every pixel of `buffer` in place.
///
/// One synchronous raster sweep; no allocation. The previous colors are gone
/// afterwards, so keep a copy (or use [`FilterToggle`](crate::FilterToggle))
/// if they need to come back.
pub fn grayscale(buffer: &mut PixelBuffer) {
    grayscale_argb_inplace(buffer.pixels_mut());
}

/// Grayscale packed ARGB pixels in place. An empty slice is a no-op.
#[cfg(target_endian = "little")]
pub fn grayscale_argb_inplace(pixels: &mut [u32]) {
    // A little-endian ARGB u32 is B,G,R,A in memory.
    luma_bytes(bytemuck::cast_slice_mut(pixels), BGRA);
}

/// Grayscale packed ARGB pixels in place. An empty slice is a no-op.
#[cfg(target_endian = "big")]
pub fn grayscale_argb_inplace(pixels: &mut [u32]) {
    for px in pixels {
        *px = crate::pixel::grayscale_px(*px);
    }
}

/// Grayscale packed ARGB pixels from `src` into the front of `dst`.
///
/// `dst` must hold at least `src.len()` pixels; the rest is left alone.
pub fn grayscale_argb(src: &[u32], dst: &mut [u32]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len(), 1)?;
    #[cfg(target_endian = "little")]
    copy_luma_bytes(
        bytemuck::cast_slice(src),
        bytemuck::cast_slice_mut(&mut dst[..src.len()]),
        BGRA,
    );
    #[cfg(target_endian = "big")]
    for (s, d) in src.iter().zip(dst.iter_mut()) {
        *d = crate::pixel::grayscale_px(*s);
    }
    Ok(())
}

/// Grayscale a strided packed-ARGB image in place.
///
/// `stride` is the distance in **pixels** between the start of consecutive
/// rows and must be ≥ `width`. Padding pixels between rows are never read or
/// written. The buffer must hold at least `(height - 1) * stride + width`
/// pixels.
pub fn grayscale_argb_inplace_strided(
    buf: &mut [u32],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride, 1)?;
    // With two or more rows `stride` is bounded by `buf.len()`, so the byte
    // stride fits. A single row never steps, and its stride may be anything.
    #[cfg(target_endian = "little")]
    let byte_stride = if height == 1 { width * 4 } else { stride * 4 };
    #[cfg(target_endian = "little")]
    luma_bytes_strided(
        bytemuck::cast_slice_mut(buf),
        width,
        height,
        byte_stride,
        BGRA,
    );
    #[cfg(target_endian = "big")]
    for y in 0..height {
        for px in &mut buf[y * stride..][..width] {
            *px = crate::pixel::grayscale_px(*px);
        }
    }
    Ok(())
}

// ===========================================================================
// Public API: byte rows
// ===========================================================================

/// Grayscale B,G,R,A byte pixels in place.
pub fn grayscale_bgra_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    luma_bytes(buf, BGRA);
    Ok(())
}

/// Grayscale R,G,B,A byte pixels in place.
pub fn grayscale_rgba_inplace(buf: &mut [u8]) -> Result<(), SizeError> {
    check_inplace(buf.len())?;
    luma_bytes(buf, RGBA);
    Ok(())
}

/// Copy B,G,R,A byte pixels, grayscaling them. Alpha is copied unchanged.
pub fn grayscale_bgra(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len(), 4)?;
    copy_luma_bytes(src, &mut dst[..src.len()], BGRA);
    Ok(())
}

/// Copy R,G,B,A byte pixels, grayscaling them. Alpha is copied unchanged.
pub fn grayscale_rgba(src: &[u8], dst: &mut [u8]) -> Result<(), SizeError> {
    check_copy(src.len(), dst.len(), 4)?;
    copy_luma_bytes(src, &mut dst[..src.len()], RGBA);
    Ok(())
}

/// Grayscale a strided B,G,R,A image in place.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or written.
pub fn grayscale_bgra_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride, 4)?;
    luma_bytes_strided(buf, width, height, stride, BGRA);
    Ok(())
}

/// Grayscale a strided R,G,B,A image in place.
///
/// `stride` is the distance in bytes between the start of consecutive rows.
/// Must be ≥ `width × 4`. Padding bytes between rows are never read or written.
pub fn grayscale_rgba_inplace_strided(
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
) -> Result<(), SizeError> {
    check_strided(buf.len(), width, height, stride, 4)?;
    luma_bytes_strided(buf, width, height, stride, RGBA);
    Ok(())
}
