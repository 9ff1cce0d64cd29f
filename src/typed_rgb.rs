//! Type-safe grayscale using [`rgb`] crate pixel types via bytemuck.
//!
//! Everything here reinterprets the typed slice as bytes and runs the
//! SIMD-dispatched kernels from [`crate::gray`]; no copies are made for the
//! in-place variants.
//!
//! ```rust
//! use rgb::Rgba;
//! use pallor::typed_rgb;
//!
//! let mut pixels = vec![Rgba::new(255u8, 0, 0, 200); 100];
//! typed_rgb::grayscale_rgba_mut(&mut pixels);
//! assert_eq!(pixels[0], Rgba::new(76, 76, 76, 200));
//! ```

use crate::SizeError;
use rgb::{Bgra, Rgba};

// ---------------------------------------------------------------------------
// In-place
// ---------------------------------------------------------------------------

/// Grayscale `&mut [Rgba<u8>]` in place, keeping alpha.
pub fn grayscale_rgba_mut(pixels: &mut [Rgba<u8>]) {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::gray::grayscale_rgba_inplace(bytes).expect("typed slice is always valid");
}

/// Grayscale `&mut [Bgra<u8>]` in place, keeping alpha.
pub fn grayscale_bgra_mut(pixels: &mut [Bgra<u8>]) {
    let bytes: &mut [u8] = bytemuck::cast_slice_mut(pixels);
    crate::gray::grayscale_bgra_inplace(bytes).expect("typed slice is always valid");
}

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

/// Copy `&[Rgba<u8>]` into `&mut [Rgba<u8>]`, grayscaling each pixel.
pub fn grayscale_rgba_buf(src: &[Rgba<u8>], dst: &mut [Rgba<u8>]) -> Result<(), SizeError> {
    if dst.len() < src.len() {
        return Err(SizeError::PixelCountMismatch);
    }
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::gray::grayscale_rgba(src_bytes, dst_bytes)
}

/// Copy `&[Bgra<u8>]` into `&mut [Bgra<u8>]`, grayscaling each pixel.
pub fn grayscale_bgra_buf(src: &[Bgra<u8>], dst: &mut [Bgra<u8>]) -> Result<(), SizeError> {
    if dst.len() < src.len() {
        return Err(SizeError::PixelCountMismatch);
    }
    let src_bytes: &[u8] = bytemuck::cast_slice(src);
    let dst_bytes: &mut [u8] = bytemuck::cast_slice_mut(dst);
    crate::gray::grayscale_bgra(src_bytes, dst_bytes)
}
