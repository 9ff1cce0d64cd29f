//! Whole-image grayscale using [`imgref`] types.
//!
//! These functions walk strided images row by row with the SIMD-dispatched
//! kernels from [`crate::gray`]. Padding between rows is never touched. No
//! allocation; the caller owns all buffers.
//!
//! # In place
//!
//! ```rust
//! use rgb::Rgba;
//! use ::imgref::ImgVec;
//! use pallor::imgref;
//!
//! let mut img = ImgVec::new(vec![Rgba::new(0u8, 255, 0, 9); 4], 2, 2);
//! imgref::grayscale_rgba_img(img.as_mut());
//! assert_eq!(img.buf()[3], Rgba::new(150, 150, 150, 9));
//! ```
//!
//! # Copy (caller provides destination)
//!
//! ```rust
//! use ::imgref::{ImgVec, ImgRefMut};
//! use pallor::{imgref, pixel};
//!
//! let src = ImgVec::new(vec![pixel::pack_argb(255, 255, 0, 0); 4], 2, 2);
//! let mut dst_buf = vec![0u32; 4];
//! let dst = ImgRefMut::new(&mut dst_buf, 2, 2);
//! imgref::convert_grayscale_argb(src.as_ref(), dst).unwrap();
//! assert_eq!(dst_buf[0], pixel::pack_argb(255, 76, 76, 76));
//! ```

use alloc::vec::Vec;

use imgref::{ImgRef, ImgRefMut, ImgVec};
use rgb::{Bgra, Rgba};

use crate::SizeError;
use crate::buffer::PixelBuffer;

// ---------------------------------------------------------------------------
// Dimension check
// ---------------------------------------------------------------------------

fn check_dims(sw: usize, sh: usize, dw: usize, dh: usize) -> Result<(), SizeError> {
    if sw != dw || sh != dh {
        Err(SizeError::DimensionMismatch)
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// In place
// ---------------------------------------------------------------------------

/// Grayscale a strided packed-ARGB image in place.
pub fn grayscale_argb_img(mut img: ImgRefMut<'_, u32>) {
    for row in img.rows_mut() {
        crate::gray::grayscale_argb_inplace(row);
    }
}

/// Grayscale an `ImgRefMut<Rgba<u8>>` in place, keeping alpha.
pub fn grayscale_rgba_img(mut img: ImgRefMut<'_, Rgba<u8>>) {
    for row in img.rows_mut() {
        crate::typed_rgb::grayscale_rgba_mut(row);
    }
}

/// Grayscale an `ImgRefMut<Bgra<u8>>` in place, keeping alpha.
pub fn grayscale_bgra_img(mut img: ImgRefMut<'_, Bgra<u8>>) {
    for row in img.rows_mut() {
        crate::typed_rgb::grayscale_bgra_mut(row);
    }
}

// ---------------------------------------------------------------------------
// Copy
// ---------------------------------------------------------------------------

/// Grayscale `ImgRef<u32>` (packed ARGB) into `ImgRefMut<u32>`.
pub fn convert_grayscale_argb(
    src: ImgRef<'_, u32>,
    mut dst: ImgRefMut<'_, u32>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    for (s, d) in src.rows().zip(dst.rows_mut()) {
        crate::gray::grayscale_argb(s, d)?;
    }
    Ok(())
}

/// Grayscale `ImgRef<Rgba<u8>>` into `ImgRefMut<Rgba<u8>>`.
pub fn convert_grayscale_rgba(
    src: ImgRef<'_, Rgba<u8>>,
    mut dst: ImgRefMut<'_, Rgba<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    for (s, d) in src.rows().zip(dst.rows_mut()) {
        crate::typed_rgb::grayscale_rgba_buf(s, d)?;
    }
    Ok(())
}

/// Grayscale `ImgRef<Bgra<u8>>` into `ImgRefMut<Bgra<u8>>`.
pub fn convert_grayscale_bgra(
    src: ImgRef<'_, Bgra<u8>>,
    mut dst: ImgRefMut<'_, Bgra<u8>>,
) -> Result<(), SizeError> {
    check_dims(src.width(), src.height(), dst.width(), dst.height())?;
    for (s, d) in src.rows().zip(dst.rows_mut()) {
        crate::typed_rgb::grayscale_bgra_buf(s, d)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// PixelBuffer ↔ imgref
// ---------------------------------------------------------------------------

/// Row stride for a tightly packed image. imgref rejects a zero stride, so a
/// zero-width image gets 1.
#[inline]
fn packed_stride(width: usize) -> usize {
    width.max(1)
}

impl PixelBuffer {
    /// Borrow as an [`ImgRef`] (stride = width).
    pub fn as_img(&self) -> ImgRef<'_, u32> {
        let (w, h) = (self.width() as usize, self.height() as usize);
        ImgRef::new_stride(self.pixels(), w, h, packed_stride(w))
    }

    /// Borrow mutably as an [`ImgRefMut`] (stride = width).
    pub fn as_img_mut(&mut self) -> ImgRefMut<'_, u32> {
        let (w, h) = (self.width() as usize, self.height() as usize);
        ImgRefMut::new_stride(self.pixels_mut(), w, h, packed_stride(w))
    }

    /// Take ownership of a packed-ARGB [`ImgVec`], dropping any row padding.
    ///
    /// Fails only if a dimension does not fit in `u32`.
    pub fn from_img(img: ImgVec<u32>) -> Result<Self, SizeError> {
        let w = u32::try_from(img.width()).map_err(|_| SizeError::DimensionMismatch)?;
        let h = u32::try_from(img.height()).map_err(|_| SizeError::DimensionMismatch)?;
        let n = img.width() * img.height();
        let pixels: Vec<u32> = if img.stride() == img.width() && img.buf().len() == n {
            img.into_buf()
        } else {
            img.as_ref().rows().flat_map(|row| row.iter().copied()).collect()
        };
        PixelBuffer::new(w, h, pixels)
    }
}

impl From<PixelBuffer> for ImgVec<u32> {
    fn from(buffer: PixelBuffer) -> Self {
        let (w, h) = (buffer.width() as usize, buffer.height() as usize);
        ImgVec::new_stride(buffer.into_pixels(), w, h, packed_stride(w))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
