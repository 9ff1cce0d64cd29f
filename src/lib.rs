//! # pallor
//!
//! *Drain the color from your pixels.*
//!
//! In-place grayscale for packed 32-bit ARGB pixel buffers, with a tiny
//! toggle controller for "tap to see it in black and white" viewers.
//! SIMD-optimized for x86-64 AVX2, ARM NEON, and WASM SIMD128 with
//! automatic fallback to scalar code. Every tier produces identical output.
//!
//! The luma formula is Rec. 601, rounded half up:
//! `Y = round(0.299·R + 0.587·G + 0.114·B)`. Alpha is never touched.
//!
//! ```rust
//! use pallor::{PixelBuffer, grayscale, pixel};
//!
//! let red = pixel::pack_argb(255, 255, 0, 0);
//! let mut img = PixelBuffer::filled(4, 4, red);
//! grayscale(&mut img);
//! assert_eq!(img[(0, 0)], pixel::pack_argb(255, 76, 76, 76));
//! ```
//!
//! ## Core operations (always available)
//!
//! - [`PixelBuffer`]: owned `width × height` raster of packed ARGB `u32`s.
//! - [`grayscale`] / [`grayscale_argb_inplace`]: the in-place transform.
//! - [`FilterToggle`]: keeps a pristine original next to a scratch copy so a
//!   destructive transform can be toggled on and off.
//! - [`gray`]: slice-level, strided and byte-order-specific kernels.
//!
//! ## Feature flags
//!
//! - **`rgb`**: Grayscale `Rgba<u8>` / `Bgra<u8>` slices from the [`rgb`]
//!   crate via bytemuck.
//! - **`imgref`**: Whole-image (strided) grayscale using [`imgref`] types,
//!   plus `PixelBuffer` ↔ `ImgVec<u32>` conversions. Implies `rgb`.

#![no_std]
#![forbid(unsafe_code)]

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

use core::fmt;

pub mod buffer;
pub mod gray;
pub mod pixel;
pub mod toggle;

pub use buffer::PixelBuffer;
pub use gray::{grayscale, grayscale_argb, grayscale_argb_inplace};
pub use toggle::{FilterToggle, ToggleState};

#[cfg(feature = "rgb")]
pub mod typed_rgb;

#[cfg(feature = "imgref")]
pub mod imgref;

/// Pixel buffer size or dimension validation error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum SizeError {
    /// Byte buffer length is not a multiple of 4 (one packed pixel).
    NotPixelAligned,
    /// Destination holds fewer pixels than the source.
    PixelCountMismatch,
    /// Stride, width, or height is inconsistent with the buffer length.
    InvalidStride,
    /// Pixel count does not equal `width × height`, or two images differ in size.
    DimensionMismatch,
}

impl fmt::Display for SizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizeError::NotPixelAligned => {
                f.write_str("buffer length is not a multiple of 4 bytes per pixel")
            }
            SizeError::PixelCountMismatch => {
                f.write_str("destination buffer holds fewer pixels than the source")
            }
            SizeError::InvalidStride => {
                f.write_str("stride, width, or height does not fit the buffer")
            }
            SizeError::DimensionMismatch => {
                f.write_str("pixel count does not match width × height")
            }
        }
    }
}

impl core::error::Error for SizeError {}
