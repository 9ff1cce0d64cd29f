//! Owned packed-ARGB raster.

use alloc::vec;
use alloc::vec::Vec;
use core::ops::{Index, IndexMut};

use crate::SizeError;

/// A `width × height` image of packed ARGB `u32` pixels, row-major, no padding.
///
/// The pixel count always equals `width × height`; there is no way to resize
/// the buffer after construction. [`pixels_mut`](Self::pixels_mut) hands out a
/// slice, so callers can rewrite pixels but never change the length.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    pixels: Vec<u32>,
}

#[inline]
fn pixel_count(width: u32, height: u32) -> Option<usize> {
    (width as usize).checked_mul(height as usize)
}

impl PixelBuffer {
    /// Wrap decoded pixels. Fails unless `pixels.len() == width × height`.
    pub fn new(width: u32, height: u32, pixels: Vec<u32>) -> Result<Self, SizeError> {
        match pixel_count(width, height) {
            Some(n) if n == pixels.len() => Ok(Self {
                width,
                height,
                pixels,
            }),
            _ => Err(SizeError::DimensionMismatch),
        }
    }

    /// A buffer with every pixel set to `argb`.
    ///
    /// # Panics
    ///
    /// If `width × height` overflows `usize`.
    pub fn filled(width: u32, height: u32, argb: u32) -> Self {
        let n = pixel_count(width, height).expect("width × height overflows usize");
        Self {
            width,
            height,
            pixels: vec![argb; n],
        }
    }

    /// A buffer whose pixel at `(x, y)` is `f(x, y)`, filled in raster order.
    ///
    /// # Panics
    ///
    /// If `width × height` overflows `usize`.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> u32) -> Self {
        let n = pixel_count(width, height).expect("width × height overflows usize");
        let mut pixels = Vec::with_capacity(n);
        for y in 0..height {
            for x in 0..width {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pixels (`width × height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    #[inline]
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    pub fn into_pixels(self) -> Vec<u32> {
        self.pixels
    }

    /// Pixel at `(x, y)`, or `None` outside the image.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<u32> {
        if x < self.width && y < self.height {
            Some(self.pixels[self.offset(x, y)])
        } else {
            None
        }
    }

    /// Rows top to bottom, each `width` pixels long.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u32]> + '_ {
        // chunks_exact(0) panics; a zero-width image yields no rows.
        let w = (self.width as usize).max(1);
        let rows = if self.width == 0 { 0 } else { self.height as usize };
        self.pixels.chunks_exact(w).take(rows)
    }

    /// Mutable rows top to bottom, each `width` pixels long.
    pub fn rows_mut(&mut self) -> impl ExactSizeIterator<Item = &mut [u32]> + '_ {
        let w = (self.width as usize).max(1);
        let rows = if self.width == 0 { 0 } else { self.height as usize };
        self.pixels.chunks_exact_mut(w).take(rows)
    }

    /// Overwrite every pixel with the pixels of `other`.
    ///
    /// Fails if the dimensions differ. No allocation.
    pub fn copy_from(&mut self, other: &PixelBuffer) -> Result<(), SizeError> {
        if self.width != other.width || self.height != other.height {
            return Err(SizeError::DimensionMismatch);
        }
        self.pixels.copy_from_slice(&other.pixels);
        Ok(())
    }

    #[inline(always)]
    fn offset(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    #[inline(always)]
    #[track_caller]
    fn checked_offset(&self, x: u32, y: u32) -> usize {
        assert!(
            x < self.width && y < self.height,
            "pixel ({x}, {y}) is outside a {}×{} buffer",
            self.width,
            self.height
        );
        self.offset(x, y)
    }
}

impl Index<(u32, u32)> for PixelBuffer {
    type Output = u32;

    #[track_caller]
    fn index(&self, (x, y): (u32, u32)) -> &u32 {
        &self.pixels[self.checked_offset(x, y)]
    }
}

impl IndexMut<(u32, u32)> for PixelBuffer {
    #[track_caller]
    fn index_mut(&mut self, (x, y): (u32, u32)) -> &mut u32 {
        let i = self.checked_offset(x, y);
        &mut self.pixels[i]
    }
}

impl AsRef<[u32]> for PixelBuffer {
    fn as_ref(&self) -> &[u32] {
        &self.pixels
    }
}

impl AsMut<[u32]> for PixelBuffer {
    fn as_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_checks_length() {
        assert!(PixelBuffer::new(2, 3, vec![0; 6]).is_ok());
        assert_eq!(
            PixelBuffer::new(2, 3, vec![0; 5]),
            Err(SizeError::DimensionMismatch)
        );
        assert_eq!(
            PixelBuffer::new(2, 3, vec![0; 7]),
            Err(SizeError::DimensionMismatch)
        );
        let empty = PixelBuffer::new(0, 0, Vec::new()).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn index_is_row_major() {
        let img = PixelBuffer::from_fn(3, 2, |x, y| y * 10 + x);
        assert_eq!(img.pixels(), &[0, 1, 2, 10, 11, 12]);
        assert_eq!(img[(2, 1)], 12);
        assert_eq!(img.get(0, 1), Some(10));
        assert_eq!(img.get(3, 0), None);
        assert_eq!(img.get(0, 2), None);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn index_out_of_range_panics() {
        let img = PixelBuffer::filled(3, 2, 0);
        let _ = img[(3, 0)];
    }

    #[test]
    fn index_mut_writes_in_place() {
        let mut img = PixelBuffer::filled(2, 2, 0);
        img[(1, 1)] = 0xDEAD_BEEF;
        assert_eq!(img.pixels()[3], 0xDEAD_BEEF);
    }

    #[test]
    fn rows() {
        let mut img = PixelBuffer::from_fn(2, 3, |x, y| x + y * 2);
        let rows: Vec<&[u32]> = img.rows().collect();
        assert_eq!(rows, vec![&[0u32, 1][..], &[2, 3][..], &[4, 5][..]]);
        for row in img.rows_mut() {
            row[0] = 9;
        }
        assert_eq!(img.pixels(), &[9, 1, 9, 3, 9, 5]);

        let empty = PixelBuffer::filled(0, 4, 0);
        assert_eq!(empty.rows().count(), 0);
    }

    #[test]
    fn copy_from_requires_same_dims() {
        let src = PixelBuffer::from_fn(2, 2, |x, y| x + y);
        let mut dst = PixelBuffer::filled(2, 2, 7);
        dst.copy_from(&src).unwrap();
        assert_eq!(dst, src);
        let mut other = PixelBuffer::filled(4, 1, 7);
        assert_eq!(other.copy_from(&src), Err(SizeError::DimensionMismatch));
        assert_eq!(other.pixels(), &[7; 4]);
    }

    #[test]
    fn clone_is_independent() {
        let original = PixelBuffer::filled(2, 1, 1);
        let mut copy = original.clone();
        copy.pixels_mut()[0] = 2;
        assert_eq!(original.pixels(), &[1, 1]);
    }
}
