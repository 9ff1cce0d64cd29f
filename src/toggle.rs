//! Tap-to-toggle between an image and its grayscale version.
//!
//! [`grayscale`](crate::grayscale) destroys the colors it reads, so a viewer
//! that flips back and forth needs the original kept aside. [`FilterToggle`]
//! owns an untouched original plus one scratch buffer of the same size; the
//! scratch is refilled from the original before every transform, so nothing
//! is allocated after construction.
//!
//! ```rust
//! use pallor::{FilterToggle, PixelBuffer, ToggleState, pixel};
//!
//! let img = PixelBuffer::filled(2, 2, pixel::pack_argb(255, 255, 0, 0));
//! let mut toggle = FilterToggle::new(img.clone());
//!
//! let shown = toggle.activate();
//! assert_eq!(shown[(0, 0)], pixel::pack_argb(255, 76, 76, 76));
//! assert_eq!(toggle.state(), ToggleState::Filtered);
//!
//! assert_eq!(toggle.activate(), &img);
//! assert_eq!(toggle.state(), ToggleState::Original);
//! ```

use crate::buffer::PixelBuffer;
use crate::gray::grayscale_argb;

/// Which image a [`FilterToggle`] is showing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ToggleState {
    #[default]
    Original,
    Filtered,
}

impl ToggleState {
    /// The state one activation leads to.
    #[inline]
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            ToggleState::Original => ToggleState::Filtered,
            ToggleState::Filtered => ToggleState::Original,
        }
    }
}

/// Original image, grayscale scratch copy, and which of the two is on screen.
#[derive(Clone, Debug)]
pub struct FilterToggle {
    original: PixelBuffer,
    scratch: PixelBuffer,
    state: ToggleState,
}

impl FilterToggle {
    /// Start in [`ToggleState::Original`], showing `original`.
    pub fn new(original: PixelBuffer) -> Self {
        let scratch = original.clone();
        Self {
            original,
            scratch,
            state: ToggleState::Original,
        }
    }

    /// Handle one user activation and return the buffer to display next.
    ///
    /// From `Original`: grayscale a fresh copy of the original and show it.
    /// From `Filtered`: show the original again.
    pub fn activate(&mut self) -> &PixelBuffer {
        self.state = self.state.toggled();
        if self.state == ToggleState::Filtered {
            grayscale_argb(self.original.pixels(), self.scratch.pixels_mut())
                .expect("scratch always matches the original's size");
        }
        self.displayed()
    }

    #[inline]
    pub fn state(&self) -> ToggleState {
        self.state
    }

    /// The buffer that should currently be on screen.
    pub fn displayed(&self) -> &PixelBuffer {
        match self.state {
            ToggleState::Original => &self.original,
            ToggleState::Filtered => &self.scratch,
        }
    }

    /// The untouched original image.
    #[inline]
    pub fn original(&self) -> &PixelBuffer {
        &self.original
    }

    /// Give back the original image.
    pub fn into_original(self) -> PixelBuffer {
        self.original
    }
}
