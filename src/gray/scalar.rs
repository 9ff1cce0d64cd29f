use archmage::prelude::*;

use super::{Weights, copy_luma_px, luma_px};

// ===========================================================================
// Scalar row implementations
// ===========================================================================

pub(super) fn luma_row_scalar(_token: ScalarToken, row: &mut [u8], w: Weights) {
    for px in row.chunks_exact_mut(4) {
        luma_px(px, w);
    }
}

pub(super) fn copy_luma_row_scalar(_token: ScalarToken, src: &[u8], dst: &mut [u8], w: Weights) {
    for (s, d) in src.chunks_exact(4).zip(dst.chunks_exact_mut(4)) {
        copy_luma_px(s, d, w);
    }
}

// ===========================================================================
// Scalar wrappers (dispatch targets for incant!)
// ===========================================================================

pub(super) fn luma_impl_scalar(t: ScalarToken, b: &mut [u8], w: Weights) {
    luma_row_scalar(t, b, w);
}
pub(super) fn copy_luma_impl_scalar(t: ScalarToken, s: &[u8], d: &mut [u8], w: Weights) {
    copy_luma_row_scalar(t, s, d, w);
}
pub(super) fn luma_strided_scalar(
    t: ScalarToken,
    buf: &mut [u8],
    width: usize,
    height: usize,
    stride: usize,
    w: Weights,
) {
    for y in 0..height {
        luma_row_scalar(t, &mut buf[y * stride..][..width * 4], w);
    }
}
