//! Source-over compositing on premultiplied RGBA8 buffers.
//!
//! Layer pixels travel through the pipeline premultiplied; the straight-alpha
//! conversions at the boundary live here too so the rounding stays in one
//! place.

use crate::foundation::error::{AvatarError, AvatarResult};
use crate::foundation::math::mul_div255_u8;

/// One premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over blend of one premultiplied pixel onto another.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    let sa = src[3];
    if sa == 0 {
        return dst;
    }
    if sa == 255 {
        return src;
    }

    let inv = 255u16 - u16::from(sa);
    let mut out = [0u8; 4];
    for i in 0..4 {
        out[i] = src[i].saturating_add(mul_div255_u8(u16::from(dst[i]), inv));
    }
    out
}

/// Composite `src` over `dst` pixel-by-pixel, in place.
///
/// Buffers must be the same length and a multiple of 4 bytes; the guard runs
/// before any pixel is touched.
pub fn over_in_place(dst: &mut [u8], src: &[u8]) -> AvatarResult<()> {
    if dst.len() != src.len() || !dst.len().is_multiple_of(4) {
        return Err(AvatarError::composite(
            "over_in_place expects equal-length rgba8 buffers",
        ));
    }
    for (d, s) in dst.chunks_exact_mut(4).zip(src.chunks_exact(4)) {
        let out = over([d[0], d[1], d[2], d[3]], [s[0], s[1], s[2], s[3]]);
        d.copy_from_slice(&out);
    }
    Ok(())
}

/// Convert straight-alpha RGBA8 to premultiplied, in place.
pub fn premultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for i in 0..3 {
            px[i] = mul_div255_u8(u16::from(px[i]), a);
        }
    }
}

/// Convert premultiplied RGBA8 back to straight alpha, in place.
///
/// Fully transparent pixels zero out; fully opaque pixels pass through
/// untouched.
pub fn unpremultiply_rgba8_in_place(rgba: &mut [u8]) {
    for px in rgba.chunks_exact_mut(4) {
        let a = u16::from(px[3]);
        if a == 0 {
            px[0] = 0;
            px[1] = 0;
            px[2] = 0;
            continue;
        }
        if a == 255 {
            continue;
        }
        for i in 0..3 {
            let c = u16::from(px[i]);
            px[i] = ((c * 255 + a / 2) / a).min(255) as u8;
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/composite.rs"]
mod tests;
