use std::path::Path;

use anyhow::Context;

use crate::composite;
use crate::foundation::error::AvatarResult;

/// Decoded raster layer in premultiplied RGBA8 form.
#[derive(Clone, Debug)]
pub(crate) struct DecodedLayer {
    /// Width in pixels.
    pub(crate) width: u32,
    /// Height in pixels.
    pub(crate) height: u32,
    /// Pixel bytes in row-major premultiplied RGBA8.
    pub(crate) rgba8_premul: Vec<u8>,
}

/// Read and decode one part image into premultiplied RGBA8.
pub(crate) fn decode_layer(path: &Path) -> AvatarResult<DecodedLayer> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("read part image '{}'", path.display()))?;
    let dyn_img = image::load_from_memory(&bytes)
        .with_context(|| format!("decode part image '{}'", path.display()))?;
    let rgba = dyn_img.to_rgba8();
    let (width, height) = rgba.dimensions();

    let mut rgba8_premul = rgba.into_raw();
    composite::premultiply_rgba8_in_place(&mut rgba8_premul);

    Ok(DecodedLayer {
        width,
        height,
        rgba8_premul,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
