use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
};

use rayon::prelude::*;

use crate::{
    assets::catalog::AssetCatalog,
    assets::decode::{self, DecodedLayer},
    composite,
    foundation::error::{AvatarError, AvatarResult},
    select,
};

/// Generator configuration.
///
/// `parts` doubles as the recognized part-name set and the bottom-to-top
/// compositing order. `image_extension` includes the leading dot.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Ordered part names, bottom layer first.
    pub parts: Vec<String>,
    /// Asset root directory holding one subdirectory per variant.
    pub parts_location: PathBuf,
    /// File suffix used to recognize asset files, including the dot.
    pub image_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            parts: ["background", "face", "clothes", "head", "hair", "eye", "mouth"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
            parts_location: PathBuf::from("img"),
            image_extension: ".png".to_owned(),
        }
    }
}

impl GeneratorConfig {
    /// Parse a generator configuration from a JSON reader.
    ///
    /// Missing fields fall back to the canonical defaults.
    pub fn from_reader<R: std::io::Read>(r: R) -> AvatarResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| AvatarError::configuration(format!("parse generator config JSON: {e}")))
    }

    /// Parse a generator configuration from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> AvatarResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            AvatarError::configuration(format!(
                "open generator config '{}': {e}",
                path.display()
            ))
        })?;
        Self::from_reader(BufReader::new(f))
    }
}

/// A generated avatar as straight-alpha RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct GeneratedImage {
    width: u32,
    height: u32,
    rgba8: Vec<u8>,
}

impl GeneratedImage {
    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel bytes, tightly packed row-major straight-alpha RGBA8.
    pub fn as_rgba8(&self) -> &[u8] {
        &self.rgba8
    }

    /// Consume into the raw pixel byte vector.
    pub fn into_rgba8(self) -> Vec<u8> {
        self.rgba8
    }

    /// Re-wrap the pixel data as an [`image::RgbaImage`] for re-encoding to
    /// any target format.
    pub fn to_image(&self) -> AvatarResult<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.rgba8.clone()).ok_or_else(|| {
            AvatarError::composite("generated buffer does not match its dimensions")
        })
    }
}

/// Deterministic avatar generator over a directory of layered part images.
///
/// The asset catalog is scanned once at construction and never re-read. A
/// generator is immutable afterward and safe to share across threads for
/// concurrent generation.
#[derive(Clone, Debug)]
pub struct AvatarGenerator {
    catalog: AssetCatalog,
    parts: Vec<String>,
}

impl AvatarGenerator {
    /// Build a generator by scanning `config.parts_location`.
    pub fn new(config: GeneratorConfig) -> AvatarResult<Self> {
        let catalog = AssetCatalog::scan(
            &config.parts_location,
            &config.parts,
            &config.image_extension,
        )?;
        Ok(Self {
            catalog,
            parts: config.parts,
        })
    }

    /// Build a generator with the canonical default configuration.
    pub fn with_defaults() -> AvatarResult<Self> {
        Self::new(GeneratorConfig::default())
    }

    /// Variant names currently known to the catalog, sorted.
    pub fn variants(&self) -> Vec<&str> {
        self.catalog.variants()
    }

    /// Deterministically resolve one part file per configured part.
    ///
    /// Returns the chosen file paths in configured part order; parts without
    /// a usable slot for this identifier are omitted.
    #[tracing::instrument(skip(self))]
    pub fn get_parts(&self, id: &str, variant: &str) -> AvatarResult<Vec<PathBuf>> {
        let Some(variant_parts) = self.catalog.variant(variant) else {
            return Err(AvatarError::unsupported_variant(format!(
                "variant '{variant}' is not supported (supported: {})",
                self.catalog.variants().join(", ")
            )));
        };
        Ok(select::select_parts(variant_parts, &self.parts, id))
    }

    /// Generate the composite avatar for `id` in `variant`.
    ///
    /// Layer decodes run in parallel; compositing folds bottom-to-top over a
    /// single accumulator whose dimensions come from the first layer. Any
    /// unreadable or undecodable part aborts the whole call.
    #[tracing::instrument(skip(self))]
    pub fn generate(&self, id: &str, variant: &str) -> AvatarResult<GeneratedImage> {
        let parts = self.get_parts(id, variant)?;

        let layers = parts
            .par_iter()
            .map(|path| decode::decode_layer(path))
            .collect::<AvatarResult<Vec<DecodedLayer>>>()?;

        let mut layers = layers.into_iter();
        let base = layers.next().ok_or_else(|| {
            AvatarError::empty_selection(format!(
                "variant '{variant}' does not contain any parts"
            ))
        })?;

        let (width, height) = (base.width, base.height);
        let mut acc = base.rgba8_premul;
        for layer in layers {
            composite::over_in_place(&mut acc, &layer.rgba8_premul)?;
        }
        composite::unpremultiply_rgba8_in_place(&mut acc);

        Ok(GeneratedImage {
            width,
            height,
            rgba8: acc,
        })
    }
}
