//! Avagen generates deterministic layered avatars.
//!
//! Given an identifier string and a variant name, the generator always picks
//! the same set of part images (seeded pseudo-random selection over an
//! immutable asset catalog) and composites them bottom-to-top with
//! source-over alpha blending into a single RGBA raster:
//!
//! - Configure and construct an [`AvatarGenerator`]
//! - Inspect [`AvatarGenerator::variants`]
//! - Resolve part files with [`AvatarGenerator::get_parts`] or render with
//!   [`AvatarGenerator::generate`]
//!
//! The asset store is a plain directory tree: one subdirectory per variant,
//! holding files named `<part><index><extension>` (for example
//! `female/hair2.png`).
#![forbid(unsafe_code)]

mod assets;
mod foundation;
mod generator;
mod select;

pub mod composite;

pub use crate::assets::catalog::AssetCatalog;
pub use crate::foundation::error::{AvatarError, AvatarResult};
pub use crate::generator::{AvatarGenerator, GeneratedImage, GeneratorConfig};
