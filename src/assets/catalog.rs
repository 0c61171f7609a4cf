use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use crate::foundation::error::{AvatarError, AvatarResult};

/// Index-aligned slot list for one part. Sparse: gaps are `None`.
pub(crate) type PartSlots = Vec<Option<PathBuf>>;

/// Part name → slot list mapping for one variant.
pub(crate) type VariantParts = BTreeMap<String, PartSlots>;

/// Immutable mapping from variant name to part slot lists, built from a
/// directory tree laid out as `<root>/<variant>/<part><index><extension>`.
///
/// Scanning is a pure function of (root, part list, extension): it runs once
/// at generator construction and the result is never re-read or mutated.
#[derive(Clone, Debug)]
pub struct AssetCatalog {
    variants: BTreeMap<String, VariantParts>,
}

impl AssetCatalog {
    /// Scan `root` into a catalog.
    ///
    /// Every immediate subdirectory of `root` becomes a variant. Files inside
    /// it that match `<part><digits><extension>` for one of the configured
    /// `parts` populate that part's slot list at the parsed index; anything
    /// else is silently ignored. An unreadable root or variant directory is a
    /// fatal construction error and yields no partial catalog.
    pub fn scan(root: &Path, parts: &[String], extension: &str) -> AvatarResult<Self> {
        let entries = fs::read_dir(root).map_err(|e| {
            AvatarError::configuration(format!("read asset root '{}': {e}", root.display()))
        })?;

        let mut variants = BTreeMap::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                AvatarError::configuration(format!("read asset root '{}': {e}", root.display()))
            })?;
            let file_type = entry.file_type().map_err(|e| {
                AvatarError::configuration(format!(
                    "stat '{}': {e}",
                    entry.path().display()
                ))
            })?;
            if !file_type.is_dir() {
                continue;
            }

            let variant_name = entry.file_name().to_string_lossy().into_owned();
            let dir = entry.path();
            variants.insert(variant_name, scan_variant_dir(&dir, parts, extension)?);
        }

        Ok(Self { variants })
    }

    /// Variant names currently in the catalog, sorted.
    pub fn variants(&self) -> Vec<&str> {
        self.variants.keys().map(String::as_str).collect()
    }

    pub(crate) fn variant(&self, name: &str) -> Option<&VariantParts> {
        self.variants.get(name)
    }
}

fn scan_variant_dir(dir: &Path, parts: &[String], extension: &str) -> AvatarResult<VariantParts> {
    let entries = fs::read_dir(dir).map_err(|e| {
        AvatarError::configuration(format!("read variant dir '{}': {e}", dir.display()))
    })?;

    let mut variant_parts = VariantParts::new();
    for entry in entries {
        let entry = entry.map_err(|e| {
            AvatarError::configuration(format!("read variant dir '{}': {e}", dir.display()))
        })?;
        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some((part, index)) = parse_part_file(name, parts, extension) else {
            continue;
        };

        let slots = variant_parts.entry(part.to_owned()).or_default();
        if slots.len() <= index {
            slots.resize(index + 1, None);
        }
        slots[index] = Some(entry.path());
    }

    Ok(variant_parts)
}

/// Match `<part><digits><extension>` against the configured part names, in
/// configured order. Returns the matched part and the parsed slot index.
///
/// The index parses through `u16` so a wild digit run cannot balloon the slot
/// table; an over-range index is just another unrecognized filename.
pub(crate) fn parse_part_file<'a>(
    file_name: &str,
    parts: &'a [String],
    extension: &str,
) -> Option<(&'a str, usize)> {
    let stem = file_name.strip_suffix(extension)?;
    for part in parts {
        if let Some(digits) = stem.strip_prefix(part.as_str())
            && !digits.is_empty()
            && digits.bytes().all(|b| b.is_ascii_digit())
            && let Ok(index) = digits.parse::<u16>()
        {
            return Some((part.as_str(), usize::from(index)));
        }
    }
    None
}

#[cfg(test)]
#[path = "../../tests/unit/assets/catalog.rs"]
mod tests;
