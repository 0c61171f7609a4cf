use std::path::PathBuf;

use crate::assets::catalog::VariantParts;
use crate::foundation::rng::SeededRng;

/// Deterministically choose one slot per configured part.
///
/// Parts are visited in configured order. An absent part list consumes no
/// draw; a present one consumes exactly one draw whether or not the resolved
/// slot holds a file, so a gap in a slot list never perturbs later picks. The
/// computed index is clamped to a minimum of 1: slot 0 is permanently
/// unreachable even when populated. Existing identifier-to-avatar mappings
/// depend on that off-by-one, so it must not be "fixed".
pub(crate) fn select_parts(variant_parts: &VariantParts, order: &[String], id: &str) -> Vec<PathBuf> {
    let mut rng = SeededRng::from_identifier(id);
    let mut selected = Vec::with_capacity(order.len());

    for part in order {
        let Some(slots) = variant_parts.get(part) else {
            continue;
        };
        let draw = rng.next_f64();
        let index = ((draw * slots.len() as f64).floor() as usize).max(1);
        if let Some(Some(path)) = slots.get(index) {
            selected.push(path.clone());
        }
    }

    selected
}

#[cfg(test)]
#[path = "../tests/unit/select.rs"]
mod tests;
