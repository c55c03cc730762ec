//! Pure merge of two settings mappings.

use crate::layers::Settings;

/// Merge `overlay` onto `base`; for every key in `overlay` its value wins.
///
/// The merge is flat: a nested object in `overlay` replaces the one in `base`
/// wholesale.
pub fn merge(base: Settings, overlay: Settings) -> Settings {
    let mut merged = base;
    for (key, value) in overlay {
        merged.insert(key, value);
    }
    merged
}
