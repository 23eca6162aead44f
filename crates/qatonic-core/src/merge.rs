//! Shared merge policy for the properties cascade and context aggregation
//!
//! Both operations fold flat JSON objects into an accumulator: every overlay
//! key overwrites the same key in the base, keys unique to either side are
//! kept. The merge is shallow — values are replaced wholesale, never merged
//! recursively — because both namespaces are defined as flat.

use serde_json::{Map, Value};

/// Fold `overlay` into `base`, overlay wins on collision.
pub(crate) fn merge_into(base: &mut Map<String, Value>, overlay: Map<String, Value>) {
    for (key, value) in overlay {
        base.insert(key, value);
    }
}
