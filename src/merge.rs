//! Deep merge of partial creator records
//!
//! Merge semantics:
//! - Objects: deep-merge by key
//! - Arrays: CONCATENATE (base first, then update)
//! - Scalars: override (update wins)

use creator_schema::{CreatorRecord, SchemaContext, ValidationError};
use serde_json::{Map, Value};

/// Deep merge two JSON values.
///
/// Both arguments are consumed; the result reuses `base`'s storage.
///
/// - Objects: keys unique to either side pass through, shared keys recurse.
///   `base` key order is kept and new keys are appended.
/// - Arrays: `base` items followed by `update` items, no deduplication
/// - Anything else (scalars, type mismatch, null): update wins
pub fn merge(base: Value, update: Value) -> Value {
    match (base, update) {
        (Value::Object(mut base_map), Value::Object(update_map)) => {
            for (key, update_value) in update_map {
                match base_map.get_mut(&key) {
                    Some(slot) => {
                        let base_value = slot.take();
                        *slot = merge(base_value, update_value);
                    }
                    None => {
                        base_map.insert(key, update_value);
                    }
                }
            }
            Value::Object(base_map)
        }

        (Value::Array(mut base_items), Value::Array(update_items)) => {
            base_items.extend(update_items);
            Value::Array(base_items)
        }

        (_, update) => update,
    }
}

/// Merge sources pairwise in call order, starting from an empty object.
///
/// Merge is not commutative: array order and scalar precedence both follow
/// the order of `sources`.
pub fn merge_sources<I>(sources: I) -> Value
where
    I: IntoIterator<Item = Value>,
{
    sources
        .into_iter()
        .fold(Value::Object(Map::new()), merge)
}

/// Merge sources, then validate the combined result as a creator record.
pub fn merge_validated<I>(sources: I, ctx: &SchemaContext) -> Result<CreatorRecord, ValidationError>
where
    I: IntoIterator<Item = Value>,
{
    CreatorRecord::from_value_with(&merge_sources(sources), ctx)
}
