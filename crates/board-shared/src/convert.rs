//! Shapes ids into single-key JSON objects.

use std::collections::BTreeMap;

const KEY: &str = "id";

/// Converts a value into a keyed map.
pub trait MapConverter<T> {
    fn convert(&self, value: T) -> BTreeMap<&'static str, T>;
}

/// Wraps an id as `{"id": <value>}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdConverter;

impl<T> MapConverter<T> for IdConverter {
    fn convert(&self, value: T) -> BTreeMap<&'static str, T> {
        BTreeMap::from([(KEY, value)])
    }
}

/// Shorthand for `IdConverter.convert(id)`.
pub fn to_id_map<T>(id: T) -> BTreeMap<&'static str, T> {
    IdConverter.convert(id)
}
