//! Item model and request payload validation.

use serde::{Deserialize, Serialize};

use crate::error::{ItemStoreError, Result};

/// A stored item: `id` is the backend key, `name` the backend value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
}

/// Request body as sent by the caller. Both fields are optional at parse time;
/// presence is checked by [`ItemPayload::into_item`] and [`ItemPayload::into_name`].
/// Unknown fields are ignored. Numbers and booleans are taken as their
/// string form; `null` counts as missing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemPayload {
    #[serde(default, deserialize_with = "scalar_string")]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "scalar_string")]
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Scalar {
    Str(String),
    Bool(bool),
    Unsigned(u64),
    Signed(i64),
    Float(f64),
}

fn scalar_string<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let v = Option::<Scalar>::deserialize(de)?;
    Ok(v.map(|s| match s {
        Scalar::Str(s) => s,
        Scalar::Bool(b) => b.to_string(),
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
    }))
}

impl ItemPayload {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            name: Some(name.into()),
        }
    }

    /// Payload carrying only a name (update bodies).
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
        }
    }

    /// Require both `id` and `name` to be present and non-empty.
    pub fn into_item(self) -> Result<Item> {
        match (non_empty(self.id), non_empty(self.name)) {
            (Some(id), Some(name)) => Ok(Item { id, name }),
            _ => Err(ItemStoreError::Validation("id and name are required".into())),
        }
    }

    /// Require `name` to be present and non-empty. `id` is ignored.
    pub fn into_name(self) -> Result<String> {
        non_empty(self.name)
            .ok_or_else(|| ItemStoreError::Validation("name is required".into()))
    }
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    #[test]
    fn empty_strings_count_as_missing() {
        let p = ItemPayload::new("", "x");
        assert!(matches!(p.into_item(), Err(ItemStoreError::Validation(_))));

        let p = ItemPayload::named("");
        assert!(matches!(p.into_name(), Err(ItemStoreError::Validation(_))));
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let p: ItemPayload =
            serde_json::from_str(r#"{"id":"a","name":"x","colour":"red"}"#).unwrap();
        assert_eq!(
            p.into_item().unwrap(),
            Item { id: "a".into(), name: "x".into() }
        );
    }

    #[test]
    fn numbers_and_bools_become_strings() {
        let p: ItemPayload = serde_json::from_str(r#"{"id":7,"name":true}"#).unwrap();
        assert_eq!(
            p.into_item().unwrap(),
            Item { id: "7".into(), name: "true".into() }
        );

        let p: ItemPayload = serde_json::from_str(r#"{"id":-3,"name":2.5}"#).unwrap();
        assert_eq!(p.id.as_deref(), Some("-3"));
        assert_eq!(p.name.as_deref(), Some("2.5"));
    }

    #[test]
    fn null_and_nested_values_are_not_names() {
        let p: ItemPayload = serde_json::from_str(r#"{"id":"a","name":null}"#).unwrap();
        assert!(matches!(p.into_item(), Err(ItemStoreError::Validation(_))));

        assert!(serde_json::from_str::<ItemPayload>(r#"{"id":"a","name":{"x":1}}"#).is_err());
    }

    #[test]
    fn update_payload_ignores_id() {
        let p: ItemPayload = serde_json::from_str(r#"{"id":"other","name":"y"}"#).unwrap();
        assert_eq!(p.into_name().unwrap(), "y");
    }
}
