//! Ingress normalization for weakly-typed wire fields.
//!
//! Multi-valued fields arrive as `string | string[] | number | number[]
//! | null` depending on the backend revision. They are modeled here as
//! a tagged union and collapsed to a plain list the moment they are
//! deserialized; nothing downstream sees the union.

use serde::{Deserialize, Deserializer, de};

/// A single wire value that may be a JSON number or string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawScalar {
    Number(serde_json::Number),
    Text(String),
}

impl RawScalar {
    fn as_text(&self) -> String {
        match self {
            RawScalar::Number(n) => n.to_string(),
            RawScalar::Text(s) => s.clone(),
        }
    }
}

/// The union of shapes a multi-valued field takes on the wire.
/// `Many` must come first so arrays are not mistaken for scalars.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawMulti {
    Many(Vec<RawScalar>),
    One(RawScalar),
}

/// Split a comma-joined string into trimmed, non-empty pieces.
/// The empty string yields an empty list, never `[""]`.
pub fn split_joined(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Join list elements for a text input. Inverse of [`split_joined`]
/// for elements that contain no commas.
pub fn join_list<T: ToString>(items: &[T]) -> String {
    items
        .iter()
        .map(|item| item.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Deserialize a `string | string[] | number[] | null` field into a
/// list of strings. Scalar strings are treated as comma-joined.
pub fn de_string_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMulti>::deserialize(deserializer)?;
    Ok(match raw {
        None => Vec::new(),
        Some(RawMulti::Many(items)) => items
            .iter()
            .map(RawScalar::as_text)
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect(),
        Some(RawMulti::One(scalar)) => split_joined(&scalar.as_text()),
    })
}

/// Deserialize a numeric multi-valued field (`number | number[] |
/// string`) into a list of integers. Numeric strings are accepted;
/// anything else is a deserialization error.
pub fn de_int_list<'de, D>(deserializer: D) -> Result<Vec<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMulti>::deserialize(deserializer)?;
    let scalars = match raw {
        None => return Ok(Vec::new()),
        Some(RawMulti::Many(items)) => items,
        Some(RawMulti::One(RawScalar::Text(joined))) => {
            return split_joined(&joined)
                .iter()
                .map(|piece| {
                    piece
                        .parse::<i64>()
                        .map_err(|_| de::Error::custom(format!("non-numeric entry `{piece}`")))
                })
                .collect();
        }
        Some(RawMulti::One(scalar)) => vec![scalar],
    };
    scalars
        .iter()
        .map(|scalar| match scalar {
            RawScalar::Number(n) => n
                .as_i64()
                .ok_or_else(|| de::Error::custom(format!("non-integer entry `{n}`"))),
            RawScalar::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| de::Error::custom(format!("non-numeric entry `{s}`"))),
        })
        .collect()
}

/// Deserialize an identifier the backend emits as either a JSON string
/// or a number, keeping it opaque as a string.
pub fn de_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = RawScalar::deserialize(deserializer)?;
    Ok(scalar.as_text())
}

/// Deserialize an optional integer the backend emits as either a JSON
/// number or a numeric string.
pub fn de_opt_int<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = Option::<RawScalar>::deserialize(deserializer)?;
    match scalar {
        None => Ok(None),
        Some(RawScalar::Number(n)) => n
            .as_i64()
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("non-integer value `{n}`"))),
        Some(RawScalar::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(RawScalar::Text(s)) => s
            .trim()
            .parse::<i64>()
            .map(Some)
            .map_err(|_| de::Error::custom(format!("non-numeric value `{s}`"))),
    }
}

/// Optional variant of [`de_id`].
pub fn de_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let scalar = Option::<RawScalar>::deserialize(deserializer)?;
    Ok(scalar.map(|s| s.as_text()))
}

/// Deserialize a `string | string[] | null` field into a single
/// comma-joined string. Used for fields that are canonically one text
/// value but arrive as a list on some backend revisions. Empty input
/// collapses to `None`.
pub fn de_opt_joined<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<RawMulti>::deserialize(deserializer)?;
    let joined = match raw {
        None => return Ok(None),
        Some(RawMulti::One(scalar)) => scalar.as_text().trim().to_string(),
        Some(RawMulti::Many(items)) => join_list(
            &items
                .iter()
                .map(RawScalar::as_text)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect::<Vec<_>>(),
        ),
    };
    Ok(if joined.is_empty() { None } else { Some(joined) })
}
