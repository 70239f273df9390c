//! Listing rows for the table pages. These are display-only
//! projections; none of them are ever written back to the backend.

use serde::Deserialize;

use super::multi::{de_id, de_opt_id};

#[derive(Debug, Clone, Deserialize)]
pub struct LegislativeSession {
    #[serde(alias = "id", deserialize_with = "de_id")]
    pub session_id: String,
    #[serde(default)]
    pub session_name: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub year: Option<String>,
    #[serde(default)]
    pub house: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

impl LegislativeSession {
    /// Human-readable label for dropdowns: "Budget - 2024 (Vidhan Sabha)",
    /// falling back to whatever the record carries.
    pub fn label(&self) -> String {
        match (&self.kind, &self.year) {
            (Some(kind), Some(year)) => {
                let house = self.house.as_deref().unwrap_or("");
                if house.is_empty() {
                    format!("{kind} - {year}")
                } else {
                    format!("{kind} - {year} ({house})")
                }
            }
            _ => self
                .session_name
                .clone()
                .unwrap_or_else(|| format!("Session {}", self.session_id)),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Kramank {
    #[serde(alias = "id", alias = "kramamk_id", deserialize_with = "de_id")]
    pub kramank_id: String,
    #[serde(default, alias = "kramamk_number", deserialize_with = "de_opt_id")]
    pub number: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Member {
    #[serde(default)]
    pub chairman: Option<String>,
    #[serde(default)]
    pub constituency: Option<String>,
    #[serde(default)]
    pub party: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Karywali {
    #[serde(default, deserialize_with = "de_opt_id")]
    pub number: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub chairman: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub session_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Resolution {
    #[serde(deserialize_with = "de_id")]
    pub resolution_id: String,
    #[serde(default, deserialize_with = "de_opt_id")]
    pub resolution_no: Option<String>,
    #[serde(default, alias = "resolution_no_en")]
    pub title: Option<String>,
    #[serde(default, alias = "content")]
    pub text: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_label_prefers_type_year_house() {
        let s: LegislativeSession = serde_json::from_str(
            r#"{"session_id": 3, "type": "Budget", "year": 2024, "house": "Vidhan Sabha"}"#,
        )
        .unwrap();
        assert_eq!(s.session_id, "3");
        assert_eq!(s.label(), "Budget - 2024 (Vidhan Sabha)");
    }

    #[test]
    fn session_label_falls_back_to_name_then_id() {
        let s: LegislativeSession =
            serde_json::from_str(r#"{"id": "7", "session_name": "Monsoon 1998"}"#).unwrap();
        assert_eq!(s.label(), "Monsoon 1998");

        let s: LegislativeSession = serde_json::from_str(r#"{"id": "7"}"#).unwrap();
        assert_eq!(s.label(), "Session 7");
    }

    #[test]
    fn kramank_accepts_legacy_spelling() {
        let k: Kramank =
            serde_json::from_str(r#"{"kramamk_id": 5, "kramamk_number": 18}"#).unwrap();
        assert_eq!(k.kramank_id, "5");
        assert_eq!(k.number.as_deref(), Some("18"));
    }
}
