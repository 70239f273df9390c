use serde::{Deserialize, Serialize};

use super::multi::{de_id, de_int_list, de_opt_int, de_opt_joined, de_string_list};

/// Characters of transcript shown when previewing a merge candidate.
const PREVIEW_CHARS: usize = 200;

/// Canonical debate record.
///
/// Serde aliases map every known historical field name onto the
/// canonical one, and multi-valued fields are normalized to lists on
/// ingress. Serialization always emits the canonical names with lists,
/// which is the shape `PUT /debates/{id}` expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Debate {
    #[serde(deserialize_with = "de_id")]
    pub id: String,

    #[serde(default, alias = "debate_title")]
    pub topic: String,
    #[serde(default, alias = "content")]
    pub text: String,
    /// Wire format is inconsistent (strict dates and freeform strings
    /// both occur), so the date is carried as an opaque string.
    #[serde(default)]
    pub date: String,

    #[serde(default, alias = "speaker", deserialize_with = "de_string_list")]
    pub members: Vec<String>,
    #[serde(default, deserialize_with = "de_string_list")]
    pub topics: Vec<String>,
    #[serde(default, deserialize_with = "de_int_list")]
    pub question_number: Vec<i64>,
    #[serde(default, alias = "answer_by", deserialize_with = "de_string_list")]
    pub answers_by: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lob_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lob: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_lob: Option<String>,
    #[serde(
        default,
        alias = "kramamk_id",
        deserialize_with = "de_opt_int",
        skip_serializing_if = "Option::is_none"
    )]
    pub kramank_id: Option<i64>,
    /// Canonically one text value, but some revisions send a list;
    /// list input is joined back into the single string.
    #[serde(
        default,
        deserialize_with = "de_opt_joined",
        skip_serializing_if = "Option::is_none"
    )]
    pub question_by: Option<String>,

    // Provenance — never edited, always round-tripped verbatim.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub document_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chairman: Option<String>,
    /// Defines linear reading order within a session; the backend
    /// resolves "next debate" from it.
    #[serde(default, deserialize_with = "de_opt_int", skip_serializing_if = "Option::is_none")]
    pub sequence_number: Option<i64>,

    // Audit trail, backend-managed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
}

/// Lightweight projection of the successor debate shown to the
/// operator before a merge is confirmed.
#[derive(Debug, Clone, PartialEq)]
pub struct MergeCandidate {
    pub id: String,
    pub topic: String,
    pub preview: String,
    pub sequence_number: i64,
}

impl MergeCandidate {
    /// Project a full record into the confirmation view. Returns `None`
    /// when the record carries no sequence number, since ordering is
    /// what makes it a valid merge target.
    pub fn from_debate(debate: &Debate) -> Option<Self> {
        let sequence_number = debate.sequence_number?;
        let mut preview: String = debate.text.chars().take(PREVIEW_CHARS).collect();
        if debate.text.chars().count() > PREVIEW_CHARS {
            preview.push('…');
        }
        Some(Self {
            id: debate.id.clone(),
            topic: debate.topic.clone(),
            preview,
            sequence_number,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_current_wire_shape() {
        let json = r#"{
            "id": 42,
            "topic": "Water supply",
            "text": "Transcript body",
            "date": "2024-03-11",
            "members": ["A", "B"],
            "question_number": [12, 14],
            "kramank_id": 7,
            "document_name": "vol2_11.pdf",
            "sequence_number": 10
        }"#;
        let d: Debate = serde_json::from_str(json).unwrap();
        assert_eq!(d.id, "42");
        assert_eq!(d.topic, "Water supply");
        assert_eq!(d.members, vec!["A", "B"]);
        assert_eq!(d.question_number, vec![12, 14]);
        assert_eq!(d.kramank_id, Some(7));
        assert_eq!(d.sequence_number, Some(10));
    }

    #[test]
    fn deserializes_legacy_aliases() {
        let json = r#"{
            "id": "9",
            "debate_title": "Old title field",
            "content": "Old body field",
            "speaker": "Shri X, Shri Y",
            "answer_by": "Minister Z",
            "kramamk_id": "3"
        }"#;
        let d: Debate = serde_json::from_str(json).unwrap();
        assert_eq!(d.topic, "Old title field");
        assert_eq!(d.text, "Old body field");
        assert_eq!(d.members, vec!["Shri X", "Shri Y"]);
        assert_eq!(d.answers_by, vec!["Minister Z"]);
        assert_eq!(d.kramank_id, Some(3));
    }

    #[test]
    fn question_by_accepts_list_and_scalar_wire_shapes() {
        let json = r#"{"id": "42", "topic": "T", "question_by": ["A. Deshmukh"]}"#;
        let d: Debate = serde_json::from_str(json).unwrap();
        assert_eq!(d.question_by.as_deref(), Some("A. Deshmukh"));

        let json = r#"{"id": "42", "topic": "T", "question_by": ["A. Deshmukh", "B. Patil"]}"#;
        let d: Debate = serde_json::from_str(json).unwrap();
        assert_eq!(d.question_by.as_deref(), Some("A. Deshmukh, B. Patil"));

        let json = r#"{"id": "42", "topic": "T", "question_by": "A. Deshmukh"}"#;
        let d: Debate = serde_json::from_str(json).unwrap();
        assert_eq!(d.question_by.as_deref(), Some("A. Deshmukh"));
    }

    #[test]
    fn serializes_multi_fields_as_lists() {
        let d = Debate {
            id: "1".into(),
            members: vec!["A".into(), "B".into()],
            ..Default::default()
        };
        let v = serde_json::to_value(&d).unwrap();
        assert_eq!(v["members"], serde_json::json!(["A", "B"]));
        // Absent optionals are omitted, not sent as null.
        assert!(v.get("document_name").is_none());
    }

    #[test]
    fn merge_candidate_truncates_preview() {
        let d = Debate {
            id: "43".into(),
            topic: "X".into(),
            text: "y".repeat(500),
            sequence_number: Some(12),
            ..Default::default()
        };
        let c = MergeCandidate::from_debate(&d).unwrap();
        assert_eq!(c.sequence_number, 12);
        assert!(c.preview.chars().count() <= PREVIEW_CHARS + 1);
        assert!(c.preview.ends_with('…'));
    }

    #[test]
    fn merge_candidate_requires_sequence_number() {
        let d = Debate { id: "43".into(), ..Default::default() };
        assert!(MergeCandidate::from_debate(&d).is_none());
    }
}
