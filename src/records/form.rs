//! Bidirectional mapping between the canonical [`Debate`] record and
//! the flat, all-string shape bound to the edit form.

use serde::Deserialize;

use super::debate::Debate;
use super::multi::{join_list, split_joined};

/// Edit shape of a debate: every field a plain string suitable for a
/// text input. Multi-valued fields are comma-joined; provenance and
/// audit fields ride along in hidden inputs so a save round-trips them
/// verbatim without the backend's values being clobbered.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct DebateForm {
    #[serde(default)]
    pub csrf_token: String,

    pub topic: String,
    #[serde(default)]
    pub lob_type: String,
    #[serde(default)]
    pub lob: String,
    #[serde(default)]
    pub sub_lob: String,
    #[serde(default)]
    pub members: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub kramank_id: String,
    #[serde(default)]
    pub question_number: String,
    #[serde(default)]
    pub topics: String,
    #[serde(default)]
    pub answers_by: String,
    #[serde(default)]
    pub question_by: String,
    #[serde(default)]
    pub text: String,

    // Hidden, read-only round-trip fields.
    #[serde(default)]
    pub image_name: String,
    #[serde(default)]
    pub document_name: String,
    #[serde(default)]
    pub vol: String,
    #[serde(default)]
    pub chairman: String,
    #[serde(default)]
    pub sequence_number: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub last_update: String,
}

fn opt_str(value: &Option<String>) -> String {
    value.clone().unwrap_or_default()
}

fn str_opt(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() { None } else { Some(trimmed.to_string()) }
}

/// Flatten a record into the edit shape. The input is borrowed and
/// left untouched.
pub fn to_editable(debate: &Debate) -> DebateForm {
    DebateForm {
        csrf_token: String::new(),
        topic: debate.topic.clone(),
        lob_type: opt_str(&debate.lob_type),
        lob: opt_str(&debate.lob),
        sub_lob: opt_str(&debate.sub_lob),
        members: join_list(&debate.members),
        date: debate.date.clone(),
        kramank_id: debate.kramank_id.map(|n| n.to_string()).unwrap_or_default(),
        question_number: join_list(&debate.question_number),
        topics: join_list(&debate.topics),
        answers_by: join_list(&debate.answers_by),
        question_by: opt_str(&debate.question_by),
        text: debate.text.clone(),
        image_name: opt_str(&debate.image_name),
        document_name: opt_str(&debate.document_name),
        vol: opt_str(&debate.vol),
        chairman: opt_str(&debate.chairman),
        sequence_number: debate
            .sequence_number
            .map(|n| n.to_string())
            .unwrap_or_default(),
        status: opt_str(&debate.status),
        user: opt_str(&debate.user),
        last_update: opt_str(&debate.last_update),
    }
}

/// Rebuild a full record from the edit shape.
///
/// Multi-valued fields are split on commas, trimmed and de-blanked.
/// Numeric fields get a strict integer parse — a non-numeric value is
/// a validation error surfaced before any network call, never a silent
/// coercion. On failure every problem is reported at once.
pub fn from_editable(form: &DebateForm, id: &str) -> Result<Debate, Vec<String>> {
    let mut errors = Vec::new();

    if form.topic.trim().is_empty() {
        errors.push("Topic is required".to_string());
    }

    let kramank_id = parse_opt_int(&form.kramank_id, "Kramank ID", &mut errors);
    let sequence_number = parse_opt_int(&form.sequence_number, "Sequence number", &mut errors);
    let question_number = parse_int_list(&form.question_number, "Question numbers", &mut errors);

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(Debate {
        id: id.to_string(),
        topic: form.topic.trim().to_string(),
        text: form.text.clone(),
        date: form.date.trim().to_string(),
        members: split_joined(&form.members),
        topics: split_joined(&form.topics),
        question_number,
        answers_by: split_joined(&form.answers_by),
        lob_type: str_opt(&form.lob_type),
        lob: str_opt(&form.lob),
        sub_lob: str_opt(&form.sub_lob),
        kramank_id,
        question_by: str_opt(&form.question_by),
        image_name: str_opt(&form.image_name),
        document_name: str_opt(&form.document_name),
        vol: str_opt(&form.vol),
        chairman: str_opt(&form.chairman),
        sequence_number,
        status: str_opt(&form.status),
        user: str_opt(&form.user),
        last_update: str_opt(&form.last_update),
    })
}

fn parse_opt_int(raw: &str, label: &str, errors: &mut Vec<String>) -> Option<i64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i64>() {
        Ok(n) => Some(n),
        Err(_) => {
            errors.push(format!("{label} must be a whole number"));
            None
        }
    }
}

fn parse_int_list(raw: &str, label: &str, errors: &mut Vec<String>) -> Vec<i64> {
    let mut out = Vec::new();
    for piece in split_joined(raw) {
        match piece.parse::<i64>() {
            Ok(n) => out.push(n),
            Err(_) => errors.push(format!("{label}: `{piece}` is not a whole number")),
        }
    }
    out
}
