use askama::Template;

use crate::records::{DebateForm, MergeCandidate};

use super::PageContext;

/// Detail/edit page. `form` is `None` when the fetch itself failed, in
/// which case `error` carries the banner message. `errors` holds
/// validation messages from a rejected save; the form then still
/// carries the operator's submitted values.
#[derive(Template)]
#[template(path = "debates/detail.html")]
pub struct DebateDetailTemplate {
    pub ctx: PageContext,
    pub debate_id: String,
    pub form: Option<DebateForm>,
    pub errors: Vec<String>,
    pub error: Option<String>,
}

/// Merge confirmation page. `candidate` is `None` when the debate has
/// no successor (a normal outcome, rendered as a message).
#[derive(Template)]
#[template(path = "debates/merge.html")]
pub struct DebateMergeTemplate {
    pub ctx: PageContext,
    pub debate_id: String,
    pub topic: String,
    pub candidate: Option<MergeCandidate>,
    pub error: Option<String>,
}
