use askama::Template;

use crate::records::{Debate, Karywali, Kramank, LegislativeSession, Member, Resolution};

use super::PageContext;

#[derive(Template)]
#[template(path = "sessions/list.html")]
pub struct SessionsTemplate {
    pub ctx: PageContext,
    pub sessions: Vec<LegislativeSession>,
    pub error: Option<String>,
}

/// Session-scoped listings share the session dropdown: `sessions`
/// feeds it, `selected_session` is the current choice (empty = none).
#[derive(Template)]
#[template(path = "members/list.html")]
pub struct MembersTemplate {
    pub ctx: PageContext,
    pub sessions: Vec<LegislativeSession>,
    pub selected_session: String,
    pub members: Vec<Member>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "karywalis/list.html")]
pub struct KarywalisTemplate {
    pub ctx: PageContext,
    pub sessions: Vec<LegislativeSession>,
    pub selected_session: String,
    pub karywalis: Vec<Karywali>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "resolutions/list.html")]
pub struct ResolutionsTemplate {
    pub ctx: PageContext,
    pub sessions: Vec<LegislativeSession>,
    pub selected_session: String,
    pub resolutions: Vec<Resolution>,
    pub error: Option<String>,
}

#[derive(Template)]
#[template(path = "debates/list.html")]
pub struct DebatesTemplate {
    pub ctx: PageContext,
    pub sessions: Vec<LegislativeSession>,
    pub selected_session: String,
    pub kramanks: Vec<Kramank>,
    pub selected_kramank: String,
    pub debates: Vec<Debate>,
    pub error: Option<String>,
}
