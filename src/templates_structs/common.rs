use askama::Template;

use crate::records::LegislativeSession;

use super::PageContext;

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
    pub app_name: String,
    pub csrf_token: String,
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub ctx: PageContext,
    pub sessions: Vec<LegislativeSession>,
    pub today: String,
    pub error: Option<String>,
}
