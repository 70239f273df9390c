use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::ApiClient;
use crate::auth::session::require_token;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{MembersTemplate, PageContext};

use super::list_or_banner;

#[derive(Deserialize)]
pub struct SessionFilter {
    #[serde(default)]
    pub session: String,
}

/// GET /members?session={id} — member roll for a session. Without a
/// selection the page only shows the dropdown.
pub async fn list(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<SessionFilter>,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let ctx = PageContext::build(&session, &config.app_name, "/members")?;

    let (sessions, mut error) =
        list_or_banner(&session, client.sessions(&token).await, "sessions fetch")?;

    let selected_session = query.session.trim().to_string();
    let members = if selected_session.is_empty() {
        Vec::new()
    } else {
        let (rows, fetch_error) = list_or_banner(
            &session,
            client.session_members(&token, &selected_session).await,
            "members fetch",
        )?;
        error = error.or(fetch_error);
        rows
    };

    let tmpl = MembersTemplate { ctx, sessions, selected_session, members, error };
    render(tmpl)
}
