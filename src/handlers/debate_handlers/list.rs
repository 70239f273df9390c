use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::ApiClient;
use crate::auth::session::require_token;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::handlers::list_or_banner;
use crate::templates_structs::{DebatesTemplate, PageContext};

#[derive(Deserialize)]
pub struct DebateFilter {
    #[serde(default)]
    pub session: String,
    #[serde(default)]
    pub kramank: String,
}

/// GET /debates?session={id}&kramank={id} — two-level drill-down:
/// session selects the kramank list, kramank selects the debates.
pub async fn list(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<DebateFilter>,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let ctx = PageContext::build(&session, &config.app_name, "/debates")?;

    let (sessions, mut error) =
        list_or_banner(&session, client.sessions(&token).await, "sessions fetch")?;

    let selected_session = query.session.trim().to_string();
    let selected_kramank = query.kramank.trim().to_string();

    let kramanks = if selected_session.is_empty() {
        Vec::new()
    } else {
        let (rows, fetch_error) = list_or_banner(
            &session,
            client.session_kramanks(&token, &selected_session).await,
            "kramanks fetch",
        )?;
        error = error.or(fetch_error);
        rows
    };

    let debates = if selected_kramank.is_empty() {
        Vec::new()
    } else {
        let (rows, fetch_error) = list_or_banner(
            &session,
            client.kramank_debates(&token, &selected_kramank).await,
            "debates fetch",
        )?;
        error = error.or(fetch_error);
        rows
    };

    let tmpl = DebatesTemplate {
        ctx,
        sessions,
        selected_session,
        kramanks,
        selected_kramank,
        debates,
        error,
    };
    render(tmpl)
}
