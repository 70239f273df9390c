use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::session::require_token;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{PageContext, ResolutionsTemplate};

use super::list_or_banner;
use super::member_handlers::SessionFilter;

/// GET /resolutions?session={id}
pub async fn list(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    query: web::Query<SessionFilter>,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let ctx = PageContext::build(&session, &config.app_name, "/resolutions")?;

    let (sessions, mut error) =
        list_or_banner(&session, client.sessions(&token).await, "sessions fetch")?;

    let selected_session = query.session.trim().to_string();
    let resolutions = if selected_session.is_empty() {
        Vec::new()
    } else {
        let (rows, fetch_error) = list_or_banner(
            &session,
            client.session_resolutions(&token, &selected_session).await,
            "resolutions fetch",
        )?;
        error = error.or(fetch_error);
        rows
    };

    let tmpl = ResolutionsTemplate { ctx, sessions, selected_session, resolutions, error };
    render(tmpl)
}
