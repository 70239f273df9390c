use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::session::require_token;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{PageContext, SessionsTemplate};

use super::list_or_banner;

pub async fn list(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    let token = require_token(&session)?;
    let ctx = PageContext::build(&session, &config.app_name, "/sessions")?;

    let (sessions, error) =
        list_or_banner(&session, client.sessions(&token).await, "sessions fetch")?;

    let tmpl = SessionsTemplate { ctx, sessions, error };
    render(tmpl)
}
