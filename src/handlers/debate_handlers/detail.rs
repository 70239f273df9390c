use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{ApiClient, ApiError};
use crate::auth::session::{force_logout, require_token};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::records::to_editable;
use crate::templates_structs::{DebateDetailTemplate, PageContext};

/// GET /debates/{id} — edit form next to the source PDF. A failed
/// fetch renders the page in its error state; the surrounding
/// navigation stays usable.
pub async fn detail(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let debate_id = path.into_inner();
    let token = require_token(&session)?;
    let ctx = PageContext::build(&session, &config.app_name, "/debates")?;

    let (form, error) = match client.debate(&token, &debate_id).await {
        Ok(record) => (Some(to_editable(&record)), None),
        Err(ApiError::Unauthorized) => return Ok(force_logout(&session)),
        Err(e) => {
            log::warn!("debate {debate_id} fetch failed: {e}");
            (None, Some(e.to_string()))
        }
    };

    let tmpl = DebateDetailTemplate {
        ctx,
        debate_id,
        form,
        errors: Vec::new(),
        error,
    };
    render(tmpl)
}
