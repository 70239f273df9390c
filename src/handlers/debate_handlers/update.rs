use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{ApiClient, ApiError};
use crate::auth::session::{force_logout, require_token, set_flash};
use crate::auth::csrf;
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::records::{DebateForm, from_editable};
use crate::templates_structs::{DebateDetailTemplate, PageContext};

/// POST /debates/{id} — save the edited record.
///
/// Validation runs before any network call; both validation and
/// backend failures re-render the form with the operator's submitted
/// values intact so nothing is lost on a retry. Success redirects to
/// the detail page, which refetches fresh state.
pub async fn update(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<DebateForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let debate_id = path.into_inner();
    let token = require_token(&session)?;
    let form = form.into_inner();

    let record = match from_editable(&form, &debate_id) {
        Ok(record) => record,
        Err(errors) => {
            let ctx = PageContext::build(&session, &config.app_name, "/debates")?;
            let tmpl = DebateDetailTemplate {
                ctx,
                debate_id,
                form: Some(form),
                errors,
                error: None,
            };
            return render(tmpl);
        }
    };

    match client.update_debate(&token, &record).await {
        Ok(()) => {
            set_flash(&session, "Debate updated");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", format!("/debates/{debate_id}")))
                .finish())
        }
        Err(ApiError::Unauthorized) => Ok(force_logout(&session)),
        Err(e) => {
            log::warn!("debate {debate_id} update failed: {e}");
            let ctx = PageContext::build(&session, &config.app_name, "/debates")?;
            let tmpl = DebateDetailTemplate {
                ctx,
                debate_id,
                form: Some(form),
                errors: Vec::new(),
                error: Some(format!("Save failed: {e}")),
            };
            render(tmpl)
        }
    }
}
