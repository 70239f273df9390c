use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::{ApiClient, ApiError};
use crate::auth::csrf;
use crate::auth::session::{force_logout, set_flash};
use crate::auth::session::require_token;
use crate::errors::AppError;
use crate::handlers::auth_handlers::CsrfOnly;

/// POST /debates/{id}/delete — remove a record. The form carries a
/// confirm dialog in the template; a plain click never reaches here.
/// Success navigates away from the now-invalid id; failure returns to
/// the detail page with the record intact.
pub async fn delete(
    client: web::Data<ApiClient>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let debate_id = path.into_inner();
    let token = require_token(&session)?;

    match client.delete_debate(&token, &debate_id).await {
        Ok(()) => {
            set_flash(&session, "Debate deleted");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/debates"))
                .finish())
        }
        Err(ApiError::Unauthorized) => Ok(force_logout(&session)),
        Err(e) => {
            log::warn!("debate {debate_id} delete failed: {e}");
            set_flash(&session, format!("Delete failed: {e}"));
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", format!("/debates/{debate_id}")))
                .finish())
        }
    }
}
