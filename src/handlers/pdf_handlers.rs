use actix_session::Session;
use actix_web::{HttpResponse, web};

use crate::api::ApiClient;
use crate::auth::session::require_token;
use crate::errors::AppError;

use super::required;

/// GET /pdf/{document_name} — relay the source PDF from the backend.
/// Served inline for the embedded viewer; the same URL doubles as the
/// download link.
pub async fn fetch(
    client: web::Data<ApiClient>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let document_name = path.into_inner();
    // Document names are backend-issued filenames, never paths.
    if document_name.contains('/') || document_name.contains('\\') || document_name.contains("..") {
        return Err(AppError::NotFound);
    }

    let token = require_token(&session)?;
    let upstream = required(&session, client.fetch_pdf(&token, &document_name).await)?;

    Ok(HttpResponse::Ok()
        .content_type("application/pdf")
        .insert_header((
            "Content-Disposition",
            format!("inline; filename=\"{document_name}\""),
        ))
        .streaming(upstream.bytes_stream()))
}
