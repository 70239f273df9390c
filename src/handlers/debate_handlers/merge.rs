use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::auth::csrf;
use crate::auth::pending::PendingMerges;
use crate::auth::session::{force_logout, require_token, set_flash};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::{DebateMergeTemplate, PageContext};

#[derive(Deserialize)]
pub struct MergeForm {
    pub csrf_token: String,
    /// Id of the surfaced candidate, set by the operator's explicit
    /// selection. The merge button stays disabled until it is.
    #[serde(default)]
    pub target_id: String,
}

/// GET /debates/{id}/merge — surface the successor record as the merge
/// candidate. Candidate discovery runs regardless of whether the
/// operator later confirms. No successor is a normal outcome.
pub async fn merge_page(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let debate_id = path.into_inner();
    match render_merge_page(&client, &config, &session, &debate_id, None).await? {
        Some(resp) => Ok(resp),
        None => Ok(force_logout(&session)),
    }
}

/// POST /debates/{id}/merge — execute a confirmed merge.
///
/// The backend owns the merge semantics; on success the client only
/// redirects to the detail page so the merged record is refetched
/// fresh. On failure the candidate selection is preserved for a retry.
/// A per-debate in-flight guard keeps the same merge from being issued
/// twice concurrently.
pub async fn merge_submit(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    pending: web::Data<PendingMerges>,
    session: Session,
    path: web::Path<String>,
    form: web::Form<MergeForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    let debate_id = path.into_inner();
    let token = require_token(&session)?;

    if form.target_id.trim().is_empty() {
        let error = Some("Select the candidate before merging".to_string());
        return match render_merge_page(&client, &config, &session, &debate_id, error).await? {
            Some(resp) => Ok(resp),
            None => Ok(force_logout(&session)),
        };
    }

    let Some(_ticket) = pending.begin(&debate_id) else {
        set_flash(&session, "A merge for this debate is already in progress");
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", format!("/debates/{debate_id}")))
            .finish());
    };

    match client
        .merge_debates(&token, &debate_id, form.target_id.trim())
        .await
    {
        Ok(()) => {
            set_flash(&session, "Debates merged");
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", format!("/debates/{debate_id}")))
                .finish())
        }
        Err(ApiError::Unauthorized) => Ok(force_logout(&session)),
        Err(e) => {
            log::warn!("merge of debate {debate_id} failed: {e}");
            let error = Some(format!("Merge failed: {e}"));
            match render_merge_page(&client, &config, &session, &debate_id, error).await? {
                Some(resp) => Ok(resp),
                None => Ok(force_logout(&session)),
            }
        }
    }
}

/// Shared rendering for the merge page: fetch the current record, ask
/// the backend for its successor, show the candidate (or the absence
/// of one). Returns `None` when the backend rejected the token.
async fn render_merge_page(
    client: &ApiClient,
    config: &AppConfig,
    session: &Session,
    debate_id: &str,
    error: Option<String>,
) -> Result<Option<HttpResponse>, AppError> {
    let token = require_token(session)?;
    let ctx = PageContext::build(session, &config.app_name, "/debates")?;

    let (topic, candidate, fetch_error) = match client.debate(&token, debate_id).await {
        Err(ApiError::Unauthorized) => return Ok(None),
        Err(e) => {
            log::warn!("debate {debate_id} fetch failed: {e}");
            (String::new(), None, Some(e.to_string()))
        }
        Ok(record) => match record.sequence_number {
            // Without an ordering position there is nothing to look up;
            // rendered the same as "no successor".
            None => (record.topic, None, None),
            Some(seq) => match client.next_debate(&token, seq).await {
                Ok(candidate) => (record.topic, candidate, None),
                Err(ApiError::Unauthorized) => return Ok(None),
                Err(e) => {
                    log::warn!("successor lookup for debate {debate_id} failed: {e}");
                    (record.topic, None, Some(e.to_string()))
                }
            },
        },
    };

    let tmpl = DebateMergeTemplate {
        ctx,
        debate_id: debate_id.to_string(),
        topic,
        candidate,
        error: error.or(fetch_error),
    };
    Ok(Some(render(tmpl)?))
}
