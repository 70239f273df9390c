use actix_session::Session;

use crate::api::ApiError;
use crate::errors::AppError;

pub mod auth_handlers;
pub mod dashboard;
pub mod debate_handlers;
pub mod karywali_handlers;
pub mod member_handlers;
pub mod pdf_handlers;
pub mod resolution_handlers;
pub mod session_handlers;

/// Backend result for a listing page: failures become an inline banner
/// with an empty table, never a crashed page. A 401 is the exception —
/// it purges the session and bounces to login.
pub(crate) fn list_or_banner<T: Default>(
    session: &Session,
    result: Result<T, ApiError>,
    what: &str,
) -> Result<(T, Option<String>), AppError> {
    match result {
        Ok(value) => Ok((value, None)),
        Err(ApiError::Unauthorized) => {
            session.purge();
            Err(AppError::Unauthorized)
        }
        Err(e) => {
            log::warn!("{what} failed: {e}");
            Ok((T::default(), Some(e.to_string())))
        }
    }
}

/// Backend result the handler cannot proceed without. 401 purges the
/// session before redirecting to login.
pub(crate) fn required<T>(session: &Session, result: Result<T, ApiError>) -> Result<T, AppError> {
    match result {
        Ok(value) => Ok(value),
        Err(ApiError::Unauthorized) => {
            session.purge();
            Err(AppError::Unauthorized)
        }
        Err(e) => Err(AppError::Backend(e)),
    }
}
