//! Session-backed credential state. The cookie session holds the
//! bearer token and username between requests; it is written by login
//! and cleared by logout or any backend 401.

use actix_session::Session;
use actix_web::HttpResponse;

use crate::api::AuthUser;
use crate::errors::AppError;

const TOKEN_KEY: &str = "api_token";
const USERNAME_KEY: &str = "username";
const FLASH_KEY: &str = "flash";

pub fn store_login(session: &Session, user: &AuthUser) {
    let _ = session.insert(TOKEN_KEY, &user.user_id);
    let _ = session.insert(USERNAME_KEY, &user.username);
}

pub fn get_token(session: &Session) -> Option<String> {
    session.get::<String>(TOKEN_KEY).unwrap_or(None)
}

pub fn get_username(session: &Session) -> Result<String, AppError> {
    session
        .get::<String>(USERNAME_KEY)
        .map_err(|e| AppError::Session(format!("Session error: {e}")))?
        .ok_or_else(|| AppError::Session("No username in session".to_string()))
}

/// Token for the current request, or an error that redirects to login.
pub fn require_token(session: &Session) -> Result<String, AppError> {
    get_token(session).ok_or(AppError::Unauthorized)
}

pub fn set_flash(session: &Session, message: impl Into<String>) {
    let _ = session.insert(FLASH_KEY, message.into());
}

pub fn take_flash(session: &Session) -> Option<String> {
    let flash = session.get::<String>(FLASH_KEY).unwrap_or(None);
    if flash.is_some() {
        session.remove(FLASH_KEY);
    }
    flash
}

/// Clear credentials and send the operator to the login entry point.
/// Used for explicit logout and for the forced logout on a backend 401.
pub fn force_logout(session: &Session) -> HttpResponse {
    session.purge();
    HttpResponse::SeeOther()
        .insert_header(("Location", "/login"))
        .finish()
}
