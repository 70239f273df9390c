use actix_session::Session;
use actix_web::{HttpResponse, web};
use serde::Deserialize;

use crate::api::{ApiClient, ApiError};
use crate::auth::{csrf, session as auth_session};
use crate::config::AppConfig;
use crate::errors::{AppError, render};
use crate::templates_structs::LoginTemplate;

#[derive(Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
    pub csrf_token: String,
}

#[derive(Deserialize)]
pub struct CsrfOnly {
    pub csrf_token: String,
}

pub async fn login_page(
    config: web::Data<AppConfig>,
    session: Session,
) -> Result<HttpResponse, AppError> {
    // If already logged in, redirect to dashboard
    if auth_session::get_token(&session).is_some() {
        return Ok(HttpResponse::SeeOther()
            .insert_header(("Location", "/dashboard"))
            .finish());
    }

    let csrf_token = csrf::get_or_create_token(&session);
    let tmpl = LoginTemplate {
        error: None,
        app_name: config.app_name.clone(),
        csrf_token,
    };
    render(tmpl)
}

pub async fn login_submit(
    client: web::Data<ApiClient>,
    config: web::Data<AppConfig>,
    session: Session,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;

    // Credential checking is delegated to the backend; the returned
    // user id becomes the bearer token for every later call.
    match client.login(&form.username, &form.password).await {
        Ok(user) => {
            auth_session::store_login(&session, &user);
            Ok(HttpResponse::SeeOther()
                .insert_header(("Location", "/dashboard"))
                .finish())
        }
        Err(e) => {
            let message = match &e {
                ApiError::Unauthorized | ApiError::Status { .. } => {
                    "Invalid username or password".to_string()
                }
                other => {
                    log::warn!("login failed: {other}");
                    other.to_string()
                }
            };
            let csrf_token = csrf::get_or_create_token(&session);
            let tmpl = LoginTemplate {
                error: Some(message),
                app_name: config.app_name.clone(),
                csrf_token,
            };
            render(tmpl)
        }
    }
}

pub async fn logout(
    session: Session,
    form: web::Form<CsrfOnly>,
) -> Result<HttpResponse, AppError> {
    csrf::validate_csrf(&session, &form.csrf_token)?;
    Ok(auth_session::force_logout(&session))
}
