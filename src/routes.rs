use actix_web::{HttpResponse, web};

use crate::auth;
use crate::handlers;

async fn root_redirect() -> HttpResponse {
    HttpResponse::SeeOther()
        .insert_header(("Location", "/dashboard"))
        .finish()
}

/// Full route table. Shared between the binary and the integration
/// tests, which wrap it in their own session middleware.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        // Public routes
        .route("/login", web::get().to(handlers::auth_handlers::login_page))
        .route("/login", web::post().to(handlers::auth_handlers::login_submit))
        .route("/", web::get().to(root_redirect))
        // Protected routes
        .service(
            web::scope("")
                .wrap(actix_web::middleware::from_fn(auth::middleware::require_auth))
                .route("/dashboard", web::get().to(handlers::dashboard::index))
                .route("/logout", web::post().to(handlers::auth_handlers::logout))
                .route("/sessions", web::get().to(handlers::session_handlers::list))
                .route("/members", web::get().to(handlers::member_handlers::list))
                .route("/karywalis", web::get().to(handlers::karywali_handlers::list))
                .route("/resolutions", web::get().to(handlers::resolution_handlers::list))
                .route("/debates", web::get().to(handlers::debate_handlers::list))
                .route("/debates/{id}", web::get().to(handlers::debate_handlers::detail))
                .route("/debates/{id}", web::post().to(handlers::debate_handlers::update))
                .route(
                    "/debates/{id}/delete",
                    web::post().to(handlers::debate_handlers::delete),
                )
                .route(
                    "/debates/{id}/merge",
                    web::get().to(handlers::debate_handlers::merge_page),
                )
                .route(
                    "/debates/{id}/merge",
                    web::post().to(handlers::debate_handlers::merge_submit),
                )
                // PDF relay for the embedded viewer / download link
                .route(
                    "/pdf/{document_name}",
                    web::get().to(handlers::pdf_handlers::fetch),
                ),
        );
}
