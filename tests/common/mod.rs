//! Shared test infrastructure for handler-level tests.
//!
//! Every test runs the real route table against a `wiremock` stand-in
//! for the records backend. Sessions ride in the cookie, so helpers
//! track the freshest `Set-Cookie` and replay it on the next request.

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use regex::Regex;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const ADMIN_USER: &str = "admin";
pub const ADMIN_PASS: &str = "admin123";

/// Fixed 64-byte session key so cookies survive across requests
/// within a test.
pub const SESSION_KEY: &[u8] =
    b"0123456789abcdef0123456789abcdef0123456789abcdef0123456789abcdef";

/// Builds the test app against a mock backend. A macro because the
/// `App` type cannot be named from a helper function.
#[macro_export]
macro_rules! spawn_app {
    ($server:expr) => {{
        let config = vidhan_admin::config::AppConfig {
            api_base_url: $server.uri(),
            bind_addr: "127.0.0.1:0".to_string(),
            app_name: "Vidhan Bhavan".to_string(),
        };
        let client = vidhan_admin::api::ApiClient::new(&$server.uri());
        let pending = vidhan_admin::auth::pending::PendingMerges::new();
        actix_web::test::init_service(
            actix_web::App::new()
                .wrap(
                    actix_session::SessionMiddleware::builder(
                        actix_session::storage::CookieSessionStore::default(),
                        actix_web::cookie::Key::from($crate::common::SESSION_KEY),
                    )
                    .cookie_secure(false)
                    .build(),
                )
                .app_data(actix_web::web::Data::new(config))
                .app_data(actix_web::web::Data::new(client))
                .app_data(actix_web::web::Data::new(pending))
                .configure(vidhan_admin::routes::configure),
        )
        .await
    }};
}

/// GET /login, then POST the credentials with the page's CSRF token.
/// Evaluates to `(session_cookie, csrf_token)` for use on later
/// requests.
#[macro_export]
macro_rules! login {
    ($app:expr) => {{
        let resp = actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::get().uri("/login").to_request(),
        )
        .await;
        assert!(resp.status().is_success(), "login page should render");
        let cookie = $crate::common::session_cookie(&resp);
        let body = actix_web::test::read_body(resp).await;
        let csrf = $crate::common::extract_csrf(std::str::from_utf8(&body).unwrap());

        let resp = actix_web::test::call_service(
            &$app,
            actix_web::test::TestRequest::post()
                .uri("/login")
                .cookie(cookie.clone())
                .set_form(&[
                    ("username", $crate::common::ADMIN_USER),
                    ("password", $crate::common::ADMIN_PASS),
                    ("csrf_token", csrf.as_str()),
                ])
                .to_request(),
        )
        .await;
        assert_eq!(
            resp.status(),
            actix_web::http::StatusCode::SEE_OTHER,
            "login should redirect"
        );
        let cookie = $crate::common::session_cookie(&resp);
        (cookie, csrf)
    }};
}

/// Start a mock backend with a login endpoint that accepts the test
/// credentials.
pub async fn mock_backend() -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": { "user": { "user_id": "u-1", "username": ADMIN_USER } }
        })))
        .mount(&server)
        .await;
    server
}

/// Pull the session cookie out of a response's `Set-Cookie` headers.
pub fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == "id")
        .map(|c| c.into_owned())
        .expect("response should carry a session cookie")
}

/// Scrape the CSRF token from a rendered page.
pub fn extract_csrf(html: &str) -> String {
    let re = Regex::new(r#"name="csrf_token" value="([0-9a-f]+)""#).expect("valid regex");
    re.captures(html)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .expect("page should embed a CSRF token")
}

/// A debate record in the backend's current wire shape.
pub fn debate_json(id: &str, sequence_number: i64) -> serde_json::Value {
    json!({
        "id": id,
        "topic": "Water supply in Marathwada",
        "text": "Shri. Deshmukh raised the question of drinking water schemes.",
        "date": "2024-03-12",
        "members": "A. Deshmukh, B. Patil, C. Jadhav",
        "topics": ["water", "drought"],
        "question_number": [101, 102],
        "answers_by": ["Minister of Water Supply"],
        "question_by": ["A. Deshmukh"],
        "lob_type": "Starred Question",
        "kramank_id": 7,
        "image_name": "page_041.png",
        "document_name": "vs_2024_budget_041.pdf",
        "sequence_number": sequence_number,
        "status": "pending"
    })
}

/// The `{success, data: {debate}}` envelope most record endpoints use.
pub fn debate_envelope(debate: serde_json::Value) -> serde_json::Value {
    json!({ "success": true, "data": { "debate": debate } })
}
