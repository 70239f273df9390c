/// Runtime configuration, read once at startup from the environment
/// (a `.env` file is honored via dotenvy).
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base URL of the Vidhan Bhavan REST backend, including the `/api` prefix.
    pub api_base_url: String,
    /// Address the dashboard binds to.
    pub bind_addr: String,
    /// Display name shown in the chrome and the login page.
    pub app_name: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("VIDHAN_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8000/api".to_string());
        let bind_addr =
            std::env::var("BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string());
        let app_name =
            std::env::var("APP_NAME").unwrap_or_else(|_| "Vidhan Bhavan".to_string());
        Self { api_base_url, bind_addr, app_name }
    }
}
