use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure: DNS, refused connection, timeout.
    Transport(reqwest::Error),
    /// Non-2xx answer. `message` is the backend's `detail`/`message`
    /// field when the error body carried one.
    Status { status: u16, message: Option<String> },
    /// The response body did not match any known shape.
    Decode(String),
    /// 401 — the stored token is no longer accepted.
    Unauthorized,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(e) => write!(f, "backend unreachable: {e}"),
            ApiError::Status { status, message: Some(m) } => {
                write!(f, "backend returned {status}: {m}")
            }
            ApiError::Status { status, message: None } => {
                write!(f, "backend returned {status}")
            }
            ApiError::Decode(e) => write!(f, "unexpected backend response: {e}"),
            ApiError::Unauthorized => write!(f, "backend rejected credentials"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        ApiError::Transport(e)
    }
}
