use std::time::Duration;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::records::{
    Debate, Karywali, Kramank, LegislativeSession, Member, MergeCandidate, Resolution,
};

use super::error::ApiError;

const REQUEST_TIMEOUT_SECS: u64 = 30;

/// The operator identity the backend hands back on login. The user id
/// doubles as the bearer token on every subsequent call.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    #[serde(deserialize_with = "crate::records::multi::de_id")]
    pub user_id: String,
    pub username: String,
}

/// Typed client for the Vidhan Bhavan REST backend.
///
/// One instance is shared across all workers; `reqwest::Client` is
/// internally pooled. Tokens are passed per call rather than stored,
/// since they belong to the operator's session, not the process.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    /// Map the response status onto the error taxonomy. 401 is the one
    /// status with a global meaning; every other non-2xx only carries
    /// an optional human-readable message.
    async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status.as_u16() == 401 {
            return Err(ApiError::Unauthorized);
        }
        let message = resp.text().await.ok().and_then(|body| {
            let v: Value = serde_json::from_str(&body).ok()?;
            v.get("detail")
                .or_else(|| v.get("message"))
                .and_then(Value::as_str)
                .map(String::from)
        });
        Err(ApiError::Status { status: status.as_u16(), message })
    }

    async fn get_json(&self, token: &str, path: &str) -> Result<Value, ApiError> {
        let resp = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        resp.json::<Value>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Unwrap a collection that may arrive as `{success, data: {key:
    /// [...]}}`, `{key: [...]}`, or a bare array.
    fn unwrap_collection<T: DeserializeOwned>(body: Value, key: &str) -> Result<Vec<T>, ApiError> {
        let inner = body
            .pointer(&format!("/data/{key}"))
            .or_else(|| body.get(key))
            .cloned()
            .unwrap_or(body);
        serde_json::from_value(inner).map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn get_collection<T: DeserializeOwned>(
        &self,
        token: &str,
        path: &str,
        key: &str,
    ) -> Result<Vec<T>, ApiError> {
        let body = self.get_json(token, path).await?;
        Self::unwrap_collection(body, key)
    }

    // ── Authentication ──────────────────────────────────────────────

    pub async fn login(&self, username: &str, password: &str) -> Result<AuthUser, ApiError> {
        let resp = self
            .http
            .post(self.url("/login"))
            .json(&serde_json::json!({ "username": username, "password": password }))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        let body: Value = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        let user = body
            .pointer("/data/user")
            .or_else(|| body.get("user"))
            .cloned()
            .unwrap_or(body);
        serde_json::from_value(user).map_err(|e| ApiError::Decode(e.to_string()))
    }

    // ── Collections ─────────────────────────────────────────────────

    pub async fn sessions(&self, token: &str) -> Result<Vec<LegislativeSession>, ApiError> {
        self.get_collection(token, "/sessions", "sessions").await
    }

    pub async fn session_members(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<Vec<Member>, ApiError> {
        self.get_collection(token, &format!("/sessions/{session_id}/members"), "members")
            .await
    }

    pub async fn session_kramanks(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<Vec<Kramank>, ApiError> {
        self.get_collection(token, &format!("/sessions/{session_id}/kramanks"), "kramanks")
            .await
    }

    pub async fn session_karywalis(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<Vec<Karywali>, ApiError> {
        self.get_collection(
            token,
            &format!("/sessions/{session_id}/karywalis"),
            "karywalis",
        )
        .await
    }

    pub async fn session_resolutions(
        &self,
        token: &str,
        session_id: &str,
    ) -> Result<Vec<Resolution>, ApiError> {
        self.get_collection(
            token,
            &format!("/sessions/{session_id}/resolutions"),
            "resolutions",
        )
        .await
    }

    pub async fn kramank_debates(
        &self,
        token: &str,
        kramank_id: &str,
    ) -> Result<Vec<Debate>, ApiError> {
        self.get_collection(token, &format!("/kramanks/{kramank_id}/debates"), "debates")
            .await
    }

    // ── Debate record operations ────────────────────────────────────

    pub async fn debate(&self, token: &str, id: &str) -> Result<Debate, ApiError> {
        let body = self.get_json(token, &format!("/debates/{id}")).await?;
        let inner = body
            .pointer("/data/debate")
            .or_else(|| body.get("debate"))
            .cloned()
            .unwrap_or(body);
        serde_json::from_value(inner).map_err(|e| ApiError::Decode(e.to_string()))
    }

    pub async fn update_debate(&self, token: &str, debate: &Debate) -> Result<(), ApiError> {
        let resp = self
            .http
            .put(self.url(&format!("/debates/{}", debate.id)))
            .bearer_auth(token)
            .json(debate)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    pub async fn delete_debate(&self, token: &str, id: &str) -> Result<(), ApiError> {
        let resp = self
            .http
            .delete(self.url(&format!("/debates/{id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Ask for the record with the smallest sequence number strictly
    /// greater than the given one. A missing successor is a normal
    /// outcome and comes back as `None`, not an error.
    pub async fn next_debate(
        &self,
        token: &str,
        sequence_number: i64,
    ) -> Result<Option<MergeCandidate>, ApiError> {
        let body = self
            .get_json(token, &format!("/debates/next/{sequence_number}"))
            .await?;
        let node = body
            .pointer("/data/debate")
            .or_else(|| body.get("debate"))
            .cloned()
            .unwrap_or(Value::Null);
        if node.is_null() {
            return Ok(None);
        }
        let debate: Debate =
            serde_json::from_value(node).map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(MergeCandidate::from_debate(&debate))
    }

    /// Merge `target_id` into `id`. The backend owns the merge
    /// semantics entirely; callers must refetch afterwards and treat
    /// the result as opaque.
    pub async fn merge_debates(
        &self,
        token: &str,
        id: &str,
        target_id: &str,
    ) -> Result<(), ApiError> {
        let resp = self
            .http
            .post(self.url(&format!("/debates/{id}/merge/{target_id}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }

    /// Stream the source PDF for a debate document. The caller relays
    /// the byte stream to the browser.
    pub async fn fetch_pdf(
        &self,
        token: &str,
        document_name: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let resp = self
            .http
            .get(self.url(&format!("/pdf/{document_name}")))
            .bearer_auth(token)
            .send()
            .await?;
        Self::check(resp).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwrap_collection_handles_all_three_envelope_shapes() {
        let wrapped = serde_json::json!({
            "success": true,
            "data": { "sessions": [{"session_id": 1}] }
        });
        let flat = serde_json::json!({ "sessions": [{"session_id": 1}] });
        let bare = serde_json::json!([{"session_id": 1}]);

        for body in [wrapped, flat, bare] {
            let rows: Vec<LegislativeSession> =
                ApiClient::unwrap_collection(body, "sessions").expect("decode");
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].session_id, "1");
        }
    }

    #[test]
    fn unwrap_collection_reports_shape_mismatch() {
        let body = serde_json::json!({ "data": { "sessions": "not a list" } });
        let res: Result<Vec<LegislativeSession>, _> =
            ApiClient::unwrap_collection(body, "sessions");
        assert!(res.is_err());
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let client = ApiClient::new("http://backend/api/");
        assert_eq!(client.url("/sessions"), "http://backend/api/sessions");
    }
}
