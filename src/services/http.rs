// ============================================================================
// HTTP GATEWAY - Credential injection + envelope normalization (stateless)
// ============================================================================
// Every outbound request goes through here: the current token is attached
// as a bearer credential, and every response is reduced to either the
// unwrapped payload or an ApiError. The one piece of local recovery is
// clearing the session store when a 401 comes back; everything else
// propagates to the caller untouched. No retries, no queueing.
// ============================================================================

use std::fmt;

use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::CONFIG;
use crate::stores::SessionStore;

/// Shown when the server gives us nothing better.
const GENERIC_FAILURE: &str = "请求失败";

/// Uniform error shape for transport and application failures alike.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub message: String,
    pub code: String,
    /// HTTP status for non-2xx responses; `None` for transport failures
    /// and for 2xx envelopes that signal failure.
    pub status: Option<u16>,
    pub details: Option<Value>,
}

impl ApiError {
    /// No response was obtained at all (network unreachable, CORS, ...).
    pub fn network(message: String) -> Self {
        Self {
            message,
            code: "network_error".to_string(),
            status: None,
            details: None,
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ApiError {}

#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    details: Option<Value>,
}

/// Server envelope: `{ok: true, data}` on success, `{error: {...}}` or
/// legacy `{msg}` on failure.
#[derive(Deserialize, Default)]
struct Envelope {
    #[serde(default)]
    ok: bool,
    #[serde(default)]
    data: Option<Value>,
    #[serde(default)]
    error: Option<ErrorBody>,
    #[serde(default)]
    msg: Option<String>,
}

fn bearer(token: &str) -> Option<String> {
    if token.is_empty() {
        None
    } else {
        Some(format!("Bearer {}", token))
    }
}

/// Reduce (status, body) to payload or ApiError. Pure, no side effects.
fn decode_envelope<T: DeserializeOwned>(status: u16, body: Value) -> Result<T, ApiError> {
    let success_status = (200..300).contains(&status);
    let envelope: Envelope = serde_json::from_value(body).unwrap_or_default();

    if success_status && envelope.ok {
        let data = envelope.data.unwrap_or(Value::Null);
        return serde_json::from_value(data).map_err(|e| ApiError {
            message: format!("Unexpected response payload: {}", e),
            code: "decode_error".to_string(),
            status: None,
            details: None,
        });
    }

    let (message, code, details) = match envelope.error {
        Some(err) => (err.message, err.code, err.details),
        None => (None, None, None),
    };

    Err(ApiError {
        message: message
            .or(envelope.msg)
            .unwrap_or_else(|| GENERIC_FAILURE.to_string()),
        code: code.unwrap_or_else(|| {
            if success_status {
                "request_failed".to_string()
            } else {
                format!("http_{}", status)
            }
        }),
        status: if success_status { None } else { Some(status) },
        details,
    })
}

/// API gateway. Holds the session store handle explicitly so the 401 →
/// clear-session coupling is visible at construction time.
#[derive(Clone)]
pub struct Http {
    base_url: String,
    session: SessionStore,
}

impl Http {
    pub fn new(session: SessionStore) -> Self {
        Self::with_base_url(CONFIG.api_base_url.clone(), session)
    }

    pub fn with_base_url(base_url: impl Into<String>, session: SessionStore) -> Self {
        Self {
            base_url: base_url.into(),
            session,
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::GET, path, &[], None).await
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        self.request(Method::GET, path, query, None).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request(Method::POST, path, &[], Some(to_body(body)?)).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ApiError> {
        self.request(Method::PUT, path, &[], Some(to_body(body)?)).await
    }

    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request(Method::DELETE, path, &[], None).await
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        query: &[(&str, String)],
        body: Option<Value>,
    ) -> Result<T, ApiError> {
        let url = format!("{}{}", self.base_url, path);
        let mut builder = RequestBuilder::new(&url).method(method);

        if !query.is_empty() {
            builder = builder.query(query.iter().map(|(k, v)| (*k, v.as_str())));
        }
        if let Some(header) = bearer(&self.session.token()) {
            builder = builder.header("Authorization", &header);
        }

        let request = match body {
            Some(json) => builder.json(&json),
            None => builder.build(),
        }
        .map_err(|e| ApiError::network(e.to_string()))?;

        let response = request
            .send()
            .await
            .map_err(|e| ApiError::network(e.to_string()))?;

        let status = response.status();
        let body = response.json::<Value>().await.unwrap_or(Value::Null);

        self.settle(status, body)
    }

    /// Normalize the response and run the 401 hook. Split out from
    /// `request` so it can run without a browser.
    pub(crate) fn settle<T: DeserializeOwned>(
        &self,
        status: u16,
        body: Value,
    ) -> Result<T, ApiError> {
        let result = decode_envelope(status, body);
        if status == 401 {
            log::warn!("🔒 401 from server, dropping local session");
            self.session.clear();
        }
        result
    }
}

fn to_body(body: &impl Serialize) -> Result<Value, ApiError> {
    serde_json::to_value(body).map_err(|e| ApiError {
        message: format!("Could not serialize request body: {}", e),
        code: "request_error".to_string(),
        status: None,
        details: None,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::models::{Role, User};
    use crate::stores::{MemoryBackend, SessionStore};

    fn http_with_store() -> (Http, SessionStore) {
        let store = SessionStore::new(Box::new(MemoryBackend::default()));
        (Http::with_base_url("http://test", store.clone()), store)
    }

    fn sample_user() -> User {
        User {
            user_id: 1,
            username: "desk".to_string(),
            role: Role::Receptionist,
            status: Some("active".to_string()),
            emp_id: Some("E001".to_string()),
            employee: None,
            patient_id: None,
            patient: None,
        }
    }

    #[test]
    fn ok_envelope_yields_payload() {
        let value: Value = decode_envelope(200, json!({"ok": true, "data": {"id": 1}})).unwrap();
        assert_eq!(value, json!({"id": 1}));
    }

    #[test]
    fn error_envelope_yields_message_and_code() {
        let err = decode_envelope::<Value>(200, json!({"error": {"message": "x", "code": "c"}}))
            .unwrap_err();
        assert_eq!(err.message, "x");
        assert_eq!(err.code, "c");
        assert_eq!(err.status, None);
    }

    #[test]
    fn legacy_msg_field_is_used_as_fallback() {
        let err = decode_envelope::<Value>(400, json!({"msg": "旧格式错误"})).unwrap_err();
        assert_eq!(err.message, "旧格式错误");
        assert_eq!(err.code, "http_400");
        assert_eq!(err.status, Some(400));
    }

    #[test]
    fn empty_body_defaults_to_generic_failure() {
        let err = decode_envelope::<Value>(500, Value::Null).unwrap_err();
        assert_eq!(err.message, GENERIC_FAILURE);
        assert_eq!(err.code, "http_500");
        assert_eq!(err.status, Some(500));
    }

    #[test]
    fn failed_envelope_on_2xx_carries_no_status() {
        let err = decode_envelope::<Value>(200, json!({"ok": false})).unwrap_err();
        assert_eq!(err.code, "request_failed");
        assert_eq!(err.status, None);
    }

    #[test]
    fn details_are_passed_through() {
        let err = decode_envelope::<Value>(
            400,
            json!({"error": {"message": "bad", "code": "validation_error", "details": {"field": "phone"}}}),
        )
        .unwrap_err();
        assert_eq!(err.details, Some(json!({"field": "phone"})));
    }

    #[test]
    fn settle_clears_session_on_401_and_still_fails() {
        let (http, store) = http_with_store();
        store.write("tok", &sample_user());

        let err = http
            .settle::<Value>(401, json!({"error": {"message": "expired", "code": "unauthorized"}}))
            .unwrap_err();

        assert_eq!(err.code, "unauthorized");
        assert_eq!(err.status, Some(401));
        let (token, user) = store.read();
        assert_eq!(token, "");
        assert!(user.is_none());
    }

    #[test]
    fn settle_keeps_session_on_other_failures() {
        let (http, store) = http_with_store();
        store.write("tok", &sample_user());

        let _ = http.settle::<Value>(500, Value::Null).unwrap_err();

        assert_eq!(store.token(), "tok");
        assert!(store.user().is_some());
    }

    #[test]
    fn bearer_header_only_for_non_empty_token() {
        assert_eq!(bearer("abc"), Some("Bearer abc".to_string()));
        assert_eq!(bearer(""), None);
    }

    #[test]
    fn network_error_has_no_status() {
        let err = ApiError::network("fetch failed".to_string());
        assert_eq!(err.code, "network_error");
        assert_eq!(err.status, None);
    }
}
