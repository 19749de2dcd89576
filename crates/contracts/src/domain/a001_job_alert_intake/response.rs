use super::{FAILED_TO_SUBMIT, SOMETHING_WENT_WRONG};
use serde::Deserialize;
use serde_json::Value;

/// Status code and body text as received from the upload endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// JSON body of the upload endpoint.
///
/// Flask reports failures as `error`, FastAPI as `detail` (a string, or a list
/// of `{msg, ...}` objects for request validation errors). Fields are kept as
/// raw JSON so an odd shape in one of them never hides the others.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<Value>,
    #[serde(default)]
    pub error: Option<Value>,
    #[serde(default)]
    pub detail: Option<Value>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// What the server recorded, echoed back on success.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct UploadEcho {
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub whatsapp: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub cv: Option<String>,
}

impl UploadResponse {
    /// Error text from `error`, then `detail`. Blank strings are ignored.
    pub fn error_message(&self) -> Option<String> {
        if let Some(e) = text(self.error.as_ref()) {
            return Some(e.to_string());
        }
        match &self.detail {
            Some(Value::Array(items)) => items
                .iter()
                .find_map(|item| text(item.get("msg")))
                .map(str::to_string),
            detail => text(detail.as_ref()).map(str::to_string),
        }
    }

    pub fn success_message(&self) -> Option<&str> {
        text(self.message.as_ref())
    }

    /// The `data` echo, when it has the expected shape.
    pub fn echo(&self) -> Option<UploadEcho> {
        let data = self.data.as_ref()?;
        match serde_json::from_value(data.clone()) {
            Ok(echo) => Some(echo),
            Err(e) => {
                log::debug!("ignoring unexpected upload echo: {}", e);
                None
            }
        }
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HealthStatus {
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn is_healthy(&self) -> bool {
        self.status.eq_ignore_ascii_case("healthy")
    }
}

/// Final result of one submission as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded(String),
    Failed(String),
}

/// Map a received response onto an outcome.
///
/// - unparseable body: generic transport failure
/// - non-2xx: server error text or a generic message
/// - 2xx without a `message`: treated as an unknown shape, generic failure
pub fn interpret_response(raw: &RawResponse) -> SubmissionOutcome {
    let parsed: UploadResponse = match serde_json::from_str(&raw.body) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::warn!("upload response (HTTP {}) is not valid JSON: {}", raw.status, e);
            return SubmissionOutcome::Failed(FAILED_TO_SUBMIT.to_string());
        }
    };

    if !raw.is_success() {
        let message = parsed
            .error_message()
            .unwrap_or_else(|| SOMETHING_WENT_WRONG.to_string());
        return SubmissionOutcome::Failed(message);
    }

    if let Some(echo) = parsed.echo() {
        log::debug!(
            "server recorded cv={:?} skills={} whatsapp={} email={}",
            echo.cv,
            echo.skills.as_deref().is_some_and(|s| !s.is_empty()),
            echo.whatsapp.as_deref().is_some_and(|s| !s.is_empty()),
            echo.email.as_deref().is_some_and(|s| !s.is_empty()),
        );
    }

    match parsed.success_message() {
        Some(message) => SubmissionOutcome::Succeeded(message.to_string()),
        None => SubmissionOutcome::Failed(SOMETHING_WENT_WRONG.to_string()),
    }
}

/// Non-blank string value; any other JSON type counts as absent.
fn text(value: Option<&Value>) -> Option<&str> {
    value
        .and_then(Value::as_str)
        .filter(|s| !s.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_message() {
        let raw = RawResponse::new(200, r#"{"message":"ok"}"#);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Succeeded("ok".into())
        );
    }

    #[test]
    fn test_success_with_echo() {
        let body = r#"{
            "message": "You are now on the list for job alerts.",
            "data": {"skills": "Rust", "whatsapp": "", "email": "a@b.c", "cv": null}
        }"#;
        let raw = RawResponse::new(200, body);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Succeeded("You are now on the list for job alerts.".into())
        );
    }

    #[test]
    fn test_error_field() {
        let raw = RawResponse::new(400, r#"{"error":"bad file"}"#);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed("bad file".into())
        );
    }

    #[test]
    fn test_fastapi_detail() {
        let raw = RawResponse::new(400, r#"{"detail":"Please provide a CV or skills"}"#);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed("Please provide a CV or skills".into())
        );

        let raw = RawResponse::new(
            422,
            r#"{"detail":[{"loc":["body","email"],"msg":"field required","type":"value_error"}]}"#,
        );
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed("field required".into())
        );
    }

    #[test]
    fn test_non_success_without_error_text() {
        let raw = RawResponse::new(500, "{}");
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed(SOMETHING_WENT_WRONG.into())
        );
    }

    #[test]
    fn test_unparseable_body() {
        let raw = RawResponse::new(502, "<html>Bad Gateway</html>");
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed(FAILED_TO_SUBMIT.into())
        );
    }

    #[test]
    fn test_success_status_without_message() {
        let raw = RawResponse::new(200, r#"{"data":{}}"#);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed(SOMETHING_WENT_WRONG.into())
        );
    }

    #[test]
    fn test_success_with_unexpected_echo_shape() {
        let raw = RawResponse::new(200, r#"{"message":"ok","data":"stored"}"#);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Succeeded("ok".into())
        );

        let raw = RawResponse::new(
            200,
            r#"{"message":"ok","data":{"cv":{"name":"cv.pdf","size":1024}}}"#,
        );
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Succeeded("ok".into())
        );
    }

    #[test]
    fn test_structured_error_field_falls_back() {
        let raw = RawResponse::new(400, r#"{"error":{"code":"too_large"}}"#);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed(SOMETHING_WENT_WRONG.into())
        );

        let raw = RawResponse::new(400, r#"{"error":{"code":"too_large"},"detail":"File too large"}"#);
        assert_eq!(
            interpret_response(&raw),
            SubmissionOutcome::Failed("File too large".into())
        );
    }

    #[test]
    fn test_echo_parsed_when_well_formed() {
        let parsed: UploadResponse = serde_json::from_str(
            r#"{"message":"ok","data":{"skills":"Rust","email":"a@b.c","cv":"cv.pdf"}}"#,
        )
        .unwrap();
        let echo = parsed.echo().unwrap();
        assert_eq!(echo.cv.as_deref(), Some("cv.pdf"));
        assert_eq!(echo.whatsapp, None);
    }

    #[test]
    fn test_health_status() {
        let health: HealthStatus =
            serde_json::from_str(r#"{"status":"healthy","message":"WorkAlert API is running"}"#)
                .unwrap();
        assert!(health.is_healthy());
        assert!(!HealthStatus::default().is_healthy());
    }
}
