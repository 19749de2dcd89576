//! Job Alert Intake - Model (API functions)

use async_trait::async_trait;
use contracts::domain::a001_job_alert_intake::{
    RawResponse, TransportError, UploadPayload, UploadTransport, FIELD_CV,
};
use gloo_net::http::Request;
use web_sys::{AbortSignal, File, FormData};

/// Posts the intake form as `multipart/form-data` with `gloo-net`.
///
/// No timeout and no retry; the optional abort signal lets the view cancel
/// the fetch when it unmounts.
pub struct GlooUploadTransport {
    endpoint: String,
    abort: Option<AbortSignal>,
}

impl GlooUploadTransport {
    pub fn new(endpoint: impl Into<String>, abort: Option<AbortSignal>) -> Self {
        Self {
            endpoint: endpoint.into(),
            abort,
        }
    }
}

#[async_trait(?Send)]
impl UploadTransport<File> for GlooUploadTransport {
    async fn send(&self, payload: UploadPayload<File>) -> Result<RawResponse, TransportError> {
        let form_data = build_form_data(&payload).map_err(TransportError::new)?;

        let response = Request::post(&self.endpoint)
            .abort_signal(self.abort.as_ref())
            .body(form_data)
            .map_err(|e| TransportError::new(format!("Failed to build request: {}", e)))?
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Failed to send request: {}", e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| TransportError::new(format!("Failed to read response: {}", e)))?;

        Ok(RawResponse::new(status, body))
    }
}

/// `cv` is appended only when a file is picked; text fields always are.
fn build_form_data(payload: &UploadPayload<File>) -> Result<FormData, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    if let Some(cv) = &payload.cv {
        form_data
            .append_with_blob_and_filename(FIELD_CV, &cv.handle, &cv.name)
            .map_err(|e| format!("{e:?}"))?;
    }
    for (name, value) in payload.text_fields() {
        form_data
            .append_with_str(name, value)
            .map_err(|e| format!("{e:?}"))?;
    }
    Ok(form_data)
}
