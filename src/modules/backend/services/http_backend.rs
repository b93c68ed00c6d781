use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use serde_json::Value;
use tracing::{debug, error, info};

use super::backend_trait::{AnalyticsBackend, Endpoint};
use crate::config::BackendConfig;
use crate::core::dates::format_form_date;
use crate::core::{AppError, Result};
use crate::modules::backend::models::UploadRequest;

/// Backend reached over HTTP with a multipart upload
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    pub fn new(config: BackendConfig) -> Result<Self> {
        let client = config.create_client()?;
        Ok(Self { client, config })
    }

    pub fn timeout(&self) -> Duration {
        self.config.timeout()
    }

    fn build_form(request: &UploadRequest) -> Result<Form> {
        let part = Part::bytes(request.bytes.clone())
            .file_name(request.file_name.clone())
            .mime_str(request.mime_type())?;

        let mut form = Form::new().part("file", part);
        if let Some(range) = request.date_range {
            form = form
                .text("fecha_inicio", format_form_date(range.start))
                .text("fecha_fin", format_form_date(range.end));
        }
        Ok(form)
    }

    fn map_send_error(&self, e: reqwest::Error) -> AppError {
        if e.is_timeout() {
            AppError::Timeout(self.timeout())
        } else {
            AppError::HttpClient(e)
        }
    }
}

#[async_trait]
impl AnalyticsBackend for HttpBackend {
    async fn upload(&self, endpoint: Endpoint, request: &UploadRequest) -> Result<Value> {
        let url = self.config.endpoint(endpoint.path());

        info!(
            endpoint = %endpoint,
            file = %request.file_name,
            bytes = request.size(),
            "Uploading file to analytics backend"
        );

        let response = self
            .client
            .post(&url)
            .multipart(Self::build_form(request)?)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        match parse_envelope(status, &body) {
            Ok(payload) => {
                debug!(endpoint = %endpoint, status = %status, "Analytics payload received");
                Ok(payload)
            }
            Err(e) => {
                error!(endpoint = %endpoint, status = %status, error = %e, "Analytics request failed");
                Err(e)
            }
        }
    }

    fn name(&self) -> &str {
        "http"
    }
}

/// Interpret a backend response.
///
/// An `error` field wins regardless of status and is surfaced verbatim, as is
/// `success: false`. A non-2xx status without one is a network failure.
pub fn parse_envelope(status: StatusCode, body: &str) -> Result<Value> {
    let parsed: std::result::Result<Value, serde_json::Error> = serde_json::from_str(body);

    if let Ok(Value::Object(map)) = &parsed {
        if let Some(message) = map.get("error").and_then(error_text) {
            return Err(AppError::Backend(message));
        }
        if map.get("success") == Some(&Value::Bool(false)) {
            return Err(AppError::backend("The analytics server could not process the file"));
        }
    }

    if !status.is_success() {
        return Err(AppError::network(format!("HTTP {}", status)));
    }

    match parsed? {
        payload @ Value::Object(_) => Ok(payload),
        other => Err(AppError::backend(format!(
            "Unexpected analytics payload: {}",
            json_kind(&other)
        ))),
    }
}

fn error_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Some(s.clone()),
        Value::Null => None,
        Value::String(_) => None,
        other => Some(other.to_string()),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
