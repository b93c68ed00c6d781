use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::{AppError, Result};

const ACCEPTED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

const XLSX_MIME: &str = "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";
const XLS_MIME: &str = "application/vnd.ms-excel";
const FALLBACK_MIME: &str = "application/octet-stream";

fn extension_of(file_name: &str) -> String {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .unwrap_or_default()
}

/// Inclusive date range sent as `fecha_inicio` / `fecha_fin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            return Err(AppError::validation(format!(
                "Start date {} is after end date {}",
                start, end
            )));
        }
        Ok(Self { start, end })
    }
}

/// One Excel upload, replayable against several endpoints
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub date_range: Option<DateRange>,
}

impl UploadRequest {
    pub fn new(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            date_range: None,
        }
    }

    /// Read an `.xlsx`/`.xls` file from disk
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| AppError::validation(format!("Invalid file path: {}", path.display())))?
            .to_string();

        if !ACCEPTED_EXTENSIONS.contains(&extension_of(&file_name).as_str()) {
            return Err(AppError::validation(format!(
                "Unsupported file type '{}', expected an Excel file",
                file_name
            )));
        }

        let bytes = tokio::fs::read(path).await?;
        Ok(Self::new(file_name, bytes))
    }

    pub fn with_date_range(mut self, range: DateRange) -> Self {
        self.date_range = Some(range);
        self
    }

    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    /// Content type of the `file` part, picked from the file extension
    pub fn mime_type(&self) -> &'static str {
        match extension_of(&self.file_name).as_str() {
            "xlsx" => XLSX_MIME,
            "xls" => XLS_MIME,
            _ => FALLBACK_MIME,
        }
    }
}
