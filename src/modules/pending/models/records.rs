use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::coerce::{lenient_decimal, lenient_flag, lenient_optional_count, lenient_text};
use crate::modules::periods::DatedRecord;

const UNRELATED_STATUS: &str = "Sin Relacionar";
const UNSPECIFIED_SERVICE: &str = "No especificado";

/// Detail record shared by both pending views
pub trait PendingRecord: DatedRecord {
    /// Day count the backend computed, if it sent one
    fn reported_delay_days(&self) -> Option<i64>;

    /// Backend's own "too old" flag
    fn flagged_old(&self) -> bool {
        false
    }
}

/// A service rendered but not yet paid by the client
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionRecord {
    #[serde(rename = "fecha", default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(rename = "estado", default, deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(rename = "servicio_realizado", default, deserialize_with = "lenient_text")]
    pub service_description: String,
    #[serde(rename = "dias_de_retraso", default, deserialize_with = "lenient_optional_count")]
    pub delay_days: Option<i64>,
    /// Reminder text the backend attaches to overdue services
    #[serde(rename = "mensaje", default, deserialize_with = "lenient_text")]
    pub message: String,
}

impl DatedRecord for CollectionRecord {
    fn date(&self) -> &str {
        &self.date
    }
}

impl PendingRecord for CollectionRecord {
    fn reported_delay_days(&self) -> Option<i64> {
        self.delay_days
    }
}

/// Cash collected by field staff but not yet remitted to the business
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CashRecord {
    #[serde(rename = "fecha", default, deserialize_with = "lenient_text")]
    pub date: String,
    #[serde(rename = "estado", default, deserialize_with = "lenient_text")]
    pub status: String,
    #[serde(rename = "servicio_realizado", default, deserialize_with = "lenient_text")]
    pub service_description: String,
    #[serde(default, deserialize_with = "lenient_decimal")]
    pub subtotal: Decimal,
    #[serde(rename = "iva", default, deserialize_with = "lenient_decimal")]
    pub tax: Decimal,
    #[serde(rename = "total_abrecar", default, deserialize_with = "lenient_decimal")]
    pub total_due: Decimal,
    #[serde(rename = "dias_sin_relacionar", default, deserialize_with = "lenient_optional_count")]
    pub days_unrelated: Option<i64>,
    #[serde(rename = "es_antiguo", default, deserialize_with = "lenient_flag")]
    pub is_old: bool,
}

impl CashRecord {
    /// Status for display; blank or `nan` statuses read as "Sin Relacionar"
    pub fn status_label(&self) -> &str {
        let status = self.status.trim();
        match status.to_ascii_lowercase().as_str() {
            "" | "nan" | "none" => UNRELATED_STATUS,
            _ => status,
        }
    }

    pub fn service_label(&self) -> &str {
        service_label(&self.service_description)
    }
}

impl CollectionRecord {
    pub fn service_label(&self) -> &str {
        service_label(&self.service_description)
    }
}

fn service_label(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("nan") {
        UNSPECIFIED_SERVICE
    } else {
        trimmed
    }
}

impl DatedRecord for CashRecord {
    fn date(&self) -> &str {
        &self.date
    }
}

impl PendingRecord for CashRecord {
    fn reported_delay_days(&self) -> Option<i64> {
        self.days_unrelated
    }

    fn flagged_old(&self) -> bool {
        self.is_old
    }
}
