use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::records::{CashRecord, CollectionRecord};
use super::summaries::{CashMonthSummary, CollectionMonthSummary};
use crate::core::coerce::{lenient_flag, lenient_list, lenient_map};

/// Response of `POST /api/analytics_pendientes_cobrar`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingCollectionReport {
    /// Summaries keyed by period (`"2024-01"`)
    #[serde(default, deserialize_with = "lenient_map")]
    pub resumen: BTreeMap<String, CollectionMonthSummary>,
    #[serde(rename = "detalle", default, deserialize_with = "lenient_list")]
    pub records: Vec<CollectionRecord>,
    /// Set when the uploaded file had no pending rows at all
    #[serde(default, deserialize_with = "lenient_flag")]
    pub filter_empty: bool,
}

/// Response of `POST /api/analytics_pendientes_efectivo`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PendingCashReport {
    #[serde(default, deserialize_with = "lenient_map")]
    pub resumen: BTreeMap<String, CashMonthSummary>,
    #[serde(rename = "detalle", default, deserialize_with = "lenient_list")]
    pub records: Vec<CashRecord>,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub filter_empty: bool,
}
