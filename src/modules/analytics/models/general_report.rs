use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::month_summary::{MonthSummary, PendingCounts, SpecialStatusCounts};
use crate::core::coerce::{
    lenient_count, lenient_decimal, lenient_list, lenient_map, lenient_object, lenient_text,
};

/// Response of `POST /api/analytics`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GeneralAnalytics {
    /// Cash/transfer totals keyed by month (`"Enero 2024"`)
    #[serde(default, deserialize_with = "lenient_map")]
    pub resumen: BTreeMap<String, MonthSummary>,

    #[serde(rename = "pendientes_por_mes", default, deserialize_with = "lenient_map")]
    pub pending_by_month: BTreeMap<String, PendingCounts>,

    #[serde(rename = "total_pendientes_relacionar", default, deserialize_with = "lenient_count")]
    pub total_pending_to_relate: i64,

    #[serde(rename = "total_pendientes_cobrar", default, deserialize_with = "lenient_count")]
    pub total_pending_to_collect: i64,

    #[serde(rename = "estados_grafico", default, deserialize_with = "lenient_object")]
    pub status_chart: StatusChart,

    #[serde(rename = "estados_especiales_por_mes", default, deserialize_with = "lenient_map")]
    pub special_statuses_by_month: BTreeMap<String, SpecialStatusCounts>,

    #[serde(rename = "totales_estados_especiales", default, deserialize_with = "lenient_object")]
    pub special_status_totals: SpecialStatusCounts,

    #[serde(rename = "clientes_recurrentes", default, deserialize_with = "lenient_list")]
    pub client_categories: Vec<ClientCategory>,
}

/// Service counts per status for the whole file (pie chart)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub struct StatusChart {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_servicios: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub ya_relacionado: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub pendiente_cobrar: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cotizacion: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub no_pagaron_domicilio: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub garantia: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub no_se_cobra_domicilio: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cancelado: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub otros: i64,
}

impl StatusChart {
    /// Labelled slices with a non-zero count, in a stable display order
    pub fn slices(&self) -> Vec<(&'static str, i64)> {
        [
            ("Ya relacionado", self.ya_relacionado),
            ("Pendiente cobrar", self.pendiente_cobrar),
            ("Cotización", self.cotizacion),
            ("No pagaron domicilio", self.no_pagaron_domicilio),
            ("Garantía", self.garantia),
            ("No se cobra domicilio", self.no_se_cobra_domicilio),
            ("Cancelado", self.cancelado),
            ("Otros", self.otros),
        ]
        .into_iter()
        .filter(|(_, count)| *count > 0)
        .collect()
    }
}

/// Services and value grouped by client category (administración, empresa, ...)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientCategory {
    #[serde(rename = "cliente", default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(rename = "servicios", default, deserialize_with = "lenient_count")]
    pub services: i64,
    #[serde(rename = "valor", default, deserialize_with = "lenient_decimal")]
    pub value: Decimal,
}

impl GeneralAnalytics {
    /// Client categories ordered by value, highest first
    pub fn ranked_clients(&self) -> Vec<&ClientCategory> {
        let mut ranked: Vec<&ClientCategory> = self.client_categories.iter().collect();
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
        ranked
    }
}
