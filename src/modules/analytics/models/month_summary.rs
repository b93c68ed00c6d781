use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::coerce::{lenient_count, lenient_decimal};
use crate::modules::periods::PeriodSummary;

/// Cash and transfer totals for one month (or the sum of many)
///
/// `general_total` is taken from the backend as given, not re-derived from
/// the cash and transfer parts. Merged sums saturate instead of overflowing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthSummary {
    #[serde(rename = "efectivo_total", default, deserialize_with = "lenient_decimal")]
    pub cash_total: Decimal,
    #[serde(rename = "efectivo_cantidad", default, deserialize_with = "lenient_count")]
    pub cash_count: i64,
    #[serde(rename = "transferencia_total", default, deserialize_with = "lenient_decimal")]
    pub transfer_total: Decimal,
    #[serde(rename = "transferencia_cantidad", default, deserialize_with = "lenient_count")]
    pub transfer_count: i64,
    #[serde(rename = "total_general", default, deserialize_with = "lenient_decimal")]
    pub general_total: Decimal,
    #[serde(rename = "cantidad_general", default, deserialize_with = "lenient_count")]
    pub general_count: i64,
}

impl PeriodSummary for MonthSummary {
    fn merge(&mut self, other: &Self) {
        self.cash_total = self.cash_total.saturating_add(other.cash_total);
        self.cash_count = self.cash_count.saturating_add(other.cash_count);
        self.transfer_total = self.transfer_total.saturating_add(other.transfer_total);
        self.transfer_count = self.transfer_count.saturating_add(other.transfer_count);
        self.general_total = self.general_total.saturating_add(other.general_total);
        self.general_count = self.general_count.saturating_add(other.general_count);
    }
}

/// Services still pending per month, as counted by the general endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PendingCounts {
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_pendientes_relacionar: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub total_pendientes_cobrar: i64,
}

impl PeriodSummary for PendingCounts {
    fn merge(&mut self, other: &Self) {
        self.total_pendientes_relacionar = self
            .total_pendientes_relacionar
            .saturating_add(other.total_pendientes_relacionar);
        self.total_pendientes_cobrar = self
            .total_pendientes_cobrar
            .saturating_add(other.total_pendientes_cobrar);
    }
}

/// Services closed without a normal payment, per month
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecialStatusCounts {
    #[serde(default, deserialize_with = "lenient_count")]
    pub no_pagaron_domicilio: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub garantia: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cancelado: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub no_se_cobra_domicilio: i64,
    #[serde(default, deserialize_with = "lenient_count")]
    pub cotizacion: i64,
}

impl SpecialStatusCounts {
    pub fn total(&self) -> i64 {
        [
            self.garantia,
            self.cancelado,
            self.no_se_cobra_domicilio,
            self.cotizacion,
        ]
        .iter()
        .fold(self.no_pagaron_domicilio, |acc, n| acc.saturating_add(*n))
    }
}

impl PeriodSummary for SpecialStatusCounts {
    fn merge(&mut self, other: &Self) {
        self.no_pagaron_domicilio = self
            .no_pagaron_domicilio
            .saturating_add(other.no_pagaron_domicilio);
        self.garantia = self.garantia.saturating_add(other.garantia);
        self.cancelado = self.cancelado.saturating_add(other.cancelado);
        self.no_se_cobra_domicilio = self
            .no_se_cobra_domicilio
            .saturating_add(other.no_se_cobra_domicilio);
        self.cotizacion = self.cotizacion.saturating_add(other.cotizacion);
    }
}
