use std::collections::BTreeMap;
use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ThresholdConfig;
use crate::core::Result;
use crate::modules::analytics::{GeneralAnalytics, MonthSummary};
use crate::modules::backend::Endpoint;
use crate::modules::pending::{
    CashMonthSummary, CashRecord, CollectionMonthSummary, CollectionRecord, DelayPolicy,
    PendingCashReport, PendingCollectionReport, PendingRecord,
};
use crate::modules::periods::{PeriodIndex, PeriodSummary, Selection};

/// Payload of one analytics view: where it comes from and how it is summarized
pub trait Dataset: DeserializeOwned + Debug + Clone + Send + 'static {
    type Summary: PeriodSummary + Debug + Send;

    const ENDPOINT: Endpoint;

    /// Month-keyed summaries exactly as received
    fn summaries(&self) -> &BTreeMap<String, Self::Summary>;

    /// Selection applied right after a successful load
    fn default_selection(_index: &PeriodIndex<Self::Summary>) -> Selection {
        Selection::Global
    }

    fn decode(payload: Value) -> Result<Self> {
        Ok(serde_json::from_value(payload)?)
    }
}

/// A dataset whose detail records carry a delay
pub trait PendingDataset: Dataset {
    type Record: PendingRecord + Debug + Send;

    fn records(&self) -> &[Self::Record];

    fn policy(thresholds: &ThresholdConfig) -> DelayPolicy;
}

impl Dataset for GeneralAnalytics {
    type Summary = MonthSummary;

    const ENDPOINT: Endpoint = Endpoint::General;

    fn summaries(&self) -> &BTreeMap<String, MonthSummary> {
        &self.resumen
    }
}

impl Dataset for PendingCollectionReport {
    type Summary = CollectionMonthSummary;

    const ENDPOINT: Endpoint = Endpoint::PendingCollection;

    fn summaries(&self) -> &BTreeMap<String, CollectionMonthSummary> {
        &self.resumen
    }
}

impl PendingDataset for PendingCollectionReport {
    type Record = CollectionRecord;

    fn records(&self) -> &[CollectionRecord] {
        &self.records
    }

    fn policy(thresholds: &ThresholdConfig) -> DelayPolicy {
        DelayPolicy::collection_from(thresholds)
    }
}

impl Dataset for PendingCashReport {
    type Summary = CashMonthSummary;

    const ENDPOINT: Endpoint = Endpoint::PendingCash;

    fn summaries(&self) -> &BTreeMap<String, CashMonthSummary> {
        &self.resumen
    }
}

impl PendingDataset for PendingCashReport {
    type Record = CashRecord;

    fn records(&self) -> &[CashRecord] {
        &self.records
    }

    fn policy(thresholds: &ThresholdConfig) -> DelayPolicy {
        DelayPolicy::cash_from(thresholds)
    }
}
