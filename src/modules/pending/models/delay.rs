use serde::{Deserialize, Serialize};

use crate::config::ThresholdConfig;

/// Urgency of a pending record
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DelayTier {
    Normal,
    Attention,
    Overdue,
}

/// Day thresholds of one pending view.
///
/// Both pending views classify through this one policy so their notion of
/// "overdue" cannot drift apart; they differ only in whether a middle
/// attention band exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayPolicy {
    /// Records older than this many days enter the attention band
    pub attention_after: Option<i64>,
    /// Records older than this many days are overdue
    pub overdue_after: i64,
}

impl DelayPolicy {
    /// Pending-to-collect: normal up to 30 days, overdue after
    pub const fn collection() -> Self {
        Self {
            attention_after: None,
            overdue_after: 30,
        }
    }

    /// Pending cash: normal up to 7 days, attention up to 30, overdue after
    pub const fn cash() -> Self {
        Self {
            attention_after: Some(7),
            overdue_after: 30,
        }
    }

    pub fn collection_from(config: &ThresholdConfig) -> Self {
        Self {
            attention_after: None,
            overdue_after: config.overdue_days,
        }
    }

    pub fn cash_from(config: &ThresholdConfig) -> Self {
        Self {
            attention_after: Some(config.cash_attention_days),
            overdue_after: config.overdue_days,
        }
    }

    /// Classify a delay; `flagged_old` (the backend's own staleness flag)
    /// forces the overdue tier whatever the day count says
    pub fn classify(&self, delay_days: i64, flagged_old: bool) -> DelayTier {
        if flagged_old || delay_days > self.overdue_after {
            return DelayTier::Overdue;
        }
        match self.attention_after {
            Some(threshold) if delay_days > threshold => DelayTier::Attention,
            _ => DelayTier::Normal,
        }
    }
}

/// Delay of one record relative to a reference date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayAssessment {
    pub delay_days: i64,
    pub tier: DelayTier,
}

impl DelayAssessment {
    pub fn is_overdue(&self) -> bool {
        self.tier == DelayTier::Overdue
    }
}
