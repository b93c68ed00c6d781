use std::cmp::Reverse;

use chrono::NaiveDate;
use serde::Serialize;

use crate::core::dates::{elapsed_days, parse_record_date};
use crate::modules::pending::models::{DelayAssessment, DelayPolicy, PendingRecord};

/// Delay and tier of `record` as of `reference`.
///
/// The backend's own day count wins when present; otherwise the delay is
/// computed from the record date. A record with neither counts as zero days.
pub fn derive_delay<R: PendingRecord>(
    record: &R,
    reference: NaiveDate,
    policy: &DelayPolicy,
) -> DelayAssessment {
    let delay_days = record
        .reported_delay_days()
        .map(|days| days.max(0))
        .or_else(|| parse_record_date(record.date()).map(|date| elapsed_days(date, reference)))
        .unwrap_or(0);

    DelayAssessment {
        delay_days,
        tier: policy.classify(delay_days, record.flagged_old()),
    }
}

/// A record paired with its derived delay; the record itself is never modified
#[derive(Debug, Clone, Serialize)]
pub struct AssessedRecord<'a, R> {
    pub record: &'a R,
    #[serde(flatten)]
    pub assessment: DelayAssessment,
}

/// Assess every record and order them most-delayed first.
///
/// Ties keep their incoming order.
pub fn assess_records<'a, R: PendingRecord>(
    records: impl IntoIterator<Item = &'a R>,
    reference: NaiveDate,
    policy: &DelayPolicy,
) -> Vec<AssessedRecord<'a, R>> {
    let mut assessed: Vec<AssessedRecord<'a, R>> = records
        .into_iter()
        .map(|record| AssessedRecord {
            record,
            assessment: derive_delay(record, reference, policy),
        })
        .collect();
    assessed.sort_by_key(|a| Reverse(a.assessment.delay_days));
    assessed
}
