use std::collections::BTreeMap;

use tracing::warn;

use crate::core::dates::parse_record_date;
use crate::modules::periods::models::{MonthKey, Selection};
use crate::modules::periods::services::ordering::is_valid_month_key;

/// Per-month summary that can be folded into a cross-month total.
///
/// `Default` is the all-zero summary used both as the fold seed and for
/// months absent from a response, so a single month and the global total
/// always share one shape.
pub trait PeriodSummary: Clone + Default {
    /// Fold `other` into `self`
    fn merge(&mut self, other: &Self);
}

/// Detail record that belongs to the month of its date
pub trait DatedRecord {
    /// Raw date string as sent by the backend
    fn date(&self) -> &str;
}

/// Summaries re-keyed by parsed month, with malformed keys removed.
///
/// Built once per response; every selector and chart reads through it.
#[derive(Debug, Clone)]
pub struct PeriodIndex<S> {
    months: BTreeMap<MonthKey, S>,
}

impl<S: PeriodSummary> PeriodIndex<S> {
    pub fn from_summaries(raw: &BTreeMap<String, S>) -> Self {
        let mut months: BTreeMap<MonthKey, S> = BTreeMap::new();

        for (key, summary) in raw {
            if !is_valid_month_key(key) {
                warn!(key = %key, "Excluding invalid month key");
                continue;
            }
            let month = match key.parse::<MonthKey>() {
                Ok(month) => month,
                Err(e) => {
                    warn!(key = %key, error = %e, "Excluding unparseable month key");
                    continue;
                }
            };
            // "Enero 2024" and "2024-01" name the same bucket
            months
                .entry(month)
                .and_modify(|existing| existing.merge(summary))
                .or_insert_with(|| summary.clone());
        }

        Self { months }
    }

    /// Valid months in chronological order
    pub fn months(&self) -> Vec<MonthKey> {
        self.months.keys().copied().collect()
    }

    pub fn latest(&self) -> Option<MonthKey> {
        self.months.keys().next_back().copied()
    }

    pub fn get(&self, month: &MonthKey) -> Option<&S> {
        self.months.get(month)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Chronological (month, summary) pairs for time-series charts
    pub fn series(&self) -> impl Iterator<Item = (MonthKey, &S)> {
        self.months.iter().map(|(month, summary)| (*month, summary))
    }

    /// Fold of every valid month, zero-valued when there are none
    pub fn global(&self) -> S {
        self.months.values().fold(S::default(), |mut acc, summary| {
            acc.merge(summary);
            acc
        })
    }

    /// Summary for a selection; unknown months yield the zero summary
    pub fn select(&self, selection: &Selection) -> S {
        match selection {
            Selection::Global => self.global(),
            Selection::Month(month) => self.months.get(month).cloned().unwrap_or_default(),
        }
    }
}

impl<S: PeriodSummary> Default for PeriodIndex<S> {
    fn default() -> Self {
        Self {
            months: BTreeMap::new(),
        }
    }
}

/// Sum of every valid month in a raw summary map
pub fn aggregate_global<S: PeriodSummary>(summaries: &BTreeMap<String, S>) -> S {
    PeriodIndex::from_summaries(summaries).global()
}

/// Summary for `selection` from a raw summary map
pub fn select_period<S: PeriodSummary>(summaries: &BTreeMap<String, S>, selection: &Selection) -> S {
    PeriodIndex::from_summaries(summaries).select(selection)
}

/// Records belonging to the selected period.
///
/// The global selection keeps everything. A month selection keeps records
/// whose date parses and falls in that month; records with unparseable dates
/// are dropped rather than guessed into a bucket.
pub fn filter_by_month<'a, R: DatedRecord>(records: &'a [R], selection: &Selection) -> Vec<&'a R> {
    match selection {
        Selection::Global => records.iter().collect(),
        Selection::Month(month) => records
            .iter()
            .filter(|record| {
                parse_record_date(record.date())
                    .map(|date| month.contains(date))
                    .unwrap_or(false)
            })
            .collect(),
    }
}
