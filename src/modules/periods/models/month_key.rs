use chrono::{Datelike, NaiveDate};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::modules::periods::services::ordering::is_valid_month_key;

/// Spanish month names in calendar order, as the backend writes them
pub const MONTH_NAMES: [&str; 12] = [
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// One aggregation bucket: a calendar month of a given year.
///
/// Field order makes the derived `Ord` chronological (year, then month).
/// Displays as `"Enero 2024"`; parses from that form and from the period
/// form `"2024-01"` used by the pending endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MonthKey {
    year: i32,
    month: u32,
}

impl MonthKey {
    /// `month` is 1-based; returns `None` outside 1..=12 or for years that
    /// do not have four digits
    pub fn new(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && (1000..=9999).contains(&year) {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Period form used by the pending endpoints (`2024-01`)
    pub fn period_label(&self) -> String {
        format!("{:04}-{:02}", self.year, self.month)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        Self::from_date(date) == *self
    }

    fn parse_named(raw: &str) -> Option<Self> {
        let (name, year) = raw.rsplit_once(' ')?;
        let name = name.trim();
        let month = MONTH_NAMES
            .iter()
            .position(|candidate| candidate.eq_ignore_ascii_case(name))?;
        Self::new(parse_year(year)?, month as u32 + 1)
    }

    fn parse_period(raw: &str) -> Option<Self> {
        let (year, month) = raw.split_once('-')?;
        if month.len() != 2 || !month.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        Self::new(parse_year(year)?, month.parse().ok()?)
    }
}

fn parse_year(raw: &str) -> Option<i32> {
    if raw.len() == 4 && raw.bytes().all(|b| b.is_ascii_digit()) {
        raw.parse().ok()
    } else {
        None
    }
}

impl FromStr for MonthKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if !is_valid_month_key(s) {
            return Err(format!("Invalid month key: {:?}", s));
        }
        let trimmed = s.trim();
        Self::parse_named(trimmed)
            .or_else(|| Self::parse_period(trimmed))
            .ok_or_else(|| format!("Unrecognized month key: {:?}", s))
    }
}

impl TryFrom<&str> for MonthKey {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.month_name(), self.year)
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
