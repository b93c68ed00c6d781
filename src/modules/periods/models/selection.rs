use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use super::month_key::MonthKey;

/// Sentinel label meaning "aggregate all valid months"
pub const GLOBAL_SELECTION: &str = "Total Global";

/// Currently selected period of an analytics view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Selection {
    #[default]
    Global,
    Month(MonthKey),
}

impl Selection {
    pub fn is_global(&self) -> bool {
        matches!(self, Selection::Global)
    }

    pub fn month(&self) -> Option<MonthKey> {
        match self {
            Selection::Global => None,
            Selection::Month(key) => Some(*key),
        }
    }
}

impl From<MonthKey> for Selection {
    fn from(key: MonthKey) -> Self {
        Selection::Month(key)
    }
}

impl FromStr for Selection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(GLOBAL_SELECTION) {
            return Ok(Selection::Global);
        }
        s.parse::<MonthKey>().map(Selection::Month)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::Global => f.write_str(GLOBAL_SELECTION),
            Selection::Month(key) => fmt::Display::fmt(key, f),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
