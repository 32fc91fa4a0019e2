use std::collections::BTreeMap;

use chrono::NaiveDate;

/// Daily observations keyed by calendar date. Iteration is always in
/// ascending date order, whatever order the provider sent them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySeries {
    values: BTreeMap<NaiveDate, Option<f64>>,
}

impl DailySeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, date: NaiveDate, value: Option<f64>) {
        self.values.insert(date, value);
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.values.keys().copied().collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.values.values().copied().collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, Option<f64>)> + '_ {
        self.values.iter().map(|(date, value)| (*date, *value))
    }
}

impl FromIterator<(NaiveDate, Option<f64>)> for DailySeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, Option<f64>)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

/// Parses the provider's compact `YYYYMMDD` date keys.
pub fn parse_compact_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y%m%d").ok()
}

pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}
