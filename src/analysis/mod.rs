pub mod pipeline;
pub mod report;

use crate::domain::{DailySeries, Location};

pub use pipeline::{ComparisonRequest, run_comparison};
pub use report::{ChartDataset, ComparisonReport, compose};

/// Statistics for one location's series in one run.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationAnalysis {
    pub location: Location,
    pub average_value: f64,
    pub total_valid_days: usize,
    pub days_above_threshold: usize,
    pub percent_above_threshold: u32,
    pub air_quality_summary: Option<String>,
}

impl LocationAnalysis {
    #[must_use]
    pub fn with_air_quality(mut self, summary: Option<String>) -> Self {
        self.air_quality_summary = summary;
        self
    }
}

/// Computes mean and threshold exceedance over the non-missing values of
/// `series`. A value equal to the threshold does not exceed it.
pub fn analyze(location: Location, series: &DailySeries, threshold: Option<f64>) -> LocationAnalysis {
    let valid = valid_values(series);
    let total_valid_days = valid.len();
    let denominator = total_valid_days.max(1) as f64;
    let average_value = valid.iter().sum::<f64>() / denominator;

    let (days_above_threshold, percent_above_threshold) = match threshold {
        Some(limit) => {
            let above = valid.iter().filter(|value| **value > limit).count();
            (above, percent(above, denominator))
        }
        None => (0, 0),
    };

    LocationAnalysis {
        location,
        average_value,
        total_valid_days,
        days_above_threshold,
        percent_above_threshold,
        air_quality_summary: None,
    }
}

fn valid_values(series: &DailySeries) -> Vec<f64> {
    series
        .iter()
        .filter_map(|(_, value)| value.filter(|v| !v.is_nan()))
        .collect()
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(count: usize, denominator: f64) -> u32 {
    ((count as f64 / denominator) * 100.0).round() as u32
}
