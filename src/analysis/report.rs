use chrono::NaiveDate;

use super::LocationAnalysis;
use crate::domain::Parameter;

/// Output of one comparison run.
///
/// `date_axis` holds the first location's dates. Every dataset is plotted
/// against it by position, so a second location with a different date range
/// is shown shifted onto the first location's labels.
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonReport {
    pub parameter: Parameter,
    pub threshold: Option<f64>,
    pub date_axis: Vec<NaiveDate>,
    pub analyses: Vec<LocationAnalysis>,
    pub series: Vec<Vec<Option<f64>>>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartDataset {
    pub label: String,
    pub points: Vec<(f64, f64)>,
}

pub fn compose(
    parameter: Parameter,
    threshold: Option<f64>,
    date_axis: Vec<NaiveDate>,
    analyses: Vec<LocationAnalysis>,
    series: Vec<Vec<Option<f64>>>,
) -> ComparisonReport {
    ComparisonReport {
        parameter,
        threshold,
        date_axis,
        analyses,
        series,
    }
}

impl ComparisonReport {
    /// One dataset per location; missing values leave gaps.
    #[allow(clippy::cast_precision_loss)]
    pub fn chart_datasets(&self) -> Vec<ChartDataset> {
        self.analyses
            .iter()
            .zip(&self.series)
            .enumerate()
            .map(|(idx, (analysis, values))| ChartDataset {
                label: format!("Loc {} ({})", idx + 1, analysis.location.label()),
                points: values
                    .iter()
                    .enumerate()
                    .filter_map(|(x, value)| value.map(|v| (x as f64, v)))
                    .collect(),
            })
            .collect()
    }

    pub fn probabilities(&self) -> Vec<(String, u32)> {
        self.analyses
            .iter()
            .enumerate()
            .map(|(idx, a)| (format!("Loc {}", idx + 1), a.percent_above_threshold))
            .collect()
    }

    /// Index of the location least likely to exceed the threshold. Ties go to
    /// the earlier location.
    pub fn recommended(&self) -> Option<usize> {
        self.analyses
            .iter()
            .enumerate()
            .fold(None, |best: Option<(usize, u32)>, (idx, a)| match best {
                Some((_, pct)) if pct <= a.percent_above_threshold => best,
                _ => Some((idx, a.percent_above_threshold)),
            })
            .map(|(idx, _)| idx)
    }

    pub fn threshold_label(&self) -> String {
        self.threshold
            .map_or_else(|| "none".to_string(), |value| value.to_string())
    }

    pub fn text_summary(&self) -> String {
        let label = &self.parameter.label;
        let mut lines = vec![
            format!("Parameter: {label}"),
            format!("Threshold for probability: {}", self.threshold_label()),
        ];

        for (idx, analysis) in self.analyses.iter().enumerate() {
            lines.push(format!(
                "Location {} ({}):",
                idx + 1,
                analysis.location.label()
            ));
            lines.push(format!(
                "  - Average {label}: {}",
                two_decimals(analysis.average_value)
            ));
            lines.push(format!(
                "  - Days above threshold: {}% ({}/{})",
                analysis.percent_above_threshold,
                analysis.days_above_threshold,
                analysis.total_valid_days
            ));
            if let Some(aq) = &analysis.air_quality_summary {
                lines.push(format!("  - Air Quality: {aq}"));
            }
        }

        lines.push(self.recommendation_line());
        lines.join("\n")
    }

    fn recommendation_line(&self) -> String {
        match self.recommended() {
            Some(idx) => format!(
                "Recommendation: For lower probability of exceeding threshold, prefer Location {} ({}% of days above threshold).",
                idx + 1,
                self.analyses[idx].percent_above_threshold
            ),
            None => {
                "Recommendation: no location analysed (100% of days above threshold).".to_string()
            }
        }
    }

    pub fn air_quality_lines(&self) -> Vec<String> {
        self.analyses
            .iter()
            .enumerate()
            .map(|(idx, a)| {
                format!(
                    "Loc {} AQ: {}",
                    idx + 1,
                    a.air_quality_summary.as_deref().unwrap_or("No AQ data")
                )
            })
            .collect()
    }
}

/// Two decimals with ties rounded away from zero (`30.125` gives `30.13`).
fn two_decimals(value: f64) -> String {
    format!("{:.2}", (value * 100.0).round() / 100.0)
}
