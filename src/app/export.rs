mod charts;

use std::{
    fmt::Write as _,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;

pub use charts::render_charts_svg;

use crate::analysis::ComparisonReport;

/// Writes a printable report (summary, air-quality notes and the daily
/// values table) to `path`, and both charts as SVG next to it. Returns the
/// chart file's path.
pub fn export_report(path: &Path, report: &ComparisonReport) -> anyhow::Result<PathBuf> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).context("creating export directory failed")?;
    }
    fs::write(path, render_export(report))
        .with_context(|| format!("writing report to {} failed", path.display()))?;

    let charts = chart_path(path);
    let svg = render_charts_svg(report).context("drawing report charts failed")?;
    fs::write(&charts, svg)
        .with_context(|| format!("writing charts to {} failed", charts.display()))?;
    Ok(charts)
}

/// `weather_report.txt` pairs with `weather_report.svg`.
pub fn chart_path(path: &Path) -> PathBuf {
    let charts = path.with_extension("svg");
    if charts == path {
        path.with_extension("charts.svg")
    } else {
        charts
    }
}

pub fn render_export(report: &ComparisonReport) -> String {
    let mut out = String::from("Weather comparison report\n\n");
    out.push_str(&report.text_summary());
    out.push_str("\n\n");
    for line in report.air_quality_lines() {
        out.push_str(&line);
        out.push('\n');
    }

    out.push_str("\nDate      ");
    for idx in 0..report.series.len() {
        let _ = write!(out, " | {:>10}", format!("Loc {}", idx + 1));
    }
    out.push('\n');

    for (row, date) in report.date_axis.iter().enumerate() {
        let _ = write!(out, "{}", date.format("%Y-%m-%d"));
        for values in &report.series {
            let cell = values
                .get(row)
                .copied()
                .flatten()
                .map_or_else(|| "-".to_string(), |v| format!("{v:.2}"));
            let _ = write!(out, " | {cell:>10}");
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_contains_summary_and_table() {
        let report = crate::test_support::sample_report();
        let text = render_export(&report);

        assert!(text.starts_with("Weather comparison report\n\nParameter: "));
        assert!(text.contains("Loc 2 AQ: No AQ data"));
        assert!(text.contains("2024-06-01 |      29.00 |      32.00"));
        assert!(text.contains("2024-06-03 |          - |      34.00"));
    }

    #[test]
    fn export_writes_report_and_charts() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("out").join("weather_report.txt");
        let charts = export_report(&path, &crate::test_support::sample_report()).expect("export");

        let written = fs::read_to_string(&path).expect("read export");
        assert!(written.contains("Recommendation:"));

        assert_eq!(charts, dir.path().join("out").join("weather_report.svg"));
        let svg = fs::read_to_string(&charts).expect("read charts");
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("Loc 1 (12.9716,77.5946)"));
        assert!(svg.contains("Loc 2 (28.6139,77.209)"));
        assert!(svg.contains("Threshold 30"));
        assert!(svg.contains("Loc 2: 100%"));
    }

    #[test]
    fn chart_path_never_overwrites_the_report() {
        assert_eq!(
            chart_path(Path::new("weather_report.txt")),
            PathBuf::from("weather_report.svg")
        );
        assert_eq!(chart_path(Path::new("out")), PathBuf::from("out.svg"));
        assert_eq!(
            chart_path(Path::new("report.svg")),
            PathBuf::from("report.charts.svg")
        );
    }
}
