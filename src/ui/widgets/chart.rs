use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    symbols::Marker,
    text::Span,
    widgets::{Axis, Chart, Dataset, GraphType, Paragraph},
};

use super::shared::panel_block;
use crate::{
    analysis::{ChartDataset, ComparisonReport},
    ui::theme::Theme,
};

#[allow(clippy::cast_precision_loss)]
pub fn render(frame: &mut Frame, area: Rect, report: Option<&ComparisonReport>, theme: Theme) {
    let Some(report) = report.filter(|r| !r.date_axis.is_empty()) else {
        let block = panel_block("Daily values", theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("No data yet. Press g to get data.")
                .style(Style::default().fg(theme.muted_text)),
            inner,
        );
        return;
    };

    let series = report.chart_datasets();
    let x_max = report.date_axis.len().saturating_sub(1).max(1) as f64;
    let threshold_points = report
        .threshold
        .map(|t| vec![(0.0, t), (x_max, t)])
        .unwrap_or_default();

    let mut datasets: Vec<Dataset> = series
        .iter()
        .enumerate()
        .map(|(idx, set)| {
            Dataset::default()
                .name(set.label.clone())
                .marker(Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series_color(idx)))
                .data(&set.points)
        })
        .collect();
    if !threshold_points.is_empty() {
        datasets.push(
            Dataset::default()
                .name(format!("Threshold {}", report.threshold_label()))
                .marker(Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.threshold))
                .data(&threshold_points),
        );
    }

    let [y_min, y_max] = value_bounds(&series, report.threshold);
    let axis_style = Style::default().fg(theme.muted_text);

    let chart = Chart::new(datasets)
        .block(panel_block("Daily values", theme))
        .x_axis(
            Axis::default()
                .style(axis_style)
                .bounds([0.0, x_max])
                .labels(date_labels(report)),
        )
        .y_axis(
            Axis::default()
                .title(report.parameter.id.clone())
                .style(axis_style)
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{y_min:.1}")),
                    Span::raw(format!("{:.1}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{y_max:.1}")),
                ]),
        );
    frame.render_widget(chart, area);
}

/// First, middle and last date of the axis.
fn date_labels(report: &ComparisonReport) -> Vec<Span<'static>> {
    let axis = &report.date_axis;
    let mut picks = vec![0, axis.len() / 2, axis.len().saturating_sub(1)];
    picks.dedup();
    picks
        .into_iter()
        .filter_map(|idx| axis.get(idx))
        .map(|date| Span::raw(date.format("%Y-%m-%d").to_string()))
        .collect()
}

/// Y range covering every plotted value and the threshold, padded by 5%.
pub(crate) fn value_bounds(series: &[ChartDataset], threshold: Option<f64>) -> [f64; 2] {
    let values = series
        .iter()
        .flat_map(|set| set.points.iter().map(|(_, y)| *y))
        .chain(threshold);
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });
    if !min.is_finite() || !max.is_finite() {
        return [0.0, 1.0];
    }
    let pad = ((max - min) * 0.05).max(0.5);
    [min - pad, max + pad]
}
