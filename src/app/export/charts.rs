use anyhow::Result;
use plotters::{coord::Shift, prelude::*};

use crate::{analysis::ComparisonReport, ui::widgets::chart::value_bounds};

const CHART_SIZE: (u32, u32) = (900, 700);
const SERIES_COLORS: [RGBColor; 2] = [RGBColor(75, 192, 192), RGBColor(255, 99, 132)];
const THRESHOLD_COLOR: RGBColor = RGBColor(220, 53, 69);

fn series_color(idx: usize) -> RGBColor {
    SERIES_COLORS[idx % SERIES_COLORS.len()]
}

/// Daily values on top, exceedance percentages below.
pub fn render_charts_svg(report: &ComparisonReport) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)?;
        let (upper, lower) = root.split_vertically(420);
        draw_series_chart(&upper, report)?;
        draw_probability_chart(&lower, report)?;
        root.present()?;
    }
    Ok(svg)
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn draw_series_chart(area: &DrawingArea<SVGBackend<'_>, Shift>, report: &ComparisonReport) -> Result<()> {
    let datasets = report.chart_datasets();
    let dates = &report.date_axis;
    let x_max = dates.len().saturating_sub(1).max(1) as f64;
    let [y_min, y_max] = value_bounds(&datasets, report.threshold);

    let mut chart = ChartBuilder::on(area)
        .caption(&report.parameter.label, ("sans-serif", 20))
        .margin(15)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..x_max, y_min..y_max)?;

    chart
        .configure_mesh()
        .x_labels(dates.len().clamp(2, 8))
        .x_label_formatter(&|x| {
            dates
                .get(x.round().max(0.0) as usize)
                .map(|date| date.format("%Y-%m-%d").to_string())
                .unwrap_or_default()
        })
        .y_desc(report.parameter.id.as_str())
        .draw()?;

    for (idx, set) in datasets.iter().enumerate() {
        let color = series_color(idx);
        chart
            .draw_series(LineSeries::new(set.points.iter().copied(), color.stroke_width(2)))?
            .label(set.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    if let Some(threshold) = report.threshold {
        chart
            .draw_series(LineSeries::new(
                [(0.0, threshold), (x_max, threshold)],
                THRESHOLD_COLOR,
            ))?
            .label(format!("Threshold {}", report.threshold_label()))
            .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], THRESHOLD_COLOR));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;
    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn draw_probability_chart(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    report: &ComparisonReport,
) -> Result<()> {
    let probabilities = report.probabilities();
    let slots = probabilities.len().max(1) as f64;

    let mut chart = ChartBuilder::on(area)
        .caption("Days above threshold (%)", ("sans-serif", 18))
        .margin(15)
        .x_label_area_size(10)
        .y_label_area_size(50)
        .build_cartesian_2d(0f64..slots, 0f64..100f64)?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(0)
        .y_desc("%")
        .draw()?;

    chart.draw_series(probabilities.iter().enumerate().map(|(idx, (_, pct))| {
        let x = idx as f64;
        Rectangle::new(
            [(x + 0.2, 0.0), (x + 0.8, f64::from(*pct))],
            series_color(idx).filled(),
        )
    }))?;
    chart.draw_series(probabilities.iter().enumerate().map(|(idx, (label, pct))| {
        let y = (f64::from(*pct) + 6.0).min(94.0);
        Text::new(
            format!("{label}: {pct}%"),
            (idx as f64 + 0.3, y),
            ("sans-serif", 14),
        )
    }))?;
    Ok(())
}
