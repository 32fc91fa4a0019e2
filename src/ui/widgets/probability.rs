use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Paragraph},
};

use super::shared::panel_block;
use crate::{analysis::ComparisonReport, ui::theme::Theme};

/// Percent of days above the threshold, one bar per location.
pub fn render(frame: &mut Frame, area: Rect, report: Option<&ComparisonReport>, theme: Theme) {
    let block = panel_block("Days above threshold (%)", theme);
    let Some(report) = report else {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new("-").style(Style::default().fg(theme.muted_text)),
            inner,
        );
        return;
    };

    let recommended = report.recommended();
    let bars: Vec<Bar> = report
        .probabilities()
        .into_iter()
        .enumerate()
        .map(|(idx, (label, pct))| {
            let mut style = Style::default().fg(theme.series_color(idx));
            if recommended == Some(idx) {
                style = style.add_modifier(Modifier::BOLD);
            }
            Bar::default()
                .label(Line::from(label))
                .value(u64::from(pct))
                .text_value(format!("{pct}%"))
                .style(style)
        })
        .collect();

    let bar_width = (area.width.saturating_sub(4) / 3).clamp(3, 12);
    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(bar_width)
        .bar_gap(2)
        .max(100)
        .value_style(Style::default().fg(theme.surface).bg(theme.accent));
    frame.render_widget(chart, area);
}
