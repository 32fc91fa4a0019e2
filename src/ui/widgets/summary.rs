use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::panel_block;
use crate::{
    app::state::{AppMode, DashboardState},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState, theme: Theme) {
    let block = panel_block("Summary", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match &state.report {
        Some(report) => report
            .text_summary()
            .lines()
            .map(|line| summary_line(line, theme))
            .collect(),
        None if state.mode == AppMode::Loading => vec![Line::from(Span::styled(
            "Loading...",
            Style::default().fg(theme.accent),
        ))],
        None => vec![Line::from(Span::styled(
            "Add up to two locations, pick dates, then press g.",
            Style::default().fg(theme.muted_text),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn summary_line(line: &str, theme: Theme) -> Line<'static> {
    let style = if line.starts_with("Recommendation:") {
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD)
    } else if line.starts_with("Location ") {
        Style::default().fg(theme.accent)
    } else {
        Style::default().fg(theme.text)
    };
    Line::from(Span::styled(line.to_string(), style))
}

pub fn render_air_quality(frame: &mut Frame, area: Rect, state: &DashboardState, theme: Theme) {
    let block = panel_block("Air quality", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = match &state.report {
        Some(report) => report
            .air_quality_lines()
            .into_iter()
            .enumerate()
            .map(|(idx, line)| {
                Line::from(Span::styled(
                    line,
                    Style::default().fg(theme.series_color(idx)),
                ))
            })
            .collect(),
        None => vec![Line::from(Span::styled(
            "-",
            Style::default().fg(theme.muted_text),
        ))],
    };
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), inner);
}
