use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use super::shared::panel_block;
use crate::{app::state::DashboardState, domain::MAX_LOCATIONS, ui::theme::Theme};

/// Selection and query form.
pub fn render(frame: &mut Frame, area: Rect, state: &DashboardState, theme: Theme) {
    let block = panel_block("Query", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let paragraph = Paragraph::new(control_lines(state, theme)).wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

fn control_lines(state: &DashboardState, theme: Theme) -> Vec<Line<'static>> {
    let label = Style::default().fg(theme.muted_text);
    let heading = Style::default()
        .fg(theme.accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![Line::from(Span::styled(
        format!(
            "Locations ({}/{MAX_LOCATIONS})",
            state.selection.len()
        ),
        heading,
    ))];

    if state.selection.is_empty() {
        lines.push(Line::from(Span::styled("  press a to add", label)));
    }
    for (idx, location) in state.selection.locations().iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {}. ", idx + 1),
                Style::default().fg(theme.series_color(idx)),
            ),
            Span::raw(location.to_string()),
        ]));
    }

    lines.push(Line::default());
    let parameter = &state.form.parameter;
    lines.push(field_line(
        "Parameter",
        format!("{} [{}]", parameter.label, parameter.id),
        label,
    ));
    lines.push(field_line("Start", or_unset(&state.form.start), label));
    lines.push(field_line("End", or_unset(&state.form.end), label));
    let threshold = if state.form.threshold.trim().is_empty() {
        "none".to_string()
    } else {
        state.form.threshold.clone()
    };
    lines.push(field_line("Threshold", threshold, label));

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "a add  1/2 remove  x clear  p/P parameter",
        label,
    )));
    lines.push(Line::from(Span::styled(
        "s/e dates  h threshold  g get data",
        label,
    )));
    lines.push(Line::from(Span::styled("t theme  o export  q quit", label)));
    lines
}

fn field_line(name: &'static str, value: String, label: Style) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{name:<10} "), label),
        Span::raw(value),
    ])
}

fn or_unset(value: &str) -> String {
    if value.trim().is_empty() {
        "(unset)".to_string()
    } else {
        value.to_string()
    }
}
