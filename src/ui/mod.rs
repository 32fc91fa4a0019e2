pub mod theme;
pub mod widgets;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    app::state::{AppMode, DashboardState},
    ui::theme::{Theme, detect_color_capability, theme_for},
};

pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 20;

pub fn render(frame: &mut Frame, state: &DashboardState) {
    let area = frame.area();
    let theme = theme_for(state.settings.theme, detect_color_capability());

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let warning = Paragraph::new(format!(
            "Terminal too small. Resize to at least {MIN_WIDTH}x{MIN_HEIGHT}."
        ))
        .block(Block::default().borders(Borders::ALL).title("climate-compare"));
        frame.render_widget(warning, area);
        return;
    }

    frame.render_widget(
        Block::default().style(Style::default().fg(theme.text).bg(theme.surface)),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Min(8),
            Constraint::Percentage(25),
            Constraint::Length(1),
        ])
        .split(area);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(rows[0]);
    widgets::controls::render(frame, top[0], state, theme);
    widgets::summary::render(frame, top[1], state, theme);

    widgets::chart::render(frame, rows[1], state.report.as_ref(), theme);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(rows[2]);
    widgets::probability::render(frame, bottom[0], state.report.as_ref(), theme);
    widgets::summary::render_air_quality(frame, bottom[1], state, theme);

    render_status_line(frame, rows[3], state, theme);

    if let Some(prompt) = &state.prompt {
        widgets::prompt::render(frame, centered_rect(50, 25, area), prompt, theme);
    }
}

fn render_status_line(frame: &mut Frame, area: Rect, state: &DashboardState, theme: Theme) {
    let (badge, color) = match state.mode {
        AppMode::Idle => ("IDLE", theme.muted_text),
        AppMode::Loading => ("LOADING", theme.warning),
        AppMode::Ready => ("READY", theme.success),
        AppMode::Error => ("ERROR", theme.danger),
        AppMode::Quit => ("QUIT", theme.muted_text),
    };

    let mut spans = vec![Span::styled(
        format!(" {badge} "),
        Style::default()
            .fg(theme.surface)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(error) = &state.last_error {
        spans.push(Span::styled(
            format!(" {error}"),
            Style::default().fg(theme.danger),
        ));
    }
    if let Some(notice) = &state.notice {
        spans.push(Span::styled(
            format!(" {notice}"),
            Style::default().fg(theme.text),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
