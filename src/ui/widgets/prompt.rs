use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph},
};

use super::shared::{popup_block, popup_panel_style};
use crate::{app::state::Prompt, ui::theme::Theme};

pub fn render(frame: &mut Frame, area: Rect, prompt: &Prompt, theme: Theme) {
    frame.render_widget(Clear, area);

    let panel_style = popup_panel_style(theme);
    let block = popup_block(prompt.field.title(), theme, panel_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(vec![
            Span::styled("> ", Style::default().fg(theme.accent)),
            Span::styled(
                prompt.buffer.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled("_", Style::default().fg(theme.accent)),
        ]),
        Line::default(),
        Line::from(Span::styled(
            "Enter confirm  Esc cancel",
            Style::default().fg(theme.muted_text),
        )),
    ];
    frame.render_widget(Paragraph::new(lines).style(panel_style), inner);
}
