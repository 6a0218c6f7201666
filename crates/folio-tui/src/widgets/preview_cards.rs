use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, HomeFocus, PREVIEW_CARDS};

use super::panel_slots;

/// Fixed-width section cards along the bottom of the home page.
pub struct PreviewCardsWidget;

impl PreviewCardsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let unit = app.cards.unit_width();
        let focused = app.home_focus == HomeFocus::Cards;

        for (i, slot) in panel_slots(area, unit, app.cards.offset(), PREVIEW_CARDS.len()) {
            let card = &PREVIEW_CARDS[i];
            let is_current = i == app.cards.current_index();

            let border_style = if is_current && focused {
                Style::default().fg(app.theme.accent)
            } else if is_current {
                Style::default().fg(app.theme.grey1)
            } else {
                Style::default().fg(app.theme.dim)
            };

            let title_style = if is_current {
                Style::default()
                    .fg(app.theme.fg1)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.fg0)
            };

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);

            let lines = vec![
                Line::from(Span::styled(card.title, title_style)),
                Line::default(),
                Line::from(Span::styled(
                    card.blurb,
                    Style::default().fg(app.theme.grey1),
                )),
            ];

            let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
            frame.render_widget(paragraph, slot);
        }
    }
}
