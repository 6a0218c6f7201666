use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, HomeFocus, STORY_PANELS};

use super::panel_slots;

/// Full-bleed narrative panels, one viewport wide each.
pub struct StoryPanelsWidget;

impl StoryPanelsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let unit = app.story.unit_width();
        for (i, slot) in panel_slots(area, unit, app.story.offset(), STORY_PANELS.len()) {
            let panel = &STORY_PANELS[i];

            let mut lines: Vec<Line> = Vec::new();
            lines.push(Line::from(Span::styled(
                panel.title,
                Style::default()
                    .fg(app.theme.fg1)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                panel.tagline,
                Style::default().fg(app.theme.accent),
            )));
            lines.push(Line::default());
            for body in panel.body {
                lines.push(Line::from(Span::styled(
                    *body,
                    Style::default().fg(app.theme.fg0),
                )));
            }

            let top_pad = slot.height.saturating_sub(lines.len() as u16) / 2;
            let inner = Rect::new(
                slot.x,
                slot.y + top_pad,
                slot.width,
                slot.height.saturating_sub(top_pad),
            );
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(app.theme.bg0));
            frame.render_widget(paragraph, inner);
        }
    }
}

/// Pagination dots with the auto-advance badge, one row.
pub fn render_dots(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans: Vec<Span> = Vec::new();
    for i in 0..app.story.panel_count() {
        let (dot, style) = if i == app.story.current_index() {
            ("●", Style::default().fg(app.theme.accent))
        } else {
            ("○", Style::default().fg(app.theme.dim))
        };
        spans.push(Span::styled(dot, style));
        spans.push(Span::raw(" "));
    }
    spans.push(Span::raw("  "));
    let badge = if app.story.is_auto_advancing() {
        Span::styled("▶ auto", Style::default().fg(app.theme.success))
    } else {
        Span::styled("⏸ paused", Style::default().fg(app.theme.dim))
    };
    spans.push(badge);
    if app.home_focus == HomeFocus::Story {
        spans.push(Span::styled("  ◂ story ▸", Style::default().fg(app.theme.grey1)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
