use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Page};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let page_str = match app.page {
            Page::Home => "HOME",
            Page::Projects => "PROJECTS",
            Page::ProjectDetail(_) => "PROJECT",
            Page::Blog => "BLOG",
            Page::Expertise => "EXPERTISE",
            Page::Technologies => "TECHNOLOGIES",
            Page::Contact => "CONTACT",
        };

        let status_text = if let Some(message) = app.status() {
            format!(" {}", message)
        } else {
            format!(" {} ", page_str)
        };

        let help_hint = match app.page {
            Page::Home => " ←/→:panels tab:focus enter:open 1-5:jump q:quit ",
            Page::Projects => " ←/→:cards t/c:filter enter:detail esc:home ",
            Page::ProjectDetail(_) => " d/g/b:open links esc:home ",
            Page::Blog => " j/k:move c:category esc:home ",
            Page::Expertise => " j/k:area ←/→:step space:play esc:home ",
            Page::Technologies => " j/k:certification v:verify esc:home ",
            Page::Contact => {
                if app.contact.editing {
                    " type to edit enter/esc:done tab:next field "
                } else {
                    " tab:field enter:edit s:submit esc:home "
                }
            }
        };

        let padding_len = area
            .width
            .saturating_sub(status_text.width() as u16 + help_hint.width() as u16)
            as usize;

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default().fg(app.theme.fg1).bg(app.theme.bg2),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(app.theme.bg2)),
            Span::styled(
                help_hint,
                Style::default().fg(app.theme.grey1).bg(app.theme.bg2),
            ),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
