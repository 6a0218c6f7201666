use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, ContactField};

/// Contact page: four field bindings with focus cycling and an edit mode.
/// There is no delivery endpoint; submission logs and acknowledges.
pub struct ContactFormWidget;

impl ContactFormWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        // Center a fixed-width column
        let width = area.width.min(64);
        let x = area.x + (area.width - width) / 2;
        let column = Rect::new(x, area.y, width, area.height);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(7),
                Constraint::Min(0),
            ])
            .split(column);

        Self::render_field(frame, chunks[0], app, ContactField::Name, "Name", &app.contact.name);
        Self::render_field(frame, chunks[1], app, ContactField::Email, "Email", &app.contact.email);
        Self::render_field(
            frame,
            chunks[2],
            app,
            ContactField::Subject,
            "Subject",
            &app.contact.subject,
        );
        Self::render_field(
            frame,
            chunks[3],
            app,
            ContactField::Message,
            "Message",
            &app.contact.message,
        );
    }

    fn render_field(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        field: ContactField,
        label: &str,
        value: &str,
    ) {
        let focused = app.contact.focus == field;
        let border_style = if focused && app.contact.editing {
            Style::default().fg(app.theme.success)
        } else if focused {
            Style::default().fg(app.theme.accent)
        } else {
            Style::default().fg(app.theme.dim)
        };

        let mut text = value.to_string();
        if focused && app.contact.editing {
            text.push('▏');
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", label));
        let paragraph = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(app.theme.fg0),
        )))
        .block(block)
        .wrap(Wrap { trim: false });
        frame.render_widget(paragraph, area);
    }
}
