use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use folio_core::content::technologies;

use crate::app::App;

/// Technologies page: grouped gallery plus certifications.
pub struct TechGalleryWidget;

impl TechGalleryWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let mut lines: Vec<Line> = Vec::new();

        for group in technologies::groups() {
            lines.push(Line::from(Span::styled(
                group.name,
                Style::default()
                    .fg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                format!("  {}", group.items.join(" · ")),
                Style::default().fg(app.theme.fg0),
            )));
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "Certifications",
            Style::default()
                .fg(app.theme.yellow)
                .add_modifier(Modifier::BOLD),
        )));
        for (i, cert) in technologies::certifications().iter().enumerate() {
            let is_current = i == app.cert_index;
            let marker = if is_current { "▸ " } else { "  " };
            let name_style = if is_current {
                Style::default()
                    .fg(app.theme.fg1)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(app.theme.fg0)
            };
            lines.push(Line::from(vec![
                Span::styled(marker, Style::default().fg(app.theme.accent)),
                Span::styled("✓ ", Style::default().fg(app.theme.success)),
                Span::styled(cert.name, name_style),
                Span::styled(
                    format!("  {} · {}", cert.issuer, cert.earned),
                    Style::default().fg(app.theme.grey1),
                ),
            ]));
            lines.push(Line::from(vec![
                Span::styled(
                    format!("    {}  ", cert.credential_id),
                    Style::default().fg(app.theme.dim),
                ),
                Span::styled("verify: ", Style::default().fg(app.theme.grey1)),
                Span::styled(cert.verify_url, Style::default().fg(app.theme.info)),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.dim))
            .title(" Technologies ");
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
