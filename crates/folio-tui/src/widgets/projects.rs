use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;

use super::panel_slots;

/// Projects page: filter bar over a card carousel of the filtered set.
pub struct ProjectsWidget;

impl ProjectsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(2), Constraint::Min(0)])
            .split(area);

        Self::render_filter_bar(frame, chunks[0], app);
        Self::render_cards(frame, chunks[1], app);
    }

    fn render_filter_bar(frame: &mut Frame, area: Rect, app: &App) {
        let line = Line::from(vec![
            Span::styled(" Tech ", Style::default().fg(app.theme.grey1)),
            Span::styled(
                format!("[{}]", app.projects.tech()),
                Style::default().fg(app.theme.accent),
            ),
            Span::styled("  Category ", Style::default().fg(app.theme.grey1)),
            Span::styled(
                format!("[{}]", app.projects.category()),
                Style::default().fg(app.theme.accent),
            ),
            Span::styled(
                format!(
                    "  {} of {} projects",
                    app.projects.filtered.len(),
                    folio_core::content::projects::all().len()
                ),
                Style::default().fg(app.theme.dim),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_cards(frame: &mut Frame, area: Rect, app: &App) {
        if app.projects.filtered.is_empty() {
            let empty = Paragraph::new("No projects match the current filters")
                .alignment(Alignment::Center)
                .style(Style::default().fg(app.theme.dim));
            frame.render_widget(empty, area);
            return;
        }

        let carousel = &app.projects.carousel;
        let unit = carousel.unit_width();
        for (i, slot) in panel_slots(
            area,
            unit,
            carousel.offset(),
            app.projects.filtered.len(),
        ) {
            let project = app.projects.filtered[i];
            let is_current = i == carousel.current_index();

            let border_style = if is_current {
                Style::default().fg(app.theme.accent)
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

            let mut title = project.title.to_string();
            if project.featured {
                title.push_str(" ★");
            }

            let lines = vec![
                Line::from(Span::styled(title, title_style)),
                Line::from(Span::styled(
                    format!("{} · {}", project.year, project.category),
                    Style::default().fg(app.theme.grey1),
                )),
                Line::default(),
                Line::from(Span::styled(
                    project.description,
                    Style::default().fg(app.theme.fg0),
                )),
                Line::default(),
                Line::from(Span::styled(
                    project.tech.join(", "),
                    Style::default().fg(app.theme.info),
                )),
            ];

            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(border_style);
            let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
            frame.render_widget(paragraph, slot);
        }
    }
}
