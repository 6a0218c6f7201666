use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use folio_core::content::expertise;

use crate::app::App;

/// Expertise page: area list on the left, walkthrough step player on the
/// right.
pub struct ExpertiseWidget;

impl ExpertiseWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(area);

        Self::render_areas(frame, chunks[0], app);
        Self::render_player(frame, chunks[1], app);
    }

    fn render_areas(frame: &mut Frame, area: Rect, app: &App) {
        let items: Vec<ListItem> = expertise::all()
            .iter()
            .map(|a| {
                ListItem::new(vec![
                    Line::from(Span::styled(a.title, Style::default().fg(app.theme.fg0))),
                    Line::from(Span::styled(
                        format!("  {} · {}", a.level, a.experience),
                        Style::default().fg(app.theme.grey1),
                    )),
                ])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.dim))
                    .title(" Areas "),
            )
            .highlight_style(
                Style::default()
                    .bg(app.theme.selection)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default();
        state.select(Some(app.expertise.area_index));
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_player(frame: &mut Frame, area: Rect, app: &App) {
        let walkthrough = app.expertise.area();
        let step = &walkthrough.steps[app.expertise.step];

        let badge = if app.expertise.playing {
            Span::styled("▶ playing", Style::default().fg(app.theme.success))
        } else {
            Span::styled("⏸ paused", Style::default().fg(app.theme.dim))
        };

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                walkthrough.title,
                Style::default()
                    .fg(app.theme.fg1)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                walkthrough.summary,
                Style::default().fg(app.theme.grey1),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled(
                    format!(
                        "Step {}/{}  ",
                        app.expertise.step + 1,
                        walkthrough.steps.len()
                    ),
                    Style::default().fg(app.theme.accent),
                ),
                Span::styled(
                    step.title,
                    Style::default()
                        .fg(app.theme.fg0)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                badge,
            ]),
            Line::from(Span::styled(
                step.description,
                Style::default().fg(app.theme.fg0),
            )),
            Line::from(vec![
                Span::styled("Stack: ", Style::default().fg(app.theme.grey1)),
                Span::styled(
                    step.technologies.join(", "),
                    Style::default().fg(app.theme.info),
                ),
                Span::styled(
                    format!("  ({})", step.duration),
                    Style::default().fg(app.theme.dim),
                ),
            ]),
            Line::default(),
            Line::from(Span::styled(
                "Achievements",
                Style::default().fg(app.theme.grey1),
            )),
        ];
        for achievement in walkthrough.achievements {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(app.theme.accent)),
                Span::styled(*achievement, Style::default().fg(app.theme.fg0)),
            ]));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.dim))
            .title(" Walkthrough ");
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}
