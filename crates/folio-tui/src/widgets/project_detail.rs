use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use folio_core::content::Project;

use crate::app::App;

/// One project, full page.
pub struct ProjectDetailWidget;

impl ProjectDetailWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, project: &Project) {
        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                project.title,
                Style::default()
                    .fg(app.theme.fg1)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format!(
                    "{} · {} · {} · {}",
                    project.role, project.year, project.duration, project.category
                ),
                Style::default().fg(app.theme.grey1),
            )),
            Line::default(),
            Line::from(Span::styled(
                project.long_description,
                Style::default().fg(app.theme.fg0),
            )),
            Line::default(),
            Line::from(vec![
                Span::styled("Stack: ", Style::default().fg(app.theme.grey1)),
                Span::styled(project.tech.join(", "), Style::default().fg(app.theme.info)),
            ]),
            Line::default(),
        ];

        if let Some(url) = project.demo_url {
            lines.push(link_line(app, 'd', "demo", url));
        }
        if let Some(url) = project.github_url {
            lines.push(link_line(app, 'g', "github", url));
        }
        if let Some(url) = project.blog_url {
            lines.push(link_line(app, 'b', "write-up", url));
        }

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(app.theme.dim))
            .title(" Project ");
        let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

fn link_line<'a>(app: &App, key: char, label: &'a str, url: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{}: ", key), Style::default().fg(app.theme.accent)),
        Span::styled(format!("{:<9}", label), Style::default().fg(app.theme.fg0)),
        Span::styled(url, Style::default().fg(app.theme.dim)),
    ])
}
