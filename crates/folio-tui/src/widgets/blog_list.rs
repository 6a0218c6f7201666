use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::App;

/// Blog page: category filter over the post list.
pub struct BlogListWidget;

impl BlogListWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(area);

        let bar = Line::from(vec![
            Span::styled(" Category ", Style::default().fg(app.theme.grey1)),
            Span::styled(
                format!("[{}]", app.blog.category()),
                Style::default().fg(app.theme.accent),
            ),
        ]);
        frame.render_widget(Paragraph::new(bar), chunks[0]);

        let posts = app.blog.posts();
        let items: Vec<ListItem> = posts
            .iter()
            .map(|post| {
                let star = if post.featured { "★ " } else { "  " };
                let title = Line::from(vec![
                    Span::styled(star, Style::default().fg(app.theme.yellow)),
                    Span::styled(
                        post.title,
                        Style::default()
                            .fg(app.theme.fg0)
                            .add_modifier(Modifier::BOLD),
                    ),
                ]);
                let meta = Line::from(Span::styled(
                    format!(
                        "  {} · {} min · {}",
                        post.date, post.read_minutes, post.category
                    ),
                    Style::default().fg(app.theme.grey1),
                ));
                let excerpt = Line::from(Span::styled(
                    format!("  {}", post.excerpt),
                    Style::default().fg(app.theme.dim),
                ));
                ListItem::new(vec![title, meta, excerpt, Line::default()])
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(app.theme.dim))
                    .title(" Blog "),
            )
            .highlight_style(
                Style::default()
                    .bg(app.theme.selection)
                    .add_modifier(Modifier::BOLD),
            );

        let mut state = ListState::default();
        if !posts.is_empty() {
            state.select(Some(app.blog.cursor.min(posts.len() - 1)));
        }
        frame.render_stateful_widget(list, chunks[1], &mut state);
    }
}
