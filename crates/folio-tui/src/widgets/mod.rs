//! Page rendering. Every widget follows the same convention: an empty
//! struct with an associated `render(frame, area, app)`.

pub mod blog_list;
pub mod contact_form;
pub mod expertise;
pub mod preview_cards;
pub mod project_detail;
pub mod projects;
pub mod status_bar;
pub mod story_panels;
pub mod tech_gallery;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Frame;

use crate::app::{App, Page};

/// Top-level draw: route the main area to the current page and keep the
/// status bar on the last row.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    match app.page {
        Page::Home => render_home(frame, chunks[0], app),
        Page::Projects => projects::ProjectsWidget::render(frame, chunks[0], app),
        Page::ProjectDetail(project) => {
            project_detail::ProjectDetailWidget::render(frame, chunks[0], app, project)
        }
        Page::Blog => blog_list::BlogListWidget::render(frame, chunks[0], app),
        Page::Expertise => expertise::ExpertiseWidget::render(frame, chunks[0], app),
        Page::Technologies => tech_gallery::TechGalleryWidget::render(frame, chunks[0], app),
        Page::Contact => contact_form::ContactFormWidget::render(frame, chunks[0], app),
    }

    status_bar::StatusBarWidget::render(frame, chunks[1], app);
}

fn render_home(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),
            Constraint::Length(1),
            Constraint::Length(9),
        ])
        .split(area);

    story_panels::StoryPanelsWidget::render(frame, chunks[0], app);
    story_panels::render_dots(frame, chunks[1], app);
    preview_cards::PreviewCardsWidget::render(frame, chunks[2], app);
}

/// Map a carousel's panels onto horizontal slots of the render area. A panel
/// partially scrolled off either edge gets a clipped slot; fully off-screen
/// panels are skipped.
pub(crate) fn panel_slots(area: Rect, unit: u16, offset: u16, count: usize) -> Vec<(usize, Rect)> {
    let mut slots = Vec::new();
    if unit == 0 || area.width == 0 {
        return slots;
    }
    for i in 0..count {
        let left = i as i32 * unit as i32 - offset as i32;
        let right = left + unit as i32;
        if right <= 0 || left >= area.width as i32 {
            continue;
        }
        let x = left.max(0);
        let end = right.min(area.width as i32);
        slots.push((
            i,
            Rect::new(area.x + x as u16, area.y, (end - x) as u16, area.height),
        ));
    }
    slots
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_slots_at_rest() {
        let area = Rect::new(0, 0, 80, 20);
        let slots = panel_slots(area, 80, 0, 5);
        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0], (0, area));
    }

    #[test]
    fn test_panel_slots_mid_glide_clip() {
        let area = Rect::new(0, 0, 80, 20);
        let slots = panel_slots(area, 80, 30, 5);
        assert_eq!(slots.len(), 2);
        // Panel 0 clipped on the left edge, panel 1 entering from the right
        assert_eq!(slots[0], (0, Rect::new(0, 0, 50, 20)));
        assert_eq!(slots[1], (1, Rect::new(50, 0, 30, 20)));
    }

    #[test]
    fn test_panel_slots_fixed_cards() {
        let area = Rect::new(0, 0, 80, 9);
        let slots = panel_slots(area, 36, 0, 5);
        // Two full cards and one clipped third fit into 80 columns
        assert_eq!(slots.len(), 3);
        assert_eq!(slots[2].1.width, 8);
    }

    #[test]
    fn test_panel_slots_zero_unit() {
        let area = Rect::new(0, 0, 80, 9);
        assert!(panel_slots(area, 0, 0, 5).is_empty());
    }
}
