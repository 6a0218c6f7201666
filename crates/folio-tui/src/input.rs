use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, Page};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    GoHome,
    GoPage(Page),
    // Carousel navigation
    NavPrevious,
    NavNext,
    SelectIndex(usize),
    ToggleFocus,
    Select,
    // Vertical movement (blog list, expertise areas, contact fields)
    MoveUp,
    MoveDown,
    // Projects filter bar
    TechNext,
    TechPrev,
    CategoryNext,
    CategoryPrev,
    // Expertise step player
    TogglePlay,
    StepNext,
    StepPrev,
    // Project detail links
    OpenDemo,
    OpenGithub,
    OpenBlogPost,
    // Certification badge link
    OpenVerify,
    // Contact form
    ToggleEdit,
    Submit,
    InputChar(char),
    Backspace,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // Text entry swallows almost everything
    if app.page == Page::Contact && app.contact.editing {
        return handle_edit_mode(key);
    }

    // Global bindings
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => return Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => return Action::Quit,
        (KeyCode::Esc, _) => {
            return if app.page == Page::Home {
                Action::Quit
            } else {
                Action::GoHome
            };
        }
        _ => {}
    }

    match app.page {
        Page::Home => handle_home(key),
        Page::Projects => handle_projects(key),
        Page::ProjectDetail(_) => handle_project_detail(key),
        Page::Blog => handle_blog(key),
        Page::Expertise => handle_expertise(key),
        Page::Technologies => handle_technologies(key),
        Page::Contact => handle_contact(key),
    }
}

fn handle_home(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Action::NavPrevious,
        KeyCode::Right | KeyCode::Char('l') => Action::NavNext,
        KeyCode::Tab | KeyCode::BackTab => Action::ToggleFocus,
        KeyCode::Enter => Action::Select,
        // Pagination dots
        KeyCode::Char(c @ '1'..='9') => Action::SelectIndex(c as usize - '1' as usize),
        KeyCode::Char('p') => Action::GoPage(Page::Projects),
        KeyCode::Char('b') => Action::GoPage(Page::Blog),
        KeyCode::Char('e') => Action::GoPage(Page::Expertise),
        KeyCode::Char('t') => Action::GoPage(Page::Technologies),
        KeyCode::Char('m') => Action::GoPage(Page::Contact),
        _ => Action::None,
    }
}

fn handle_projects(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Left | KeyCode::Char('h'), _) => Action::NavPrevious,
        (KeyCode::Right | KeyCode::Char('l'), _) => Action::NavNext,
        (KeyCode::Enter, _) => Action::Select,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::TechNext,
        (KeyCode::Char('T'), _) => Action::TechPrev,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::CategoryNext,
        (KeyCode::Char('C'), _) => Action::CategoryPrev,
        _ => Action::None,
    }
}

fn handle_project_detail(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('d') => Action::OpenDemo,
        KeyCode::Char('g') => Action::OpenGithub,
        KeyCode::Char('b') => Action::OpenBlogPost,
        KeyCode::Left | KeyCode::Backspace => Action::GoPage(Page::Projects),
        _ => Action::None,
    }
}

fn handle_blog(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Up | KeyCode::Char('k'), _) => Action::MoveUp,
        (KeyCode::Down | KeyCode::Char('j'), _) => Action::MoveDown,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::CategoryNext,
        (KeyCode::Char('C'), _) => Action::CategoryPrev,
        _ => Action::None,
    }
}

fn handle_expertise(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Left | KeyCode::Char('h') => Action::StepPrev,
        KeyCode::Right | KeyCode::Char('l') => Action::StepNext,
        KeyCode::Char(' ') | KeyCode::Enter => Action::TogglePlay,
        _ => Action::None,
    }
}

fn handle_technologies(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::Char('v') => Action::OpenVerify,
        _ => Action::None,
    }
}

fn handle_contact(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Char('j') => Action::MoveDown,
        KeyCode::BackTab | KeyCode::Up | KeyCode::Char('k') => Action::MoveUp,
        KeyCode::Enter => Action::ToggleEdit,
        KeyCode::Char('s') => Action::Submit,
        _ => Action::None,
    }
}

fn handle_edit_mode(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) | (KeyCode::Enter, _) => Action::ToggleEdit,
        (KeyCode::Tab, _) => Action::MoveDown,
        (KeyCode::BackTab, _) => Action::MoveUp,
        (KeyCode::Backspace, _) => Action::Backspace,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char(c), _) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::HomeFocus;
    use folio_core::AppConfig;
    use std::time::Instant;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn app() -> App {
        App::new(AppConfig::default(), Instant::now())
    }

    #[test]
    fn test_arrows_navigate_carousel_pages() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Left), &app), Action::NavPrevious);
        assert_eq!(handle_key_event(key(KeyCode::Right), &app), Action::NavNext);
    }

    #[test]
    fn test_digits_select_panels() {
        let app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app),
            Action::SelectIndex(2)
        );
    }

    #[test]
    fn test_esc_leaves_inner_page() {
        let mut app = app();
        app.page = Page::Blog;
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::GoHome);
        app.page = Page::Home;
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::Quit);
    }

    #[test]
    fn test_edit_mode_captures_characters() {
        let mut app = app();
        app.page = Page::Contact;
        app.contact.editing = true;
        // Keys that are bindings elsewhere become text while editing
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app),
            Action::InputChar('q')
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Backspace), &app),
            Action::Backspace
        );
        assert_eq!(handle_key_event(key(KeyCode::Esc), &app), Action::ToggleEdit);
    }

    #[test]
    fn test_verify_key_on_technologies_page() {
        let mut app = app();
        app.page = Page::Technologies;
        assert_eq!(
            handle_key_event(key(KeyCode::Char('v')), &app),
            Action::OpenVerify
        );
        assert_eq!(handle_key_event(key(KeyCode::Char('j')), &app), Action::MoveDown);
    }

    #[test]
    fn test_filter_keys_on_projects_page() {
        let mut app = app();
        app.page = Page::Projects;
        assert_eq!(handle_key_event(key(KeyCode::Char('t')), &app), Action::TechNext);
        assert_eq!(
            handle_key_event(
                KeyEvent::new(KeyCode::Char('T'), KeyModifiers::SHIFT),
                &app
            ),
            Action::TechPrev
        );
    }

    #[test]
    fn test_focus_toggle_only_on_home() {
        let mut app = app();
        app.home_focus = HomeFocus::Story;
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::ToggleFocus);
        app.page = Page::Projects;
        assert_eq!(handle_key_event(key(KeyCode::Tab), &app), Action::None);
    }
}
