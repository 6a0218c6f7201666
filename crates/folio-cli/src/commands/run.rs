use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};

use folio_core::AppConfig;
use folio_tui::{
    app::{App, HomeFocus, Page},
    carousel::Direction,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    widgets,
};

/// Horizontal drag displacement units per terminal cell. Terminal cells are
/// coarse compared to the swipe threshold, so each cell of drag counts for
/// several units.
const DRAG_UNITS_PER_CELL: i32 = 4;

/// Columns of organic scroll per wheel notch.
const WHEEL_STEP: i16 = 4;

pub async fn run(config: AppConfig) -> Result<()> {
    tracing::info!("starting terminal ui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        SetTitle("Folio")
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.ui.tick_rate_ms, config.ui.animation_fps);
    let mut app = App::new(config, Instant::now());

    // Faster polling while a glide is in flight; checked at the end of each
    // iteration for the next one
    let mut needs_fast_update = false;

    // Main loop
    loop {
        let now = Instant::now();
        app.tick(now);

        // Carousels scroll over the terminal width
        let size = terminal.size()?;
        set_viewport_widths(&mut app, size.width, now);

        terminal.draw(|frame| widgets::render(frame, &app))?;

        if let Some(event) = event_handler.next(needs_fast_update)? {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, now);
                }
                AppEvent::Mouse(mouse) => handle_mouse(&mut app, mouse, now),
                AppEvent::Resize(width, _) => set_viewport_widths(&mut app, width, now),
                AppEvent::Tick => {}
            }
        }

        needs_fast_update = app.needs_fast_tick();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    tracing::info!("terminal restored");

    Ok(())
}

fn set_viewport_widths(app: &mut App, width: u16, now: Instant) {
    app.story.set_viewport_width(width, now);
    app.cards.set_viewport_width(width, now);
    app.projects.carousel.set_viewport_width(width, now);
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::GoHome => app.go(Page::Home),
        Action::GoPage(page) => app.go(page),
        Action::NavPrevious => app.navigate(Direction::Previous, now),
        Action::NavNext => app.navigate(Direction::Next, now),
        Action::SelectIndex(index) => {
            if let Some(carousel) = app.active_carousel_mut() {
                carousel.user_select(index, now);
            }
        }
        Action::ToggleFocus => {
            app.home_focus = match app.home_focus {
                HomeFocus::Story => HomeFocus::Cards,
                HomeFocus::Cards => HomeFocus::Story,
            };
        }
        Action::Select => app.select(now),
        Action::MoveUp => move_vertical(app, -1, now),
        Action::MoveDown => move_vertical(app, 1, now),
        Action::TechNext => app.cycle_tech(1, now),
        Action::TechPrev => app.cycle_tech(-1, now),
        Action::CategoryNext => match app.page {
            Page::Blog => app.cycle_blog_category(1),
            _ => app.cycle_category(1, now),
        },
        Action::CategoryPrev => match app.page {
            Page::Blog => app.cycle_blog_category(-1),
            _ => app.cycle_category(-1, now),
        },
        Action::TogglePlay => app.expertise.toggle_play(now),
        Action::StepNext => app.expertise.step_by(1, now),
        Action::StepPrev => app.expertise.step_by(-1, now),
        Action::OpenDemo => open_link(app, now, |p| p.demo_url, "demo"),
        Action::OpenGithub => open_link(app, now, |p| p.github_url, "repository"),
        Action::OpenBlogPost => open_link(app, now, |p| p.blog_url, "write-up"),
        Action::OpenVerify => app.verify_cert(now),
        Action::ToggleEdit => app.contact.editing = !app.contact.editing,
        Action::Submit => app.submit_contact(now),
        Action::InputChar(c) => app.contact.field_mut().push(c),
        Action::Backspace => {
            app.contact.field_mut().pop();
        }
        Action::None => {}
    }
}

fn move_vertical(app: &mut App, delta: isize, now: Instant) {
    match app.page {
        Page::Blog => {
            let len = app.blog.posts().len();
            if len > 0 {
                let cursor = app.blog.cursor as isize + delta;
                app.blog.cursor = cursor.clamp(0, len as isize - 1) as usize;
            }
        }
        Page::Expertise => {
            let len = folio_core::content::expertise::all().len() as isize;
            let next = (app.expertise.area_index as isize + delta).rem_euclid(len) as usize;
            app.expertise.select_area(next, now);
        }
        Page::Contact => {
            app.contact.focus = if delta < 0 {
                app.contact.focus.prev()
            } else {
                app.contact.focus.next()
            };
        }
        Page::Technologies => app.cycle_cert(delta),
        _ => {}
    }
}

fn open_link(
    app: &mut App,
    now: Instant,
    pick: fn(&folio_core::content::Project) -> Option<&'static str>,
    label: &str,
) {
    if let Page::ProjectDetail(project) = app.page {
        match pick(project) {
            Some(url) => app.open_url(url, now),
            None => app.set_status(format!("No {} link for this project", label), now),
        }
    }
}

fn handle_mouse(app: &mut App, mouse: MouseEvent, now: Instant) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(carousel) = app.active_carousel_mut() {
                carousel.interact(now);
            }
            app.swipe.begin(mouse.column as i32 * DRAG_UNITS_PER_CELL);
        }
        MouseEventKind::Drag(MouseButton::Left) => {
            app.swipe.update(mouse.column as i32 * DRAG_UNITS_PER_CELL);
        }
        MouseEventKind::Up(MouseButton::Left) => {
            app.finish_swipe(now);
        }
        MouseEventKind::ScrollUp => nudge_active(app, -WHEEL_STEP, now),
        MouseEventKind::ScrollDown => nudge_active(app, WHEEL_STEP, now),
        MouseEventKind::ScrollLeft => nudge_active(app, -WHEEL_STEP, now),
        MouseEventKind::ScrollRight => nudge_active(app, WHEEL_STEP, now),
        _ => {}
    }
}

fn nudge_active(app: &mut App, delta: i16, now: Instant) {
    if let Some(carousel) = app.active_carousel_mut() {
        carousel.nudge(delta, now);
    }
}
