use std::time::{Duration, Instant};

use folio_core::content::{
    blog, expertise, projects, technologies, BlogPost, Certification, ExpertiseArea, Project,
};
use folio_core::AppConfig;

use crate::carousel::{Direction, PanelCarousel, Sizing, SwipeTracker};
use crate::theme::{load_theme, Theme};

/// How long a status message stays on screen
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Interval between automatic walkthrough steps on the expertise page
const STEP_INTERVAL: Duration = Duration::from_secs(3);

/// Preview cards are a fixed number of columns wide
pub const CARD_WIDTH: u16 = 36;

/// Current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Projects,
    ProjectDetail(&'static Project),
    Blog,
    Expertise,
    Technologies,
    Contact,
}

/// Which home carousel has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeFocus {
    Story,
    Cards,
}

/// One full-viewport narrative panel on the home page
pub struct StoryPanel {
    pub title: &'static str,
    pub tagline: &'static str,
    pub body: &'static [&'static str],
}

pub const STORY_PANELS: &[StoryPanel] = &[
    StoryPanel {
        title: "Joseph Kang",
        tagline: "DevOps & Cloud Engineer",
        body: &[
            "Building reliable infrastructure and shipping it with confidence.",
            "Kubernetes, AWS, Terraform, and the automation that ties them together.",
        ],
    },
    StoryPanel {
        title: "What I Do",
        tagline: "Infrastructure as a product",
        body: &[
            "I design cloud architectures, containerize workloads, and wire up",
            "the pipelines that take code from commit to production.",
        ],
    },
    StoryPanel {
        title: "How I Work",
        tagline: "Automate first",
        body: &[
            "Everything reproducible, everything observable. If it was done by",
            "hand twice, it becomes a script, a module, or a pipeline stage.",
        ],
    },
    StoryPanel {
        title: "Recent Work",
        tagline: "From EKS clusters to serverless resumes",
        body: &[
            "Microservices on Kubernetes, 3-tier deployments on EC2, and a",
            "serverless site that runs for less than a dollar a month.",
        ],
    },
    StoryPanel {
        title: "Get In Touch",
        tagline: "Let's build something",
        body: &[
            "Open to DevOps, cloud, and platform engineering roles.",
            "Head to the contact page or find me on GitHub.",
        ],
    },
];

/// One fixed-width preview card linking to a section
pub struct PreviewCard {
    pub title: &'static str,
    pub blurb: &'static str,
    pub page: Page,
}

pub const PREVIEW_CARDS: &[PreviewCard] = &[
    PreviewCard {
        title: "Projects",
        blurb: "Deployments, pipelines, and platforms",
        page: Page::Projects,
    },
    PreviewCard {
        title: "Blog",
        blurb: "Write-ups from the deploy diaries",
        page: Page::Blog,
    },
    PreviewCard {
        title: "Expertise",
        blurb: "Interactive walkthroughs by area",
        page: Page::Expertise,
    },
    PreviewCard {
        title: "Technologies",
        blurb: "The stack, grouped and certified",
        page: Page::Technologies,
    },
    PreviewCard {
        title: "Contact",
        blurb: "Say hello",
        page: Page::Contact,
    },
];

/// Projects page: filter bar plus a card carousel over the filtered set
pub struct ProjectsState {
    pub tech_index: usize,
    pub category_index: usize,
    pub filtered: Vec<&'static Project>,
    pub carousel: PanelCarousel,
}

impl ProjectsState {
    fn new(config: &AppConfig, now: Instant) -> Self {
        let filtered: Vec<&'static Project> = projects::all().iter().collect();
        let carousel = PanelCarousel::new(
            filtered.len(),
            Sizing::FixedCard(CARD_WIDTH),
            false,
            config.ui.carousel.clone(),
            now,
        );
        Self {
            tech_index: 0,
            category_index: 0,
            filtered,
            carousel,
        }
    }

    pub fn tech(&self) -> &'static str {
        projects::TECHNOLOGIES[self.tech_index]
    }

    pub fn category(&self) -> &'static str {
        projects::CATEGORIES[self.category_index]
    }

    pub fn selected(&self) -> Option<&'static Project> {
        self.filtered.get(self.carousel.current_index()).copied()
    }

    fn refilter(&mut self, now: Instant) {
        self.filtered = projects::filter(self.tech(), self.category());
        self.carousel.set_panels(self.filtered.len(), now);
    }
}

/// Blog page: category filter over the post list
pub struct BlogState {
    pub category_index: usize,
    pub cursor: usize,
}

impl BlogState {
    pub fn category(&self) -> &'static str {
        blog::CATEGORIES[self.category_index]
    }

    pub fn posts(&self) -> Vec<&'static BlogPost> {
        blog::by_category(self.category())
    }
}

/// Expertise page: area list plus a walkthrough step player
pub struct ExpertiseState {
    pub area_index: usize,
    pub step: usize,
    pub playing: bool,
    step_deadline: Option<Instant>,
}

impl ExpertiseState {
    pub fn area(&self) -> &'static ExpertiseArea {
        &expertise::all()[self.area_index]
    }

    pub fn toggle_play(&mut self, now: Instant) {
        self.playing = !self.playing;
        self.step_deadline = self.playing.then(|| now + STEP_INTERVAL);
    }

    pub fn select_area(&mut self, index: usize, now: Instant) {
        self.area_index = index.min(expertise::all().len() - 1);
        self.step = 0;
        if self.playing {
            self.step_deadline = Some(now + STEP_INTERVAL);
        }
    }

    /// Manual step navigation. Restarts the auto-step interval when playing
    /// so the panel the user chose gets a full dwell.
    pub fn step_by(&mut self, delta: isize, now: Instant) {
        let len = self.area().steps.len() as isize;
        self.step = (self.step as isize + delta).rem_euclid(len) as usize;
        if self.playing {
            self.step_deadline = Some(now + STEP_INTERVAL);
        }
    }

    fn tick(&mut self, now: Instant) {
        if !self.playing {
            return;
        }
        if let Some(deadline) = self.step_deadline {
            if now >= deadline {
                let len = self.area().steps.len();
                self.step = (self.step + 1) % len;
                self.step_deadline = Some(now + STEP_INTERVAL);
            }
        }
    }
}

/// Contact page field under focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn next(self) -> Self {
        match self {
            Self::Name => Self::Email,
            Self::Email => Self::Subject,
            Self::Subject => Self::Message,
            Self::Message => Self::Name,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Self::Name => Self::Message,
            Self::Email => Self::Name,
            Self::Subject => Self::Email,
            Self::Message => Self::Subject,
        }
    }
}

/// Contact form bindings. There is no delivery endpoint; submission only
/// logs and acknowledges.
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: ContactField,
    pub editing: bool,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: String::new(),
            message: String::new(),
            focus: ContactField::Name,
            editing: false,
        }
    }
}

impl ContactForm {
    pub fn field_mut(&mut self) -> &mut String {
        match self.focus {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        }
    }

    fn clear(&mut self) {
        self.name.clear();
        self.email.clear();
        self.subject.clear();
        self.message.clear();
        self.focus = ContactField::Name;
        self.editing = false;
    }
}

/// Main application state
pub struct App {
    pub config: AppConfig,
    pub theme: Theme,
    pub page: Page,
    pub should_quit: bool,

    pub home_focus: HomeFocus,
    /// Full-viewport story panels, auto-advancing
    pub story: PanelCarousel,
    /// Fixed-width section preview cards
    pub cards: PanelCarousel,

    pub projects: ProjectsState,
    pub blog: BlogState,
    pub expertise: ExpertiseState,
    /// Certification under the cursor on the technologies page
    pub cert_index: usize,
    pub contact: ContactForm,

    pub swipe: SwipeTracker,
    status: Option<(String, Instant)>,
}

impl App {
    pub fn new(config: AppConfig, now: Instant) -> Self {
        let theme = load_theme(&config.ui.theme);
        let story = PanelCarousel::new(
            STORY_PANELS.len(),
            Sizing::FullViewport,
            true,
            config.ui.carousel.clone(),
            now,
        );
        let cards = PanelCarousel::new(
            PREVIEW_CARDS.len(),
            Sizing::FixedCard(CARD_WIDTH),
            false,
            config.ui.carousel.clone(),
            now,
        );
        let projects = ProjectsState::new(&config, now);
        let swipe = SwipeTracker::new(config.ui.carousel.swipe_threshold);
        Self {
            config,
            theme,
            page: Page::Home,
            should_quit: false,
            home_focus: HomeFocus::Story,
            story,
            cards,
            projects,
            blog: BlogState {
                category_index: 0,
                cursor: 0,
            },
            expertise: ExpertiseState {
                area_index: 0,
                step: 0,
                playing: false,
                step_deadline: None,
            },
            cert_index: 0,
            contact: ContactForm::default(),
            swipe,
            status: None,
        }
    }

    /// Advance timers and glides. Called once per event-loop iteration.
    pub fn tick(&mut self, now: Instant) {
        self.story.tick(now);
        self.cards.tick(now);
        self.projects.carousel.tick(now);
        self.expertise.tick(now);
        if let Some((_, shown_at)) = self.status {
            if now.duration_since(shown_at) >= STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// Whether any glide is in flight and frames should come fast.
    pub fn needs_fast_tick(&self) -> bool {
        self.story.needs_fast_tick()
            || self.cards.needs_fast_tick()
            || self.projects.carousel.needs_fast_tick()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_ref().map(|(message, _)| message.as_str())
    }

    pub fn set_status(&mut self, message: impl Into<String>, now: Instant) {
        self.status = Some((message.into(), now));
    }

    pub fn go(&mut self, page: Page) {
        self.page = page;
    }

    /// The carousel that navigation keys currently drive, if any.
    pub fn active_carousel_mut(&mut self) -> Option<&mut PanelCarousel> {
        match self.page {
            Page::Home => Some(match self.home_focus {
                HomeFocus::Story => &mut self.story,
                HomeFocus::Cards => &mut self.cards,
            }),
            Page::Projects => Some(&mut self.projects.carousel),
            _ => None,
        }
    }

    pub fn navigate(&mut self, direction: Direction, now: Instant) {
        if let Some(carousel) = self.active_carousel_mut() {
            carousel.user_advance(direction, now);
        }
    }

    /// Resolve a finished swipe against the focused carousel.
    pub fn finish_swipe(&mut self, now: Instant) {
        if let Some(direction) = self.swipe.finish() {
            self.navigate(direction, now);
        }
    }

    pub fn cycle_tech(&mut self, delta: isize, now: Instant) {
        let len = projects::TECHNOLOGIES.len() as isize;
        self.projects.tech_index =
            (self.projects.tech_index as isize + delta).rem_euclid(len) as usize;
        self.projects.refilter(now);
    }

    pub fn cycle_category(&mut self, delta: isize, now: Instant) {
        let len = projects::CATEGORIES.len() as isize;
        self.projects.category_index =
            (self.projects.category_index as isize + delta).rem_euclid(len) as usize;
        self.projects.refilter(now);
    }

    pub fn cycle_blog_category(&mut self, delta: isize) {
        let len = blog::CATEGORIES.len() as isize;
        self.blog.category_index =
            (self.blog.category_index as isize + delta).rem_euclid(len) as usize;
        self.blog.cursor = 0;
    }

    pub fn cycle_cert(&mut self, delta: isize) {
        let len = technologies::certifications().len() as isize;
        self.cert_index = (self.cert_index as isize + delta).rem_euclid(len) as usize;
    }

    pub fn selected_cert(&self) -> &'static Certification {
        &technologies::certifications()[self.cert_index]
    }

    /// Open the verification badge for the certification under the cursor.
    pub fn verify_cert(&mut self, now: Instant) {
        let url = self.selected_cert().verify_url;
        self.open_url(url, now);
    }

    /// Enter the detail page for the project under the carousel.
    pub fn open_selected_project(&mut self) {
        if let Some(project) = self.projects.selected() {
            self.page = Page::ProjectDetail(project);
        }
    }

    /// Activate whatever the focused element points at.
    pub fn select(&mut self, now: Instant) {
        match self.page {
            Page::Home => match self.home_focus {
                HomeFocus::Story => {}
                HomeFocus::Cards => {
                    let card = &PREVIEW_CARDS[self.cards.current_index()];
                    self.page = card.page;
                }
            },
            Page::Projects => self.open_selected_project(),
            Page::Expertise => self.expertise.toggle_play(now),
            _ => {}
        }
    }

    /// Open a URL in the system browser.
    pub fn open_url(&mut self, url: &str, now: Instant) {
        tracing::info!("opening {}", url);
        match open::that(url) {
            Ok(()) => self.set_status(format!("Opened {}", url), now),
            Err(e) => {
                tracing::error!("failed to open {}: {}", url, e);
                self.set_status(format!("Failed to open browser: {}", e), now);
            }
        }
    }

    /// Contact submission: no delivery endpoint exists, so the form is
    /// logged, cleared, and acknowledged.
    pub fn submit_contact(&mut self, now: Instant) {
        tracing::info!(
            name = %self.contact.name,
            email = %self.contact.email,
            subject = %self.contact.subject,
            "contact form submitted"
        );
        self.contact.clear();
        self.set_status("Thanks for reaching out!", now);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    fn app(now: Instant) -> App {
        let mut app = App::new(AppConfig::default(), now);
        app.story.set_viewport_width(80, now);
        app.cards.set_viewport_width(80, now);
        app.projects.carousel.set_viewport_width(80, now);
        app
    }

    #[test]
    fn test_filter_change_resets_project_carousel() {
        let base = Instant::now();
        let mut app = app(base);
        app.projects.carousel.scroll_to_index(3, base);
        assert_eq!(app.projects.carousel.current_index(), 3);

        // "Redis" narrows the set; the carousel restarts at the first card
        let redis = projects::TECHNOLOGIES
            .iter()
            .position(|t| *t == "Redis")
            .unwrap();
        app.projects.tech_index = redis;
        app.projects.refilter(base + ms(100));

        assert!(app.projects.filtered.len() < projects::all().len());
        assert_eq!(app.projects.carousel.current_index(), 0);
        assert_eq!(app.projects.carousel.offset(), 0);
    }

    #[test]
    fn test_filter_cycle_wraps() {
        let base = Instant::now();
        let mut app = app(base);
        app.cycle_tech(-1, base);
        assert_eq!(app.projects.tech_index, projects::TECHNOLOGIES.len() - 1);
        app.cycle_tech(1, base);
        assert_eq!(app.projects.tech_index, 0);
        assert_eq!(app.projects.filtered.len(), projects::all().len());
    }

    #[test]
    fn test_card_selection_routes_to_page() {
        let base = Instant::now();
        let mut app = app(base);
        app.home_focus = HomeFocus::Cards;
        app.cards.scroll_to_index(1, base);
        app.select(base);
        assert_eq!(app.page, Page::Blog);
    }

    #[test]
    fn test_story_auto_advances_cards_do_not() {
        let base = Instant::now();
        let mut app = app(base);
        app.tick(base + ms(4001));
        assert_eq!(app.story.current_index(), 1);
        assert_eq!(app.cards.current_index(), 0);
    }

    #[test]
    fn test_expertise_player_steps_on_interval() {
        let base = Instant::now();
        let mut app = app(base);
        app.expertise.toggle_play(base);
        assert!(app.expertise.playing);

        app.tick(base + ms(2999));
        assert_eq!(app.expertise.step, 0);
        app.tick(base + ms(3001));
        assert_eq!(app.expertise.step, 1);

        // Pausing freezes the step
        app.expertise.toggle_play(base + ms(3500));
        app.tick(base + ms(10_000));
        assert_eq!(app.expertise.step, 1);
    }

    #[test]
    fn test_expertise_steps_wrap() {
        let base = Instant::now();
        let mut app = app(base);
        let len = app.expertise.area().steps.len();
        app.expertise.step_by(-1, base);
        assert_eq!(app.expertise.step, len - 1);
        app.expertise.step_by(1, base);
        assert_eq!(app.expertise.step, 0);
    }

    #[test]
    fn test_cert_cursor_wraps_and_resolves_a_verify_url() {
        let base = Instant::now();
        let mut app = app(base);
        let len = technologies::certifications().len();
        app.cycle_cert(-1);
        assert_eq!(app.cert_index, len - 1);
        app.cycle_cert(1);
        assert_eq!(app.cert_index, 0);
        assert!(app.selected_cert().verify_url.starts_with("https://"));
    }

    #[test]
    fn test_contact_focus_cycles() {
        let mut form = ContactForm::default();
        form.focus = form.focus.next();
        assert_eq!(form.focus, ContactField::Email);
        form.focus = form.focus.prev();
        form.focus = form.focus.prev();
        assert_eq!(form.focus, ContactField::Message);
    }

    #[test]
    fn test_contact_submit_clears_and_acknowledges() {
        let base = Instant::now();
        let mut app = app(base);
        app.contact.name.push_str("Ada");
        app.contact.message.push_str("hello");
        app.submit_contact(base);
        assert!(app.contact.name.is_empty());
        assert!(app.contact.message.is_empty());
        assert!(app.status().is_some());
    }

    #[test]
    fn test_status_expires() {
        let base = Instant::now();
        let mut app = app(base);
        app.set_status("hi", base);
        app.tick(base + ms(2999));
        assert!(app.status().is_some());
        app.tick(base + ms(3001));
        assert!(app.status().is_none());
    }

    #[test]
    fn test_navigation_ignored_without_carousel() {
        let base = Instant::now();
        let mut app = app(base);
        app.page = Page::Contact;
        app.navigate(Direction::Next, base);
        assert_eq!(app.story.current_index(), 0);
        assert_eq!(app.cards.current_index(), 0);
    }
}
