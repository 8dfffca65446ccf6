//! Page detection and navigation highlighting.
//!
//! The current page is an explicit [`PageContext`] value handed to whoever
//! needs it, and the highlighted navigation entry is an explicit
//! [`NavState`] that the renderer maps to presentation.

use std::time::{Duration, Instant};

use serde::Serialize;

/// Scroll distance before a section's top at which it becomes current
pub const SECTION_ACTIVATION_OFFSET: f64 = 200.0;

/// Quiet period after the last scroll event before the highlight moves
pub const SCROLL_DEBOUNCE: Duration = Duration::from_millis(50);

const DEFAULT_SECTION: &str = "home";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    About,
    Service,
    News,
    Contact,
}

impl Page {
    pub const ALL: [Page; 5] = [Page::Home, Page::About, Page::Service, Page::News, Page::Contact];

    pub fn href(&self) -> &'static str {
        match self {
            Page::Home => "index.html",
            Page::About => "about.html",
            Page::Service => "service.html",
            Page::News => "news.html",
            Page::Contact => "contact.html",
        }
    }

    /// Page name without extension, as it appears in a path
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "" | "index" | "aldiron_logistics2" => Some(Page::Home),
            "about" => Some(Page::About),
            "service" => Some(Page::Service),
            "news" => Some(Page::News),
            "contact" => Some(Page::Contact),
            other if other.contains("contact") => Some(Page::Contact),
            other if other.contains("news") => Some(Page::News),
            _ => None,
        }
    }

    /// Page a section of the home page belongs to
    pub fn for_section(section: &str) -> Option<Self> {
        match section {
            "home" => Some(Page::Home),
            "introduce" => Some(Page::About),
            "service" => Some(Page::Service),
            "news" => Some(Page::News),
            "contact" => Some(Page::Contact),
            _ => None,
        }
    }
}

/// Which page is being shown, derived once from the location path
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageContext {
    file: String,
    page: Option<Page>,
}

impl PageContext {
    pub fn from_path(path: &str) -> Self {
        let file = match path.rsplit('/').next() {
            Some(last) if !last.is_empty() => last.to_string(),
            _ => Page::Home.href().to_string(),
        };
        let name = file.strip_suffix(".html").unwrap_or(&file);
        let page = Page::from_name(name);

        Self { file, page }
    }

    pub fn for_page(page: Page) -> Self {
        Self {
            file: page.href().to_string(),
            page: Some(page),
        }
    }

    pub fn file(&self) -> &str {
        &self.file
    }

    pub fn page(&self) -> Option<Page> {
        self.page
    }

    /// Only the home page carries scroll-spied sections
    pub fn is_index(&self) -> bool {
        self.page == Some(Page::Home)
    }
}

/// A page section and its offset from the document top
#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

impl Section {
    pub fn new(id: impl Into<String>, top: f64) -> Self {
        Self { id: id.into(), top }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ScrollSpy {
    sections: Vec<Section>,
}

impl ScrollSpy {
    /// `sections` must be in document order.
    pub fn new(sections: Vec<Section>) -> Self {
        Self { sections }
    }

    /// Last section whose activation point has been scrolled past
    pub fn current_section(&self, scroll_y: f64) -> &str {
        self.sections
            .iter()
            .rfind(|section| scroll_y >= section.top - SECTION_ACTIVATION_OFFSET)
            .map(|section| section.id.as_str())
            .unwrap_or(DEFAULT_SECTION)
    }
}

/// Holds back the latest value until no newer one arrived for `delay`.
///
/// Time is passed in by the caller, so the event loop decides when to poll.
#[derive(Debug, Clone)]
pub struct Debounce<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Debounce<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    /// Record a value; any value still waiting is replaced and the deadline restarts.
    pub fn push(&mut self, value: T, now: Instant) {
        self.pending = Some((now + self.delay, value));
    }

    /// Take the pending value once its deadline has passed
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((deadline, _)) if *deadline <= now => self.pending.take().map(|(_, value)| value),
            _ => None,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "target", rename_all = "snake_case")]
pub enum NavState {
    /// Highlight follows the page being shown
    Page(Page),
    /// Highlight follows the scrolled-to section of the home page
    Section(String),
    /// Page outside the known map; only links pointing at the file itself match
    File(String),
}

impl NavState {
    pub fn for_context(context: &PageContext) -> Self {
        match context.page() {
            Some(page) => NavState::Page(page),
            None => NavState::File(context.file().to_string()),
        }
    }

    /// Desktop navigation link
    pub fn is_link_active(&self, href: &str) -> bool {
        match self {
            NavState::Page(page) => href == page.href(),
            NavState::Section(section) => {
                href == format!("#{}", section)
                    || (href == Page::Home.href() && section == DEFAULT_SECTION)
            }
            NavState::File(file) => href == file.as_str(),
        }
    }

    /// Mobile bottom navigation item
    pub fn is_bottom_item_active(&self, href: &str) -> bool {
        match self {
            NavState::Page(page) => href == page.href(),
            NavState::Section(section) => {
                Page::for_section(section).is_some_and(|page| page.href() == href)
            }
            NavState::File(file) => href == file.as_str(),
        }
    }
}
