use std::collections::HashSet;
use std::time::Instant;

use crate::models::{BookingRequest, Notification, TrackingView};
use crate::navigation::{Debounce, NavState, PageContext, SCROLL_DEBOUNCE, ScrollSpy, Section};
use crate::services::{BookingService, TrackingService};

/// Widgets the booking & tracking block is built from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Element {
    TabBar,
    BookingForm,
    TrackingForm,
    ResultPanel,
}

impl Element {
    pub const REQUIRED: [Element; 4] = [
        Element::TabBar,
        Element::BookingForm,
        Element::TrackingForm,
        Element::ResultPanel,
    ];
}

/// What a page actually contains
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    elements: HashSet<Element>,
    sections: Vec<Section>,
}

impl PageLayout {
    pub fn new(elements: impl IntoIterator<Item = Element>) -> Self {
        Self {
            elements: elements.into_iter().collect(),
            sections: Vec::new(),
        }
    }

    /// Every element of the booking & tracking block
    pub fn complete() -> Self {
        Self::new(Element::REQUIRED)
    }

    /// Scroll-spied sections in document order
    pub fn with_sections(mut self, sections: Vec<Section>) -> Self {
        self.sections = sections;
        self
    }

    pub fn contains(&self, element: Element) -> bool {
        self.elements.contains(&element)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Booking,
    Tracking,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResultPanel {
    #[default]
    Hidden,
    Shown(TrackingView),
}

impl ResultPanel {
    pub fn is_shown(&self) -> bool {
        matches!(self, ResultPanel::Shown(_))
    }

    pub fn view(&self) -> Option<&TrackingView> {
        match self {
            ResultPanel::Shown(view) => Some(view),
            ResultPanel::Hidden => None,
        }
    }
}

/// Current values of the booking form inputs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingForm {
    pub values: BookingRequest,
}

impl BookingForm {
    pub fn reset(&mut self) {
        self.values = BookingRequest::default();
    }

    pub fn is_empty(&self) -> bool {
        self.values == BookingRequest::default()
    }
}

/// State of the booking & tracking block of one page
pub struct PageController {
    context: PageContext,
    nav: NavState,
    scroll_spy: Option<ScrollSpy>,
    pending_scroll: Debounce<f64>,
    tab: Tab,
    panel: ResultPanel,
    booking_form: BookingForm,
    tracking_input: String,
    booking_service: BookingService,
    tracking_service: TrackingService,
}

impl PageController {
    pub fn new(
        context: PageContext,
        layout: PageLayout,
        booking_service: BookingService,
        tracking_service: TrackingService,
    ) -> Result<Self, ViewError> {
        if let Some(missing) = Element::REQUIRED
            .into_iter()
            .find(|element| !layout.contains(*element))
        {
            return Err(ViewError::MissingElement(missing));
        }

        let nav = NavState::for_context(&context);
        let scroll_spy = context
            .is_index()
            .then(|| ScrollSpy::new(layout.sections));

        tracing::debug!("Page controller ready for {}", context.file());

        Ok(Self {
            context,
            nav,
            scroll_spy,
            pending_scroll: Debounce::new(SCROLL_DEBOUNCE),
            tab: Tab::default(),
            panel: ResultPanel::default(),
            booking_form: BookingForm::default(),
            tracking_input: String::new(),
            booking_service,
            tracking_service,
        })
    }

    pub fn context(&self) -> &PageContext {
        &self.context
    }

    pub fn nav(&self) -> &NavState {
        &self.nav
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn panel(&self) -> &ResultPanel {
        &self.panel
    }

    pub fn booking_form(&self) -> &BookingForm {
        &self.booking_form
    }

    pub fn booking_form_mut(&mut self) -> &mut BookingForm {
        &mut self.booking_form
    }

    pub fn set_tracking_input(&mut self, input: impl Into<String>) {
        self.tracking_input = input.into();
    }

    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        if tab == Tab::Booking {
            self.panel = ResultPanel::Hidden;
        }
    }

    pub fn close_result(&mut self) {
        self.panel = ResultPanel::Hidden;
    }

    /// Submit the booking form. The form is cleared only on success.
    pub async fn submit_booking(&mut self) -> Notification {
        match self.booking_service.book(&self.booking_form.values).await {
            Ok(confirmation) => {
                self.booking_form.reset();
                self.booking_service.confirmation_notification(&confirmation)
            }
            Err(err) => err.notification(),
        }
    }

    /// Submit the tracking form; errors leave the panel as it was.
    pub async fn submit_tracking(&mut self) -> Option<Notification> {
        match self.tracking_service.track(&self.tracking_input).await {
            Ok(view) => {
                self.panel = ResultPanel::Shown(view);
                None
            }
            Err(err) => Some(err.notification()),
        }
    }

    /// Record a scroll offset. The highlight moves on a later [`tick`](Self::tick).
    pub fn on_scroll(&mut self, scroll_y: f64, now: Instant) {
        if self.scroll_spy.is_some() {
            self.pending_scroll.push(scroll_y, now);
        }
    }

    /// Apply the last recorded offset once the scroll burst has settled
    pub fn tick(&mut self, now: Instant) {
        let Some(scroll_y) = self.pending_scroll.poll(now) else {
            return;
        };
        if let Some(spy) = &self.scroll_spy {
            self.nav = NavState::Section(spy.current_section(scroll_y).to_string());
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Required page element missing: {0:?}")]
    MissingElement(Element),
}
