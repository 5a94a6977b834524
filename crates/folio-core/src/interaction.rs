//! Interaction state machines.
//!
//! These are the pieces of state behind the page's event wiring: the mobile
//! menu, the frame-throttled navbar styling, the simulated contact form and
//! the smooth-scroll destination. The host owns the events and timers; the
//! types here only decide what should change.

use std::time::Duration;

/// Vertical offset after which the navbar takes its `scrolled` style.
pub const SCROLLED_THRESHOLD: f64 = 100.0;

/// Host frame interval used to batch scroll work.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How long the contact form shows its confirmation.
pub const CONFIRMATION_DURATION: Duration = Duration::from_millis(3000);

/// Gap kept between the viewport top and a scrolled-to section.
pub const SCROLL_OFFSET: f64 = 80.0;

/// Open/closed state of the mobile navigation menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Hamburger click
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Nav link click
    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Single-flight frame throttle for scroll handling.
///
/// A scroll event schedules at most one frame update. Events arriving while
/// that update is pending are dropped, not queued.
#[derive(Debug, Clone, Default)]
pub struct ScrollThrottle {
    pending: bool,
    frames: u64,
}

impl ScrollThrottle {
    /// Called on every scroll event. Returns true when the caller must
    /// schedule a frame update.
    pub fn request_frame(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    /// Called from the scheduled frame. Returns whether the navbar is scrolled.
    pub fn complete_frame(&mut self, scroll_top: f64) -> bool {
        self.pending = false;
        self.frames += 1;
        is_scrolled(scroll_top)
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Number of frame updates that ran
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

pub fn is_scrolled(scroll_top: f64) -> bool {
    scroll_top > SCROLLED_THRESHOLD
}

/// Fields of the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 4] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Subject,
        ContactField::Message,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ContactField::Name => "name",
            ContactField::Email => "email",
            ContactField::Subject => "subject",
            ContactField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    /// Input type attribute; the message is a textarea
    pub fn input_type(&self) -> &'static str {
        match self {
            ContactField::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    /// Showing the confirmation; the submit control is disabled
    Sent,
}

/// Contact form contents and submit state.
///
/// Submission is simulated: nothing leaves the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    name: String,
    email: String,
    subject: String,
    message: String,
    status: SubmitStatus,
}

impl ContactForm {
    pub fn value(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: impl Into<String>) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Subject => &mut self.subject,
            ContactField::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn status(&self) -> SubmitStatus {
        self.status
    }

    pub fn is_disabled(&self) -> bool {
        self.status == SubmitStatus::Sent
    }

    /// Enter the confirmation state. Returns how long the host should wait
    /// before calling [`ContactForm::restore`], or `None` if a confirmation is
    /// already showing.
    pub fn submit(&mut self) -> Option<Duration> {
        if self.is_disabled() {
            return None;
        }
        self.status = SubmitStatus::Sent;
        Some(CONFIRMATION_DURATION)
    }

    /// End the confirmation: re-enable the control and clear every field.
    pub fn restore(&mut self) {
        *self = ContactForm::default();
    }

    pub fn button_label(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "Send Message",
            SubmitStatus::Sent => "Sent!",
        }
    }

    pub fn button_icon(&self) -> &'static str {
        match self.status {
            SubmitStatus::Idle => "paper-plane",
            SubmitStatus::Sent => "check",
        }
    }
}

/// Target id of an in-page anchor, `None` for other links and the bare `#`.
pub fn anchor_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Scroll position placing a target [`SCROLL_OFFSET`] below the viewport top.
///
/// `target_top` and `container_top` are viewport coordinates; `scroll_top` is
/// the container's current offset.
pub fn scroll_destination(scroll_top: f64, target_top: f64, container_top: f64) -> f64 {
    (scroll_top + target_top - container_top - SCROLL_OFFSET).max(0.0)
}
