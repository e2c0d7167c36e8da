//! Presentation Surface
//!
//! Where the presenter projects display state, notices and notifications.
//! Every call happens on the context that owns the presenter.

use crate::types::{DisplayState, Notice};

/// Surface interface.
pub trait Surface {
    /// Replace the screen content.
    fn show(&mut self, state: &DisplayState);

    /// Show a modal notice.
    fn show_notice(&mut self, notice: &Notice);

    /// Show a transient notification.
    fn notify(&mut self, message: &str);

    /// Leave the screen.
    fn navigate_back(&mut self);
}

/// Recorded surface call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SurfaceEvent {
    Shown(DisplayState),
    Notice(Notice),
    Notification(String),
    NavigatedBack,
}

/// Surface that records every call, for testing.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    events: Vec<SurfaceEvent>,
}

impl RecordingSurface {
    /// Create new recording surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded events in order.
    pub fn events(&self) -> &[SurfaceEvent] {
        &self.events
    }

    /// Every display state shown.
    pub fn displays(&self) -> Vec<&DisplayState> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Shown(state) => Some(state),
                _ => None,
            })
            .collect()
    }

    /// Most recent display state.
    pub fn last_display(&self) -> Option<&DisplayState> {
        self.displays().last().copied()
    }

    /// Every notice shown.
    pub fn notices(&self) -> Vec<&Notice> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Notice(notice) => Some(notice),
                _ => None,
            })
            .collect()
    }

    /// Every notification shown.
    pub fn notifications(&self) -> Vec<&str> {
        self.events
            .iter()
            .filter_map(|e| match e {
                SurfaceEvent::Notification(message) => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Clear all events.
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl Surface for RecordingSurface {
    fn show(&mut self, state: &DisplayState) {
        self.events.push(SurfaceEvent::Shown(state.clone()));
    }

    fn show_notice(&mut self, notice: &Notice) {
        self.events.push(SurfaceEvent::Notice(notice.clone()));
    }

    fn notify(&mut self, message: &str) {
        self.events
            .push(SurfaceEvent::Notification(message.to_string()));
    }

    fn navigate_back(&mut self) {
        self.events.push(SurfaceEvent::NavigatedBack);
    }
}

/// Surface printing to the terminal.
#[derive(Debug, Default)]
pub struct ConsoleSurface {
    closed: bool,
}

impl ConsoleSurface {
    /// Create new console surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `navigate_back` was called.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn format_display(state: &DisplayState) -> String {
        let mut lines = Vec::new();
        if let Some(message) = &state.status_message {
            lines.push(format!("> {}", message));
        }
        lines.push(state.is_authed_text.clone());
        lines.push(state.auth_type_text.clone());
        lines.extend(
            state
                .token_fields
                .as_array()
                .iter()
                .filter(|field| !field.is_empty())
                .map(|field| field.to_string()),
        );
        lines.join("\n")
    }
}

impl Surface for ConsoleSurface {
    fn show(&mut self, state: &DisplayState) {
        println!("{}\n", Self::format_display(state));
    }

    fn show_notice(&mut self, notice: &Notice) {
        eprintln!("[{}] {}", notice.title, notice.message);
    }

    fn notify(&mut self, message: &str) {
        println!("* {}", message);
    }

    fn navigate_back(&mut self) {
        self.closed = true;
    }
}
