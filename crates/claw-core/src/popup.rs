use crate::outcome::Outcome;
use instant::Instant;
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PopupMessage {
    pub icon: String,
    pub text: String,
    pub success: bool,
}

impl PopupMessage {
    pub fn from_outcome(outcome: &Outcome) -> Self {
        let card = outcome.display();
        Self {
            icon: card.icon.to_string(),
            text: card.name.to_string(),
            success: outcome.is_success(),
        }
    }
}

/// Single-slot transient message with its own dismissal deadline.
#[derive(Clone, Debug, Default)]
pub struct Popup {
    current: Option<(PopupMessage, Instant)>,
}

impl Popup {
    /// Show `message` now, replacing whatever was visible and its deadline.
    pub fn show(&mut self, message: PopupMessage, now: Instant, duration: Duration) {
        self.current = Some((message, now + duration));
    }

    /// Clear the message if its own deadline has passed. Returns true when
    /// something was dismissed.
    pub fn expire(&mut self, now: Instant) -> bool {
        match &self.current {
            Some((_, deadline)) if now >= *deadline => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }

    pub fn message(&self) -> Option<&PopupMessage> {
        self.current.as_ref().map(|(m, _)| m)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.current.as_ref().map(|(_, d)| *d)
    }
}
