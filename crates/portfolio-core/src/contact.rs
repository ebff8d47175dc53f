//! Contact Form
//!
//! Message payload and submission status for the contact section. The
//! network POST itself lives in the component layer; it fires once, is
//! never retried, and keeps the submit button disabled while in flight.

use std::time::Duration;

use serde::Serialize;

use crate::error::PortfolioError;

/// How long the status banner stays visible after a submission settles.
pub const STATUS_VISIBLE: Duration = Duration::from_millis(5000);

/// Form fields posted to the contact endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    /// Reject obviously unsendable messages before touching the network.
    pub fn validate(&self) -> Result<(), PortfolioError> {
        if self.name.trim().is_empty() {
            return Err(PortfolioError::InvalidContactForm("name is empty".into()));
        }
        if !self.email.contains('@') {
            return Err(PortfolioError::InvalidContactForm(
                "email address is missing an @".into(),
            ));
        }
        if self.message.trim().is_empty() {
            return Err(PortfolioError::InvalidContactForm("message is empty".into()));
        }
        Ok(())
    }
}

/// Outcome banner shown under the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    Success,
    Error,
}

impl FormStatus {
    pub fn message(self) -> &'static str {
        match self {
            FormStatus::Success => "Thank you! Your message has been sent successfully.",
            FormStatus::Error => "Oops! Something went wrong. Please try again.",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            FormStatus::Success => "form-status success",
            FormStatus::Error => "form-status error",
        }
    }
}

/// Status banner under the form. Every outcome (including a validation
/// reject) shows for [`STATUS_VISIBLE`] and then clears; the generation
/// counter keeps a timeout scheduled for an older outcome from wiping a
/// newer one early.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBanner {
    status: Option<FormStatus>,
    generation: u64,
}

impl StatusBanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Display an outcome. Returns the generation the caller's clear
    /// timeout must present back.
    pub fn show(&mut self, status: FormStatus) -> u64 {
        self.generation += 1;
        self.status = Some(status);
        self.generation
    }

    /// Clear the banner, but only if no newer outcome replaced it since
    /// `generation` was handed out.
    pub fn clear_if_current(&mut self, generation: u64) {
        if generation == self.generation {
            self.status = None;
        }
    }

    pub fn current(&self) -> Option<FormStatus> {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            message: "Hello!".into(),
        }
    }

    #[test]
    fn test_valid_message_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn test_blank_fields_rejected() {
        let mut m = valid();
        m.name = "   ".into();
        assert!(m.validate().is_err());

        let mut m = valid();
        m.message = String::new();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_email_needs_an_at_sign() {
        let mut m = valid();
        m.email = "ada.example.com".into();
        assert!(m.validate().is_err());
    }

    #[test]
    fn test_status_messages_differ() {
        assert_ne!(FormStatus::Success.message(), FormStatus::Error.message());
        assert!(FormStatus::Success.css_class().contains("success"));
        assert!(FormStatus::Error.css_class().contains("error"));
    }

    #[test]
    fn test_banner_shows_then_clears() {
        let mut banner = StatusBanner::new();
        assert_eq!(banner.current(), None);

        let gen = banner.show(FormStatus::Error);
        assert_eq!(banner.current(), Some(FormStatus::Error));

        banner.clear_if_current(gen);
        assert_eq!(banner.current(), None);
    }

    #[test]
    fn test_stale_clear_leaves_newer_banner_alone() {
        let mut banner = StatusBanner::new();

        // A validation reject shows, then a real submission succeeds
        // before the reject's 5-second timeout fires.
        let rejected = banner.show(FormStatus::Error);
        let sent = banner.show(FormStatus::Success);

        banner.clear_if_current(rejected);
        assert_eq!(banner.current(), Some(FormStatus::Success));

        banner.clear_if_current(sent);
        assert_eq!(banner.current(), None);
    }
}
