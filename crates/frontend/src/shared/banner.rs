//! Success/error banner with auto-expiring errors.

use leptos::prelude::*;

use super::config::BANNER_TIMEOUT_MS;
use super::debounce::after_delay;
use super::request_seq::RequestSeq;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Error,
}

impl BannerKind {
    fn css_class(self) -> &'static str {
        match self {
            BannerKind::Success => "alert alert--success",
            BannerKind::Error => "alert alert--error",
        }
    }
}

/// The message currently shown; a new message replaces the old one immediately.
#[derive(Debug, Clone, Default)]
pub struct Banner {
    current: Option<(BannerKind, String)>,
    seq: RequestSeq,
}

impl Banner {
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.show(BannerKind::Error, message.into())
    }

    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.show(BannerKind::Success, message.into())
    }

    fn show(&mut self, kind: BannerKind, message: String) -> u64 {
        self.current = Some((kind, message));
        self.seq.issue()
    }

    /// Clears the banner if it still shows the message identified by `ticket`.
    pub fn expire(&mut self, ticket: u64) -> bool {
        if self.seq.is_current(ticket) && self.current.is_some() {
            self.current = None;
            return true;
        }
        false
    }

    pub fn clear(&mut self) {
        self.current = None;
        self.seq.invalidate();
    }

    pub fn kind(&self) -> Option<BannerKind> {
        self.current.as_ref().map(|(kind, _)| *kind)
    }

    pub fn message(&self) -> Option<&str> {
        self.current.as_ref().map(|(_, message)| message.as_str())
    }
}

/// Shows an error and schedules its removal.
pub fn flash_error(banner: RwSignal<Banner>, message: impl Into<String>) {
    let message = message.into();
    log::warn!("{}", message);
    if let Some(ticket) = banner.try_update(|b| b.error(message)) {
        after_delay(BANNER_TIMEOUT_MS, move || {
            banner.try_update(|b| b.expire(ticket));
        });
    }
}

pub fn flash_success(banner: RwSignal<Banner>, message: impl Into<String>) {
    banner.try_update(|b| b.success(message));
}

#[component]
pub fn StatusBanner(banner: RwSignal<Banner>) -> impl IntoView {
    move || {
        banner.with(|b| {
            b.kind().zip(b.message()).map(|(kind, message)| {
                let message = message.to_string();
                view! { <div class=kind.css_class() role="alert">{message}</div> }
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_expires_with_its_ticket() {
        let mut banner = Banner::default();
        let ticket = banner.error("Failed to load customers. Please try again.");
        assert_eq!(banner.kind(), Some(BannerKind::Error));
        assert!(banner.expire(ticket));
        assert_eq!(banner.message(), None);
    }

    #[test]
    fn test_newer_message_survives_old_timer() {
        let mut banner = Banner::default();
        let old = banner.error("first");
        banner.success("Customer created successfully!");
        assert!(!banner.expire(old));
        assert_eq!(banner.message(), Some("Customer created successfully!"));
        assert_eq!(banner.kind(), Some(BannerKind::Success));
    }

    #[test]
    fn test_clear_invalidates_pending_expiry() {
        let mut banner = Banner::default();
        let ticket = banner.error("boom");
        banner.clear();
        assert!(!banner.expire(ticket));
        assert_eq!(banner.message(), None);
    }
}
