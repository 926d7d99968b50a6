//! Page shell state: the embed URL chosen at startup and the load-error
//! notification state.

use serde::Serialize;

use crate::embed::{build_embed_url, EmbedConfig, EmbedUrl};

/// Toast text shown when the iframe fails to load.
pub const EMBED_FAILED_MESSAGE: &str = "Failed to load Excel embed. Please check authentication.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmbedStatus {
    Displaying,
    Errored,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Error,
}

/// A transient, non-blocking toast.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: &'static str,
}

impl Notification {
    pub fn embed_failed() -> Self {
        Self {
            level: NotificationLevel::Error,
            message: EMBED_FAILED_MESSAGE,
        }
    }
}

/// One page view of the embedded workbook.
///
/// The URL is computed once in [`PageShell::new`] and never changes. A load
/// error moves the shell to [`EmbedStatus::Errored`] for good; only a reload
/// (a fresh shell) gets back to displaying.
#[derive(Debug, Clone)]
pub struct PageShell {
    config: EmbedConfig,
    embed_url: EmbedUrl,
    status: EmbedStatus,
}

impl PageShell {
    /// Current wiring passes no token, so this is always the public viewer.
    pub fn new(config: &EmbedConfig) -> Self {
        Self {
            config: *config,
            embed_url: build_embed_url(config, None),
            status: EmbedStatus::Displaying,
        }
    }

    pub fn config(&self) -> &EmbedConfig {
        &self.config
    }

    pub fn embed_url(&self) -> &EmbedUrl {
        &self.embed_url
    }

    pub fn status(&self) -> EmbedStatus {
        self.status
    }

    /// Record an iframe load error. Returns the notification to show on the
    /// first error only.
    pub fn load_failed(&mut self) -> Option<Notification> {
        match self.status {
            EmbedStatus::Displaying => {
                self.status = EmbedStatus::Errored;
                Some(Notification::embed_failed())
            }
            EmbedStatus::Errored => None,
        }
    }
}
