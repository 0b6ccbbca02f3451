//! Transient notifications shown in the corner of every page.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

use content::Error;
use leptos::prelude::*;

/// Visual tone of a toast.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastVariant {
    #[default]
    Default,
    Destructive,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub variant: ToastVariant,
}

impl Toast {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Default }
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into(), variant: ToastVariant::Destructive }
    }

    /// Destructive toast describing a failed store, session or upload call.
    pub fn from_error(error: &Error) -> Self {
        match error {
            Error::Validation(message) => Self::error("Missing Information", message.as_str()),
            Error::InvalidCredentials => Self::error("Login Failed 🚫", "Invalid email or password."),
            Error::UploadTooLarge { .. } => Self::error("File too large", "Please upload an image smaller than 5MB."),
            Error::NotFound { .. } => Self::error("Not Found", error.to_string()),
            Error::InvalidTransition { .. } => Self::error("Status Locked", error.to_string()),
            Error::Storage(_) => Self::error("Storage Error", error.to_string()),
        }
    }
}

/// Toasts currently on screen, oldest first.
#[derive(Clone, Debug, Default)]
pub struct ToastQueue {
    pub items: Vec<(u64, Toast)>,
    next_id: u64,
}

impl ToastQueue {
    /// Most toasts shown at once; older ones are dropped.
    pub const LIMIT: usize = 3;

    /// Show `toast` and return its id for later dismissal.
    pub fn push(&mut self, toast: Toast) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.items.push((id, toast));
        if self.items.len() > Self::LIMIT {
            let overflow = self.items.len() - Self::LIMIT;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|(item_id, _)| *item_id != id);
    }
}

/// Show a toast and dismiss it after a few seconds in the browser.
pub fn notify(queue: RwSignal<ToastQueue>, toast: Toast) {
    let id = queue.try_update(|q| q.push(toast)).unwrap_or_default();
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_secs(4)).await;
        queue.update(|q| q.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
