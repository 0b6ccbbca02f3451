//! Admin panel chrome state (tabs, view mode, dialogs, search fields).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of domain state (`admin`) so the
//! stores never see which tab is open or what is typed in a search box.
//! Nothing here is persisted; a reload starts from `AdminUi::default()`.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use content::posts::{CategoryFilter, PostFilter, PostSort};

pub const DEFAULT_PROFILE_PICTURE: &str = "https://i.postimg.cc/V65vmM15/20250117-153417.jpg";

/// Sidebar tabs of the admin panel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AdminTab {
    #[default]
    Dashboard,
    Posts,
    Messages,
    Payments,
    Settings,
}

impl AdminTab {
    pub const ALL: [Self; 5] = [Self::Dashboard, Self::Posts, Self::Messages, Self::Payments, Self::Settings];

    /// Value used by the mobile tab `<select>`.
    pub fn id(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Posts => "posts",
            Self::Messages => "messages",
            Self::Payments => "payments",
            Self::Settings => "settings",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Posts => "Posts",
            Self::Messages => "Messages",
            Self::Payments => "Payments",
            Self::Settings => "Settings",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// Layout of the post list.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ViewMode {
    #[default]
    Grid,
    List,
}

/// UI state for the admin panel.
///
/// Provided as `RwSignal<AdminUi>` by the admin page.
#[derive(Clone, Debug, Default)]
pub struct AdminUi {
    pub active_tab: AdminTab,
    pub view_mode: ViewMode,
    /// Header search applied to whichever tab is active.
    pub global_search: String,
    /// Search field local to the posts tab.
    pub post_search: String,
    pub category: CategoryFilter,
    pub sort: PostSort,
    pub show_create_post: bool,
    pub show_payment_setup: bool,
    /// Post currently open in the inline editor.
    pub editing_post: Option<i64>,
    /// Post awaiting delete confirmation.
    pub pending_delete: Option<i64>,
    /// Post shown in the read-only detail dialog.
    pub viewing_post: Option<i64>,
    /// Post open in the full-screen code editor.
    pub code_editor_post: Option<i64>,
    /// Code editor shows the live preview pane next to the form.
    pub code_preview: bool,
    /// Uploaded profile picture; `None` shows [`DEFAULT_PROFILE_PICTURE`].
    pub profile_picture: Option<String>,
}

impl AdminUi {
    /// Search text for the active tab: the global search wins whenever it is
    /// non-empty; otherwise the posts tab falls back to its own field.
    pub fn effective_search(&self) -> &str {
        let global = self.global_search.trim();
        if !global.is_empty() {
            return global;
        }
        match self.active_tab {
            AdminTab::Posts => self.post_search.trim(),
            _ => "",
        }
    }

    pub fn post_filter(&self) -> PostFilter {
        PostFilter { search: self.effective_search().to_owned(), category: self.category }
    }

    /// Whether any narrowing is in effect on the posts tab.
    pub fn is_filtering_posts(&self) -> bool {
        !self.effective_search().is_empty() || self.category != CategoryFilter::All
    }

    pub fn profile_picture(&self) -> &str {
        self.profile_picture.as_deref().unwrap_or(DEFAULT_PROFILE_PICTURE)
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.active_tab = tab;
        self.editing_post = None;
    }

    /// Open the code editor on `id`, starting in edit-only mode.
    pub fn open_code_editor(&mut self, id: i64) {
        self.code_editor_post = Some(id);
        self.code_preview = false;
    }

    /// Flip the preview pane. Ignored while the editor is closed.
    pub fn toggle_code_preview(&mut self) {
        if self.code_editor_post.is_some() {
            self.code_preview = !self.code_preview;
        }
    }

    pub fn close_code_editor(&mut self) {
        self.code_editor_post = None;
        self.code_preview = false;
    }

    /// Caption of the preview toggle: names the mode it switches to.
    pub fn code_preview_label(&self) -> &'static str {
        if self.code_preview { "Edit" } else { "Preview" }
    }

    /// Close every dialog and both editors.
    pub fn close_dialogs(&mut self) {
        self.show_create_post = false;
        self.show_payment_setup = false;
        self.editing_post = None;
        self.pending_delete = None;
        self.viewing_post = None;
        self.close_code_editor();
    }
}
