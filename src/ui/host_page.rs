//! The page regions panels write into, addressed by stable keys.
//!
//! Panels never own UI state themselves; everything visible goes through a
//! [`HostPage`]. Methods take `&self` so several in-flight panel futures can
//! share one host on a single thread.

use serde::{Deserialize, Serialize};

use crate::types::errors::ClientError;
use crate::types::modal::PanelKind;

/// Addressable fields on the host page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKey {
    #[serde(rename = "view-title")]
    ViewTitle,
    #[serde(rename = "view-url")]
    ViewUrl,
    #[serde(rename = "view-short-url")]
    ViewShortUrl,
    #[serde(rename = "view-created")]
    ViewCreated,
    #[serde(rename = "view-tags")]
    ViewTags,
    #[serde(rename = "view-notes")]
    ViewNotes,
    #[serde(rename = "edit-title")]
    EditTitle,
    #[serde(rename = "edit-notes")]
    EditNotes,
    #[serde(rename = "edit-tags")]
    EditTags,
    #[serde(rename = "edit-archived")]
    EditArchived,
    #[serde(rename = "code-image")]
    CodeImage,
    #[serde(rename = "code-title")]
    CodeTitle,
    #[serde(rename = "code-url")]
    CodeUrl,
}

impl FieldKey {
    pub const ALL: [FieldKey; 13] = [
        FieldKey::ViewTitle,
        FieldKey::ViewUrl,
        FieldKey::ViewShortUrl,
        FieldKey::ViewCreated,
        FieldKey::ViewTags,
        FieldKey::ViewNotes,
        FieldKey::EditTitle,
        FieldKey::EditNotes,
        FieldKey::EditTags,
        FieldKey::EditArchived,
        FieldKey::CodeImage,
        FieldKey::CodeTitle,
        FieldKey::CodeUrl,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::ViewTitle => "view-title",
            FieldKey::ViewUrl => "view-url",
            FieldKey::ViewShortUrl => "view-short-url",
            FieldKey::ViewCreated => "view-created",
            FieldKey::ViewTags => "view-tags",
            FieldKey::ViewNotes => "view-notes",
            FieldKey::EditTitle => "edit-title",
            FieldKey::EditNotes => "edit-notes",
            FieldKey::EditTags => "edit-tags",
            FieldKey::EditArchived => "edit-archived",
            FieldKey::CodeImage => "code-image",
            FieldKey::CodeTitle => "code-title",
            FieldKey::CodeUrl => "code-url",
        }
    }

    pub fn from_key(key: &str) -> Option<FieldKey> {
        FieldKey::ALL.into_iter().find(|k| k.as_str() == key)
    }

    /// Whether the field is a user-editable form input.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            FieldKey::EditTitle | FieldKey::EditNotes | FieldKey::EditTags | FieldKey::EditArchived
        )
    }
}

/// A user-visible failure report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: &'static str,
    pub cause: ClientError,
}

impl Notice {
    pub const LOAD_FAILED: &'static str = "Failed to load the bookmark.";
    pub const CODE_FAILED: &'static str = "Failed to load the QR code.";
    pub const UPDATE_FAILED: &'static str = "Failed to update the bookmark.";
    pub const DELETE_FAILED: &'static str = "Failed to delete the bookmark.";
    pub const ARCHIVE_FAILED: &'static str = "Failed to update the archive status.";

    pub fn new(message: &'static str, cause: ClientError) -> Self {
        Self { message, cause }
    }
}

/// Form submission raised by the host page.
///
/// Handlers call [`SubmitEvent::prevent_default`] to keep the host from
/// performing its own navigation.
#[derive(Debug, Default)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

/// Host page surface used by every panel.
pub trait HostPage {
    /// Sets the display text of a field.
    fn set_text(&self, key: FieldKey, text: &str);
    /// Sets a link's display text and target.
    fn set_link(&self, key: FieldKey, text: &str, href: &str);
    /// Replaces a container's contents with one badge per item, in order.
    fn set_badges(&self, key: FieldKey, items: &[String]);
    /// Shows an embeddable image (data URI) in a container.
    fn set_image(&self, key: FieldKey, data_uri: &str);
    /// Writes a form input's value.
    fn set_input(&self, key: FieldKey, value: &str);
    /// Reads a form input's current value; empty when never set.
    fn input(&self, key: FieldKey) -> String;
    fn set_visible(&self, panel: PanelKind, visible: bool);
    fn notify(&self, notice: &Notice);
    /// Asks the host to reload its bookmark list.
    fn request_refresh(&self);
}
