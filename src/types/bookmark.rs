use std::fmt;

use serde::{Deserialize, Serialize};

/// Server-assigned bookmark identifier.
///
/// Opaque to the client; it is only echoed back in request paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookmarkId(pub i64);

impl fmt::Display for BookmarkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for BookmarkId {
    fn from(id: i64) -> Self {
        BookmarkId(id)
    }
}

/// Read copy of a bookmark as returned by `GET /api/bookmarks/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bookmark {
    pub id: BookmarkId,
    #[serde(default)]
    pub title: Option<String>,
    pub url: String,
    #[serde(default)]
    pub full_short_url: String,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub archived: bool,
}

impl Bookmark {
    /// Title, or an empty string when the server has none.
    pub fn title_or_empty(&self) -> &str {
        self.title.as_deref().unwrap_or("")
    }

    /// Notes, or an empty string when the server has none.
    pub fn notes_or_empty(&self) -> &str {
        self.notes.as_deref().unwrap_or("")
    }
}

/// Body of a fetch-one response.
///
/// The page script reads `{"bookmark": {...}}` while the server route answers
/// with the bare object, so both shapes are accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum BookmarkPayload {
    Wrapped { bookmark: Bookmark },
    Bare(Bookmark),
}

impl BookmarkPayload {
    pub fn into_bookmark(self) -> Bookmark {
        match self {
            BookmarkPayload::Wrapped { bookmark } => bookmark,
            BookmarkPayload::Bare(bookmark) => bookmark,
        }
    }
}

/// Edited field set sent with `PUT /api/bookmarks/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EditDraft {
    pub title: String,
    pub notes: String,
    pub archived: bool,
    pub tags: Vec<String>,
}

/// Scannable-code image for a bookmark's short link.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeImage {
    #[serde(rename = "qr_data_uri")]
    pub image_data_uri: String,
    #[serde(rename = "qr_title", default)]
    pub title: Option<String>,
    #[serde(rename = "qr_url", default)]
    pub url: String,
}

/// Response of `PATCH /api/bookmarks/{id}/archive`.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ArchiveStatus {
    pub archived: bool,
}
