//! View Presenter.
//!
//! Fetches a bookmark and renders its fields into the view panel. The panel
//! is revealed only once every field has been written.

use tracing::debug;

use crate::managers::modal_controller::{ModalController, ModalControllerTrait};
use crate::services::bookmark_client::BookmarkClientTrait;
use crate::types::bookmark::{Bookmark, BookmarkId};
use crate::types::errors::ClientError;
use crate::types::modal::{PanelKind, PanelOutcome};
use crate::ui::host_page::{FieldKey, HostPage, Notice};

/// Shown in place of empty or missing notes.
pub const NOTES_PLACEHOLDER: &str = "No notes available.";

/// Read-only bookmark panel.
pub struct ViewPresenter<'a, C, H> {
    client: &'a C,
    host: &'a H,
    controller: &'a ModalController,
}

impl<'a, C: BookmarkClientTrait, H: HostPage> ViewPresenter<'a, C, H> {
    pub fn new(client: &'a C, host: &'a H, controller: &'a ModalController) -> Self {
        Self {
            client,
            host,
            controller,
        }
    }

    /// Opens the view panel for `id`.
    ///
    /// A failed load leaves the panel hidden, closes the modal state and
    /// reports a notice.
    pub async fn open(&self, id: BookmarkId) -> Result<PanelOutcome, ClientError> {
        let ticket = self.controller.open(self.host, PanelKind::View, id);
        let result = self.client.fetch_one(id).await;

        if !self.controller.is_current(&ticket) {
            debug!(%id, "view load superseded");
            return Ok(PanelOutcome::Stale);
        }

        match result {
            Ok(bookmark) => {
                self.render(&bookmark);
                self.controller.reveal(self.host, &ticket);
                Ok(PanelOutcome::Shown)
            }
            Err(e) => {
                self.controller.abandon(self.host, &ticket);
                self.host.notify(&Notice::new(Notice::LOAD_FAILED, e.clone()));
                Err(e)
            }
        }
    }

    pub fn render(&self, bookmark: &Bookmark) {
        self.host.set_text(FieldKey::ViewTitle, bookmark.title_or_empty());
        self.host
            .set_link(FieldKey::ViewUrl, &bookmark.url, &bookmark.url);
        self.host.set_link(
            FieldKey::ViewShortUrl,
            &bookmark.full_short_url,
            &bookmark.full_short_url,
        );
        self.host
            .set_text(FieldKey::ViewCreated, &bookmark.created_at);
        self.host.set_badges(FieldKey::ViewTags, &bookmark.tags);

        let notes = match bookmark.notes_or_empty() {
            "" => NOTES_PLACEHOLDER,
            notes => notes,
        };
        self.host.set_text(FieldKey::ViewNotes, notes);
    }

    pub fn close(&self) {
        self.controller.close(self.host, PanelKind::View);
    }
}
