//! Edit Session.
//!
//! Loads a bookmark into the edit form and commits the edited fields back as
//! an [`EditDraft`]. The bookmark being edited is the target of
//! `ModalState::Editing`; the session keeps no id of its own.

use tracing::{debug, info};

use crate::managers::modal_controller::{ModalController, ModalControllerTrait};
use crate::services::bookmark_client::BookmarkClientTrait;
use crate::services::tag_codec;
use crate::types::bookmark::{Bookmark, BookmarkId, EditDraft};
use crate::types::errors::ClientError;
use crate::types::modal::{PanelKind, PanelOutcome};
use crate::ui::host_page::{FieldKey, HostPage, Notice, SubmitEvent};

const ARCHIVED_TRUE: &str = "true";
const ARCHIVED_FALSE: &str = "false";

/// Edit form bound to the host page's edit panel.
pub struct EditSession<'a, C, H> {
    client: &'a C,
    host: &'a H,
    controller: &'a ModalController,
}

impl<'a, C: BookmarkClientTrait, H: HostPage> EditSession<'a, C, H> {
    pub fn new(client: &'a C, host: &'a H, controller: &'a ModalController) -> Self {
        Self {
            client,
            host,
            controller,
        }
    }

    pub async fn open(&self, id: BookmarkId) -> Result<PanelOutcome, ClientError> {
        let ticket = self.controller.open(self.host, PanelKind::Edit, id);
        let result = self.client.fetch_one(id).await;

        if !self.controller.is_current(&ticket) {
            debug!(%id, "edit load superseded");
            return Ok(PanelOutcome::Stale);
        }

        match result {
            Ok(bookmark) => {
                self.populate(&bookmark);
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

    /// Writes the bookmark's editable fields into the form.
    pub fn populate(&self, bookmark: &Bookmark) {
        self.host
            .set_input(FieldKey::EditTitle, bookmark.title_or_empty());
        self.host
            .set_input(FieldKey::EditNotes, bookmark.notes_or_empty());
        self.host
            .set_input(FieldKey::EditTags, &tag_codec::encode(&bookmark.tags));
        let archived = if bookmark.archived {
            ARCHIVED_TRUE
        } else {
            ARCHIVED_FALSE
        };
        self.host.set_input(FieldKey::EditArchived, archived);
    }

    /// Builds a draft from the current form fields.
    pub fn draft(&self) -> EditDraft {
        EditDraft {
            title: self.host.input(FieldKey::EditTitle),
            notes: self.host.input(FieldKey::EditNotes),
            archived: self.host.input(FieldKey::EditArchived) == ARCHIVED_TRUE,
            tags: tag_codec::decode(&self.host.input(FieldKey::EditTags)),
        }
    }

    /// Commits the form.
    ///
    /// On success the panel closes and the host is asked to refresh its list.
    /// On failure a notice is shown and the panel stays open with the form
    /// untouched, so the user can retry.
    pub async fn submit(&self, event: &mut SubmitEvent) -> Result<PanelOutcome, ClientError> {
        event.prevent_default();

        let Some(ticket) = self.controller.current_ticket(PanelKind::Edit) else {
            debug!("edit submit with no bookmark open");
            return Ok(PanelOutcome::Idle);
        };

        let draft = self.draft();
        match self.client.update(ticket.id, &draft).await {
            Ok(()) => {
                info!(id = %ticket.id, "bookmark updated");
                self.controller.abandon(self.host, &ticket);
                self.host.request_refresh();
                Ok(PanelOutcome::Committed)
            }
            Err(e) => {
                self.host
                    .notify(&Notice::new(Notice::UPDATE_FAILED, e.clone()));
                Err(e)
            }
        }
    }

    pub fn close(&self) {
        self.controller.close(self.host, PanelKind::Edit);
    }
}
