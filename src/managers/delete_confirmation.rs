//! Delete Confirmation.
//!
//! Two-step destructive action: `open` only records the target and shows the
//! prompt, `confirm` sends the delete.

use tracing::{debug, info};

use crate::managers::modal_controller::{ModalController, ModalControllerTrait};
use crate::services::bookmark_client::BookmarkClientTrait;
use crate::types::bookmark::BookmarkId;
use crate::types::errors::ClientError;
use crate::types::modal::{PanelKind, PanelOutcome};
use crate::ui::host_page::{HostPage, Notice};

pub struct DeleteConfirmation<'a, C, H> {
    client: &'a C,
    host: &'a H,
    controller: &'a ModalController,
}

impl<'a, C: BookmarkClientTrait, H: HostPage> DeleteConfirmation<'a, C, H> {
    pub fn new(client: &'a C, host: &'a H, controller: &'a ModalController) -> Self {
        Self {
            client,
            host,
            controller,
        }
    }

    /// Shows the confirmation prompt for `id`. No request is sent.
    pub fn open(&self, id: BookmarkId) {
        let ticket = self.controller.open(self.host, PanelKind::Delete, id);
        self.controller.reveal(self.host, &ticket);
    }

    /// Deletes the recorded target.
    ///
    /// A failure keeps the target and the prompt, so calling `confirm` again
    /// retries the same bookmark.
    pub async fn confirm(&self) -> Result<PanelOutcome, ClientError> {
        let Some(ticket) = self.controller.current_ticket(PanelKind::Delete) else {
            debug!("delete confirm with no target");
            return Ok(PanelOutcome::Idle);
        };

        match self.client.remove(ticket.id).await {
            Ok(()) => {
                info!(id = %ticket.id, "bookmark deleted");
                self.controller.abandon(self.host, &ticket);
                self.host.request_refresh();
                Ok(PanelOutcome::Committed)
            }
            Err(e) => {
                self.host
                    .notify(&Notice::new(Notice::DELETE_FAILED, e.clone()));
                Err(e)
            }
        }
    }

    /// Drops the target and hides the prompt, whatever is in flight.
    pub fn cancel(&self) {
        self.controller.close(self.host, PanelKind::Delete);
    }

    pub fn target(&self) -> Option<BookmarkId> {
        self.controller.target(PanelKind::Delete)
    }
}
