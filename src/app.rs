//! App Core for LinkVault panels.
//!
//! Holds the API client, the host page and the modal controller. Panel
//! components borrow all three and are created on demand.

use tracing::info;

use crate::managers::code_panel::CodePanel;
use crate::managers::delete_confirmation::DeleteConfirmation;
use crate::managers::edit_session::EditSession;
use crate::managers::modal_controller::{ModalController, ModalControllerTrait};
use crate::managers::view_presenter::ViewPresenter;
use crate::services::bookmark_client::{BookmarkClient, BookmarkClientTrait};
use crate::types::bookmark::BookmarkId;
use crate::types::errors::ClientError;
use crate::types::modal::ModalState;
use crate::types::settings::ClientSettings;
use crate::ui::host_page::{HostPage, Notice};

/// Central struct wiring the client, host page and modal state together.
///
/// Panel components borrow from the App with a lifetime, so they are not
/// stored here. Use e.g. `app.edit_session().open(id)`.
pub struct App<C, H> {
    pub client: C,
    pub host: H,
    pub controller: ModalController,
}

impl<H: HostPage> App<BookmarkClient, H> {
    /// Creates an App talking HTTP to the configured API.
    pub fn from_settings(settings: &ClientSettings, host: H) -> Result<Self, ClientError> {
        let client = BookmarkClient::new(&settings.api.base_url)?;
        info!(base_url = client.base_url(), "bookmark client ready");
        Ok(Self::new(client, host))
    }
}

impl<C: BookmarkClientTrait, H: HostPage> App<C, H> {
    pub fn new(client: C, host: H) -> Self {
        Self {
            client,
            host,
            controller: ModalController::new(),
        }
    }

    pub fn view_presenter(&self) -> ViewPresenter<'_, C, H> {
        ViewPresenter::new(&self.client, &self.host, &self.controller)
    }

    pub fn edit_session(&self) -> EditSession<'_, C, H> {
        EditSession::new(&self.client, &self.host, &self.controller)
    }

    pub fn delete_confirmation(&self) -> DeleteConfirmation<'_, C, H> {
        DeleteConfirmation::new(&self.client, &self.host, &self.controller)
    }

    pub fn code_panel(&self) -> CodePanel<'_, C, H> {
        CodePanel::new(&self.client, &self.host, &self.controller)
    }

    pub fn state(&self) -> ModalState {
        self.controller.state()
    }

    /// Flips a bookmark's archived flag from the list view.
    ///
    /// Leaves the modal state alone; success asks the host to refresh.
    pub async fn toggle_archive(&self, id: BookmarkId) -> Result<bool, ClientError> {
        match self.client.toggle_archive(id).await {
            Ok(archived) => {
                info!(%id, archived, "archive status toggled");
                self.host.request_refresh();
                Ok(archived)
            }
            Err(e) => {
                self.host
                    .notify(&Notice::new(Notice::ARCHIVE_FAILED, e.clone()));
                Err(e)
            }
        }
    }
}
