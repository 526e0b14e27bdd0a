//! Code Panel: shows the scannable code generated for a bookmark's short link.

use tracing::debug;

use crate::managers::modal_controller::{ModalController, ModalControllerTrait};
use crate::services::bookmark_client::BookmarkClientTrait;
use crate::types::bookmark::{BookmarkId, CodeImage};
use crate::types::errors::ClientError;
use crate::types::modal::{PanelKind, PanelOutcome};
use crate::ui::host_page::{FieldKey, HostPage, Notice};

pub struct CodePanel<'a, C, H> {
    client: &'a C,
    host: &'a H,
    controller: &'a ModalController,
}

impl<'a, C: BookmarkClientTrait, H: HostPage> CodePanel<'a, C, H> {
    pub fn new(client: &'a C, host: &'a H, controller: &'a ModalController) -> Self {
        Self {
            client,
            host,
            controller,
        }
    }

    pub async fn open(&self, id: BookmarkId) -> Result<PanelOutcome, ClientError> {
        let ticket = self.controller.open(self.host, PanelKind::Code, id);
        let result = self.client.fetch_code_image(id).await;

        if !self.controller.is_current(&ticket) {
            debug!(%id, "code load superseded");
            return Ok(PanelOutcome::Stale);
        }

        match result {
            Ok(image) => {
                self.render(&image);
                self.controller.reveal(self.host, &ticket);
                Ok(PanelOutcome::Shown)
            }
            Err(e) => {
                self.controller.abandon(self.host, &ticket);
                self.host.notify(&Notice::new(Notice::CODE_FAILED, e.clone()));
                Err(e)
            }
        }
    }

    pub fn render(&self, image: &CodeImage) {
        self.host
            .set_image(FieldKey::CodeImage, &image.image_data_uri);
        self.host
            .set_text(FieldKey::CodeTitle, image.title.as_deref().unwrap_or(""));
        self.host.set_text(FieldKey::CodeUrl, &image.url);
    }

    pub fn close(&self) {
        self.controller.close(self.host, PanelKind::Code);
    }
}
