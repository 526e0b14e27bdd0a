//! Modal Controller.
//!
//! Owns the single [`ModalState`] and the per-panel request generations.
//! Only one panel is visible at a time: opening a panel hides whatever was
//! open before. Every open and close bumps the panel's generation, so a load
//! that resolves after its panel moved on is recognised by its stale ticket.

use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, info};

use crate::types::bookmark::BookmarkId;
use crate::types::modal::{LoadTicket, ModalState, PanelKind};
use crate::ui::host_page::HostPage;

/// Trait defining modal state transitions.
pub trait ModalControllerTrait {
    /// Makes `kind` the active panel for `id` and returns the ticket of its load.
    fn open<H: HostPage>(&self, host: &H, kind: PanelKind, id: BookmarkId) -> LoadTicket;
    /// Shows the panel if `ticket` is still the newest one. Returns whether it did.
    fn reveal<H: HostPage>(&self, host: &H, ticket: &LoadTicket) -> bool;
    /// Hides `kind` and resets the state if `kind` is the active panel.
    fn close<H: HostPage>(&self, host: &H, kind: PanelKind);
    /// Closes the panel behind `ticket` unless a newer open replaced it.
    fn abandon<H: HostPage>(&self, host: &H, ticket: &LoadTicket);
    fn state(&self) -> ModalState;
    fn target(&self, kind: PanelKind) -> Option<BookmarkId>;
    fn current_ticket(&self, kind: PanelKind) -> Option<LoadTicket>;
    fn is_current(&self, ticket: &LoadTicket) -> bool;
}

#[derive(Debug, Default)]
struct ControllerState {
    modal: ModalState,
    generations: [u64; 4],
}

impl ControllerState {
    fn ticket(&self, kind: PanelKind) -> Option<LoadTicket> {
        if self.modal.panel() != Some(kind) {
            return None;
        }
        self.modal.target().map(|id| LoadTicket {
            panel: kind,
            id,
            generation: self.generations[kind.index()],
        })
    }

    fn bump(&mut self, kind: PanelKind) -> u64 {
        let slot = &mut self.generations[kind.index()];
        *slot += 1;
        *slot
    }
}

/// The process-wide owner of [`ModalState`].
///
/// The lock is only held for the duration of a transition, never across an
/// await point.
#[derive(Debug, Default)]
pub struct ModalController {
    inner: Mutex<ControllerState>,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, ControllerState> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ModalControllerTrait for ModalController {
    fn open<H: HostPage>(&self, host: &H, kind: PanelKind, id: BookmarkId) -> LoadTicket {
        let (previous, generation) = {
            let mut state = self.lock();
            let previous = state.modal.panel();
            if let Some(prev) = previous {
                if prev != kind {
                    state.bump(prev);
                }
            }
            let generation = state.bump(kind);
            state.modal = ModalState::for_panel(kind, id);
            (previous, generation)
        };

        // Reopening the same panel for another bookmark hides the old content
        // until the new load lands.
        if let Some(prev) = previous {
            host.set_visible(prev, false);
        }

        info!(panel = kind.as_str(), %id, generation, "panel opened");
        LoadTicket {
            panel: kind,
            id,
            generation,
        }
    }

    fn reveal<H: HostPage>(&self, host: &H, ticket: &LoadTicket) -> bool {
        if !self.is_current(ticket) {
            debug!(
                panel = ticket.panel.as_str(),
                id = %ticket.id,
                generation = ticket.generation,
                "discarding stale panel load"
            );
            return false;
        }
        host.set_visible(ticket.panel, true);
        true
    }

    fn close<H: HostPage>(&self, host: &H, kind: PanelKind) {
        {
            let mut state = self.lock();
            if state.modal.panel() != Some(kind) {
                return;
            }
            state.bump(kind);
            state.modal = ModalState::Closed;
        }
        host.set_visible(kind, false);
        info!(panel = kind.as_str(), "panel closed");
    }

    fn abandon<H: HostPage>(&self, host: &H, ticket: &LoadTicket) {
        if self.is_current(ticket) {
            self.close(host, ticket.panel);
        }
    }

    fn state(&self) -> ModalState {
        self.lock().modal
    }

    fn target(&self, kind: PanelKind) -> Option<BookmarkId> {
        let state = self.lock();
        if state.modal.panel() == Some(kind) {
            state.modal.target()
        } else {
            None
        }
    }

    fn current_ticket(&self, kind: PanelKind) -> Option<LoadTicket> {
        self.lock().ticket(kind)
    }

    fn is_current(&self, ticket: &LoadTicket) -> bool {
        self.lock().ticket(ticket.panel).as_ref() == Some(ticket)
    }
}
