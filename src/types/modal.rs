use serde::{Deserialize, Serialize};

use super::bookmark::BookmarkId;

/// The overlay panels the controller can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelKind {
    View,
    Edit,
    Delete,
    Code,
}

impl PanelKind {
    pub const ALL: [PanelKind; 4] = [
        PanelKind::View,
        PanelKind::Edit,
        PanelKind::Delete,
        PanelKind::Code,
    ];

    /// Stable key of the panel region on the host page.
    pub fn as_str(&self) -> &'static str {
        match self {
            PanelKind::View => "view",
            PanelKind::Edit => "edit",
            PanelKind::Delete => "delete",
            PanelKind::Code => "code",
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PanelKind::View => 0,
            PanelKind::Edit => 1,
            PanelKind::Delete => 2,
            PanelKind::Code => 3,
        }
    }
}

/// Which panel is open, and for which bookmark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", content = "id", rename_all = "snake_case")]
pub enum ModalState {
    #[default]
    Closed,
    Viewing(BookmarkId),
    Editing(BookmarkId),
    ConfirmingDelete(BookmarkId),
    ShowingCode(BookmarkId),
}

impl ModalState {
    pub fn for_panel(kind: PanelKind, id: BookmarkId) -> Self {
        match kind {
            PanelKind::View => ModalState::Viewing(id),
            PanelKind::Edit => ModalState::Editing(id),
            PanelKind::Delete => ModalState::ConfirmingDelete(id),
            PanelKind::Code => ModalState::ShowingCode(id),
        }
    }

    pub fn panel(&self) -> Option<PanelKind> {
        match self {
            ModalState::Closed => None,
            ModalState::Viewing(_) => Some(PanelKind::View),
            ModalState::Editing(_) => Some(PanelKind::Edit),
            ModalState::ConfirmingDelete(_) => Some(PanelKind::Delete),
            ModalState::ShowingCode(_) => Some(PanelKind::Code),
        }
    }

    pub fn target(&self) -> Option<BookmarkId> {
        match self {
            ModalState::Closed => None,
            ModalState::Viewing(id)
            | ModalState::Editing(id)
            | ModalState::ConfirmingDelete(id)
            | ModalState::ShowingCode(id) => Some(*id),
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, ModalState::Closed)
    }
}

/// Handed out by every panel open; identifies the newest load for a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadTicket {
    pub panel: PanelKind,
    pub id: BookmarkId,
    pub generation: u64,
}

/// How a panel operation ended, when it did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelOutcome {
    /// The panel was populated and made visible.
    Shown,
    /// A commit (update/delete) went through.
    Committed,
    /// The response arrived after the panel moved on and was dropped.
    Stale,
    /// Nothing was pending, so nothing was sent.
    Idle,
}
