// LinkVault panel managers
// Managers own panel behaviour: modal state, view, edit, delete confirmation and the code panel.

pub mod code_panel;
pub mod delete_confirmation;
pub mod edit_session;
pub mod modal_controller;
pub mod view_presenter;
