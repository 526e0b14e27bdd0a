//! LinkVault panels: view, edit, delete and share bookmarks held by a LinkVault server.
//!
//! This library crate exposes all modules for use by the RPC binary and integration tests.

pub mod app;
pub mod managers;
pub mod rpc_handler;
pub mod services;
pub mod types;
pub mod ui;
