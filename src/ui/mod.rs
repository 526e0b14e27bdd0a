//! LinkVault UI layer.
//!
//! Panels write to the page through the [`host_page::HostPage`] trait. The
//! RPC binary implements it with [`rpc_host::RpcHost`], which streams UI
//! events as JSON lines to an embedding webview.

pub mod host_page;
pub mod rpc_host;
