//! LinkVault panel RPC server: JSON-RPC over stdin/stdout for a webview host.
//!
//! Protocol: one JSON object per line (newline-delimited JSON).
//! Request:  {"id":1, "method":"edit.open", "params":{"id":42}}
//! Response: {"id":1, "result":{...}} or {"id":1, "error":"..."}
//! UI events ({"event":"visibility",...}) are interleaved on stdout.
//!
//! Each request runs as its own task on a single-threaded `LocalSet`, so
//! responses can arrive out of request order; callers match them by `id`.

use std::rc::Rc;

use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::LocalSet;
use tracing::info;

use linkvault_panels::app::App;
use linkvault_panels::rpc_handler::handle_line;
use linkvault_panels::services::bookmark_client::BookmarkClient;
use linkvault_panels::services::logging;
use linkvault_panels::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use linkvault_panels::ui::rpc_host::RpcHost;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut engine = SettingsEngine::new(None);
    engine.load()?;
    let settings = engine.effective_settings()?;
    logging::init(&settings.logging.filter);
    info!(config = engine.get_config_path(), "settings loaded");

    let app = Rc::new(App::from_settings(&settings, RpcHost::stdout())?);

    app.host.write_line(&json!({"event":"ready","version":env!("CARGO_PKG_VERSION")}));

    LocalSet::new().run_until(serve(app)).await?;

    // Requests still waiting on the API are dropped with the LocalSet.
    info!("stdin closed, shutting down");
    Ok(())
}

async fn serve(app: Rc<App<BookmarkClient, RpcHost>>) -> std::io::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let app = Rc::clone(&app);
        tokio::task::spawn_local(async move {
            let response = handle_line(&app, &line).await;
            app.host.write_line(&response);
        });
    }
    Ok(())
}
