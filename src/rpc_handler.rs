//! RPC method handler for the LinkVault panel protocol.
//!
//! Kept apart from `rpc_server.rs` so it can be unit-tested independently.
//! `handle_method` dispatches one JSON-RPC call to the panel components of an
//! [`App`]. Panel failures are also reported to the host as notices; the
//! error string returned here is for the caller's bookkeeping.

use serde_json::{json, Value};
use tracing::debug;

use crate::app::App;
use crate::services::bookmark_client::BookmarkClientTrait;
use crate::types::bookmark::BookmarkId;
use crate::types::modal::PanelOutcome;
use crate::ui::host_page::{FieldKey, HostPage, SubmitEvent};

fn bookmark_id(params: &Value) -> Result<BookmarkId, String> {
    params
        .get("id")
        .and_then(Value::as_i64)
        .map(BookmarkId)
        .ok_or_else(|| "missing id".to_string())
}

fn outcome(result: Result<PanelOutcome, impl ToString>) -> Result<Value, String> {
    let outcome = result.map_err(|e| e.to_string())?;
    let name = match outcome {
        PanelOutcome::Shown => "shown",
        PanelOutcome::Committed => "committed",
        PanelOutcome::Stale => "stale",
        PanelOutcome::Idle => "idle",
    };
    Ok(json!({ "outcome": name }))
}

/// Copies `{"edit-title": "...", ...}` into the host's form inputs.
///
/// Every entry is checked before any input is written, so a rejected call
/// leaves the form as it was.
fn apply_fields<H: HostPage>(host: &H, fields: &Value) -> Result<(), String> {
    let Some(map) = fields.as_object() else {
        return Err("fields must be an object".to_string());
    };
    let mut updates = Vec::with_capacity(map.len());
    for (key, value) in map {
        let field = FieldKey::from_key(key)
            .filter(FieldKey::is_input)
            .ok_or_else(|| format!("unknown input field: {}", key))?;
        let value = match value {
            Value::String(s) => s.clone(),
            Value::Bool(b) => b.to_string(),
            other => return Err(format!("invalid value for {}: {}", key, other)),
        };
        updates.push((field, value));
    }
    for (field, value) in updates {
        host.set_input(field, &value);
    }
    Ok(())
}

/// Handles one protocol line and builds the response object for it.
///
/// Unparseable lines get `{"id": null, "error": "parse error: ..."}`.
pub async fn handle_line<C, H>(app: &App<C, H>, line: &str) -> Value
where
    C: BookmarkClientTrait,
    H: HostPage,
{
    let req: Value = match serde_json::from_str(line) {
        Ok(v) => v,
        Err(e) => return json!({"id": null, "error": format!("parse error: {}", e)}),
    };

    let id = req.get("id").cloned().unwrap_or(Value::Null);
    let method = req.get("method").and_then(|v| v.as_str()).unwrap_or("");
    let params = req.get("params").cloned().unwrap_or(json!({}));
    debug!(method, "rpc request");

    match handle_method(app, method, &params).await {
        Ok(val) => json!({"id": id, "result": val}),
        Err(err) => json!({"id": id, "error": err}),
    }
}

/// Dispatch a JSON-RPC method call to the appropriate panel.
///
/// Returns `Ok(Value)` on success or `Err(String)` with an error message.
pub async fn handle_method<C, H>(app: &App<C, H>, method: &str, params: &Value) -> Result<Value, String>
where
    C: BookmarkClientTrait,
    H: HostPage,
{
    match method {
        "ping" => Ok(json!({"pong": true})),
        "modal.state" => serde_json::to_value(app.state()).map_err(|e| e.to_string()),

        // ─── View ───
        "view.open" => {
            let id = bookmark_id(params)?;
            outcome(app.view_presenter().open(id).await)
        }
        "view.close" => {
            app.view_presenter().close();
            Ok(json!({"ok": true}))
        }

        // ─── Edit ───
        "edit.open" => {
            let id = bookmark_id(params)?;
            outcome(app.edit_session().open(id).await)
        }
        "edit.field" => {
            let key = params.get("key").and_then(|v| v.as_str()).ok_or("missing key")?;
            let value = params.get("value").cloned().ok_or("missing value")?;
            let mut fields = serde_json::Map::new();
            fields.insert(key.to_string(), value);
            apply_fields(&app.host, &Value::Object(fields))?;
            Ok(json!({"ok": true}))
        }
        "edit.submit" => {
            if let Some(fields) = params.get("fields") {
                apply_fields(&app.host, fields)?;
            }
            let mut event = SubmitEvent::new();
            outcome(app.edit_session().submit(&mut event).await)
        }
        "edit.close" => {
            app.edit_session().close();
            Ok(json!({"ok": true}))
        }

        // ─── Delete ───
        "delete.open" => {
            let id = bookmark_id(params)?;
            app.delete_confirmation().open(id);
            Ok(json!({"ok": true}))
        }
        "delete.confirm" => outcome(app.delete_confirmation().confirm().await),
        "delete.cancel" => {
            app.delete_confirmation().cancel();
            Ok(json!({"ok": true}))
        }

        // ─── Code ───
        "code.open" => {
            let id = bookmark_id(params)?;
            outcome(app.code_panel().open(id).await)
        }
        "code.close" => {
            app.code_panel().close();
            Ok(json!({"ok": true}))
        }

        // ─── List actions ───
        "bookmark.toggle_archive" => {
            let id = bookmark_id(params)?;
            let archived = app.toggle_archive(id).await.map_err(|e| e.to_string())?;
            Ok(json!({"id": id, "archived": archived}))
        }

        _ => Err(format!("unknown method: {}", method)),
    }
}
