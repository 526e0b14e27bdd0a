//! Host page driven over newline-delimited JSON.
//!
//! Every UI change is emitted as one event line, e.g.
//! `{"event":"visibility","panel":"edit","visible":true}`. Form input values
//! are mirrored locally so submits can read them back.

use std::collections::HashMap;
use std::io::Write;
use std::sync::{Mutex, PoisonError};

use serde_json::{json, Value};
use tracing::warn;

use crate::types::modal::PanelKind;
use crate::ui::host_page::{FieldKey, HostPage, Notice};

pub struct RpcHost {
    out: Mutex<Box<dyn Write + Send>>,
    inputs: Mutex<HashMap<FieldKey, String>>,
}

impl RpcHost {
    pub fn new<W: Write + Send + 'static>(out: W) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            inputs: Mutex::new(HashMap::new()),
        }
    }

    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }

    /// Writes one JSON line. Shared by events and RPC responses so lines
    /// never interleave.
    pub fn write_line(&self, value: &Value) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        let result = writeln!(out, "{}", value).and_then(|_| out.flush());
        if let Err(e) = result {
            warn!(error = %e, "failed to write to host");
        }
    }

    fn emit(&self, event: Value) {
        self.write_line(&event);
    }
}

impl HostPage for RpcHost {
    fn set_text(&self, key: FieldKey, text: &str) {
        self.emit(json!({"event": "text", "key": key, "text": text}));
    }

    fn set_link(&self, key: FieldKey, text: &str, href: &str) {
        self.emit(json!({"event": "link", "key": key, "text": text, "href": href}));
    }

    fn set_badges(&self, key: FieldKey, items: &[String]) {
        self.emit(json!({"event": "badges", "key": key, "items": items}));
    }

    fn set_image(&self, key: FieldKey, data_uri: &str) {
        self.emit(json!({"event": "image", "key": key, "src": data_uri}));
    }

    fn set_input(&self, key: FieldKey, value: &str) {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, value.to_string());
        self.emit(json!({"event": "input", "key": key, "value": value}));
    }

    fn input(&self, key: FieldKey) -> String {
        self.inputs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&key)
            .cloned()
            .unwrap_or_default()
    }

    fn set_visible(&self, panel: PanelKind, visible: bool) {
        self.emit(json!({"event": "visibility", "panel": panel, "visible": visible}));
    }

    fn notify(&self, notice: &Notice) {
        self.emit(json!({
            "event": "notice",
            "message": notice.message,
            "detail": notice.cause.to_string(),
        }));
    }

    fn request_refresh(&self) {
        self.emit(json!({"event": "refresh"}));
    }
}
