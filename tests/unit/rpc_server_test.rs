//! End-to-end tests of the RPC binary over its stdin/stdout pipes.
//!
//! The API base URL points at a listener that accepts connections and never
//! answers, so every bookmark request stays in flight for the whole test.

use std::process::Stdio;
use std::time::Duration;

use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Lines};
use tokio::net::TcpListener;
use tokio::process::{Child, ChildStdin, ChildStdout, Command};
use tokio::time::timeout;

const WAIT: Duration = Duration::from_secs(10);

/// Accepts connections and holds them open without replying.
async fn silent_api() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let base_url = format!("http://{}", listener.local_addr().unwrap());
    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((stream, _)) = listener.accept().await {
            held.push(stream);
        }
    });
    base_url
}

struct RpcProcess {
    _child: Child,
    _config_dir: TempDir,
    stdin: ChildStdin,
    stdout: Lines<BufReader<ChildStdout>>,
    unclaimed: Vec<Value>,
}

impl RpcProcess {
    fn spawn(base_url: &str) -> Self {
        let config_dir = TempDir::new().unwrap();
        let mut child = Command::new(env!("CARGO_BIN_EXE_linkvault-panels-rpc"))
            .env("LINKVAULT_CONFIG", config_dir.path().join("linkvault.json"))
            .env("LINKVAULT_BASE_URL", base_url)
            .env("RUST_LOG", "off")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .unwrap();
        let stdin = child.stdin.take().unwrap();
        let stdout = BufReader::new(child.stdout.take().unwrap()).lines();

        Self {
            _child: child,
            _config_dir: config_dir,
            stdin,
            stdout,
            unclaimed: Vec::new(),
        }
    }

    async fn send_raw(&mut self, line: &str) {
        self.stdin.write_all(line.as_bytes()).await.unwrap();
        self.stdin.write_all(b"\n").await.unwrap();
        self.stdin.flush().await.unwrap();
    }

    async fn send(&mut self, id: u64, method: &str, params: Value) {
        let line = json!({"id": id, "method": method, "params": params}).to_string();
        self.send_raw(&line).await;
    }

    /// Next output line matching `pred`; other lines are kept for later calls.
    async fn wait_for(&mut self, what: &str, pred: impl Fn(&Value) -> bool) -> Value {
        if let Some(pos) = self.unclaimed.iter().position(&pred) {
            return self.unclaimed.remove(pos);
        }
        let read = async {
            loop {
                let line = self
                    .stdout
                    .next_line()
                    .await
                    .unwrap()
                    .expect("rpc process closed stdout");
                let value: Value = serde_json::from_str(&line).unwrap();
                if pred(&value) {
                    return value;
                }
                self.unclaimed.push(value);
            }
        };
        match timeout(WAIT, read).await {
            Ok(value) => value,
            Err(_) => panic!("no {} within {:?}", what, WAIT),
        }
    }

    async fn response(&mut self, id: u64) -> Value {
        self.wait_for(&format!("response to request {}", id), |v| {
            v.get("id") == Some(&json!(id))
        })
        .await
    }

    async fn ready(&mut self) {
        self.wait_for("ready event", |v| v["event"] == "ready").await;
    }
}

#[tokio::test]
async fn test_cancel_answers_while_delete_is_in_flight() {
    let base_url = silent_api().await;
    let mut rpc = RpcProcess::spawn(&base_url);
    rpc.ready().await;

    rpc.send(1, "delete.open", json!({"id": 7})).await;
    assert_eq!(rpc.response(1).await["result"], json!({"ok": true}));

    rpc.send(2, "delete.confirm", json!({})).await;
    rpc.send(3, "delete.cancel", json!({})).await;
    assert_eq!(rpc.response(3).await["result"], json!({"ok": true}));

    rpc.send(4, "modal.state", json!({})).await;
    assert_eq!(rpc.response(4).await["result"], json!({"state": "closed"}));

    let hidden = rpc
        .wait_for("delete panel hidden", |v| {
            v["event"] == "visibility" && v["panel"] == "delete" && v["visible"] == false
        })
        .await;
    assert_eq!(hidden["visible"], json!(false));
}

#[tokio::test]
async fn test_requests_keep_flowing_past_a_pending_load() {
    let base_url = silent_api().await;
    let mut rpc = RpcProcess::spawn(&base_url);
    rpc.ready().await;

    rpc.send(1, "view.open", json!({"id": 42})).await;

    rpc.send(2, "ping", json!({})).await;
    assert_eq!(rpc.response(2).await["result"], json!({"pong": true}));

    rpc.send(3, "modal.state", json!({})).await;
    assert_eq!(
        rpc.response(3).await["result"],
        json!({"state": "viewing", "id": 42})
    );

    // A second panel opens before the first load has finished
    rpc.send(4, "delete.open", json!({"id": 42})).await;
    assert_eq!(rpc.response(4).await["result"], json!({"ok": true}));

    rpc.send(5, "modal.state", json!({})).await;
    assert_eq!(
        rpc.response(5).await["result"],
        json!({"state": "confirming_delete", "id": 42})
    );
}

#[tokio::test]
async fn test_unparseable_line_gets_error_response() {
    let base_url = silent_api().await;
    let mut rpc = RpcProcess::spawn(&base_url);
    rpc.ready().await;

    rpc.send_raw("{not json").await;
    let reply = rpc
        .wait_for("parse error response", |v| v.get("error").is_some())
        .await;

    assert_eq!(reply["id"], Value::Null);
    assert!(reply["error"]
        .as_str()
        .is_some_and(|e| e.starts_with("parse error")));

    rpc.send(1, "ping", json!({})).await;
    assert_eq!(rpc.response(1).await["result"], json!({"pong": true}));
}
