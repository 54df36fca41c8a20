//! Test fixtures shared by the integration tests.
//!
//! The server runs in-process on an ephemeral port so that tests can run in
//! parallel without fighting over fixed ports.

#![allow(dead_code)]

use std::time::Duration;

use bingo_server::bootstrap::build_server;
use futures_util::{SinkExt, StreamExt};
use tokio::{net::TcpStream, task::JoinHandle};
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async, tungstenite::Message};

/// How long a client waits for a single message before the test fails.
const RECV_TIMEOUT: Duration = Duration::from_secs(5);

/// Helper struct to manage the server task lifecycle
pub struct TestServer {
    handle: JoinHandle<()>,
    port: u16,
}

impl TestServer {
    /// Start a test server on an ephemeral port
    pub async fn start() -> Self {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let port = listener
            .local_addr()
            .expect("Failed to read local address")
            .port();
        let app = build_server().router();

        let handle = tokio::spawn(async move {
            axum::serve(listener, app)
                .await
                .expect("Test server stopped unexpectedly");
        });

        TestServer { handle, port }
    }

    /// Get the HTTP base URL for this server
    pub fn base_url(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }

    /// Get the WebSocket URL for this server
    pub fn ws_url(&self) -> String {
        format!("ws://127.0.0.1:{}/ws", self.port)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A WebSocket client that speaks the JSON protocol
pub struct TestClient {
    stream: WebSocketStream<MaybeTlsStream<TcpStream>>,
    pub player_id: String,
    pub groups: Vec<String>,
}

impl TestClient {
    /// Connect and consume the `connected` message
    pub async fn connect(server: &TestServer) -> Self {
        let (stream, _) = connect_async(server.ws_url())
            .await
            .expect("Failed to connect");
        let mut client = TestClient {
            stream,
            player_id: String::new(),
            groups: Vec::new(),
        };

        let connected = client.recv().await;
        assert_eq!(connected["type"], "connected");
        client.player_id = connected["player_id"]
            .as_str()
            .expect("player_id should be a string")
            .to_string();
        client.groups = serde_json::from_value(connected["groups"].clone())
            .expect("groups should be a string array");
        client
    }

    /// Send a JSON request
    pub async fn send(&mut self, request: serde_json::Value) {
        self.send_text(request.to_string()).await;
    }

    /// Send a raw text frame
    pub async fn send_text(&mut self, text: String) {
        self.stream
            .send(Message::Text(text.into()))
            .await
            .expect("Failed to send frame");
    }

    /// Receive the next JSON message
    pub async fn recv(&mut self) -> serde_json::Value {
        loop {
            let frame = tokio::time::timeout(RECV_TIMEOUT, self.stream.next())
                .await
                .expect("Timed out waiting for a message")
                .expect("Connection closed")
                .expect("WebSocket error");
            if let Message::Text(text) = frame {
                return serde_json::from_str(text.as_str()).expect("Server sent invalid JSON");
            }
        }
    }

    /// Receive messages until one of the given type arrives
    pub async fn recv_type(&mut self, message_type: &str) -> serde_json::Value {
        loop {
            let message = self.recv().await;
            if message["type"] == message_type {
                return message;
            }
        }
    }

    /// Receive messages until the ack for `event` arrives
    pub async fn recv_ack(&mut self, event: &str) -> serde_json::Value {
        loop {
            let message = self.recv_type("ack").await;
            if message["event"] == event {
                return message;
            }
        }
    }

    /// Close the connection
    pub async fn close(mut self) {
        let _ = self.stream.close(None).await;
    }
}
