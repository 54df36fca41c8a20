//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        State,
        ws::{Message, WebSocket, WebSocketUpgrade},
    },
    response::IntoResponse,
};
use futures_util::{sink::SinkExt, stream::StreamExt};
use tokio::sync::mpsc;

use crate::{
    domain::PlayerId,
    infrastructure::dto::websocket::{ClientEvent, ClientRequest},
    ui::state::AppState,
};

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

/// Spawns a task that receives messages from the rx channel and pushes them to the WebSocket sender.
///
/// Every message addressed to this player (acks, group broadcasts) goes through
/// this single writer, so they reach the socket in the order they were queued.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<String>,
    mut sender: futures_util::stream::SplitSink<WebSocket, Message>,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(msg) = rx.recv().await {
            if sender.send(Message::Text(msg.into())).await.is_err() {
                break;
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>) {
    let (sender, mut receiver) = socket.split();

    // Create a channel for this player to receive messages
    let (tx, rx) = mpsc::unbounded_channel();

    // Assign an identity and queue the `connected` message
    let player_id = {
        let _guard = state.dispatch_lock.lock().await;
        state.connect_player_usecase.execute(tx).await
    };

    let mut send_task = pusher_loop(rx, sender);

    let state_clone = state.clone();
    let player_id_clone = player_id.clone();

    // Spawn a task to receive requests from this player
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            let msg = match msg {
                Ok(msg) => msg,
                Err(e) => {
                    tracing::error!("WebSocket error: {}", e);
                    break;
                }
            };

            match msg {
                Message::Text(text) => {
                    tracing::debug!("Received text from '{}': {}", player_id_clone, text);
                    dispatch(&state_clone, &player_id_clone, text.as_str()).await;
                }
                Message::Ping(_) => {
                    tracing::debug!("Received ping");
                }
                Message::Close(_) => {
                    tracing::info!("Player '{}' requested close", player_id_clone);
                    break;
                }
                _ => {}
            }
        }
    });

    // If any one of the tasks completes, abort the other
    tokio::select! {
        _ = &mut recv_task => send_task.abort(),
        _ = &mut send_task => recv_task.abort(),
    };

    let _guard = state.dispatch_lock.lock().await;
    state.disconnect_player_usecase.execute(&player_id).await;
}

/// Decode one request frame and run the matching use case.
///
/// Frames that do not decode are logged and ignored.
async fn dispatch(state: &AppState, player_id: &PlayerId, text: &str) {
    let request = match serde_json::from_str::<ClientRequest>(text) {
        Ok(request) => request,
        Err(e) => {
            tracing::warn!("Ignoring undecodable frame from '{}': {}", player_id, e);
            return;
        }
    };
    let event = request.event.name();
    let request_id = request.request_id;

    let _guard = state.dispatch_lock.lock().await;
    let result = match request.event {
        ClientEvent::CreateGroup { group_name } => {
            state
                .create_group_usecase
                .execute(player_id, group_name, request_id)
                .await
        }
        ClientEvent::JoinGroup { group_name } => state
            .join_group_usecase
            .execute(player_id, group_name, request_id)
            .await
            .map(|_| ()),
        ClientEvent::StartGame { group_name } => {
            state
                .start_game_usecase
                .execute(player_id, group_name, request_id)
                .await
        }
        ClientEvent::MarkCell { group_name, number } => state
            .mark_cell_usecase
            .execute(player_id, group_name, number, request_id)
            .await
            .map(|_| ()),
        ClientEvent::ResetGame { group_name } => {
            state
                .reset_game_usecase
                .execute(player_id, group_name, request_id)
                .await
        }
    };

    if let Err(e) = result {
        tracing::info!("'{}' from '{}' rejected: {}", event, player_id, e);
    }
}
