//! UseCase 共通: 通知メッセージの送信
//!
//! DTO を JSON にシリアライズして `MessagePusher` に渡します。
//! 通知の失敗はイベント処理を失敗させず、ログに残すだけです。

use std::sync::Arc;

use serde::Serialize;

use crate::{
    domain::{GroupName, MessagePusher, PlayerId},
    infrastructure::dto::websocket::UpdateGroupsMessage,
};

/// MessagePusher の薄いラッパー
#[derive(Clone)]
pub struct Notifier {
    message_pusher: Arc<dyn MessagePusher>,
}

impl Notifier {
    pub fn new(message_pusher: Arc<dyn MessagePusher>) -> Self {
        Self { message_pusher }
    }

    /// 1 人のプレイヤーに送信
    pub async fn push_to<T: Serialize + ?Sized>(&self, player: &PlayerId, message: &T) {
        let Some(json) = encode(message) else {
            return;
        };
        if let Err(e) = self.message_pusher.push_to(player, &json).await {
            tracing::warn!("Failed to push message to player '{}': {}", player, e);
        }
    }

    /// グループのメンバーに送信
    pub async fn broadcast<T: Serialize + ?Sized>(&self, targets: Vec<PlayerId>, message: &T) {
        let Some(json) = encode(message) else {
            return;
        };
        if let Err(e) = self.message_pusher.broadcast(targets, &json).await {
            tracing::warn!("Failed to broadcast message: {}", e);
        }
    }

    /// 接続中の全員に送信
    pub async fn broadcast_all<T: Serialize + ?Sized>(&self, message: &T) {
        let Some(json) = encode(message) else {
            return;
        };
        if let Err(e) = self.message_pusher.broadcast_all(&json).await {
            tracing::warn!("Failed to broadcast message to all players: {}", e);
        }
    }

    /// 参加可能なグループ一覧を全員に送信
    pub async fn update_groups(&self, groups: &[GroupName]) {
        self.broadcast_all(&UpdateGroupsMessage::new(groups)).await;
        tracing::debug!("Broadcasted update-groups ({} joinable)", groups.len());
    }
}

fn encode<T: Serialize + ?Sized>(message: &T) -> Option<String> {
    match serde_json::to_string(message) {
        Ok(json) => Some(json),
        Err(e) => {
            tracing::error!("Failed to serialize message: {}", e);
            None
        }
    }
}
