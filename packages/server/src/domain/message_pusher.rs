//! MessagePusher trait 定義
//!
//! プレイヤーへのメッセージ通知のインターフェース。
//! 具体的な送信手段（WebSocket など）は Infrastructure 層が提供します。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{MessagePushError, PlayerId};

/// 接続ごとの送信チャンネル
///
/// UI 層の writer タスクが受信側を WebSocket に流し込みます。
pub type PusherChannel = mpsc::UnboundedSender<String>;

/// MessagePusher trait
///
/// UseCase 層はこの trait を通じて通知を行い、送信手段には依存しない。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessagePusher: Send + Sync {
    /// 接続を登録
    async fn register_client(&self, player_id: PlayerId, sender: PusherChannel);

    /// 接続の登録を解除
    async fn unregister_client(&self, player_id: &PlayerId);

    /// 特定のプレイヤーに送信
    async fn push_to(&self, player_id: &PlayerId, content: &str) -> Result<(), MessagePushError>;

    /// 指定したプレイヤー全員に送信（一部の失敗は許容）
    async fn broadcast(
        &self,
        targets: Vec<PlayerId>,
        content: &str,
    ) -> Result<(), MessagePushError>;

    /// 接続中の全員に送信（一部の失敗は許容）
    async fn broadcast_all(&self, content: &str) -> Result<(), MessagePushError>;
}
