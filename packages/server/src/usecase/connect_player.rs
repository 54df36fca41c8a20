//! UseCase: プレイヤー接続処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - ConnectPlayerUseCase::execute() メソッド
//! - 接続ごとに新しい PlayerId が割り当てられ、connected メッセージが届くこと
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加可能なグループがない状態での接続
//! - 正常系：参加可能なグループがある状態での接続

use std::sync::Arc;

use crate::{
    domain::{GroupRepository, MessagePusher, PlayerId, PlayerIdFactory, PusherChannel},
    infrastructure::dto::websocket::{ConnectedMessage, MessageType},
};

use super::notifier::Notifier;

/// プレイヤー接続のユースケース
pub struct ConnectPlayerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn GroupRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    notifier: Notifier,
}

impl ConnectPlayerUseCase {
    /// 新しい ConnectPlayerUseCase を作成
    pub fn new(
        repository: Arc<dyn GroupRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            notifier: Notifier::new(message_pusher.clone()),
            message_pusher,
        }
    }

    /// プレイヤー接続を実行
    ///
    /// 新しい PlayerId を発行して送信チャンネルを登録し、
    /// 本人に `connected`（PlayerId と参加可能なグループ一覧）を送ります。
    pub async fn execute(&self, sender: PusherChannel) -> PlayerId {
        let player_id = PlayerIdFactory::generate();
        self.message_pusher
            .register_client(player_id.clone(), sender)
            .await;

        let groups = self.repository.get_joinable_groups().await;
        let message = ConnectedMessage {
            r#type: MessageType::Connected,
            player_id: player_id.as_str().to_string(),
            groups: groups.iter().map(|g| g.as_str().to_string()).collect(),
        };
        self.notifier.push_to(&player_id, &message).await;

        tracing::info!("Player '{}' connected", player_id);
        player_id
    }
}
