//! UseCase: プレイヤー切断処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - DisconnectPlayerUseCase::execute() メソッド
//! - 切断したプレイヤーが全てのグループから外れ、残りのメンバーに通知されること
//!
//! ### なぜこのテストが必要か
//! - 手番のプレイヤーが切断してもゲームが止まらないことを保証する
//! - 空になったグループが参加可能リストに残らないことを保証する
//!
//! ### どのような状況を想定しているか
//! - 待機中のグループからの切断
//! - 3 人のゲームで手番のプレイヤーが切断（手番が次に移る）
//! - 2 人のゲームでの切断（ゲーム中止）
//! - 最後のプレイヤーの切断（グループ削除）

use std::sync::Arc;

use crate::{
    domain::{Departure, DepartureEffect, GroupRepository, MessagePusher, PlayerId},
    infrastructure::dto::websocket::{
        GameResetMessage, MessageType, NextTurnMessage, PlayerJoinedMessage,
    },
};

use super::notifier::Notifier;

/// プレイヤー切断のユースケース
pub struct DisconnectPlayerUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn GroupRepository>,
    /// MessagePusher（メッセージ通知の抽象化）
    message_pusher: Arc<dyn MessagePusher>,
    notifier: Notifier,
}

impl DisconnectPlayerUseCase {
    /// 新しい DisconnectPlayerUseCase を作成
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

    /// プレイヤー切断を実行
    ///
    /// # Returns
    ///
    /// 影響を受けたグループごとの結果
    pub async fn execute(&self, player_id: &PlayerId) -> Vec<Departure> {
        // 1. 送信チャンネルの登録を解除
        self.message_pusher.unregister_client(player_id).await;

        // 2. 全てのグループから削除
        let departures = self.repository.remove_player(player_id).await;

        // 3. 残ったメンバーに通知
        for departure in &departures {
            match departure {
                Departure::GroupDeleted { group } => {
                    tracing::info!("Group '{}' deleted (no players left)", group);
                }
                Departure::PlayerLeft {
                    group,
                    remaining,
                    effect,
                } => {
                    self.notifier
                        .broadcast(
                            remaining.clone(),
                            &PlayerJoinedMessage::new(group, remaining),
                        )
                        .await;

                    match effect {
                        DepartureEffect::Unaffected => {}
                        DepartureEffect::TurnPassed { next } => {
                            tracing::info!(
                                "Turn in group '{}' passed to '{}' after '{}' left",
                                group,
                                next,
                                player_id
                            );
                            let message = NextTurnMessage {
                                r#type: MessageType::NextTurn,
                                group_name: group.as_str().to_string(),
                                player_id: next.as_str().to_string(),
                            };
                            self.notifier.broadcast(remaining.clone(), &message).await;
                        }
                        DepartureEffect::GameAborted => {
                            tracing::info!(
                                "Game in group '{}' aborted: not enough players left",
                                group
                            );
                            self.notifier
                                .broadcast(
                                    remaining.clone(),
                                    &GameResetMessage::new(group, remaining),
                                )
                                .await;
                        }
                    }
                }
            }
        }

        // 4. 参加可能なグループ一覧が変わった場合は全員に通知
        if departures.iter().any(Departure::changes_joinable_groups) {
            let groups = self.repository.get_joinable_groups().await;
            self.notifier.update_groups(&groups).await;
        }

        tracing::info!("Player '{}' disconnected", player_id);
        departures
    }
}
