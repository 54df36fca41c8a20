//! UseCase: 数字のマーク処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - MarkCellUseCase::execute() メソッド
//! - マーク後の通知順序（cell-marked → next-turn / game-won → ack）
//!
//! ### どのような状況を想定しているか
//! - 正常系：勝利せずに手番が進む
//! - 正常系：5 ライン目の完成で勝利し、グループが待機状態に戻る
//! - 異常系：手番でないプレイヤーのマーク

use std::sync::Arc;

use crate::{
    domain::{
        CellMarked, GameError, GroupName, GroupRepository, MarkOutcome, MessagePusher, PlayerId,
    },
    infrastructure::dto::websocket::{
        AckMessage, CellMarkedMessage, GameResetMessage, GameWonMessage, MessageType,
        NextTurnMessage,
    },
};

use super::notifier::Notifier;

const EVENT: &str = "mark-cell";

/// 数字マークのユースケース
pub struct MarkCellUseCase {
    repository: Arc<dyn GroupRepository>,
    notifier: Notifier,
}

impl MarkCellUseCase {
    pub fn new(
        repository: Arc<dyn GroupRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            notifier: Notifier::new(message_pusher),
        }
    }

    /// マークを実行
    ///
    /// # Returns
    ///
    /// * `Ok(MarkOutcome)` - 勝利したか、次の手番が誰か
    /// * `Err(GameError)` - 検証エラー（状態は変更されない）
    pub async fn execute(
        &self,
        requester: &PlayerId,
        group_name: String,
        number: i64,
        request_id: Option<String>,
    ) -> Result<MarkOutcome, GameError> {
        let result = self.mark(requester, group_name, number).await;

        let ack = match &result {
            Ok(_) => AckMessage::success(request_id, EVENT),
            Err(e) => AckMessage::failure(request_id, EVENT, e),
        };
        self.notifier.push_to(requester, &ack).await;

        result
    }

    async fn mark(
        &self,
        requester: &PlayerId,
        group_name: String,
        number: i64,
    ) -> Result<MarkOutcome, GameError> {
        let name = GroupName::new(group_name).map_err(|_| GameError::NotFound)?;

        let CellMarked {
            number,
            players,
            outcome,
        } = self.repository.mark_cell(&name, requester, number).await?;
        tracing::info!("Player '{}' marked {} in group '{}'", requester, number, name);

        let marked = CellMarkedMessage {
            r#type: MessageType::CellMarked,
            group_name: name.as_str().to_string(),
            number: number.value(),
        };
        self.notifier.broadcast(players.clone(), &marked).await;

        match &outcome {
            MarkOutcome::Won {
                winner,
                completed_lines,
            } => {
                tracing::info!(
                    "Player '{}' won in group '{}' with {} lines",
                    winner,
                    name,
                    completed_lines
                );
                let won = GameWonMessage {
                    r#type: MessageType::GameWon,
                    group_name: name.as_str().to_string(),
                    player_id: winner.as_str().to_string(),
                    completed_lines: *completed_lines,
                };
                self.notifier.broadcast(players.clone(), &won).await;
                self.notifier
                    .broadcast(players.clone(), &GameResetMessage::new(&name, &players))
                    .await;

                let groups = self.repository.get_joinable_groups().await;
                self.notifier.update_groups(&groups).await;
            }
            MarkOutcome::NextTurn { next, .. } => {
                let next_turn = NextTurnMessage {
                    r#type: MessageType::NextTurn,
                    group_name: name.as_str().to_string(),
                    player_id: next.as_str().to_string(),
                };
                self.notifier.broadcast(players, &next_turn).await;
            }
        }

        Ok(outcome)
    }
}
