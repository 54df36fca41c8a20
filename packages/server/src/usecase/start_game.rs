//! UseCase: ゲーム開始処理
//!
//! 成功時は ack を返さず、`game-started` がそのまま応答になります。

use std::sync::Arc;

use crate::{
    domain::{GameError, GroupName, GroupRepository, MessagePusher, PlayerId},
    infrastructure::dto::websocket::{AckMessage, GameStartedMessage},
};

use super::notifier::Notifier;

const EVENT: &str = "start-game";

/// ゲーム開始のユースケース
pub struct StartGameUseCase {
    repository: Arc<dyn GroupRepository>,
    notifier: Notifier,
}

impl StartGameUseCase {
    pub fn new(
        repository: Arc<dyn GroupRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            notifier: Notifier::new(message_pusher),
        }
    }

    /// ゲーム開始を実行
    ///
    /// 各プレイヤーには本人のボードだけを含む `game-started` を送ります。
    pub async fn execute(
        &self,
        requester: &PlayerId,
        group_name: String,
        request_id: Option<String>,
    ) -> Result<(), GameError> {
        let result = self.start(requester, group_name).await;

        if let Err(e) = &result {
            if let GameError::InsufficientPlayers { required, current } = e {
                tracing::info!(
                    "Cannot start game: not enough players ({}/{})",
                    current,
                    required
                );
            }
            self.notifier
                .push_to(requester, &AckMessage::failure(request_id, EVENT, e))
                .await;
        }

        result
    }

    async fn start(&self, requester: &PlayerId, group_name: String) -> Result<(), GameError> {
        let name = GroupName::new(group_name).map_err(|_| GameError::NotFound)?;

        let group = self.repository.start_game(&name, requester).await?;
        tracing::info!(
            "Game started for group '{}' with {} players",
            name,
            group.players().len()
        );

        for player in group.players() {
            match GameStartedMessage::for_player(&group, player) {
                Some(message) => self.notifier.push_to(player, &message).await,
                None => tracing::error!("Player '{}' has no board in group '{}'", player, name),
            }
        }

        let groups = self.repository.get_joinable_groups().await;
        self.notifier.update_groups(&groups).await;
        Ok(())
    }
}
