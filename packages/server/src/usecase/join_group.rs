//! UseCase: グループ参加処理

use std::sync::Arc;

use crate::{
    domain::{GameError, GroupName, GroupRepository, MessagePusher, PlayerId},
    infrastructure::dto::websocket::{AckMessage, PlayerJoinedMessage},
};

use super::notifier::Notifier;

const EVENT: &str = "join-group";

/// グループ参加のユースケース
pub struct JoinGroupUseCase {
    repository: Arc<dyn GroupRepository>,
    notifier: Notifier,
}

impl JoinGroupUseCase {
    pub fn new(
        repository: Arc<dyn GroupRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            notifier: Notifier::new(message_pusher),
        }
    }

    /// グループ参加を実行
    ///
    /// 成功するとグループ全員に `player-joined` を送り、参加者に
    /// メンバー一覧付きの ack を返します。
    pub async fn execute(
        &self,
        player: &PlayerId,
        group_name: String,
        request_id: Option<String>,
    ) -> Result<Vec<PlayerId>, GameError> {
        let result = self.join(player, group_name).await;

        let ack = match &result {
            Ok(players) => AckMessage::success(request_id, EVENT)
                .with_players(players.iter().map(|p| p.as_str().to_string()).collect()),
            Err(e) => AckMessage::failure(request_id, EVENT, e),
        };
        self.notifier.push_to(player, &ack).await;

        result
    }

    async fn join(&self, player: &PlayerId, group_name: String) -> Result<Vec<PlayerId>, GameError> {
        let name = GroupName::new(group_name).map_err(|_| GameError::NotFound)?;

        let players = self.repository.join_group(&name, player.clone()).await?;
        tracing::info!(
            "Player '{}' joined group '{}' ({} players)",
            player,
            name,
            players.len()
        );

        self.notifier
            .broadcast(players.clone(), &PlayerJoinedMessage::new(&name, &players))
            .await;
        Ok(players)
    }
}
