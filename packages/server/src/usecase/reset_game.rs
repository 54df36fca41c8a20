//! UseCase: ゲームのリセット処理

use std::sync::Arc;

use crate::{
    domain::{GameError, GroupName, GroupRepository, MessagePusher, PlayerId},
    infrastructure::dto::websocket::{AckMessage, GameResetMessage},
};

use super::notifier::Notifier;

const EVENT: &str = "reset-game";

/// ゲームリセットのユースケース
///
/// リセットできるのはグループの作成者（参加順で先頭のプレイヤー）だけです。
pub struct ResetGameUseCase {
    repository: Arc<dyn GroupRepository>,
    notifier: Notifier,
}

impl ResetGameUseCase {
    pub fn new(
        repository: Arc<dyn GroupRepository>,
        message_pusher: Arc<dyn MessagePusher>,
    ) -> Self {
        Self {
            repository,
            notifier: Notifier::new(message_pusher),
        }
    }

    pub async fn execute(
        &self,
        requester: &PlayerId,
        group_name: String,
        request_id: Option<String>,
    ) -> Result<(), GameError> {
        let result = self.reset(requester, group_name).await;

        let ack = match &result {
            Ok(()) => AckMessage::success(request_id, EVENT),
            Err(e) => AckMessage::failure(request_id, EVENT, e),
        };
        self.notifier.push_to(requester, &ack).await;

        result
    }

    async fn reset(&self, requester: &PlayerId, group_name: String) -> Result<(), GameError> {
        let name = GroupName::new(group_name).map_err(|_| GameError::NotFound)?;

        let players = self.repository.reset_game(&name, requester).await?;
        tracing::info!("Game reset for group '{}'", name);

        self.notifier
            .broadcast(players.clone(), &GameResetMessage::new(&name, &players))
            .await;

        let groups = self.repository.get_joinable_groups().await;
        self.notifier.update_groups(&groups).await;
        Ok(())
    }
}
