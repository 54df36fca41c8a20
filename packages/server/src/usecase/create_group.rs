//! UseCase: グループ作成処理

use std::sync::Arc;

use bingo_shared::time::Clock;

use crate::{
    domain::{GameError, GroupName, GroupRepository, MessagePusher, PlayerId, Timestamp},
    infrastructure::dto::websocket::AckMessage,
};

use super::notifier::Notifier;

const EVENT: &str = "create-group";

/// グループ作成のユースケース
pub struct CreateGroupUseCase {
    repository: Arc<dyn GroupRepository>,
    notifier: Notifier,
    clock: Arc<dyn Clock>,
}

impl CreateGroupUseCase {
    pub fn new(
        repository: Arc<dyn GroupRepository>,
        message_pusher: Arc<dyn MessagePusher>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            repository,
            notifier: Notifier::new(message_pusher),
            clock,
        }
    }

    /// グループ作成を実行
    ///
    /// 成功すると参加可能なグループ一覧を全員に送り、作成者に ack を返します。
    pub async fn execute(
        &self,
        creator: &PlayerId,
        group_name: String,
        request_id: Option<String>,
    ) -> Result<(), GameError> {
        let result = self.create(creator, group_name).await;

        let ack = match &result {
            Ok(()) => AckMessage::success(request_id, EVENT)
                .with_message("Group created successfully."),
            Err(e) => AckMessage::failure(request_id, EVENT, e),
        };
        self.notifier.push_to(creator, &ack).await;

        result
    }

    async fn create(&self, creator: &PlayerId, group_name: String) -> Result<(), GameError> {
        let name =
            GroupName::new(group_name).map_err(|e| GameError::InvalidGroupName(e.to_string()))?;
        let created_at = Timestamp::new(self.clock.now_jst_millis());

        self.repository
            .create_group(name.clone(), creator.clone(), created_at)
            .await?;
        tracing::info!("Group '{}' created by '{}'", name, creator);

        let groups = self.repository.get_joinable_groups().await;
        self.notifier.update_groups(&groups).await;
        Ok(())
    }
}
