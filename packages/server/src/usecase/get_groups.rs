//! UseCase: グループ一覧取得処理

use std::sync::Arc;

use crate::domain::{Group, GroupRepository};

/// グループ一覧取得のユースケース
pub struct GetGroupsUseCase {
    repository: Arc<dyn GroupRepository>,
}

impl GetGroupsUseCase {
    pub fn new(repository: Arc<dyn GroupRepository>) -> Self {
        Self { repository }
    }

    /// 全てのグループを作成順に返す（待機中・進行中の両方）
    pub async fn execute(&self) -> Vec<Group> {
        self.repository.get_groups().await
    }
}
