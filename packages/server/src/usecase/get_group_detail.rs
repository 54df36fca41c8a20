//! UseCase: グループ詳細取得処理

use std::sync::Arc;

use crate::domain::{Group, GroupName, GroupRepository};

use super::error::GetGroupDetailError;

/// グループ詳細取得のユースケース
pub struct GetGroupDetailUseCase {
    repository: Arc<dyn GroupRepository>,
}

impl GetGroupDetailUseCase {
    pub fn new(repository: Arc<dyn GroupRepository>) -> Self {
        Self { repository }
    }

    /// 名前でグループを取得
    ///
    /// 名前として不正な文字列も「存在しない」として扱います。
    pub async fn execute(&self, group_name: String) -> Result<Group, GetGroupDetailError> {
        let name = GroupName::new(group_name.clone())
            .map_err(|_| GetGroupDetailError::GroupNotFound(group_name.clone()))?;
        self.repository
            .get_group(&name)
            .await
            .ok_or(GetGroupDetailError::GroupNotFound(group_name))
    }
}
