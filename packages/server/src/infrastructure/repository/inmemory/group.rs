//! InMemory Group Repository 実装
//!
//! ドメイン層が定義する GroupRepository trait の具体的な実装。
//! `GroupRegistry` をそのままインメモリ DB として使用します。
//!
//! プロセスを再起動するとグループは全て失われます。

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{
    BoardFactory, CellMarked, Departure, GameError, Group, GroupName, GroupRegistry,
    GroupRepository, PlayerId, Timestamp,
};

/// インメモリ Group Repository 実装
///
/// 全ての操作は 1 つの Mutex の中で完結するため、検証と更新はアトミックに行われます。
pub struct InMemoryGroupRepository {
    registry: Arc<Mutex<GroupRegistry>>,
}

impl InMemoryGroupRepository {
    /// 新しい InMemoryGroupRepository を作成
    pub fn new(registry: Arc<Mutex<GroupRegistry>>) -> Self {
        Self { registry }
    }
}

impl Default for InMemoryGroupRepository {
    fn default() -> Self {
        Self::new(Arc::new(Mutex::new(GroupRegistry::new())))
    }
}

#[async_trait]
impl GroupRepository for InMemoryGroupRepository {
    async fn create_group(
        &self,
        name: GroupName,
        creator: PlayerId,
        created_at: Timestamp,
    ) -> Result<(), GameError> {
        let mut registry = self.registry.lock().await;
        registry.create_group(name, creator, created_at)
    }

    async fn join_group(
        &self,
        name: &GroupName,
        player: PlayerId,
    ) -> Result<Vec<PlayerId>, GameError> {
        let mut registry = self.registry.lock().await;
        registry.join_group(name, player)
    }

    async fn start_game(
        &self,
        name: &GroupName,
        requester: &PlayerId,
    ) -> Result<Group, GameError> {
        let mut registry = self.registry.lock().await;
        registry.start_game(name, requester, |_| BoardFactory::generate())
    }

    async fn mark_cell(
        &self,
        name: &GroupName,
        requester: &PlayerId,
        number: i64,
    ) -> Result<CellMarked, GameError> {
        let mut registry = self.registry.lock().await;
        registry.mark_cell(name, requester, number)
    }

    async fn reset_game(
        &self,
        name: &GroupName,
        requester: &PlayerId,
    ) -> Result<Vec<PlayerId>, GameError> {
        let mut registry = self.registry.lock().await;
        registry.reset_game(name, requester)
    }

    async fn remove_player(&self, player: &PlayerId) -> Vec<Departure> {
        let mut registry = self.registry.lock().await;
        registry.remove_player(player)
    }

    async fn get_group(&self, name: &GroupName) -> Option<Group> {
        let registry = self.registry.lock().await;
        registry.group(name).cloned()
    }

    async fn get_groups(&self) -> Vec<Group> {
        let registry = self.registry.lock().await;
        registry.groups().cloned().collect()
    }

    async fn get_joinable_groups(&self) -> Vec<GroupName> {
        let registry = self.registry.lock().await;
        registry.joinable_groups()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{GroupStatus, LINE_COUNT};

    // ========================================
    // テスト作業記録
    // ========================================
    // 【何をテストするか】
    // - InMemoryGroupRepository が GroupRegistry の操作を正しく委譲すること
    // - 開始時に全員へ有効なボードが配られること
    //
    // 【どのようなシナリオをテストするか】
    // 1. グループ作成と取得
    // 2. ゲーム開始時のボード配布
    // 3. 切断によるグループ削除
    // ========================================

    fn create_test_repository() -> InMemoryGroupRepository {
        InMemoryGroupRepository::default()
    }

    fn player(name: &str) -> PlayerId {
        PlayerId::new(name.to_string()).unwrap()
    }

    fn group_name(name: &str) -> GroupName {
        GroupName::new(name.to_string()).unwrap()
    }

    #[tokio::test]
    async fn test_create_and_get_group() {
        // テスト項目: 作成したグループを取得できる
        // given (前提条件):
        let repo = create_test_repository();

        // when (操作):
        let result = repo
            .create_group(group_name("room1"), player("alice"), Timestamp::new(1000))
            .await;

        // then (期待する結果):
        assert!(result.is_ok());
        let group = repo.get_group(&group_name("room1")).await.unwrap();
        assert_eq!(group.players(), &[player("alice")]);
        assert_eq!(group.created_at(), Timestamp::new(1000));
        assert_eq!(repo.get_joinable_groups().await, vec![group_name("room1")]);
        assert_eq!(repo.get_groups().await.len(), 1);
    }

    #[tokio::test]
    async fn test_start_game_deals_valid_boards() {
        // テスト項目: 開始時に全員へ 1〜25 の並べ替えであるボードが配られる
        // given (前提条件):
        let repo = create_test_repository();
        let name = group_name("room1");
        repo.create_group(name.clone(), player("alice"), Timestamp::new(0))
            .await
            .unwrap();
        repo.join_group(&name, player("bob")).await.unwrap();

        // when (操作):
        let group = repo.start_game(&name, &player("alice")).await.unwrap();

        // then (期待する結果):
        assert_eq!(group.status(), GroupStatus::InProgress);
        for p in group.players() {
            let board = group.board(p).unwrap();
            let mut values: Vec<u8> = board.numbers().map(|n| n.value()).collect();
            values.sort_unstable();
            assert_eq!(values, (1..=25).collect::<Vec<u8>>());
            assert_eq!(board.lines().count(), LINE_COUNT);
        }
        assert!(repo.get_joinable_groups().await.is_empty());
    }

    #[tokio::test]
    async fn test_remove_player_deletes_empty_group() {
        // テスト項目: 最後のプレイヤーが抜けるとグループが削除される
        // given (前提条件):
        let repo = create_test_repository();
        repo.create_group(group_name("G1"), player("alice"), Timestamp::new(0))
            .await
            .unwrap();

        // when (操作):
        let departures = repo.remove_player(&player("alice")).await;

        // then (期待する結果):
        assert_eq!(
            departures,
            vec![Departure::GroupDeleted {
                group: group_name("G1")
            }]
        );
        assert!(repo.get_group(&group_name("G1")).await.is_none());
        assert!(repo.get_joinable_groups().await.is_empty());
    }
}
