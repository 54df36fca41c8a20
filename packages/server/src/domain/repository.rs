//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{CellMarked, Departure, GameError, Group, GroupName, PlayerId, Timestamp};

/// Group Repository trait
///
/// UseCase 層はこの trait に依存し、Infrastructure 層の具体的な実装には依存しない。
///
/// 各メソッドはレジストリに対する 1 回のアトミックな操作に対応します。
/// 検証と更新が同じロックの中で行われるため、途中の状態が他のイベントから見えることはありません。
#[async_trait]
pub trait GroupRepository: Send + Sync {
    /// グループを作成
    async fn create_group(
        &self,
        name: GroupName,
        creator: PlayerId,
        created_at: Timestamp,
    ) -> Result<(), GameError>;

    /// グループに参加し、更新後のメンバー一覧を返す
    async fn join_group(
        &self,
        name: &GroupName,
        player: PlayerId,
    ) -> Result<Vec<PlayerId>, GameError>;

    /// ボードを配ってゲームを開始し、開始後のグループを返す
    async fn start_game(
        &self,
        name: &GroupName,
        requester: &PlayerId,
    ) -> Result<Group, GameError>;

    /// 数字をマーク
    async fn mark_cell(
        &self,
        name: &GroupName,
        requester: &PlayerId,
        number: i64,
    ) -> Result<CellMarked, GameError>;

    /// ゲームをリセットし、通知対象のメンバー一覧を返す
    async fn reset_game(
        &self,
        name: &GroupName,
        requester: &PlayerId,
    ) -> Result<Vec<PlayerId>, GameError>;

    /// 全てのグループからプレイヤーを削除
    async fn remove_player(&self, player: &PlayerId) -> Vec<Departure>;

    /// グループを取得
    async fn get_group(&self, name: &GroupName) -> Option<Group>;

    /// 全てのグループを作成順に取得
    async fn get_groups(&self) -> Vec<Group>;

    /// 参加可能なグループ名を作成順に取得
    async fn get_joinable_groups(&self) -> Vec<GroupName>;
}
