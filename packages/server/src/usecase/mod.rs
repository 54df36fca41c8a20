//! UseCase 層
//!
//! ビジネスロジックを実装するレイヤー。
//! UI 層から呼び出され、Domain 層を操作します。
//! WebSocket のイベントごとに 1 つのユースケースがあり、検証・更新・通知までを担当します。

pub mod connect_player;
pub mod create_group;
pub mod disconnect_player;
pub mod error;
pub mod get_group_detail;
pub mod get_groups;
pub mod join_group;
pub mod mark_cell;
pub mod notifier;
pub mod reset_game;
pub mod start_game;

pub use connect_player::ConnectPlayerUseCase;
pub use create_group::CreateGroupUseCase;
pub use disconnect_player::DisconnectPlayerUseCase;
pub use error::GetGroupDetailError;
pub use get_group_detail::GetGroupDetailUseCase;
pub use get_groups::GetGroupsUseCase;
pub use join_group::JoinGroupUseCase;
pub use mark_cell::MarkCellUseCase;
pub use reset_game::ResetGameUseCase;
pub use start_game::StartGameUseCase;
