//! Server state shared by every handler.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::usecase::{
    ConnectPlayerUseCase, CreateGroupUseCase, DisconnectPlayerUseCase, GetGroupDetailUseCase,
    GetGroupsUseCase, JoinGroupUseCase, MarkCellUseCase, ResetGameUseCase, StartGameUseCase,
};

/// Shared application state
pub struct AppState {
    pub connect_player_usecase: Arc<ConnectPlayerUseCase>,
    pub disconnect_player_usecase: Arc<DisconnectPlayerUseCase>,
    pub create_group_usecase: Arc<CreateGroupUseCase>,
    pub join_group_usecase: Arc<JoinGroupUseCase>,
    pub start_game_usecase: Arc<StartGameUseCase>,
    pub mark_cell_usecase: Arc<MarkCellUseCase>,
    pub reset_game_usecase: Arc<ResetGameUseCase>,
    pub get_groups_usecase: Arc<GetGroupsUseCase>,
    pub get_group_detail_usecase: Arc<GetGroupDetailUseCase>,
    /// Held for the whole of each WebSocket event (mutation and notifications),
    /// so every connection sees notifications in the order the state changed.
    pub dispatch_lock: Mutex<()>,
}
