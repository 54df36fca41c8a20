//! Dependency wiring.
//!
//! Builds the server in order:
//! 1. Repository
//! 2. MessagePusher
//! 3. UseCases
//! 4. AppState and Server

use std::sync::Arc;

use bingo_shared::time::{Clock, SystemClock};
use tokio::sync::Mutex;

use crate::{
    domain::{GroupRegistry, GroupRepository, MessagePusher},
    infrastructure::{message_pusher::WebSocketMessagePusher, repository::InMemoryGroupRepository},
    ui::{AppState, Server},
    usecase::{
        ConnectPlayerUseCase, CreateGroupUseCase, DisconnectPlayerUseCase, GetGroupDetailUseCase,
        GetGroupsUseCase, JoinGroupUseCase, MarkCellUseCase, ResetGameUseCase, StartGameUseCase,
    },
};

/// Build a server backed by an empty in-memory registry and the system clock.
pub fn build_server() -> Server {
    build_server_with_clock(Arc::new(SystemClock))
}

/// Build a server that timestamps groups with `clock`.
pub fn build_server_with_clock(clock: Arc<dyn Clock>) -> Server {
    // 1. Repository (in-memory database)
    let registry = Arc::new(Mutex::new(GroupRegistry::new()));
    let repository: Arc<dyn GroupRepository> = Arc::new(InMemoryGroupRepository::new(registry));

    // 2. MessagePusher (WebSocket implementation)
    let message_pusher: Arc<dyn MessagePusher> = Arc::new(WebSocketMessagePusher::default());

    // 3. UseCases
    let state = AppState {
        connect_player_usecase: Arc::new(ConnectPlayerUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        disconnect_player_usecase: Arc::new(DisconnectPlayerUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        create_group_usecase: Arc::new(CreateGroupUseCase::new(
            repository.clone(),
            message_pusher.clone(),
            clock,
        )),
        join_group_usecase: Arc::new(JoinGroupUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        start_game_usecase: Arc::new(StartGameUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        mark_cell_usecase: Arc::new(MarkCellUseCase::new(
            repository.clone(),
            message_pusher.clone(),
        )),
        reset_game_usecase: Arc::new(ResetGameUseCase::new(
            repository.clone(),
            message_pusher,
        )),
        get_groups_usecase: Arc::new(GetGroupsUseCase::new(repository.clone())),
        get_group_detail_usecase: Arc::new(GetGroupDetailUseCase::new(repository)),
        dispatch_lock: Mutex::new(()),
    };

    // 4. Server
    Server::new(state)
}
