//! Core domain models for the bingo session.

use std::collections::{BTreeSet, HashMap};

use super::{
    board::Board,
    error::GameError,
    value_object::{BingoNumber, GroupName, PlayerId, Timestamp},
    win::{completed_lines, is_win},
};

/// Minimum number of players required to start a game
pub const MIN_PLAYERS_TO_START: usize = 2;

/// Lifecycle state of a group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupStatus {
    /// Accepting players; no boards dealt
    Waiting,
    /// Boards dealt, players taking turns
    InProgress,
}

impl GroupStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupStatus::Waiting => "waiting",
            GroupStatus::InProgress => "in-progress",
        }
    }
}

/// What a successful mark led to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkOutcome {
    /// The marking player reached the win threshold; the group is back to Waiting
    Won {
        winner: PlayerId,
        completed_lines: usize,
    },
    /// No win yet; the turn moved on to `next`
    NextTurn {
        next: PlayerId,
        completed_lines: usize,
    },
}

/// How a departure affected a group that still has players
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DepartureEffect {
    /// Turn order unchanged (group was waiting, or the leaver was not on turn)
    Unaffected,
    /// The leaver held the turn; it passed to `next`
    TurnPassed { next: PlayerId },
    /// Too few players were left to continue; the group is back to Waiting
    GameAborted,
}

/// A named bingo session with its own membership, boards and turn state
#[derive(Debug, Clone)]
pub struct Group {
    name: GroupName,
    /// Join order, which is also turn order. `players[0]` is the creator.
    players: Vec<PlayerId>,
    status: GroupStatus,
    /// One board per player while in progress, empty while waiting
    boards: HashMap<PlayerId, Board>,
    /// Numbers marked in this group's current game
    marked_numbers: BTreeSet<BingoNumber>,
    pub(super) current_player_index: usize,
    created_at: Timestamp,
}

impl Group {
    /// Create a waiting group whose only member is its creator
    pub fn new(name: GroupName, creator: PlayerId, created_at: Timestamp) -> Self {
        Self {
            name,
            players: vec![creator],
            status: GroupStatus::Waiting,
            boards: HashMap::new(),
            marked_numbers: BTreeSet::new(),
            current_player_index: 0,
            created_at,
        }
    }

    pub fn name(&self) -> &GroupName {
        &self.name
    }

    pub fn players(&self) -> &[PlayerId] {
        &self.players
    }

    pub fn status(&self) -> GroupStatus {
        self.status
    }

    pub fn board(&self, player: &PlayerId) -> Option<&Board> {
        self.boards.get(player)
    }

    pub fn marked_numbers(&self) -> &BTreeSet<BingoNumber> {
        &self.marked_numbers
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    /// The first player in join order; holds the start / reset privilege.
    pub fn creator(&self) -> Option<&PlayerId> {
        self.players.first()
    }

    pub fn is_joinable(&self) -> bool {
        self.status == GroupStatus::Waiting
    }

    pub fn has_player(&self, player: &PlayerId) -> bool {
        self.players.contains(player)
    }

    /// Append a player to a waiting group
    ///
    /// # Errors
    ///
    /// - `GameError::NotJoinable` if the game has started
    /// - `GameError::AlreadyMember` if the player is already in the group
    pub fn add_player(&mut self, player: PlayerId) -> Result<(), GameError> {
        if !self.is_joinable() {
            return Err(GameError::NotJoinable);
        }
        if self.has_player(&player) {
            return Err(GameError::AlreadyMember);
        }
        self.players.push(player);
        Ok(())
    }

    /// Deal a board to every player and start the game with the first player on turn.
    ///
    /// # Errors
    ///
    /// - `GameError::Unauthorized` if `requester` is not the creator
    /// - `GameError::AlreadyStarted` if the game is in progress
    /// - `GameError::InsufficientPlayers` with fewer than two players
    pub fn start<F>(&mut self, requester: &PlayerId, mut deal: F) -> Result<(), GameError>
    where
        F: FnMut(&PlayerId) -> Board,
    {
        self.ensure_creator(requester, "start the game")?;
        if self.status == GroupStatus::InProgress {
            return Err(GameError::AlreadyStarted);
        }
        if self.players.len() < MIN_PLAYERS_TO_START {
            return Err(GameError::InsufficientPlayers {
                required: MIN_PLAYERS_TO_START,
                current: self.players.len(),
            });
        }

        self.boards = self
            .players
            .iter()
            .map(|player| (player.clone(), deal(player)))
            .collect();
        self.marked_numbers.clear();
        self.current_player_index = 0;
        self.status = GroupStatus::InProgress;
        Ok(())
    }

    /// Mark `number` for the whole group on behalf of the current player.
    ///
    /// Only the marking player's own board is checked for a win. On a win the
    /// group is reset to Waiting; otherwise the turn advances.
    ///
    /// # Errors
    ///
    /// - `GameError::GameNotStarted` if the group is waiting
    /// - `GameError::NotYourTurn` if `requester` is not the current player
    /// - `GameError::AlreadyMarked` if `number` was marked earlier in this game
    pub fn mark(
        &mut self,
        requester: &PlayerId,
        number: BingoNumber,
    ) -> Result<MarkOutcome, GameError> {
        if self.status != GroupStatus::InProgress {
            return Err(GameError::GameNotStarted);
        }
        let current = self
            .current_player()
            .cloned()
            .ok_or(GameError::GameNotStarted)?;
        if &current != requester {
            return Err(GameError::NotYourTurn);
        }
        if !self.marked_numbers.insert(number) {
            return Err(GameError::AlreadyMarked);
        }

        let completed = self
            .boards
            .get(&current)
            .map(|board| completed_lines(board, &self.marked_numbers))
            .unwrap_or(0);

        if is_win(completed) {
            self.clear_game();
            return Ok(MarkOutcome::Won {
                winner: current,
                completed_lines: completed,
            });
        }

        self.advance_turn();
        let next = self
            .current_player()
            .cloned()
            .ok_or(GameError::GameNotStarted)?;
        Ok(MarkOutcome::NextTurn {
            next,
            completed_lines: completed,
        })
    }

    /// Return the group to Waiting, clearing boards, marks and turn.
    ///
    /// # Errors
    ///
    /// `GameError::Unauthorized` if `requester` is not the creator
    pub fn reset(&mut self, requester: &PlayerId) -> Result<(), GameError> {
        self.ensure_creator(requester, "reset the game")?;
        self.clear_game();
        Ok(())
    }

    /// Remove a player, keeping the turn order consistent.
    ///
    /// Returns `None` if the player was not a member.
    pub fn remove_player(&mut self, player: &PlayerId) -> Option<DepartureEffect> {
        let index = self.players.iter().position(|p| p == player)?;
        self.players.remove(index);

        if self.status == GroupStatus::Waiting {
            return Some(DepartureEffect::Unaffected);
        }

        self.boards.remove(player);
        if self.players.len() < MIN_PLAYERS_TO_START {
            self.clear_game();
            return Some(DepartureEffect::GameAborted);
        }

        if index < self.current_player_index {
            // keep the same player on turn
            self.current_player_index -= 1;
            Some(DepartureEffect::Unaffected)
        } else if index == self.current_player_index {
            // the follower slid into the leaver's slot
            self.current_player_index %= self.players.len();
            self.current_player()
                .cloned()
                .map(|next| DepartureEffect::TurnPassed { next })
        } else {
            Some(DepartureEffect::Unaffected)
        }
    }

    fn ensure_creator(&self, requester: &PlayerId, action: &'static str) -> Result<(), GameError> {
        if self.creator() == Some(requester) {
            Ok(())
        } else {
            Err(GameError::Unauthorized { action })
        }
    }

    fn clear_game(&mut self) {
        self.status = GroupStatus::Waiting;
        self.boards.clear();
        self.marked_numbers.clear();
        self.current_player_index = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::board::fixtures::{ordered_board, shuffled_board};

    fn player(name: &str) -> PlayerId {
        PlayerId::new(name.to_string()).unwrap()
    }

    fn number(value: i64) -> BingoNumber {
        BingoNumber::new(value).unwrap()
    }

    fn waiting_group(players: &[&str]) -> Group {
        let mut group = Group::new(
            GroupName::new("room1".to_string()).unwrap(),
            player(players[0]),
            Timestamp::new(1000),
        );
        for name in &players[1..] {
            group.add_player(player(name)).unwrap();
        }
        group
    }

    /// Started game where the creator holds `ordered_board` and everyone else `shuffled_board`
    fn started_group(players: &[&str]) -> Group {
        let mut group = waiting_group(players);
        let creator = player(players[0]);
        group
            .start(&creator.clone(), |p| {
                if *p == creator {
                    ordered_board()
                } else {
                    shuffled_board()
                }
            })
            .unwrap();
        group
    }

    #[test]
    fn test_group_new() {
        // テスト項目: 新しい Group が作成者 1 人の Waiting 状態で作成される
        // when (操作):
        let group = waiting_group(&["alice"]);

        // then (期待する結果):
        assert_eq!(group.name().as_str(), "room1");
        assert_eq!(group.players(), &[player("alice")]);
        assert_eq!(group.status(), GroupStatus::Waiting);
        assert_eq!(group.creator(), Some(&player("alice")));
        assert!(group.marked_numbers().is_empty());
        assert_eq!(group.created_at(), Timestamp::new(1000));
    }

    #[test]
    fn test_add_player_keeps_join_order() {
        // テスト項目: 参加順が保持される
        // when (操作):
        let group = waiting_group(&["alice", "bob", "charlie"]);

        // then (期待する結果):
        assert_eq!(
            group.players(),
            &[player("alice"), player("bob"), player("charlie")]
        );
    }

    #[test]
    fn test_add_player_twice_fails() {
        // テスト項目: 同じプレイヤーは二重に参加できない
        // given (前提条件):
        let mut group = waiting_group(&["alice", "bob"]);

        // when (操作):
        let result = group.add_player(player("bob"));

        // then (期待する結果):
        assert_eq!(result, Err(GameError::AlreadyMember));
        assert_eq!(group.players().len(), 2);
    }

    #[test]
    fn test_add_player_after_start_fails() {
        // テスト項目: ゲーム開始後は参加できない
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);

        // when (操作):
        let result = group.add_player(player("charlie"));

        // then (期待する結果):
        assert_eq!(result, Err(GameError::NotJoinable));
    }

    #[test]
    fn test_start_deals_board_per_player() {
        // テスト項目: 開始時に全員にボードが配られ、最初のプレイヤーの手番になる
        // when (操作):
        let group = started_group(&["alice", "bob"]);

        // then (期待する結果):
        assert_eq!(group.status(), GroupStatus::InProgress);
        assert_eq!(group.board(&player("alice")), Some(&ordered_board()));
        assert_eq!(group.board(&player("bob")), Some(&shuffled_board()));
        assert_eq!(group.current_player(), Some(&player("alice")));
    }

    #[test]
    fn test_start_with_one_player_fails() {
        // テスト項目: 1 人ではゲームを開始できない
        // given (前提条件):
        let mut group = waiting_group(&["alice"]);

        // when (操作):
        let result = group.start(&player("alice"), |_| ordered_board());

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GameError::InsufficientPlayers {
                required: 2,
                current: 1
            })
        );
        assert_eq!(group.status(), GroupStatus::Waiting);
        assert!(group.board(&player("alice")).is_none());
    }

    #[test]
    fn test_start_by_non_creator_fails() {
        // テスト項目: 作成者以外はゲームを開始できない
        // given (前提条件):
        let mut group = waiting_group(&["alice", "bob"]);

        // when (操作):
        let result = group.start(&player("bob"), |_| ordered_board());

        // then (期待する結果):
        assert!(matches!(result, Err(GameError::Unauthorized { .. })));
        assert_eq!(group.status(), GroupStatus::Waiting);
    }

    #[test]
    fn test_start_twice_fails() {
        // テスト項目: 進行中のゲームは再開始できない
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);

        // when (操作):
        let result = group.start(&player("alice"), |_| ordered_board());

        // then (期待する結果):
        assert_eq!(result, Err(GameError::AlreadyStarted));
    }

    #[test]
    fn test_mark_before_start_fails() {
        // テスト項目: 開始前のマークは GameNotStarted になる
        // given (前提条件):
        let mut group = waiting_group(&["alice", "bob"]);

        // when (操作):
        let result = group.mark(&player("alice"), number(1));

        // then (期待する結果):
        assert_eq!(result, Err(GameError::GameNotStarted));
        assert!(group.marked_numbers().is_empty());
    }

    #[test]
    fn test_mark_advances_turn() {
        // テスト項目: マーク後に次のプレイヤーへ手番が移る
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);

        // when (操作):
        let outcome = group.mark(&player("alice"), number(13)).unwrap();

        // then (期待する結果):
        assert_eq!(
            outcome,
            MarkOutcome::NextTurn {
                next: player("bob"),
                completed_lines: 0
            }
        );
        assert!(group.marked_numbers().contains(&number(13)));
    }

    #[test]
    fn test_mark_out_of_turn_leaves_state_unchanged() {
        // テスト項目: 手番でないプレイヤーのマークは拒否され、状態は変わらない
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);

        // when (操作):
        let result = group.mark(&player("bob"), number(1));

        // then (期待する結果):
        assert_eq!(result, Err(GameError::NotYourTurn));
        assert!(group.marked_numbers().is_empty());
        assert_eq!(group.current_player(), Some(&player("alice")));
    }

    #[test]
    fn test_mark_same_number_twice_fails() {
        // テスト項目: 同じ数字を 2 回マークすると AlreadyMarked になる
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);
        group.mark(&player("alice"), number(7)).unwrap();

        // when (操作):
        let result = group.mark(&player("bob"), number(7));

        // then (期待する結果):
        assert_eq!(result, Err(GameError::AlreadyMarked));
        assert_eq!(group.marked_numbers().len(), 1);
        assert_eq!(group.current_player(), Some(&player("bob")));
    }

    #[test]
    fn test_mark_completing_fifth_line_wins_and_resets() {
        // テスト項目: 5 ライン目を完成させたプレイヤーが勝利し、グループは Waiting に戻る
        // given (前提条件): alice のボードで 1〜4 行目（4 ライン）がマーク済み、alice の手番
        let mut group = started_group(&["alice", "bob"]);
        group.marked_numbers = (1..=20).map(number).collect();
        group.current_player_index = 0;
        assert_eq!(
            completed_lines(&ordered_board(), group.marked_numbers()),
            4
        );

        // when (操作): 22 をマークして 2 列目を完成させる
        let outcome = group.mark(&player("alice"), number(22)).unwrap();

        // then (期待する結果):
        assert_eq!(
            outcome,
            MarkOutcome::Won {
                winner: player("alice"),
                completed_lines: 5
            }
        );
        assert_eq!(group.status(), GroupStatus::Waiting);
        assert!(group.board(&player("alice")).is_none());
        assert!(group.board(&player("bob")).is_none());
        assert!(group.marked_numbers().is_empty());
        assert_eq!(group.players().len(), 2);
    }

    #[test]
    fn test_only_marking_players_board_is_checked() {
        // テスト項目: 勝利判定は手番プレイヤー自身のボードだけで行われる
        // given (前提条件): 5, 6, 12, 18, 24 以外がマーク済み、alice の手番
        let mut group = started_group(&["alice", "bob"]);
        group.marked_numbers = (1..=25)
            .filter(|n| ![5, 6, 12, 18, 24].contains(n))
            .map(number)
            .collect();
        group.current_player_index = 0;

        // when (操作): alice が 5 をマーク（bob のボードは 6 ライン、alice のボードは 4 ライン）
        let outcome = group.mark(&player("alice"), number(5)).unwrap();

        // then (期待する結果): 勝者なしで bob に手番が移る
        assert_eq!(
            completed_lines(&shuffled_board(), group.marked_numbers()),
            6
        );
        assert_eq!(
            outcome,
            MarkOutcome::NextTurn {
                next: player("bob"),
                completed_lines: 4
            }
        );
        assert_eq!(group.status(), GroupStatus::InProgress);
    }

    #[test]
    fn test_reset_by_creator() {
        // テスト項目: 作成者はリセットでき、状態がクリアされる
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);
        group.mark(&player("alice"), number(3)).unwrap();

        // when (操作):
        let result = group.reset(&player("alice"));

        // then (期待する結果):
        assert!(result.is_ok());
        assert_eq!(group.status(), GroupStatus::Waiting);
        assert!(group.marked_numbers().is_empty());
        assert!(group.board(&player("alice")).is_none());
        assert_eq!(group.current_player_index, 0);
    }

    #[test]
    fn test_reset_by_non_creator_fails() {
        // テスト項目: 作成者以外のリセットは Unauthorized になり、状態は変わらない
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);
        group.mark(&player("alice"), number(3)).unwrap();

        // when (操作):
        let result = group.reset(&player("bob"));

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GameError::Unauthorized {
                action: "reset the game"
            })
        );
        assert_eq!(group.status(), GroupStatus::InProgress);
        assert_eq!(group.marked_numbers().len(), 1);
    }

    #[test]
    fn test_remove_player_while_waiting() {
        // テスト項目: 待機中の退出は手番に影響しない
        // given (前提条件):
        let mut group = waiting_group(&["alice", "bob"]);

        // when (操作):
        let effect = group.remove_player(&player("alice"));

        // then (期待する結果): bob が新しい作成者になる
        assert_eq!(effect, Some(DepartureEffect::Unaffected));
        assert_eq!(group.creator(), Some(&player("bob")));
    }

    #[test]
    fn test_remove_non_member_returns_none() {
        // テスト項目: メンバーでないプレイヤーの退出は None
        // given (前提条件):
        let mut group = waiting_group(&["alice"]);

        // when (操作):
        let effect = group.remove_player(&player("mallory"));

        // then (期待する結果):
        assert_eq!(effect, None);
        assert_eq!(group.players().len(), 1);
    }

    #[test]
    fn test_remove_current_player_passes_turn() {
        // テスト項目: 手番のプレイヤーが抜けると次のプレイヤーに手番が移る
        // given (前提条件): alice, bob, charlie で bob の手番
        let mut group = started_group(&["alice", "bob", "charlie"]);
        group.mark(&player("alice"), number(1)).unwrap();

        // when (操作):
        let effect = group.remove_player(&player("bob"));

        // then (期待する結果):
        assert_eq!(
            effect,
            Some(DepartureEffect::TurnPassed {
                next: player("charlie")
            })
        );
        assert_eq!(group.current_player(), Some(&player("charlie")));
        assert!(group.board(&player("bob")).is_none());
        assert_eq!(group.status(), GroupStatus::InProgress);
    }

    #[test]
    fn test_remove_last_in_order_current_player_wraps() {
        // テスト項目: 最後尾の手番プレイヤーが抜けると先頭に手番が戻る
        // given (前提条件): charlie の手番
        let mut group = started_group(&["alice", "bob", "charlie"]);
        group.mark(&player("alice"), number(1)).unwrap();
        group.mark(&player("bob"), number(2)).unwrap();

        // when (操作):
        let effect = group.remove_player(&player("charlie"));

        // then (期待する結果):
        assert_eq!(
            effect,
            Some(DepartureEffect::TurnPassed {
                next: player("alice")
            })
        );
    }

    #[test]
    fn test_remove_player_before_current_keeps_turn() {
        // テスト項目: 手番より前のプレイヤーが抜けても手番は変わらない
        // given (前提条件): charlie の手番
        let mut group = started_group(&["alice", "bob", "charlie"]);
        group.mark(&player("alice"), number(1)).unwrap();
        group.mark(&player("bob"), number(2)).unwrap();

        // when (操作):
        let effect = group.remove_player(&player("alice"));

        // then (期待する結果):
        assert_eq!(effect, Some(DepartureEffect::Unaffected));
        assert_eq!(group.current_player(), Some(&player("charlie")));
    }

    #[test]
    fn test_remove_player_below_minimum_aborts_game() {
        // テスト項目: 2 人未満になるとゲームが中止され Waiting に戻る
        // given (前提条件):
        let mut group = started_group(&["alice", "bob"]);
        group.mark(&player("alice"), number(1)).unwrap();

        // when (操作):
        let effect = group.remove_player(&player("bob"));

        // then (期待する結果):
        assert_eq!(effect, Some(DepartureEffect::GameAborted));
        assert_eq!(group.status(), GroupStatus::Waiting);
        assert!(group.marked_numbers().is_empty());
        assert!(group.board(&player("alice")).is_none());
    }
}
