//! Turn coordination.
//!
//! A group's turn state is a single index into its join-ordered player list.

use super::{Group, PlayerId};

impl Group {
    /// The player allowed to mark on the present turn.
    pub fn current_player(&self) -> Option<&PlayerId> {
        self.players().get(self.current_player_index)
    }

    pub fn is_current_player(&self, player: &PlayerId) -> bool {
        self.current_player() == Some(player)
    }

    /// Move the turn to the next player in join order, wrapping around.
    ///
    /// An empty group is deleted by the registry rather than advanced, so this
    /// is a no-op there.
    pub fn advance_turn(&mut self) {
        let count = self.players().len();
        if count == 0 {
            return;
        }
        self.current_player_index = (self.current_player_index + 1) % count;
    }
}
