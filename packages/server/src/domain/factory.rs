//! Domain factories for creating domain entities and value objects.

use rand::{Rng, seq::SliceRandom};

use super::{Board, PlayerId, value_object::BingoNumber};

/// Factory for generating PlayerId instances.
///
/// Connection identities are opaque UUID v4 strings assigned by the server.
pub struct PlayerIdFactory;

impl PlayerIdFactory {
    /// Generate a new PlayerId with a random UUID v4.
    pub fn generate() -> PlayerId {
        PlayerId::from_uuid(uuid::Uuid::new_v4())
    }
}

/// Factory for dealing randomized boards.
pub struct BoardFactory;

impl BoardFactory {
    /// Deal a board using the thread-local RNG.
    pub fn generate() -> Board {
        Self::generate_with(&mut rand::thread_rng())
    }

    /// Deal a board from the given RNG.
    ///
    /// `shuffle` is an unbiased Fisher-Yates shuffle, so every permutation of
    /// 1..=25 is equally likely.
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Board {
        let mut numbers = BingoNumber::all();
        numbers.shuffle(rng);
        Board::from_permutation(numbers)
    }
}
