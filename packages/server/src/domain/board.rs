//! The 5x5 bingo board.

use std::collections::HashSet;

use super::{error::ValueObjectError, value_object::BingoNumber};

/// Width and height of a board
pub const BOARD_SIZE: usize = 5;

/// Number of lines that can be completed: 5 rows + 5 columns + 2 diagonals
pub const LINE_COUNT: usize = BOARD_SIZE * 2 + 2;

/// One row, column or diagonal of a board
pub type Line = [BingoNumber; BOARD_SIZE];

/// A 5x5 grid holding every number from 1 to 25 exactly once.
///
/// The permutation invariant is enforced at construction, so any `Board` value
/// is a valid board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: [Line; BOARD_SIZE],
}

impl Board {
    /// Build a board from 25 numbers laid out row-major.
    ///
    /// Callers must pass a permutation of 1..=25 (see `BoardFactory`).
    pub(crate) fn from_permutation(numbers: [BingoNumber; BOARD_SIZE * BOARD_SIZE]) -> Self {
        let rows = std::array::from_fn(|r| std::array::from_fn(|c| numbers[r * BOARD_SIZE + c]));
        Self { rows }
    }

    /// Build a board from raw rows, validating that it is a permutation of 1..=25.
    pub fn from_rows(rows: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self, ValueObjectError> {
        let mut seen = HashSet::with_capacity(BOARD_SIZE * BOARD_SIZE);
        let mut numbers = BingoNumber::all();
        for (slot, value) in numbers.iter_mut().zip(rows.iter().flatten()) {
            let number = BingoNumber::new(i64::from(*value))
                .map_err(|e| ValueObjectError::InvalidBoard(e.to_string()))?;
            if !seen.insert(number) {
                return Err(ValueObjectError::InvalidBoard(format!(
                    "{} appears more than once",
                    number
                )));
            }
            *slot = number;
        }
        Ok(Self::from_permutation(numbers))
    }

    /// The five rows, top to bottom.
    pub fn rows(&self) -> [Line; BOARD_SIZE] {
        self.rows
    }

    /// The five columns, left to right (the transpose of the rows).
    pub fn columns(&self) -> [Line; BOARD_SIZE] {
        std::array::from_fn(|c| std::array::from_fn(|r| self.rows[r][c]))
    }

    /// The main diagonal followed by the anti-diagonal.
    pub fn diagonals(&self) -> [Line; 2] {
        [
            std::array::from_fn(|i| self.rows[i][i]),
            std::array::from_fn(|i| self.rows[i][BOARD_SIZE - 1 - i]),
        ]
    }

    /// All 12 lines: rows, then columns, then diagonals.
    pub fn lines(&self) -> impl Iterator<Item = Line> + '_ {
        self.rows()
            .into_iter()
            .chain(self.columns())
            .chain(self.diagonals())
    }

    /// Numbers in row-major order.
    pub fn numbers(&self) -> impl Iterator<Item = BingoNumber> + '_ {
        self.rows.iter().flatten().copied()
    }

    /// Raw values, row by row.
    pub fn to_values(&self) -> Vec<Vec<u8>> {
        self.rows
            .iter()
            .map(|row| row.iter().map(BingoNumber::value).collect())
            .collect()
    }
}
