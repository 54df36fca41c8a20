//! Value Objects for domain models.
//!
//! Value Objects are immutable objects that represent values in the domain.
//! They are compared by their value, not by identity.

use std::fmt;

use super::error::ValueObjectError;

/// Maximum length of a player identifier
pub const PLAYER_ID_MAX_LEN: usize = 100;

/// Maximum length of a group name
pub const GROUP_NAME_MAX_LEN: usize = 100;

/// Player identifier value object.
///
/// Opaque, server-assigned token identifying one WebSocket connection. It is
/// unique for the lifetime of the connection and reassigned on reconnect.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a new PlayerId.
    ///
    /// # Arguments
    ///
    /// * `id` - The player identifier string
    ///
    /// # Returns
    ///
    /// A Result containing the PlayerId or an error if validation fails
    pub fn new(id: String) -> Result<Self, ValueObjectError> {
        if id.is_empty() {
            return Err(ValueObjectError::PlayerIdEmpty);
        }
        let len = id.chars().count();
        if len > PLAYER_ID_MAX_LEN {
            return Err(ValueObjectError::PlayerIdTooLong {
                max: PLAYER_ID_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(id))
    }

    /// Create a PlayerId from a UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid.to_string())
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for PlayerId {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Group name value object.
///
/// The unique key of a group, chosen by its creator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupName(String);

impl GroupName {
    /// Create a new GroupName.
    ///
    /// # Returns
    ///
    /// A Result containing the GroupName or an error if it is empty or too long
    pub fn new(name: String) -> Result<Self, ValueObjectError> {
        if name.is_empty() {
            return Err(ValueObjectError::GroupNameEmpty);
        }
        let len = name.chars().count();
        if len > GROUP_NAME_MAX_LEN {
            return Err(ValueObjectError::GroupNameTooLong {
                max: GROUP_NAME_MAX_LEN,
                actual: len,
            });
        }
        Ok(Self(name))
    }

    /// Get the inner string value.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert to owned String.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for GroupName {
    type Error = ValueObjectError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A number that can appear on a board (1..=25).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BingoNumber(u8);

impl BingoNumber {
    /// Smallest number on a board
    pub const MIN: u8 = 1;
    /// Largest number on a board
    pub const MAX: u8 = 25;

    /// Create a new BingoNumber, rejecting values outside 1..=25.
    pub fn new(value: i64) -> Result<Self, ValueObjectError> {
        if value < i64::from(Self::MIN) || value > i64::from(Self::MAX) {
            return Err(ValueObjectError::NumberOutOfRange {
                min: Self::MIN,
                max: Self::MAX,
                actual: value,
            });
        }
        // range checked above
        Ok(Self(value as u8))
    }

    /// All numbers from 1 to 25 in ascending order.
    pub fn all() -> [BingoNumber; 25] {
        std::array::from_fn(|i| Self(Self::MIN + i as u8))
    }

    /// Get the inner value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for BingoNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Timestamp value object.
///
/// Represents a Unix timestamp in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(i64);

impl Timestamp {
    /// Create a new Timestamp from Unix milliseconds.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Get the inner i64 value.
    pub fn value(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
