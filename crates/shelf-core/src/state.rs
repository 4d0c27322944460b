//! # Book State
//!
//! Per-ISBN lifecycle as seen from outside the inventory and the ledger.

use serde::{Deserialize, Serialize};

/// Where a given ISBN currently sits in the lending lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookState {
    /// Not in the inventory (initial state).
    #[default]
    NotInLibrary,
    /// In the inventory and on the shelf.
    Available,
    /// In the inventory and checked out.
    Borrowed,
}

impl BookState {
    /// Derives the state from the two facts the stores own.
    #[inline]
    pub const fn from_flags(in_inventory: bool, borrowed: bool) -> Self {
        match (in_inventory, borrowed) {
            (false, _) => BookState::NotInLibrary,
            (true, false) => BookState::Available,
            (true, true) => BookState::Borrowed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_not_in_library() {
        assert_eq!(BookState::default(), BookState::NotInLibrary);
    }

    #[test]
    fn test_from_flags() {
        assert_eq!(BookState::from_flags(false, false), BookState::NotInLibrary);
        assert_eq!(BookState::from_flags(false, true), BookState::NotInLibrary);
        assert_eq!(BookState::from_flags(true, false), BookState::Available);
        assert_eq!(BookState::from_flags(true, true), BookState::Borrowed);
    }
}
