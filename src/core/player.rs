//! Player identification and per-player data storage.
//!
//! ## PlayerId
//!
//! A duel always has exactly two seats, so `PlayerId` is a closed enum
//! rather than an index.
//!
//! ## PlayerMap
//!
//! Fixed two-slot storage indexed by `PlayerId`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerId {
    Player1,
    Player2,
}

impl PlayerId {
    /// Both seats in resolution order.
    pub const ALL: [PlayerId; 2] = [PlayerId::Player1, PlayerId::Player2];

    /// Get the raw seat index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            PlayerId::Player1 => 0,
            PlayerId::Player2 => 1,
        }
    }

    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            PlayerId::Player1 => PlayerId::Player2,
            PlayerId::Player2 => PlayerId::Player1,
        }
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayerId::Player1 => write!(f, "player1"),
            PlayerId::Player2 => write!(f, "player2"),
        }
    }
}

/// Per-player data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use duel_engine::core::{PlayerId, PlayerMap};
///
/// let mut respect: PlayerMap<u8> = PlayerMap::with_value(12);
/// respect[PlayerId::Player2] = 9;
///
/// assert_eq!(respect[PlayerId::Player1], 12);
/// assert_eq!(respect[PlayerId::Player2], 9);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerMap<T> {
    data: [T; 2],
}

impl<T> PlayerMap<T> {
    /// Create a map from explicit per-seat values.
    pub fn from_pair(player1: T, player2: T) -> Self {
        Self {
            data: [player1, player2],
        }
    }

    /// Create a map with values from a factory function.
    pub fn new(factory: impl Fn(PlayerId) -> T) -> Self {
        Self::from_pair(factory(PlayerId::Player1), factory(PlayerId::Player2))
    }

    /// Create a map with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::from_pair(value.clone(), value)
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, player: PlayerId) -> &T {
        &self.data[player.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, player: PlayerId) -> &mut T {
        &mut self.data[player.index()]
    }

    /// Borrow one player's data mutably alongside their opponent's.
    ///
    /// Returns `(player, opponent)`.
    pub fn pair_mut(&mut self, player: PlayerId) -> (&mut T, &mut T) {
        let [first, second] = &mut self.data;
        match player {
            PlayerId::Player1 => (first, second),
            PlayerId::Player2 => (second, first),
        }
    }

    /// Iterate over (PlayerId, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over (PlayerId, &mut T) pairs.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (PlayerId, &mut T)> {
        PlayerId::ALL.into_iter().zip(self.data.iter_mut())
    }

    /// Transform both entries.
    pub fn map<U>(&self, f: impl Fn(PlayerId, &T) -> U) -> PlayerMap<U> {
        PlayerMap::from_pair(
            f(PlayerId::Player1, &self.data[0]),
            f(PlayerId::Player2, &self.data[1]),
        )
    }
}

impl<T> Index<PlayerId> for PlayerMap<T> {
    type Output = T;

    fn index(&self, player: PlayerId) -> &Self::Output {
        self.get(player)
    }
}

impl<T> IndexMut<PlayerId> for PlayerMap<T> {
    fn index_mut(&mut self, player: PlayerId) -> &mut Self::Output {
        self.get_mut(player)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        assert_eq!(PlayerId::Player1.index(), 0);
        assert_eq!(PlayerId::Player2.index(), 1);
        assert_eq!(PlayerId::Player1.opponent(), PlayerId::Player2);
        assert_eq!(PlayerId::Player2.opponent(), PlayerId::Player1);
        assert_eq!(format!("{}", PlayerId::Player2), "player2");
    }

    #[test]
    fn test_player_map_new() {
        let map: PlayerMap<usize> = PlayerMap::new(|p| p.index() * 10);

        assert_eq!(map[PlayerId::Player1], 0);
        assert_eq!(map[PlayerId::Player2], 10);
    }

    #[test]
    fn test_pair_mut_orders_by_player() {
        let mut map = PlayerMap::from_pair(1, 2);

        let (me, them) = map.pair_mut(PlayerId::Player2);
        assert_eq!((*me, *them), (2, 1));
        *me += 10;
        *them += 100;

        assert_eq!(map[PlayerId::Player1], 101);
        assert_eq!(map[PlayerId::Player2], 12);
    }

    #[test]
    fn test_player_map_iter() {
        let map = PlayerMap::from_pair("a", "b");

        let pairs: Vec<_> = map.iter().collect();
        assert_eq!(pairs, vec![(PlayerId::Player1, &"a"), (PlayerId::Player2, &"b")]);
    }

    #[test]
    fn test_player_map_serialization() {
        let map = PlayerMap::from_pair(3u8, 7u8);
        let json = serde_json::to_string(&map).unwrap();
        let deserialized: PlayerMap<u8> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, deserialized);
        assert_eq!(serde_json::to_string(&PlayerId::Player1).unwrap(), "\"player1\"");
    }
}
