//! Move directions and move records.
//!
//! Directions carry the action indices used by environment wrappers:
//! 0 = Up, 1 = Right, 2 = Down, 3 = Left. Anything else is an
//! `InvalidDirection` error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::board::Spawn;
use super::error::{EngineError, EngineResult};

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Direction {
    /// All directions in action-index order.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Action index of this direction.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Map an action index (0-3) to a direction.
    pub fn from_index(index: usize) -> EngineResult<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or_else(|| EngineError::InvalidDirection(index.to_string()))
    }

    /// Upper-case name, as shown to players.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Direction::Up => "UP",
            Direction::Right => "RIGHT",
            Direction::Down => "DOWN",
            Direction::Left => "LEFT",
        }
    }

    /// True for Left/Right, which operate on rows.
    #[must_use]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Direction::Left | Direction::Right)
    }
}

impl TryFrom<usize> for Direction {
    type Error = EngineError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Self::from_index(index)
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    /// Accepts direction names in any case and W/A/S/D keys.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "up" | "w" => Ok(Direction::Up),
            "right" | "d" => Ok(Direction::Right),
            "down" | "s" => Ok(Direction::Down),
            "left" | "a" => Ok(Direction::Left),
            other => Err(EngineError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A set of directions, stored as a 4-bit mask.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectionSet(u8);

impl DirectionSet {
    /// The empty set.
    pub const EMPTY: DirectionSet = DirectionSet(0);

    #[must_use]
    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn insert(&mut self, direction: Direction) {
        self.0 |= 1 << direction.index();
    }

    #[must_use]
    pub fn contains(self, direction: Direction) -> bool {
        self.0 & (1 << direction.index()) != 0
    }

    #[must_use]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    #[must_use]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterate members in action-index order.
    pub fn iter(self) -> impl Iterator<Item = Direction> {
        Direction::ALL.into_iter().filter(move |&d| self.contains(d))
    }

    /// Members as a vector, in action-index order.
    #[must_use]
    pub fn to_vec(self) -> Vec<Direction> {
        self.iter().collect()
    }
}

impl FromIterator<Direction> for DirectionSet {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        let mut set = DirectionSet::new();
        for direction in iter {
            set.insert(direction);
        }
        set
    }
}

impl fmt::Display for DirectionSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.iter().map(Direction::name).collect();
        write!(f, "[{}]", names.join(", "))
    }
}

/// A recorded move with its outcome, kept in the game history.
///
/// Used for:
/// - Replay/debugging
/// - Training data export by external collaborators
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The direction played.
    pub direction: Direction,

    /// Score gained by merges.
    pub score_delta: u64,

    /// Tile spawned after the move.
    pub spawned: Option<Spawn>,

    /// Move number (1-based) within the episode.
    pub move_number: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_indices() {
        assert_eq!(Direction::Up.index(), 0);
        assert_eq!(Direction::Right.index(), 1);
        assert_eq!(Direction::Down.index(), 2);
        assert_eq!(Direction::Left.index(), 3);

        for d in Direction::ALL {
            assert_eq!(Direction::from_index(d.index()), Ok(d));
        }
    }

    #[test]
    fn test_invalid_index() {
        let err = Direction::from_index(4).unwrap_err();
        assert_eq!(err, EngineError::InvalidDirection("4".to_string()));

        assert!(Direction::try_from(usize::MAX).is_err());
    }

    #[test]
    fn test_parse_direction() {
        assert_eq!("up".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("LEFT".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!("w".parse::<Direction>(), Ok(Direction::Up));
        assert_eq!("A".parse::<Direction>(), Ok(Direction::Left));
        assert_eq!(" s ".parse::<Direction>(), Ok(Direction::Down));
        assert_eq!("d".parse::<Direction>(), Ok(Direction::Right));
        assert!("diagonal".parse::<Direction>().is_err());
    }

    #[test]
    fn test_direction_set() {
        let mut set = DirectionSet::new();
        assert!(set.is_empty());

        set.insert(Direction::Left);
        set.insert(Direction::Up);
        set.insert(Direction::Left);

        assert_eq!(set.len(), 2);
        assert!(set.contains(Direction::Up));
        assert!(set.contains(Direction::Left));
        assert!(!set.contains(Direction::Down));
        assert_eq!(set.to_vec(), vec![Direction::Up, Direction::Left]);
        assert_eq!(set.to_string(), "[UP, LEFT]");
    }

    #[test]
    fn test_direction_set_from_iter() {
        let set: DirectionSet = Direction::ALL.into_iter().collect();
        assert_eq!(set.len(), 4);
        assert_eq!(DirectionSet::EMPTY.to_string(), "[]");
    }

    #[test]
    fn test_move_record_serialization() {
        let record = MoveRecord {
            direction: Direction::Down,
            score_delta: 8,
            spawned: Some(Spawn { row: 1, col: 2, value: 2 }),
            move_number: 3,
        };

        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MoveRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(record, deserialized);
    }
}
