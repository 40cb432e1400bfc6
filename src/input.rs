use crate::direction::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    pub const fn index(self) -> usize {
        match self {
            Player::One => 0,
            Player::Two => 1,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Player::One => "P1",
            Player::Two => "P2",
        }
    }
}

/// Key symbol to (player, direction). Symbols are stored uppercase.
pub const BINDINGS: [(char, Player, Direction); 8] = [
    ('W', Player::One, Direction::Up),
    ('S', Player::One, Direction::Down),
    ('D', Player::One, Direction::Right),
    ('A', Player::One, Direction::Left),
    ('I', Player::Two, Direction::Up),
    ('K', Player::Two, Direction::Down),
    ('L', Player::Two, Direction::Right),
    ('J', Player::Two, Direction::Left),
];

/// Looks up a key case-insensitively. Unmapped keys yield `None`.
pub fn lookup(key: char) -> Option<(Player, Direction)> {
    let key = key.to_ascii_uppercase();
    BINDINGS
        .iter()
        .find(|(symbol, _, _)| *symbol == key)
        .map(|&(_, player, direction)| (player, direction))
}
