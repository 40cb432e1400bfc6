//! Grid layout, dot bookkeeping and pixel/cell coordinate transforms.

use crate::constants::CELL_SIZE;
use crate::direction::Direction;
use crate::error::ParseError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Empty,
    Dot,
}

impl Tile {
    fn parse(c: char) -> Result<Tile, ParseError> {
        match c {
            '#' => Ok(Tile::Wall),
            '.' => Ok(Tile::Dot),
            ' ' => Ok(Tile::Empty),
            _ => Err(ParseError::UnknownCharacter(c)),
        }
    }
}

/// The playing field. Rows and columns are cell indices; `x`/`y` are pixels
/// with the origin at the top-left corner of cell (0, 0).
#[derive(Debug, Clone)]
pub struct Maze {
    width: usize,
    height: usize,
    grid: Vec<Vec<Tile>>,
    dots_left: usize,
}

impl Maze {
    /// Builds a maze from rows of `#` (wall), `.` (dot) and ` ` (empty).
    pub fn parse<S: AsRef<str>>(layout: &[S]) -> Result<Maze, ParseError> {
        let width = layout.first().map(|row| row.as_ref().chars().count()).unwrap_or(0);
        if width == 0 {
            return Err(ParseError::Empty);
        }

        let mut grid = Vec::with_capacity(layout.len());
        for (row, line) in layout.iter().enumerate() {
            let tiles = line.as_ref().chars().map(Tile::parse).collect::<Result<Vec<_>, _>>()?;
            if tiles.len() != width {
                return Err(ParseError::RaggedRow {
                    row,
                    expected: width,
                    found: tiles.len(),
                });
            }
            grid.push(tiles);
        }

        let dots_left = grid.iter().flatten().filter(|t| **t == Tile::Dot).count();
        Ok(Maze {
            width,
            height: grid.len(),
            grid,
            dots_left,
        })
    }

    /// Width in cells.
    pub fn get_width(&self) -> usize {
        self.width
    }

    /// Height in cells.
    pub fn get_height(&self) -> usize {
        self.height
    }

    pub fn dots_left(&self) -> usize {
        self.dots_left
    }

    pub fn tile_at(&self, r: usize, c: usize) -> Option<Tile> {
        self.grid.get(r).and_then(|row| row.get(c)).copied()
    }

    pub fn piece_center(&self, r: usize, c: usize) -> (i32, i32) {
        (
            c as i32 * CELL_SIZE + CELL_SIZE / 2,
            r as i32 * CELL_SIZE + CELL_SIZE / 2,
        )
    }

    /// Cell containing the pixel. Coordinates left of or above the grid clamp to 0.
    pub fn xy_to_rc(&self, x: i32, y: i32) -> (usize, usize) {
        (
            y.div_euclid(CELL_SIZE).max(0) as usize,
            x.div_euclid(CELL_SIZE).max(0) as usize,
        )
    }

    pub fn is_at_center(&self, x: i32, y: i32) -> bool {
        let half = CELL_SIZE / 2;
        (x - half).rem_euclid(CELL_SIZE) == 0 && (y - half).rem_euclid(CELL_SIZE) == 0
    }

    pub fn has_dot_at(&self, r: usize, c: usize) -> bool {
        self.tile_at(r, c) == Some(Tile::Dot)
    }

    /// Removes the dot at (r, c). Callers check [`has_dot_at`](Self::has_dot_at) first.
    pub fn eat_dot_at(&mut self, r: usize, c: usize) {
        if let Some(tile) = self.grid.get_mut(r).and_then(|row| row.get_mut(c)) {
            if *tile == Tile::Dot {
                *tile = Tile::Empty;
                self.dots_left -= 1;
            }
        }
    }

    /// Whether the neighbour of (r, c) in `direction` is inside the grid and not a wall.
    pub fn is_movable_direction(&self, r: usize, c: usize, direction: Direction) -> bool {
        let (dx, dy) = direction.offset();
        let nr = r as isize + dy as isize;
        let nc = c as isize + dx as isize;
        if nr < 0 || nc < 0 {
            return false;
        }
        match self.tile_at(nr as usize, nc as usize) {
            Some(Tile::Wall) | None => false,
            Some(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small() -> Maze {
        Maze::parse(&["#####", "#. .#", "#####"]).unwrap()
    }

    #[test]
    fn parse_counts_dots() {
        let maze = small();
        assert_eq!(maze.get_width(), 5);
        assert_eq!(maze.get_height(), 3);
        assert_eq!(maze.dots_left(), 2);
    }

    #[test]
    fn parse_rejects_bad_layouts() {
        assert_eq!(Maze::parse(&["#x#"]).unwrap_err(), ParseError::UnknownCharacter('x'));
        assert_eq!(
            Maze::parse(&["###", "##"]).unwrap_err(),
            ParseError::RaggedRow {
                row: 1,
                expected: 3,
                found: 2
            }
        );
        assert_eq!(Maze::parse::<&str>(&[]).unwrap_err(), ParseError::Empty);
    }

    #[test]
    fn center_and_cell_conversions_agree() {
        let maze = small();
        let (x, y) = maze.piece_center(1, 3);
        assert_eq!((x, y), (140, 60));
        assert!(maze.is_at_center(x, y));
        assert!(!maze.is_at_center(x + 5, y));
        assert_eq!(maze.xy_to_rc(x, y), (1, 3));
        assert_eq!(maze.xy_to_rc(x + 19, y - 20), (1, 3));
    }

    #[test]
    fn eating_is_monotonic() {
        let mut maze = small();
        assert!(maze.has_dot_at(1, 1));
        maze.eat_dot_at(1, 1);
        assert!(!maze.has_dot_at(1, 1));
        maze.eat_dot_at(1, 1);
        assert_eq!(maze.dots_left(), 1);
        assert_eq!(maze.tile_at(1, 1), Some(Tile::Empty));
    }

    #[test]
    fn walls_block_movement() {
        let maze = small();
        assert!(maze.is_movable_direction(1, 1, Direction::Right));
        assert!(!maze.is_movable_direction(1, 1, Direction::Left));
        assert!(!maze.is_movable_direction(1, 1, Direction::Up));
        assert!(maze.is_movable_direction(1, 1, Direction::Still));
        assert!(!maze.is_movable_direction(0, 0, Direction::Up));
    }
}
