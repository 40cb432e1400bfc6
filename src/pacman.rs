//! A player-controlled character.

use rand::Rng;
use tracing::{debug, info};

use crate::direction::Direction;
use crate::maze::Maze;
use crate::power::PowerState;

/// Called once for every dot the character eats.
pub type DotObserver = Box<dyn FnMut()>;

pub struct Pacman {
    row: usize,
    col: usize,
    x: i32,
    y: i32,
    direction: Direction,
    next_direction: Direction,
    state: PowerState,
    on_dot_eaten: DotObserver,
}

impl Pacman {
    /// Places a still, normal character at the center of cell (r, c).
    pub fn new(maze: &Maze, r: usize, c: usize, on_dot_eaten: impl FnMut() + 'static) -> Self {
        let (x, y) = maze.piece_center(r, c);
        Self {
            row: r,
            col: c,
            x,
            y,
            direction: Direction::Still,
            next_direction: Direction::Still,
            state: PowerState::Normal,
            on_dot_eaten: Box::new(on_dot_eaten),
        }
    }

    /// Advances one frame.
    ///
    /// Eating and turning only happen when the character sits exactly on a cell
    /// center; between centers it keeps its direction and only moves.
    pub fn update(&mut self, maze: &mut Maze, rng: &mut impl Rng) {
        if maze.is_at_center(self.x, self.y) {
            let (r, c) = maze.xy_to_rc(self.x, self.y);
            self.row = r;
            self.col = c;

            if maze.has_dot_at(r, c) {
                maze.eat_dot_at(r, c);
                debug!(r, c, "Dot eaten");
                (self.on_dot_eaten)();

                let next = self.state.on_dot_eaten(rng);
                if next.is_super() != self.state.is_super() {
                    info!(from = ?self.state, to = ?next, "Power state changed");
                }
                self.state = next;
            }

            if maze.is_movable_direction(r, c, self.next_direction) {
                self.direction = self.next_direction;
            } else {
                self.direction = Direction::Still;
            }
        }

        let (dx, dy) = self.state.step(self.direction);
        self.x += dx;
        self.y += dy;
    }

    /// Queues a turn; legality is checked at the next cell center.
    pub fn set_next_direction(&mut self, direction: Direction) {
        self.next_direction = direction;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Cell recorded at the last center crossing.
    pub fn cell(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn state(&self) -> PowerState {
        self.state
    }
}
