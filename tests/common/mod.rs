#![allow(dead_code)]

use pacman_duel::maze::Maze;
use pacman_duel::pacman::Pacman;
use pacman_duel::score::Score;
use rand::rngs::mock::StepRng;

/// Every upgrade roll succeeds.
pub fn always_upgrade() -> StepRng {
    StepRng::new(0, 0)
}

/// Every upgrade roll fails.
pub fn never_upgrade() -> StepRng {
    StepRng::new(u64::MAX, 0)
}

pub fn maze(layout: &[&str]) -> Maze {
    Maze::parse(layout).unwrap()
}

/// A character at (r, c) whose dots feed the returned score.
pub fn pacman_at(maze: &Maze, r: usize, c: usize) -> (Pacman, Score) {
    let score = Score::default();
    let observer = score.clone();
    (Pacman::new(maze, r, c, move || observer.increment()), score)
}
