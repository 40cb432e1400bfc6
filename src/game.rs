//! Two-player orchestration: owns the maze, both characters and their scores.

use rand::Rng;
use tracing::{info, trace};

use crate::error::ParseError;
use crate::input::{self, Player};
use crate::maze::Maze;
use crate::pacman::Pacman;
use crate::score::Score;

pub struct Game<R: Rng> {
    maze: Maze,
    pacmen: [Pacman; 2],
    scores: [Score; 2],
    rng: R,
    frame: u64,
}

impl<R: Rng> Game<R> {
    /// Player one starts in the top-left corner cell, player two in the bottom-right.
    pub fn new<S: AsRef<str>>(layout: &[S], rng: R) -> Result<Self, ParseError> {
        let maze = Maze::parse(layout)?;
        if maze.get_width() < 3 || maze.get_height() < 3 {
            return Err(ParseError::TooSmall {
                width: maze.get_width(),
                height: maze.get_height(),
            });
        }
        let scores = [Score::default(), Score::default()];

        let one = scores[0].clone();
        let two = scores[1].clone();
        let pacmen = [
            Pacman::new(&maze, 1, 1, move || one.increment()),
            Pacman::new(&maze, maze.get_height() - 2, maze.get_width() - 2, move || two.increment()),
        ];

        info!(
            width = maze.get_width(),
            height = maze.get_height(),
            dots = maze.dots_left(),
            "Game created"
        );
        Ok(Self {
            maze,
            pacmen,
            scores,
            rng,
            frame: 0,
        })
    }

    /// Routes a key press to the bound character. Returns whether the key was bound.
    pub fn handle_key(&mut self, key: char) -> bool {
        match input::lookup(key) {
            Some((player, direction)) => {
                info!(?player, ?direction, "Triggering command");
                self.pacmen[player.index()].set_next_direction(direction);
                true
            }
            None => false,
        }
    }

    /// One frame: updates both characters in player order.
    pub fn tick(&mut self) {
        self.frame += 1;
        for pacman in self.pacmen.iter_mut() {
            pacman.update(&mut self.maze, &mut self.rng);
        }
        trace!(frame = self.frame, p1 = self.score(Player::One), p2 = self.score(Player::Two));
    }

    pub fn score(&self, player: Player) -> u32 {
        self.scores[player.index()].get()
    }

    /// Label shown on screen, e.g. `P1: 12`.
    pub fn score_text(&self, player: Player) -> String {
        format!("{}: {}", player.label(), self.score(player))
    }

    pub fn pacman(&self, player: Player) -> &Pacman {
        &self.pacmen[player.index()]
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }
}
