//! Terminal display. Redraws only the cells that changed since the last frame.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use rand::Rng;
use unicode_width::UnicodeWidthStr;

use crate::constants::CELL_W;
use crate::game::Game;
use crate::input::Player;
use crate::maze::Tile;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    Player(Player),
    Wall,
    Empty,
    Dot,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cell {
    pub glyph: Glyph,
    pub color: Color,
}

const BLANK: Cell = Cell {
    glyph: Glyph::Empty,
    color: Color::Reset,
};

pub struct Renderer {
    last: Vec<Cell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![BLANK; width * height],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn render<R: Rng>(&mut self, out: &mut impl Write, game: &Game<R>) -> io::Result<()> {
        let maze = game.maze();
        let needed_h = (maze.get_height() + 1) as u16;
        let needed_w = (maze.get_width() * CELL_W) as u16;

        out.queue(MoveTo(0, 0))?;

        let (term_w, term_h) = terminal::size()?;
        if term_w < needed_w || term_h < needed_h {
            out.queue(Clear(ClearType::All))?;
            out.queue(Print(format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                needed_w, needed_h, term_w, term_h
            )))?;
            out.flush()?;
            self.needs_full = true;
            return Ok(());
        }

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            out.queue(Clear(ClearType::All))?;
        }

        let hud = hud_text(game);
        if self.needs_full || hud != self.last_hud {
            out.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            out.queue(SetForegroundColor(Color::White))?;
            out.queue(Clear(ClearType::CurrentLine))?;
            out.queue(Print(&hud))?;
            out.queue(ResetColor)?;
            self.last_hud = hud;
        }

        for (idx, cell) in frame_cells(game).into_iter().enumerate() {
            if self.needs_full || cell != self.last[idx] {
                self.last[idx] = cell;
                let x = idx % maze.get_width();
                let y = idx / maze.get_width();
                self.draw_cell(out, x, y, cell)?;
            }
        }
        self.needs_full = false;

        out.flush()
    }

    fn draw_cell(&self, out: &mut impl Write, x: usize, y: usize, cell: Cell) -> io::Result<()> {
        let text = match cell.glyph {
            Glyph::Player(_) => "😃",
            Glyph::Wall => "██",
            Glyph::Empty => "  ",
            Glyph::Dot => "· ",
        };
        out.queue(MoveTo(self.origin_x + (x * CELL_W) as u16, self.origin_y + y as u16))?;
        out.queue(SetForegroundColor(cell.color))?;
        out.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        for _ in w..CELL_W {
            out.queue(Print(' '))?;
        }
        out.queue(ResetColor)?;
        Ok(())
    }
}

pub fn hud_text<R: Rng>(game: &Game<R>) -> String {
    format!(
        "{}  {}  (q to quit)",
        game.score_text(Player::One),
        game.score_text(Player::Two)
    )
}

/// Row-major snapshot of what every cell should show. Player two is drawn over
/// player one when they share a cell.
pub fn frame_cells<R: Rng>(game: &Game<R>) -> Vec<Cell> {
    let maze = game.maze();
    let width = maze.get_width();
    let mut cells = Vec::with_capacity(width * maze.get_height());
    for r in 0..maze.get_height() {
        for c in 0..width {
            cells.push(match maze.tile_at(r, c) {
                Some(Tile::Wall) => Cell {
                    glyph: Glyph::Wall,
                    color: Color::Blue,
                },
                Some(Tile::Dot) => Cell {
                    glyph: Glyph::Dot,
                    color: Color::White,
                },
                Some(Tile::Empty) | None => BLANK,
            });
        }
    }

    for player in Player::ALL {
        let pacman = game.pacman(player);
        let (x, y) = pacman.position();
        let (r, c) = maze.xy_to_rc(x, y);
        if r < maze.get_height() && c < width {
            cells[r * width + c] = Cell {
                glyph: Glyph::Player(player),
                color: player_color(player, pacman.state().is_super()),
            };
        }
    }
    cells
}

fn player_color(player: Player, is_super: bool) -> Color {
    match (player, is_super) {
        (_, true) => Color::Magenta,
        (Player::One, false) => Color::Yellow,
        (Player::Two, false) => Color::Green,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::DEFAULT_LAYOUT;
    use rand::rngs::mock::StepRng;

    #[test]
    fn players_are_drawn_at_their_start_cells() {
        let game = Game::new(&DEFAULT_LAYOUT, StepRng::new(u64::MAX, 0)).unwrap();
        let cells = frame_cells(&game);
        let width = game.maze().get_width();
        assert_eq!(cells[width + 1].glyph, Glyph::Player(Player::One));
        assert_eq!(cells[13 * width + 18].glyph, Glyph::Player(Player::Two));
        assert_eq!(cells[0].glyph, Glyph::Wall);
        assert_eq!(cells[width + 2].glyph, Glyph::Dot);
    }

    #[test]
    fn hud_shows_both_scores() {
        let game = Game::new(&DEFAULT_LAYOUT, StepRng::new(u64::MAX, 0)).unwrap();
        assert_eq!(hud_text(&game), "P1: 0  P2: 0  (q to quit)");
    }
}
