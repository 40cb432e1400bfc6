/// Side length of a maze cell, in pixels.
pub const CELL_SIZE: i32 = 40;

/// Pixels travelled per frame in the normal state.
pub const PACMAN_SPEED: i32 = 5;
/// Speed multiplier while super.
pub const SUPER_SPEED_FACTOR: i32 = 2;

/// Chance that eating a dot turns a normal character super.
pub const UPGRADE_PROBABILITY: f64 = 0.1;
/// Dots a super character eats before it drops back to normal.
pub const SUPER_DOT_LIMIT: u32 = 50;

pub const DEFAULT_TICK_MS: u64 = 33;
pub const DEFAULT_RENDER_FPS: u64 = 120;

/// Terminal columns used to draw one maze cell.
pub const CELL_W: usize = 2;

/// Default board: 800x600 canvas split into 40px cells.
pub const DEFAULT_LAYOUT: [&str; 15] = [
    "####################",
    "#........##........#",
    "#.##.###.##.###.##.#",
    "#..................#",
    "#.##.#.######.#.##.#",
    "#....#...##...#....#",
    "####.###.##.###.####",
    "#..................#",
    "####.#.######.#.####",
    "#....#...##...#....#",
    "#.##.###.##.###.##.#",
    "#..#............#..#",
    "##.#.#.######.#.#.##",
    "#....#........#....#",
    "####################",
];
