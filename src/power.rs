//! The two-state power-up machine every character carries.

use rand::Rng;

use crate::constants::{PACMAN_SPEED, SUPER_DOT_LIMIT, SUPER_SPEED_FACTOR, UPGRADE_PROBABILITY};
use crate::direction::Direction;

/// Active power state. Transitions replace the whole value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PowerState {
    #[default]
    Normal,
    /// `counter` is the number of dots eaten since becoming super.
    Super { counter: u32 },
}

impl PowerState {
    /// Pixels moved per frame.
    pub const fn speed(self) -> i32 {
        match self {
            PowerState::Normal => PACMAN_SPEED,
            PowerState::Super { .. } => SUPER_SPEED_FACTOR * PACMAN_SPEED,
        }
    }

    /// Pixel displacement for one frame of motion along `direction`.
    pub const fn step(self, direction: Direction) -> (i32, i32) {
        let (dx, dy) = direction.offset();
        let speed = self.speed();
        (dx * speed, dy * speed)
    }

    /// Next state after the owner eats a dot.
    ///
    /// A normal character rolls for the upgrade. A super one counts dots and
    /// reverts once [`SUPER_DOT_LIMIT`] have been eaten since the upgrade.
    pub fn on_dot_eaten(self, rng: &mut impl Rng) -> PowerState {
        match self {
            PowerState::Normal => {
                if rng.gen::<f64>() < UPGRADE_PROBABILITY {
                    PowerState::Super { counter: 0 }
                } else {
                    PowerState::Normal
                }
            }
            PowerState::Super { counter } if counter >= SUPER_DOT_LIMIT => PowerState::Normal,
            PowerState::Super { counter } => PowerState::Super { counter: counter + 1 },
        }
    }

    pub const fn is_super(self) -> bool {
        matches!(self, PowerState::Super { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    #[test]
    fn super_moves_twice_as_far() {
        for dir in Direction::DIRECTIONS {
            let (nx, ny) = PowerState::Normal.step(dir);
            let (sx, sy) = PowerState::Super { counter: 7 }.step(dir);
            assert_eq!((sx, sy), (2 * nx, 2 * ny));
        }
        assert_eq!(PowerState::Super { counter: 0 }.step(Direction::Still), (0, 0));
    }

    #[test]
    fn normal_upgrade_follows_the_roll() {
        let mut hit = StepRng::new(0, 0);
        let mut miss = StepRng::new(u64::MAX, 0);
        assert_eq!(PowerState::Normal.on_dot_eaten(&mut hit), PowerState::Super { counter: 0 });
        assert_eq!(PowerState::Normal.on_dot_eaten(&mut miss), PowerState::Normal);
    }

    #[test]
    fn super_never_rolls() {
        // A roll that would always upgrade must not reset the counter.
        let mut hit = StepRng::new(0, 0);
        assert_eq!(
            PowerState::Super { counter: 3 }.on_dot_eaten(&mut hit),
            PowerState::Super { counter: 4 }
        );
    }
}
