use std::cell::Cell;
use std::rc::Rc;

/// A per-player dot counter. Clones share the same count, so a character's
/// dot observer can hold one while the game reads another.
#[derive(Debug, Clone, Default)]
pub struct Score(Rc<Cell<u32>>);

impl Score {
    pub fn increment(&self) {
        self.0.set(self.0.get() + 1);
    }

    pub fn get(&self) -> u32 {
        self.0.get()
    }
}
