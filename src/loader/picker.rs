// src/loader/picker.rs
use rand::Rng;

use crate::fortune::{MAX_FORTUNE_ID, MIN_FORTUNE_ID};

/// Chooses which fortune id a load cycle asks for.
pub trait IndexPicker: Send + Sync {
    fn pick(&self) -> u32;
}

/// Uniform draw over `MIN_FORTUNE_ID..=MAX_FORTUNE_ID` from the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomPicker;

impl IndexPicker for RandomPicker {
    fn pick(&self) -> u32 {
        pick_index()
    }
}

/// Always returns the same id.
#[derive(Debug, Clone, Copy)]
pub struct FixedPicker(pub u32);

impl IndexPicker for FixedPicker {
    fn pick(&self) -> u32 {
        self.0
    }
}

pub fn pick_index() -> u32 {
    rand::rng().random_range(MIN_FORTUNE_ID..=MAX_FORTUNE_ID)
}
