// Magnitude formatting: pick the best-fit unit from an ordered ladder, scale the
// raw count, then render it in the requested style.
pub mod ladder;
pub mod size;
pub mod time;

pub use ladder::{select_unit, Rung};
