pub mod counter;
pub mod cycle;
pub mod macros;
pub mod select;

pub use counter::BoundedCounter;
pub use cycle::CycleIndex;
pub use select::SingleSelect;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StepperError {
    #[error("counter bounds are inverted: min {min} > max {max}")]
    InvertedBounds { min: u32, max: u32 },
    #[error("cycle length must be at least 1")]
    EmptyCycle,
    #[error("selection group must contain at least one option")]
    EmptyGroup,
}
