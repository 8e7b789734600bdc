use crate::StepperError;

/// Integer counter clamped to an inclusive `[min, max]` range.
///
/// Stepping past a bound is a no-op, never a wrap; quantity steppers and
/// passenger counters must stick at their limits. For wraparound semantics
/// see [`crate::CycleIndex`]; the two policies are deliberately separate
/// types so one cannot be used where the other is meant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundedCounter {
    value: u32,
    min: u32,
    max: u32,
}

impl BoundedCounter {
    /// Create a counter starting at `min`.
    pub fn new(min: u32, max: u32) -> Result<Self, StepperError> {
        if min > max {
            return Err(StepperError::InvertedBounds { min, max });
        }
        Ok(Self {
            value: min,
            min,
            max,
        })
    }

    /// Create a counter starting at `value`, clamped into the range.
    pub fn with_value(min: u32, max: u32, value: u32) -> Result<Self, StepperError> {
        let mut counter = Self::new(min, max)?;
        counter.set(value);
        Ok(counter)
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// Step up; saturates at `max`. Returns the (possibly unchanged) value.
    pub fn increment(&mut self) -> u32 {
        if self.value < self.max {
            self.value += 1;
        }
        self.value
    }

    /// Step down; saturates at `min`. Returns the (possibly unchanged) value.
    pub fn decrement(&mut self) -> u32 {
        if self.value > self.min {
            self.value -= 1;
        }
        self.value
    }

    /// Set the value directly, clamped into `[min, max]`.
    pub fn set(&mut self, value: u32) -> u32 {
        self.value = value.clamp(self.min, self.max);
        self.value
    }

    pub fn at_max(&self) -> bool {
        self.value == self.max
    }

    pub fn at_min(&self) -> bool {
        self.value == self.min
    }
}
