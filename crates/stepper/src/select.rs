use crate::StepperError;

/// A non-empty option group with exactly one selected member at all times.
///
/// Backs single-select pickers (color, size, variant). Selection never
/// becomes empty and never holds two members; an out-of-range `select` is
/// simply refused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SingleSelect<T> {
    options: Vec<T>,
    selected: usize,
}

impl<T> SingleSelect<T> {
    /// Create a group with the first option selected.
    pub fn new(options: Vec<T>) -> Result<Self, StepperError> {
        if options.is_empty() {
            return Err(StepperError::EmptyGroup);
        }
        Ok(Self {
            options,
            selected: 0,
        })
    }

    /// Select by zero-based index. Returns whether the selection changed;
    /// out-of-range indices leave the current selection in place.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.options.len() || index == self.selected {
            return false;
        }
        self.selected = index;
        true
    }

    pub fn selected(&self) -> &T {
        &self.options[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }

    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// A group is never empty; kept for clippy's `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn options(&self) -> &[T] {
        &self.options
    }

    /// Iterate options with their selected flag, in order.
    pub fn iter(&self) -> impl Iterator<Item = (bool, &T)> {
        self.options
            .iter()
            .enumerate()
            .map(|(i, option)| (i == self.selected, option))
    }
}
