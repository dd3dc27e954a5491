//! Sieve window
//!
//! One mark per integer in `[start, end)`, addressed by offset from `start`.
//! A mark means "composite". The window itself knows nothing about the
//! integer type; callers translate offsets back into values.

/// Composite marks for a single segment
#[derive(Debug)]
pub(crate) struct SieveWindow {
    composite: Vec<bool>,
}

impl SieveWindow {
    /// Window of `len` integers, none marked
    pub(crate) fn new(len: usize) -> Self {
        Self {
            composite: vec![false; len],
        }
    }

    /// Number of integers covered
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.composite.len()
    }

    /// Mark offsets `first, first + step, first + 2*step, ...` as composite
    pub(crate) fn strike(&mut self, first: usize, step: usize) {
        debug_assert!(step > 0);
        if first >= self.composite.len() {
            return;
        }
        for mark in self.composite[first..].iter_mut().step_by(step) {
            *mark = true;
        }
    }

    /// Offsets left unmarked, in increasing order
    pub(crate) fn survivors(&self) -> impl Iterator<Item = usize> + '_ {
        self.composite
            .iter()
            .enumerate()
            .filter_map(|(offset, &composite)| (!composite).then_some(offset))
    }
}
