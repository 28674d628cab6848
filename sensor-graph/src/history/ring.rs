//! Rolling sample history with a wraparound-free read window
//!
//! Every sample is written twice, at `idx` and `idx + N`, so the N most
//! recent samples always sit contiguously at `storage[idx .. idx + N]`,
//! oldest first. This costs 2N storage but removes the modulo from the read
//! path, which runs once per vertex per axis per frame; the write path runs
//! once per frame.

use crate::renderer::{StridedView, ViewError};
use crate::sensor::{Axis, Sample};

/// Fixed-capacity ring of the last `N` filtered samples
pub struct HistoryBuffer<const N: usize> {
    /// Two mirrored halves, contiguous in memory
    storage: [[Sample; N]; 2],

    /// Next slot to write, always in [0, N)
    idx: usize,
}

impl<const N: usize> HistoryBuffer<N> {
    pub const CAPACITY: usize = N;

    /// Empty history, every slot zero
    pub fn new() -> Self {
        const { assert!(N > 0, "history capacity must be non-zero") };
        Self {
            storage: [[Sample::ZERO; N]; 2],
            idx: 0,
        }
    }

    /// Store one sample, overwriting the oldest
    pub fn append(&mut self, sample: Sample) {
        self.storage[0][self.idx] = sample;
        self.storage[1][self.idx] = sample;
        self.idx = (self.idx + 1) % N;
    }

    /// The N most recent samples, oldest to newest.
    /// Valid until the next `append`.
    pub fn window(&self) -> &[Sample] {
        &self.storage.as_flattened()[self.idx..self.idx + N]
    }

    /// Most recently appended sample
    pub fn latest(&self) -> Sample {
        self.storage[0][(self.idx + N - 1) % N]
    }

    /// One axis of the current window, laid out for vertex attribute binding
    pub fn axis_view(&self, axis: Axis) -> Result<StridedView<'_>, ViewError> {
        StridedView::field(self.window(), axis.field_offset())
    }

    /// Write cursor
    pub fn cursor(&self) -> usize {
        self.idx
    }
}

impl<const N: usize> Default for HistoryBuffer<N> {
    fn default() -> Self {
        Self::new()
    }
}
