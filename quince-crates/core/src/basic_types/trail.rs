use std::iter::Rev;
use std::vec::Drain;

use crate::quince_assert_simple;

/// An undo log whose entries are grouped by checkpoints.
///
/// Checkpoint `0` is the root; every call to [`Trail::new_checkpoint`] opens the next one.
/// Restoring a checkpoint hands back the entries recorded after it, most recent first.
#[derive(Clone, Debug)]
pub(crate) struct Trail<T> {
    current_checkpoint: usize,
    /// Entry `i` is the length of the trail at the moment checkpoint `i + 1` was opened.
    checkpoint_starts: Vec<usize>,
    entries: Vec<T>,
}

impl<T> Default for Trail<T> {
    fn default() -> Self {
        Trail {
            current_checkpoint: 0,
            checkpoint_starts: Vec::new(),
            entries: Vec::new(),
        }
    }
}

impl<T> Trail<T> {
    pub(crate) fn new_checkpoint(&mut self) {
        self.current_checkpoint += 1;
        self.checkpoint_starts.push(self.entries.len());
    }

    pub(crate) fn checkpoint(&self) -> usize {
        self.current_checkpoint
    }

    pub(crate) fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Go back to `checkpoint`, returning the entries which were recorded after it in reverse
    /// order. The caller is expected to undo each of them.
    pub(crate) fn undo_to(&mut self, checkpoint: usize) -> Rev<Drain<'_, T>> {
        quince_assert_simple!(checkpoint < self.current_checkpoint);

        let retained = self.checkpoint_starts[checkpoint];

        self.current_checkpoint = checkpoint;
        self.checkpoint_starts.truncate(checkpoint);
        self.entries.drain(retained..).rev()
    }
}
