use std::sync::Arc;

use num_traits::ToPrimitive;
use tracing::{debug, trace};

use crate::cursor::{
    Cursor, CursorPosition, CursorWithPosition, PositionOutOfRange, ReversibleCursor,
};
use crate::mirror::mirror;
use crate::views::{reverse_in_place, ReversalStrategy, Views};

/// A cursor over a private snapshot of a sequence that can reverse its
/// direction while keeping the current element.
#[derive(Debug)]
pub struct SequenceCursor<T> {
    view: Arc<[T]>,
    // To avoid signed arithmetic, 0 represents the "start" state (one before
    // the first element) and view.len()+1 the "end" state. Values in between
    // are 1-based indices into the active view.
    pos: usize,
    reversed: bool,
    strategy: ReversalStrategy,
    views: Option<Views<T>>,
}

impl<T> Clone for SequenceCursor<T> {
    fn clone(&self) -> Self {
        SequenceCursor {
            view: self.view.clone(),
            pos: self.pos,
            reversed: self.reversed,
            strategy: self.strategy,
            views: self.views.clone(),
        }
    }
}

impl<T> Default for SequenceCursor<T> {
    fn default() -> Self {
        SequenceCursor::new(Vec::new())
    }
}

impl<T> SequenceCursor<T> {
    /// Takes ownership of `elements`; the cursor starts on the first element.
    pub fn new(elements: Vec<T>) -> Self {
        SequenceCursor::with_strategy(elements, ReversalStrategy::default())
    }

    pub fn with_strategy(elements: Vec<T>, strategy: ReversalStrategy) -> Self {
        Self::check_size(&elements);
        SequenceCursor {
            view: elements.into(),
            pos: 1,
            reversed: false,
            strategy,
            views: None,
        }
    }

    pub fn with_pos(elements: Vec<T>, pos: usize) -> Result<Self, PositionOutOfRange> {
        let mut cursor = SequenceCursor::new(elements);
        cursor.set_pos(CursorPosition::Pos(pos))?;
        Ok(cursor)
    }

    fn check_size(elements: &[T]) {
        assert!(elements.len() < usize::MAX, "Sequence too large");
    }

    pub fn len(&self) -> usize {
        self.view.len()
    }

    pub fn is_empty(&self) -> bool {
        self.view.is_empty()
    }

    pub fn is_reversed(&self) -> bool {
        self.reversed
    }

    pub fn strategy(&self) -> ReversalStrategy {
        self.strategy
    }

    /// Index into the active view, from -1 (before the first element) up to
    /// `len()` (past the last one).
    pub fn position(&self) -> isize {
        self.pos as isize - 1
    }

    /// Number of further `advance` calls that will yield an element.
    pub fn remaining(&self) -> usize {
        self.view.len().saturating_sub(self.pos)
    }

    /// The elements in the current traversal order.
    pub fn as_slice(&self) -> &[T] {
        &self.view
    }
}

impl<T: Clone> SequenceCursor<T> {
    /// Copies `elements`, so later changes to the caller's data are not seen.
    pub fn from_slice(elements: &[T]) -> Self {
        SequenceCursor::new(elements.to_vec())
    }
}

impl<T> From<Vec<T>> for SequenceCursor<T> {
    fn from(elements: Vec<T>) -> Self {
        SequenceCursor::new(elements)
    }
}

impl<T> From<Option<Vec<T>>> for SequenceCursor<T> {
    fn from(elements: Option<Vec<T>>) -> Self {
        match elements {
            Some(elements) => SequenceCursor::new(elements),
            None => {
                debug!("no input sequence, starting empty");
                SequenceCursor::default()
            }
        }
    }
}

impl<T> FromIterator<T> for SequenceCursor<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        SequenceCursor::new(iter.into_iter().collect())
    }
}

impl<T> Cursor for SequenceCursor<T> {
    type Item = T;

    fn has_next(&self) -> bool {
        self.pos < self.view.len()
    }

    fn advance(&mut self) -> Option<&Self::Item> {
        // Stops at the end state instead of going further, so that a
        // reversal from there lands on the start state.
        if self.pos <= self.view.len() {
            self.pos += 1;
        }
        self.query()
    }

    fn query(&self) -> Option<&Self::Item> {
        if self.pos > 0 && self.pos <= self.view.len() {
            Some(&self.view[self.pos - 1])
        } else {
            None
        }
    }

    fn peek_next(&self) -> Option<&Self::Item> {
        self.view.get(self.pos)
    }

    fn at_start(&self) -> bool {
        self.pos == 0
    }

    fn at_end(&self) -> bool {
        self.pos == self.view.len() + 1
    }
}

impl<T: Clone> ReversibleCursor for SequenceCursor<T> {
    fn reverse(&mut self) {
        match self.strategy {
            ReversalStrategy::Cached => {
                let views = self.views.get_or_insert_with(|| Views::build(&self.view));
                self.view = views.get(!self.reversed);
            }
            ReversalStrategy::InPlace => reverse_in_place(&mut self.view),
        }
        self.reversed = !self.reversed;

        let reflected = mirror(self.position() as i128, self.view.len());
        self.pos = (reflected + 1)
            .to_usize()
            .expect("reflected position outside [-1, len]");
        trace!(
            position = self.position(),
            reversed = self.reversed,
            "reversed cursor"
        );
    }
}

impl<T> CursorWithPosition for SequenceCursor<T> {
    fn pos(&self) -> CursorPosition {
        if self.pos == 0 {
            CursorPosition::Start
        } else if self.pos == self.view.len() + 1 {
            CursorPosition::End
        } else {
            CursorPosition::Pos(self.pos - 1)
        }
    }

    fn set_pos(&mut self, pos: CursorPosition) -> Result<(), PositionOutOfRange> {
        self.pos = match pos {
            CursorPosition::Start => 0,
            CursorPosition::End => self.view.len() + 1,
            CursorPosition::Pos(pos) if pos < self.view.len() => pos + 1,
            CursorPosition::Pos(pos) => {
                return Err(PositionOutOfRange {
                    pos,
                    len: self.view.len(),
                })
            }
        };
        Ok(())
    }
}
