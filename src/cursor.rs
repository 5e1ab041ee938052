use thiserror::Error;

use crate::tag::Tag;

/// Forward-only navigation over a sequence, with out-of-bounds reported as `None`.
pub trait Cursor {
    type Item;

    /// True if the next call to [`advance`](Cursor::advance) lands on an element.
    fn has_next(&self) -> bool;
    fn advance(&mut self) -> Option<&Self::Item>;
    fn query(&self) -> Option<&Self::Item>;
    fn peek_next(&self) -> Option<&Self::Item>;
    fn at_start(&self) -> bool;
    fn at_end(&self) -> bool;

    /// Captures the current value. The tag is detached from the cursor, so
    /// later movement does not change what it returns.
    fn tag(&self) -> Tag<Self::Item>
    where
        Self::Item: Clone,
    {
        Tag::new(self.query().cloned())
    }
}

pub trait ReversibleCursor: Cursor {
    /// Flips the traversal direction, keeping the current value in place.
    fn reverse(&mut self);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CursorPosition {
    Start,
    Pos(usize),
    End,
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("position {pos} is out of range for a sequence of length {len}")]
pub struct PositionOutOfRange {
    pub pos: usize,
    pub len: usize,
}

pub trait CursorWithPosition: Cursor {
    fn pos(&self) -> CursorPosition;
    fn set_pos(&mut self, pos: CursorPosition) -> Result<(), PositionOutOfRange>;
}
