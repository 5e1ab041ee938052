pub use cursor::{Cursor, CursorPosition, CursorWithPosition, PositionOutOfRange, ReversibleCursor};
pub use sequence_cursor::SequenceCursor;
pub use tag::Tag;
pub use views::ReversalStrategy;

mod cursor;
mod mirror;
mod sequence_cursor;
mod tag;
mod views;
