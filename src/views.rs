use std::sync::Arc;

use tracing::debug;

/// How a cursor produces the reversed ordering of its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ReversalStrategy {
    /// Build forward and reversed views on the first reversal and swap
    /// between them afterwards. Every reversal after the first is O(1).
    #[default]
    Cached,
    /// Reverse the active view on every call. O(n) per reversal, no extra
    /// storage.
    InPlace,
}

/// Both orderings of a cursor's elements. Neither is ever mutated.
#[derive(Debug)]
pub(crate) struct Views<T> {
    forward: Arc<[T]>,
    reversed: Arc<[T]>,
}

impl<T> Clone for Views<T> {
    fn clone(&self) -> Self {
        Views {
            forward: self.forward.clone(),
            reversed: self.reversed.clone(),
        }
    }
}

impl<T: Clone> Views<T> {
    pub fn build(forward: &Arc<[T]>) -> Self {
        debug!(len = forward.len(), "building reversal views");
        Views {
            forward: forward.clone(),
            reversed: forward.iter().rev().cloned().collect(),
        }
    }
}

impl<T> Views<T> {
    pub fn get(&self, reversed: bool) -> Arc<[T]> {
        if reversed {
            self.reversed.clone()
        } else {
            self.forward.clone()
        }
    }
}

/// Reverses `view` without caching, in place when nothing else shares it.
pub(crate) fn reverse_in_place<T: Clone>(view: &mut Arc<[T]>) {
    match Arc::get_mut(view) {
        Some(elements) => elements.reverse(),
        None => *view = view.iter().rev().cloned().collect(),
    }
}
