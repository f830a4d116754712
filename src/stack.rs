//! LIFO stack backing the undo/redo action logs
//!
//! The playlist controller takes its logs as a `Lifo` capability rather
//! than a concrete type, so tests (or embedders) can substitute their own
//! bookkeeping. `VecStack` is the default implementation: a plain `Vec`
//! with the most recent entry at the end.

/// Last-in-first-out container capability
///
/// All operations are O(1). Empty-stack `pop`/`peek` are modeled as
/// `None`, never an error.
pub trait Lifo<T> {
    /// Push an entry on top of the stack
    fn push(&mut self, entry: T);

    /// Remove and return the most recent entry, or `None` if empty
    fn pop(&mut self) -> Option<T>;

    /// Borrow the most recent entry without removing it
    fn peek(&self) -> Option<&T>;

    /// Whether the stack holds no entries
    fn is_empty(&self) -> bool;

    /// Number of entries on the stack
    fn len(&self) -> usize;

    /// Drop every entry
    fn clear(&mut self);
}

/// Vec-backed LIFO stack (most recent at the end)
#[derive(Debug, Clone)]
pub struct VecStack<T> {
    entries: Vec<T>,
}

impl<T> VecStack<T> {
    /// Create an empty stack
    pub fn new() -> Self {
        Self { entries: Vec::new() }
    }
}

impl<T> Default for VecStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Lifo<T> for VecStack<T> {
    fn push(&mut self, entry: T) {
        self.entries.push(entry);
    }

    fn pop(&mut self) -> Option<T> {
        self.entries.pop()
    }

    fn peek(&self) -> Option<&T> {
        self.entries.last()
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifo_order() {
        let mut stack = VecStack::new();
        stack.push(1);
        stack.push(2);
        stack.push(3);

        assert_eq!(stack.pop(), Some(3));
        assert_eq!(stack.pop(), Some(2));
        assert_eq!(stack.pop(), Some(1));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn test_peek_does_not_remove() {
        let mut stack = VecStack::new();
        stack.push("a");
        stack.push("b");

        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(stack.len(), 2);
        assert_eq!(stack.pop(), Some("b"));
    }

    #[test]
    fn test_empty_stack_is_not_an_error() {
        let mut stack: VecStack<u8> = VecStack::new();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
    }

    #[test]
    fn test_clear_empties() {
        let mut stack = VecStack::new();
        stack.push(1);
        stack.push(2);
        stack.clear();

        assert!(stack.is_empty());
        assert_eq!(stack.len(), 0);
        assert_eq!(stack.pop(), None);
    }
}
