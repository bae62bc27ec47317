use crate::deque::{Deque, SENTINEL};
use std::iter::FusedIterator;

/// An iterator over references to the values of a deque, front to
/// back. It is constructed from the [`iter`] method on `Deque`.
///
/// [`iter`]: struct.Deque.html#method.iter
pub struct Iter<'l, T> {
    target: &'l Deque<T>,
    // The next node to yield from the front.
    front: usize,
    // The next node to yield from the back.
    back: usize,
    // Stops the two ends from crossing.
    remaining: usize,
}

impl<'l, T> Iter<'l, T> {
    pub(crate) fn new(target: &'l Deque<T>) -> Self {
        Self {
            target,
            front: target.next_of(SENTINEL),
            back: target.prev_of(SENTINEL),
            remaining: target.len(),
        }
    }
}

impl<'l, T> Clone for Iter<'l, T> {
    fn clone(&self) -> Self {
        Self { ..*self }
    }
}

impl<'l, T> Iterator for Iter<'l, T> {
    type Item = &'l T;

    fn next(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        let ix = self.front;
        self.front = self.target.next_of(ix);
        self.remaining -= 1;
        Some(self.target.data(ix))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<'l, T> DoubleEndedIterator for Iter<'l, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if 0 == self.remaining {
            return None;
        }
        let ix = self.back;
        self.back = self.target.prev_of(ix);
        self.remaining -= 1;
        Some(self.target.data(ix))
    }
}

impl<'l, T> ExactSizeIterator for Iter<'l, T> {}

impl<'l, T> FusedIterator for Iter<'l, T> {}

/// A draining iterator over the deque, front to back. It is
/// constructed from the [`drain`] method on `Deque`.
///
/// [`drain`]: struct.Deque.html#method.drain
pub struct Drain<'l, T> {
    target: &'l mut Deque<T>,
}

impl<'l, T> Drain<'l, T> {
    pub(crate) fn new(target: &'l mut Deque<T>) -> Self {
        Self { target }
    }
}

impl<'l, T> Iterator for Drain<'l, T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.try_remove_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

impl<'l, T> DoubleEndedIterator for Drain<'l, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.target.try_remove_back().ok()
    }
}

impl<'l, T> ExactSizeIterator for Drain<'l, T> {}

impl<'l, T> FusedIterator for Drain<'l, T> {}

impl<'l, T> Drop for Drain<'l, T> {
    fn drop(&mut self) {
        self.target.clear();
    }
}

/// An owning iterator over the values of a deque, front to back. It
/// is constructed from the `IntoIterator` implementation on `Deque`.
pub struct IntoIter<T> {
    target: Deque<T>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(target: Deque<T>) -> Self {
        Self { target }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.target.try_remove_front().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.target.len(), Some(self.target.len()))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.target.try_remove_back().ok()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}
