use crate::error::{Error, Operation};
use crate::format::{Plain, Sequence, ValueFormat};
use crate::iterators::{Drain, IntoIter, Iter};
use crate::slot::{Links, Slot};
use std::fmt;
use std::io::{self, Write};
use std::iter::FromIterator;
use std::usize;

// The sentinel always occupies the first slot of the arena.
pub(crate) const SENTINEL: usize = 0;

// Terminates the free list.
const NIL: usize = usize::MAX;

/// A double-ended queue built as a circular doubly-linked list.
///
/// A permanent, valueless sentinel node closes the ring: its `next`
/// is the front of the deque and its `prev` is the back. An empty
/// deque is a sentinel linked to itself.
pub struct Deque<T> {
    // Index of the first element on the free list. NIL when the
    // free-list is empty.
    free_list: usize,
    // The number of slots currently holding values.
    len_used: usize,
    // The number of slots currently on the free list.
    len_free: usize,
    // Slot 0 is the sentinel; every other slot is used or free.
    pub(crate) slots: Vec<Slot<T>>,
}

impl<T> fmt::Debug for Deque<T>
where
    T: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Deque<T> {
    /// Creates an empty `Deque` holding only its sentinel.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::new();
    /// assert!(deque.is_empty());
    /// ```
    pub fn new() -> Deque<T> {
        Deque {
            free_list: NIL,
            len_used: 0,
            len_free: 0,
            slots: vec![Slot::new_sentinel(SENTINEL)],
        }
    }

    /// Create a new `Deque` instance with a freelist `capacity`
    /// elements deep.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let deque: Deque<u32> = Deque::with_capacity(16);
    /// assert_eq!(16, deque.len_freelist());
    /// ```
    pub fn with_capacity(capacity: usize) -> Deque<T> {
        let mut vec = Vec::with_capacity(capacity + 1);
        vec.push(Slot::new_sentinel(SENTINEL));

        let mut next = NIL;
        for i in 1..=capacity {
            vec.push(Slot::new_free(next));
            next = i;
        }

        Deque {
            free_list: next,
            len_used: 0,
            len_free: capacity,
            slots: vec,
        }
    }

    /// Reserves room in the arena for at least `additional` more
    /// nodes. This does not add anything to the free list.
    pub fn reserve(&mut self, additional: usize) {
        self.slots.reserve(additional)
    }

    /// Returns how many values the arena could hold without
    /// reallocating. The sentinel's slot is not counted.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let d: Deque<u8> = Deque::with_capacity(16);
    /// assert!(d.capacity() >= 16);
    /// ```
    pub fn capacity(&self) -> usize {
        self.slots.capacity() - 1
    }

    /// The number of values in the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.add_front(1);
    /// d.add_back(2);
    /// assert_eq!(2, d.len());
    ///
    /// d.remove_front();
    /// assert_eq!(1, d.len());
    /// ```
    pub fn len(&self) -> usize {
        self.len_used
    }

    /// True when the deque holds no values.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// assert!(d.is_empty());
    ///
    /// d.add_front(1);
    /// assert!(!d.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        0 == self.len_used
    }

    /// The number of slots waiting on the free list to be reused.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    ///
    /// d.add_front(1);
    /// assert_eq!(0, d.len_freelist());
    ///
    /// d.remove_front();
    /// assert_eq!(1, d.len_freelist());
    ///
    /// d.add_front(2);
    /// assert_eq!(0, d.len_freelist());
    /// ```
    pub fn len_freelist(&self) -> usize {
        self.len_free
    }

    /// Insert `data` at the front of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_front(1);
    /// d.add_front(2);
    ///
    /// assert_eq!(&2, d.front());
    /// assert_eq!(&1, d.back());
    /// ```
    pub fn add_front(&mut self, data: T) {
        self.insert_after(SENTINEL, data);
    }

    /// Insert `data` at the back of the deque.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_back(1);
    /// d.add_back(2);
    ///
    /// assert_eq!(&1, d.front());
    /// assert_eq!(&2, d.back());
    /// ```
    pub fn add_back(&mut self, data: T) {
        let back = self.prev_of(SENTINEL);
        self.insert_after(back, data);
    }

    /// Like [`add_front`], but reports a failure to grow the arena as
    /// an error instead of aborting.
    ///
    /// [`add_front`]: #method.add_front
    pub fn try_add_front(&mut self, data: T) -> Result<(), Error> {
        self.try_make_room()?;
        self.add_front(data);
        Ok(())
    }

    /// Like [`add_back`], but reports a failure to grow the arena as
    /// an error instead of aborting.
    ///
    /// [`add_back`]: #method.add_back
    pub fn try_add_back(&mut self, data: T) -> Result<(), Error> {
        self.try_make_room()?;
        self.add_back(data);
        Ok(())
    }

    /// The value at the front of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty. See [`try_front`] for a checked
    /// version.
    ///
    /// [`try_front`]: #method.try_front
    pub fn front(&self) -> &T {
        self.try_front().unwrap_or_else(|e| panic!("{}", e))
    }

    /// The value at the back of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty. See [`try_back`] for a checked
    /// version.
    ///
    /// [`try_back`]: #method.try_back
    pub fn back(&self) -> &T {
        self.try_back().unwrap_or_else(|e| panic!("{}", e))
    }

    /// A mutable reference to the value at the front of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_back(10);
    ///
    /// *d.front_mut() += 10;
    ///
    /// assert_eq!(&20, d.front());
    /// ```
    pub fn front_mut(&mut self) -> &mut T {
        self.ensure_nonempty(Operation::Front)
            .unwrap_or_else(|e| panic!("{}", e));
        let ix = self.next_of(SENTINEL);
        self.data_mut(ix)
    }

    /// A mutable reference to the value at the back of the deque.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty.
    pub fn back_mut(&mut self) -> &mut T {
        self.ensure_nonempty(Operation::Back)
            .unwrap_or_else(|e| panic!("{}", e));
        let ix = self.prev_of(SENTINEL);
        self.data_mut(ix)
    }

    /// The value at the front of the deque, or `Error::Empty` if
    /// there is none.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::{Deque, Error, Operation};
    ///
    /// let mut d = Deque::new();
    /// assert_eq!(Err(Error::Empty(Operation::Front)), d.try_front());
    ///
    /// d.add_back(10);
    /// assert_eq!(Ok(&10), d.try_front());
    /// ```
    pub fn try_front(&self) -> Result<&T, Error> {
        self.ensure_nonempty(Operation::Front)?;
        Ok(self.data(self.next_of(SENTINEL)))
    }

    /// The value at the back of the deque, or `Error::Empty` if there
    /// is none.
    pub fn try_back(&self) -> Result<&T, Error> {
        self.ensure_nonempty(Operation::Back)?;
        Ok(self.data(self.prev_of(SENTINEL)))
    }

    /// Remove the front of the deque and return its value.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty. See [`try_remove_front`] for a
    /// checked version.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d = Deque::new();
    /// d.add_back(10);
    /// d.add_back(20);
    ///
    /// assert_eq!(10, d.remove_front());
    /// assert_eq!(20, d.remove_front());
    /// assert!(d.is_empty());
    /// ```
    ///
    /// [`try_remove_front`]: #method.try_remove_front
    pub fn remove_front(&mut self) -> T {
        self.try_remove_front().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Remove the back of the deque and return its value.
    ///
    /// # Panics
    ///
    /// Panics if the deque is empty. See [`try_remove_back`] for a
    /// checked version.
    ///
    /// [`try_remove_back`]: #method.try_remove_back
    pub fn remove_back(&mut self) -> T {
        self.try_remove_back().unwrap_or_else(|e| panic!("{}", e))
    }

    /// Remove the front of the deque, or return `Error::Empty` if
    /// there is nothing to remove.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::{Deque, Error, Operation};
    ///
    /// let mut d = Deque::new();
    /// d.add_front(1);
    ///
    /// assert_eq!(Ok(1), d.try_remove_front());
    /// assert_eq!(Err(Error::Empty(Operation::RemoveFront)), d.try_remove_front());
    /// ```
    pub fn try_remove_front(&mut self) -> Result<T, Error> {
        self.ensure_nonempty(Operation::RemoveFront)?;
        let ix = self.next_of(SENTINEL);
        Ok(self.unlink(ix))
    }

    /// Remove the back of the deque, or return `Error::Empty` if
    /// there is nothing to remove.
    pub fn try_remove_back(&mut self) -> Result<T, Error> {
        self.ensure_nonempty(Operation::RemoveBack)?;
        let ix = self.prev_of(SENTINEL);
        Ok(self.unlink(ix))
    }

    /// Remove every value, front first. The emptied slots stay in
    /// the arena on the free list.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d: Deque<u8> = (0..3).collect();
    /// d.clear();
    ///
    /// assert!(d.is_empty());
    /// assert_eq!(3, d.len_freelist());
    /// ```
    pub fn clear(&mut self) {
        while !self.is_empty() {
            let ix = self.next_of(SENTINEL);
            self.unlink(ix);
        }
    }

    /// Reverse the order of the deque in place. No node is moved or
    /// reallocated; every node, the sentinel included, has its `next`
    /// and `prev` exchanged. Reversing an empty deque does nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d: Deque<u8> = vec![1, 2, 3, 4].into_iter().collect();
    /// d.reverse();
    ///
    /// assert_eq!(vec![&4, &3, &2, &1], d.iter().collect::<Vec<_>>());
    /// assert_eq!(&4, d.front());
    /// assert_eq!(&1, d.back());
    /// ```
    pub fn reverse(&mut self) {
        let mut ix = SENTINEL;
        loop {
            let links = self.links_mut(ix);
            links.flip();
            // After the flip, `prev` holds the walk's next stop.
            ix = links.prev();
            if SENTINEL == ix {
                break;
            }
        }
    }

    /// Iterate over the deque from front to back. The iterator is
    /// double-ended, so `.rev()` walks from back to front.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d: Deque<u8> = Deque::new();
    /// d.add_back(1);
    /// d.add_back(2);
    /// d.add_back(3);
    ///
    /// assert_eq!(vec![&1, &2, &3], d.iter().collect::<Vec<_>>());
    /// assert_eq!(vec![&3, &2, &1], d.iter().rev().collect::<Vec<_>>());
    /// ```
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// A draining iterator starting from the front. Drained slots
    /// move onto the free list. Values not yielded are removed when
    /// the iterator is dropped.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::Deque;
    ///
    /// let mut d: Deque<u8> = (1..=3).collect();
    ///
    /// assert_eq!(vec![1, 2, 3], d.drain().collect::<Vec<_>>());
    /// assert_eq!(3, d.len_freelist());
    /// ```
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(self)
    }

    /// A `Display` view of the deque: every value rendered with
    /// `format` and followed by a space, then a newline.
    ///
    /// # Examples
    ///
    /// ```
    /// use sentinel_deque::{Deque, General};
    ///
    /// let d: Deque<f64> = vec![1.5, 2.0, 1e7].into_iter().collect();
    ///
    /// assert_eq!("1.5 2 1e+07 \n", d.display_with(&General).to_string());
    /// ```
    pub fn display_with<'a, F>(&'a self, format: &'a F) -> Sequence<'a, T, F>
    where
        F: ValueFormat<T>,
    {
        Sequence::new(self, format)
    }

    /// Write the deque, front to back, to `out` using `format`.
    pub fn write_to<W, F>(&self, out: &mut W, format: &F) -> io::Result<()>
    where
        W: io::Write,
        F: ValueFormat<T>,
    {
        write!(out, "{}", self.display_with(format))
    }

    /// Print the deque, front to back, to standard output using
    /// `format`.
    pub fn print_with<F>(&self, format: &F) -> io::Result<()>
    where
        F: ValueFormat<T>,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, format)?;
        out.flush()
    }

    /// Print the deque, front to back, to standard output using each
    /// value's `Display` implementation. An empty deque prints only
    /// the newline.
    pub fn print(&self) -> io::Result<()>
    where
        T: fmt::Display,
    {
        self.print_with(&Plain)
    }

    fn ensure_nonempty(&self, op: Operation) -> Result<(), Error> {
        if self.is_empty() {
            Err(Error::Empty(op))
        } else {
            Ok(())
        }
    }

    // Make sure the next insertion will not need to grow the arena
    // infallibly.
    fn try_make_room(&mut self) -> Result<(), Error> {
        if NIL == self.free_list {
            self.slots.try_reserve(1)?;
        }
        Ok(())
    }

    // Splice a new node holding `data` between `anchor` and its
    // current successor. Returns the new node's index.
    fn insert_after(&mut self, anchor: usize, data: T) -> usize {
        let next = self.next_of(anchor);
        let ix = self.allocate(anchor, next, data);

        self.links_mut(next).set_prev(ix);
        self.links_mut(anchor).set_next(ix);

        ix
    }

    // Splice node `ix` out of the ring, returning its value. The slot
    // goes onto the free list.
    fn unlink(&mut self, ix: usize) -> T {
        debug_assert_ne!(SENTINEL, ix);

        let (links, data) = self
            .free(ix)
            .into_used()
            .expect("an unlinked slot is expected to be used")
            .take();

        self.links_mut(links.prev()).set_next(links.next());
        self.links_mut(links.next()).set_prev(links.prev());

        data
    }

    fn allocate(&mut self, prev: usize, next: usize, data: T) -> usize {
        self.len_used += 1;

        let s = Slot::new_used(prev, next, data);

        if NIL == self.free_list {
            self.slots.push(s);
            self.slots.len() - 1
        } else {
            let ix = self.free_list;
            self.free_list = self.slots[ix]
                .get_free()
                .expect("the head of the free list is expected to be free")
                .next();
            self.slots[ix] = s;
            self.len_free -= 1;
            ix
        }
    }

    fn free(&mut self, ix: usize) -> Slot<T> {
        debug_assert!(self.slots[ix].get_used().is_some());

        self.len_used -= 1;

        let mut v = Slot::new_free(self.free_list);
        std::mem::swap(&mut v, &mut self.slots[ix]);
        self.free_list = ix;
        self.len_free += 1;
        v
    }

    fn links(&self, ix: usize) -> &Links {
        self.slots[ix]
            .links()
            .expect("a linked slot is expected to be used or the sentinel")
    }

    fn links_mut(&mut self, ix: usize) -> &mut Links {
        self.slots[ix]
            .links_mut()
            .expect("a linked slot is expected to be used or the sentinel")
    }

    pub(crate) fn next_of(&self, ix: usize) -> usize {
        self.links(ix).next()
    }

    pub(crate) fn prev_of(&self, ix: usize) -> usize {
        self.links(ix).prev()
    }

    pub(crate) fn data(&self, ix: usize) -> &T {
        self.slots[ix]
            .get_used()
            .expect("a value slot is expected to be used")
            .data()
    }

    fn data_mut(&mut self, ix: usize) -> &mut T {
        self.slots[ix]
            .get_used_mut()
            .expect("a value slot is expected to be used")
            .data_mut()
    }
}

impl<T> Drop for Deque<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Deque<T> {
    fn default() -> Deque<T> {
        Deque::new()
    }
}

impl<T: Clone> Clone for Deque<T> {
    fn clone(&self) -> Deque<T> {
        self.iter().cloned().collect()
    }
}

impl<T: PartialEq> PartialEq for Deque<T> {
    fn eq(&self, other: &Deque<T>) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for Deque<T> {}

impl<T> FromIterator<T> for Deque<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut l = Self::new();
        l.extend(iter);
        l
    }
}

impl<T> Extend<T> for Deque<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for i in iter {
            self.add_back(i);
        }
    }
}

impl<T> IntoIterator for Deque<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter::new(self)
    }
}

impl<'l, T> IntoIterator for &'l Deque<T> {
    type Item = &'l T;
    type IntoIter = Iter<'l, T>;

    fn into_iter(self) -> Iter<'l, T> {
        self.iter()
    }
}

#[cfg(test)]
impl<T> Deque<T> {
    // Walk the ring in both directions and check every structural
    // invariant: circularity, mutual links, the length counter, and
    // the free list bookkeeping.
    pub(crate) fn assert_links(&self) {
        assert!(self.slots[SENTINEL].is_sentinel());
        assert_eq!(self.slots.len(), 1 + self.len_used + self.len_free);

        let mut ix = SENTINEL;
        let mut steps = 0;
        loop {
            let next = self.next_of(ix);
            assert_eq!(ix, self.prev_of(next), "next.prev of {} is not {}", ix, ix);
            let prev = self.prev_of(ix);
            assert_eq!(ix, self.next_of(prev), "prev.next of {} is not {}", ix, ix);
            if next != SENTINEL {
                assert!(self.slots[next].get_used().is_some());
            }
            ix = next;
            steps += 1;
            if SENTINEL == ix {
                break;
            }
            assert!(steps <= self.len_used, "ring is longer than len");
        }
        assert_eq!(self.len_used + 1, steps);

        let mut ix = SENTINEL;
        for _ in 0..=self.len_used {
            ix = self.prev_of(ix);
        }
        assert_eq!(SENTINEL, ix);

        if self.is_empty() {
            assert_eq!(SENTINEL, self.next_of(SENTINEL));
            assert_eq!(SENTINEL, self.prev_of(SENTINEL));
        }

        let mut free = 0;
        let mut ix = self.free_list;
        while NIL != ix {
            ix = self.slots[ix].get_free().unwrap().next();
            free += 1;
        }
        assert_eq!(self.len_free, free);
    }
}
