/// The forward and backward neighbours of a linked slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Links {
    // The index of the slot closer to the back.
    next: usize,
    // The index of the slot closer to the front.
    prev: usize,
}

impl Links {
    pub(crate) fn new(prev: usize, next: usize) -> Links {
        Links { next, prev }
    }

    pub(crate) fn next(&self) -> usize {
        self.next
    }

    pub(crate) fn set_next(&mut self, new_next: usize) {
        self.next = new_next;
    }

    pub(crate) fn prev(&self) -> usize {
        self.prev
    }

    pub(crate) fn set_prev(&mut self, new_prev: usize) {
        self.prev = new_prev;
    }

    /// Exchange the two directions. Applied to every slot in the
    /// ring, this reverses the ring.
    pub(crate) fn flip(&mut self) {
        std::mem::swap(&mut self.next, &mut self.prev);
    }
}

pub(crate) struct Free {
    // The next free slot.
    next: usize,
}

impl Free {
    pub(crate) fn next(&self) -> usize {
        self.next
    }
}

pub(crate) struct Used<T> {
    links: Links,
    // The contained data.
    data: T,
}

impl<T> Used<T> {
    pub(crate) fn take(self) -> (Links, T) {
        let Used { links, data } = self;
        (links, data)
    }

    pub(crate) fn data(&self) -> &T {
        &self.data
    }

    pub(crate) fn data_mut(&mut self) -> &mut T {
        &mut self.data
    }
}

pub(crate) enum Slot<T> {
    // The valueless node that closes the ring.
    Sentinel(Links),
    Used(Used<T>),
    Free(Free),
}

impl<T> Slot<T> {
    /// A sentinel whose links both point at `ix`, its own index.
    pub(crate) fn new_sentinel(ix: usize) -> Slot<T> {
        Slot::Sentinel(Links::new(ix, ix))
    }

    pub(crate) fn new_used(prev: usize, next: usize, data: T) -> Slot<T> {
        Slot::Used(Used {
            links: Links::new(prev, next),
            data,
        })
    }

    pub(crate) fn new_free(next: usize) -> Slot<T> {
        Slot::Free(Free { next })
    }

    /// The links of a slot that is part of the ring.
    pub(crate) fn links(&self) -> Option<&Links> {
        match self {
            Slot::Sentinel(links) => Some(links),
            Slot::Used(used) => Some(&used.links),
            Slot::Free(_) => None,
        }
    }

    pub(crate) fn links_mut(&mut self) -> Option<&mut Links> {
        match self {
            Slot::Sentinel(links) => Some(links),
            Slot::Used(used) => Some(&mut used.links),
            Slot::Free(_) => None,
        }
    }

    pub(crate) fn get_used(&self) -> Option<&Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_used_mut(&mut self) -> Option<&mut Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    pub(crate) fn get_free(&self) -> Option<&Free> {
        if let Slot::Free(free) = self {
            Some(free)
        } else {
            None
        }
    }

    pub(crate) fn into_used(self) -> Option<Used<T>> {
        if let Slot::Used(used) = self {
            Some(used)
        } else {
            None
        }
    }

    #[cfg(test)]
    pub(crate) fn is_sentinel(&self) -> bool {
        matches!(self, Slot::Sentinel(_))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn new_sentinel_links_to_itself() {
        let s: Slot<u8> = Slot::new_sentinel(0);
        assert_eq!(Some(&Links::new(0, 0)), s.links());
        assert!(s.is_sentinel());
        assert!(s.get_used().is_none());
    }

    #[test]
    fn free_slots_have_no_links() {
        let mut s: Slot<u8> = Slot::new_free(7);
        assert!(s.links().is_none());
        assert!(s.links_mut().is_none());
        assert_eq!(Some(7), s.get_free().map(|f| f.next()));
    }

    #[test]
    fn flip_exchanges_directions() {
        let mut l = Links::new(1, 2);
        l.flip();
        assert_eq!(2, l.prev());
        assert_eq!(1, l.next());
    }

    #[test]
    fn used_slot_gives_back_links_and_data() {
        let s = Slot::new_used(3, 4, 'x');
        let (links, data) = s.into_used().unwrap().take();
        assert_eq!(Links::new(3, 4), links);
        assert_eq!('x', data);
    }
}
