//! A double-ended queue (deque) built as a circular doubly-linked
//! list with a sentinel node.
//!
//! The sentinel is a permanent, valueless node: its `next` is the
//! front of the deque and its `prev` is the back, so an empty deque is
//! simply a sentinel linked to itself and no operation needs to treat
//! the empty case specially. Every insertion splices a node in after
//! an anchor, and every removal splices one out.
//!
//! Internally, the nodes live in a `Vec` and refer to their
//! neighbours by index, with the sentinel in the first slot. As items
//! are removed from the deque, their slots are put on an internal free
//! list, which is used by later insertions before the `Vec` is
//! expanded.
//!
//! ```
//! use sentinel_deque::{Deque, General};
//!
//! let mut d = Deque::new();
//! d.add_back(1.0);
//! d.add_back(2.5);
//! d.add_front(0.5);
//!
//! d.reverse();
//!
//! assert_eq!("2.5 1 0.5 \n", d.display_with(&General).to_string());
//! assert_eq!(2.5, d.remove_front());
//! ```

mod deque;
mod error;
mod format;
mod iterators;
mod slot;

pub use crate::deque::Deque;
pub use crate::error::{Error, Operation};
pub use crate::format::{FormatFn, General, Plain, Sequence, ValueFormat};
pub use crate::iterators::{Drain, IntoIter, Iter};
