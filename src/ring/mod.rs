//! Circular doubly-linked storage of digits
//!
//! Nodes live in an arena owned by a single [`RingStore`]; links between
//! nodes are [`NodeId`] handles into that arena rather than references,
//! so a node may be reachable from both of its neighbours without shared
//! ownership.
//!

pub(crate) mod store;

pub(crate) use self::store::RingStore;


/// Handle to a node slot of a [`RingStore`]
///
/// Only meaningful for the store that issued it, and only until the node
/// is unlinked (the slot is then recycled).
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    fn slot(self) -> usize {
        self.0
    }
}


/// One digit of the ring and the handles of its neighbours
#[derive(Clone, Copy, Debug)]
pub(crate) struct Node {
    pub digit: u8,
    pub next: NodeId,
    pub prev: NodeId,
}

impl Node {
    /// A node linked to itself in both directions
    fn detached(id: NodeId, digit: u8) -> Self {
        Self {
            digit: digit,
            next: id,
            prev: id,
        }
    }
}
