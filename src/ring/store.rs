//! Arena-backed ring of digit nodes

use crate::stdlib::Vec;
use crate::DigitListError;

use super::{Node, NodeId};


/// Owner of all nodes of one digit list
///
/// `head` is the logical first node; the last node is always
/// `head.prev`, there is no separate tail. Slots of unlinked nodes are
/// kept on a free list and handed out again by later insertions.
///
#[derive(Clone, Debug, Default)]
pub(crate) struct RingStore {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
    head: Option<NodeId>,
    len: usize,
}

impl RingStore {
    /// Create an empty ring
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty ring with room for `n` nodes
    pub fn with_capacity(n: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(n),
            ..Self::default()
        }
    }

    /// Number of linked nodes
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// The logical first node
    #[inline]
    pub fn head(&self) -> Option<NodeId> {
        self.head
    }

    /// The logical last node (predecessor of head)
    #[inline]
    pub fn last(&self) -> Option<NodeId> {
        self.head.map(|head| self.prev(head))
    }

    #[inline]
    pub fn next(&self, id: NodeId) -> NodeId {
        self.nodes[id.slot()].next
    }

    #[inline]
    pub fn prev(&self, id: NodeId) -> NodeId {
        self.nodes[id.slot()].prev
    }

    #[inline]
    pub fn digit(&self, id: NodeId) -> u8 {
        self.nodes[id.slot()].digit
    }

    /// Overwrite the digit of a node, returning the previous digit
    pub fn replace(&mut self, id: NodeId, digit: u8) -> u8 {
        let node = &mut self.nodes[id.slot()];
        let old = node.digit;
        node.digit = digit;
        old
    }

    /// Return the node at logical position `index`
    ///
    /// Walks forward from head for the first half of the ring and
    /// backward from the last node for the second half.
    ///
    pub fn node_at(&self, index: usize) -> Result<NodeId, DigitListError> {
        let out_of_range = DigitListError::IndexOutOfRange { index: index, len: self.len };
        if index >= self.len {
            return Err(out_of_range);
        }
        let head = self.head.ok_or(out_of_range)?;

        if index < self.len / 2 {
            let mut current = head;
            for _ in 0..index {
                current = self.next(current);
            }
            Ok(current)
        } else {
            let mut current = self.prev(head);
            for _ in (index + 1)..self.len {
                current = self.prev(current);
            }
            Ok(current)
        }
    }

    /// Take a slot from the free list (or grow the arena) for a new,
    /// self-linked node
    fn allocate(&mut self, digit: u8) -> NodeId {
        match self.free.pop() {
            Some(id) => {
                self.nodes[id.slot()] = Node::detached(id, digit);
                id
            }
            None => {
                let id = NodeId(self.nodes.len());
                self.nodes.push(Node::detached(id, digit));
                id
            }
        }
    }

    /// Splice detached node `id` between `successor.prev` and `successor`
    fn splice_before(&mut self, id: NodeId, successor: NodeId) {
        let predecessor = self.prev(successor);
        {
            let node = &mut self.nodes[id.slot()];
            node.next = successor;
            node.prev = predecessor;
        }
        self.nodes[predecessor.slot()].next = id;
        self.nodes[successor.slot()].prev = id;
    }

    /// Append a node after the last node
    pub fn link_last(&mut self, digit: u8) -> NodeId {
        let id = self.allocate(digit);
        match self.head {
            None => self.head = Some(id),
            Some(head) => self.splice_before(id, head),
        }
        self.len += 1;
        id
    }

    /// Insert a node immediately before `successor`
    ///
    /// Without a successor this appends. Inserting before head makes the
    /// new node the head.
    ///
    pub fn link_before(&mut self, digit: u8, successor: Option<NodeId>) -> NodeId {
        let successor = match successor {
            None => return self.link_last(digit),
            Some(successor) => successor,
        };
        let id = self.allocate(digit);
        self.splice_before(id, successor);
        if self.head == Some(successor) {
            self.head = Some(id);
        }
        self.len += 1;
        id
    }

    /// Remove node from the ring, returning its digit
    ///
    /// Removing head moves head to the removed node's successor; removing
    /// the only node empties the ring.
    ///
    pub fn unlink(&mut self, id: NodeId) -> u8 {
        debug_assert!(self.len > 0);
        let Node { digit, next, prev } = self.nodes[id.slot()];

        if self.len == 1 {
            self.head = None;
        } else {
            self.nodes[prev.slot()].next = next;
            self.nodes[next.slot()].prev = prev;
            if self.head == Some(id) {
                self.head = Some(next);
            }
        }

        self.free.push(id);
        self.len -= 1;
        digit
    }

    /// Drop every node at once
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.len = 0;
    }

    /// Move head one step forward (`head = head.next`)
    pub fn rotate_forward(&mut self) {
        if self.len > 1 {
            self.head = self.head.map(|head| self.next(head));
        }
    }

    /// Move head one step backward (`head = head.prev`)
    pub fn rotate_backward(&mut self) {
        if self.len > 1 {
            self.head = self.head.map(|head| self.prev(head));
        }
    }

    /// Panic if any linkage invariant of the ring is broken
    #[cfg(test)]
    pub fn check_invariants(&self) {
        let head = match self.head {
            None => {
                assert_eq!(self.len, 0, "empty ring must have zero length");
                return;
            }
            Some(head) => head,
        };
        assert!(self.len > 0, "ring with a head must not be empty");

        let mut current = head;
        for _ in 0..self.len {
            let next = self.next(current);
            assert_eq!(self.prev(next), current, "next.prev != node");
            assert_eq!(self.next(self.prev(current)), current, "prev.next != node");
            current = next;
        }
        assert_eq!(current, head, "forward walk of len steps must close the ring");

        for _ in 0..self.len {
            current = self.prev(current);
        }
        assert_eq!(current, head, "backward walk of len steps must close the ring");

        let mut current = head;
        for _ in 1..self.len {
            current = self.next(current);
            assert_ne!(current, head, "ring is shorter than its length");
        }
    }
}
