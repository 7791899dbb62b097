//! Bidirectional cursor over a digit list
//!
//! A cursor sits *between* digits: `next_index` is the position of the
//! digit a forward step would return, and `next_node` is that digit's
//! node (`None` at the end of the list). Every edit made through the
//! cursor updates both together with the ring, so that walking `next`
//! from head `next_index` times always lands on `next_node`.
//!
//! The cursor holds the list mutably borrowed; no other cursor, and no
//! direct edit of the list, can happen while it is alive.
//!

use crate::ring::NodeId;
use crate::{DigitList, DigitListError};


/// Movable position in a [`DigitList`] supporting read, replace,
/// insert and remove
///
/// ```
/// use digitring::{DigitList, Radix};
///
/// let mut list = DigitList::from_decimal_str_in(Radix::Decimal, "1234");
/// let mut cursor = list.cursor();
/// while let Ok(digit) = cursor.next() {
///     if digit % 2 == 0 {
///         cursor.set(digit / 2).unwrap();
///     }
/// }
/// cursor.add(9).unwrap();
/// assert_eq!(list.to_string(), "11329");
/// ```
#[derive(Debug)]
pub struct Cursor<'a> {
    list: &'a mut DigitList,
    next_node: Option<NodeId>,
    next_index: usize,
    last_returned: Option<NodeId>,
}

impl<'a> Cursor<'a> {
    /// Cursor before the first digit
    pub(crate) fn front(list: &'a mut DigitList) -> Self {
        let head = list.ring.head();
        Self {
            list: list,
            next_node: head,
            next_index: 0,
            last_returned: None,
        }
    }

    /// Cursor before the digit at `index`; `index == len` is the end
    pub(crate) fn new(list: &'a mut DigitList, index: usize) -> Result<Self, DigitListError> {
        list.check_position(index)?;
        let next_node = if index == list.len() {
            None
        } else {
            Some(list.ring.node_at(index)?)
        };
        Ok(Self {
            list: list,
            next_node: next_node,
            next_index: index,
            last_returned: None,
        })
    }

    /// True if a forward step would return a digit
    #[inline]
    pub fn has_next(&self) -> bool {
        self.next_index < self.list.len()
    }

    /// True if a backward step would return a digit
    #[inline]
    pub fn has_previous(&self) -> bool {
        self.next_index > 0
    }

    /// Position of the digit [`Cursor::next`] would return
    #[inline]
    pub fn next_index(&self) -> usize {
        self.next_index
    }

    /// Position of the digit [`Cursor::previous`] would return
    #[inline]
    pub fn previous_index(&self) -> Option<usize> {
        self.next_index.checked_sub(1)
    }

    /// Step forward, returning the digit stepped over
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<u8, DigitListError> {
        if !self.has_next() {
            return Err(DigitListError::NoSuchElement);
        }
        let node = self.next_node.ok_or(DigitListError::NoSuchElement)?;
        let ring = &self.list.ring;

        self.next_index += 1;
        self.next_node = if self.next_index == ring.len() {
            None
        } else {
            Some(ring.next(node))
        };
        self.last_returned = Some(node);
        Ok(ring.digit(node))
    }

    /// Step backward, returning the digit stepped over
    pub fn previous(&mut self) -> Result<u8, DigitListError> {
        if !self.has_previous() {
            return Err(DigitListError::NoSuchElement);
        }
        let ring = &self.list.ring;
        let node = match self.next_node {
            None => ring.last(),
            Some(next) => Some(ring.prev(next)),
        }
        .ok_or(DigitListError::NoSuchElement)?;

        self.next_index -= 1;
        self.next_node = Some(node);
        self.last_returned = Some(node);
        Ok(ring.digit(node))
    }

    /// Replace the digit returned by the last move
    pub fn set(&mut self, digit: u8) -> Result<(), DigitListError> {
        let node = self.last_returned.ok_or(DigitListError::IllegalState)?;
        self.list.check_digit(digit)?;
        self.list.ring.replace(node, digit);
        Ok(())
    }

    /// Remove the digit returned by the last move
    ///
    /// After a forward move the cursor index drops by one; after a
    /// backward move the following digit slides into the cursor's
    /// position and the index stays.
    ///
    pub fn remove(&mut self) -> Result<u8, DigitListError> {
        let node = self.last_returned.take().ok_or(DigitListError::IllegalState)?;
        let successor = self.list.ring.next(node);
        let digit = self.list.ring.unlink(node);

        if self.next_node == Some(node) {
            self.next_node = if self.next_index == self.list.len() {
                None
            } else {
                Some(successor)
            };
        } else {
            self.next_index -= 1;
        }
        Ok(digit)
    }

    /// Insert digit before the cursor position
    ///
    /// A following [`Cursor::next`] is unaffected; a following
    /// [`Cursor::previous`] returns the new digit.
    ///
    pub fn add(&mut self, digit: u8) -> Result<(), DigitListError> {
        self.list.check_digit(digit)?;
        match self.next_node {
            None => self.list.ring.link_last(digit),
            Some(next) => self.list.ring.link_before(digit, Some(next)),
        };
        self.next_index += 1;
        self.last_returned = None;
        Ok(())
    }

    /// Panic unless `next_node` is the node `next_index` steps from head
    #[cfg(test)]
    pub(crate) fn check_invariants(&self) {
        self.list.check_invariants();
        assert!(self.next_index <= self.list.len());
        if self.next_index == self.list.len() {
            assert_eq!(self.next_node, None);
        } else {
            assert_eq!(self.next_node, self.list.ring.node_at(self.next_index).ok());
        }
    }
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use crate::Radix;

    include!("cursor.tests.rs");
}
