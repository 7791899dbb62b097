//! Borrowing iterator over the digits of a list

use crate::ring::{NodeId, RingStore};


/// Iterator over digits of a [`DigitList`](crate::DigitList), most
/// significant first
///
/// Created by [`DigitList::iter`](crate::DigitList::iter). Walks the ring
/// from both ends; `remaining` stops the two walks from crossing.
///
#[derive(Clone, Debug)]
pub struct Iter<'a> {
    ring: &'a RingStore,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(ring: &'a RingStore) -> Self {
        Self {
            ring: ring,
            front: ring.head(),
            back: ring.last(),
            remaining: ring.len(),
        }
    }
}

impl Iterator for Iter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.front?;
        self.front = Some(self.ring.next(node));
        self.remaining -= 1;
        Some(self.ring.digit(node))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<u8> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.back?;
        self.back = Some(self.ring.prev(node));
        self.remaining -= 1;
        Some(self.ring.digit(node))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl crate::stdlib::iter::FusedIterator for Iter<'_> {}


#[cfg(test)]
mod test {
    use crate::{DigitList, Radix};

    fn list(digits: &[u8]) -> DigitList {
        let mut list = DigitList::with_radix(Radix::Decimal);
        list.add_all(digits.iter().copied());
        list
    }

    #[test]
    fn forward() {
        let l = list(&[1, 2, 3]);
        assert_eq!(l.iter().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(l.iter().len(), 3);
    }

    #[test]
    fn backward() {
        let l = list(&[1, 2, 3]);
        assert_eq!(l.iter().rev().collect::<Vec<_>>(), vec![3, 2, 1]);
    }

    #[test]
    fn both_ends_meet() {
        let l = list(&[1, 2, 3, 4, 5]);
        let mut it = l.iter();
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next_back(), Some(5));
        assert_eq!(it.next(), Some(2));
        assert_eq!(it.next_back(), Some(4));
        assert_eq!(it.len(), 1);
        assert_eq!(it.next_back(), Some(3));
        assert_eq!(it.next(), None);
        assert_eq!(it.next_back(), None);
    }

    #[test]
    fn empty() {
        let l = DigitList::with_radix(Radix::Binary);
        assert_eq!(l.iter().next(), None);
        assert_eq!(l.iter().next_back(), None);
    }

    #[test]
    fn follows_rotation() {
        let mut l = list(&[1, 2, 3]);
        l.shift_left();
        assert_eq!((&l).into_iter().collect::<Vec<_>>(), vec![2, 3, 1]);
    }
}
