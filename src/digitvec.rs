//! Flat digit vectors (and slices) of a given radix
//!
//! These are the contiguous counterparts of [`DigitList`]: a growable
//! buffer used to stage digits before they are linked into a fresh ring,
//! and a borrowed slice that lets plain `[u8]` data take part in value
//! comparison and multiplication.
//!

use crate::stdlib::boxed::Box;
use crate::stdlib::Vec;

use crate::context::Radix;
use crate::sequence::DigitSequence;
use crate::DigitList;


/// Append-only buffer of digits, most significant first
#[derive(Clone, Debug)]
pub(crate) struct DigitBuffer {
    radix: Radix,
    digits: Vec<u8>,
}

impl DigitBuffer {
    /// Create new buffer with capacity
    pub fn with_capacity(radix: Radix, n: usize) -> Self {
        Self::from_vec(radix, Vec::with_capacity(n))
    }

    /// Construct from vector of digits
    pub fn from_vec(radix: Radix, digits: Vec<u8>) -> Self {
        Self {
            radix: radix,
            digits: digits,
        }
    }

    pub fn push(&mut self, digit: u8) {
        self.digits.push(digit);
    }

    pub fn len(&self) -> usize {
        self.digits.len()
    }

    /// Link the buffered digits into a new list, skipping any digit
    /// invalid for the radix
    pub fn into_digit_list(self) -> DigitList {
        let mut list = DigitList::with_capacity(self.radix, self.len());
        list.add_all(self.digits);
        list
    }
}


/// Borrowed digits (most significant first) paired with their radix
///
/// ```
/// use digitring::{DigitList, DigitSlice, Radix};
///
/// let digits = [1, 0, 1, 0];
/// let slice = DigitSlice::new(Radix::Binary, &digits);
/// assert_eq!(DigitList::from_decimal_str("10"), slice);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct DigitSlice<'a> {
    radix: Radix,
    digits: &'a [u8],
}

impl<'a> DigitSlice<'a> {
    /// Wrap slice of digits with given radix
    ///
    /// This does no validation, so the digits may be outside the bounds
    /// of the radix and may have leading zeros.
    ///
    pub fn new(radix: Radix, digits: &'a [u8]) -> Self {
        Self {
            radix: radix,
            digits: digits,
        }
    }

    /// The wrapped digits
    pub fn as_slice(&self) -> &'a [u8] {
        self.digits
    }
}

impl DigitSequence for DigitSlice<'_> {
    fn radix(&self) -> Radix {
        self.radix
    }

    fn len(&self) -> usize {
        self.digits.len()
    }

    fn digits(&self) -> Box<dyn Iterator<Item = u8> + '_> {
        Box::new(self.digits.iter().copied())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use num_bigint::BigUint;

    #[test]
    fn buffer_into_list() {
        let mut buffer = DigitBuffer::with_capacity(Radix::Octal, 3);
        buffer.push(7);
        buffer.push(0);
        buffer.push(3);
        assert_eq!(buffer.len(), 3);

        let list = buffer.into_digit_list();
        assert_eq!(list.radix(), Radix::Octal);
        assert_eq!(list.to_vec(), vec![7, 0, 3]);
    }

    #[test]
    fn buffer_skips_invalid_digits() {
        let buffer = DigitBuffer::from_vec(Radix::Binary, vec![1, 2, 0, 1]);
        let list = buffer.into_digit_list();
        assert_eq!(list.to_vec(), vec![1, 0, 1]);
    }

    #[test]
    fn slice_value() {
        let digits = [1, 15];
        let slice = DigitSlice::new(Radix::Hexadecimal, &digits);
        assert_eq!(slice.len(), 2);
        assert!(!slice.is_empty());
        assert_eq!(slice.as_slice(), &[1, 15]);
        assert_eq!(slice.to_biguint(), BigUint::from(31u32));
    }

    #[test]
    fn empty_slice_is_zero() {
        let slice = DigitSlice::new(Radix::Decimal, &[]);
        assert!(slice.is_empty());
        assert_eq!(slice.to_biguint(), BigUint::from(0u32));
    }
}
