//! The digit-sequence capability
//!
//! Value equality and multiplication accept any type that can report its
//! radix and yield its digits most-significant first; they do not need a
//! [`DigitList`](crate::DigitList).
//!

use crate::stdlib::boxed::Box;
use num_bigint::BigUint;

use crate::codec;
use crate::context::Radix;


/// Ordered digits of a non-negative integer in some radix
pub trait DigitSequence {
    /// Radix the digits are expressed in
    fn radix(&self) -> Radix;

    /// Number of digits
    fn len(&self) -> usize;

    /// True if there are no digits
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Digits, most significant first
    fn digits(&self) -> Box<dyn Iterator<Item = u8> + '_>;

    /// The integer value of the digits (zero for an empty sequence)
    fn to_biguint(&self) -> BigUint {
        codec::fold_digits(self.radix(), self.digits())
    }
}

impl<S: DigitSequence + ?Sized> DigitSequence for &S {
    fn radix(&self) -> Radix {
        (**self).radix()
    }

    fn len(&self) -> usize {
        (**self).len()
    }

    fn digits(&self) -> Box<dyn Iterator<Item = u8> + '_> {
        (**self).digits()
    }

    fn to_biguint(&self) -> BigUint {
        (**self).to_biguint()
    }
}
