// \file src/context.rs

//! A `Context` object is the base-selection policy of the crate.
//!
//! Every digit list stores its digits in one [`Radix`]; which radix a
//! fresh list gets, and which radix [`DigitList::change_scale`] converts
//! into, is decided by the context's radix table and record-book number.
//!
//! [`DigitList::change_scale`]: crate::DigitList::change_scale

use crate::stdlib::convert::TryFrom;
use crate::stdlib::fmt;
use crate::DigitListError;

// const DEFAULT_RECORD_BOOK_NUMBER: u32 = ${RUST_DIGITRING_RECORD_BOOK_NUMBER} or 3404;
include!(concat!(env!("OUT_DIR"), "/default_record_book_number.rs"));

/// Radixes a digit list may be configured with, in policy order
pub const SUPPORTED_RADIXES: [Radix; 5] = [
    Radix::Binary,
    Radix::Ternary,
    Radix::Octal,
    Radix::Decimal,
    Radix::Hexadecimal,
];

/// Numeric base of the digits stored in a list
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Radix {
    /// Base 2
    Binary,
    /// Base 3
    Ternary,
    /// Base 8
    Octal,
    /// Base 10
    Decimal,
    /// Base 16, digits above nine render as `A`-`F`
    Hexadecimal,
}

impl Radix {
    /// The integer value of this radix
    pub const fn value(self) -> u8 {
        match self {
            Radix::Binary => 2,
            Radix::Ternary => 3,
            Radix::Octal => 8,
            Radix::Decimal => 10,
            Radix::Hexadecimal => 16,
        }
    }

    /// True if `digit` lies in `[0, radix)`
    #[inline]
    pub const fn is_valid_digit(self, digit: u8) -> bool {
        digit < self.value()
    }

    /// Look up the radix with the given integer value
    pub fn from_value(value: u32) -> Option<Radix> {
        SUPPORTED_RADIXES.iter().copied().find(|r| u32::from(r.value()) == value)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> u32 {
        radix.value().into()
    }
}

impl TryFrom<u32> for Radix {
    type Error = DigitListError;

    fn try_from(value: u32) -> Result<Radix, DigitListError> {
        Radix::from_value(value).ok_or(DigitListError::UnsupportedRadix(value))
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.value(), f)
    }
}


/// Base-selection policy
///
/// The record-book number indexes the radix table: the *main* radix
/// is `radixes[n % 5]` and the *additional* radix is the one after it,
/// wrapping around.
///
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub struct Context {
    /// Identifier selecting the radixes from the table
    pub record_book_number: u32,

    /// Radix table, indexed by the record-book number
    pub radixes: [Radix; 5],
}

impl Default for Context {
    fn default() -> Context {
        Context {
            record_book_number: DEFAULT_RECORD_BOOK_NUMBER,
            radixes: SUPPORTED_RADIXES,
        }
    }
}

impl Context {
    /// Context with the standard radix table and given record-book number
    pub const fn new(record_book_number: u32) -> Context {
        Context {
            record_book_number: record_book_number,
            radixes: SUPPORTED_RADIXES,
        }
    }

    /// Return copy of context with a different radix table
    pub const fn with_radixes(self, radixes: [Radix; 5]) -> Context {
        Context {
            record_book_number: self.record_book_number,
            radixes: radixes,
        }
    }

    fn table_index(&self) -> usize {
        (self.record_book_number % self.radixes.len() as u32) as usize
    }

    /// Radix of lists built from decimal text
    pub fn main_radix(&self) -> Radix {
        self.radixes[self.table_index()]
    }

    /// Radix targeted by [`DigitList::change_scale`](crate::DigitList::change_scale)
    pub fn additional_radix(&self) -> Radix {
        self.radixes[(self.table_index() + 1) % self.radixes.len()]
    }
}


#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn default_record_book_number() {
        let ctx = Context::default();
        assert_eq!(ctx.record_book_number, DEFAULT_RECORD_BOOK_NUMBER);
        assert_eq!(ctx.radixes, SUPPORTED_RADIXES);
    }

    macro_rules! impl_case {
        ($name:ident: $number:literal => $main:ident, $additional:ident) => {
            #[test]
            fn $name() {
                let ctx = Context::new($number);
                assert_eq!(ctx.main_radix(), Radix::$main);
                assert_eq!(ctx.additional_radix(), Radix::$additional);
            }
        };
    }

    impl_case!(case_3400: 3400 => Binary, Ternary);
    impl_case!(case_3401: 3401 => Ternary, Octal);
    impl_case!(case_3402: 3402 => Octal, Decimal);
    impl_case!(case_3403: 3403 => Decimal, Hexadecimal);
    impl_case!(case_3404: 3404 => Hexadecimal, Binary);
    impl_case!(case_0: 0 => Binary, Ternary);

    #[test]
    fn custom_radix_table() {
        let table = [
            Radix::Decimal,
            Radix::Octal,
            Radix::Binary,
            Radix::Hexadecimal,
            Radix::Ternary,
        ];
        let ctx = Context::new(4).with_radixes(table);
        assert_eq!(ctx.main_radix(), Radix::Ternary);
        assert_eq!(ctx.additional_radix(), Radix::Decimal);
    }

    #[test]
    fn radix_from_value() {
        for radix in SUPPORTED_RADIXES.iter() {
            assert_eq!(Radix::try_from(u32::from(*radix)), Ok(*radix));
        }
        assert_eq!(Radix::try_from(7), Err(DigitListError::UnsupportedRadix(7)));
        assert_eq!(Radix::from_value(36), None);
    }

    #[test]
    fn digit_validity() {
        assert!(Radix::Binary.is_valid_digit(1));
        assert!(!Radix::Binary.is_valid_digit(2));
        assert!(Radix::Hexadecimal.is_valid_digit(15));
        assert!(!Radix::Hexadecimal.is_valid_digit(16));
        assert!(!Radix::Decimal.is_valid_digit(u8::MAX));
    }
}
