// Copyright 2024 The digitring developers
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! A Digit Ring
//!
//! `DigitList` stores a non-negative integer of any size as a sequence
//! of digits in a fixed radix (2, 3, 8, 10 or 16). The digits are kept in
//! a circular doubly-linked list, so the list behaves like an ordinary
//! indexable container (get, set, insert, remove, sort, rotate) while
//! still denoting a number.
//!
//! Internally every node lives in an arena owned by the list and refers to
//! its neighbours through handles. Conversions to and from numbers go
//! through a `BigUint`: the digits are folded into an integer, or an
//! integer is divided down into digits.
//!
//! Which radix a list uses is decided by a [`Context`]; the default
//! context is configured at build time through the
//! `RUST_DIGITRING_RECORD_BOOK_NUMBER` environment variable.
//!
//! # Example
//!
//! ```
//! use digitring::{DigitList, Radix};
//!
//! let n = DigitList::from_decimal_str_in(Radix::Decimal, "123");
//! assert_eq!(n.to_string(), "123");
//! assert_eq!(n.get(0), Ok(1));
//!
//! let hex = n.to_radix(Radix::Hexadecimal);
//! assert_eq!(hex.to_string(), "7B");
//! assert_eq!(hex, n);
//!
//! let square = &n * &n;
//! assert_eq!(square.to_decimal_string(), "15129");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![allow(clippy::style)]
#![allow(clippy::needless_return)]
#![allow(clippy::redundant_field_names)]
#![allow(clippy::len_without_is_empty)]


pub extern crate num_bigint;
pub extern crate num_traits;
extern crate num_integer;

#[cfg(feature = "serde")]
extern crate serde;

#[cfg(feature = "std")]
include!("./with_std.rs");

#[cfg(not(feature = "std"))]
include!("./without_std.rs");

// make available some standard items
use self::stdlib::fmt;
use self::stdlib::string::String;
use self::stdlib::Vec;

use num_bigint::{BigUint, ParseBigIntError};

#[macro_use]
mod macros;

#[cfg(test)]
extern crate paste;

// Node arena and splice primitives
mod ring;
use ring::RingStore;

// Mathematical context
pub mod context;
pub use context::{Context, Radix, SUPPORTED_RADIXES};

mod codec;

mod sequence;
pub use sequence::DigitSequence;

mod digitvec;
pub use digitvec::DigitSlice;
use digitvec::DigitBuffer;

mod cursor;
pub use cursor::Cursor;

mod iter;
pub use iter::Iter;

// From<T>, To<T> impls
mod impl_convert;
// PartialEq, Ord, Hash
mod impl_cmp;
// Display, Debug
mod impl_fmt;
mod impl_trait_from_str;
// Mul<T>
mod impl_ops_mul;

#[cfg(feature = "serde")]
mod impl_serde;

// Load/save decimal text
#[cfg(feature = "std")]
mod persist;


/// Errors of positional access and digit validation
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DigitListError {
    /// Index outside the valid bound of the list
    IndexOutOfRange { index: usize, len: usize },
    /// Digit not in `[0, radix)`
    InvalidDigit { digit: u8, radix: Radix },
    /// Cursor edit without a preceding move
    IllegalState,
    /// Cursor moved past either end
    NoSuchElement,
    /// Integer is not one of the supported radixes
    UnsupportedRadix(u32),
}

impl fmt::Display for DigitListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use DigitListError::*;

        match *self {
            IndexOutOfRange { index, len } => {
                write!(f, "Index: {} size: {}", index, len)
            }
            InvalidDigit { digit, radix } => {
                write!(f, "Invalid digit {} for base {}", digit, radix)
            }
            IllegalState => f.write_str("Cursor has not been moved since last edit"),
            NoSuchElement => f.write_str("No element in that direction"),
            UnsupportedRadix(n) => write!(f, "Unsupported radix {}", n),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DigitListError {}


/// Reasons decimal text was rejected
#[derive(Debug, PartialEq, Eq)]
pub enum ParseDigitListError {
    ParseBigInt(ParseBigIntError),
    Empty,
    Negative,
    InvalidCharacter(char),
}

impl fmt::Display for ParseDigitListError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        use ParseDigitListError::*;

        match *self {
            ParseBigInt(ref e) => fmt::Display::fmt(e, f),
            Empty => f.write_str("Failed to parse empty string"),
            Negative => f.write_str("Negative numbers are not representable"),
            InvalidCharacter(c) => write!(f, "Invalid decimal digit {:?}", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseDigitListError {}

impl From<ParseBigIntError> for ParseDigitListError {
    fn from(err: ParseBigIntError) -> ParseDigitListError {
        ParseDigitListError::ParseBigInt(err)
    }
}


/// A non-negative integer stored as a ring of digits
///
/// Index `0` is the most significant digit. The radix is fixed for the
/// lifetime of the list.
///
/// A list with no digits has the value zero.
///
#[derive(Clone)]
pub struct DigitList {
    radix: Radix,
    ring: RingStore,
}

impl Default for DigitList {
    #[inline]
    fn default() -> DigitList {
        DigitList::new()
    }
}

impl DigitList {
    /// Empty list in the main radix of the default context
    pub fn new() -> DigitList {
        DigitList::with_radix(Context::default().main_radix())
    }

    /// Empty list in the given radix
    pub fn with_radix(radix: Radix) -> DigitList {
        DigitList {
            radix: radix,
            ring: RingStore::new(),
        }
    }

    /// Empty list with room for `n` digits
    pub fn with_capacity(radix: Radix, n: usize) -> DigitList {
        DigitList {
            radix: radix,
            ring: RingStore::with_capacity(n),
        }
    }

    /// List in the given radix holding `value`
    pub fn from_biguint_in(radix: Radix, value: &BigUint) -> DigitList {
        let mut list = DigitList::with_radix(radix);
        list.populate_from_biguint(value);
        list
    }

    /// List in the main radix holding the value of decimal `text`
    ///
    /// Text that is empty, signed or contains anything but decimal digits
    /// (after trimming whitespace) produces an empty list rather than an
    /// error; use [`str::parse`] to observe the failure.
    ///
    pub fn from_decimal_str(text: &str) -> DigitList {
        DigitList::from_decimal_str_in(Context::default().main_radix(), text)
    }

    /// Like [`DigitList::from_decimal_str`], in the given radix
    pub fn from_decimal_str_in(radix: Radix, text: &str) -> DigitList {
        let mut list = DigitList::with_radix(radix);
        list.load_decimal_str(text);
        list
    }

    /// The radix of every digit in this list
    #[inline]
    pub fn radix(&self) -> Radix {
        self.radix
    }

    /// Number of digits
    #[inline]
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Fail with `InvalidDigit` unless `digit` is in `[0, radix)`
    #[inline]
    fn check_digit(&self, digit: u8) -> Result<(), DigitListError> {
        if self.radix.is_valid_digit(digit) {
            Ok(())
        } else {
            Err(DigitListError::InvalidDigit { digit: digit, radix: self.radix })
        }
    }

    /// Fail with `IndexOutOfRange` unless `index <= len`
    #[inline]
    fn check_position(&self, index: usize) -> Result<(), DigitListError> {
        if index <= self.len() {
            Ok(())
        } else {
            Err(DigitListError::IndexOutOfRange { index: index, len: self.len() })
        }
    }

    /// Digit at `index`
    pub fn get(&self, index: usize) -> Result<u8, DigitListError> {
        let node = self.ring.node_at(index)?;
        Ok(self.ring.digit(node))
    }

    /// Replace digit at `index`, returning the previous digit
    pub fn set(&mut self, index: usize, digit: u8) -> Result<u8, DigitListError> {
        self.check_digit(digit)?;
        let node = self.ring.node_at(index)?;
        Ok(self.ring.replace(node, digit))
    }

    /// Append digit as the new least significant digit
    ///
    /// Returns false, leaving the list untouched, if the digit is invalid
    /// for the radix.
    ///
    pub fn push(&mut self, digit: u8) -> bool {
        if !self.radix.is_valid_digit(digit) {
            return false;
        }
        self.ring.link_last(digit);
        true
    }

    /// Insert digit so it ends up at position `index`
    pub fn insert(&mut self, index: usize, digit: u8) -> Result<(), DigitListError> {
        self.check_digit(digit)?;
        self.check_position(index)?;
        if index == self.len() {
            self.ring.link_last(digit);
        } else {
            let successor = self.ring.node_at(index)?;
            self.ring.link_before(digit, Some(successor));
        }
        Ok(())
    }

    /// Remove and return digit at `index`
    pub fn remove(&mut self, index: usize) -> Result<u8, DigitListError> {
        let node = self.ring.node_at(index)?;
        Ok(self.ring.unlink(node))
    }

    /// Remove first occurrence of `digit`, returning whether one was found
    pub fn remove_digit(&mut self, digit: u8) -> bool {
        let mut cursor = self.cursor();
        while let Ok(d) = cursor.next() {
            if d == digit {
                return cursor.remove().is_ok();
            }
        }
        false
    }

    /// Remove every digit
    pub fn clear(&mut self) {
        self.ring.clear();
    }

    /// Append every digit valid for the radix, skipping the rest
    ///
    /// Returns true if at least one digit was appended.
    ///
    pub fn add_all<I: IntoIterator<Item = u8>>(&mut self, digits: I) -> bool {
        let mut added = false;
        for digit in digits {
            added |= self.push(digit);
        }
        added
    }

    /// Insert digits, in order, starting at position `index`
    ///
    /// Digits invalid for the radix are skipped. Returns true if at least
    /// one digit was inserted; there is no indication of which digits were
    /// skipped.
    ///
    pub fn insert_all<I>(&mut self, index: usize, digits: I) -> Result<bool, DigitListError>
    where
        I: IntoIterator<Item = u8>,
    {
        self.check_position(index)?;
        let successor = if index == self.len() {
            None
        } else {
            Some(self.ring.node_at(index)?)
        };

        let mut added = false;
        for digit in digits {
            if self.radix.is_valid_digit(digit) {
                self.ring.link_before(digit, successor);
                added = true;
            }
        }
        Ok(added)
    }

    /// True if `digit` appears in the list
    #[inline]
    pub fn contains(&self, digit: u8) -> bool {
        self.index_of(digit).is_some()
    }

    /// True if every digit of `digits` appears in the list
    pub fn contains_all<I: IntoIterator<Item = u8>>(&self, digits: I) -> bool {
        digits.into_iter().all(|d| self.contains(d))
    }

    /// Position of first occurrence of `digit`
    pub fn index_of(&self, digit: u8) -> Option<usize> {
        self.iter().position(|d| d == digit)
    }

    /// Position of last occurrence of `digit`
    pub fn last_index_of(&self, digit: u8) -> Option<usize> {
        self.iter().rposition(|d| d == digit)
    }

    /// Remove every digit for which `keep` returns false
    ///
    /// Returns true if anything was removed.
    ///
    pub fn retain<F: FnMut(u8) -> bool>(&mut self, mut keep: F) -> bool {
        let mut modified = false;
        let mut cursor = self.cursor();
        while let Ok(digit) = cursor.next() {
            if !keep(digit) {
                modified |= cursor.remove().is_ok();
            }
        }
        modified
    }

    /// Remove every occurrence of every digit in `digits`
    pub fn remove_all(&mut self, digits: &[u8]) -> bool {
        self.retain(|d| !digits.contains(&d))
    }

    /// Remove every digit not in `digits`
    pub fn retain_all(&mut self, digits: &[u8]) -> bool {
        self.retain(|d| digits.contains(&d))
    }

    /// Exchange digits at positions `i` and `j`
    ///
    /// Returns false (and does nothing) if either index is out of range.
    ///
    pub fn swap(&mut self, i: usize, j: usize) -> bool {
        let (a, b) = match (self.ring.node_at(i), self.ring.node_at(j)) {
            (Ok(a), Ok(b)) => (a, b),
            _ => return false,
        };
        if a != b {
            let digit_a = self.ring.digit(a);
            let digit_b = self.ring.replace(b, digit_a);
            self.ring.replace(a, digit_b);
        }
        true
    }

    /// Copy of digits in positions `from..to`, as a new independent list
    pub fn sub_list(&self, from: usize, to: usize) -> Result<DigitList, DigitListError> {
        if to > self.len() || from > to {
            return Err(DigitListError::IndexOutOfRange { index: to.max(from), len: self.len() });
        }

        let mut buffer = DigitBuffer::with_capacity(self.radix, to - from);
        if from < to {
            let mut node = self.ring.node_at(from)?;
            for _ in from..to {
                buffer.push(self.ring.digit(node));
                node = self.ring.next(node);
            }
        }
        Ok(buffer.into_digit_list())
    }

    /// Sort digits, smallest first
    pub fn sort_ascending(&mut self) {
        self.sort_digits(false);
    }

    /// Sort digits, largest first
    pub fn sort_descending(&mut self) {
        self.sort_digits(true);
    }

    /// Rebuild the ring from scratch with the digits in sorted order
    fn sort_digits(&mut self, descending: bool) {
        if self.len() < 2 {
            return;
        }
        let mut digits = self.to_vec();
        digits.sort_unstable();
        if descending {
            digits.reverse();
        }
        self.ring.clear();
        self.add_all(digits);
    }

    /// Rotate digits one place towards the front (`[1,2,3]` -> `[2,3,1]`)
    pub fn shift_left(&mut self) {
        self.ring.rotate_forward();
    }

    /// Rotate digits one place towards the back (`[1,2,3]` -> `[3,1,2]`)
    pub fn shift_right(&mut self) {
        self.ring.rotate_backward();
    }

    /// Copy digits into a vector, most significant first
    pub fn to_vec(&self) -> Vec<u8> {
        let mut digits = Vec::with_capacity(self.len());
        digits.extend(self.iter());
        digits
    }

    /// Borrowing iterator over digits, most significant first
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(&self.ring)
    }

    /// Cursor positioned before the first digit
    pub fn cursor(&mut self) -> Cursor<'_> {
        Cursor::front(self)
    }

    /// Cursor positioned before digit `index` (`index == len` is the end)
    pub fn cursor_at(&mut self, index: usize) -> Result<Cursor<'_>, DigitListError> {
        Cursor::new(self, index)
    }

    /// Integer value of the digits in this list's radix
    pub fn to_biguint(&self) -> BigUint {
        codec::fold_digits(self.radix, self.iter())
    }

    /// Replace contents with the digits of `value`
    ///
    /// Zero becomes the single digit `0`.
    ///
    pub fn populate_from_biguint(&mut self, value: &BigUint) {
        self.ring.clear();
        self.add_all(codec::split_digits(value, self.radix));
    }

    /// Replace contents with the value of decimal `text`
    ///
    /// Malformed text leaves the list untouched.
    ///
    fn load_decimal_str(&mut self, text: &str) {
        match codec::parse_decimal(text) {
            Ok(value) => self.populate_from_biguint(&value),
            Err(err) => {
                tracing::debug!(error = %err, "ignoring malformed decimal text");
            }
        }
    }

    /// Value of this list as canonical decimal text (`"0"` when empty)
    pub fn to_decimal_string(&self) -> String {
        codec::format_decimal(&self.to_biguint())
    }

    /// Same value in a new list of the given radix
    pub fn to_radix(&self, radix: Radix) -> DigitList {
        DigitList::from_biguint_in(radix, &self.to_biguint())
    }

    /// Same value in the additional radix of the default context
    pub fn change_scale(&self) -> DigitList {
        self.change_scale_in(&Context::default())
    }

    /// Same value in the additional radix of `ctx`
    pub fn change_scale_in(&self, ctx: &Context) -> DigitList {
        self.to_radix(ctx.additional_radix())
    }

    /// Product of this list and `rhs`, in this list's radix
    ///
    /// A missing right-hand side yields an empty list.
    ///
    pub fn multiply<S: DigitSequence + ?Sized>(&self, rhs: Option<&S>) -> DigitList {
        match rhs {
            None => DigitList::with_radix(self.radix),
            Some(rhs) => {
                let product = self.to_biguint() * rhs.to_biguint();
                DigitList::from_biguint_in(self.radix, &product)
            }
        }
    }

    /// Record-book number of the default context
    pub fn record_book_number() -> u32 {
        Context::default().record_book_number
    }

    #[cfg(test)]
    fn check_invariants(&self) {
        self.ring.check_invariants();
        assert!(self.iter().all(|d| self.radix.is_valid_digit(d)));
    }
}

impl DigitSequence for DigitList {
    fn radix(&self) -> Radix {
        self.radix
    }

    fn len(&self) -> usize {
        self.ring.len()
    }

    fn digits(&self) -> stdlib::boxed::Box<dyn Iterator<Item = u8> + '_> {
        stdlib::boxed::Box::new(self.iter())
    }

    fn to_biguint(&self) -> BigUint {
        DigitList::to_biguint(self)
    }
}

impl<'a> IntoIterator for &'a DigitList {
    type Item = u8;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<u8> for DigitList {
    /// Appends digits valid for the radix, skipping the rest
    fn extend<I: IntoIterator<Item = u8>>(&mut self, digits: I) {
        self.add_all(digits);
    }
}

impl stdlib::iter::FromIterator<u8> for DigitList {
    /// Collects into the main radix, skipping invalid digits
    fn from_iter<I: IntoIterator<Item = u8>>(digits: I) -> DigitList {
        let mut list = DigitList::new();
        list.add_all(digits);
        list
    }
}



#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    include!("lib.tests.property-tests.rs");
}
