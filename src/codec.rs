//! Conversion between digit sequences, big integers and decimal text
//!
//! A digit list never does arithmetic itself. Values travel through a
//! [`BigUint`]: digits are folded into an integer in their radix, and an
//! integer is split back into digits by repeated division by the radix.
//!

use crate::stdlib::Vec;

use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{Num, ToPrimitive, Zero};

use crate::context::Radix;
use crate::ParseDigitListError;


/// Fold digits (most significant first) into an integer:
/// `acc = acc * radix + digit`
pub(crate) fn fold_digits<I>(radix: Radix, digits: I) -> BigUint
where
    I: IntoIterator<Item = u8>,
{
    let radix = u32::from(radix);
    let mut acc = BigUint::zero();
    for digit in digits {
        acc *= radix;
        acc += u32::from(digit);
    }
    acc
}

/// Split integer into digits of the given radix, most significant first
///
/// Zero is the single digit `[0]`.
///
pub(crate) fn split_digits(value: &BigUint, radix: Radix) -> Vec<u8> {
    if value.is_zero() {
        return vec![0];
    }

    let divisor = BigUint::from(radix.value());
    let mut remaining = value.clone();
    let mut digits = Vec::new();

    while !remaining.is_zero() {
        let (quotient, rem) = remaining.div_rem(&divisor);
        // remainder is below the radix, so always fits
        digits.push(rem.to_u8().unwrap_or_default());
        remaining = quotient;
    }

    digits.reverse();
    digits
}

/// Parse unsigned decimal numeral, ignoring surrounding whitespace
pub(crate) fn parse_decimal(text: &str) -> Result<BigUint, ParseDigitListError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ParseDigitListError::Empty);
    }
    if text.starts_with('-') {
        return Err(ParseDigitListError::Negative);
    }
    if let Some(c) = text.chars().find(|c| !c.is_ascii_digit()) {
        return Err(ParseDigitListError::InvalidCharacter(c));
    }
    Ok(BigUint::from_str_radix(text, 10)?)
}

/// Canonical decimal text of integer (no sign, no leading zeros)
#[inline]
pub(crate) fn format_decimal(value: &BigUint) -> crate::stdlib::string::String {
    value.to_str_radix(10)
}


#[cfg(test)]
#[allow(non_snake_case)]
mod test {
    use super::*;
    use paste::paste;

    include!("codec.tests.rs");
}
