//! Implementation of std::fmt traits & other stringification functions
//!

use crate::*;
use stdlib::fmt::Write;


impl fmt::Display for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if f.width().is_none() {
            return write_digits(self.iter(), f);
        }
        let mut buf = String::with_capacity(self.len());
        write_digits(self.iter(), &mut buf)?;
        f.pad(&buf)
    }
}


impl fmt::Debug for DigitList {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "DigitList(\"{}\", radix={})", self, self.radix)
    }
}


/// Write digits as `0-9` then `A-Z`, no separators
fn write_digits<W: Write, I: IntoIterator<Item = u8>>(digits: I, w: &mut W) -> fmt::Result {
    for digit in digits {
        w.write_char(digit_to_char(digit))?;
    }
    Ok(())
}

/// Character for digit value (values >= 36 have no representation)
#[inline]
fn digit_to_char(digit: u8) -> char {
    match digit {
        0..=9 => (b'0' + digit) as char,
        10..=35 => (b'A' + (digit - 10)) as char,
        _ => '?',
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident : $radix:ident [ $($d:literal),* ] => $ex:literal) => {
            #[test]
            fn $name() {
                let mut n = DigitList::with_radix(Radix::$radix);
                n.add_all(vec![ $($d),* ]);
                assert_eq!(n.to_string(), $ex);
            }
        };
    }

    impl_case!(case_empty: Decimal [] => "");
    impl_case!(case_123: Decimal [1, 2, 3] => "123");
    impl_case!(case_binary: Binary [1, 0, 1, 1] => "1011");
    impl_case!(case_hex_1f: Hexadecimal [1, 15] => "1F");
    impl_case!(case_hex_all: Hexadecimal [0, 9, 10, 11, 12, 13, 14, 15] => "09ABCDEF");
    impl_case!(case_leading_zeros: Octal [0, 0, 7] => "007");

    #[test]
    fn digit_chars() {
        assert_eq!(digit_to_char(0), '0');
        assert_eq!(digit_to_char(9), '9');
        assert_eq!(digit_to_char(10), 'A');
        assert_eq!(digit_to_char(35), 'Z');
    }

    #[test]
    fn padding() {
        let n = DigitList::from_decimal_str_in(Radix::Decimal, "42");
        assert_eq!(format!("{:>5}", n), "   42");
        assert_eq!(format!("{:<4}", n), "42  ");
        assert_eq!(format!("{:*^6}", n), "**42**");
    }

    #[test]
    fn debug() {
        let n = DigitList::from_decimal_str_in(Radix::Hexadecimal, "255");
        assert_eq!(format!("{:?}", n), "DigitList(\"FF\", radix=16)");
    }

    #[test]
    fn display_after_rotation() {
        let mut n = DigitList::from_decimal_str_in(Radix::Decimal, "123");
        n.shift_right();
        assert_eq!(n.to_string(), "312");
    }
}
