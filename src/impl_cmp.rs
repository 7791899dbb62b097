//! Implementation of comparison operations
//!
//! Digit lists compare by the integer they denote, not by their digits:
//! lists in different radixes, or with leading zeros, may be equal. An
//! empty list denotes zero.
//!

use crate::*;

use stdlib::cmp::Ordering;
use stdlib::hash::{Hash, Hasher};


impl<S> PartialEq<S> for DigitList
where
    S: DigitSequence + ?Sized,
{
    fn eq(&self, rhs: &S) -> bool {
        if self.radix == rhs.radix() && self.len() == rhs.len() && self.iter().eq(rhs.digits()) {
            return true;
        }
        self.to_biguint() == rhs.to_biguint()
    }
}

impl Eq for DigitList {}

impl<S> PartialEq<S> for DigitSlice<'_>
where
    S: DigitSequence + ?Sized,
{
    fn eq(&self, rhs: &S) -> bool {
        if self.radix() == rhs.radix() && self.as_slice().iter().copied().eq(rhs.digits()) {
            return true;
        }
        self.to_biguint() == rhs.to_biguint()
    }
}

impl Eq for DigitSlice<'_> {}

impl Hash for DigitList {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_decimal_string().hash(state);
    }
}

impl PartialOrd for DigitList {
    #[inline]
    fn partial_cmp(&self, other: &DigitList) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for DigitList {
    fn cmp(&self, other: &DigitList) -> Ordering {
        self.to_biguint().cmp(&other.to_biguint())
    }
}


#[cfg(test)]
mod test {
    use super::*;
    use crate::stdlib::DefaultHasher;

    fn hash<T: Hash>(obj: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        obj.hash(&mut hasher);
        hasher.finish()
    }

    mod eq {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:ident $x:literal == $b:ident $y:literal) => {
                #[test]
                fn $name() {
                    let a = DigitList::from_decimal_str_in(Radix::$a, $x);
                    let b = DigitList::from_decimal_str_in(Radix::$b, $y);
                    assert_eq!(a, b);
                    assert_eq!(b, a);
                    assert_eq!(hash(&a), hash(&b));
                }
            };
            ($name:ident: $a:ident $x:literal != $b:ident $y:literal) => {
                #[test]
                fn $name() {
                    let a = DigitList::from_decimal_str_in(Radix::$a, $x);
                    let b = DigitList::from_decimal_str_in(Radix::$b, $y);
                    assert_ne!(a, b);
                    assert_ne!(b, a);
                }
            };
        }

        impl_case!(case_same_radix: Decimal "123" == Decimal "123");
        impl_case!(case_cross_radix: Decimal "255" == Hexadecimal "255");
        impl_case!(case_binary_ternary: Binary "1000" == Ternary "1000");
        impl_case!(case_leading_zeros: Octal "007" == Binary "7");
        impl_case!(case_zero: Decimal "0" == Hexadecimal "0");
        impl_case!(case_differ: Decimal "123" != Decimal "124");
        impl_case!(case_differ_cross_radix: Octal "8" != Binary "9");
    }

    #[test]
    fn leading_zero_digits_are_equal() {
        let mut a = DigitList::with_radix(Radix::Decimal);
        a.add_all(vec![0, 0, 4, 2]);
        let b = DigitList::from_decimal_str_in(Radix::Decimal, "42");
        assert_eq!(a, b);
        assert_eq!(hash(&a), hash(&b));
    }

    #[test]
    fn empty_equals_zero() {
        let empty = DigitList::with_radix(Radix::Decimal);
        let zero = DigitList::from_decimal_str_in(Radix::Binary, "0");
        assert_eq!(empty, zero);
        assert_eq!(hash(&empty), hash(&zero));
    }

    #[test]
    fn eq_digit_slice() {
        let list = DigitList::from_decimal_str_in(Radix::Decimal, "10");
        let digits = [1, 2];
        assert_eq!(list, DigitSlice::new(Radix::Octal, &digits));
        assert_ne!(list, DigitSlice::new(Radix::Octal, &digits[..1]));
        assert_eq!(list, DigitSlice::new(Radix::Ternary, &[1, 0, 1]));
    }

    mod slice_eq {
        use super::*;

        macro_rules! impl_case {
            ($name:ident: $a:ident [ $($x:literal),* ] == $b:ident [ $($y:literal),* ]) => {
                #[test]
                fn $name() {
                    let a = DigitSlice::new(Radix::$a, &[ $($x),* ]);
                    let b = DigitSlice::new(Radix::$b, &[ $($y),* ]);
                    assert_eq!(a, b);
                    assert_eq!(b, a);
                }
            };
            ($name:ident: $a:ident [ $($x:literal),* ] != $b:ident [ $($y:literal),* ]) => {
                #[test]
                fn $name() {
                    let a = DigitSlice::new(Radix::$a, &[ $($x),* ]);
                    let b = DigitSlice::new(Radix::$b, &[ $($y),* ]);
                    assert_ne!(a, b);
                    assert_ne!(b, a);
                }
            };
        }

        impl_case!(case_binary_decimal: Binary [1, 0] == Decimal [2]);
        impl_case!(case_hex_octal: Hexadecimal [15, 15] == Octal [3, 7, 7]);
        impl_case!(case_leading_zeros: Ternary [0, 0, 2] == Ternary [2]);
        impl_case!(case_empty_zero: Decimal [] == Binary [0]);
        impl_case!(case_differ: Binary [1, 1] != Decimal [2]);
    }

    #[test]
    fn slice_eq_list_both_ways() {
        let list = DigitList::from_decimal_str_in(Radix::Decimal, "2");
        let slice = DigitSlice::new(Radix::Binary, &[1, 0]);
        assert!(slice == list);
        assert!(list == slice);
        assert!(slice == &list);
        assert_ne!(DigitSlice::new(Radix::Binary, &[1, 1]), list);
    }

    #[test]
    fn eq_through_reference() {
        let a = DigitList::from_decimal_str_in(Radix::Decimal, "31");
        let b = DigitList::from_decimal_str_in(Radix::Hexadecimal, "31");
        let r: &DigitList = &b;
        assert!(a == r);
        assert!(a == *r);
    }

    #[test]
    fn ordering_by_value() {
        let small = DigitList::from_decimal_str_in(Radix::Hexadecimal, "99");
        let large = DigitList::from_decimal_str_in(Radix::Binary, "100");
        assert!(small < large);
        assert!(large > small);
        assert_eq!(small.cmp(&small.to_radix(Radix::Ternary)), Ordering::Equal);

        let mut lists = vec![
            DigitList::from_decimal_str_in(Radix::Octal, "300"),
            large.clone(),
            small.clone(),
        ];
        lists.sort();
        assert_eq!(lists[0], small);
        assert_eq!(lists[1], large);
        assert_eq!(lists[2].to_decimal_string(), "300");
    }
}
