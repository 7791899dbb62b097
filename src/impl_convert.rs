//! Code for implementing From/To DigitLists
//!
//! Conversions from integers produce lists in the main radix of the
//! default [`Context`](crate::Context).

use crate::*;


macro_rules! impl_from_int_primitive {
    ($t:ty) => {
        impl From<$t> for DigitList {
            fn from(n: $t) -> Self {
                DigitList::from(BigUint::from(n))
            }
        }

        impl From<&$t> for DigitList {
            fn from(n: &$t) -> Self {
                DigitList::from(BigUint::from(*n))
            }
        }
    };
}

impl_from_int_primitive!(u8);
impl_from_int_primitive!(u16);
impl_from_int_primitive!(u32);
impl_from_int_primitive!(u64);
impl_from_int_primitive!(u128);
impl_from_int_primitive!(usize);

impl From<&BigUint> for DigitList {
    fn from(n: &BigUint) -> Self {
        DigitList::from_biguint_in(Context::default().main_radix(), n)
    }
}

impl From<BigUint> for DigitList {
    fn from(n: BigUint) -> Self {
        DigitList::from(&n)
    }
}

impl From<&DigitList> for BigUint {
    fn from(list: &DigitList) -> Self {
        list.to_biguint()
    }
}

impl From<DigitList> for BigUint {
    fn from(list: DigitList) -> Self {
        list.to_biguint()
    }
}

impl From<&DigitList> for Vec<u8> {
    fn from(list: &DigitList) -> Self {
        list.to_vec()
    }
}


#[cfg(test)]
mod test {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $t:ty = $value:literal) => {
            #[test]
            fn $name() {
                let n: $t = $value;
                let list = DigitList::from(n);
                assert_eq!(list.radix(), Context::default().main_radix());
                assert_eq!(list.to_decimal_string(), stringify!($value));
                assert_eq!(DigitList::from(&n), list);
            }
        };
    }

    impl_case!(case_u8_0: u8 = 0);
    impl_case!(case_u8_255: u8 = 255);
    impl_case!(case_u16: u16 = 3404);
    impl_case!(case_u32: u32 = 4294967295);
    impl_case!(case_u64: u64 = 18446744073709551615);
    impl_case!(case_u128: u128 = 340282366920938463463374607431768211455);
    impl_case!(case_usize: usize = 65536);

    #[test]
    fn biguint_round_trip() {
        let value = BigUint::from(1u8) << 200;
        let list = DigitList::from(&value);
        assert_eq!(BigUint::from(&list), value);
        assert_eq!(BigUint::from(list), value);
    }

    #[test]
    fn into_vec() {
        let list = DigitList::from_decimal_str_in(Radix::Octal, "64");
        let digits: Vec<u8> = (&list).into();
        assert_eq!(digits, vec![1, 0, 0]);
    }
}
