use crate::*;
use stdlib::str::FromStr;

impl FromStr for DigitList {
    type Err = ParseDigitListError;

    /// Strict counterpart of [`DigitList::from_decimal_str`]: the text
    /// must be an unsigned decimal numeral (surrounding whitespace is
    /// ignored). The list uses the main radix of the default context.
    #[inline]
    fn from_str(s: &str) -> Result<DigitList, ParseDigitListError> {
        let value = codec::parse_decimal(s)?;
        Ok(DigitList::from_biguint_in(Context::default().main_radix(), &value))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $decimal:literal) => {
            #[test]
            fn $name() {
                let list = DigitList::from_str($input).unwrap();
                assert_eq!(list.to_decimal_string(), $decimal);
                assert_eq!(list.radix(), Context::default().main_radix());
                assert_eq!(list, DigitList::from_decimal_str($input));
            }
        };
    }

    impl_case!(case_0: "0" => "0");
    impl_case!(case_123: "123" => "123");
    impl_case!(case_0123: "0123" => "123");
    impl_case!(case_whitespace: " 3404 " => "3404");
    impl_case!(case_large: "123456789012345678901234567890" => "123456789012345678901234567890");
}


#[cfg(test)]
mod test_invalid {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $exp:literal) => {
            #[test]
            #[should_panic(expected = $exp)]
            fn $name() {
                DigitList::from_str($input).unwrap();
            }
        };
    }

    impl_case!(case_bad_string_empty : "" => "Empty");
    impl_case!(case_bad_string_blank : "  " => "Empty");
    impl_case!(case_bad_string_negative : "-5" => "Negative");
    impl_case!(case_bad_string_hello : "hello" => "InvalidCharacter");
    impl_case!(case_bad_string_decimal_point : "12.5" => "InvalidCharacter");
    impl_case!(case_bad_string_exponent : "1e5" => "InvalidCharacter");
    impl_case!(case_bad_string_hex : "0xCafeBeef" => "InvalidCharacter");

    #[test]
    fn lenient_parse_is_empty() {
        for input in ["", "-5", "hello", "12.5"].iter() {
            assert!(DigitList::from_decimal_str(input).is_empty(), "{}", input);
        }
    }
}
