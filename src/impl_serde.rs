//!
//! Support for serde implementations
//!
//! Lists serialize as their canonical decimal text; the radix is not
//! part of the serialized form. Deserialized lists use the main radix
//! of the default context.
//!
use crate::*;
use serde::{de, ser};
use stdlib::str::FromStr;

impl ser::Serialize for DigitList {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: ser::Serializer,
    {
        serializer.serialize_str(&self.to_decimal_string())
    }
}

/// Used by SerDe to construct a DigitList
struct DigitListVisitor;

impl<'de> de::Visitor<'de> for DigitListVisitor {
    type Value = DigitList;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write!(formatter, "a non-negative integer or decimal string")
    }

    fn visit_str<E>(self, value: &str) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        DigitList::from_str(value).map_err(E::custom)
    }

    fn visit_u64<E>(self, value: u64) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        Ok(DigitList::from(value))
    }

    fn visit_u128<E>(self, value: u128) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        Ok(DigitList::from(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<DigitList, E>
    where
        E: de::Error,
    {
        u64::try_from(value)
            .map(DigitList::from)
            .map_err(|_| E::invalid_value(de::Unexpected::Signed(value), &self))
    }
}

impl<'de> de::Deserialize<'de> for DigitList {
    fn deserialize<D>(d: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        d.deserialize_any(DigitListVisitor)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use paste::paste;

    use serde_test::{
        Token, assert_ser_tokens, assert_de_tokens, assert_de_tokens_error
    };

    mod serialize_decimal_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $radix:ident $input:literal => $output:literal) => {
                #[test]
                fn $name() {
                    let list = DigitList::from_decimal_str_in(Radix::$radix, $input);
                    assert_ser_tokens(&list, &[Token::Str($output)]);
                }
            }
        }

        impl_case!(case_decimal_123: Decimal "123" => "123");
        impl_case!(case_hex_255: Hexadecimal "255" => "255");
        impl_case!(case_binary_3404: Binary "3404" => "3404");
        impl_case!(case_leading_zeros: Octal "0007" => "7");
        impl_case!(case_zero: Ternary "0" => "0");
    }

    #[test]
    fn serialize_empty_is_zero() {
        let list = DigitList::with_radix(Radix::Decimal);
        assert_ser_tokens(&list, &[Token::Str("0")]);
    }

    mod deserialize_str {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $input:literal => $digits:literal) => {
                paste! {
                    #[test]
                    fn [< $name _str >]() {
                        let expected = DigitList::from_decimal_str($input);
                        assert_de_tokens(&expected, &[Token::Str($input)]);
                    }

                    #[test]
                    fn [< $name _digits >]() {
                        let list: DigitList = serde_json::from_str(concat!("\"", $input, "\"")).unwrap();
                        assert_eq!(list.radix(), Context::default().main_radix());
                        assert_eq!(list.to_radix(Radix::Hexadecimal).to_string(), $digits);
                    }
                }
            }
        }

        impl_case!(case_0: "0" => "0");
        impl_case!(case_255: "255" => "FF");
        impl_case!(case_3404: "3404" => "D4C");
    }

    mod deserialize_int {
        use super::*;

        macro_rules! impl_case {
            ($name:ident : $token:ident ( $value:literal )) => {
                #[test]
                fn $name() {
                    let expected = DigitList::from_decimal_str(stringify!($value));
                    assert_de_tokens(&expected, &[Token::$token($value)]);
                }
            }
        }

        impl_case!(case_u8: U8(200));
        impl_case!(case_u32: U32(3404));
        impl_case!(case_u64: U64(18446744073709551615));
        impl_case!(case_i64: I64(42));
    }

    #[test]
    fn deserialize_negative_fails() {
        assert_de_tokens_error::<DigitList>(
            &[Token::I64(-1)],
            "invalid value: integer `-1`, expected a non-negative integer or decimal string",
        );
    }

    #[test]
    fn deserialize_malformed_str_fails() {
        assert_de_tokens_error::<DigitList>(
            &[Token::Str("12a")],
            "Invalid decimal digit 'a'",
        );
    }

    #[test]
    fn json_round_trip() {
        let list = DigitList::from_decimal_str_in(Radix::Ternary, "123456789012345678901234567890");
        let json = serde_json::to_string(&list).unwrap();
        assert_eq!(json, "\"123456789012345678901234567890\"");
        let back: DigitList = serde_json::from_str(&json).unwrap();
        assert_eq!(back, list);
        assert_eq!(back.radix(), Context::default().main_radix());
    }
}
