// Tests for the value codec, included by codec.rs

mod fold_digits {
    use super::*;

    macro_rules! impl_case {
        ($radix:ident : [ $($d:literal),* ] => $expected:literal) => {
            paste! {
                #[test]
                fn [< case_ $radix _ $expected >]() {
                    let value = fold_digits(Radix::$radix, vec![ $($d),* ]);
                    assert_eq!(value, BigUint::from($expected as u64));
                }
            }
        };
    }

    impl_case!(Decimal: [1, 2, 3] => 123);
    impl_case!(Decimal: [0, 0, 7] => 7);
    impl_case!(Binary: [1, 0, 1, 1] => 11);
    impl_case!(Ternary: [2, 1, 0] => 21);
    impl_case!(Octal: [7, 7, 7] => 511);
    impl_case!(Hexadecimal: [15, 15] => 255);
    impl_case!(Hexadecimal: [1, 0, 0, 0, 0] => 65536);

    #[test]
    fn empty_is_zero() {
        assert!(fold_digits(Radix::Octal, Vec::new()).is_zero());
    }
}

mod split_digits {
    use super::*;

    macro_rules! impl_case {
        ($radix:ident : $value:literal => [ $($d:literal),* ]) => {
            paste! {
                #[test]
                fn [< case_ $radix _ $value >]() {
                    let digits = split_digits(&BigUint::from($value as u64), Radix::$radix);
                    let expected: Vec<u8> = vec![ $($d),* ];
                    assert_eq!(digits, expected);
                }
            }
        };
    }

    impl_case!(Decimal: 0 => [0]);
    impl_case!(Binary: 0 => [0]);
    impl_case!(Decimal: 123 => [1, 2, 3]);
    impl_case!(Binary: 11 => [1, 0, 1, 1]);
    impl_case!(Ternary: 21 => [2, 1, 0]);
    impl_case!(Octal: 64 => [1, 0, 0]);
    impl_case!(Hexadecimal: 3404 => [13, 4, 12]);
    impl_case!(Hexadecimal: 65535 => [15, 15, 15, 15]);

    #[test]
    fn large_value_round_trips() {
        let value = BigUint::from_str_radix("340282366920938463463374607431768211457", 10).unwrap();
        for &radix in crate::context::SUPPORTED_RADIXES.iter() {
            let digits = split_digits(&value, radix);
            assert!(digits.iter().all(|&d| radix.is_valid_digit(d)));
            assert_ne!(digits[0], 0);
            assert_eq!(fold_digits(radix, digits), value);
        }
    }
}

mod parse_decimal {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $input:literal => $expected:literal) => {
            #[test]
            fn $name() {
                let value = parse_decimal($input).unwrap();
                assert_eq!(format_decimal(&value), $expected);
            }
        };
        ($name:ident: $input:literal => Err($err:pat)) => {
            #[test]
            fn $name() {
                let result = parse_decimal($input);
                assert!(matches!(result, Err($err)), "{:?}", result);
            }
        };
    }

    impl_case!(case_123: "123" => "123");
    impl_case!(case_0: "0" => "0");
    impl_case!(case_000: "000" => "0");
    impl_case!(case_00120: "00120" => "120");
    impl_case!(case_padded: "  42\n" => "42");
    impl_case!(case_large: "98765432109876543210987654321" => "98765432109876543210987654321");

    impl_case!(case_empty: "" => Err(ParseDigitListError::Empty));
    impl_case!(case_blank: "   " => Err(ParseDigitListError::Empty));
    impl_case!(case_negative: "-12" => Err(ParseDigitListError::Negative));
    impl_case!(case_plus: "+12" => Err(ParseDigitListError::InvalidCharacter('+')));
    impl_case!(case_decimal_point: "1.5" => Err(ParseDigitListError::InvalidCharacter('.')));
    impl_case!(case_underscore: "1_000" => Err(ParseDigitListError::InvalidCharacter('_')));
    impl_case!(case_hex: "1F" => Err(ParseDigitListError::InvalidCharacter('F')));
    impl_case!(case_inner_space: "1 2" => Err(ParseDigitListError::InvalidCharacter(' ')));
}
