// Tests for DigitList, included by lib.rs

mod scenarios {
    use super::*;

    #[test]
    fn construct_from_123() {
        let n = DigitList::from_decimal_str_in(Radix::Decimal, "123");
        assert_eq!(n.to_string(), "123");
        assert_eq!(n.len(), 3);
        assert_eq!(n.get(0), Ok(1));
    }

    #[test]
    fn construct_from_0() {
        let n = DigitList::from_decimal_str_in(Radix::Decimal, "0");
        assert_eq!(n.len(), 1);
        assert_eq!(n.get(0), Ok(0));
    }

    #[test]
    fn push_valid_then_invalid() {
        let mut n = DigitList::with_radix(Radix::Decimal);
        assert!(n.push(9));
        assert_eq!(n.len(), 1);
        assert_eq!(n.get(0), Ok(9));

        assert!(!n.push(10));
        assert_eq!(n.len(), 1);
    }

    #[test]
    fn rotations() {
        let mut n = digits!(Decimal [1, 2, 3]);
        n.shift_left();
        assert_eq!(n.to_string(), "231");

        let mut n = digits!(Decimal [1, 2, 3]);
        n.shift_right();
        assert_eq!(n.to_string(), "312");
        n.check_invariants();
    }

    #[test]
    fn sort_both_ways() {
        let mut n = digits!(Decimal [3, 1, 2]);
        n.sort_ascending();
        assert_digits_eq!(n, [1, 2, 3]);
        n.sort_descending();
        assert_digits_eq!(n, [3, 2, 1]);
    }

    #[test]
    fn sub_list_is_independent() {
        let n = digits!(Decimal [1, 2, 3, 4]);
        let mut sub = n.sub_list(1, 3).unwrap();
        assert_eq!(sub.to_string(), "23");
        assert_eq!(sub.radix(), Radix::Decimal);

        sub.set(0, 9).unwrap();
        assert_eq!(n.to_string(), "1234");
        assert_eq!(sub.to_string(), "93");
    }
}

mod construct {
    use super::*;

    macro_rules! impl_case {
        ($name:ident: $radix:ident $input:literal => [ $($d:literal),* ]) => {
            #[test]
            fn $name() {
                let n = DigitList::from_decimal_str_in(Radix::$radix, $input);
                assert_digits_eq!(n, [ $($d),* ]);
                assert_eq!(n.radix(), Radix::$radix);
            }
        };
    }

    impl_case!(case_decimal_123: Decimal "123" => [1, 2, 3]);
    impl_case!(case_binary_10: Binary "10" => [1, 0, 1, 0]);
    impl_case!(case_ternary_10: Ternary "10" => [1, 0, 1]);
    impl_case!(case_octal_64: Octal "64" => [1, 0, 0]);
    impl_case!(case_hex_3404: Hexadecimal "3404" => [13, 4, 12]);
    impl_case!(case_leading_zeros: Decimal "007" => [7]);
    impl_case!(case_whitespace: Decimal "\t42 \n" => [4, 2]);
    impl_case!(case_empty: Decimal "" => []);
    impl_case!(case_blank: Decimal "   " => []);
    impl_case!(case_negative: Decimal "-5" => []);
    impl_case!(case_plus: Decimal "+5" => []);
    impl_case!(case_letters: Decimal "12ab" => []);
    impl_case!(case_decimal_point: Decimal "1.5" => []);
    impl_case!(case_non_ascii_digit: Decimal "١٢" => []);

    #[test]
    fn default_uses_main_radix() {
        let ctx = Context::default();
        assert_eq!(DigitList::new().radix(), ctx.main_radix());
        assert_eq!(DigitList::default().radix(), ctx.main_radix());
        assert_eq!(DigitList::from_decimal_str("99").radix(), ctx.main_radix());
        assert!(DigitList::new().is_empty());
    }

    #[test]
    fn with_capacity_is_empty() {
        let n = DigitList::with_capacity(Radix::Octal, 16);
        assert!(n.is_empty());
        assert_eq!(n.radix(), Radix::Octal);
    }

    #[test]
    fn from_biguint_zero() {
        let n = DigitList::from_biguint_in(Radix::Binary, &BigUint::from(0u8));
        assert_digits_eq!(n, [0]);
    }

    #[test]
    fn collect_and_extend() {
        let mut n: DigitList = vec![1u8, 0, 1].into_iter().collect();
        assert_eq!(n.radix(), Context::default().main_radix());
        n.extend(vec![1, 200]);
        assert_digits_eq!(n, [1, 0, 1, 1]);
    }
}

mod access {
    use super::*;

    #[test]
    fn get_out_of_range() {
        let n = digits!(Decimal [1, 2]);
        assert_eq!(n.get(2), Err(DigitListError::IndexOutOfRange { index: 2, len: 2 }));
        let empty = DigitList::with_radix(Radix::Decimal);
        assert_eq!(empty.get(0), Err(DigitListError::IndexOutOfRange { index: 0, len: 0 }));
    }

    #[test]
    fn get_from_both_halves() {
        let n = DigitList::from_decimal_str_in(Radix::Decimal, "9876543210");
        for (i, expected) in (0..10).rev().enumerate() {
            assert_eq!(n.get(i), Ok(expected));
        }
    }

    #[test]
    fn set_returns_previous() {
        let mut n = digits!(Octal [1, 2, 3]);
        assert_eq!(n.set(1, 7), Ok(2));
        assert_digits_eq!(n, [1, 7, 3]);
    }

    #[test]
    fn set_rejects_invalid_digit_before_index() {
        let mut n = digits!(Octal [1, 2, 3]);
        assert_eq!(n.set(5, 8), Err(DigitListError::InvalidDigit { digit: 8, radix: Radix::Octal }));
        assert_eq!(n.set(5, 7), Err(DigitListError::IndexOutOfRange { index: 5, len: 3 }));
        assert_digits_eq!(n, [1, 2, 3]);
    }

    #[test]
    fn index_of_and_last_index_of() {
        let n = digits!(Decimal [5, 1, 5, 2]);
        assert_eq!(n.index_of(5), Some(0));
        assert_eq!(n.last_index_of(5), Some(2));
        assert_eq!(n.index_of(2), Some(3));
        assert_eq!(n.index_of(9), None);
        assert_eq!(n.last_index_of(9), None);
        assert!(n.contains(1));
        assert!(!n.contains(3));
        assert!(n.contains_all(vec![1, 2, 5]));
        assert!(!n.contains_all(vec![1, 3]));
        assert!(n.contains_all(vec![]));
    }
}

mod edit {
    use super::*;

    #[test]
    fn insert_positions() {
        let mut n = digits!(Decimal [2, 4]);
        n.insert(0, 1).unwrap();
        n.insert(2, 3).unwrap();
        n.insert(4, 5).unwrap();
        assert_digits_eq!(n, [1, 2, 3, 4, 5]);
        assert_eq!(n.get(0), Ok(1));
    }

    #[test]
    fn insert_into_empty() {
        let mut n = DigitList::with_radix(Radix::Binary);
        n.insert(0, 1).unwrap();
        assert_digits_eq!(n, [1]);
    }

    #[test]
    fn insert_errors() {
        let mut n = digits!(Binary [1, 0]);
        assert_eq!(n.insert(0, 2), Err(DigitListError::InvalidDigit { digit: 2, radix: Radix::Binary }));
        assert_eq!(n.insert(3, 1), Err(DigitListError::IndexOutOfRange { index: 3, len: 2 }));
        assert_digits_eq!(n, [1, 0]);
    }

    #[test]
    fn remove_by_index() {
        let mut n = digits!(Decimal [1, 2, 3]);
        assert_eq!(n.remove(0), Ok(1));
        assert_eq!(n.get(0), Ok(2));
        assert_eq!(n.remove(1), Ok(3));
        assert_eq!(n.remove(1), Err(DigitListError::IndexOutOfRange { index: 1, len: 1 }));
        assert_eq!(n.remove(0), Ok(2));
        assert_digits_eq!(n, []);
    }

    #[test]
    fn remove_digit_first_occurrence() {
        let mut n = digits!(Decimal [3, 1, 3]);
        assert!(n.remove_digit(3));
        assert_digits_eq!(n, [1, 3]);
        assert!(!n.remove_digit(7));
        assert_digits_eq!(n, [1, 3]);
    }

    #[test]
    fn clear_then_reuse() {
        let mut n = digits!(Ternary [1, 2, 0]);
        n.clear();
        assert_digits_eq!(n, []);
        assert!(n.push(2));
        assert_digits_eq!(n, [2]);
    }

    #[test]
    fn add_all_skips_invalid() {
        let mut n = DigitList::with_radix(Radix::Ternary);
        assert!(n.add_all(vec![1, 5, 2, 3, 0]));
        assert_digits_eq!(n, [1, 2, 0]);
        assert!(!n.add_all(vec![3, 4]));
        assert!(!n.add_all(vec![]));
    }

    #[test]
    fn insert_all_keeps_order() {
        let mut n = digits!(Decimal [1, 5]);
        assert_eq!(n.insert_all(1, vec![2, 3, 4]), Ok(true));
        assert_digits_eq!(n, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn insert_all_at_ends() {
        let mut n = digits!(Octal [4]);
        assert_eq!(n.insert_all(0, vec![1, 2]), Ok(true));
        assert_eq!(n.insert_all(3, vec![6, 7]), Ok(true));
        assert_digits_eq!(n, [1, 2, 4, 6, 7]);
        assert_eq!(n.get(0), Ok(1));
    }

    #[test]
    fn insert_all_partial_and_errors() {
        let mut n = digits!(Binary [1]);
        assert_eq!(n.insert_all(0, vec![2, 0, 9]), Ok(true));
        assert_digits_eq!(n, [0, 1]);
        assert_eq!(n.insert_all(0, vec![2, 3]), Ok(false));
        assert_eq!(
            n.insert_all(3, vec![1]),
            Err(DigitListError::IndexOutOfRange { index: 3, len: 2 })
        );
        assert_digits_eq!(n, [0, 1]);
    }

    #[test]
    fn retain_and_remove_all() {
        let mut n = digits!(Decimal [1, 2, 3, 1, 2, 3]);
        assert!(n.remove_all(&[1, 3]));
        assert_digits_eq!(n, [2, 2]);
        assert!(!n.remove_all(&[9]));

        let mut n = digits!(Decimal [1, 2, 3, 1, 2, 3]);
        assert!(n.retain_all(&[3]));
        assert_digits_eq!(n, [3, 3]);
        assert!(!n.retain_all(&[3]));

        let mut n = digits!(Decimal [9, 8, 7]);
        assert!(n.retain(|d| d % 2 == 1));
        assert_digits_eq!(n, [9, 7]);
    }

    #[test]
    fn swap_digits() {
        let mut n = digits!(Decimal [1, 2, 3]);
        assert!(n.swap(0, 2));
        assert_digits_eq!(n, [3, 2, 1]);
        assert!(n.swap(1, 1));
        assert_digits_eq!(n, [3, 2, 1]);
        assert!(!n.swap(0, 3));
        assert!(!n.swap(7, 0));
        assert_digits_eq!(n, [3, 2, 1]);
    }

    #[test]
    fn sub_list_bounds() {
        let n = digits!(Decimal [1, 2, 3]);
        assert!(n.sub_list(0, 0).unwrap().is_empty());
        assert_digits_eq!(n.sub_list(0, 3).unwrap(), [1, 2, 3]);
        assert_eq!(n.sub_list(0, 4).err(), Some(DigitListError::IndexOutOfRange { index: 4, len: 3 }));
        assert_eq!(n.sub_list(2, 1).err(), Some(DigitListError::IndexOutOfRange { index: 2, len: 3 }));
    }

    #[test]
    fn sub_list_back_half_after_rotation() {
        let mut n = digits!(Decimal [1, 2, 3, 4, 5, 6, 7]);
        n.shift_right();
        assert_digits_eq!(n.sub_list(5, 7).unwrap(), [5, 6]);
        assert_digits_eq!(n.sub_list(0, 2).unwrap(), [7, 1]);
        assert_digits_eq!(n.sub_list(6, 7).unwrap(), [6]);
        assert!(n.sub_list(7, 7).unwrap().is_empty());
        assert_digits_eq!(n, [7, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn sort_with_duplicates() {
        let mut n = digits!(Hexadecimal [15, 0, 10, 0, 3]);
        n.sort_ascending();
        assert_digits_eq!(n, [0, 0, 3, 10, 15]);
        n.sort_descending();
        assert_digits_eq!(n, [15, 10, 3, 0, 0]);
    }

    #[test]
    fn shift_small_lists() {
        let mut n = DigitList::with_radix(Radix::Decimal);
        n.shift_left();
        n.shift_right();
        assert_digits_eq!(n, []);

        let mut n = digits!(Decimal [4]);
        n.shift_left();
        assert_digits_eq!(n, [4]);
    }

    #[test]
    fn shift_changes_value() {
        let mut n = digits!(Decimal [1, 0, 0]);
        n.shift_left();
        assert_eq!(n.to_decimal_string(), "1");
        n.shift_right();
        assert_eq!(n.to_decimal_string(), "100");
    }

    #[test]
    fn edits_after_rotation() {
        let mut n = digits!(Decimal [1, 2, 3, 4]);
        n.shift_right();
        n.insert(0, 9).unwrap();
        assert_digits_eq!(n, [9, 4, 1, 2, 3]);
        assert_eq!(n.remove(4), Ok(3));
        assert_digits_eq!(n, [9, 4, 1, 2]);
    }

    #[test]
    fn clone_is_independent() {
        let n = digits!(Decimal [1, 2]);
        let mut m = n.clone();
        m.push(3);
        assert_digits_eq!(n, [1, 2]);
        assert_digits_eq!(m, [1, 2, 3]);
    }
}

mod value {
    use super::*;

    #[test]
    fn empty_is_zero() {
        let n = DigitList::with_radix(Radix::Decimal);
        assert_eq!(n.to_biguint(), BigUint::from(0u8));
        assert_eq!(n.to_decimal_string(), "0");
        assert_eq!(n.to_string(), "");
    }

    #[test]
    fn populate_replaces_contents() {
        let mut n = digits!(Decimal [9, 9, 9]);
        n.populate_from_biguint(&BigUint::from(5u8));
        assert_digits_eq!(n, [5]);
    }

    #[test]
    fn to_radix_keeps_value() {
        let n = DigitList::from_decimal_str_in(Radix::Decimal, "3404");
        let hex = n.to_radix(Radix::Hexadecimal);
        assert_eq!(hex.to_string(), "D4C");
        assert_eq!(hex.radix(), Radix::Hexadecimal);
        assert_eq!(hex.to_decimal_string(), "3404");
    }

    #[test]
    fn change_scale_uses_additional_radix() {
        let n = DigitList::from_decimal_str_in(Radix::Decimal, "10");
        let ctx = Context::default();
        let changed = n.change_scale();
        assert_eq!(changed.radix(), ctx.additional_radix());
        assert_eq!(changed, n);
    }

    #[test]
    fn change_scale_in_context() {
        let n = DigitList::from_decimal_str_in(Radix::Decimal, "10");
        let changed = n.change_scale_in(&Context::new(3404));
        assert_eq!(changed.radix(), Radix::Binary);
        assert_eq!(changed.to_string(), "1010");

        let changed = n.change_scale_in(&Context::new(3401));
        assert_eq!(changed.radix(), Radix::Octal);
        assert_eq!(changed.to_string(), "12");
    }

    #[test]
    fn record_book_number_matches_context() {
        assert_eq!(DigitList::record_book_number(), Context::default().record_book_number);
    }

    #[test]
    fn multiply_in_own_radix() {
        let a = DigitList::from_decimal_str_in(Radix::Ternary, "12");
        let b = DigitList::from_decimal_str_in(Radix::Hexadecimal, "12");
        let product = a.multiply(Some(&b));
        assert_eq!(product.radix(), Radix::Ternary);
        assert_eq!(product.to_decimal_string(), "144");
    }

    #[test]
    fn multiply_absent_is_empty() {
        let a = DigitList::from_decimal_str_in(Radix::Octal, "12");
        let product = a.multiply::<DigitList>(None);
        assert!(product.is_empty());
        assert_eq!(product.radix(), Radix::Octal);
    }

    #[test]
    fn multiply_by_empty_is_zero() {
        let a = DigitList::from_decimal_str_in(Radix::Decimal, "12");
        let empty = DigitList::with_radix(Radix::Binary);
        assert_digits_eq!(a.multiply(Some(&empty)), [0]);
    }

    #[test]
    fn multiply_by_slice() {
        let a = DigitList::from_decimal_str_in(Radix::Decimal, "25");
        let product = a.multiply(Some(&DigitSlice::new(Radix::Binary, &[1, 0, 0])));
        assert_eq!(product.to_string(), "100");
    }
}

mod errors {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            DigitListError::IndexOutOfRange { index: 5, len: 3 }.to_string(),
            "Index: 5 size: 3"
        );
        assert_eq!(
            DigitListError::InvalidDigit { digit: 10, radix: Radix::Decimal }.to_string(),
            "Invalid digit 10 for base 10"
        );
        assert_eq!(DigitListError::UnsupportedRadix(7).to_string(), "Unsupported radix 7");
        assert_eq!(ParseDigitListError::Empty.to_string(), "Failed to parse empty string");
        assert_eq!(
            ParseDigitListError::InvalidCharacter('x').to_string(),
            "Invalid decimal digit 'x'"
        );
    }
}
