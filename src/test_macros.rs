// file to be included in tests modules

/// Build a digit list from radix name and digits, skipping none
macro_rules! digits {
    ( $radix:ident [ $($d:literal),* ] ) => {{
        let mut list = DigitList::with_radix(Radix::$radix);
        $( assert!(list.push($d), "digit {} rejected", $d); )*
        list
    }};
}

/// Compare digits of list with literal digits, then check ring linkage
macro_rules! assert_digits_eq {
    ( $list:expr, [ $($d:literal),* ] ) => {{
        let expected: Vec<u8> = vec![ $($d),* ];
        assert_eq!($list.to_vec(), expected);
        $list.check_invariants();
    }};
}
