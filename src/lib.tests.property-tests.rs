// Property tests to be included by lib.rs

fn radix_strategy() -> impl Strategy<Value = Radix> {
    prop::sample::select(SUPPORTED_RADIXES.to_vec())
}

/// Radix together with digits valid for it
fn digits_strategy(max_len: usize) -> impl Strategy<Value = (Radix, Vec<u8>)> {
    radix_strategy().prop_flat_map(move |radix| {
        (Just(radix), prop::collection::vec(0..radix.value(), 0..max_len))
    })
}

#[derive(Clone, Debug)]
enum Edit {
    Push(u8),
    Insert(usize, u8),
    Remove(usize),
    Set(usize, u8),
    Swap(usize, usize),
    ShiftLeft,
    ShiftRight,
    SortAscending,
    RemoveDigit(u8),
    InsertAll(usize, Vec<u8>),
    RetainBelow(u8),
}

fn edit_strategy() -> impl Strategy<Value = Edit> {
    prop_oneof![
        (0u8..20).prop_map(Edit::Push),
        (0usize..24, 0u8..20).prop_map(|(i, d)| Edit::Insert(i, d)),
        (0usize..24).prop_map(Edit::Remove),
        (0usize..24, 0u8..20).prop_map(|(i, d)| Edit::Set(i, d)),
        (0usize..24, 0usize..24).prop_map(|(i, j)| Edit::Swap(i, j)),
        Just(Edit::ShiftLeft),
        Just(Edit::ShiftRight),
        Just(Edit::SortAscending),
        (0u8..20).prop_map(Edit::RemoveDigit),
        (0usize..24, prop::collection::vec(0u8..20, 0..6)).prop_map(|(i, ds)| Edit::InsertAll(i, ds)),
        (0u8..17).prop_map(Edit::RetainBelow),
    ]
}

/// Apply edit to both the list and a plain vector model
fn apply(list: &mut DigitList, model: &mut Vec<u8>, edit: &Edit) {
    let radix = list.radix();
    let valid = |d: u8| radix.is_valid_digit(d);
    match *edit {
        Edit::Push(d) => {
            let ok = valid(d);
            assert_eq!(list.push(d), ok);
            if ok {
                model.push(d);
            }
        }
        Edit::Insert(i, d) => {
            let ok = valid(d) && i <= model.len();
            assert_eq!(list.insert(i, d).is_ok(), ok);
            if ok {
                model.insert(i, d);
            }
        }
        Edit::Remove(i) => match list.remove(i) {
            Ok(d) => assert_eq!(d, model.remove(i)),
            Err(_) => assert!(i >= model.len()),
        },
        Edit::Set(i, d) => {
            let ok = valid(d) && i < model.len();
            assert_eq!(list.set(i, d).is_ok(), ok);
            if ok {
                model[i] = d;
            }
        }
        Edit::Swap(i, j) => {
            let ok = i < model.len() && j < model.len();
            assert_eq!(list.swap(i, j), ok);
            if ok {
                model.swap(i, j);
            }
        }
        Edit::ShiftLeft => {
            list.shift_left();
            if !model.is_empty() {
                model.rotate_left(1);
            }
        }
        Edit::ShiftRight => {
            list.shift_right();
            if !model.is_empty() {
                model.rotate_right(1);
            }
        }
        Edit::SortAscending => {
            list.sort_ascending();
            model.sort_unstable();
        }
        Edit::RemoveDigit(d) => {
            let found = model.iter().position(|&m| m == d);
            assert_eq!(list.remove_digit(d), found.is_some());
            if let Some(i) = found {
                model.remove(i);
            }
        }
        Edit::InsertAll(i, ref digits) => {
            let result = list.insert_all(i, digits.iter().copied());
            if i > model.len() {
                assert_eq!(result, Err(DigitListError::IndexOutOfRange { index: i, len: model.len() }));
            } else {
                let accepted: Vec<u8> = digits.iter().copied().filter(|&d| valid(d)).collect();
                assert_eq!(result, Ok(!accepted.is_empty()));
                for (offset, d) in accepted.into_iter().enumerate() {
                    model.insert(i + offset, d);
                }
            }
        }
        Edit::RetainBelow(limit) => {
            let before = model.len();
            model.retain(|&d| d < limit);
            assert_eq!(list.retain(|d| d < limit), model.len() != before);
        }
    }
}

#[derive(Clone, Copy, Debug)]
enum CursorStep {
    Next,
    Previous,
    Add(u8),
    Remove,
    Set(u8),
}

fn cursor_step_strategy() -> impl Strategy<Value = CursorStep> {
    prop_oneof![
        Just(CursorStep::Next),
        Just(CursorStep::Previous),
        (0u8..18).prop_map(CursorStep::Add),
        Just(CursorStep::Remove),
        (0u8..18).prop_map(CursorStep::Set),
    ]
}

/// Vector model of a cursor: digits, forward position and the model
/// index of the digit returned by the last move
struct CursorModel {
    digits: Vec<u8>,
    index: usize,
    last: Option<usize>,
}

impl CursorModel {
    fn step(&mut self, radix: Radix, cursor: &mut Cursor, step: CursorStep) {
        match step {
            CursorStep::Next => {
                if self.index < self.digits.len() {
                    assert_eq!(cursor.next(), Ok(self.digits[self.index]));
                    self.last = Some(self.index);
                    self.index += 1;
                } else {
                    assert_eq!(cursor.next(), Err(DigitListError::NoSuchElement));
                }
            }
            CursorStep::Previous => {
                if self.index > 0 {
                    self.index -= 1;
                    assert_eq!(cursor.previous(), Ok(self.digits[self.index]));
                    self.last = Some(self.index);
                } else {
                    assert_eq!(cursor.previous(), Err(DigitListError::NoSuchElement));
                }
            }
            CursorStep::Add(d) => {
                if radix.is_valid_digit(d) {
                    assert_eq!(cursor.add(d), Ok(()));
                    self.digits.insert(self.index, d);
                    self.index += 1;
                    self.last = None;
                } else {
                    assert_eq!(cursor.add(d), Err(DigitListError::InvalidDigit { digit: d, radix: radix }));
                }
            }
            CursorStep::Remove => match self.last.take() {
                None => assert_eq!(cursor.remove(), Err(DigitListError::IllegalState)),
                Some(at) => {
                    assert_eq!(cursor.remove(), Ok(self.digits.remove(at)));
                    if at < self.index {
                        self.index -= 1;
                    }
                }
            },
            CursorStep::Set(d) => match self.last {
                None => assert_eq!(cursor.set(d), Err(DigitListError::IllegalState)),
                Some(_) if !radix.is_valid_digit(d) => {
                    assert_eq!(cursor.set(d), Err(DigitListError::InvalidDigit { digit: d, radix: radix }));
                }
                Some(at) => {
                    assert_eq!(cursor.set(d), Ok(()));
                    self.digits[at] = d;
                }
            },
        }
    }
}

proptest! {
    #[test]
    fn biguint_round_trip(radix in radix_strategy(), bytes in prop::collection::vec(any::<u8>(), 0..48)) {
        let value = BigUint::from_bytes_be(&bytes);
        let list = DigitList::from_biguint_in(radix, &value);
        prop_assert_eq!(list.to_biguint(), value);
        prop_assert!(!list.is_empty());
        // no leading zeros unless the value is zero
        prop_assert!(list.len() == 1 || list.get(0) != Ok(0));
    }

    #[test]
    fn decimal_round_trip((radix, digits) in digits_strategy(40)) {
        prop_assume!(!digits.is_empty());
        let mut list = DigitList::with_radix(radix);
        list.add_all(digits);

        let text = list.to_decimal_string();
        let back = DigitList::from_decimal_str_in(radix, &text);
        prop_assert_eq!(&back, &list);
        prop_assert_eq!(back.to_decimal_string(), text);
    }

    #[test]
    fn display_matches_radix_text((radix, digits) in digits_strategy(40)) {
        prop_assume!(!digits.is_empty());
        let mut list = DigitList::with_radix(radix);
        list.add_all(digits);

        let value = list.to_biguint().to_str_radix(u32::from(radix)).to_uppercase();
        let shown = list.to_string();
        prop_assert_eq!(shown.trim_start_matches('0'), value.trim_start_matches('0'));
    }

    #[test]
    fn ring_matches_model(
        radix in radix_strategy(),
        edits in prop::collection::vec(edit_strategy(), 0..64),
    ) {
        let mut list = DigitList::with_radix(radix);
        let mut model = Vec::new();
        for edit in edits.iter() {
            apply(&mut list, &mut model, edit);
            list.check_invariants();
            prop_assert_eq!(&list.to_vec(), &model);
        }
        let reversed: Vec<u8> = list.iter().rev().collect();
        model.reverse();
        prop_assert_eq!(reversed, model);
    }

    #[test]
    fn rotation_identity((radix, digits) in digits_strategy(30), turns in 0usize..40) {
        let mut list = DigitList::with_radix(radix);
        list.add_all(digits.clone());
        for _ in 0..turns {
            list.shift_left();
        }
        for _ in 0..turns {
            list.shift_right();
        }
        prop_assert_eq!(list.to_vec(), digits);
    }

    #[test]
    fn multiply_is_product(
        (ra, a) in digits_strategy(30),
        (rb, b) in digits_strategy(30),
    ) {
        let mut lhs = DigitList::with_radix(ra);
        lhs.add_all(a);
        let mut rhs = DigitList::with_radix(rb);
        rhs.add_all(b);

        let product = lhs.multiply(Some(&rhs));
        prop_assert_eq!(product.radix(), ra);
        prop_assert_eq!(product.to_biguint(), lhs.to_biguint() * rhs.to_biguint());
        prop_assert_eq!(&product, &(&rhs * &lhs));
        prop_assert!(lhs.multiply::<DigitList>(None).is_empty());
    }

    #[test]
    fn cursor_edits_match_model(
        (radix, digits) in digits_strategy(20),
        turns in 0usize..5,
        start in 0usize..24,
        steps in prop::collection::vec(cursor_step_strategy(), 0..40),
    ) {
        let mut list = DigitList::with_radix(radix);
        list.add_all(digits.clone());
        let mut model_digits = digits;
        for _ in 0..turns {
            list.shift_left();
            if !model_digits.is_empty() {
                model_digits.rotate_left(1);
            }
        }
        let start = start % (model_digits.len() + 1);

        let mut model = CursorModel { digits: model_digits, index: start, last: None };
        {
            let mut cursor = list.cursor_at(start).unwrap();
            for &step in steps.iter() {
                model.step(radix, &mut cursor, step);
                prop_assert_eq!(cursor.next_index(), model.index);
                prop_assert_eq!(cursor.has_next(), model.index < model.digits.len());
                prop_assert_eq!(cursor.has_previous(), model.index > 0);
                cursor.check_invariants();
            }
        }
        list.check_invariants();
        prop_assert_eq!(list.to_vec(), model.digits);
    }

    #[test]
    fn cursor_walk_matches_iter((radix, digits) in digits_strategy(30)) {
        let mut list = DigitList::with_radix(radix);
        list.add_all(digits.clone());

        let mut cursor = list.cursor();
        let mut forward = Vec::new();
        while let Ok(d) = cursor.next() {
            forward.push(d);
        }
        let mut backward = Vec::new();
        while let Ok(d) = cursor.previous() {
            backward.push(d);
        }
        backward.reverse();
        prop_assert_eq!(&forward, &digits);
        prop_assert_eq!(&backward, &digits);
    }
}
