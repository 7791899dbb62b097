// Tests for Cursor, included by cursor.rs

fn list(digits: &[u8]) -> DigitList {
    let mut list = DigitList::with_radix(Radix::Decimal);
    list.add_all(digits.iter().copied());
    list
}

#[test]
fn walk_forward_then_backward() {
    let mut l = list(&[1, 2, 3]);
    let mut cursor = l.cursor();
    assert!(!cursor.has_previous());
    assert_eq!(cursor.previous_index(), None);

    assert_eq!(cursor.next(), Ok(1));
    assert_eq!(cursor.next(), Ok(2));
    assert_eq!(cursor.next(), Ok(3));
    assert!(!cursor.has_next());
    assert_eq!(cursor.next_index(), 3);
    assert_eq!(cursor.next(), Err(DigitListError::NoSuchElement));
    cursor.check_invariants();

    assert_eq!(cursor.previous(), Ok(3));
    assert_eq!(cursor.previous(), Ok(2));
    assert_eq!(cursor.previous(), Ok(1));
    assert_eq!(cursor.previous(), Err(DigitListError::NoSuchElement));
    assert_eq!(cursor.next_index(), 0);
    cursor.check_invariants();
}

#[test]
fn empty_list_cursor() {
    let mut l = DigitList::with_radix(Radix::Binary);
    let mut cursor = l.cursor();
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
    assert_eq!(cursor.next(), Err(DigitListError::NoSuchElement));
    assert_eq!(cursor.previous(), Err(DigitListError::NoSuchElement));
    assert_eq!(cursor.remove(), Err(DigitListError::IllegalState));

    cursor.add(1).unwrap();
    cursor.add(0).unwrap();
    cursor.check_invariants();
    assert_eq!(l.to_vec(), vec![1, 0]);
}

#[test]
fn cursor_at_positions() {
    let mut l = list(&[4, 5, 6]);
    {
        let mut cursor = l.cursor_at(1).unwrap();
        assert_eq!(cursor.next_index(), 1);
        assert_eq!(cursor.next(), Ok(5));
    }
    {
        let mut cursor = l.cursor_at(3).unwrap();
        assert!(!cursor.has_next());
        assert_eq!(cursor.previous(), Ok(6));
        cursor.check_invariants();
    }
    assert_eq!(
        l.cursor_at(4).err(),
        Some(DigitListError::IndexOutOfRange { index: 4, len: 3 })
    );
}

#[test]
fn set_requires_move() {
    let mut l = list(&[1, 2]);
    let mut cursor = l.cursor();
    assert_eq!(cursor.set(5), Err(DigitListError::IllegalState));
    cursor.next().unwrap();
    cursor.set(5).unwrap();
    assert_eq!(
        cursor.set(10),
        Err(DigitListError::InvalidDigit { digit: 10, radix: Radix::Decimal })
    );
    cursor.next().unwrap();
    cursor.previous().unwrap();
    cursor.set(7).unwrap();
    assert_eq!(l.to_vec(), vec![5, 7]);
}

#[test]
fn remove_after_next_decrements_index() {
    let mut l = list(&[1, 2, 3]);
    let mut cursor = l.cursor();
    cursor.next().unwrap();
    cursor.next().unwrap();
    assert_eq!(cursor.remove(), Ok(2));
    assert_eq!(cursor.next_index(), 1);
    cursor.check_invariants();
    assert_eq!(cursor.remove(), Err(DigitListError::IllegalState));
    assert_eq!(cursor.next(), Ok(3));
    assert_eq!(l.to_vec(), vec![1, 3]);
}

#[test]
fn remove_after_previous_keeps_index() {
    let mut l = list(&[1, 2, 3]);
    let mut cursor = l.cursor_at(2).unwrap();
    assert_eq!(cursor.previous(), Ok(2));
    assert_eq!(cursor.remove(), Ok(2));
    assert_eq!(cursor.next_index(), 1);
    cursor.check_invariants();
    assert_eq!(cursor.next(), Ok(3));
    assert_eq!(l.to_vec(), vec![1, 3]);
}

#[test]
fn remove_last_after_previous_reaches_end() {
    let mut l = list(&[1, 2, 3]);
    let mut cursor = l.cursor_at(3).unwrap();
    assert_eq!(cursor.previous(), Ok(3));
    assert_eq!(cursor.remove(), Ok(3));
    assert!(!cursor.has_next());
    cursor.check_invariants();

    // appending at the end must not wrap around to the front
    cursor.add(9).unwrap();
    cursor.check_invariants();
    assert_eq!(l.to_vec(), vec![1, 2, 9]);
}

#[test]
fn remove_head_moves_head() {
    let mut l = list(&[1, 2, 3]);
    let mut cursor = l.cursor();
    cursor.next().unwrap();
    assert_eq!(cursor.remove(), Ok(1));
    assert_eq!(cursor.next_index(), 0);
    cursor.check_invariants();
    assert_eq!(l.to_vec(), vec![2, 3]);
    assert_eq!(l.get(0), Ok(2));
}

#[test]
fn remove_only_digit() {
    let mut l = list(&[8]);
    let mut cursor = l.cursor();
    cursor.next().unwrap();
    cursor.previous().unwrap();
    assert_eq!(cursor.remove(), Ok(8));
    cursor.check_invariants();
    assert!(!cursor.has_next());
    assert!(!cursor.has_previous());
    assert!(l.is_empty());
}

#[test]
fn add_at_front_becomes_head() {
    let mut l = list(&[2, 3]);
    let mut cursor = l.cursor();
    cursor.add(1).unwrap();
    assert_eq!(cursor.next_index(), 1);
    cursor.check_invariants();
    assert_eq!(cursor.next(), Ok(2));
    assert_eq!(l.to_vec(), vec![1, 2, 3]);
}

#[test]
fn add_clears_last_returned() {
    let mut l = list(&[1, 3]);
    let mut cursor = l.cursor();
    cursor.next().unwrap();
    cursor.add(2).unwrap();
    assert_eq!(cursor.set(0), Err(DigitListError::IllegalState));
    assert_eq!(cursor.remove(), Err(DigitListError::IllegalState));
    assert_eq!(cursor.previous(), Ok(2));
    cursor.check_invariants();
    assert_eq!(l.to_vec(), vec![1, 2, 3]);
}

#[test]
fn add_rejects_invalid_digit() {
    let mut l = list(&[1]);
    let mut cursor = l.cursor();
    assert_eq!(
        cursor.add(12),
        Err(DigitListError::InvalidDigit { digit: 12, radix: Radix::Decimal })
    );
    assert_eq!(cursor.next_index(), 0);
    assert_eq!(l.to_vec(), vec![1]);
}

#[test]
fn remove_every_other_digit() {
    let mut l = list(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    let mut cursor = l.cursor();
    let mut keep = true;
    while cursor.next().is_ok() {
        if !keep {
            cursor.remove().unwrap();
        }
        keep = !keep;
        cursor.check_invariants();
    }
    assert_eq!(l.to_vec(), vec![0, 2, 4, 6, 8]);
}

#[test]
fn edits_after_rotation() {
    let mut l = list(&[1, 2, 3]);
    l.shift_left();
    let mut cursor = l.cursor();
    cursor.add(0).unwrap();
    cursor.check_invariants();
    assert_eq!(l.to_vec(), vec![0, 2, 3, 1]);
}
