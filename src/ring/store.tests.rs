// Tests for RingStore, included by store.rs

fn ring_from(digits: &[u8]) -> RingStore {
    let mut ring = RingStore::new();
    for &d in digits {
        ring.link_last(d);
    }
    ring
}

fn collect(ring: &RingStore) -> Vec<u8> {
    let mut result = Vec::new();
    let mut current = ring.head();
    for _ in 0..ring.len() {
        let id = current.unwrap();
        result.push(ring.digit(id));
        current = Some(ring.next(id));
    }
    result
}

fn collect_backward(ring: &RingStore) -> Vec<u8> {
    let mut result = Vec::new();
    let mut current = ring.last();
    for _ in 0..ring.len() {
        let id = current.unwrap();
        result.push(ring.digit(id));
        current = Some(ring.prev(id));
    }
    result
}

#[test]
fn empty_ring() {
    let ring = RingStore::new();
    assert!(ring.is_empty());
    assert_eq!(ring.len(), 0);
    assert_eq!(ring.head(), None);
    assert_eq!(ring.last(), None);
    assert_eq!(
        ring.node_at(0),
        Err(DigitListError::IndexOutOfRange { index: 0, len: 0 })
    );
    ring.check_invariants();
}

#[test]
fn link_last_single_node_links_to_itself() {
    let mut ring = RingStore::new();
    let id = ring.link_last(7);
    assert_eq!(ring.head(), Some(id));
    assert_eq!(ring.last(), Some(id));
    assert_eq!(ring.next(id), id);
    assert_eq!(ring.prev(id), id);
    ring.check_invariants();
}

#[test]
fn link_last_appends() {
    let ring = ring_from(&[1, 2, 3, 4]);
    assert_eq!(collect(&ring), vec![1, 2, 3, 4]);
    assert_eq!(collect_backward(&ring), vec![4, 3, 2, 1]);
    assert_eq!(ring.digit(ring.last().unwrap()), 4);
    ring.check_invariants();
}

#[test]
fn node_at_walks_from_both_ends() {
    let ring = ring_from(&[0, 1, 2, 3, 4, 5, 6]);
    for i in 0..7 {
        let id = ring.node_at(i).unwrap();
        assert_eq!(ring.digit(id), i as u8);
        assert_eq!(ring.next(id), ring.node_at((i + 1) % 7).unwrap());
    }
    assert_eq!(
        ring.node_at(7),
        Err(DigitListError::IndexOutOfRange { index: 7, len: 7 })
    );
}

#[test]
fn link_before_head_becomes_head() {
    let mut ring = ring_from(&[2, 3]);
    let head = ring.head();
    let id = ring.link_before(1, head);
    assert_eq!(ring.head(), Some(id));
    assert_eq!(collect(&ring), vec![1, 2, 3]);
    ring.check_invariants();
}

#[test]
fn link_before_middle() {
    let mut ring = ring_from(&[1, 3]);
    let successor = ring.node_at(1).ok();
    ring.link_before(2, successor);
    assert_eq!(collect(&ring), vec![1, 2, 3]);
    ring.check_invariants();
}

#[test]
fn link_before_none_appends() {
    let mut ring = ring_from(&[1, 2]);
    ring.link_before(3, None);
    assert_eq!(collect(&ring), vec![1, 2, 3]);

    let mut empty = RingStore::new();
    empty.link_before(5, None);
    assert_eq!(collect(&empty), vec![5]);
    empty.check_invariants();
}

#[test]
fn unlink_only_node_empties_ring() {
    let mut ring = ring_from(&[9]);
    let head = ring.head().unwrap();
    assert_eq!(ring.unlink(head), 9);
    assert!(ring.is_empty());
    assert_eq!(ring.head(), None);
    ring.check_invariants();
}

#[test]
fn unlink_head_advances_head() {
    let mut ring = ring_from(&[1, 2, 3]);
    let head = ring.head().unwrap();
    assert_eq!(ring.unlink(head), 1);
    assert_eq!(collect(&ring), vec![2, 3]);
    ring.check_invariants();
}

#[test]
fn unlink_last_and_middle() {
    let mut ring = ring_from(&[1, 2, 3, 4]);
    let last = ring.last().unwrap();
    assert_eq!(ring.unlink(last), 4);
    assert_eq!(collect(&ring), vec![1, 2, 3]);

    let middle = ring.node_at(1).unwrap();
    assert_eq!(ring.unlink(middle), 2);
    assert_eq!(collect(&ring), vec![1, 3]);
    assert_eq!(collect_backward(&ring), vec![3, 1]);
    ring.check_invariants();
}

#[test]
fn unlinked_slots_are_reused() {
    let mut ring = ring_from(&[1, 2, 3]);
    let middle = ring.node_at(1).unwrap();
    ring.unlink(middle);
    let id = ring.link_last(4);
    assert_eq!(id, middle);
    assert_eq!(collect(&ring), vec![1, 3, 4]);
    ring.check_invariants();
}

#[test]
fn replace_digit() {
    let mut ring = ring_from(&[1, 2, 3]);
    let id = ring.node_at(2).unwrap();
    assert_eq!(ring.replace(id, 8), 3);
    assert_eq!(collect(&ring), vec![1, 2, 8]);
}

#[test]
fn clear_resets() {
    let mut ring = ring_from(&[1, 2, 3]);
    ring.clear();
    assert!(ring.is_empty());
    assert_eq!(ring.head(), None);
    ring.check_invariants();

    ring.link_last(4);
    assert_eq!(collect(&ring), vec![4]);
    ring.check_invariants();
}

#[test]
fn rotate_moves_head() {
    let mut ring = ring_from(&[1, 2, 3]);
    ring.rotate_forward();
    assert_eq!(collect(&ring), vec![2, 3, 1]);
    ring.rotate_forward();
    assert_eq!(collect(&ring), vec![3, 1, 2]);
    ring.rotate_backward();
    ring.rotate_backward();
    assert_eq!(collect(&ring), vec![1, 2, 3]);
    ring.check_invariants();
}

#[test]
fn rotate_short_ring_is_noop() {
    let mut ring = RingStore::new();
    ring.rotate_forward();
    ring.rotate_backward();
    assert!(ring.is_empty());

    ring.link_last(5);
    let head = ring.head();
    ring.rotate_forward();
    assert_eq!(ring.head(), head);
    ring.rotate_backward();
    assert_eq!(ring.head(), head);
}

#[test]
fn with_capacity_starts_empty() {
    let mut ring = RingStore::with_capacity(16);
    assert!(ring.is_empty());
    ring.link_last(1);
    assert_eq!(collect(&ring), vec![1]);
}
