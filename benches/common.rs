//! common routines to be included by benches

use digitring::{DigitList, Radix};

/// Decimal numeral text with `len` digits (no leading zero)
pub fn random_decimal_string(rng: &mut oorandom::Rand32, len: usize) -> String {
    let mut text = String::with_capacity(len);
    text.push(char::from(b'1' + rng.rand_range(0..9) as u8));
    for _ in 1..len {
        text.push(char::from(b'0' + rng.rand_range(0..10) as u8));
    }
    text
}

/// Random digit lists of the given radix and decimal length
pub fn random_digit_lists(seed: u64, radix: Radix, count: usize, len: usize) -> Vec<DigitList> {
    let mut rng = oorandom::Rand32::new(seed);
    (0..count)
        .map(|_| DigitList::from_decimal_str_in(radix, &random_decimal_string(&mut rng, len)))
        .collect()
}

/// Shuffled pairs of distinct elements
pub fn make_random_pairs(lists: &[DigitList], seed: u64) -> Vec<(&DigitList, &DigitList)> {
    let mut cartesian_pairs = lists
                            .iter()
                            .enumerate()
                            .flat_map(|(i, x)| {
                                lists.iter().skip(i+1).map(move |y| (x, y))
                            }).collect::<Vec<(&DigitList, &DigitList)>>();

    // random number generator from random seed
    let mut rng = oorandom::Rand32::new(seed);

    for i in (1..cartesian_pairs.len()).rev() {
        let j = rng.rand_u32() as usize % i;
        cartesian_pairs.swap(i, j);
    }

    cartesian_pairs
}
