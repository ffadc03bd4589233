use bitview::prelude::*;
use quickcheck_macros::quickcheck;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

#[test]
fn test_insert_bit_pattern() {
    assert_eq!(
        insert_bit_pattern(0b10000000000u32, 0b10011, 2, 6).unwrap(),
        0b10001001100
    );
}

#[test]
fn test_hamming_distance() {
    assert_eq!(get_hamming_distance(0b11101u32, 0b01111), 2);
}

#[test]
fn test_swap_even_with_odd_bits_twice() {
    let value = 0b10101010u8;
    let swapped = swap_even_with_odd_bits(value);
    assert_eq!(swapped, 0b01010101);
    assert_eq!(swap_even_with_odd_bits(swapped), value);
}

#[test]
fn test_count_matches_binary_digits() {
    for value in [0u64, u64::MAX, even_pattern(), odd_pattern(), 1 << 63, 0x0123_4567_89ab_cdef] {
        let ones = format!("{value:b}").matches('1').count() as u32;
        assert_eq!(count(value), ones);
        assert_eq!(BitView::new(&value).iter().filter(|&bit| bit).count() as u32, ones);
    }
}

#[test]
fn test_equal_population_errors() {
    assert!(matches!(get_binary_greater(0u32), Err(Error::InvalidInput)));
    assert!(matches!(get_binary_lesser(0u32), Err(Error::InvalidInput)));
    assert!(matches!(
        get_binary_greater(u16::MAX),
        Err(Error::NoSuchValue {
            direction: Direction::Greater,
            width: 16
        })
    ));
    assert!(matches!(
        get_binary_greater(i16::MAX),
        Err(Error::NoSuchValue { width: 15, .. })
    ));
    for k in 1..=64 {
        let all_ones = mask::<u64>(0, k - 1).unwrap();
        assert!(matches!(
            get_binary_lesser(all_ones),
            Err(Error::NoSuchValue {
                direction: Direction::Lesser,
                ..
            })
        ));
    }
}

#[quickcheck]
fn greater_keeps_population(value: u32) -> bool {
    let value = value % ((1 << 31) - 2) + 1;
    match get_binary_greater(value) {
        Ok(greater) => greater > value && count(greater) == count(value),
        Err(_) => false,
    }
}

#[quickcheck]
fn lesser_keeps_population(value: u16) -> bool {
    match get_binary_lesser(value) {
        Ok(lesser) => lesser < value && count(lesser) == count(value),
        Err(Error::InvalidInput) => value == 0,
        Err(Error::NoSuchValue { .. }) => value & value.wrapping_add(1) == 0,
        Err(_) => false,
    }
}

#[test]
fn test_find_missing_element() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in 1..=1000usize {
        let mut sequence: Vec<usize> = (0..=n).collect();
        sequence.shuffle(&mut rng);
        let missing = sequence.pop().unwrap();
        assert_eq!(find_missing_element(&sequence).unwrap(), missing);
    }
}

#[test]
fn test_screen_render() {
    let mut screen = Screen::new(16, 2).unwrap();
    screen.draw_horizontal_line(0, 15, 0).unwrap();
    screen.draw_horizontal_line(6, 9, 1).unwrap();
    let rendered = screen.to_string();
    let rows: Vec<&str> = rendered.lines().collect();
    assert_eq!(rows, ["████████████████", "░░░░░░████░░░░░░"]);
}

#[test]
fn test_binary_fraction() {
    assert_eq!(binary_fraction(0.75).unwrap(), "0.11");
    assert_eq!(binary_fraction(0.0625).unwrap(), "0.0001");
    assert!(matches!(
        binary_fraction(0.72),
        Err(Error::FractionTooLong { max_digits: 30, .. })
    ));
    assert!(matches!(
        binary_fraction(std::f64::consts::PI),
        Err(Error::FractionOutOfRange { .. })
    ));
}
