use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use eleitorado_gen::ids;

#[test]
fn check_digit_matches_reference_vector() {
    // weights 10..=2: sum = 150, 150 % 11 = 7, digit = 11 - 7 = 4
    assert_eq!(ids::check_digit(&[1, 1, 1, 4, 4, 4, 4, 7, 7]), 4);
}

#[test]
fn check_digit_is_zero_for_small_remainders() {
    // sum 0 -> remainder 0
    assert_eq!(ids::check_digit(&[0; 9]), 0);
    // single digit 6 with weight 2: 12 % 11 = 1 -> digit 0
    assert_eq!(ids::check_digit(&[6]), 0);
}

#[test]
fn cpf_check_digits_are_self_consistent() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..200 {
        let cpf = ids::cpf(&mut rng);
        assert_eq!(cpf.len(), 11);
        assert!(cpf.bytes().all(|b| b.is_ascii_digit()));

        let digits: Vec<u8> = cpf.bytes().map(|b| b - b'0').collect();
        assert_eq!(ids::check_digit(&digits[..9]), digits[9]);
        assert_eq!(ids::check_digit(&digits[..10]), digits[10]);
    }
}

#[test]
fn voter_title_is_twelve_digits() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..200 {
        let titulo = ids::voter_title(&mut rng);
        assert_eq!(titulo.len(), 12);
        assert!(titulo.bytes().all(|b| b.is_ascii_digit()));
    }
}
