//! Fixed-format numeric identifier generators.
//!
//! These produce syntactically plausible placeholders from independent
//! uniform digit draws. They must never be used to validate real
//! identifiers.

use rand::Rng;

/// Weighted mod-11 check digit over an ordered digit sequence.
///
/// Position `i` of an `n`-digit sequence carries weight `n + 1 - i`.
/// The digit is `0` when the weighted sum mod 11 is below 2, otherwise
/// `11 - remainder`.
pub fn check_digit(digits: &[u8]) -> u8 {
    let mut sum = 0_u32;
    let mut weight = digits.len() as u32 + 1;
    for digit in digits {
        sum += (*digit as u32) * weight;
        weight = weight.saturating_sub(1);
    }
    let remainder = sum % 11;
    if remainder < 2 { 0 } else { (11 - remainder) as u8 }
}

/// Checksum-consistent CPF: 9 uniform digits plus two check digits.
pub fn cpf(rng: &mut dyn rand::RngCore) -> String {
    let mut digits = [0_u8; 11];
    for digit in digits.iter_mut().take(9) {
        *digit = rng.random_range(0..=9);
    }
    digits[9] = check_digit(&digits[..9]);
    digits[10] = check_digit(&digits[..10]);
    digits.iter().map(|d| char::from(b'0' + *d)).collect()
}

/// Voter registration title: 12 uniform digits, no checksum.
pub fn voter_title(rng: &mut dyn rand::RngCore) -> String {
    (0..12)
        .map(|_| char::from(b'0' + rng.random_range(0..=9_u8)))
        .collect()
}
