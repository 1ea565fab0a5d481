//! CPF checksum validation.
//!
//! A CPF (Brazilian taxpayer identifier) is 11 decimal digits, the last two
//! being check digits computed from the first nine via weighted modulo-11
//! sums. Formatting characters (`.`/`-` etc.) are tolerated and stripped.

/// Validates a CPF string.
///
/// Total over all inputs: never panics, returns `false` for anything
/// malformed. Repeated-digit sequences ("111.111.111-11") are invalid even
/// though they satisfy the checksum.
pub fn is_valid(input: &str) -> bool {
    let digits: Vec<u32> = input.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.len() != 11 {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    check_digit(&digits[..9], 10) == digits[9] && check_digit(&digits[..10], 11) == digits[10]
}

/// Weighted modulo-11 check digit: weights run from `first_weight` down to 2.
fn check_digit(digits: &[u32], first_weight: u32) -> u32 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (first_weight - i as u32))
        .sum();

    match 11 - sum % 11 {
        10 | 11 => 0,
        rev => rev,
    }
}
