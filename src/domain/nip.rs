//! NIP (Polish tax identifier) checksum validation.

use regex::Regex;
use std::sync::LazyLock;

/// Exactly ten ASCII digits.
static NIP_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

/// Weights applied to the first nine digits.
const WEIGHTS: [u32; 9] = [6, 5, 7, 2, 3, 4, 5, 6, 7];

/// Returns `true` if `nip` is a well-formed NIP with a matching check digit.
///
/// The check digit (10th position) must equal the weighted sum of the first
/// nine digits modulo 11. A remainder of 10 can never match a single digit,
/// so such identifiers are rejected without special handling.
///
/// Any input that is not exactly ten ASCII digits returns `false`.
///
/// # Examples
///
/// ```
/// use crbr_gateway::domain::nip::is_valid_nip;
///
/// assert!(is_valid_nip("1234563218"));
/// assert!(!is_valid_nip("1234563219"));
/// assert!(!is_valid_nip("123-456-32-18"));
/// ```
pub fn is_valid_nip(nip: &str) -> bool {
    if !NIP_REGEX.is_match(nip) {
        return false;
    }

    let digits: Vec<u32> = nip.bytes().map(|b| u32::from(b - b'0')).collect();

    let checksum = digits
        .iter()
        .zip(WEIGHTS.iter())
        .map(|(digit, weight)| digit * weight)
        .sum::<u32>()
        % 11;

    checksum == digits[9]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Reference computation used to cross-check the validator.
    fn expected_checksum(nip: &str) -> u32 {
        nip.chars()
            .take(9)
            .zip(WEIGHTS)
            .map(|(c, w)| c.to_digit(10).unwrap() * w)
            .sum::<u32>()
            % 11
    }

    #[test]
    fn test_valid_nip() {
        assert!(is_valid_nip("1234563218"));
        assert!(is_valid_nip("5260250274"));
        assert!(is_valid_nip("0000000000"));
    }

    #[test]
    fn test_wrong_check_digit() {
        for last in ['0', '1', '2', '3', '4', '5', '6', '7', '9'] {
            let nip = format!("123456321{last}");
            assert!(!is_valid_nip(&nip), "{nip} should be rejected");
        }
    }

    #[test]
    fn test_known_checksums() {
        // 1*6 + 2*7 = 20, 20 % 11 = 9
        assert!(is_valid_nip("1000000029"));
        // 4*6 + 2*5 = 34, 34 % 11 = 1
        assert!(is_valid_nip("4200000001"));
        // sum of all weights = 45, 45 % 11 = 1
        assert!(is_valid_nip("1111111111"));
    }

    #[test]
    fn test_checksum_ten_is_rejected() {
        // 5*6 + 5*7 = 65, 65 % 11 = 10
        for last in '0'..='9' {
            let nip = format!("505000000{last}");
            assert_eq!(expected_checksum(&nip), 10);
            assert!(!is_valid_nip(&nip));
        }
    }

    #[test]
    fn test_invalid_format() {
        assert!(!is_valid_nip(""));
        assert!(!is_valid_nip("123456321"));
        assert!(!is_valid_nip("12345632180"));
        assert!(!is_valid_nip("123456321a"));
        assert!(!is_valid_nip("123-456-32-18"));
        assert!(!is_valid_nip(" 1234563218"));
        assert!(!is_valid_nip("1234563218\n"));
        assert!(!is_valid_nip("１２３４５６３２１８"));
    }

    #[test]
    fn test_matches_reference_for_all_check_digits() {
        let prefixes = ["123456321", "526025027", "999999999", "000000001", "738211004"];

        for prefix in prefixes {
            for last in 0..=9u32 {
                let nip = format!("{prefix}{last}");
                assert_eq!(
                    is_valid_nip(&nip),
                    expected_checksum(&nip) == last,
                    "mismatch for {nip}"
                );
            }
        }
    }
}
