//! Policy number generation

use core_kernel::{PolicyNumber, POLICY_NUMBER_PREFIX};
use rand::Rng;

const SERIAL_UPPER_BOUND: u32 = 1_000_000_000;

/// Generates a policy number: `PL`, a zero-padded 9 digit serial drawn
/// uniformly from `[0, 10^9)`, and two independent uppercase letters
pub fn generate_policy_number<R: Rng + ?Sized>(rng: &mut R) -> PolicyNumber {
    let serial = rng.gen_range(0..SERIAL_UPPER_BOUND);
    let first = uppercase_letter(rng);
    let second = uppercase_letter(rng);
    PolicyNumber::new_unchecked(format!("{POLICY_NUMBER_PREFIX}{serial:09}{first}{second}"))
}

fn uppercase_letter<R: Rng + ?Sized>(rng: &mut R) -> char {
    char::from(b'A' + rng.gen_range(0..26u8))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_prefix_and_length() {
        let mut rng = StdRng::seed_from_u64(0);
        let number = generate_policy_number(&mut rng);
        assert!(number.as_str().starts_with("PL"));
        assert_eq!(number.as_str().len(), 13);
    }
}
