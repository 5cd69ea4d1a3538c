//! Secret generation by rejection sampling.

use super::super::{DIGIT_COUNT, GameRng, Secret};
use tracing::{instrument, trace};

/// Draws a fresh secret.
///
/// The first digit is uniform over 1..=9. Each further digit is drawn
/// uniformly from 0..=9 and kept only if it is not already present.
#[instrument(skip(rng), fields(seed = rng.seed()))]
pub fn generate_secret(rng: &mut GameRng) -> Secret {
    let mut digits = [0u8; DIGIT_COUNT];
    digits[0] = rng.digit(1..=9);
    let mut filled = 1;
    let mut draws = 1u32;

    while filled < DIGIT_COUNT {
        let candidate = rng.digit(0..=9);
        draws += 1;
        if !digits[..filled].contains(&candidate) {
            digits[filled] = candidate;
            filled += 1;
        }
    }

    trace!(draws, "Secret drawn");
    Secret::from_digits(digits)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_secrets_are_legal() {
        let mut rng = GameRng::new(2024);
        for _ in 0..10_000 {
            let [a, b, c] = generate_secret(&mut rng).digits();
            assert_ne!(a, 0);
            assert!(a != b && a != c && b != c);
            assert!(a <= 9 && b <= 9 && c <= 9);
        }
    }

    #[test]
    fn test_generated_secrets_reparse() {
        let mut rng = GameRng::new(5);
        for _ in 0..1_000 {
            let secret = generate_secret(&mut rng);
            assert_eq!(Secret::parse(&secret.to_string()), Ok(secret));
        }
    }

    #[test]
    fn test_every_leading_digit_appears() {
        let mut rng = GameRng::new(11);
        let leading: HashSet<u8> = (0..2_000)
            .map(|_| generate_secret(&mut rng).digits()[0])
            .collect();
        assert_eq!(leading, (1..=9).collect());
    }

    #[test]
    fn test_zero_appears_after_first_position() {
        let mut rng = GameRng::new(3);
        let has_zero = (0..2_000).any(|_| generate_secret(&mut rng).contains(0));
        assert!(has_zero);
    }
}
