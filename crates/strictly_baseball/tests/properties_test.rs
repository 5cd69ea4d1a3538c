//! Property tests for generation and scoring.

use proptest::prelude::*;
use strictly_baseball::{GameRng, Guess, Secret, generate_secret, score_guess};

/// Strategy producing three distinct digits with a non-zero lead, as text.
fn legal_number() -> impl Strategy<Value = String> {
    (1u8..=9, 0u8..=9, 0u8..=9)
        .prop_filter("digits must be distinct", |(a, b, c)| {
            a != b && a != c && b != c
        })
        .prop_map(|(a, b, c)| format!("{a}{b}{c}"))
}

proptest! {
    #[test]
    fn strikes_plus_balls_is_shared_digit_count(g in legal_number(), s in legal_number()) {
        let guess: Guess = g.parse().unwrap();
        let secret: Secret = s.parse().unwrap();
        let score = score_guess(&guess, &secret);

        let shared = g.chars().filter(|c| s.contains(*c)).count();
        prop_assert_eq!(usize::from(score.strikes() + score.balls()), shared);
        prop_assert!(score.strikes() + score.balls() <= 3);
    }

    #[test]
    fn exact_guess_is_three_strikes(s in legal_number()) {
        let guess: Guess = s.parse().unwrap();
        let secret: Secret = s.parse().unwrap();
        let score = score_guess(&guess, &secret);
        prop_assert_eq!(score.strikes(), 3);
        prop_assert_eq!(score.balls(), 0);
    }

    #[test]
    fn generated_secrets_are_legal(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let secret = generate_secret(&mut rng);
        prop_assert!(Secret::parse(&secret.to_string()).is_ok());
    }

    #[test]
    fn validation_never_panics(input in ".{0,6}") {
        let _ = Guess::parse(&input);
    }
}

#[test]
fn ten_thousand_secrets_hold_invariant() {
    let mut rng = GameRng::from_entropy();
    for _ in 0..10_000 {
        let secret = generate_secret(&mut rng);
        let text = secret.to_string();
        let digits: Vec<char> = text.chars().collect();
        assert_eq!(digits.len(), 3);
        assert_ne!(digits[0], '0');
        assert!(digits[0] != digits[1] && digits[0] != digits[2] && digits[1] != digits[2]);
    }
}

#[test]
fn disjoint_guess_is_out() {
    let secret: Secret = "123".parse().unwrap();
    for guess in ["456", "789", "907", "465"] {
        let score = score_guess(&guess.parse().unwrap(), &secret);
        assert!(score.is_out(), "{guess} should be OUT");
    }
}
