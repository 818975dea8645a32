//! General-purpose polarity score.
//!
//! Averages the polarity of every rated adjective in the text. An
//! intensifier scales the next rated word, a negation inverts and halves it.

use super::lexicon::{INTENSIFIERS, NEGATIONS, POLARITY};

/// Polarity in `[-1.0, 1.0]`; `0.0` when no rated word is present.
pub fn polarity(tokens: &[&str]) -> f64 {
    let mut total = 0.0;
    let mut rated = 0usize;
    let mut intensity = 1.0;
    let mut negated = false;

    for &token in tokens {
        if let Some(factor) = INTENSIFIERS.get(token) {
            intensity *= factor;
            continue;
        }
        if NEGATIONS.contains(token) {
            negated = true;
            continue;
        }
        let Some(score) = POLARITY.get(token) else {
            intensity = 1.0;
            negated = false;
            continue;
        };

        let mut value = (score * intensity).clamp(-1.0, 1.0);
        if negated {
            value *= -0.5;
        }
        total += value;
        rated += 1;
        intensity = 1.0;
        negated = false;
    }

    if rated == 0 {
        0.0
    } else {
        (total / rated as f64).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_rated_words_is_zero() {
        assert_eq!(polarity(&["parliament", "session", "monday"]), 0.0);
        assert_eq!(polarity(&[]), 0.0);
    }

    #[test]
    fn test_average_of_rated_words() {
        let p = polarity(&["good", "result", "bad", "weather"]);
        assert!(p.abs() < 1e-9, "good (0.7) and bad (-0.7) should cancel, got {p}");

        let p = polarity(&["excellent", "strong", "growth"]);
        assert!((p - (1.0 + 0.4333) / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_intensifier_scales_and_clamps() {
        let plain = polarity(&["good"]);
        let boosted = polarity(&["extremely", "good"]);
        assert!(boosted > plain);
        assert_eq!(polarity(&["extremely", "excellent"]), 1.0);
    }

    #[test]
    fn test_negation_inverts_and_halves() {
        let p = polarity(&["never", "good"]);
        assert!((p + 0.35).abs() < 1e-9);
    }

    #[test]
    fn test_modifiers_reset_after_unrated_word() {
        assert_eq!(polarity(&["never", "mind", "good"]), polarity(&["good"]));
    }
}
