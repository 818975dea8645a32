//! Rule-based compound score.
//!
//! Sums lexicon valences (adjusted by preceding boosters and negations and by
//! a contrastive "but"), adds emphasis for `!` and `?`, then squashes the sum
//! into `[-1, 1]` with `x / sqrt(x² + ALPHA)`.
//!
//! "but" is a stop-word, so token streams coming out of
//! [`normalize`](super::preprocess::normalize) never carry it and the
//! contrastive rule only applies to callers that keep it in.

use super::lexicon::{BOOSTERS, NEGATIONS, VALENCE};

const BOOSTER_INCREMENT: f64 = 0.293;
const NEGATION_SCALAR: f64 = -0.74;
const EXCLAMATION_INCREMENT: f64 = 0.292;
const QUESTION_INCREMENT: f64 = 0.18;
const ALPHA: f64 = 15.0;

/// Compound valence in `[-1.0, 1.0]`.
pub fn compound(tokens: &[&str]) -> f64 {
    let mut valences = Vec::with_capacity(tokens.len());

    for (i, &token) in tokens.iter().enumerate() {
        let Some(&base) = VALENCE.get(token) else {
            valences.push(0.0);
            continue;
        };

        let mut valence = base;
        for (distance, decay) in [(1usize, 1.0), (2, 0.95), (3, 0.9)] {
            let Some(previous) = i.checked_sub(distance).map(|j| tokens[j]) else {
                break;
            };
            if let Some(direction) = BOOSTERS.get(previous) {
                let increment = BOOSTER_INCREMENT * direction * decay;
                valence += if valence < 0.0 { -increment } else { increment };
            }
        }

        let window_start = i.saturating_sub(3);
        if tokens[window_start..i]
            .iter()
            .any(|&previous| NEGATIONS.contains(previous))
        {
            valence *= NEGATION_SCALAR;
        }

        valences.push(valence);
    }

    if let Some(pivot) = tokens.iter().position(|&t| t == "but") {
        for (i, valence) in valences.iter_mut().enumerate() {
            if i < pivot {
                *valence *= 0.5;
            } else if i > pivot {
                *valence *= 1.5;
            }
        }
    }

    let mut sum: f64 = valences.iter().sum();
    let emphasis = punctuation_emphasis(tokens);
    if sum > 0.0 {
        sum += emphasis;
    } else if sum < 0.0 {
        sum -= emphasis;
    }

    normalize(sum)
}

fn punctuation_emphasis(tokens: &[&str]) -> f64 {
    let exclamations = tokens.iter().filter(|&&t| t == "!").count().min(4);
    let questions = tokens.iter().filter(|&&t| t == "?").count();

    let question_emphasis = match questions {
        0 | 1 => 0.0,
        2 | 3 => questions as f64 * QUESTION_INCREMENT,
        _ => 0.96,
    };
    exclamations as f64 * EXCLAMATION_INCREMENT + question_emphasis
}

fn normalize(score: f64) -> f64 {
    (score / (score * score + ALPHA).sqrt()).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unrated_text_is_zero() {
        assert_eq!(compound(&["parliament", "met", "monday"]), 0.0);
        assert_eq!(compound(&["!", "!"]), 0.0);
    }

    #[test]
    fn test_normalization() {
        // good = 1.9 -> 1.9 / sqrt(1.9² + 15)
        let expected = 1.9 / (1.9f64 * 1.9 + 15.0).sqrt();
        assert!((compound(&["good"]) - expected).abs() < 1e-9);
        assert!(compound(&["great", "great", "great", "great", "great"]) < 1.0);
    }

    #[test]
    fn test_booster_increases_magnitude() {
        assert!(compound(&["extremely", "good"]) > compound(&["good"]));
        assert!(compound(&["extremely", "bad"]) < compound(&["bad"]));
        assert!(compound(&["slightly", "good"]) < compound(&["good"]));
    }

    #[test]
    fn test_negation_flips_sign() {
        assert!(compound(&["never", "good"]) < 0.0);
        assert!(compound(&["without", "fear"]) > 0.0);
    }

    #[test]
    fn test_but_shifts_weight_to_second_clause() {
        assert!(compound(&["bad", "but", "good"]) > 0.0);
    }

    #[test]
    fn test_exclamations_add_emphasis() {
        assert!(compound(&["good", "!", "!"]) > compound(&["good"]));
        assert!(compound(&["bad", "!"]) < compound(&["bad"]));
    }
}
