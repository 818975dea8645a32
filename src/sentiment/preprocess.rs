//! Text normalization ahead of scoring: lowercase, tokenize, drop
//! stop-words, lemmatize, rejoin.

use super::lexicon::{INVARIANTS, IRREGULAR_VERBS, LEMMA_EXCEPTIONS, STOP_WORDS, is_known, is_scored};
use once_cell::sync::Lazy;
use regex::Regex;

/// Words (with an optional apostrophe suffix) or single punctuation marks.
static TOKEN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[\p{L}\p{N}]+(?:['’][\p{L}]+)?|[^\s\p{L}\p{N}]").unwrap());

/// Split lowercased text into word and punctuation tokens.
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().replace('’', "'"))
        .collect()
}

/// Candidate base forms for an inflected verb or adverb, most specific first.
fn inflection_candidates(token: &str) -> Vec<String> {
    let mut candidates = Vec::new();
    if let Some(stem) = token.strip_suffix("ied") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("ed") {
        candidates.push(stem.to_string());
        candidates.extend(undouble(stem));
    }
    if let Some(stem) = token.strip_suffix('d') {
        candidates.push(stem.to_string());
    }
    if let Some(stem) = token.strip_suffix("ing") {
        candidates.push(stem.to_string());
        candidates.push(format!("{stem}e"));
        candidates.extend(undouble(stem));
    }
    if let Some(stem) = token.strip_suffix("ily") {
        candidates.push(format!("{stem}y"));
    }
    if let Some(stem) = token.strip_suffix("ly") {
        candidates.push(stem.to_string());
    }
    candidates
}

/// "stopp" -> "stop", "winn" -> "win".
fn undouble(stem: &str) -> Option<String> {
    let mut chars = stem.chars().rev();
    match (chars.next(), chars.next()) {
        (Some(a), Some(b)) if a == b => Some(stem[..stem.len() - a.len_utf8()].to_string()),
        _ => None,
    }
}

/// Map an inflected form onto the lexicon entry it derives from, if any.
///
/// "killed" -> "kill", "celebrating" -> "celebrate", "grew" -> "grow",
/// "strongly" -> "strong". Only stems a lexicon scores are accepted.
pub fn scored_base(token: &str) -> Option<String> {
    if let Some(base) = IRREGULAR_VERBS.get(token) {
        return Some((*base).to_string());
    }
    inflection_candidates(token)
        .into_iter()
        .find(|candidate| candidate.chars().count() >= 3 && is_scored(candidate))
}

/// Reduce a token to the form the scorers look up.
///
/// Inflected forms of scored words are mapped to their lexicon entry; other
/// noun-like tokens are singularized. Tokens any table knows as-is, numbers,
/// punctuation and known invariant words are returned untouched.
pub fn lemmatize(token: &str) -> String {
    if let Some(lemma) = LEMMA_EXCEPTIONS.get(token) {
        return (*lemma).to_string();
    }
    if is_known(token) {
        return token.to_string();
    }
    if let Some(base) = scored_base(token) {
        return base;
    }
    if INVARIANTS.contains(token)
        || token.chars().count() <= 3
        || !token.chars().all(char::is_alphabetic)
    {
        return token.to_string();
    }

    const RULES: [(&str, &str); 5] = [
        ("sses", "ss"),
        ("ies", "y"),
        ("ches", "ch"),
        ("shes", "sh"),
        ("xes", "x"),
    ];
    for (suffix, replacement) in RULES {
        if let Some(stem) = token.strip_suffix(suffix) {
            return format!("{stem}{replacement}");
        }
    }

    if token.ends_with("ss") || token.ends_with("us") || token.ends_with("is") {
        return token.to_string();
    }
    match token.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => token.to_string(),
    }
}

/// Full normalization pipeline; the result is what both scorers see.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    tokenize(&lowered)
        .into_iter()
        .filter(|token| !STOP_WORDS.contains(token.as_str()))
        .map(|token| lemmatize(&token))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_splits_punctuation() {
        assert_eq!(
            tokenize("economy grows 5%!"),
            vec!["economy", "grows", "5", "%", "!"]
        );
        assert_eq!(tokenize("don’t stop"), vec!["don't", "stop"]);
    }

    #[test]
    fn test_lemmatize_plurals() {
        assert_eq!(lemmatize("policies"), "policy");
        assert_eq!(lemmatize("grows"), "grow");
        assert_eq!(lemmatize("churches"), "church");
        assert_eq!(lemmatize("taxes"), "tax");
        assert_eq!(lemmatize("classes"), "class");
        assert_eq!(lemmatize("children"), "child");
    }

    #[test]
    fn test_lemmatize_leaves_lemmas_alone() {
        assert_eq!(lemmatize("news"), "news");
        assert_eq!(lemmatize("crisis"), "crisis");
        assert_eq!(lemmatize("progress"), "progress");
        assert_eq!(lemmatize("status"), "status");
        assert_eq!(lemmatize("gas"), "gas");
        assert_eq!(lemmatize("2024s"), "2024s");
    }

    #[test]
    fn test_lemmatize_verb_inflections_onto_lexicon() {
        assert_eq!(lemmatize("killed"), "kill");
        assert_eq!(lemmatize("injured"), "injure");
        assert_eq!(lemmatize("destroyed"), "destroy");
        assert_eq!(lemmatize("praised"), "praise");
        assert_eq!(lemmatize("celebrated"), "celebrate");
        assert_eq!(lemmatize("celebrating"), "celebrate");
        assert_eq!(lemmatize("worried"), "worry");
        assert_eq!(lemmatize("winning"), "win");
        assert_eq!(lemmatize("died"), "die");
        assert_eq!(lemmatize("dying"), "die");
        assert_eq!(lemmatize("grew"), "grow");
        assert_eq!(lemmatize("surged"), "surge");
        assert_eq!(lemmatize("strongly"), "strong");
        assert_eq!(lemmatize("happily"), "happy");
    }

    #[test]
    fn test_lemmatize_leaves_unscored_inflections_and_modifiers() {
        assert_eq!(lemmatize("released"), "released");
        assert_eq!(lemmatize("morning"), "morning");
        assert_eq!(lemmatize("highly"), "highly");
        assert_eq!(lemmatize("slightly"), "slightly");
        assert_eq!(lemmatize("without"), "without");
    }

    #[test]
    fn test_normalize_drops_stop_words() {
        assert_eq!(
            normalize("The Economy is growing and the markets are strong"),
            "economy grow market strong"
        );
    }

    #[test]
    fn test_normalize_ignores_case_and_outer_whitespace() {
        assert_eq!(
            normalize("  Great Victory for the Workers  "),
            normalize("great victory for the workers")
        );
    }
}
