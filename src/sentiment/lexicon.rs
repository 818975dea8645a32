//! Word lists backing the preprocessor and both scorers.
//!
//! All tables are built once on first use and shared read-only.

use once_cell::sync::Lazy;
use std::collections::{HashMap, HashSet};

/// English stop-words removed before scoring.
static STOP_WORD_LIST: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

/// Valence ratings on the -4..=4 scale used by the compound scorer.
static VALENCE_LIST: &[(&str, f64)] = &[
    // positive
    ("accomplish", 1.8), ("accomplishment", 2.1), ("achieve", 1.9), ("achievement", 2.2),
    ("admire", 2.1), ("advance", 1.2), ("advantage", 1.5), ("agree", 1.5), ("agreement", 2.2),
    ("amazing", 2.8), ("applaud", 2.0), ("approve", 1.8), ("benefit", 2.0), ("best", 3.2),
    ("better", 1.9), ("boost", 1.7), ("brilliant", 2.8), ("celebrate", 2.7), ("celebration", 2.8),
    ("champion", 2.9), ("cheer", 2.3), ("clean", 1.7), ("comfortable", 2.3), ("commend", 1.9),
    ("confidence", 2.3), ("confident", 2.2), ("cooperation", 1.9), ("courage", 2.2),
    ("delight", 2.9), ("delighted", 2.9), ("efficient", 1.8), ("encourage", 2.3),
    ("encouraging", 2.4), ("enjoy", 2.2), ("excellent", 2.7), ("excited", 1.4),
    ("exciting", 2.2), ("fair", 1.3), ("fantastic", 2.6), ("favor", 1.7), ("fine", 0.8),
    ("free", 2.3), ("freedom", 3.2), ("friendly", 2.2), ("gain", 2.4), ("generous", 2.3),
    ("glad", 2.0), ("good", 1.9), ("great", 3.1), ("grow", 1.3), ("growth", 1.6),
    ("happy", 2.7), ("healthy", 1.7), ("help", 1.7), ("helpful", 1.8), ("honest", 2.3),
    ("hope", 1.9), ("hopeful", 2.3), ("impressive", 2.3), ("improve", 1.9),
    ("improvement", 2.0), ("innovative", 1.9), ("inspire", 2.7), ("justice", 2.4),
    ("kind", 2.4), ("landmark", 1.4), ("lead", 0.9), ("leader", 1.1), ("love", 3.2),
    ("optimism", 2.5), ("optimistic", 2.3), ("outstanding", 3.0), ("peace", 2.5),
    ("peaceful", 2.2), ("perfect", 2.7), ("pleased", 1.9), ("popular", 1.8),
    ("positive", 2.6), ("praise", 2.6), ("progress", 1.8), ("prosper", 2.4),
    ("prosperity", 2.6), ("prosperous", 2.1), ("protect", 1.3), ("proud", 2.1),
    ("rally", 1.1), ("recover", 1.4), ("recovery", 1.4), ("reform", 0.9), ("relief", 2.1),
    ("remarkable", 2.4), ("resolve", 1.6), ("reward", 2.1), ("rise", 0.8), ("robust", 1.4),
    ("safe", 1.9), ("safety", 1.8), ("save", 2.2), ("secure", 1.4), ("smart", 1.7),
    ("solid", 1.3), ("solution", 1.3), ("stable", 1.2), ("strength", 2.2), ("strong", 2.3),
    ("success", 2.7), ("successful", 2.8), ("support", 1.7), ("surge", 1.0), ("thank", 1.5),
    ("thrive", 2.6), ("triumph", 3.2), ("trust", 2.3), ("unity", 1.9), ("upbeat", 1.9),
    ("victory", 2.8), ("welcome", 2.0), ("win", 2.8), ("winner", 2.8), ("wonderful", 2.7),
    // negative
    ("abuse", -3.2), ("accuse", -1.9), ("accusation", -2.1), ("afraid", -2.2),
    ("aggressive", -0.6), ("alarm", -1.4), ("anger", -2.7), ("angry", -2.3),
    ("arrest", -1.4), ("attack", -2.1), ("awful", -2.0), ("bad", -2.5), ("ban", -2.6),
    ("blame", -1.4), ("chaos", -2.7), ("collapse", -2.2), ("condemn", -1.6),
    ("conflict", -1.3), ("corrupt", -3.0), ("corruption", -1.9), ("crash", -1.7),
    ("crime", -2.5), ("crisis", -3.1), ("critic", -1.1), ("criticism", -1.9),
    ("criticize", -1.9), ("damage", -2.2), ("danger", -2.4), ("dangerous", -2.1),
    ("dead", -3.3), ("death", -2.9), ("die", -2.9), ("decline", -1.1), ("defeat", -2.0),
    ("deficit", -1.7), ("delay", -1.3), ("deny", -0.7), ("destroy", -2.8),
    ("difficult", -1.5), ("disappoint", -2.3), ("disappointing", -2.2), ("disaster", -3.1),
    ("dispute", -1.7), ("doubt", -1.5), ("drop", -1.1), ("fail", -2.5), ("failure", -2.3),
    ("fall", -0.8), ("fear", -2.2), ("fight", -1.6), ("flood", -1.4), ("fraud", -2.8), ("grief", -2.2),
    ("guilty", -1.8), ("harm", -2.5), ("hate", -2.7), ("horrible", -2.5), ("hurt", -2.4),
    ("illegal", -2.6), ("inflation", -0.9), ("injure", -2.0), ("injury", -2.5), ("kill", -3.7),
    ("lie", -1.6), ("loss", -1.3), ("lose", -1.7), ("murder", -3.7), ("negative", -2.7),
    ("oppose", -1.1), ("pain", -2.3), ("panic", -2.3), ("plunge", -1.4), ("poor", -2.1),
    ("poverty", -2.3), ("problem", -1.7), ("protest", -1.0), ("recession", -1.9),
    ("reject", -1.7), ("riot", -2.6), ("risk", -1.1), ("sad", -2.1), ("scandal", -1.9),
    ("scare", -2.2), ("shock", -1.6), ("shortage", -1.4), ("slump", -1.6), ("struggle", -1.5),
    ("suffer", -2.1), ("terrible", -2.1), ("terror", -3.0), ("threat", -2.4),
    ("threaten", -2.0), ("tragedy", -3.4), ("tragic", -3.4), ("trouble", -1.7),
    ("unemployment", -1.9), ("unfair", -2.1), ("unrest", -1.8), ("violence", -3.1),
    ("violent", -2.9), ("war", -2.9), ("warn", -0.4), ("warning", -1.4), ("weak", -1.9),
    ("worry", -1.9), ("worse", -2.1), ("worst", -3.1), ("wrong", -2.1),
];

/// Adjective polarities on the -1..=1 scale used by the polarity scorer.
static POLARITY_LIST: &[(&str, f64)] = &[
    ("amazing", 0.6), ("beautiful", 0.85), ("best", 1.0), ("better", 0.5), ("brilliant", 0.9),
    ("clear", 0.1), ("comfortable", 0.4), ("confident", 0.5), ("effective", 0.6),
    ("excellent", 1.0), ("fair", 0.7), ("fantastic", 0.4), ("fine", 0.4167), ("free", 0.4),
    ("glad", 0.5), ("good", 0.7), ("great", 0.8), ("happy", 0.8), ("healthy", 0.5),
    ("high", 0.16), ("historic", 0.0), ("important", 0.4), ("impressive", 1.0),
    ("incredible", 0.9), ("new", 0.1364), ("nice", 0.6), ("optimistic", 0.5),
    ("peaceful", 0.25), ("perfect", 1.0), ("pleased", 0.5), ("popular", 0.6),
    ("positive", 0.2273), ("powerful", 0.3), ("proud", 0.8), ("real", 0.2),
    ("remarkable", 0.75), ("robust", 0.5), ("safe", 0.5), ("secure", 0.4),
    ("significant", 0.375), ("solid", 0.2), ("stable", 0.2), ("strong", 0.4333),
    ("successful", 0.75), ("true", 0.35), ("welcome", 0.8), ("wonderful", 1.0),
    ("angry", -0.5), ("awful", -1.0), ("bad", -0.7), ("corrupt", -0.5), ("criminal", -0.4),
    ("dangerous", -0.6), ("dead", -0.2), ("difficult", -0.5), ("disappointing", -0.6),
    ("false", -0.4), ("hard", -0.2917), ("horrible", -1.0), ("illegal", -0.5),
    ("low", -0.1), ("negative", -0.3), ("poor", -0.4), ("sad", -0.5), ("serious", -0.3333),
    ("severe", -0.7), ("terrible", -1.0), ("unfair", -0.5), ("violent", -0.8),
    ("weak", -0.375), ("worse", -0.4), ("worst", -1.0), ("wrong", -0.5),
];

/// Degree modifiers for the compound scorer: (word, increment sign).
static BOOSTER_LIST: &[(&str, f64)] = &[
    ("absolutely", 1.0), ("amazingly", 1.0), ("completely", 1.0), ("considerably", 1.0),
    ("deeply", 1.0), ("enormously", 1.0), ("entirely", 1.0), ("especially", 1.0),
    ("exceptionally", 1.0), ("extremely", 1.0), ("greatly", 1.0), ("highly", 1.0),
    ("hugely", 1.0), ("incredibly", 1.0), ("major", 1.0), ("particularly", 1.0),
    ("really", 1.0), ("remarkably", 1.0), ("significantly", 1.0), ("substantially", 1.0),
    ("totally", 1.0), ("tremendously", 1.0), ("truly", 1.0), ("unusually", 1.0),
    ("utterly", 1.0), ("almost", -1.0), ("barely", -1.0), ("hardly", -1.0),
    ("marginally", -1.0), ("partly", -1.0), ("scarcely", -1.0), ("slightly", -1.0),
    ("somewhat", -1.0),
];

/// Adverbs scaling the next adjective for the polarity scorer.
static INTENSIFIER_LIST: &[(&str, f64)] = &[
    ("absolutely", 1.4), ("especially", 1.3), ("extremely", 1.5), ("highly", 1.3),
    ("incredibly", 1.5), ("particularly", 1.3), ("really", 1.3), ("remarkably", 1.3),
    ("slightly", 0.5), ("somewhat", 0.7), ("truly", 1.3), ("fairly", 0.9),
];

/// Words that flip the polarity of what follows. "not", "no" and "nor" are
/// stop-words and never reach the scorers, so they are not listed.
static NEGATION_LIST: &[&str] = &[
    "never", "neither", "nobody", "nothing", "nowhere", "none", "cannot", "without",
    "ain't", "can't",
];

/// Plural or irregular forms with known lemmas.
static LEMMA_EXCEPTION_LIST: &[(&str, &str)] = &[
    ("men", "man"), ("women", "woman"), ("children", "child"), ("feet", "foot"),
    ("teeth", "tooth"), ("mice", "mouse"), ("geese", "goose"), ("crises", "crisis"),
    ("analyses", "analysis"), ("theses", "thesis"), ("bases", "basis"),
    ("diagnoses", "diagnosis"), ("indices", "index"), ("criteria", "criterion"),
    ("phenomena", "phenomenon"), ("lives", "life"), ("wives", "wife"), ("knives", "knife"),
    ("leaves", "leaf"), ("halves", "half"), ("thieves", "thief"), ("wolves", "wolf"),
];

/// Irregular inflections of scored verbs.
static IRREGULAR_VERB_LIST: &[(&str, &str)] = &[
    ("grew", "grow"), ("grown", "grow"), ("fell", "fall"), ("fallen", "fall"),
    ("rose", "rise"), ("risen", "rise"), ("lost", "lose"), ("fought", "fight"),
    ("led", "lead"), ("won", "win"), ("dying", "die"), ("lying", "lie"),
];

/// Words that end like plurals but are already lemmas.
static INVARIANT_LIST: &[&str] = &[
    "news", "series", "species", "politics", "economics", "physics", "mathematics",
    "ethics", "means", "always", "perhaps", "whereas", "besides", "towards", "afterwards",
    "sometimes", "yes", "gas", "bus", "plus", "thus", "chaos", "status", "census",
    "campus", "bonus", "focus", "virus", "consensus", "crisis", "basis", "analysis",
    "thesis", "emphasis", "diagnosis", "canvas", "alias", "atlas", "lens",
];

pub static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| STOP_WORD_LIST.iter().copied().collect());

pub static VALENCE: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| VALENCE_LIST.iter().copied().collect());

pub static POLARITY: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| POLARITY_LIST.iter().copied().collect());

pub static BOOSTERS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| BOOSTER_LIST.iter().copied().collect());

pub static INTENSIFIERS: Lazy<HashMap<&'static str, f64>> =
    Lazy::new(|| INTENSIFIER_LIST.iter().copied().collect());

pub static NEGATIONS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATION_LIST.iter().copied().collect());

pub static LEMMA_EXCEPTIONS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| LEMMA_EXCEPTION_LIST.iter().copied().collect());

pub static IRREGULAR_VERBS: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| IRREGULAR_VERB_LIST.iter().copied().collect());

pub static INVARIANTS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| INVARIANT_LIST.iter().copied().collect());

/// True when the word is scored by either lexicon.
pub fn is_scored(word: &str) -> bool {
    VALENCE.contains_key(word) || POLARITY.contains_key(word)
}

/// True when any table knows the word as-is; such tokens are never reduced.
pub fn is_known(word: &str) -> bool {
    is_scored(word)
        || BOOSTERS.contains_key(word)
        || INTENSIFIERS.contains_key(word)
        || NEGATIONS.contains(word)
}
