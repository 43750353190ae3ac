//! Adjective/adverb lexicon for the pattern-style polarity scorer.
//!
//! Each entry carries a polarity in `[-1, 1]`, a subjectivity in `[0, 1]` and an
//! intensity. Intensifying adverbs are flagged as modifiers: they scale the
//! polarity and subjectivity of the lexicon word that follows them.

use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LexiconEntry {
    pub polarity: f64,
    pub subjectivity: f64,
    pub intensity: f64,
    pub modifier: bool,
}

// (word, polarity, subjectivity, intensity)
const ADVERBS: &[(&str, f64, f64, f64)] = &[
    ("very", 0.2, 0.3, 1.3),
    ("really", 0.2, 0.2, 1.4),
    ("so", 0.0, 0.0, 1.3),
    ("too", 0.0, 0.0, 1.2),
    ("extremely", 0.0, 1.0, 1.5),
    ("incredibly", 0.9, 0.9, 1.5),
    ("highly", 0.16, 0.54, 1.3),
    ("truly", 0.0, 0.0, 1.3),
    ("absolutely", 0.2, 0.9, 1.6),
    ("completely", 0.1, 0.4, 1.5),
    ("totally", 0.0, 0.75, 1.5),
    ("quite", 0.0, 1.0, 1.1),
    ("pretty", 0.25, 1.0, 1.1),
    ("rather", 0.0, 0.0, 0.9),
    ("somewhat", 0.0, 0.0, 0.8),
    ("slightly", -0.17, 0.17, 0.7),
    ("barely", 0.0, 0.5, 0.5),
    ("most", 0.5, 0.5, 1.5),
    ("more", 0.5, 0.5, 1.2),
    ("less", -0.17, 0.07, 0.8),
];

// (word, polarity, subjectivity)
const ADJECTIVES: &[(&str, f64, f64)] = &[
    // positive
    ("good", 0.7, 0.6),
    ("great", 0.8, 0.75),
    ("excellent", 1.0, 1.0),
    ("amazing", 0.6, 0.9),
    ("awesome", 1.0, 1.0),
    ("wonderful", 1.0, 1.0),
    ("fantastic", 0.4, 0.9),
    ("brilliant", 0.9, 1.0),
    ("superb", 1.0, 1.0),
    ("outstanding", 0.5, 0.75),
    ("perfect", 1.0, 1.0),
    ("best", 1.0, 0.3),
    ("better", 0.5, 0.5),
    ("nice", 0.6, 1.0),
    ("fine", 0.42, 0.5),
    ("beautiful", 0.85, 1.0),
    ("lovely", 0.5, 0.75),
    ("pretty", 0.25, 1.0),
    ("cute", 0.5, 1.0),
    ("happy", 0.8, 1.0),
    ("glad", 0.5, 1.0),
    ("delighted", 0.7, 0.8),
    ("pleased", 0.5, 1.0),
    ("joyful", 0.8, 0.9),
    ("cheerful", 0.7, 0.9),
    ("excited", 0.4, 0.75),
    ("exciting", 0.3, 0.8),
    ("fun", 0.3, 0.2),
    ("funny", 0.25, 1.0),
    ("interesting", 0.5, 0.5),
    ("impressive", 1.0, 1.0),
    ("enjoyable", 0.5, 0.6),
    ("pleasant", 0.73, 0.97),
    ("friendly", 0.38, 0.5),
    ("kind", 0.6, 0.9),
    ("helpful", 0.6, 0.7),
    ("useful", 0.3, 0.0),
    ("easy", 0.43, 0.83),
    ("fast", 0.2, 0.6),
    ("smart", 0.21, 0.64),
    ("clever", 0.5, 1.0),
    ("bright", 0.7, 0.9),
    ("clean", 0.37, 0.69),
    ("fresh", 0.3, 0.5),
    ("safe", 0.5, 0.5),
    ("strong", 0.43, 0.73),
    ("successful", 0.75, 0.95),
    ("favorite", 0.5, 1.0),
    ("favourite", 0.5, 1.0),
    ("love", 0.5, 0.6),
    ("loved", 0.7, 0.8),
    ("lovable", 0.5, 0.6),
    ("like", 0.0, 0.0),
    ("liked", 0.6, 0.6),
    ("enjoy", 0.4, 0.5),
    ("enjoyed", 0.4, 0.5),
    ("recommend", 0.3, 0.4),
    ("positive", 0.23, 0.55),
    ("correct", 0.0, 0.0),
    ("right", 0.29, 0.54),
    ("true", 0.35, 0.65),
    ("real", 0.2, 0.3),
    ("new", 0.14, 0.45),
    ("calm", 0.3, 0.75),
    ("comfortable", 0.4, 0.7),
    ("gorgeous", 0.7, 0.9),
    ("elegant", 0.6, 0.9),
    ("generous", 0.6, 0.6),
    ("honest", 0.6, 0.9),
    ("proud", 0.8, 1.0),
    ("grateful", 0.6, 0.9),
    ("thankful", 0.5, 0.8),
    ("hopeful", 0.5, 0.8),
    ("optimistic", 0.5, 0.8),
    ("satisfied", 0.5, 1.0),
    ("satisfying", 0.5, 0.8),
    ("reliable", 0.5, 0.6),
    ("incredible", 0.9, 0.9),
    ("magnificent", 1.0, 1.0),
    ("remarkable", 0.75, 0.75),
    ("stunning", 0.5, 0.95),
    ("charming", 0.5, 0.9),
    ("adorable", 0.5, 1.0),
    ("classic", 0.17, 0.17),
    ("rich", 0.38, 0.75),
    ("warm", 0.6, 0.6),
    ("win", 0.8, 0.4),
    ("won", 0.8, 0.4),
    ("well", 0.0, 0.0),
    // negative
    ("bad", -0.7, 0.67),
    ("worse", -0.4, 0.6),
    ("worst", -1.0, 1.0),
    ("terrible", -1.0, 1.0),
    ("horrible", -1.0, 1.0),
    ("awful", -1.0, 1.0),
    ("dreadful", -0.9, 1.0),
    ("poor", -0.4, 0.6),
    ("sad", -0.5, 1.0),
    ("unhappy", -0.6, 0.9),
    ("miserable", -1.0, 1.0),
    ("depressed", -0.8, 0.9),
    ("depressing", -0.8, 0.9),
    ("angry", -0.5, 1.0),
    ("mad", -0.63, 1.0),
    ("furious", -0.9, 1.0),
    ("annoying", -0.8, 0.9),
    ("annoyed", -0.4, 0.5),
    ("upset", -0.5, 0.8),
    ("frustrating", -0.4, 0.7),
    ("frustrated", -0.7, 0.4),
    ("disappointing", -0.6, 0.7),
    ("disappointed", -0.75, 0.75),
    ("boring", -1.0, 1.0),
    ("bored", -0.5, 1.0),
    ("dull", -0.31, 0.75),
    ("ugly", -0.7, 1.0),
    ("stupid", -0.8, 1.0),
    ("dumb", -0.38, 0.5),
    ("silly", -0.5, 0.9),
    ("ridiculous", -0.33, 1.0),
    ("useless", -0.5, 0.2),
    ("broken", -0.4, 0.4),
    ("wrong", -0.5, 0.9),
    ("false", -0.4, 0.6),
    ("hard", -0.29, 0.54),
    ("difficult", -0.5, 1.0),
    ("slow", -0.3, 0.4),
    ("expensive", -0.5, 0.7),
    ("cheap", 0.4, 0.7),
    ("dirty", -0.6, 0.8),
    ("dangerous", -0.6, 0.9),
    ("scary", -0.5, 1.0),
    ("afraid", -0.6, 0.9),
    ("scared", -0.5, 0.8),
    ("nervous", -0.3, 1.0),
    ("worried", -0.3, 0.6),
    ("anxious", -0.25, 0.8),
    ("lonely", -0.5, 0.9),
    ("tired", -0.4, 0.7),
    ("sick", -0.71, 0.86),
    ("painful", -0.7, 0.9),
    ("hurt", -0.6, 0.7),
    ("nasty", -1.0, 1.0),
    ("disgusting", -1.0, 1.0),
    ("gross", -0.8, 0.9),
    ("rude", -0.6, 0.9),
    ("mean", -0.31, 0.69),
    ("cruel", -1.0, 1.0),
    ("evil", -1.0, 1.0),
    ("weak", -0.38, 0.62),
    ("negative", -0.3, 0.4),
    ("unfortunate", -0.5, 1.0),
    ("pathetic", -1.0, 1.0),
    ("mediocre", -0.4, 0.6),
    ("unpleasant", -0.6, 0.8),
    ("hate", -0.8, 0.9),
    ("hated", -0.9, 0.7),
    ("hateful", -0.8, 0.9),
    ("dislike", -0.5, 0.8),
    ("fail", -0.5, 0.3),
    ("failed", -0.5, 0.3),
    ("lost", -0.3, 0.5),
    ("crazy", -0.6, 0.9),
    ("insane", -1.0, 1.0),
    ("shocking", -1.0, 1.0),
    ("fake", -0.5, 1.0),
    ("lazy", -0.25, 1.0),
    ("late", -0.3, 0.6),
    ("old", 0.1, 0.2),
    ("small", -0.25, 0.4),
    ("big", 0.0, 0.1),
    ("sorry", -0.5, 1.0),
    ("unacceptable", -0.5, 0.5),
    ("noisy", -0.4, 0.8),
    ("confusing", -0.3, 0.5),
    ("confused", -0.4, 0.7),
    ("toxic", -0.5, 0.8),
];

/// Words that flip the next assessment.
pub(crate) fn is_negation(word: &str) -> bool {
    matches!(word, "not" | "no" | "never" | "n't") || word.ends_with("n't")
}

static LEXICON: Lazy<HashMap<&'static str, LexiconEntry>> = Lazy::new(|| {
    let mut map = HashMap::with_capacity(ADJECTIVES.len() + ADVERBS.len());
    for &(word, polarity, subjectivity) in ADJECTIVES {
        map.insert(
            word,
            LexiconEntry {
                polarity,
                subjectivity,
                intensity: 1.0,
                modifier: false,
            },
        );
    }
    // Adverbs win when a word is listed twice ("pretty").
    for &(word, polarity, subjectivity, intensity) in ADVERBS {
        map.insert(
            word,
            LexiconEntry {
                polarity,
                subjectivity,
                intensity,
                modifier: true,
            },
        );
    }
    map
});

pub fn lookup(word: &str) -> Option<LexiconEntry> {
    LEXICON.get(word).copied()
}
