//! Valence lexicon for token scoring.
//!
//! Valences are mean human ratings on a `[-4, 4]` scale. Keys are lower-case;
//! emoticons are stored in their lower-cased spelling (`:d`).

use once_cell::sync::Lazy;
use std::collections::HashMap;

const VALENCES: &[(&str, f64)] = &[
    // positive
    ("good", 1.9),
    ("great", 3.1),
    ("excellent", 2.7),
    ("amazing", 2.8),
    ("awesome", 3.1),
    ("wonderful", 2.7),
    ("fantastic", 2.6),
    ("brilliant", 2.8),
    ("perfect", 2.7),
    ("best", 3.2),
    ("better", 1.9),
    ("nice", 1.8),
    ("fine", 0.8),
    ("beautiful", 2.9),
    ("lovely", 2.8),
    ("pretty", 2.2),
    ("happy", 2.7),
    ("happiness", 2.6),
    ("glad", 2.0),
    ("joy", 2.8),
    ("love", 3.2),
    ("loved", 2.9),
    ("loving", 2.9),
    ("like", 2.0),
    ("liked", 1.8),
    ("enjoy", 2.2),
    ("enjoyed", 2.3),
    ("fun", 2.3),
    ("funny", 1.9),
    ("win", 2.8),
    ("won", 2.7),
    ("winner", 2.8),
    ("thanks", 1.9),
    ("thank", 1.5),
    ("yes", 1.7),
    ("ok", 1.2),
    ("okay", 0.9),
    ("cool", 1.3),
    ("smile", 1.5),
    ("hope", 1.9),
    ("helpful", 1.8),
    ("kind", 2.4),
    ("sweet", 2.0),
    ("excited", 1.4),
    ("exciting", 2.2),
    ("proud", 2.1),
    ("safe", 1.9),
    ("free", 2.3),
    ("interesting", 1.7),
    ("impressive", 2.3),
    ("recommend", 1.5),
    ("super", 2.9),
    ("success", 2.7),
    ("successful", 2.8),
    ("favorite", 2.0),
    ("grateful", 2.0),
    ("peace", 2.5),
    ("calm", 1.3),
    ("wow", 2.8),
    ("yay", 2.4),
    ("lol", 2.9),
    ("haha", 2.0),
    (":)", 2.0),
    (":-)", 1.3),
    (":d", 2.3),
    (";)", 0.9),
    ("<3", 1.9),
    // negative
    ("bad", -2.5),
    ("worse", -2.1),
    ("worst", -3.1),
    ("terrible", -2.1),
    ("horrible", -2.5),
    ("awful", -2.0),
    ("hate", -2.7),
    ("hated", -3.2),
    ("hates", -1.9),
    ("sad", -2.1),
    ("angry", -2.3),
    ("anger", -2.7),
    ("mad", -2.2),
    ("ugly", -2.3),
    ("boring", -1.3),
    ("bored", -1.1),
    ("stupid", -2.4),
    ("dumb", -2.3),
    ("poor", -2.1),
    ("fail", -2.5),
    ("failed", -2.3),
    ("failure", -2.3),
    ("wrong", -2.1),
    ("lose", -1.3),
    ("lost", -1.3),
    ("pain", -2.3),
    ("hurt", -2.4),
    ("kill", -3.7),
    ("killed", -3.5),
    ("death", -2.9),
    ("die", -2.9),
    ("fear", -2.2),
    ("scared", -2.2),
    ("afraid", -2.2),
    ("worried", -1.2),
    ("worry", -1.9),
    ("sorry", -0.3),
    ("problem", -1.7),
    ("useless", -1.8),
    ("disappointed", -1.9),
    ("disappointing", -2.2),
    ("annoying", -1.7),
    ("annoyed", -1.6),
    ("cry", -2.1),
    ("crying", -2.1),
    ("sick", -2.3),
    ("tired", -1.9),
    ("lonely", -1.8),
    ("no", -1.2),
    ("nasty", -2.6),
    ("evil", -3.4),
    ("damn", -1.7),
    ("crap", -1.6),
    ("sucks", -1.5),
    ("disaster", -3.1),
    ("broken", -1.7),
    ("rude", -2.0),
    ("miserable", -2.2),
    ("upset", -1.6),
    ("disgusting", -2.4),
    ("hell", -3.6),
    (":(", -1.9),
    (":-(", -1.5),
    (":'(", -2.2),
];

static LEXICON: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| VALENCES.iter().copied().collect());

/// Valence of a lower-cased word, if rated.
pub fn valence(word: &str) -> Option<f64> {
    LEXICON.get(word).copied()
}
