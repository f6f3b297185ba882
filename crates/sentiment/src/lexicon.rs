//! Word polarities used by the scorer.

use std::collections::HashMap;

/// General-purpose and market-news polarity words, scored in [-1, 1].
const POLARITY_WORDS: &[(&str, f64)] = &[
    // Strongly positive
    ("excellent", 1.0),
    ("outstanding", 0.9),
    ("best", 1.0),
    ("perfect", 1.0),
    ("amazing", 0.6),
    ("record", 0.5),
    ("soar", 0.8),
    ("soars", 0.8),
    ("soared", 0.8),
    ("soaring", 0.8),
    ("surge", 0.7),
    ("surges", 0.7),
    ("surged", 0.7),
    ("skyrocket", 0.8),
    ("skyrockets", 0.8),
    ("breakthrough", 0.7),
    ("boom", 0.6),
    ("booming", 0.6),
    ("rally", 0.6),
    ("rallies", 0.6),
    ("rallied", 0.6),
    ("beat", 0.5),
    ("beats", 0.5),
    ("outperform", 0.6),
    ("outperforms", 0.6),
    ("bullish", 0.7),
    // Moderately positive
    ("good", 0.7),
    ("great", 0.8),
    ("strong", 0.4),
    ("stronger", 0.4),
    ("gain", 0.4),
    ("gains", 0.4),
    ("gained", 0.4),
    ("rise", 0.3),
    ("rises", 0.3),
    ("rising", 0.3),
    ("rose", 0.3),
    ("up", 0.2),
    ("higher", 0.25),
    ("growth", 0.4),
    ("grow", 0.3),
    ("grows", 0.3),
    ("growing", 0.3),
    ("profit", 0.4),
    ("profits", 0.4),
    ("profitable", 0.5),
    ("upgrade", 0.5),
    ("upgrades", 0.5),
    ("upgraded", 0.5),
    ("buy", 0.2),
    ("positive", 0.5),
    ("optimistic", 0.5),
    ("optimism", 0.5),
    ("success", 0.6),
    ("successful", 0.75),
    ("win", 0.6),
    ("wins", 0.6),
    ("winning", 0.5),
    ("recover", 0.3),
    ("recovers", 0.3),
    ("recovery", 0.3),
    ("rebound", 0.3),
    ("rebounds", 0.3),
    ("improve", 0.4),
    ("improves", 0.4),
    ("improved", 0.4),
    ("innovative", 0.5),
    ("new", 0.136),
    ("top", 0.5),
    ("high", 0.16),
    ("happy", 0.8),
    ("love", 0.5),
    ("impressive", 1.0),
    ("solid", 0.3),
    ("stable", 0.2),
    ("launch", 0.1),
    ("launches", 0.1),
    ("approval", 0.4),
    ("approved", 0.4),
    ("dividend", 0.2),
    // Moderately negative
    ("bad", -0.7),
    ("weak", -0.375),
    ("weaker", -0.375),
    ("fall", -0.3),
    ("falls", -0.3),
    ("fell", -0.3),
    ("falling", -0.3),
    ("drop", -0.3),
    ("drops", -0.3),
    ("dropped", -0.3),
    ("decline", -0.4),
    ("declines", -0.4),
    ("declined", -0.4),
    ("down", -0.15),
    ("lower", -0.2),
    ("low", -0.2),
    ("loss", -0.5),
    ("losses", -0.5),
    ("lose", -0.4),
    ("loses", -0.4),
    ("miss", -0.4),
    ("misses", -0.4),
    ("missed", -0.4),
    ("downgrade", -0.5),
    ("downgrades", -0.5),
    ("downgraded", -0.5),
    ("sell", -0.2),
    ("negative", -0.3),
    ("pessimistic", -0.5),
    ("concern", -0.3),
    ("concerns", -0.3),
    ("worry", -0.4),
    ("worries", -0.4),
    ("risk", -0.25),
    ("risks", -0.25),
    ("risky", -0.4),
    ("uncertain", -0.3),
    ("uncertainty", -0.3),
    ("volatile", -0.3),
    ("slump", -0.5),
    ("slumps", -0.5),
    ("slowdown", -0.4),
    ("cut", -0.3),
    ("cuts", -0.3),
    ("layoffs", -0.5),
    ("lawsuit", -0.5),
    ("inquiry", -0.3),
    ("delay", -0.3),
    ("delays", -0.3),
    ("delayed", -0.3),
    ("warning", -0.4),
    ("warns", -0.4),
    ("bearish", -0.7),
    ("underperform", -0.5),
    ("sad", -0.5),
    // Strongly negative
    ("worst", -1.0),
    ("terrible", -1.0),
    ("awful", -1.0),
    ("horrible", -1.0),
    ("crash", -0.8),
    ("crashes", -0.8),
    ("crashed", -0.8),
    ("plunge", -0.8),
    ("plunges", -0.8),
    ("plunged", -0.8),
    ("plummet", -0.8),
    ("plummets", -0.8),
    ("collapse", -0.8),
    ("collapses", -0.8),
    ("tumble", -0.6),
    ("tumbles", -0.6),
    ("sink", -0.5),
    ("sinks", -0.5),
    ("fraud", -0.9),
    ("scandal", -0.8),
    ("bankrupt", -0.9),
    ("bankruptcy", -0.9),
    ("recession", -0.6),
    ("fail", -0.5),
    ("fails", -0.5),
    ("failed", -0.5),
    ("failure", -0.6),
    ("panic", -0.7),
    ("fear", -0.6),
    ("fears", -0.6),
];

/// Words that scale the polarity of the word that follows them.
const INTENSIFIERS: &[(&str, f64)] = &[
    ("very", 1.3),
    ("really", 1.2),
    ("extremely", 1.5),
    ("highly", 1.3),
    ("incredibly", 1.5),
    ("hugely", 1.4),
    ("sharply", 1.4),
    ("significantly", 1.3),
    ("most", 1.3),
    ("slightly", 0.6),
    ("somewhat", 0.8),
    ("barely", 0.5),
    ("modestly", 0.7),
];

/// Words that flip (and dampen) the polarity of a following word.
const NEGATIONS: &[&str] = &[
    "not", "no", "never", "neither", "nor", "none", "nobody", "nothing", "without", "cannot",
];

/// Multiplier applied to a polarity that follows a negation.
pub const NEGATION_FACTOR: f64 = -0.5;

/// A polarity dictionary with intensifiers and negations.
#[derive(Debug, Clone)]
pub struct Lexicon {
    polarity: HashMap<String, f64>,
    intensifiers: HashMap<String, f64>,
    negations: Vec<String>,
}

impl Default for Lexicon {
    fn default() -> Self {
        Self {
            polarity: POLARITY_WORDS
                .iter()
                .map(|(word, score)| (word.to_string(), *score))
                .collect(),
            intensifiers: INTENSIFIERS
                .iter()
                .map(|(word, factor)| (word.to_string(), *factor))
                .collect(),
            negations: NEGATIONS.iter().map(|w| w.to_string()).collect(),
        }
    }
}

impl Lexicon {
    /// Adds or overrides a word's polarity. The score is clamped to [-1, 1].
    pub fn with_word(mut self, word: &str, polarity: f64) -> Self {
        self.polarity
            .insert(word.to_lowercase(), polarity.clamp(-1.0, 1.0));
        self
    }

    pub fn polarity(&self, word: &str) -> Option<f64> {
        self.polarity.get(word).copied()
    }

    pub fn intensity(&self, word: &str) -> Option<f64> {
        self.intensifiers.get(word).copied()
    }

    /// True for negation words, including contractions such as "isn't" or "don't".
    pub fn is_negation(&self, word: &str) -> bool {
        word.ends_with("n't") || self.negations.iter().any(|n| n == word)
    }

    pub fn len(&self) -> usize {
        self.polarity.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polarity.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scores_are_bounded() {
        let lexicon = Lexicon::default();
        assert!(!lexicon.is_empty());
        for (_, score) in POLARITY_WORDS {
            assert!((-1.0..=1.0).contains(score));
        }
        assert_eq!(lexicon.polarity("great"), Some(0.8));
        assert_eq!(lexicon.polarity("table"), None);
    }

    #[test]
    fn test_negations_and_contractions() {
        let lexicon = Lexicon::default();
        assert!(lexicon.is_negation("not"));
        assert!(lexicon.is_negation("doesn't"));
        assert!(!lexicon.is_negation("note"));
    }

    #[test]
    fn test_with_word_overrides_and_clamps() {
        let lexicon = Lexicon::default().with_word("Moon", 3.0);
        assert_eq!(lexicon.polarity("moon"), Some(1.0));
    }
}
