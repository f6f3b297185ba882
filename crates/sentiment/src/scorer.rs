use crate::lexicon::{Lexicon, NEGATION_FACTOR};
use chrono::NaiveDateTime;
use core_types::SentimentEvent;
use serde::{Deserialize, Serialize};

/// Spreadsheet and dataframe placeholders that mean "no value" rather than text.
const MISSING_MARKERS: &[&str] = &["nan", "null", "none", "n/a", "na", "<na>"];

/// How many tokens back a negation still applies.
const NEGATION_REACH: usize = 2;

/// Why a headline fell back to the neutral score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringFailure {
    /// No text, or a missing-value marker such as "nan".
    MissingText,
    /// Only whitespace.
    BlankText,
    /// Text with no word characters at all.
    NoTokens,
    /// The computed polarity was not a finite number.
    NonFinite,
}

/// The result of scoring one headline. Scoring never fails outward; a headline
/// that cannot be scored is `Neutral` and contributes `0.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ScoreOutcome {
    Scored(f64),
    Neutral(ScoringFailure),
}

impl ScoreOutcome {
    /// The polarity in [-1, 1]; `0.0` for a neutral fallback.
    pub fn value(&self) -> f64 {
        match self {
            ScoreOutcome::Scored(value) => *value,
            ScoreOutcome::Neutral(_) => 0.0,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ScoreOutcome::Neutral(_))
    }
}

/// A news event together with its scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredEvent {
    pub timestamp: NaiveDateTime,
    pub outcome: ScoreOutcome,
}

impl ScoredEvent {
    pub fn polarity(&self) -> f64 {
        self.outcome.value()
    }
}

/// Lexicon-based headline polarity.
///
/// Each lexicon word contributes its polarity, scaled by an intensifier directly
/// in front of it and by `NEGATION_FACTOR` when a negation appears within the
/// two preceding tokens. The headline's polarity is the mean contribution;
/// text without lexicon words is neutral (`Scored(0.0)`).
#[derive(Debug, Clone, Default)]
pub struct SentimentScorer {
    lexicon: Lexicon,
}

impl SentimentScorer {
    pub fn new(lexicon: Lexicon) -> Self {
        Self { lexicon }
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn score(&self, text: Option<&str>) -> ScoreOutcome {
        let Some(text) = text else {
            return ScoreOutcome::Neutral(ScoringFailure::MissingText);
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            return ScoreOutcome::Neutral(ScoringFailure::BlankText);
        }
        if MISSING_MARKERS
            .iter()
            .any(|marker| trimmed.eq_ignore_ascii_case(marker))
        {
            return ScoreOutcome::Neutral(ScoringFailure::MissingText);
        }

        let tokens = tokenize(trimmed);
        if tokens.is_empty() {
            return ScoreOutcome::Neutral(ScoringFailure::NoTokens);
        }

        let polarity = self.polarity_of(&tokens);
        if !polarity.is_finite() {
            return ScoreOutcome::Neutral(ScoringFailure::NonFinite);
        }
        ScoreOutcome::Scored(polarity.clamp(-1.0, 1.0))
    }

    /// Shorthand for `score(Some(text)).value()`.
    pub fn polarity(&self, text: &str) -> f64 {
        self.score(Some(text)).value()
    }

    /// Scores every event, logging how many fell back to neutral.
    pub fn score_events(&self, events: &[SentimentEvent]) -> Vec<ScoredEvent> {
        let scored: Vec<ScoredEvent> = events
            .iter()
            .map(|event| ScoredEvent {
                timestamp: event.timestamp,
                outcome: self.score(event.headline.as_deref()),
            })
            .collect();

        let fallbacks = scored.iter().filter(|e| e.outcome.is_fallback()).count();
        if fallbacks > 0 {
            tracing::warn!(
                fallbacks,
                total = scored.len(),
                "Some headlines could not be scored and were treated as neutral"
            );
        }
        tracing::debug!(events = scored.len(), "Scored news events");
        scored
    }

    fn polarity_of(&self, tokens: &[String]) -> f64 {
        let mut total = 0.0;
        let mut count = 0usize;

        for (i, token) in tokens.iter().enumerate() {
            let Some(base) = self.lexicon.polarity(token) else {
                continue;
            };

            let mut factor = 1.0;
            if i > 0 {
                if let Some(intensity) = self.lexicon.intensity(&tokens[i - 1]) {
                    factor *= intensity;
                }
            }
            let negated = tokens[i.saturating_sub(NEGATION_REACH)..i]
                .iter()
                .any(|t| self.lexicon.is_negation(t));
            if negated {
                factor *= NEGATION_FACTOR;
            }

            total += (base * factor).clamp(-1.0, 1.0);
            count += 1;
        }

        if count == 0 {
            0.0
        } else {
            total / count as f64
        }
    }
}

/// Lowercased word tokens. Apostrophes inside a word are kept so contractions
/// like "isn't" survive as one token.
fn tokenize(text: &str) -> Vec<String> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .map(|token| token.trim_matches('\''))
        .filter(|token| !token.is_empty())
        .map(str::to_lowercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn scorer() -> SentimentScorer {
        SentimentScorer::default()
    }

    #[test]
    fn test_positive_and_negative_headlines() {
        let s = scorer();
        assert!(s.polarity("Apple posts record profits, shares surge") > 0.0);
        assert!(s.polarity("Stocks plunge as recession fears grow") < 0.0);
    }

    #[test]
    fn test_no_lexicon_words_is_scored_zero() {
        assert_eq!(
            scorer().score(Some("Company schedules annual meeting")),
            ScoreOutcome::Scored(0.0)
        );
    }

    #[test]
    fn test_mean_of_contributions() {
        // good = 0.7, bad = -0.7
        let outcome = scorer().score(Some("good and bad"));
        assert_eq!(outcome, ScoreOutcome::Scored(0.0));
    }

    #[test]
    fn test_negation_flips_and_dampens() {
        let s = scorer();
        let plain = s.polarity("good");
        let negated = s.polarity("not good");
        assert!((negated - plain * NEGATION_FACTOR).abs() < 1e-12);
        assert!(s.polarity("results aren't good") < 0.0);
    }

    #[test]
    fn test_intensifier_scales() {
        let s = scorer();
        assert!(s.polarity("very good") > s.polarity("good"));
        assert!(s.polarity("slightly good") < s.polarity("good"));
        // Clamped at the lexicon bound.
        assert!(s.polarity("extremely excellent") <= 1.0);
    }

    #[test]
    fn test_fail_soft_inputs() {
        let s = scorer();
        assert_eq!(s.score(None), ScoreOutcome::Neutral(ScoringFailure::MissingText));
        assert_eq!(s.score(Some("")), ScoreOutcome::Neutral(ScoringFailure::BlankText));
        assert_eq!(s.score(Some("   \t\n")), ScoreOutcome::Neutral(ScoringFailure::BlankText));
        assert_eq!(s.score(Some("NaN")), ScoreOutcome::Neutral(ScoringFailure::MissingText));
        assert_eq!(s.score(Some("%%% ### !!!")), ScoreOutcome::Neutral(ScoringFailure::NoTokens));

        for junk in ["\u{0}\u{1}\u{2}", "\u{FFFD}\u{FFFD}", "''''", "good\u{0}bad", "😀📈"] {
            let value = s.polarity(junk);
            assert!(value.is_finite());
            assert!((-1.0..=1.0).contains(&value));
        }
    }

    #[test]
    fn test_score_events_keeps_timestamps() {
        let ts = NaiveDate::from_ymd_opt(2020, 6, 5)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap();
        let events = vec![
            SentimentEvent::new(ts, "great quarter"),
            SentimentEvent {
                timestamp: ts,
                headline: None,
            },
        ];
        let scored = scorer().score_events(&events);
        assert_eq!(scored.len(), 2);
        assert_eq!(scored[0].timestamp, ts);
        assert!(scored[0].polarity() > 0.0);
        assert!(scored[1].outcome.is_fallback());
        assert_eq!(scored[1].polarity(), 0.0);
    }
}
