//! # Meridian Sentiment Library
//!
//! Turns timestamped news headlines into a daily sentiment series.
//!
//! ## Architectural Principles
//!
//! - **Fail-Soft Scoring:** `SentimentScorer::score` always returns a
//!   `ScoreOutcome`. Missing, blank, or unreadable text becomes
//!   `ScoreOutcome::Neutral` with the reason attached, and counts as `0.0`.
//! - **No Fabricated Dates:** The `Aligner` only emits dates that had at least
//!   one event. Gaps are left for the correlation join to handle.
//!
//! ## Public API
//!
//! - `Lexicon`: the polarity dictionary the scorer reads.
//! - `SentimentScorer`, `ScoreOutcome`, `ScoredEvent`: per-headline scoring.
//! - `Aligner`, `DailySentimentSeries`: per-date aggregation.

pub mod aligner;
pub mod lexicon;
pub mod scorer;

pub use aligner::{Aligner, DailySentimentSeries};
pub use lexicon::Lexicon;
pub use scorer::{ScoreOutcome, ScoredEvent, ScoringFailure, SentimentScorer};
