mod interpreter;
mod ranker;
mod report;
mod scorer;

use anyhow::{anyhow, Result};
use std::sync::Arc;
use tracing::{debug, info};

use crate::inference::EmotionClassifier;

pub use interpreter::{explain, interpret, suggest};
pub use ranker::rank;
pub use report::EmotionReport;
pub use scorer::{truncate_chars, Scorer, DEFAULT_MAX_CHARS};

/// Runs one message through scoring, ranking and interpretation.
pub struct Analyzer {
    scorer: Scorer,
}

impl Analyzer {
    pub fn new(classifier: Arc<dyn EmotionClassifier>, max_chars: usize) -> Self {
        Self {
            scorer: Scorer::new(classifier, max_chars),
        }
    }

    /// Returns `Ok(None)` for empty or whitespace-only text without touching the classifier.
    pub fn analyze(&self, text: &str) -> Result<Option<EmotionReport>> {
        if text.trim().is_empty() {
            debug!("empty input, skipping analysis");
            return Ok(None);
        }

        let ranked = rank(self.scorer.score(text)?);
        let (explanation, dominant) =
            interpret(&ranked).ok_or_else(|| anyhow!("classifier returned no scores"))?;
        let suggestion = suggest(&dominant);

        info!(
            chars = text.chars().count(),
            dominant = %dominant,
            confidence = ranked[0].score,
            "analysis complete"
        );

        Ok(Some(EmotionReport {
            emotions: ranked,
            dominant,
            explanation,
            suggestion,
        }))
    }
}
