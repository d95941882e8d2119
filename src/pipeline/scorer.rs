use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    emotion::{covers_label_set, EmotionScore},
    inference::EmotionClassifier,
};

/// Longest input forwarded to the classifier, in characters.
pub const DEFAULT_MAX_CHARS: usize = 512;

pub struct Scorer {
    classifier: Arc<dyn EmotionClassifier>,
    max_chars: usize,
}

impl Scorer {
    pub fn new(classifier: Arc<dyn EmotionClassifier>, max_chars: usize) -> Self {
        Self {
            classifier,
            max_chars,
        }
    }

    pub fn max_chars(&self) -> usize {
        self.max_chars
    }

    /// Scores `text` after cutting it to the first `max_chars` characters. Callers skip
    /// empty or whitespace-only input.
    pub fn score(&self, text: &str) -> Result<Vec<EmotionScore>> {
        let input = truncate_chars(text, self.max_chars);
        if input.len() < text.len() {
            debug!(
                original_bytes = text.len(),
                kept_bytes = input.len(),
                "input truncated before scoring"
            );
        }

        let scores: Vec<EmotionScore> = self
            .classifier
            .classify(input)?
            .into_iter()
            .map(|(label, score)| EmotionScore::new(label.as_str(), score))
            .collect();

        if !covers_label_set(&scores) {
            let labels: Vec<&str> = scores.iter().map(|s| s.label.as_str()).collect();
            warn!(?labels, "classifier output does not cover the emotion label set exactly");
        }

        Ok(scores)
    }
}

/// Keeps the first `max_chars` Unicode scalar values of `text`.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
