use serde::Serialize;
use std::fmt::Write;

use crate::emotion::{EmotionLabel, EmotionScore};

#[derive(Debug, Clone, Serialize)]
pub struct EmotionReport {
    /// Full distribution, highest score first.
    pub emotions: Vec<EmotionScore>,
    pub dominant: EmotionLabel,
    pub explanation: &'static str,
    pub suggestion: &'static str,
}

impl EmotionReport {
    /// Plain-text rendering used by the command line.
    pub fn render(&self) -> String {
        let mut out = String::from("🎭 Detected Emotions:\n");
        for score in &self.emotions {
            let symbol = score.label.symbol();
            if symbol.is_empty() {
                let _ = writeln!(out, "{}: {:.2}%", score.label, score.percent());
            } else {
                let _ = writeln!(out, "{symbol} {}: {:.2}%", score.label, score.percent());
            }
        }
        let _ = write!(
            out,
            "\n🧠 What This Might Mean:\n{}\n\n💡 Suggested Response:\n{}\n",
            self.explanation, self.suggestion
        );
        out
    }
}
