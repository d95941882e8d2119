use crate::emotion::{texts, EmotionLabel, EmotionScore};

/// Takes the first (highest ranked) score as the dominant emotion and explains it.
/// Returns `None` only when `ranked` is empty.
pub fn interpret(ranked: &[EmotionScore]) -> Option<(&'static str, EmotionLabel)> {
    let dominant = ranked.first()?.label.clone();
    Some((explain(&dominant), dominant))
}

pub fn explain(label: &EmotionLabel) -> &'static str {
    texts::explanations().lookup(label.emotion())
}

pub fn suggest(label: &EmotionLabel) -> &'static str {
    texts::suggestions().lookup(label.emotion())
}
