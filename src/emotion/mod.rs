pub mod texts;

use serde::{Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emotion {
    Joy,
    Sadness,
    Anger,
    Fear,
    Surprise,
    Disgust,
    Neutral,
}

impl Emotion {
    pub const ALL: [Emotion; 7] = [
        Emotion::Joy,
        Emotion::Sadness,
        Emotion::Anger,
        Emotion::Fear,
        Emotion::Surprise,
        Emotion::Disgust,
        Emotion::Neutral,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Emotion::Joy => "joy",
            Emotion::Sadness => "sadness",
            Emotion::Anger => "anger",
            Emotion::Fear => "fear",
            Emotion::Surprise => "surprise",
            Emotion::Disgust => "disgust",
            Emotion::Neutral => "neutral",
        }
    }

    /// Converts a raw classifier label. ASCII case and surrounding whitespace are ignored.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        Self::ALL
            .into_iter()
            .find(|emotion| emotion.as_str().eq_ignore_ascii_case(label))
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Emotion::Joy => "😊",
            Emotion::Sadness => "😢",
            Emotion::Anger => "😠",
            Emotion::Fear => "😨",
            Emotion::Surprise => "😲",
            Emotion::Disgust => "🤢",
            Emotion::Neutral => "😐",
        }
    }
}

impl fmt::Display for Emotion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classifier label after boundary conversion. Labels outside the closed set are kept
/// verbatim so the interpreter can route them to its fallbacks.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum EmotionLabel {
    Known(Emotion),
    Other(String),
}

impl EmotionLabel {
    pub fn as_str(&self) -> &str {
        match self {
            EmotionLabel::Known(emotion) => emotion.as_str(),
            EmotionLabel::Other(raw) => raw.as_str(),
        }
    }

    pub fn emotion(&self) -> Option<Emotion> {
        match self {
            EmotionLabel::Known(emotion) => Some(*emotion),
            EmotionLabel::Other(_) => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        self.emotion().map(Emotion::symbol).unwrap_or("")
    }
}

impl From<&str> for EmotionLabel {
    fn from(raw: &str) -> Self {
        match Emotion::from_label(raw) {
            Some(emotion) => EmotionLabel::Known(emotion),
            None => EmotionLabel::Other(raw.to_string()),
        }
    }
}

impl From<Emotion> for EmotionLabel {
    fn from(emotion: Emotion) -> Self {
        EmotionLabel::Known(emotion)
    }
}

impl fmt::Display for EmotionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for EmotionLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmotionScore {
    pub label: EmotionLabel,
    pub score: f32,
}

impl EmotionScore {
    pub fn new(label: impl Into<EmotionLabel>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }

    pub fn percent(&self) -> f32 {
        self.score * 100.0
    }
}

/// True when `scores` names every emotion exactly once and nothing else.
pub fn covers_label_set(scores: &[EmotionScore]) -> bool {
    if scores.len() != Emotion::ALL.len() {
        return false;
    }
    let mut seen = [false; Emotion::ALL.len()];
    for score in scores {
        let Some(emotion) = score.label.emotion() else {
            return false;
        };
        let idx = emotion as usize;
        if seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_known_label() {
        for emotion in Emotion::ALL {
            assert_eq!(Emotion::from_label(emotion.as_str()), Some(emotion));
        }
    }

    #[test]
    fn parse_ignores_case_and_padding() {
        assert_eq!(Emotion::from_label(" Joy "), Some(Emotion::Joy));
        assert_eq!(Emotion::from_label("SADNESS"), Some(Emotion::Sadness));
    }

    #[test]
    fn unknown_labels_are_kept_verbatim() {
        let label = EmotionLabel::from("boredom");
        assert_eq!(label, EmotionLabel::Other("boredom".into()));
        assert_eq!(label.symbol(), "");
        assert_eq!(label.to_string(), "boredom");
    }

    #[test]
    fn serializes_label_as_plain_string() {
        let json = serde_json::to_value(EmotionScore::new("anger", 0.5)).unwrap();
        assert_eq!(json, serde_json::json!({ "label": "anger", "score": 0.5 }));
    }

    #[test]
    fn coverage_requires_exact_label_set() {
        let full: Vec<_> = Emotion::ALL
            .into_iter()
            .map(|e| EmotionScore::new(e, 1.0 / 7.0))
            .collect();
        assert!(covers_label_set(&full));

        let mut missing = full.clone();
        missing.pop();
        assert!(!covers_label_set(&missing));

        let mut duplicated = full.clone();
        duplicated[6] = EmotionScore::new(Emotion::Joy, 0.1);
        assert!(!covers_label_set(&duplicated));

        let mut foreign = full;
        foreign[0] = EmotionScore::new("boredom", 0.1);
        assert!(!covers_label_set(&foreign));
    }
}
