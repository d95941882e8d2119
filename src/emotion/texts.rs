use once_cell::sync::Lazy;
use serde::Deserialize;

use super::Emotion;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct EmotionTextFile {
    explanations: EmotionTextTable,
    suggestions: EmotionTextTable,
}

/// One required entry per emotion plus the fallback used for anything outside the set.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmotionTextTable {
    fallback: String,
    joy: String,
    sadness: String,
    anger: String,
    fear: String,
    surprise: String,
    disgust: String,
    neutral: String,
}

impl EmotionTextTable {
    pub fn get(&self, emotion: Emotion) -> &str {
        match emotion {
            Emotion::Joy => &self.joy,
            Emotion::Sadness => &self.sadness,
            Emotion::Anger => &self.anger,
            Emotion::Fear => &self.fear,
            Emotion::Surprise => &self.surprise,
            Emotion::Disgust => &self.disgust,
            Emotion::Neutral => &self.neutral,
        }
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    pub fn lookup(&self, emotion: Option<Emotion>) -> &str {
        emotion
            .map(|emotion| self.get(emotion))
            .unwrap_or_else(|| self.fallback())
    }
}

macro_rules! emotion_text_file {
    () => {
        include_str!(concat!(
            env!("CARGO_MANIFEST_DIR"),
            "/data/emotion_texts.json"
        ))
    };
}

static EMOTION_TEXTS: Lazy<EmotionTextFile> = Lazy::new(|| load_texts(emotion_text_file!()));

fn load_texts(raw: &str) -> EmotionTextFile {
    serde_json::from_str(raw).expect("invalid emotion text config")
}

pub fn explanations() -> &'static EmotionTextTable {
    &EMOTION_TEXTS.explanations
}

pub fn suggestions() -> &'static EmotionTextTable {
    &EMOTION_TEXTS.suggestions
}

/// Parses the embedded tables now so a broken file fails at startup, not on the first request.
pub fn init() {
    Lazy::force(&EMOTION_TEXTS);
}
