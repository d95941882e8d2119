pub mod device;
pub mod model_files;
pub mod roberta_emotion;

use anyhow::Result;

/// A loaded text classifier returning the full probability distribution over its labels.
///
/// Implementations are loaded once and shared read-only; `classify` must not mutate state.
pub trait EmotionClassifier: Send + Sync {
    fn classify(&self, text: &str) -> Result<Vec<(String, f32)>>;
}
