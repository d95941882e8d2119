use anyhow::{Context, Result};
use std::sync::Arc;
use tracing::info;

use crate::{
    config::AppConfig,
    emotion::texts,
    inference::{
        device::select_device, model_files::ModelFiles, roberta_emotion::RobertaEmotionClassifier,
    },
    pipeline::Analyzer,
};

/// Loads the classifier and text tables once. Any failure here is a startup error.
/// Blocking: may download the checkpoint on first run.
pub fn load_analyzer(config: &AppConfig) -> Result<Analyzer> {
    texts::init();

    let files = ModelFiles::resolve(&config.model_source())
        .with_context(|| format!("failed to resolve model {}", config.model_name()))?;
    let device = select_device(&config.device)?;
    let classifier = RobertaEmotionClassifier::load(&files, device)
        .with_context(|| format!("failed to load model {}", config.model_name()))?;

    info!(
        model = %config.model_name(),
        max_chars = config.max_chars,
        "emotion analyzer ready"
    );
    Ok(Analyzer::new(Arc::new(classifier), config.max_chars))
}
