use anyhow::{bail, Context, Result};
use std::path::PathBuf;

use crate::{inference::model_files::ModelSource, pipeline::DEFAULT_MAX_CHARS};

pub const DEFAULT_MODEL_ID: &str = "j-hartmann/emotion-english-distilroberta-base";
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub model_id: String,
    pub model_revision: Option<String>,
    /// Local snapshot; when set the hub is never contacted.
    pub model_dir: Option<PathBuf>,
    pub device: String,
    pub max_chars: usize,
    pub bind_addr: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            model_revision: None,
            model_dir: None,
            device: "cpu".to_string(),
            max_chars: DEFAULT_MAX_CHARS,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
        }
    }
}

impl AppConfig {
    /// Reads `EMOTION_*` variables from the process environment (and `.env`, once loaded).
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| dotenvy::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let max_chars = match get("EMOTION_MAX_CHARS") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("EMOTION_MAX_CHARS must be a positive integer, got '{raw}'"))?,
            None => defaults.max_chars,
        };
        if max_chars == 0 {
            bail!("EMOTION_MAX_CHARS must be greater than zero");
        }

        Ok(Self {
            model_id: get("EMOTION_MODEL_ID").unwrap_or(defaults.model_id),
            model_revision: get("EMOTION_MODEL_REVISION"),
            model_dir: get("EMOTION_MODEL_DIR").map(PathBuf::from),
            device: get("EMOTION_DEVICE").unwrap_or(defaults.device),
            max_chars,
            bind_addr: get("EMOTION_BIND_ADDR").unwrap_or(defaults.bind_addr),
        })
    }

    pub fn model_source(&self) -> ModelSource {
        match &self.model_dir {
            Some(dir) => ModelSource::Local(dir.clone()),
            None => ModelSource::Hub {
                repo_id: self.model_id.clone(),
                revision: self.model_revision.clone(),
            },
        }
    }

    /// Name reported to clients: the snapshot path or the hub repo id.
    pub fn model_name(&self) -> String {
        match &self.model_dir {
            Some(dir) => dir.display().to_string(),
            None => self.model_id.clone(),
        }
    }
}
