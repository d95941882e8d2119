use anyhow::{anyhow, bail, Context, Result};
use candle::{DType, Device, Tensor};
use candle_nn::VarBuilder;
use candle_transformers::models::xlm_roberta::{Config, XLMRobertaForSequenceClassification};
use std::{fs, path::Path};
use tokenizers::{Tokenizer, TruncationParams};
use tracing::{info, warn};

use crate::emotion::Emotion;

use super::{model_files::ModelFiles, EmotionClassifier};

/// RoBERTa sequence classifier with a softmax head, e.g.
/// `j-hartmann/emotion-english-distilroberta-base`.
pub struct RobertaEmotionClassifier {
    model: XLMRobertaForSequenceClassification,
    tokenizer: Tokenizer,
    device: Device,
    labels: Vec<String>,
}

impl RobertaEmotionClassifier {
    pub fn load(files: &ModelFiles, device: Device) -> Result<Self> {
        let raw_config = fs::read_to_string(&files.config_path)
            .with_context(|| format!("failed to read {}", files.config_path.display()))?;
        let config: Config = serde_json::from_str(&raw_config)
            .with_context(|| format!("failed to parse {}", files.config_path.display()))?;
        let labels = parse_id2label(&raw_config)?;
        check_label_set(&labels);

        // Two positions are reserved by RoBERTa's padding offset.
        let max_len = config.max_position_embeddings.saturating_sub(2).max(16);

        let mut tokenizer = Tokenizer::from_file(&files.tokenizer_path).map_err(|e| {
            anyhow!(
                "Tokenizer load failed ({}): {e}",
                files.tokenizer_path.display()
            )
        })?;
        tokenizer.with_padding(None);
        tokenizer
            .with_truncation(Some(TruncationParams {
                max_length: max_len,
                ..Default::default()
            }))
            .map_err(|e| anyhow!("Tokenizer truncation config failed: {e}"))?;

        let vb = build_var_builder(&files.weights_path, DType::F32, &device)?;
        let model = XLMRobertaForSequenceClassification::new(labels.len(), &config, vb)
            .context("failed to construct emotion classifier")?;

        info!(
            labels = labels.len(),
            max_len,
            device = ?device,
            "emotion classifier loaded"
        );

        Ok(Self {
            model,
            tokenizer,
            device,
            labels,
        })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }
}

impl EmotionClassifier for RobertaEmotionClassifier {
    fn classify(&self, text: &str) -> Result<Vec<(String, f32)>> {
        let enc = self
            .tokenizer
            .encode(text, true)
            .map_err(|e| anyhow!("Tokenizer encode error: {e}"))?;

        let input_ids = Tensor::new(enc.get_ids(), &self.device)?.unsqueeze(0)?;
        let attention_mask = Tensor::new(enc.get_attention_mask(), &self.device)?.unsqueeze(0)?;
        let token_type_ids = input_ids.zeros_like()?;

        let logits = self
            .model
            .forward(&input_ids, &attention_mask, &token_type_ids)
            .context("emotion classifier forward pass failed")?;
        let probs = candle_nn::ops::softmax(&logits, 1)?;
        let probs = tensor_to_vec(probs)?;

        if probs.len() != self.labels.len() {
            bail!(
                "classifier produced {} scores for {} labels",
                probs.len(),
                self.labels.len()
            );
        }

        Ok(self.labels.iter().cloned().zip(probs).collect())
    }
}

/// Reads `id2label` (`{"0": "anger", "1": "disgust", ...}`) into index order.
fn parse_id2label(raw_config: &str) -> Result<Vec<String>> {
    let config_json: serde_json::Value =
        serde_json::from_str(raw_config).context("failed to parse config as JSON")?;
    let id2label = config_json
        .get("id2label")
        .and_then(|v| v.as_object())
        .context("config.json missing id2label mapping")?;

    let mut entries = id2label
        .iter()
        .map(|(k, v)| {
            let idx = k
                .parse::<usize>()
                .with_context(|| format!("id2label key '{k}' is not an index"))?;
            let label = v
                .as_str()
                .with_context(|| format!("id2label entry {k} is not a string"))?;
            Ok((idx, label.to_string()))
        })
        .collect::<Result<Vec<_>>>()?;
    entries.sort_by_key(|(idx, _)| *idx);

    if entries.is_empty() {
        bail!("id2label is empty, cannot determine label count");
    }
    if entries.iter().enumerate().any(|(pos, (idx, _))| pos != *idx) {
        bail!("id2label indices are not contiguous from 0");
    }

    Ok(entries.into_iter().map(|(_, label)| label).collect())
}

fn check_label_set(labels: &[String]) {
    let unknown: Vec<&str> = labels
        .iter()
        .map(String::as_str)
        .filter(|label| Emotion::from_label(label).is_none())
        .collect();
    let missing: Vec<&str> = Emotion::ALL
        .iter()
        .filter(|emotion| {
            !labels
                .iter()
                .any(|label| Emotion::from_label(label) == Some(**emotion))
        })
        .map(|emotion| emotion.as_str())
        .collect();

    if !unknown.is_empty() || !missing.is_empty() || labels.len() != Emotion::ALL.len() {
        warn!(
            ?unknown,
            ?missing,
            "model labels differ from the emotion label set; unmatched labels use fallback texts"
        );
    }
}

fn build_var_builder(path: &Path, dtype: DType, device: &Device) -> Result<VarBuilder<'static>> {
    let ext = path
        .extension()
        .and_then(|s| s.to_str())
        .unwrap_or_default()
        .to_ascii_lowercase();
    if ext == "safetensors" {
        let files = vec![path.to_path_buf()];
        unsafe {
            VarBuilder::from_mmaped_safetensors(&files, dtype, device)
                .map_err(|e| anyhow!("failed to load {}: {e}", path.display()))
        }
    } else {
        VarBuilder::from_pth(path, dtype, device)
            .map_err(|e| anyhow!("failed to load {}: {e}", path.display()))
    }
}

fn tensor_to_vec(tensor: Tensor) -> Result<Vec<f32>> {
    let rows = tensor
        .to_dtype(DType::F32)?
        .to_vec2::<f32>()
        .map_err(|e| anyhow!("failed to decode probabilities: {e}"))?;
    rows.into_iter()
        .next()
        .ok_or_else(|| anyhow!("probability tensor missing batch dimension"))
}
