use anyhow::{anyhow, Context, Result};
use hf_hub::{api::sync::Api, Repo, RepoType};
use std::path::{Path, PathBuf};
use tracing::info;

const WEIGHT_CANDIDATES: &[&str] = &["model.safetensors", "pytorch_model.bin"];

/// Where the classifier checkpoint comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelSource {
    /// A directory already holding `config.json`, `tokenizer.json` and weights.
    Local(PathBuf),
    Hub {
        repo_id: String,
        revision: Option<String>,
    },
}

#[derive(Debug, Clone)]
pub struct ModelFiles {
    pub config_path: PathBuf,
    pub tokenizer_path: PathBuf,
    pub weights_path: PathBuf,
}

impl ModelFiles {
    pub fn resolve(source: &ModelSource) -> Result<Self> {
        match source {
            ModelSource::Local(dir) => Self::from_snapshot(dir),
            ModelSource::Hub { repo_id, revision } => Self::download(repo_id, revision.as_deref()),
        }
    }

    pub fn from_snapshot(snapshot: &Path) -> Result<Self> {
        let config_path = required_file(snapshot, "config.json")?;
        let tokenizer_path = required_file(snapshot, "tokenizer.json")?;
        let weights_path = find_model_weights(snapshot)
            .ok_or_else(|| anyhow!("no model weights found under {}", snapshot.display()))?;

        info!(snapshot = %snapshot.display(), "using local model snapshot");
        Ok(Self {
            config_path,
            tokenizer_path,
            weights_path,
        })
    }

    /// Fetches the checkpoint into the Hugging Face cache (`~/.cache/huggingface/hub`),
    /// reusing files that are already there. Blocking.
    pub fn download(repo_id: &str, revision: Option<&str>) -> Result<Self> {
        let api = Api::new().context("failed to initialize Hugging Face Hub API")?;
        let repo = match revision {
            Some(rev) => Repo::with_revision(repo_id.to_string(), RepoType::Model, rev.to_string()),
            None => Repo::model(repo_id.to_string()),
        };
        let repo = api.repo(repo);
        info!(repo_id, revision = revision.unwrap_or("main"), "resolving model from hub");

        let config_path = repo
            .get("config.json")
            .with_context(|| format!("failed to download config.json from {repo_id}"))?;
        let tokenizer_path = repo
            .get("tokenizer.json")
            .with_context(|| format!("failed to download tokenizer.json from {repo_id}"))?;

        let mut last_err = None;
        for candidate in WEIGHT_CANDIDATES {
            match repo.get(candidate) {
                Ok(weights_path) => {
                    return Ok(Self {
                        config_path,
                        tokenizer_path,
                        weights_path,
                    })
                }
                Err(err) => last_err = Some(err),
            }
        }
        Err(anyhow!(
            "no model weights available from {repo_id}: {}",
            last_err.map(|e| e.to_string()).unwrap_or_default()
        ))
    }
}

fn required_file(snapshot: &Path, name: &str) -> Result<PathBuf> {
    let path = snapshot.join(name);
    if !path.exists() {
        return Err(anyhow!("{name} not found under {}", snapshot.display()));
    }
    Ok(path)
}

fn find_model_weights(snapshot: &Path) -> Option<PathBuf> {
    WEIGHT_CANDIDATES
        .iter()
        .map(|candidate| snapshot.join(candidate))
        .find(|path| path.exists())
}
