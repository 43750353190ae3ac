use hf_hub::api::sync::Api as HfApi;
use hf_hub::{Repo, RepoType};
use std::path::PathBuf;
use tokenizers::{Tokenizer, TruncationParams};

use crate::core::{DashboardError, Result};

/// A single file in a Hugging Face model repository.
#[derive(Debug, Clone)]
pub struct HfLoader {
    pub repo: String,
    pub revision: String,
    pub filename: String,
}

impl HfLoader {
    pub fn new(repo: &str, filename: &str) -> Self {
        Self {
            repo: repo.into(),
            revision: "main".into(),
            filename: filename.into(),
        }
    }

    pub fn with_revision(mut self, revision: &str) -> Self {
        self.revision = revision.into();
        self
    }

    /// Downloads the file into the local hub cache (or reuses the cached copy).
    pub fn load(&self) -> Result<PathBuf> {
        let hf_api = HfApi::new()?;
        let hf_repo = Repo::with_revision(self.repo.clone(), RepoType::Model, self.revision.clone());

        let path = hf_api.repo(hf_repo).get(self.filename.as_str())?;
        tracing::debug!(repo = %self.repo, file = %self.filename, "resolved hub file");

        Ok(path)
    }
}

/// Loads `tokenizer.json` from a primary repository, falling back to a second
/// one when the primary repository ships no fast tokenizer.
#[derive(Debug, Clone)]
pub struct TokenizerLoader {
    pub tokenizer_file_loader: HfLoader,
    pub fallback: Option<HfLoader>,
    pub max_length: Option<usize>,
}

impl TokenizerLoader {
    pub fn new(repo: &str, revision: &str) -> Self {
        Self {
            tokenizer_file_loader: HfLoader::new(repo, "tokenizer.json").with_revision(revision),
            fallback: None,
            max_length: None,
        }
    }

    pub fn fallback_repo(mut self, repo: &str) -> Self {
        self.fallback = Some(HfLoader::new(repo, "tokenizer.json"));
        self
    }

    /// Truncates encodings to `max_length` tokens.
    pub fn truncate_to(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    pub fn load(&self) -> Result<Tokenizer> {
        let path = match (self.tokenizer_file_loader.load(), &self.fallback) {
            (Ok(path), _) => path,
            (Err(err), Some(fallback)) => {
                tracing::warn!(
                    repo = %self.tokenizer_file_loader.repo,
                    fallback = %fallback.repo,
                    error = %err,
                    "tokenizer.json unavailable, using fallback repository"
                );
                fallback.load()?
            }
            (Err(err), None) => return Err(err),
        };

        let mut tokenizer = Tokenizer::from_file(&path).map_err(|e| {
            DashboardError::ModelFormat(format!("failed to load tokenizer {}: {e}", path.display()))
        })?;

        if let Some(max_length) = self.max_length {
            tokenizer
                .with_truncation(Some(TruncationParams {
                    max_length,
                    ..Default::default()
                }))
                .map_err(|e| DashboardError::Tokenization(e.to_string()))?;
        }

        Ok(tokenizer)
    }
}
