//! Prompt sources.

use crate::error::{EatError, Result};
use crate::fs::expand_user;
use std::path::PathBuf;

/// Where the prompt text comes from. Exactly one source is allowed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptSource {
    /// Literal prompt text, used verbatim.
    Inline(String),
    /// A file whose trimmed contents are the prompt.
    File(PathBuf),
}

impl PromptSource {
    /// Pick the prompt source from the two mutually exclusive inputs.
    ///
    /// Giving both is rejected even when the inline prompt is empty, matching
    /// the argument parser. An empty inline prompt on its own counts as absent.
    pub fn from_args(prompt: Option<String>, prompt_file: Option<PathBuf>) -> Result<Self> {
        match (prompt, prompt_file) {
            (Some(text), None) if !text.is_empty() => Ok(PromptSource::Inline(text)),
            (None, Some(path)) => Ok(PromptSource::File(path)),
            _ => Err(EatError::Usage(
                "provide exactly one of --prompt or --prompt-file".to_string(),
            )),
        }
    }

    /// Produce the prompt text.
    pub fn load(&self) -> Result<String> {
        match self {
            PromptSource::Inline(text) => Ok(text.clone()),
            PromptSource::File(path) => {
                let resolved = expand_user(path);
                let content = std::fs::read_to_string(&resolved).map_err(|e| {
                    EatError::Usage(format!(
                        "failed to read prompt file '{}': {}",
                        resolved.display(),
                        e
                    ))
                })?;
                Ok(content.trim().to_string())
            }
        }
    }
}
