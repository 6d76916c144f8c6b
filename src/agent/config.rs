//! Agent defaults file.
//!
//! An optional YAML file (by default `.automation/agent.yaml`) supplies
//! defaults for the per-tool options, so a repository can pin its allowed
//! tools or system prompt without every caller repeating the flags.
//!
//! # File Format
//!
//! ```yaml
//! claude:
//!   append_system_prompt_file: .automation/claude-system.txt
//!   allowed_tools: "Read,Edit,Bash"
//!   no_allowed_tools: false
//!
//! codex:
//!   output_last_message: .automation/last-message.txt
//!   full_auto: true
//! ```
//!
//! Command-line flags always win over values from this file, which in turn
//! win over the built-in defaults.

use crate::agent::claude::{ClaudeAgent, DEFAULT_ALLOWED_TOOLS};
use crate::agent::codex::CodexAgent;
use crate::error::{EatError, Result};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Defaults file location relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".automation/agent.yaml";

/// System-prompt file used when neither the CLI nor the defaults file names one.
pub const DEFAULT_SYSTEM_PROMPT_FILE: &str = ".automation/claude-system.txt";

/// Contents of the defaults file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AgentDefaults {
    pub claude: ClaudeDefaults,
    pub codex: CodexDefaults,

    /// Unknown fields preserved for forward compatibility.
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClaudeDefaults {
    pub append_system_prompt_file: Option<PathBuf>,
    pub allowed_tools: Option<String>,
    pub no_allowed_tools: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CodexDefaults {
    pub output_last_message: Option<PathBuf>,
    pub full_auto: Option<bool>,

    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

/// Values given explicitly on the command line.
///
/// `None` means "not given", deferring to the defaults file.
#[derive(Debug, Clone, Default)]
pub struct OptionOverrides {
    pub output_last_message: Option<PathBuf>,
    pub full_auto: Option<bool>,
    pub append_system_prompt_file: Option<PathBuf>,
    pub allowed_tools: Option<String>,
    pub no_allowed_tools: Option<bool>,
}

/// Fully resolved options for both agent variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentOptions {
    pub output_last_message: Option<PathBuf>,
    pub full_auto: bool,
    pub append_system_prompt_file: Option<PathBuf>,
    pub allowed_tools: String,
    pub no_allowed_tools: bool,
}

impl Default for AgentOptions {
    fn default() -> Self {
        Self {
            output_last_message: None,
            full_auto: false,
            append_system_prompt_file: None,
            allowed_tools: DEFAULT_ALLOWED_TOOLS.to_string(),
            no_allowed_tools: false,
        }
    }
}

impl AgentOptions {
    pub fn codex(&self) -> CodexAgent {
        CodexAgent {
            output_last_message: self.output_last_message.clone(),
            full_auto: self.full_auto,
        }
    }

    pub fn claude(&self) -> ClaudeAgent {
        ClaudeAgent {
            append_system_prompt_file: self.append_system_prompt_file.clone(),
            allowed_tools: self.allowed_tools.clone(),
            no_allowed_tools: self.no_allowed_tools,
        }
    }
}

impl AgentDefaults {
    /// Load defaults from a YAML file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    /// Returns `Err` if the file exists but cannot be parsed.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            EatError::Config(format!(
                "failed to read agent defaults '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content).map(Some)
    }

    /// Parse defaults from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let defaults: AgentDefaults = serde_yaml::from_str(yaml)
            .map_err(|e| EatError::Config(format!("failed to parse agent defaults: {}", e)))?;

        defaults.validate()?;
        Ok(defaults)
    }

    /// Validate the defaults.
    ///
    /// An explicitly empty `allowed_tools` would hand Claude an empty
    /// restriction list; `no_allowed_tools` is the way to drop the flag.
    pub fn validate(&self) -> Result<()> {
        if let Some(ref tools) = self.claude.allowed_tools
            && tools.trim().is_empty()
        {
            return Err(EatError::Config(
                "claude.allowed_tools must not be empty (use no_allowed_tools: true instead)"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Merge command-line overrides over these defaults.
    pub fn resolve(&self, overrides: OptionOverrides) -> AgentOptions {
        AgentOptions {
            output_last_message: overrides
                .output_last_message
                .or_else(|| self.codex.output_last_message.clone()),
            full_auto: overrides
                .full_auto
                .or(self.codex.full_auto)
                .unwrap_or(false),
            append_system_prompt_file: Some(
                overrides
                    .append_system_prompt_file
                    .or_else(|| self.claude.append_system_prompt_file.clone())
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SYSTEM_PROMPT_FILE)),
            ),
            allowed_tools: overrides
                .allowed_tools
                .or_else(|| self.claude.allowed_tools.clone())
                .unwrap_or_else(|| DEFAULT_ALLOWED_TOOLS.to_string()),
            no_allowed_tools: overrides
                .no_allowed_tools
                .or(self.claude.no_allowed_tools)
                .unwrap_or(false),
        }
    }
}
