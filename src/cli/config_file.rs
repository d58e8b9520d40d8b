use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::error::{RewriteError, RewriteErrorKind, RewriteResult};

/// Size limit as written in a config file: plain bytes or a string like "10MB"
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SizeValue {
    Bytes(u64),
    Text(String),
}

/// Options loaded from a JSON or YAML config file. Every key is optional; values
/// given on the command line or through the environment take precedence.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct FileConfig {
    pub root: Option<PathBuf>,
    pub suffix: Option<String>,
    pub search: Option<String>,
    pub replace: Option<String>,
    pub first_line_only: Option<bool>,
    pub max_file_size: Option<SizeValue>,
    pub continue_on_error: Option<bool>,
}

impl FileConfig {
    /// Read and parse a config file; `.yaml`/`.yml` files are YAML, anything else JSON
    pub fn load(path: &Path) -> RewriteResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| RewriteError::Rewrite {
            kind: RewriteErrorKind::configuration(format!(
                "cannot read config file {}",
                path.display()
            )),
            source: Some(e),
        })?;
        let parsed = if is_yaml(path) {
            Self::from_yaml(&text).map_err(|e| e.to_string())
        } else {
            Self::from_json(&text).map_err(|e| e.to_string())
        };
        parsed.map_err(|e| RewriteError::configuration(format!("{}: {}", path.display(), e)))
    }

    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }

    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(text)
    }
}

fn is_yaml(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext == "yaml" || ext == "yml")
}
