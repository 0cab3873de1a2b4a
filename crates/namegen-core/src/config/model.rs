use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::consts;
use crate::context::Substitutions;
use crate::error::{NamegenError, Result};
use crate::source::{FileSource, HttpSource, Source};

/// namegen.toml schema
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub generate: GenerateConfig,
    #[serde(default)]
    pub substitutions: BTreeMap<String, String>,

    /// Directory relative file paths resolve against
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    #[default]
    File,
    Http,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub kind: SourceKind,
    #[serde(default = "default_template")]
    pub template: String,
    #[serde(default = "default_word_table")]
    pub word_table: String,
    /// Required for `kind = "http"`
    #[serde(default)]
    pub base_url: Option<String>,
    /// Falls back to the `NAMEGEN_ACCESS_TOKEN` environment variable
    #[serde(default)]
    pub access_token: Option<String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            kind: SourceKind::File,
            template: default_template(),
            word_table: default_word_table(),
            base_url: None,
            access_token: None,
        }
    }
}

fn default_template() -> String {
    consts::source::TEMPLATE.to_string()
}

fn default_word_table() -> String {
    consts::source::WORD_TABLE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateConfig {
    #[serde(default = "default_count")]
    pub default_count: usize,
    #[serde(default = "default_female_share")]
    pub female_share: f64,
    #[serde(default = "default_male_share")]
    pub male_share: f64,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            default_count: default_count(),
            female_share: default_female_share(),
            male_share: default_male_share(),
        }
    }
}

fn default_count() -> usize {
    consts::generate::DEFAULT_COUNT
}

fn default_female_share() -> f64 {
    consts::generate::FEMALE_SHARE
}

fn default_male_share() -> f64 {
    consts::generate::MALE_SHARE
}

impl Config {
    /// Read and validate namegen.toml
    ///
    /// Relative source paths resolve against the file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            NamegenError::ConfigParseError(format!("{}: {}", path.display(), e))
        })?;

        let mut config = Self::from_toml(&content)?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges and source requirements
    pub fn validate(&self) -> Result<()> {
        let shares = [
            ("generate.female_share", self.generate.female_share),
            ("generate.male_share", self.generate.male_share),
        ];
        for (field, share) in shares {
            if !(0.0..=1.0).contains(&share) {
                return Err(NamegenError::ConfigInvalidValue {
                    field: field.to_string(),
                    reason: format!("{} must lie between 0 and 1", share),
                });
            }
        }
        if self.generate.female_share + self.generate.male_share > 1.0 {
            return Err(NamegenError::ConfigInvalidValue {
                field: "generate".to_string(),
                reason: "female_share and male_share must not sum above 1".to_string(),
            });
        }

        if self.source.template.is_empty() {
            return Err(invalid_empty("source.template"));
        }
        if self.source.word_table.is_empty() {
            return Err(invalid_empty("source.word_table"));
        }
        if self.source.kind == SourceKind::Http && self.source.base_url.is_none() {
            return Err(NamegenError::ConfigInvalidValue {
                field: "source.base_url".to_string(),
                reason: "required when kind = \"http\"".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve a configured file path against the config directory
    pub fn resolve_path(&self, relative: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(relative),
            None => PathBuf::from(relative),
        }
    }

    /// Substitutions shared by every context
    pub fn substitutions(&self) -> Substitutions {
        self.substitutions
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Build the configured template and word table source
    pub fn build_source(&self) -> Result<Box<dyn Source>> {
        match self.source.kind {
            SourceKind::File => Ok(Box::new(FileSource::new(
                self.resolve_path(&self.source.template),
                self.resolve_path(&self.source.word_table),
            ))),
            SourceKind::Http => {
                let base_url = self.source.base_url.as_deref().ok_or_else(|| {
                    NamegenError::ConfigInvalidValue {
                        field: "source.base_url".to_string(),
                        reason: "required when kind = \"http\"".to_string(),
                    }
                })?;
                let token = self
                    .source
                    .access_token
                    .clone()
                    .or_else(|| std::env::var(consts::ACCESS_TOKEN_ENV).ok());
                let source =
                    HttpSource::new(base_url, &self.source.template, &self.source.word_table)?
                        .with_access_token(token);
                Ok(Box::new(source))
            }
        }
    }
}

fn invalid_empty(field: &str) -> NamegenError {
    NamegenError::ConfigInvalidValue {
        field: field.to_string(),
        reason: "must not be empty".to_string(),
    }
}
