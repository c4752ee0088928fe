//! Config loading, validation, and utility operations.

use super::model::Config;
use crate::error::{AppError, Result};
use crate::form::{ChoiceBounds, FormDefaults};
use crate::prompt::PromptComposer;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Environment variable naming the config file when `--config` is absent.
pub const CONFIG_ENV_VAR: &str = "EXAM_PROMPT_CONFIG";

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(AppError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        debug!(path = %path.display(), "loading config");
        Self::from_yaml(&content)
    }

    /// Resolve and load the effective config.
    ///
    /// Order: explicit path, then `EXAM_PROMPT_CONFIG`, then built-in defaults.
    /// A path that is given but unreadable is an error, never a silent fallback.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let path = explicit.map(Path::to_path_buf).or_else(|| {
            std::env::var_os(CONFIG_ENV_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
        });

        match path {
            Some(path) => Self::load(path),
            None => {
                debug!("no config file given, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // serde_yaml rejects an empty document as a struct; treat it as "all defaults".
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                AppError::ConfigError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            AppError::ConfigError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `choices_min` must be at least 2, `choices_max` at most 8, and
    ///   `choices_min` not above `choices_max`
    /// - `default_num_choices` must lie within `[choices_min, choices_max]`
    /// - `no_limit_token` must be non-empty and not made only of digits
    /// - every template must parse and contain its required variables
    pub fn validate(&self) -> Result<()> {
        self.choice_bounds()?;

        if self.default_num_choices < self.choices_min
            || self.default_num_choices > self.choices_max
        {
            return Err(AppError::ConfigError(format!(
                "config validation failed: default_num_choices ({}) must be between choices_min ({}) and choices_max ({})",
                self.default_num_choices, self.choices_min, self.choices_max
            )));
        }

        let token = self.no_limit_token.trim();
        if token.is_empty() {
            return Err(AppError::ConfigError(
                "config validation failed: no_limit_token must be non-empty".to_string(),
            ));
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            return Err(AppError::ConfigError(format!(
                "config validation failed: no_limit_token '{}' would be indistinguishable from a word limit",
                token
            )));
        }

        self.composer()?;
        Ok(())
    }

    /// Choice-count bounds as a validated range.
    pub fn choice_bounds(&self) -> Result<ChoiceBounds> {
        ChoiceBounds::new(self.choices_min, self.choices_max).ok_or_else(|| {
            AppError::ConfigError(format!(
                "config validation failed: choice range [{}, {}] is invalid (choices_min must be at least {}, choices_max at most {}, and choices_min <= choices_max)",
                self.choices_min,
                self.choices_max,
                ChoiceBounds::FLOOR,
                ChoiceBounds::CEILING
            ))
        })
    }

    /// Form defaults derived from this config.
    pub fn form_defaults(&self) -> Result<FormDefaults> {
        Ok(FormDefaults {
            difficulty: self.default_difficulty,
            question_type: self.default_question_type,
            num_choices: self.default_num_choices,
            choice_bounds: self.choice_bounds()?,
        })
    }

    /// Build a composer from the configured templates.
    pub fn composer(&self) -> Result<PromptComposer> {
        Ok(PromptComposer::new(&self.templates)?)
    }

    /// Write the default config to `path`, refusing to overwrite unless `force`.
    pub fn write_default<P: AsRef<Path>>(path: P, force: bool) -> Result<()> {
        let path = path.as_ref();
        if path.exists() && !force {
            return Err(AppError::UserError(format!(
                "'{}' already exists (use --force to overwrite)",
                path.display()
            )));
        }

        let yaml = Self::default().to_yaml()?;
        std::fs::write(path, yaml).map_err(|e| {
            AppError::ConfigError(format!(
                "failed to write config file '{}': {}",
                path.display(),
                e
            ))
        })
    }
}
