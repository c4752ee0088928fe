//! Config struct definition and default implementation.

use super::types::*;
use crate::form::{Difficulty, QuestionType};
use serde::{Deserialize, Serialize};

/// Configuration for exam-prompt.
///
/// Loaded once at startup and never mutated afterwards.
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Form defaults
    // =========================================================================
    /// Difficulty selected on startup and after clear.
    pub default_difficulty: Difficulty,

    /// Question type selected on startup and after clear.
    pub default_question_type: QuestionType,

    /// Number of answer options on startup and after clear.
    #[serde(default = "default_num_choices")]
    pub default_num_choices: u8,

    // =========================================================================
    // Limits
    // =========================================================================
    /// Smallest allowed number of answer options (at least 2).
    #[serde(default = "default_choices_min")]
    pub choices_min: u8,

    /// Largest allowed number of answer options.
    #[serde(default = "default_choices_max")]
    pub choices_max: u8,

    // =========================================================================
    // Prompt text
    // =========================================================================
    /// Text embedded in place of an empty word limit.
    #[serde(default = "default_no_limit_token")]
    pub no_limit_token: String,

    /// Prompt templates.
    pub templates: PromptTemplates,

    // =========================================================================
    // Clipboard
    // =========================================================================
    /// Command that receives the prompt on stdin (e.g. "xclip -selection clipboard").
    /// When unset, a platform command is detected.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clipboard_command: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_difficulty: Difficulty::default(),
            default_question_type: QuestionType::default(),
            default_num_choices: default_num_choices(),
            choices_min: default_choices_min(),
            choices_max: default_choices_max(),
            no_limit_token: default_no_limit_token(),
            templates: PromptTemplates::default(),
            clipboard_command: None,
        }
    }
}
