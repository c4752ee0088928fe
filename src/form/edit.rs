//! Raw field-edit events coming from a front end.
//!
//! Front ends only know field identifiers and the raw text the user typed.
//! This module turns those into typed setter calls on [`FormState`].

use super::state::FormState;
use super::types::{Difficulty, QuestionType};
use crate::error::{AppError, Result};
use crate::sanitize::first_integer;

/// Identifier of an editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldId {
    Difficulty,
    QuestionType,
    WordLimit,
    NumChoices,
    ProblemText,
}

impl FieldId {
    pub const ALL: [FieldId; 5] = [
        FieldId::Difficulty,
        FieldId::QuestionType,
        FieldId::WordLimit,
        FieldId::NumChoices,
        FieldId::ProblemText,
    ];

    pub fn key(self) -> &'static str {
        match self {
            FieldId::Difficulty => "difficulty",
            FieldId::QuestionType => "type",
            FieldId::WordLimit => "word-limit",
            FieldId::NumChoices => "choices",
            FieldId::ProblemText => "problem",
        }
    }

    /// Parse a field identifier; accepts the key and a few common spellings.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "difficulty" | "level" => Some(FieldId::Difficulty),
            "type" | "question-type" => Some(FieldId::QuestionType),
            "word-limit" | "words" | "limit" => Some(FieldId::WordLimit),
            "choices" | "num-choices" => Some(FieldId::NumChoices),
            "problem" | "problem-text" => Some(FieldId::ProblemText),
            _ => None,
        }
    }
}

/// A single edit: the field and the raw text entered for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldEdit {
    pub field: FieldId,
    pub raw: String,
}

impl FieldEdit {
    pub fn new(field: FieldId, raw: impl Into<String>) -> Self {
        Self {
            field,
            raw: raw.into(),
        }
    }

    /// Apply the edit to `form`.
    ///
    /// Labels that do not name a difficulty or question type are rejected and
    /// leave the form untouched. For a choice count the first signed integer
    /// in the text is taken and clamped; text without one leaves the count
    /// unchanged.
    pub fn apply(&self, form: &mut FormState) -> Result<()> {
        match self.field {
            FieldId::Difficulty => {
                let difficulty = Difficulty::from_str(&self.raw).ok_or_else(|| {
                    AppError::UserError(format!(
                        "unknown difficulty '{}'. Valid values: {}",
                        self.raw,
                        Difficulty::ALL
                            .iter()
                            .map(|d| format!("{} ({})", d.label(), d.key()))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?;
                form.set_difficulty(difficulty);
            }
            FieldId::QuestionType => {
                let question_type = QuestionType::from_str(&self.raw).ok_or_else(|| {
                    AppError::UserError(format!(
                        "unknown question type '{}'. Valid values: {}",
                        self.raw,
                        QuestionType::ALL
                            .iter()
                            .map(|t| format!("{} ({})", t.label(), t.key()))
                            .collect::<Vec<_>>()
                            .join(", ")
                    ))
                })?;
                form.set_question_type(question_type);
            }
            FieldId::WordLimit => form.set_word_limit(&self.raw),
            FieldId::NumChoices => {
                if let Some(n) = first_integer(&self.raw) {
                    form.set_num_choices(n);
                }
            }
            FieldId::ProblemText => form.set_problem_text(self.raw.clone()),
        }
        Ok(())
    }
}
