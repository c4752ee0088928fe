//! The single mutable form model and its setters.

use super::types::{ChoiceBounds, Difficulty, QuestionType, SecondaryField, SecondaryValue};
use crate::sanitize::sanitize_digits;

/// Values a fresh or cleared form starts from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormDefaults {
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    pub num_choices: u8,
    pub choice_bounds: ChoiceBounds,
}

impl Default for FormDefaults {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            question_type: QuestionType::Descriptive,
            num_choices: 5,
            choice_bounds: ChoiceBounds::default(),
        }
    }
}

/// Current field values plus the last generated prompt.
///
/// Invariants:
/// - `word_limit` only ever holds ASCII digits (possibly none).
/// - `num_choices` is always inside `defaults.choice_bounds`.
/// - `generated_prompt` is `Some` (and non-empty) exactly when a prompt has
///   been generated since the last reset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    defaults: FormDefaults,
    difficulty: Difficulty,
    question_type: QuestionType,
    word_limit: String,
    num_choices: u8,
    problem_text: String,
    generated_prompt: Option<String>,
}

impl FormState {
    /// Create a form populated with `defaults`.
    ///
    /// A default choice count outside the bounds is clamped into them.
    pub fn new(defaults: FormDefaults) -> Self {
        let defaults = FormDefaults {
            num_choices: defaults
                .choice_bounds
                .clamp(i64::from(defaults.num_choices)),
            ..defaults
        };
        Self {
            defaults,
            difficulty: defaults.difficulty,
            question_type: defaults.question_type,
            word_limit: String::new(),
            num_choices: defaults.num_choices,
            problem_text: String::new(),
            generated_prompt: None,
        }
    }

    pub fn defaults(&self) -> &FormDefaults {
        &self.defaults
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn question_type(&self) -> QuestionType {
        self.question_type
    }

    /// Sanitized word limit; empty means "no limit".
    pub fn word_limit(&self) -> &str {
        &self.word_limit
    }

    pub fn num_choices(&self) -> u8 {
        self.num_choices
    }

    pub fn choice_bounds(&self) -> ChoiceBounds {
        self.defaults.choice_bounds
    }

    /// Problem text exactly as entered.
    pub fn problem_text(&self) -> &str {
        &self.problem_text
    }

    pub fn generated_prompt(&self) -> Option<&str> {
        self.generated_prompt.as_deref()
    }

    pub fn has_generated(&self) -> bool {
        self.generated_prompt.is_some()
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        self.difficulty = difficulty;
    }

    /// Switch mode. The inactive field keeps its value, and an existing
    /// generated prompt is left as is.
    pub fn set_question_type(&mut self, question_type: QuestionType) {
        self.question_type = question_type;
    }

    /// Store the word limit after stripping every non-digit character.
    pub fn set_word_limit(&mut self, raw: &str) {
        self.word_limit = sanitize_digits(raw);
    }

    /// Store the choice count, clamped into the configured bounds.
    pub fn set_num_choices(&mut self, n: i64) {
        self.num_choices = self.defaults.choice_bounds.clamp(n);
    }

    pub fn set_problem_text(&mut self, text: impl Into<String>) {
        self.problem_text = text.into();
    }

    /// The control that should currently be shown and enabled.
    pub fn active_secondary_field(&self) -> SecondaryField {
        self.question_type.secondary_field()
    }

    /// Value of the field that is relevant for the current question type.
    pub fn active_secondary_value(&self) -> SecondaryValue {
        match self.active_secondary_field() {
            SecondaryField::WordLimit => SecondaryValue::WordLimit(self.word_limit.clone()),
            SecondaryField::NumChoices => SecondaryValue::NumChoices(self.num_choices),
        }
    }

    /// Record a freshly composed prompt. Empty prompts are ignored so the
    /// "generated implies non-empty" invariant holds.
    pub(crate) fn record_generated(&mut self, prompt: String) {
        if prompt.is_empty() {
            return;
        }
        self.generated_prompt = Some(prompt);
    }

    /// Restore every field to its default and drop the generated prompt.
    pub fn reset(&mut self) {
        *self = Self::new(self.defaults);
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new(FormDefaults::default())
    }
}
