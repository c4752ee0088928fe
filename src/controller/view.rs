//! Read-only snapshot of the form for front ends.

use super::ControllerState;
use crate::form::{Difficulty, FormState, QuestionType, SecondaryField};
use serde::Serialize;

/// Everything a front end needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub difficulty: Difficulty,
    pub question_type: QuestionType,
    /// Which of `word_limit` / `num_choices` should be shown and enabled.
    pub active_field: SecondaryField,
    pub word_limit: String,
    pub num_choices: u8,
    pub choices_min: u8,
    pub choices_max: u8,
    pub problem_text: String,
    pub state: ControllerState,
    pub has_generated: bool,
    pub generated_prompt: Option<String>,
}

impl FormView {
    pub(super) fn capture(form: &FormState, state: ControllerState) -> Self {
        let bounds = form.choice_bounds();
        Self {
            difficulty: form.difficulty(),
            question_type: form.question_type(),
            active_field: form.active_secondary_field(),
            word_limit: form.word_limit().to_string(),
            num_choices: form.num_choices(),
            choices_min: bounds.min(),
            choices_max: bounds.max(),
            problem_text: form.problem_text().to_string(),
            state,
            has_generated: form.has_generated(),
            generated_prompt: form.generated_prompt().map(str::to_string),
        }
    }

    /// True when the word-limit control should be visible.
    pub fn shows_word_limit(&self) -> bool {
        self.active_field == SecondaryField::WordLimit
    }

    /// True when the choice-count control should be visible.
    pub fn shows_num_choices(&self) -> bool {
        self.active_field == SecondaryField::NumChoices
    }
}
