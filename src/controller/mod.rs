//! Controller: the generate / copy / clear state machine.
//!
//! The controller owns the one [`FormState`] instance and is the only thing
//! that mutates it. Front ends send it field edits and button presses and
//! read back a [`FormView`] snapshot.
//!
//! ```text
//!            generate (ok)
//!   Idle ─────────────────▶ Generated ──┐ generate / copy / edits
//!    ▲                          │  ◀────┘
//!    └──────── clear ───────────┘
//! ```
//!
//! Edits made after generation do not invalidate the stored prompt; only the
//! next `generate` replaces it.

mod view;


pub use view::FormView;

use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::error::{PreconditionError, Result, ValidationError};
use crate::form::{FieldEdit, FormDefaults, FormState, QuestionType};
use crate::prompt::PromptComposer;
use tracing::{debug, info, warn};

/// Whether a copyable prompt exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControllerState {
    /// Nothing generated since start or the last clear.
    Idle,
    /// A prompt exists and can be copied.
    Generated,
}

/// Drives the form on behalf of a single front end.
pub struct Controller<C: Clipboard> {
    form: FormState,
    composer: PromptComposer,
    no_limit_token: String,
    clipboard: C,
}

impl<C: Clipboard> Controller<C> {
    pub fn new(
        defaults: FormDefaults,
        composer: PromptComposer,
        no_limit_token: impl Into<String>,
        clipboard: C,
    ) -> Self {
        Self {
            form: FormState::new(defaults),
            composer,
            no_limit_token: no_limit_token.into(),
            clipboard,
        }
    }

    /// Build a controller from a validated config.
    pub fn from_config(config: &Config, clipboard: C) -> Result<Self> {
        Ok(Self::new(
            config.form_defaults()?,
            config.composer()?,
            config.no_limit_token.trim(),
            clipboard,
        ))
    }

    pub fn state(&self) -> ControllerState {
        if self.form.has_generated() {
            ControllerState::Generated
        } else {
            ControllerState::Idle
        }
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Direct access for typed setters; the setters keep the form well-formed.
    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn clipboard(&self) -> &C {
        &self.clipboard
    }

    /// Read-only snapshot for display.
    pub fn view(&self) -> FormView {
        FormView::capture(&self.form, self.state())
    }

    /// Apply a raw field edit from the front end.
    pub fn apply_edit(&mut self, edit: &FieldEdit) -> Result<()> {
        edit.apply(&mut self.form)?;
        debug!(field = edit.field.key(), "field edited");
        Ok(())
    }

    /// Word limit text to embed: the digits entered, or the "no limit" token.
    pub fn word_limit_text(&self) -> &str {
        if self.form.word_limit().is_empty() {
            &self.no_limit_token
        } else {
            self.form.word_limit()
        }
    }

    /// Compose the prompt for the active question type and store it.
    ///
    /// Fails with `EmptyProblemText` when the problem text is blank; the form
    /// (including any earlier prompt) is left untouched in that case.
    pub fn generate(&mut self) -> Result<&str> {
        let problem_text = self.form.problem_text().trim();
        if problem_text.is_empty() {
            warn!("generate rejected: problem text is empty");
            return Err(ValidationError::EmptyProblemText.into());
        }

        let question_type = self.form.question_type();
        let body = match question_type {
            QuestionType::Descriptive => self
                .composer
                .compose_descriptive_prompt(self.word_limit_text(), problem_text),
            QuestionType::MultipleChoice => self
                .composer
                .compose_multiple_choice_prompt(self.form.num_choices(), problem_text),
        };
        let prompt = self
            .composer
            .apply_difficulty(self.form.difficulty(), &body);

        info!(
            question_type = question_type.key(),
            difficulty = self.form.difficulty().key(),
            prompt_chars = prompt.chars().count(),
            "prompt generated"
        );
        self.form.record_generated(prompt);

        Ok(self.form.generated_prompt().unwrap_or_default())
    }

    /// Hand the stored prompt to the clipboard.
    ///
    /// Requires the `Generated` state; the clipboard is not touched otherwise.
    pub fn copy_to_clipboard(&mut self) -> Result<()> {
        let Some(prompt) = self.form.generated_prompt() else {
            warn!("copy rejected: nothing generated");
            return Err(PreconditionError::NothingGenerated.into());
        };

        self.clipboard.write(prompt)?;
        info!(prompt_chars = prompt.chars().count(), "prompt copied to clipboard");
        Ok(())
    }

    /// Reset every field to its default and return to `Idle`.
    pub fn clear(&mut self) {
        self.form.reset();
        debug!("form cleared");
    }
}
