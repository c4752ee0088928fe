//! Form model for exam-prompt.
//!
//! This module holds the in-memory form: the selected difficulty and question
//! type, the mode-dependent secondary fields (word limit or choice count), the
//! problem text, and the last generated prompt. Setters never fail: text is
//! filtered and numbers are clamped so the model is always well-formed.

mod edit;
mod state;
mod types;


pub use edit::{FieldEdit, FieldId};
pub use state::{FormDefaults, FormState};
pub use types::{ChoiceBounds, Difficulty, QuestionType, SecondaryField, SecondaryValue};
