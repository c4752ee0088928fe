//! Prompt generation subsystem.
//!
//! This module provides:
//!
//! - **Template**: Parsed `{variable}` templates with `{{`/`}}` escapes
//! - **Composer**: One template per question type plus a difficulty wrapper
//!
//! # Template Variables
//!
//! | Template          | Variables                                   |
//! |-------------------|---------------------------------------------|
//! | `descriptive`     | `word_limit`, `problem_text`                |
//! | `multiple_choice` | `num_choices`, `problem_text`               |
//! | `difficulty`      | `body`, `difficulty`, `difficulty_key`      |

mod composer;
mod template;

pub use composer::PromptComposer;
pub use template::TemplateError;
