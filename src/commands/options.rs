//! Implementation of the `exam-prompt options` command.
//!
//! Lists the selectable difficulties and question types together with the
//! configured defaults and the choice-count range.

use crate::cli::OptionsArgs;
use crate::config::Config;
use crate::error::{AppError, Result};
use crate::form::{Difficulty, QuestionType, SecondaryField};
use serde::Serialize;
use std::fmt::Write as _;
use std::io::Write;

#[derive(Debug, Serialize)]
struct DifficultyEntry {
    key: &'static str,
    label: &'static str,
    level: u8,
    default: bool,
}

#[derive(Debug, Serialize)]
struct QuestionTypeEntry {
    key: &'static str,
    label: &'static str,
    field: SecondaryField,
    default: bool,
}

#[derive(Debug, Serialize)]
struct ChoiceRange {
    min: u8,
    max: u8,
    default: u8,
}

/// Machine-readable form of the option listing.
#[derive(Debug, Serialize)]
struct OptionsReport {
    difficulties: Vec<DifficultyEntry>,
    question_types: Vec<QuestionTypeEntry>,
    choices: ChoiceRange,
    no_limit_token: String,
}

impl OptionsReport {
    fn from_config(config: &Config) -> Self {
        Self {
            difficulties: Difficulty::ALL
                .iter()
                .map(|&d| DifficultyEntry {
                    key: d.key(),
                    label: d.label(),
                    level: d.ordinal(),
                    default: d == config.default_difficulty,
                })
                .collect(),
            question_types: QuestionType::ALL
                .iter()
                .map(|&t| QuestionTypeEntry {
                    key: t.key(),
                    label: t.label(),
                    field: t.secondary_field(),
                    default: t == config.default_question_type,
                })
                .collect(),
            choices: ChoiceRange {
                min: config.choices_min,
                max: config.choices_max,
                default: config.default_num_choices,
            },
            no_limit_token: config.no_limit_token.trim().to_string(),
        }
    }
}

/// Human-readable listing, shared with the session's `options` command.
pub fn render_options(config: &Config) -> String {
    let report = OptionsReport::from_config(config);
    let marker = |default: bool| if default { " (default)" } else { "" };

    let mut out = String::new();
    let _ = writeln!(out, "Difficulties:");
    for d in &report.difficulties {
        let _ = writeln!(out, "  {}. {} [{}]{}", d.level, d.label, d.key, marker(d.default));
    }

    let _ = writeln!(out, "Question types:");
    for t in &report.question_types {
        let field = match t.field {
            SecondaryField::WordLimit => "word limit",
            SecondaryField::NumChoices => "number of choices",
        };
        let _ = writeln!(
            out,
            "  {} [{}] uses {}{}",
            t.label,
            t.key,
            field,
            marker(t.default)
        );
    }

    let _ = writeln!(
        out,
        "Choices: {}-{} (default {})",
        report.choices.min, report.choices.max, report.choices.default
    );
    let _ = writeln!(out, "Empty word limit is written as: {}", report.no_limit_token);
    out
}

/// Execute the `exam-prompt options` command.
pub fn cmd_options(config: &Config, args: OptionsArgs, out: &mut dyn Write) -> Result<()> {
    if args.json {
        let report = OptionsReport::from_config(config);
        let json = serde_json::to_string_pretty(&report)
            .map_err(|e| AppError::UserError(format!("failed to serialize options: {}", e)))?;
        writeln!(out, "{}", json)?;
    } else {
        write!(out, "{}", render_options(config))?;
    }
    Ok(())
}
