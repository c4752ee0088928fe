//! Implementation of the `exam-prompt generate` command.
//!
//! Runs one full pass through the form: apply the given field values the same
//! way a front end would, generate, optionally copy, and print the prompt.

use crate::cli::GenerateArgs;
use crate::clipboard::Clipboard;
use crate::controller::Controller;
use crate::error::{AppError, Result};
use crate::form::{FieldEdit, FieldId};
use std::io::{Read, Write};
use std::path::Path;

/// Execute the `exam-prompt generate` command.
///
/// Field values pass through the same edit path as the interactive session:
/// the word limit is sanitized, the choice count is clamped, and unknown
/// labels are rejected before anything is generated.
pub fn cmd_generate<C: Clipboard>(
    controller: &mut Controller<C>,
    args: GenerateArgs,
    stdin: &mut dyn Read,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<()> {
    let edits = [
        (FieldId::Difficulty, args.difficulty),
        (FieldId::QuestionType, args.question_type),
        (FieldId::WordLimit, args.word_limit),
        (FieldId::NumChoices, args.choices),
    ];
    for (field, value) in edits {
        if let Some(raw) = value {
            controller.apply_edit(&FieldEdit::new(field, raw))?;
        }
    }

    let problem = read_problem(args.problem, args.problem_file.as_deref(), stdin)?;
    controller.apply_edit(&FieldEdit::new(FieldId::ProblemText, problem))?;

    let prompt = controller.generate()?.to_string();
    writeln!(out, "{}", prompt)?;

    if args.copy {
        controller.copy_to_clipboard()?;
        writeln!(err, "プロンプトをクリップボードにコピーしました。")?;
    }

    Ok(())
}

/// Problem text from the flag, a file, or stdin (in that order).
fn read_problem(
    inline: Option<String>,
    file: Option<&Path>,
    stdin: &mut dyn Read,
) -> Result<String> {
    if let Some(text) = inline {
        return Ok(text);
    }

    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path).map_err(|e| {
            AppError::UserError(format!(
                "failed to read problem file '{}': {}",
                path.display(),
                e
            ))
        }),
        _ => {
            let mut text = String::new();
            stdin.read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
