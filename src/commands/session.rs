//! Implementation of the `exam-prompt session` command.
//!
//! A line-oriented stand-in for the form window. Each input line is one user
//! action; core errors are shown as messages and the session keeps going.
//!
//! ```text
//! > set type 多肢択一
//! > set choices 4
//! > problem
//! 光合成の仕組みを問う問題
//! .
//! > generate
//! > copy
//! ```

use super::options::render_options;
use crate::clipboard::Clipboard;
use crate::config::Config;
use crate::controller::{Controller, ControllerState, FormView};
use crate::error::{AppError, Result};
use crate::form::{FieldEdit, FieldId};
use std::io::{BufRead, Write};
use tracing::debug;

/// Line that ends multi-line problem input.
const PROBLEM_TERMINATOR: &str = ".";

const HELP: &str = "\
Commands:
  set <field> <value>   Edit a field (difficulty, type, word-limit, choices, problem)
  problem               Enter multi-line problem text; finish with a line containing only '.'
  show                  Show the form
  generate              Compose the prompt
  copy                  Copy the generated prompt to the clipboard
  clear                 Reset the form
  options               List difficulties, question types, and limits
  help                  Show this help
  quit                  Leave the session";

/// Status line, mirroring what the form window shows under its buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Status {
    Pending,
    Generated,
    Copied,
}

impl Status {
    fn message(self) -> &'static str {
        match self {
            Status::Pending => "プロンプトを生成してください",
            Status::Generated => {
                "プロンプトが生成されました！ `copy` でクリップボードにコピーしてください。"
            }
            Status::Copied => "プロンプトがコピーされました！",
        }
    }
}

/// Result of handling a single input line.
enum Flow {
    Continue,
    Quit,
}

/// Interactive session over arbitrary input and output streams.
pub struct Session<'a, C: Clipboard, R: BufRead, W: Write> {
    controller: &'a mut Controller<C>,
    config: &'a Config,
    input: R,
    out: W,
    status: Status,
}

impl<'a, C: Clipboard, R: BufRead, W: Write> Session<'a, C, R, W> {
    pub fn new(controller: &'a mut Controller<C>, config: &'a Config, input: R, out: W) -> Self {
        let status = match controller.state() {
            ControllerState::Idle => Status::Pending,
            ControllerState::Generated => Status::Generated,
        };
        Self {
            controller,
            config,
            input,
            out,
            status,
        }
    }

    /// Run until `quit` or end of input.
    pub fn run(&mut self) -> Result<()> {
        writeln!(self.out, "試験問題作成 (type `help` for commands)")?;
        self.show()?;

        loop {
            write!(self.out, "> ")?;
            self.out.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.out)?;
                break;
            };

            match self.handle(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                // Core and input errors are reported; I/O failures end the session.
                Err(AppError::Io(e)) => return Err(AppError::Io(e)),
                Err(e) => self.report(&e)?,
            }
        }
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn handle(&mut self, line: &str) -> Result<Flow> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };
        debug!(command, "session command");

        match command.to_ascii_lowercase().as_str() {
            "" => {}
            "set" => self.set(rest)?,
            "problem" => self.read_problem()?,
            "show" => self.show()?,
            "generate" | "gen" => self.generate()?,
            "copy" => self.copy()?,
            "clear" => {
                self.controller.clear();
                self.status = Status::Pending;
                self.show()?;
            }
            "options" => write!(self.out, "{}", render_options(self.config))?,
            "help" | "?" => writeln!(self.out, "{}", HELP)?,
            "quit" | "exit" | "q" => return Ok(Flow::Quit),
            other => {
                return Err(AppError::UserError(format!(
                    "unknown command '{}' (type `help`)",
                    other
                )));
            }
        }
        Ok(Flow::Continue)
    }

    fn set(&mut self, rest: &str) -> Result<()> {
        let (field, value) = match rest.split_once(char::is_whitespace) {
            Some((field, value)) => (field, value.trim()),
            None => (rest, ""),
        };
        if field.is_empty() {
            return Err(AppError::UserError("usage: set <field> <value>".to_string()));
        }
        let field = FieldId::from_str(field).ok_or_else(|| {
            AppError::UserError(format!(
                "unknown field '{}'. Fields: {}",
                field,
                FieldId::ALL
                    .iter()
                    .map(|f| f.key())
                    .collect::<Vec<_>>()
                    .join(", ")
            ))
        })?;

        self.controller.apply_edit(&FieldEdit::new(field, value))?;

        // Echo what was stored so filtering and clamping are visible.
        let form = self.controller.form();
        match field {
            FieldId::Difficulty => writeln!(self.out, "難易度: {}", form.difficulty())?,
            FieldId::QuestionType => {
                writeln!(self.out, "問題形式: {}", form.question_type())?;
                self.show_active_secondary(&self.controller.view())?;
            }
            FieldId::WordLimit => writeln!(self.out, "字数制限: {}", display_word_limit(form.word_limit()))?,
            FieldId::NumChoices => writeln!(self.out, "選択肢数: {}", form.num_choices())?,
            FieldId::ProblemText => writeln!(
                self.out,
                "問題文: {} 文字",
                form.problem_text().trim().chars().count()
            )?,
        }
        Ok(())
    }

    fn read_problem(&mut self) -> Result<()> {
        writeln!(
            self.out,
            "問題文を入力してください (finish with a line containing only '{}'):",
            PROBLEM_TERMINATOR
        )?;
        self.out.flush()?;

        let mut lines = Vec::new();
        while let Some(line) = self.read_line()? {
            if line == PROBLEM_TERMINATOR {
                break;
            }
            lines.push(line);
        }

        self.controller
            .apply_edit(&FieldEdit::new(FieldId::ProblemText, lines.join("\n")))?;
        writeln!(
            self.out,
            "問題文: {} 文字",
            self.controller.form().problem_text().trim().chars().count()
        )?;
        Ok(())
    }

    fn generate(&mut self) -> Result<()> {
        let prompt = self.controller.generate()?.to_string();
        self.status = Status::Generated;
        writeln!(self.out, "--- 生成されたプロンプト ---")?;
        writeln!(self.out, "{}", prompt)?;
        writeln!(self.out, "----------------------------")?;
        writeln!(self.out, "{}", self.status.message())?;
        Ok(())
    }

    fn copy(&mut self) -> Result<()> {
        self.controller.copy_to_clipboard()?;
        self.status = Status::Copied;
        writeln!(self.out, "プロンプトをクリップボードにコピーしました。")?;
        writeln!(self.out, "{}", self.status.message())?;
        Ok(())
    }

    fn show(&mut self) -> Result<()> {
        let view = self.controller.view();
        writeln!(
            self.out,
            "難易度:   {} ({})",
            view.difficulty,
            view.difficulty.key()
        )?;
        writeln!(
            self.out,
            "問題形式: {} ({})",
            view.question_type,
            view.question_type.key()
        )?;
        self.show_active_secondary(&view)?;
        if view.problem_text.trim().is_empty() {
            writeln!(self.out, "問題文:   (未入力)")?;
        } else {
            writeln!(
                self.out,
                "問題文:   {} 文字",
                view.problem_text.trim().chars().count()
            )?;
        }
        writeln!(self.out, "状態:     {}", self.status.message())?;
        Ok(())
    }

    /// Only the control relevant to the current question type is shown.
    fn show_active_secondary(&mut self, view: &FormView) -> Result<()> {
        if view.shows_word_limit() {
            writeln!(
                self.out,
                "字数制限: {}  ※ なしの場合は空欄にしてください",
                display_word_limit(&view.word_limit)
            )?;
        }
        if view.shows_num_choices() {
            writeln!(
                self.out,
                "選択肢数: {} ({}-{})",
                view.num_choices, view.choices_min, view.choices_max
            )?;
        }
        Ok(())
    }

    fn report(&mut self, err: &AppError) -> Result<()> {
        let prefix = match err {
            AppError::Precondition(_) => "警告",
            _ => "エラー",
        };
        writeln!(self.out, "{}: {}", prefix, err)?;
        Ok(())
    }

    #[cfg(test)]
    fn into_output(self) -> W {
        self.out
    }
}

fn display_word_limit(word_limit: &str) -> &str {
    if word_limit.is_empty() {
        "(空欄)"
    } else {
        word_limit
    }
}

/// Execute the `exam-prompt session` command on stdin/stdout.
pub fn cmd_session<C: Clipboard>(controller: &mut Controller<C>, config: &Config) -> Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Session::new(controller, config, stdin.lock(), stdout.lock()).run()
}
