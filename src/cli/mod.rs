//! CLI argument parsing for exam-prompt.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// exam-prompt: compose prompts that ask a text-generation service for exam questions.
///
/// Pick a difficulty and a question type, give a source problem statement, and
/// the composed prompt is printed (and optionally copied to the clipboard).
#[derive(Parser, Debug)]
#[command(name = "exam-prompt")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to a YAML config file (overrides EXAM_PROMPT_CONFIG).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for exam-prompt.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose a prompt in one shot and print it.
    ///
    /// The problem text comes from --problem, --problem-file, or stdin.
    Generate(GenerateArgs),

    /// Interactive form: edit fields, generate, copy, clear.
    ///
    /// Reads commands line by line from stdin. Type `help` for the list.
    Session,

    /// List difficulties, question types, defaults, and limits.
    Options(OptionsArgs),

    /// Configuration commands.
    Config(ConfigCommand),
}

/// Arguments for the `generate` command.
#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Difficulty label, key, or level number (1 = easiest).
    #[arg(short, long)]
    pub difficulty: Option<String>,

    /// Question type: descriptive (記述式) or multiple_choice (多肢択一).
    #[arg(short = 't', long = "type", value_name = "TYPE")]
    pub question_type: Option<String>,

    /// Word limit for descriptive questions; non-digits are dropped, empty means none.
    #[arg(short, long)]
    pub word_limit: Option<String>,

    /// Number of answer options for multiple-choice questions (clamped to the configured range).
    #[arg(short, long)]
    pub choices: Option<String>,

    /// Problem text.
    #[arg(short, long, conflicts_with = "problem_file")]
    pub problem: Option<String>,

    /// Read the problem text from a file ("-" for stdin).
    #[arg(long, value_name = "PATH")]
    pub problem_file: Option<PathBuf>,

    /// Also copy the prompt to the clipboard.
    #[arg(long)]
    pub copy: bool,
}

/// Arguments for the `options` command.
#[derive(Parser, Debug)]
pub struct OptionsArgs {
    /// Print as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Config subcommands.
#[derive(Parser, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub action: ConfigAction,
}

/// Available config actions.
#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as YAML.
    Show,

    /// Write the default configuration to a file.
    Init(ConfigInitArgs),
}

/// Arguments for the `config init` command.
#[derive(Parser, Debug)]
pub struct ConfigInitArgs {
    /// Destination file.
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_generate_defaults() {
        let cli = Cli::try_parse_from(["exam-prompt", "generate", "-p", "問題"]).unwrap();
        assert!(cli.config.is_none());
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.problem.as_deref(), Some("問題"));
            assert!(args.difficulty.is_none());
            assert!(args.question_type.is_none());
            assert!(args.word_limit.is_none());
            assert!(args.choices.is_none());
            assert!(args.problem_file.is_none());
            assert!(!args.copy);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_full() {
        let cli = Cli::try_parse_from([
            "exam-prompt",
            "generate",
            "--difficulty",
            "難しい",
            "--type",
            "multiple_choice",
            "--choices",
            "4",
            "--word-limit",
            "200",
            "--problem-file",
            "problem.txt",
            "--copy",
        ])
        .unwrap();
        if let Command::Generate(args) = cli.command {
            assert_eq!(args.difficulty.as_deref(), Some("難しい"));
            assert_eq!(args.question_type.as_deref(), Some("multiple_choice"));
            assert_eq!(args.choices.as_deref(), Some("4"));
            assert_eq!(args.word_limit.as_deref(), Some("200"));
            assert_eq!(args.problem_file, Some(PathBuf::from("problem.txt")));
            assert!(args.copy);
        } else {
            panic!("Expected Generate command");
        }
    }

    #[test]
    fn parse_generate_problem_conflicts_with_file() {
        let result = Cli::try_parse_from([
            "exam-prompt",
            "generate",
            "--problem",
            "a",
            "--problem-file",
            "b.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn parse_session_with_global_config() {
        let cli =
            Cli::try_parse_from(["exam-prompt", "session", "--config", "conf.yaml"]).unwrap();
        assert!(matches!(cli.command, Command::Session));
        assert_eq!(cli.config, Some(PathBuf::from("conf.yaml")));
    }

    #[test]
    fn parse_options_json() {
        let cli = Cli::try_parse_from(["exam-prompt", "options", "--json"]).unwrap();
        if let Command::Options(args) = cli.command {
            assert!(args.json);
        } else {
            panic!("Expected Options command");
        }
    }

    #[test]
    fn parse_config_show() {
        let cli = Cli::try_parse_from(["exam-prompt", "config", "show"]).unwrap();
        if let Command::Config(cmd) = cli.command {
            assert!(matches!(cmd.action, ConfigAction::Show));
        } else {
            panic!("Expected Config command");
        }
    }

    #[test]
    fn parse_config_init() {
        let cli =
            Cli::try_parse_from(["exam-prompt", "config", "init", "out.yaml", "--force"]).unwrap();
        if let Command::Config(cmd) = cli.command {
            if let ConfigAction::Init(args) = cmd.action {
                assert_eq!(args.path, PathBuf::from("out.yaml"));
                assert!(args.force);
            } else {
                panic!("Expected Init action");
            }
        } else {
            panic!("Expected Config command");
        }
    }
}
