//! Prompt composition for each question type.

use super::template::{Template, TemplateError, vars};
use crate::config::PromptTemplates;
use crate::form::Difficulty;

/// Variable holding the trimmed problem statement.
pub const VAR_PROBLEM_TEXT: &str = "problem_text";
/// Variable holding the word limit, or the "no limit" token.
pub const VAR_WORD_LIMIT: &str = "word_limit";
/// Variable holding the number of answer options.
pub const VAR_NUM_CHOICES: &str = "num_choices";
/// Variable holding the difficulty label.
pub const VAR_DIFFICULTY: &str = "difficulty";
/// Variable holding the ASCII difficulty key.
pub const VAR_DIFFICULTY_KEY: &str = "difficulty_key";
/// Variable holding the mode-specific prompt body.
pub const VAR_BODY: &str = "body";

const DESCRIPTIVE_VARS: &[&str] = &[VAR_WORD_LIMIT, VAR_PROBLEM_TEXT];
const MULTIPLE_CHOICE_VARS: &[&str] = &[VAR_NUM_CHOICES, VAR_PROBLEM_TEXT];
const DIFFICULTY_VARS: &[&str] = &[VAR_BODY, VAR_DIFFICULTY, VAR_DIFFICULTY_KEY];

/// Builds final prompts from parsed templates.
///
/// Construction validates the templates; after that every compose call is total.
#[derive(Debug, Clone)]
pub struct PromptComposer {
    descriptive: Template,
    multiple_choice: Template,
    difficulty: Template,
}

impl PromptComposer {
    pub fn new(templates: &PromptTemplates) -> Result<Self, TemplateError> {
        Ok(Self {
            descriptive: Template::parse(
                &templates.descriptive,
                DESCRIPTIVE_VARS,
                DESCRIPTIVE_VARS,
            )?,
            multiple_choice: Template::parse(
                &templates.multiple_choice,
                MULTIPLE_CHOICE_VARS,
                MULTIPLE_CHOICE_VARS,
            )?,
            difficulty: Template::parse(
                &templates.difficulty,
                DIFFICULTY_VARS,
                &[VAR_BODY, VAR_DIFFICULTY],
            )?,
        })
    }

    /// Free-response prompt.
    ///
    /// `word_limit_text` is embedded as given; callers substitute the "no limit"
    /// token for an empty word limit beforehand.
    pub fn compose_descriptive_prompt(&self, word_limit_text: &str, problem_text: &str) -> String {
        self.descriptive.render(&vars([
            (VAR_WORD_LIMIT, word_limit_text),
            (VAR_PROBLEM_TEXT, problem_text.trim()),
        ]))
    }

    /// Multiple-choice prompt with exactly `num_choices` options.
    pub fn compose_multiple_choice_prompt(&self, num_choices: u8, problem_text: &str) -> String {
        self.multiple_choice.render(&vars([
            (VAR_NUM_CHOICES, num_choices.to_string()),
            (VAR_PROBLEM_TEXT, problem_text.trim().to_string()),
        ]))
    }

    /// Wrap a composed body with the difficulty directive.
    pub fn apply_difficulty(&self, difficulty: Difficulty, body: &str) -> String {
        self.difficulty.render(&vars([
            (VAR_BODY, body),
            (VAR_DIFFICULTY, difficulty.label()),
            (VAR_DIFFICULTY_KEY, difficulty.key()),
        ]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composer() -> PromptComposer {
        PromptComposer::new(&PromptTemplates::default()).unwrap()
    }

    #[test]
    fn test_default_templates_parse() {
        assert!(PromptComposer::new(&PromptTemplates::default()).is_ok());
    }

    #[test]
    fn test_descriptive_embeds_word_limit_and_problem() {
        let prompt = composer().compose_descriptive_prompt("200", "牛の生態について説明せよ");
        assert!(prompt.contains("200"));
        assert!(prompt.contains("牛の生態について説明せよ"));
        assert!(prompt.contains("記述式"));
    }

    #[test]
    fn test_descriptive_with_no_limit_token_has_no_digits() {
        let prompt = composer().compose_descriptive_prompt("なし", "牛の生態について説明せよ");
        assert!(prompt.contains("なし"));
        assert!(!prompt.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_problem_text_is_trimmed_but_inner_newlines_kept() {
        let prompt = composer().compose_descriptive_prompt("なし", "\n  一行目\n二行目  \n");
        assert!(prompt.contains("一行目\n二行目"));
        assert!(!prompt.contains("  一行目"));
    }

    #[test]
    fn test_problem_text_braces_are_not_interpreted() {
        let prompt = composer().compose_multiple_choice_prompt(4, "集合 {x | x > 0} について");
        assert!(prompt.contains("集合 {x | x > 0} について"));
    }

    #[test]
    fn test_multiple_choice_embeds_exact_count() {
        let prompt = composer().compose_multiple_choice_prompt(4, "光合成の仕組みを問う問題");
        assert!(prompt.contains("選択肢の数: 4"));
        assert!(prompt.contains("光合成の仕組みを問う問題"));
        assert!(prompt.contains("多肢択一"));

        let digits: String = prompt.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(digits, "4");
    }

    #[test]
    fn test_apply_difficulty_wraps_body() {
        let out = composer().apply_difficulty(Difficulty::EntranceExam, "BODY");
        assert!(out.starts_with("BODY"));
        assert!(out.contains("難関大入試レベル"));
    }

    #[test]
    fn test_custom_templates() {
        let templates = PromptTemplates {
            descriptive: "D[{word_limit}]{problem_text}".to_string(),
            multiple_choice: "M[{num_choices}]{problem_text}".to_string(),
            difficulty: "({difficulty_key}) {body} / {difficulty}".to_string(),
        };
        let composer = PromptComposer::new(&templates).unwrap();

        assert_eq!(composer.compose_descriptive_prompt("50", " q "), "D[50]q");
        assert_eq!(composer.compose_multiple_choice_prompt(3, "q"), "M[3]q");
        assert_eq!(
            composer.apply_difficulty(Difficulty::Hard, "x"),
            "(hard) x / 難しい"
        );
    }

    #[test]
    fn test_template_missing_problem_text_is_rejected() {
        let templates = PromptTemplates {
            descriptive: "word limit {word_limit}".to_string(),
            ..PromptTemplates::default()
        };
        let err = PromptComposer::new(&templates).unwrap_err();
        assert_eq!(
            err,
            TemplateError::MissingVariable {
                name: VAR_PROBLEM_TEXT.to_string()
            }
        );
    }

    #[test]
    fn test_template_with_foreign_variable_is_rejected() {
        let templates = PromptTemplates {
            multiple_choice: "{num_choices} {word_limit} {problem_text}".to_string(),
            ..PromptTemplates::default()
        };
        let err = PromptComposer::new(&templates).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownVariable { ref name, .. } if name == "word_limit"));
    }
}
