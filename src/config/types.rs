//! Configuration types and defaults for exam-prompt.
//!
//! This module defines the template set, constants, and default value
//! functions used by the Config struct.

use serde::{Deserialize, Serialize};

/// Token embedded in descriptive prompts when no word limit is given.
pub const DEFAULT_NO_LIMIT_TOKEN: &str = "なし";

/// Default template for free-response questions.
pub const DEFAULT_DESCRIPTIVE_TEMPLATE: &str = r#"あなたは経験豊富な試験問題の作成者です。
以下の「元の問題文」を素材として、記述式の試験問題を作成してください。

# 条件
- 出題形式: 記述式
- 字数制限: {word_limit}
- 字数制限が指定されている場合は、解答をその字数以内に収めるよう問題文中で指示してください。
- 字数制限が指定されていない場合は、字数制限がないことを問題文中に明記してください。
- 問題文、模範解答、採点基準をこの順に出力してください。

# 元の問題文
{problem_text}"#;

/// Default template for multiple-choice questions.
pub const DEFAULT_MULTIPLE_CHOICE_TEMPLATE: &str = r#"あなたは経験豊富な試験問題の作成者です。
以下の「元の問題文」を素材として、多肢択一式の試験問題を作成してください。

# 条件
- 出題形式: 多肢択一
- 選択肢の数: {num_choices}
- 正解はちょうど一つとし、それ以外の選択肢は紛らわしいが明確に誤りであるものにしてください。
- 問題文、選択肢、正解、解説をこの順に出力してください。

# 元の問題文
{problem_text}"#;

/// Default wrapper that adds the difficulty directive after the body.
pub const DEFAULT_DIFFICULTY_TEMPLATE: &str = r#"{body}

# 難易度
作成する問題の難易度は「{difficulty}」としてください。"#;

/// Prompt templates, one per question type plus the difficulty wrapper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptTemplates {
    /// Template for descriptive prompts (`{word_limit}`, `{problem_text}`).
    pub descriptive: String,

    /// Template for multiple-choice prompts (`{num_choices}`, `{problem_text}`).
    pub multiple_choice: String,

    /// Wrapper applied to either body (`{body}`, `{difficulty}`, `{difficulty_key}`).
    pub difficulty: String,
}

impl Default for PromptTemplates {
    fn default() -> Self {
        Self {
            descriptive: DEFAULT_DESCRIPTIVE_TEMPLATE.to_string(),
            multiple_choice: DEFAULT_MULTIPLE_CHOICE_TEMPLATE.to_string(),
            difficulty: DEFAULT_DIFFICULTY_TEMPLATE.to_string(),
        }
    }
}

pub fn default_num_choices() -> u8 {
    5
}

pub fn default_choices_min() -> u8 {
    2
}

pub fn default_choices_max() -> u8 {
    8
}

pub fn default_no_limit_token() -> String {
    DEFAULT_NO_LIMIT_TOKEN.to_string()
}
