//! Closed value types held by the form.
//!
//! Each enum carries a Japanese display label (what the user sees and what is
//! embedded in prompts) and an ASCII key used on the command line and in YAML.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Difficulty of the requested exam question, ordered easiest to hardest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    #[serde(alias = "易しい")]
    Easy,
    #[default]
    #[serde(alias = "普通")]
    Normal,
    #[serde(alias = "やや難しい")]
    SomewhatHard,
    #[serde(alias = "難しい")]
    Hard,
    #[serde(alias = "難関大入試レベル")]
    EntranceExam,
}

impl Difficulty {
    /// All levels, easiest first.
    pub const ALL: [Difficulty; 5] = [
        Difficulty::Easy,
        Difficulty::Normal,
        Difficulty::SomewhatHard,
        Difficulty::Hard,
        Difficulty::EntranceExam,
    ];

    /// Display label embedded in prompts.
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "易しい",
            Difficulty::Normal => "普通",
            Difficulty::SomewhatHard => "やや難しい",
            Difficulty::Hard => "難しい",
            Difficulty::EntranceExam => "難関大入試レベル",
        }
    }

    /// ASCII key accepted on the command line.
    pub fn key(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::SomewhatHard => "somewhat_hard",
            Difficulty::Hard => "hard",
            Difficulty::EntranceExam => "entrance_exam",
        }
    }

    /// 1-based position in the easiest-to-hardest ordering.
    pub fn ordinal(self) -> u8 {
        match self {
            Difficulty::Easy => 1,
            Difficulty::Normal => 2,
            Difficulty::SomewhatHard => 3,
            Difficulty::Hard => 4,
            Difficulty::EntranceExam => 5,
        }
    }

    /// Parse a difficulty from its label, key (dashes allowed), or ordinal.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|d| {
            d.label() == s || d.key() == normalized || d.ordinal().to_string() == s
        })
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Question format, which decides the active secondary field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    /// Free-response question, optionally bounded by a word limit.
    #[default]
    #[serde(alias = "記述式")]
    Descriptive,
    /// Question with a fixed number of answer options, one correct.
    #[serde(alias = "多肢択一")]
    MultipleChoice,
}

impl QuestionType {
    pub const ALL: [QuestionType; 2] = [QuestionType::Descriptive, QuestionType::MultipleChoice];

    pub fn label(self) -> &'static str {
        match self {
            QuestionType::Descriptive => "記述式",
            QuestionType::MultipleChoice => "多肢択一",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            QuestionType::Descriptive => "descriptive",
            QuestionType::MultipleChoice => "multiple_choice",
        }
    }

    /// The secondary control that is meaningful for this question type.
    pub fn secondary_field(self) -> SecondaryField {
        match self {
            QuestionType::Descriptive => SecondaryField::WordLimit,
            QuestionType::MultipleChoice => SecondaryField::NumChoices,
        }
    }

    /// Parse a question type from its label or key (dashes allowed).
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let s = s.trim();
        let normalized = s.to_ascii_lowercase().replace('-', "_");
        Self::ALL
            .into_iter()
            .find(|t| t.label() == s || t.key() == normalized)
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Which mode-dependent control is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondaryField {
    WordLimit,
    NumChoices,
}

/// Value of the active mode-dependent field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SecondaryValue {
    /// Sanitized word limit; empty means "no limit".
    WordLimit(String),
    /// Number of answer options, always within the configured bounds.
    NumChoices(u8),
}

impl SecondaryValue {
    pub fn field(&self) -> SecondaryField {
        match self {
            SecondaryValue::WordLimit(_) => SecondaryField::WordLimit,
            SecondaryValue::NumChoices(_) => SecondaryField::NumChoices,
        }
    }
}

/// Inclusive bounds for the number of answer options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChoiceBounds {
    min: u8,
    max: u8,
}

impl ChoiceBounds {
    /// Absolute floor: a multiple-choice question needs a correct and a wrong option.
    pub const FLOOR: u8 = 2;

    /// Absolute ceiling on the number of answer options.
    pub const CEILING: u8 = 8;

    /// Create bounds, returning `None` unless `FLOOR <= min <= max <= CEILING`.
    pub fn new(min: u8, max: u8) -> Option<Self> {
        if min < Self::FLOOR || max < min || max > Self::CEILING {
            return None;
        }
        Some(Self { min, max })
    }

    pub fn min(self) -> u8 {
        self.min
    }

    pub fn max(self) -> u8 {
        self.max
    }

    /// Clamp any requested count, negative ones included, into range.
    pub fn clamp(self, n: i64) -> u8 {
        // max fits in u8, so the clamped value does too
        n.clamp(i64::from(self.min), i64::from(self.max)) as u8
    }
}

impl Default for ChoiceBounds {
    fn default() -> Self {
        Self {
            min: Self::FLOOR,
            max: Self::CEILING,
        }
    }
}
