//! Template engine for prompt text.
//!
//! Templates are parsed once into a list of literal and variable segments.
//! Parsing checks every placeholder against the set of variables the template
//! kind allows, so rendering a parsed template cannot fail.
//!
//! # Syntax
//!
//! - `{name}` - Substitutes the value of variable `name`
//! - `{{` - Renders as literal `{`
//! - `}}` - Renders as literal `}`
//!
//! A lone `}` is kept as a regular character.

use std::collections::HashMap;
use std::fmt;

/// Error type for template parsing failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// A placeholder names a variable this template kind does not provide.
    UnknownVariable {
        /// The name of the unknown variable.
        name: String,
        /// The position in the template where the variable was found.
        position: usize,
    },
    /// A `{` was found without a matching `}`.
    UnmatchedBrace {
        /// The position of the unmatched `{`.
        position: usize,
    },
    /// An empty variable name was found (e.g., `{}`).
    EmptyVariableName {
        /// The position of the empty variable.
        position: usize,
    },
    /// A variable the template must contain is absent.
    MissingVariable {
        /// The name of the required variable.
        name: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownVariable { name, position } => {
                write!(
                    f,
                    "unknown variable '{}' at position {} in template",
                    name, position
                )
            }
            TemplateError::UnmatchedBrace { position } => {
                write!(f, "unmatched '{{' at position {} in template", position)
            }
            TemplateError::EmptyVariableName { position } => {
                write!(
                    f,
                    "empty variable name '{{}}' at position {} in template",
                    position
                )
            }
            TemplateError::MissingVariable { name } => {
                write!(f, "template must contain '{{{}}}'", name)
            }
        }
    }
}

impl std::error::Error for TemplateError {}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Variable(&'static str),
}

/// A parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse `source`, allowing only the variables in `allowed` and requiring
    /// each of `required` to appear at least once.
    pub fn parse(
        source: &str,
        allowed: &[&'static str],
        required: &[&'static str],
    ) -> Result<Self, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::with_capacity(source.len());
        let mut chars = source.char_indices().peekable();

        while let Some((pos, ch)) = chars.next() {
            match ch {
                '{' => {
                    if let Some((_, '{')) = chars.peek() {
                        chars.next();
                        literal.push('{');
                        continue;
                    }

                    let mut var_name = String::new();
                    loop {
                        match chars.next() {
                            Some((_, '}')) => break,
                            Some((_, c)) => var_name.push(c),
                            None => return Err(TemplateError::UnmatchedBrace { position: pos }),
                        }
                    }

                    let var_name = var_name.trim();
                    if var_name.is_empty() {
                        return Err(TemplateError::EmptyVariableName { position: pos });
                    }

                    let name = allowed
                        .iter()
                        .copied()
                        .find(|allowed| *allowed == var_name)
                        .ok_or_else(|| TemplateError::UnknownVariable {
                            name: var_name.to_string(),
                            position: pos,
                        })?;

                    if !literal.is_empty() {
                        segments.push(Segment::Literal(std::mem::take(&mut literal)));
                    }
                    segments.push(Segment::Variable(name));
                }
                '}' => {
                    if let Some((_, '}')) = chars.peek() {
                        chars.next();
                    }
                    literal.push('}');
                }
                _ => literal.push(ch),
            }
        }

        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        let template = Self { segments };
        for name in required {
            if !template.variables().any(|v| v == *name) {
                return Err(TemplateError::MissingVariable {
                    name: (*name).to_string(),
                });
            }
        }
        Ok(template)
    }

    /// Variable names referenced by the template, in order of appearance.
    pub fn variables(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().filter_map(|s| match s {
            Segment::Variable(name) => Some(*name),
            Segment::Literal(_) => None,
        })
    }

    /// Render with the given values.
    ///
    /// Callers pass a value for every allowed variable; a variable without a
    /// value renders as nothing. Values are inserted verbatim, without escaping.
    pub fn render(&self, values: &HashMap<&str, String>) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Variable(name) => {
                    if let Some(value) = values.get(*name) {
                        out.push_str(value);
                    }
                }
            }
        }
        out
    }
}

/// Helper to create a values map from a list of key-value pairs.
pub fn vars<'a, I, V>(pairs: I) -> HashMap<&'a str, String>
where
    I: IntoIterator<Item = (&'a str, V)>,
    V: Into<String>,
{
    pairs.into_iter().map(|(k, v)| (k, v.into())).collect()
}
