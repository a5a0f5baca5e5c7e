//! Positional text templates
//!
//! A [`Template<N>`] is compiled once from text such as
//! `"[ProtoMember({0})] public readonly {1} {2};"` and always rendered with
//! exactly `N` arguments. Placeholders are `{index}`; `{{` and `}}` stand for
//! literal braces. A placeholder that names an argument the template site
//! never supplies is rejected when the template is compiled, so a broken
//! configuration fails before any output is written.

use crate::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Arg(usize),
}

/// A compiled template taking exactly `N` positional arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Template<const N: usize> {
    source: String,
    #[serde(skip)]
    segments: Vec<Segment>,
}

impl<const N: usize> Template<N> {
    /// Compile `source`, checking every placeholder against the arity `N`
    pub fn parse(source: impl Into<String>) -> Result<Self, TemplateError> {
        let source = source.into();
        let segments = compile(&source, N)?;
        Ok(Self { source, segments })
    }

    /// The template text as written
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Substitute `args` into the template
    ///
    /// Arguments the template never references are ignored.
    pub fn render(&self, args: [&dyn Display; N]) -> String {
        let mut out = String::with_capacity(self.source.len());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Arg(index) => out.push_str(&args[*index].to_string()),
            }
        }
        out
    }
}

fn compile(source: &str, arity: usize) -> Result<Vec<Segment>, TemplateError> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut chars = source.char_indices().peekable();

    while let Some((position, c)) = chars.next() {
        match c {
            '{' if matches!(chars.peek(), Some((_, '{'))) => {
                chars.next();
                literal.push('{');
            }
            '{' => {
                let body_start = position + 1;
                let Some(len) = source[body_start..].find('}') else {
                    return Err(TemplateError::UnclosedPlaceholder {
                        template: source.to_string(),
                        position,
                    });
                };
                let body = &source[body_start..body_start + len];
                let index = parse_index(source, body)?;
                if index >= arity {
                    return Err(TemplateError::PlaceholderOutOfRange {
                        template: source.to_string(),
                        index,
                        arity,
                    });
                }
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Arg(index));
                while let Some((i, _)) = chars.peek() {
                    if *i > body_start + len {
                        break;
                    }
                    chars.next();
                }
            }
            '}' if matches!(chars.peek(), Some((_, '}'))) => {
                chars.next();
                literal.push('}');
            }
            '}' => {
                return Err(TemplateError::UnmatchedClosingBrace {
                    template: source.to_string(),
                    position,
                });
            }
            other => literal.push(other),
        }
    }

    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

fn parse_index(source: &str, body: &str) -> Result<usize, TemplateError> {
    let invalid = || TemplateError::InvalidPlaceholder {
        template: source.to_string(),
        placeholder: body.to_string(),
    };
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }
    body.parse().map_err(|_| invalid())
}

impl<const N: usize> FromStr for Template<N> {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<const N: usize> TryFrom<String> for Template<N> {
    type Error = TemplateError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl<const N: usize> From<Template<N>> for String {
    fn from(template: Template<N>) -> Self {
        template.source
    }
}

impl<const N: usize> Display for Template<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}
