use std::fmt;
use std::iter::Peekable;
use std::str::{CharIndices, FromStr};

/// One node of a parsed route template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Text matched and emitted verbatim
    Literal(String),
    /// A named `<key>` slot
    Placeholder(String),
    /// A parenthesised span that may be omitted as a whole
    Optional(Vec<Segment>),
}

/// What went wrong while parsing a template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateErrorKind {
    /// `(` without a matching `)`
    UnclosedGroup,
    /// `)` without a matching `(`
    UnexpectedGroupClose,
    /// `<` without a closing `>`
    UnterminatedPlaceholder,
    /// `<>`
    EmptyPlaceholder,
    /// A character other than `[A-Za-z0-9_]` inside `<...>`
    InvalidPlaceholderChar(char),
    /// `>` outside a placeholder
    UnexpectedPlaceholderClose,
    /// The same placeholder name appears twice
    DuplicatePlaceholder(String),
}

impl fmt::Display for TemplateErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateErrorKind::UnclosedGroup => write!(f, "unclosed optional group"),
            TemplateErrorKind::UnexpectedGroupClose => write!(f, "unbalanced ')'"),
            TemplateErrorKind::UnterminatedPlaceholder => write!(f, "unterminated placeholder"),
            TemplateErrorKind::EmptyPlaceholder => write!(f, "empty placeholder name"),
            TemplateErrorKind::InvalidPlaceholderChar(c) => {
                write!(f, "invalid character {:?} in placeholder name", c)
            }
            TemplateErrorKind::UnexpectedPlaceholderClose => write!(f, "unbalanced '>'"),
            TemplateErrorKind::DuplicatePlaceholder(name) => {
                write!(f, "placeholder <{}> appears more than once", name)
            }
        }
    }
}

/// A malformed template, with the byte offset where parsing failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateError {
    /// The template source as given
    pub template: String,
    /// Byte offset of the offending character
    pub position: usize,
    /// Failure classification
    pub kind: TemplateErrorKind,
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at offset {} in '{}'",
            self.kind, self.position, self.template
        )
    }
}

impl std::error::Error for TemplateError {}

/// An immutable, parsed route template.
///
/// Holds both the original source and the syntax tree. Placeholder names are
/// recorded in template order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteTemplate {
    source: String,
    segments: Vec<Segment>,
    placeholders: Vec<String>,
}

impl RouteTemplate {
    /// Parse a template string.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] for unbalanced groups, malformed
    /// placeholders, or duplicate placeholder names.
    pub fn parse(source: &str) -> Result<Self, TemplateError> {
        let mut parser = Parser {
            source,
            chars: source.char_indices().peekable(),
            placeholders: Vec::new(),
        };
        let mut segments = parser.sequence(None)?;
        trim_outer_slashes(&mut segments);
        Ok(Self {
            source: source.to_string(),
            segments,
            placeholders: parser.placeholders,
        })
    }

    /// The template source.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Top-level segments of the syntax tree.
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Placeholder names in template order.
    #[must_use]
    pub fn placeholders(&self) -> &[String] {
        &self.placeholders
    }

    #[must_use]
    pub fn has_placeholder(&self, name: &str) -> bool {
        self.placeholders.iter().any(|p| p == name)
    }
}

impl FromStr for RouteTemplate {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RouteTemplate::parse(s)
    }
}

impl fmt::Display for RouteTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

struct Parser<'a> {
    source: &'a str,
    chars: Peekable<CharIndices<'a>>,
    placeholders: Vec<String>,
}

impl Parser<'_> {
    fn error(&self, position: usize, kind: TemplateErrorKind) -> TemplateError {
        TemplateError {
            template: self.source.to_string(),
            position,
            kind,
        }
    }

    /// Parse segments until end of input, or until the `)` closing the group
    /// opened at `group_start`.
    fn sequence(&mut self, group_start: Option<usize>) -> Result<Vec<Segment>, TemplateError> {
        let mut segments = Vec::new();
        let mut literal = String::new();

        while let Some((pos, ch)) = self.chars.next() {
            match ch {
                '(' => {
                    flush_literal(&mut literal, &mut segments);
                    let inner = self.sequence(Some(pos))?;
                    segments.push(Segment::Optional(inner));
                }
                ')' => {
                    if group_start.is_none() {
                        return Err(self.error(pos, TemplateErrorKind::UnexpectedGroupClose));
                    }
                    flush_literal(&mut literal, &mut segments);
                    return Ok(segments);
                }
                '<' => {
                    flush_literal(&mut literal, &mut segments);
                    let name = self.placeholder(pos)?;
                    segments.push(Segment::Placeholder(name));
                }
                '>' => {
                    return Err(self.error(pos, TemplateErrorKind::UnexpectedPlaceholderClose));
                }
                _ => literal.push(ch),
            }
        }

        if let Some(start) = group_start {
            return Err(self.error(start, TemplateErrorKind::UnclosedGroup));
        }
        flush_literal(&mut literal, &mut segments);
        Ok(segments)
    }

    /// Parse a placeholder body; the opening `<` at `start` is already consumed.
    fn placeholder(&mut self, start: usize) -> Result<String, TemplateError> {
        let mut name = String::new();
        loop {
            match self.chars.next() {
                Some((_, '>')) => break,
                Some((_, c)) if c.is_ascii_alphanumeric() || c == '_' => name.push(c),
                Some((pos, c)) => {
                    return Err(self.error(pos, TemplateErrorKind::InvalidPlaceholderChar(c)))
                }
                None => return Err(self.error(start, TemplateErrorKind::UnterminatedPlaceholder)),
            }
        }

        if name.is_empty() {
            return Err(self.error(start, TemplateErrorKind::EmptyPlaceholder));
        }
        if self.placeholders.contains(&name) {
            return Err(self.error(start, TemplateErrorKind::DuplicatePlaceholder(name)));
        }
        self.placeholders.push(name.clone());
        Ok(name)
    }
}

fn flush_literal(literal: &mut String, segments: &mut Vec<Segment>) {
    if !literal.is_empty() {
        segments.push(Segment::Literal(std::mem::take(literal)));
    }
}

/// Paths are matched with their outer `/` removed, so the template's own
/// leading and trailing `/` are dropped too.
fn trim_outer_slashes(segments: &mut Vec<Segment>) {
    if let Some(Segment::Literal(text)) = segments.first_mut() {
        *text = text.trim_start_matches('/').to_string();
    }
    if let Some(Segment::Literal(text)) = segments.last_mut() {
        *text = text.trim_end_matches('/').to_string();
    }
    segments.retain(|s| !matches!(s, Segment::Literal(text) if text.is_empty()));
}
