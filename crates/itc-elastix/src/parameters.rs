use std::fmt;

use crate::error::ElastixError;

/// A single value of a parameter entry.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterValue {
    /// A numeric value, e.g. `1.5` or `3`.
    Number(f64),
    /// A string value, written between double quotes.
    Text(String),
}

impl ParameterValue {
    /// Returns the numeric value, if any.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            ParameterValue::Number(v) => Some(*v),
            ParameterValue::Text(_) => None,
        }
    }

    /// Returns the string value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ParameterValue::Number(_) => None,
            ParameterValue::Text(s) => Some(s),
        }
    }
}

impl From<f64> for ParameterValue {
    fn from(value: f64) -> Self {
        ParameterValue::Number(value)
    }
}

impl From<&str> for ParameterValue {
    fn from(value: &str) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl From<bool> for ParameterValue {
    fn from(value: bool) -> Self {
        ParameterValue::Text(value.to_string())
    }
}

impl fmt::Display for ParameterValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterValue::Number(v) => write!(f, "{v}"),
            ParameterValue::Text(s) => write!(f, "\"{s}\""),
        }
    }
}

/// An ordered list of `(Key value ...)` entries.
///
/// Keys are unique; the order of the entries is the order in which they were
/// first seen, so that writing a parsed map back keeps the original layout.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    entries: Vec<(String, Vec<ParameterValue>)>,
}

impl ParameterMap {
    /// Create an empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse the text of a parameter file.
    ///
    /// Each non-empty line holds one entry `(Key value value ...)`. Values are
    /// finite numbers or double-quoted strings and `//` starts a comment. Other
    /// unquoted words, `nan` and `inf` included, are read as strings. A
    /// repeated key replaces the values of the earlier entry.
    ///
    /// # Example
    ///
    /// ```
    /// use itc_elastix::{ParameterMap, ParameterValue};
    ///
    /// let map = ParameterMap::parse("(Transform \"EulerTransform\")\n(Spacing 0.5 0.5 2)").unwrap();
    /// assert_eq!(map.get("Spacing").unwrap()[2], ParameterValue::Number(2.0));
    /// ```
    pub fn parse(text: &str) -> Result<Self, ElastixError> {
        let mut map = Self::new();
        for (index, line) in text.lines().enumerate() {
            if let Some((key, values)) = parse_line(line, index + 1)? {
                if map.get(&key).is_some() {
                    log::warn!("duplicated parameter {key} at line {}", index + 1);
                }
                map.insert(key, values);
            }
        }
        Ok(map)
    }

    /// Returns the values of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&[ParameterValue]> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns the values of `key`, failing if it is absent.
    pub fn require(&self, key: &str) -> Result<&[ParameterValue], ElastixError> {
        self.get(key)
            .ok_or_else(|| ElastixError::MissingParameter(key.to_string()))
    }

    /// Returns the values of `key` as numbers.
    pub fn numbers(&self, key: &str) -> Result<Vec<f64>, ElastixError> {
        self.require(key)?
            .iter()
            .map(|value| {
                value.as_number().ok_or_else(|| ElastixError::InvalidValue {
                    key: key.to_string(),
                    message: format!("expected a number, got {value}"),
                })
            })
            .collect()
    }

    /// Returns the single value of `key` as a number.
    pub fn number(&self, key: &str) -> Result<f64, ElastixError> {
        match self.numbers(key)?.as_slice() {
            [value] => Ok(*value),
            values => Err(ElastixError::DimensionMismatch {
                key: key.to_string(),
                expected: 1,
                actual: values.len(),
            }),
        }
    }

    /// Returns the single value of `key` as a string.
    pub fn text(&self, key: &str) -> Result<&str, ElastixError> {
        match self.require(key)? {
            [value] => value.as_text().ok_or_else(|| ElastixError::InvalidValue {
                key: key.to_string(),
                message: format!("expected a string, got {value}"),
            }),
            values => Err(ElastixError::DimensionMismatch {
                key: key.to_string(),
                expected: 1,
                actual: values.len(),
            }),
        }
    }

    /// Returns a copy of the map where `key` holds `values`.
    ///
    /// An existing entry keeps its position, a new one is appended.
    ///
    /// Fails with [`ElastixError::InvalidValue`] if the entry could not be
    /// written back as text: a key that is not a single word, a string holding
    /// a double quote or a line break, or a non-finite number.
    pub fn with_value(
        mut self,
        key: &str,
        values: Vec<ParameterValue>,
    ) -> Result<Self, ElastixError> {
        check_entry(key, &values)?;
        self.insert(key.to_string(), values);
        Ok(self)
    }

    /// Iterate over the entries in file order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[ParameterValue])> {
        self.entries
            .iter()
            .map(|(key, values)| (key.as_str(), values.as_slice()))
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, key: String, values: Vec<ParameterValue>) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = values,
            None => self.entries.push((key, values)),
        }
    }
}

impl fmt::Display for ParameterMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, values) in self.iter() {
            write!(f, "({key}")?;
            for value in values {
                write!(f, " {value}")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}

/// Check that an entry is written as text that parses back to the same entry.
fn check_entry(key: &str, values: &[ParameterValue]) -> Result<(), ElastixError> {
    let invalid = |message: String| ElastixError::InvalidValue {
        key: key.to_string(),
        message,
    };

    let is_word = !key.is_empty()
        && !key.contains("//")
        && !key
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, '"' | '(' | ')'));
    if !is_word || parse_number(key).is_some() {
        return Err(invalid(format!("invalid parameter name {key:?}")));
    }

    for value in values {
        match value {
            ParameterValue::Number(v) if !v.is_finite() => {
                return Err(invalid(format!("non-finite number {v}")));
            }
            ParameterValue::Text(s) if s.contains(['"', '\n', '\r']) => {
                return Err(invalid(format!(
                    "string {s:?} holds a double quote or a line break"
                )));
            }
            _ => {}
        }
    }
    Ok(())
}

/// Parse an unquoted token as a finite number.
fn parse_number(word: &str) -> Option<f64> {
    word.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Remove a trailing `//` comment that is not inside a quoted string.
fn strip_comment(line: &str) -> &str {
    let mut in_quotes = false;
    let mut previous_slash = false;
    for (i, c) in line.char_indices() {
        match c {
            '"' => in_quotes = !in_quotes,
            '/' if !in_quotes && previous_slash => return &line[..i - 1],
            _ => {}
        }
        previous_slash = c == '/' && !in_quotes;
    }
    line
}

/// Split the inside of an entry into tokens, keeping quoted strings whole.
fn tokenize(body: &str, line: usize) -> Result<Vec<ParameterValue>, ElastixError> {
    let mut tokens = Vec::new();
    let mut chars = body.chars().peekable();

    while let Some(&c) = chars.peek() {
        if c.is_whitespace() {
            chars.next();
        } else if c == '"' {
            chars.next();
            let mut text = String::new();
            loop {
                match chars.next() {
                    Some('"') => break,
                    Some(c) => text.push(c),
                    None => {
                        return Err(ElastixError::ParseError {
                            line,
                            message: "unterminated string".to_string(),
                        })
                    }
                }
            }
            tokens.push(ParameterValue::Text(text));
        } else {
            let mut word = String::new();
            while let Some(&c) = chars.peek() {
                if c.is_whitespace() || c == '"' {
                    break;
                }
                word.push(c);
                chars.next();
            }
            // nan and inf stay text
            tokens.push(match parse_number(&word) {
                Some(v) => ParameterValue::Number(v),
                None => ParameterValue::Text(word),
            });
        }
    }

    Ok(tokens)
}

/// Parse one line of a parameter file.
/// NOTE: returns `None` for blank and comment-only lines.
fn parse_line(
    line: &str,
    number: usize,
) -> Result<Option<(String, Vec<ParameterValue>)>, ElastixError> {
    let content = strip_comment(line).trim();
    if content.is_empty() {
        return Ok(None);
    }

    let body = content
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| ElastixError::ParseError {
            line: number,
            message: format!("expected (Key value ...), got {content}"),
        })?;

    let mut tokens = tokenize(body, number)?.into_iter();
    let key = match tokens.next() {
        Some(ParameterValue::Text(key)) if !key.is_empty() => key,
        _ => {
            return Err(ElastixError::ParseError {
                line: number,
                message: "missing parameter name".to_string(),
            })
        }
    };

    Ok(Some((key, tokens.collect())))
}
