//! Decoding settings text: JSON with comments and trailing commas.

use crate::error::DecodeError;
use crate::layers::Settings;
use serde_json::Value;

/// Turns the text of a settings file into a settings mapping.
pub trait SettingsDecoder: Send + Sync {
    fn decode(&self, text: &str) -> Result<Settings, DecodeError>;
}

/// Decoder for JSON that tolerates `//` and `/* */` comments and trailing commas.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsoncDecoder;

impl SettingsDecoder for JsoncDecoder {
    fn decode(&self, text: &str) -> Result<Settings, DecodeError> {
        let text = text.strip_prefix('\u{feff}').unwrap_or(text);
        let json = strip_trailing_commas(&strip_comments(text)?);
        match serde_json::from_str::<Value>(&json)? {
            Value::Object(settings) => Ok(settings),
            Value::Array(_) => Err(DecodeError::NotAnObject("an array")),
            Value::String(_) => Err(DecodeError::NotAnObject("a string")),
            Value::Number(_) => Err(DecodeError::NotAnObject("a number")),
            Value::Bool(_) => Err(DecodeError::NotAnObject("a boolean")),
            Value::Null => Err(DecodeError::NotAnObject("null")),
        }
    }
}

/// Remove comments outside of string literals. Newlines inside comments are kept so
/// decode errors still report the right line.
fn strip_comments(text: &str) -> Result<String, DecodeError> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut in_string = false;

    while let Some(c) = chars.next() {
        if in_string {
            out.push(c);
            match c {
                '\\' => {
                    if let Some(escaped) = chars.next() {
                        out.push(escaped);
                    }
                }
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        let next = chars.peek().copied();
        match (c, next) {
            ('"', _) => {
                in_string = true;
                out.push(c);
            }
            ('/', Some('/')) => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut previous = '\0';
                let mut closed = false;
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        out.push('\n');
                    }
                    if previous == '*' && skipped == '/' {
                        closed = true;
                        break;
                    }
                    previous = skipped;
                }
                if !closed {
                    return Err(DecodeError::UnterminatedComment);
                }
            }
            _ => out.push(c),
        }
    }

    Ok(out)
}

/// Drop a comma when the next significant character closes an object or array.
fn strip_trailing_commas(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let mut out = String::with_capacity(text.len());
    let mut in_string = false;
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        if in_string {
            out.push(c);
            if c == '\\' {
                if let Some(&escaped) = chars.get(i + 1) {
                    out.push(escaped);
                    i += 1;
                }
            } else if c == '"' {
                in_string = false;
            }
        } else if c == '"' {
            in_string = true;
            out.push(c);
        } else if c == ',' {
            let next = chars[i + 1..].iter().find(|n| !n.is_whitespace());
            if !matches!(next, Some('}') | Some(']')) {
                out.push(c);
            }
        } else {
            out.push(c);
        }
        i += 1;
    }

    out
}
