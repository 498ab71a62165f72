//! Invocation scanning.
//!
//! Finds shortcode markers between the configured delimiters and produces
//! the ordered list of top-level invocations. Nested markers inside a block
//! body are tokenized so end-matching stays correct, but not materialized:
//! the body stays one raw substring until a handler asks for it to be
//! re-expanded.
//!
//! Marker grammar, with `open`/`close` from [`SyntaxConfig`]:
//!
//! ```text
//! start:        open ws* name (ws+ argument)* ws* close
//! self-closing: open ws* name (ws+ argument)* ws* "/" close
//! end:          open "/" ws* name ws* close
//! argument:     key | key="value" | key='value'
//! ```
//!
//! Names and keys are alphanumeric plus `-` and `_`. Values run to the next
//! matching quote with no escape processing, so the close delimiter inside a
//! quoted value is plain text. Anything after the name that is not an
//! argument, the close delimiter, or the self-closing slash fails the scan.

use crate::arguments::{Argument, Arguments};
use crate::error::ExpandError;
use crate::syntax::SyntaxConfig;

/// Byte range of one invocation in the scanned content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

/// One top-level shortcode occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Invocation {
    pub(crate) name: String,
    pub(crate) arguments: Arguments,
    /// Raw text between the start and end markers; `None` for self-closing.
    pub(crate) body: Option<String>,
    pub(crate) span: Span,
}

/// A tokenized marker, before block matching.
enum Marker {
    Start {
        name: String,
        arguments: Arguments,
        self_closing: bool,
    },
    End {
        name: String,
    },
}

/// A block whose start marker has been seen but not yet closed.
struct OpenBlock {
    name: String,
    arguments: Arguments,
    marker_start: usize,
    body_start: usize,
}

/// Check if a name is a valid shortcode name.
///
/// Valid names contain only alphanumeric characters, hyphens, and underscores.
pub(crate) fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(is_name_char)
}

fn is_name_char(c: char) -> bool {
    c.is_alphanumeric() || c == '-' || c == '_'
}

/// Scan `content` for shortcode markers and return the top-level invocations
/// in source order, with non-overlapping spans.
pub(crate) fn parse(
    content: &str,
    syntax: &SyntaxConfig,
) -> Result<Vec<Invocation>, ExpandError> {
    let open = syntax.open();
    let mut invocations = Vec::new();
    let mut stack: Vec<OpenBlock> = Vec::new();
    let mut pos = 0;

    while let Some(found) = content[pos..].find(open) {
        let marker_start = pos + found;
        let (marker, marker_end) = parse_marker(content, marker_start, syntax)?;

        match marker {
            Marker::Start {
                name,
                arguments,
                self_closing: true,
            } => {
                // Inside an open block the marker stays part of the raw body.
                if stack.is_empty() {
                    invocations.push(Invocation {
                        name,
                        arguments,
                        body: None,
                        span: Span {
                            start: marker_start,
                            end: marker_end,
                        },
                    });
                }
            }
            Marker::Start {
                name,
                arguments,
                self_closing: false,
            } => {
                stack.push(OpenBlock {
                    name,
                    arguments,
                    marker_start,
                    body_start: marker_end,
                });
            }
            Marker::End { name } => match stack.pop() {
                Some(block) if block.name == name => {
                    if stack.is_empty() {
                        invocations.push(Invocation {
                            name: block.name,
                            arguments: block.arguments,
                            body: Some(content[block.body_start..marker_start].to_owned()),
                            span: Span {
                                start: block.marker_start,
                                end: marker_end,
                            },
                        });
                    }
                }
                Some(block) => {
                    return Err(ExpandError::MismatchedInvocation {
                        expected: Some(block.name),
                        found: name,
                        offset: marker_start,
                    });
                }
                None => {
                    return Err(ExpandError::MismatchedInvocation {
                        expected: None,
                        found: name,
                        offset: marker_start,
                    });
                }
            },
        }

        pos = marker_end;
    }

    // The innermost unclosed block is the one nearest the actual mistake.
    if let Some(block) = stack.last() {
        return Err(ExpandError::MalformedInvocation {
            offset: block.marker_start,
            reason: format!("block '{}' is never closed", block.name),
        });
    }

    Ok(invocations)
}

/// Tokenize one marker beginning at `start` (the open delimiter's offset).
///
/// Returns the marker and the offset just past its close delimiter.
fn parse_marker(
    content: &str,
    start: usize,
    syntax: &SyntaxConfig,
) -> Result<(Marker, usize), ExpandError> {
    let close = syntax.close();
    let mut pos = start + syntax.open().len();

    let is_end = content[pos..].starts_with('/');
    if is_end {
        pos += 1;
    }

    pos = skip_whitespace(content, pos);
    let name_end = scan_name(content, pos);
    if name_end == pos {
        return Err(ExpandError::MalformedInvocation {
            offset: start,
            reason: "missing shortcode name".to_owned(),
        });
    }
    let name = content[pos..name_end].to_owned();
    pos = name_end;

    if is_end {
        pos = skip_whitespace(content, pos);
        if content[pos..].starts_with(close) {
            return Ok((Marker::End { name }, pos + close.len()));
        }
        let reason = if content[pos..].is_empty() {
            format!("end marker for '{name}' is never closed")
        } else {
            format!("end marker for '{name}' must contain only the name")
        };
        return Err(ExpandError::MalformedInvocation {
            offset: start,
            reason,
        });
    }

    let mut arguments = Arguments::new();
    loop {
        pos = skip_whitespace(content, pos);

        if content[pos..].is_empty() {
            return Err(ExpandError::MalformedInvocation {
                offset: start,
                reason: format!("marker for '{name}' is never closed"),
            });
        }
        if content[pos..].starts_with(close) {
            return Ok((
                Marker::Start {
                    name,
                    arguments,
                    self_closing: false,
                },
                pos + close.len(),
            ));
        }
        if content[pos..].starts_with('/') && content[pos + 1..].starts_with(close) {
            return Ok((
                Marker::Start {
                    name,
                    arguments,
                    self_closing: true,
                },
                pos + 1 + close.len(),
            ));
        }

        let arg_start = pos;
        let key_end = scan_name(content, pos);
        if key_end == pos {
            let found = content[pos..].chars().next().unwrap_or_default();
            return Err(ExpandError::MalformedArgument {
                name,
                offset: arg_start,
                reason: format!("unexpected character '{found}'"),
            });
        }
        let key = &content[pos..key_end];
        pos = key_end;

        if content[pos..].starts_with('=') {
            pos += 1;
            let quote = match content[pos..].chars().next() {
                Some(q @ ('"' | '\'')) => q,
                _ => {
                    return Err(ExpandError::MalformedArgument {
                        name,
                        offset: arg_start,
                        reason: format!("value of '{key}' must be quoted"),
                    });
                }
            };
            let value_start = pos + quote.len_utf8();
            let Some(quote_at) = content[value_start..].find(quote) else {
                return Err(ExpandError::MalformedArgument {
                    name,
                    offset: arg_start,
                    reason: format!("unterminated quoted value for '{key}'"),
                });
            };
            let value = &content[value_start..value_start + quote_at];
            arguments.push(Argument::valued(key, value));
            pos = value_start + quote_at + quote.len_utf8();
        } else {
            arguments.push(Argument::flag(key));
        }
    }
}

fn skip_whitespace(content: &str, from: usize) -> usize {
    content[from..]
        .find(|c: char| !c.is_whitespace())
        .map_or(content.len(), |i| from + i)
}

/// End offset of the run of name characters starting at `from`.
fn scan_name(content: &str, from: usize) -> usize {
    content[from..]
        .find(|c: char| !is_name_char(c))
        .map_or(content.len(), |i| from + i)
}
