//! Expansion failure types.
//!
//! Every variant identifies the offending invocation by name and/or byte
//! offset into the content that was being scanned at that recursion level:
//! the original document at the top level, the fragment text inside a rescan.

use thiserror::Error;

use crate::handler::HandlerError;

/// Errors surfaced by [`ShortcodeProcessor::expand`](crate::ShortcodeProcessor::expand).
///
/// Expansion is all-or-nothing: any of these aborts the whole document and
/// no partial output is returned.
#[derive(Debug, Error)]
pub enum ExpandError {
    /// Structurally invalid marker syntax: an unterminated block or marker,
    /// an invalid shortcode name, or arguments on an end marker.
    #[error("malformed shortcode at byte {offset}: {reason}")]
    MalformedInvocation {
        /// Byte offset of the offending marker.
        offset: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// An end marker whose name does not match the innermost open block, or
    /// an end marker with no block open at all.
    #[error("mismatched end marker '{found}' at byte {offset}, expected '{}'", .expected.as_deref().unwrap_or("<none>"))]
    MismatchedInvocation {
        /// Name of the innermost open block, `None` when nothing was open.
        expected: Option<String>,
        /// Name carried by the end marker.
        found: String,
        /// Byte offset of the end marker.
        offset: usize,
    },

    /// An argument that could not be parsed, most commonly an unquoted value.
    #[error("malformed argument for shortcode '{name}' at byte {offset}: {reason}")]
    MalformedArgument {
        /// Shortcode whose marker carried the argument.
        name: String,
        /// Byte offset of the argument.
        offset: usize,
        /// What was wrong with it.
        reason: String,
    },

    /// An invocation of a name no handler is registered under.
    #[error("unknown shortcode '{name}' at byte {offset}")]
    UnknownShortcode {
        /// The unresolved name.
        name: String,
        /// Byte offset of the invocation.
        offset: usize,
    },

    /// A handler returned an error; the cause is attached as the source.
    #[error("shortcode '{name}' at byte {offset} failed")]
    HandlerFailed {
        /// Name of the failing shortcode.
        name: String,
        /// Byte offset of the invocation.
        offset: usize,
        /// The handler's own error.
        #[source]
        source: HandlerError,
    },

    /// Recursive rescan expansion exceeded the configured depth bound.
    #[error("shortcode expansion exceeded the maximum depth of {limit}")]
    DepthExceeded {
        /// The configured bound that was hit.
        limit: usize,
    },

    /// The document's cancellation token fired before expansion finished.
    #[error("shortcode expansion cancelled")]
    Cancelled,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_mismatched_display_with_expected() {
        let err = ExpandError::MismatchedInvocation {
            expected: Some("info".to_owned()),
            found: "tick".to_owned(),
            offset: 12,
        };
        assert_eq!(
            err.to_string(),
            "mismatched end marker 'tick' at byte 12, expected 'info'"
        );
    }

    #[test]
    fn test_mismatched_display_without_expected() {
        let err = ExpandError::MismatchedInvocation {
            expected: None,
            found: "tick".to_owned(),
            offset: 0,
        };
        assert_eq!(
            err.to_string(),
            "mismatched end marker 'tick' at byte 0, expected '<none>'"
        );
    }

    #[test]
    fn test_handler_failed_keeps_source() {
        use std::error::Error as _;

        let err = ExpandError::HandlerFailed {
            name: "info".to_owned(),
            offset: 3,
            source: "boom".into(),
        };
        assert_eq!(err.to_string(), "shortcode 'info' at byte 3 failed");
        assert_eq!(err.source().map(ToString::to_string), Some("boom".to_owned()));
    }
}
