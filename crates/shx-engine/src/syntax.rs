//! Invocation delimiter configuration.
//!
//! The delimiter pair is fixed per processor instance. Hosts pick delimiters
//! that cannot collide with literal content in their markup (there is no
//! escape syntax).

use thiserror::Error;

/// Errors from [`SyntaxConfig::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SyntaxError {
    /// A delimiter was the empty string.
    #[error("shortcode delimiters must be non-empty")]
    EmptyDelimiter,
    /// Open and close delimiters were identical.
    #[error("shortcode open and close delimiters must differ")]
    IdenticalDelimiters,
}

/// Delimiter pair that brackets shortcode markers.
///
/// Defaults to `<%` / `%>`:
///
/// ```text
/// <%name arg="value" %>body<%/name%>
/// <%name arg="value" /%>
/// ```
///
/// # Example
///
/// ```
/// use shx_engine::SyntaxConfig;
///
/// let syntax = SyntaxConfig::new("<?#", "?>")?;
/// assert_eq!(syntax.open(), "<?#");
/// assert_eq!(syntax.close(), "?>");
/// # Ok::<(), shx_engine::SyntaxError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "UncheckedSyntax"))]
pub struct SyntaxConfig {
    open: String,
    close: String,
}

impl Default for SyntaxConfig {
    fn default() -> Self {
        Self {
            open: "<%".to_owned(),
            close: "%>".to_owned(),
        }
    }
}

impl SyntaxConfig {
    /// Create a delimiter pair, validating that both delimiters are non-empty
    /// and distinct.
    pub fn new(open: impl Into<String>, close: impl Into<String>) -> Result<Self, SyntaxError> {
        let open = open.into();
        let close = close.into();

        if open.is_empty() || close.is_empty() {
            return Err(SyntaxError::EmptyDelimiter);
        }
        if open == close {
            return Err(SyntaxError::IdenticalDelimiters);
        }

        Ok(Self { open, close })
    }

    /// The delimiter that starts a marker.
    #[must_use]
    pub fn open(&self) -> &str {
        &self.open
    }

    /// The delimiter that ends a marker.
    #[must_use]
    pub fn close(&self) -> &str {
        &self.close
    }
}

/// Raw form accepted from configuration files, validated on conversion.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct UncheckedSyntax {
    open: String,
    close: String,
}

#[cfg(feature = "serde")]
impl TryFrom<UncheckedSyntax> for SyntaxConfig {
    type Error = SyntaxError;

    fn try_from(raw: UncheckedSyntax) -> Result<Self, Self::Error> {
        Self::new(raw.open, raw.close)
    }
}
