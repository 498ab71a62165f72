//! Handler output fragments.
//!
//! A handler returns an ordered sequence of fragments; their texts are
//! concatenated to form the invocation's substitution text.

/// One piece of a handler's output.
///
/// [`Text`](Self::Text) is spliced into the document as-is. [`Rescan`](Self::Rescan)
/// is run through the full expansion pipeline first, so shortcode syntax a
/// handler emits (or echoes from its body) gets expanded before splicing.
///
/// # Example
///
/// ```
/// use shx_engine::Fragment;
///
/// let literal = Fragment::text("<p>done</p>");
/// assert!(!literal.needs_rescan());
///
/// let nested = Fragment::rescan("<%tick%>done<%/tick%>");
/// assert!(nested.needs_rescan());
/// assert_eq!(nested.content(), "<%tick%>done<%/tick%>");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Final output, spliced without further expansion.
    Text(String),
    /// Output to re-expand through the full pipeline before splicing.
    Rescan(String),
}

impl Fragment {
    /// Create a fragment spliced without further expansion.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Create a fragment that is re-expanded before splicing.
    #[must_use]
    pub fn rescan(content: impl Into<String>) -> Self {
        Self::Rescan(content.into())
    }

    /// The fragment's text.
    #[must_use]
    pub fn content(&self) -> &str {
        match self {
            Self::Text(content) | Self::Rescan(content) => content,
        }
    }

    /// Whether the fragment is re-expanded before splicing.
    #[must_use]
    pub fn needs_rescan(&self) -> bool {
        matches!(self, Self::Rescan(_))
    }
}
