//! Ambient per-document context.
//!
//! The host builds a [`DocumentContext`] per expansion and the engine passes
//! it through to handlers unchanged. Handlers read from it; nothing in the
//! engine writes to it.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

/// Read-only context handed to every handler execution of one document.
///
/// Carries the document identity (if the host has one), a typed value map
/// for arbitrary host data, and the cancellation token both the engine and
/// long-running handlers observe.
///
/// # Example
///
/// ```
/// use shx_engine::DocumentContext;
///
/// struct BaseUrl(String);
///
/// let ctx = DocumentContext::new()
///     .with_source("posts/2022-03-14.md")
///     .with_value(BaseUrl("https://example.dev".to_owned()));
///
/// assert_eq!(ctx.source(), Some("posts/2022-03-14.md"));
/// assert_eq!(ctx.get::<BaseUrl>().map(|b| b.0.as_str()), Some("https://example.dev"));
/// assert!(!ctx.is_cancelled());
/// ```
pub struct DocumentContext {
    source: Option<String>,
    values: HashMap<TypeId, Arc<dyn Any + Send + Sync>>,
    cancellation: CancellationToken,
}

impl Default for DocumentContext {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentContext {
    /// Create an empty context with a fresh, never-cancelled token.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            values: HashMap::new(),
            cancellation: CancellationToken::new(),
        }
    }

    /// Set the document identity (a URL path or file path string).
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Attach a host value, replacing any previous value of the same type.
    #[must_use]
    pub fn with_value<T: Any + Send + Sync>(mut self, value: T) -> Self {
        self.insert(value);
        self
    }

    /// Use `token` instead of the default fresh token.
    #[must_use]
    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = token;
        self
    }

    /// Attach a host value, replacing any previous value of the same type.
    pub fn insert<T: Any + Send + Sync>(&mut self, value: T) {
        self.values.insert(TypeId::of::<T>(), Arc::new(value));
    }

    /// The document identity, if the host set one.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    /// Look up a host value by type.
    #[must_use]
    pub fn get<T: Any + Send + Sync>(&self) -> Option<&T> {
        self.values
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
    }

    /// The cancellation token for this document.
    #[must_use]
    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancellation
    }

    /// Whether the token has already fired.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancellation.is_cancelled()
    }
}

impl fmt::Debug for DocumentContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentContext")
            .field("source", &self.source)
            .field("values", &self.values.len())
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Debug, PartialEq)]
    struct SiteName(&'static str);

    #[derive(Debug, PartialEq)]
    struct BuildId(u64);

    #[test]
    fn test_empty_context() {
        let ctx = DocumentContext::new();
        assert_eq!(ctx.source(), None);
        assert_eq!(ctx.get::<SiteName>(), None);
        assert!(!ctx.is_cancelled());
    }

    #[test]
    fn test_source() {
        let ctx = DocumentContext::new().with_source("daily-drop/112.md");
        assert_eq!(ctx.source(), Some("daily-drop/112.md"));
    }

    #[test]
    fn test_typed_values() {
        let ctx = DocumentContext::new()
            .with_value(SiteName("always-developing"))
            .with_value(BuildId(7));

        assert_eq!(ctx.get::<SiteName>(), Some(&SiteName("always-developing")));
        assert_eq!(ctx.get::<BuildId>(), Some(&BuildId(7)));
    }

    #[test]
    fn test_insert_replaces_same_type() {
        let mut ctx = DocumentContext::new();
        ctx.insert(BuildId(1));
        ctx.insert(BuildId(2));
        assert_eq!(ctx.get::<BuildId>(), Some(&BuildId(2)));
    }

    #[test]
    fn test_cancellation_token() {
        let token = CancellationToken::new();
        let ctx = DocumentContext::new().with_cancellation(token.clone());

        assert!(!ctx.is_cancelled());
        token.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn test_debug_does_not_leak_values() {
        let ctx = DocumentContext::new()
            .with_source("a.md")
            .with_value(BuildId(1));
        let rendered = format!("{ctx:?}");
        assert!(rendered.contains("a.md"));
        assert!(!rendered.contains("BuildId"));
    }
}
