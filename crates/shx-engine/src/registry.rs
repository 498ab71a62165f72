//! Handler registration and lookup.

use std::collections::HashMap;
use std::sync::Arc;

use thiserror::Error;

use crate::handler::ShortcodeHandler;
use crate::parser::is_valid_name;

/// Errors from [`ShortcodeRegistry`] registration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    /// The name is already bound to a handler.
    #[error("shortcode '{name}' is already registered")]
    DuplicateName {
        /// The contested name.
        name: String,
    },
    /// The name could never be produced by the invocation syntax.
    #[error("invalid shortcode name '{name}': names are alphanumeric with hyphens and underscores")]
    InvalidName {
        /// The rejected name.
        name: String,
    },
}

/// Name-to-handler mapping, populated during startup and read-only afterwards.
///
/// Registration fails fast: a duplicate name is an error, never a silent
/// overwrite. Bulk loads that intend replacement use
/// [`replace`](Self::replace) instead. Once handed to a
/// [`ShortcodeProcessor`](crate::ShortcodeProcessor), no mutation is
/// possible, so the processor shares the registry across documents without
/// locking.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use shx_engine::{
///     Arguments, DocumentContext, Fragment, HandlerError, ShortcodeHandler, ShortcodeRegistry,
/// };
///
/// struct Version;
///
/// #[async_trait]
/// impl ShortcodeHandler for Version {
///     async fn execute(
///         &self,
///         _arguments: &Arguments,
///         _body: Option<&str>,
///         _ctx: &DocumentContext,
///     ) -> Result<Vec<Fragment>, HandlerError> {
///         Ok(vec![Fragment::text("1.0.0")])
///     }
/// }
///
/// let mut registry = ShortcodeRegistry::new();
/// registry.register("version", Version)?;
///
/// assert!(registry.resolve("version").is_some());
/// assert!(registry.resolve("unknown").is_none());
/// assert!(registry.register("version", Version).is_err());
/// # Ok::<(), shx_engine::RegistryError>(())
/// ```
#[derive(Default)]
pub struct ShortcodeRegistry {
    handlers: HashMap<String, Arc<dyn ShortcodeHandler>>,
}

impl ShortcodeRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `handler` to `name`, failing on duplicates and invalid names.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        handler: impl ShortcodeHandler + 'static,
    ) -> Result<(), RegistryError> {
        let name = name.into();
        validate_name(&name)?;

        if self.handlers.contains_key(&name) {
            return Err(RegistryError::DuplicateName { name });
        }

        self.handlers.insert(name, Arc::new(handler));
        Ok(())
    }

    /// Bind `handler` to `name`, overwriting an existing binding.
    ///
    /// Returns the previous handler, if any. Name validation still applies.
    pub fn replace(
        &mut self,
        name: impl Into<String>,
        handler: impl ShortcodeHandler + 'static,
    ) -> Result<Option<Arc<dyn ShortcodeHandler>>, RegistryError> {
        let name = name.into();
        validate_name(&name)?;

        Ok(self.handlers.insert(name, Arc::new(handler)))
    }

    /// Look up the handler bound to `name`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<Arc<dyn ShortcodeHandler>> {
        self.handlers.get(name).map(Arc::clone)
    }

    /// Registered names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.handlers.keys().map(String::as_str)
    }

    /// Number of registered handlers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Whether no handler is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

fn validate_name(name: &str) -> Result<(), RegistryError> {
    if is_valid_name(name) {
        Ok(())
    } else {
        Err(RegistryError::InvalidName {
            name: name.to_owned(),
        })
    }
}
