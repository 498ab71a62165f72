//! Shortcode expansion pipeline.
//!
//! One [`ShortcodeProcessor::expand`] call runs the whole pipeline for one
//! document: parse, resolve every invocation against the registry, execute
//! the handlers concurrently, re-expand rescan fragments, splice. The
//! processor is `Send + Sync` and holds no per-document state, so a host can
//! expand many documents in parallel against one processor.

use futures::future::{BoxFuture, try_join_all};

use crate::context::DocumentContext;
use crate::error::ExpandError;
use crate::fragment::Fragment;
use crate::handler::ShortcodeHandler;
use crate::parser::{self, Invocation, Span};
use crate::registry::ShortcodeRegistry;
use crate::substitute;
use crate::syntax::SyntaxConfig;

/// Configuration for the shortcode processor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ProcessorConfig {
    /// Delimiter pair that brackets invocation markers.
    ///
    /// Default: `<%` / `%>`
    pub syntax: SyntaxConfig,
    /// Maximum rescan recursion depth, guarding against handlers whose
    /// output re-triggers themselves.
    ///
    /// Default: 20
    pub max_depth: usize,
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessorConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self {
            syntax: SyntaxConfig::default(),
            max_depth: 20,
        }
    }

    /// Set the delimiter pair.
    #[must_use]
    pub fn with_syntax(mut self, syntax: SyntaxConfig) -> Self {
        self.syntax = syntax;
        self
    }

    /// Set the maximum rescan recursion depth.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }
}

/// Expands shortcode invocations in content through registered handlers.
///
/// Expansion is all-or-nothing per document: the transformed content comes
/// back only if every invocation parsed, resolved, and executed. Handler
/// executions within one document run concurrently and are joined back in
/// source order, so concurrency affects latency, never output.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use shx_engine::{
///     Arguments, DocumentContext, Fragment, HandlerError, ShortcodeHandler,
///     ShortcodeProcessor, ShortcodeRegistry,
/// };
///
/// struct Greet;
///
/// #[async_trait]
/// impl ShortcodeHandler for Greet {
///     async fn execute(
///         &self,
///         arguments: &Arguments,
///         _body: Option<&str>,
///         _ctx: &DocumentContext,
///     ) -> Result<Vec<Fragment>, HandlerError> {
///         let name = arguments.get("name").unwrap_or("world");
///         Ok(vec![Fragment::text(format!("Hello, {name}!"))])
///     }
/// }
///
/// let mut registry = ShortcodeRegistry::new();
/// registry.register("greet", Greet)?;
///
/// let processor = ShortcodeProcessor::new(registry);
/// let ctx = DocumentContext::new();
/// let output = futures::executor::block_on(
///     processor.expand(r#"Dear reader: <%greet name="docs" /%>"#, &ctx),
/// )?;
/// assert_eq!(output, "Dear reader: Hello, docs!");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct ShortcodeProcessor {
    config: ProcessorConfig,
    registry: ShortcodeRegistry,
}

impl ShortcodeProcessor {
    /// Create a processor over `registry` with default configuration.
    ///
    /// The registry moves in; nothing can mutate it afterwards.
    #[must_use]
    pub fn new(registry: ShortcodeRegistry) -> Self {
        Self {
            config: ProcessorConfig::default(),
            registry,
        }
    }

    /// Replace the processor configuration.
    #[must_use]
    pub fn with_config(mut self, config: ProcessorConfig) -> Self {
        self.config = config;
        self
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ProcessorConfig {
        &self.config
    }

    /// The registry this processor resolves against.
    #[must_use]
    pub fn registry(&self) -> &ShortcodeRegistry {
        &self.registry
    }

    /// Expand every shortcode invocation in `content`.
    ///
    /// Content without invocation markers comes back unchanged. Any parse,
    /// resolution, or handler failure aborts the whole document.
    pub async fn expand(
        &self,
        content: &str,
        ctx: &DocumentContext,
    ) -> Result<String, ExpandError> {
        let output = self.expand_with_depth(content, ctx, 0).await?;
        tracing::debug!(
            source = ctx.source().unwrap_or("<unnamed>"),
            input_len = content.len(),
            output_len = output.len(),
            "Expanded document"
        );
        Ok(output)
    }

    fn expand_with_depth<'a>(
        &'a self,
        content: &'a str,
        ctx: &'a DocumentContext,
        depth: usize,
    ) -> BoxFuture<'a, Result<String, ExpandError>> {
        Box::pin(async move {
            if ctx.is_cancelled() {
                return Err(ExpandError::Cancelled);
            }
            if depth > self.config.max_depth {
                return Err(ExpandError::DepthExceeded {
                    limit: self.config.max_depth,
                });
            }

            let invocations = parser::parse(content, &self.config.syntax)?;
            if invocations.is_empty() {
                return Ok(content.to_owned());
            }

            // Resolve everything before running anything, so an unknown name
            // fails deterministically at its leftmost occurrence and no
            // handler side effects happen for a document that cannot expand.
            let mut handlers = Vec::with_capacity(invocations.len());
            for invocation in &invocations {
                let Some(handler) = self.registry.resolve(&invocation.name) else {
                    return Err(ExpandError::UnknownShortcode {
                        name: invocation.name.clone(),
                        offset: invocation.span.start,
                    });
                };
                handlers.push(handler);
            }

            tracing::trace!(
                count = invocations.len(),
                depth,
                "Resolved shortcode invocations"
            );

            let executions = invocations
                .iter()
                .zip(&handlers)
                .map(|(invocation, handler)| {
                    self.execute_one(invocation, handler.as_ref(), ctx, depth)
                });

            let expanded = tokio::select! {
                results = try_join_all(executions) => results?,
                () = ctx.cancellation().cancelled() => return Err(ExpandError::Cancelled),
            };

            let replacements: Vec<(Span, String)> = invocations
                .iter()
                .map(|invocation| invocation.span)
                .zip(expanded)
                .collect();

            Ok(substitute::splice(content, &replacements))
        })
    }

    /// Run one handler and fully expand its fragments into the invocation's
    /// substitution text.
    async fn execute_one(
        &self,
        invocation: &Invocation,
        handler: &dyn ShortcodeHandler,
        ctx: &DocumentContext,
        depth: usize,
    ) -> Result<String, ExpandError> {
        tracing::trace!(
            name = %invocation.name,
            offset = invocation.span.start,
            "Executing shortcode"
        );

        let fragments = handler
            .execute(&invocation.arguments, invocation.body.as_deref(), ctx)
            .await
            .map_err(|source| ExpandError::HandlerFailed {
                name: invocation.name.clone(),
                offset: invocation.span.start,
                source,
            })?;

        let mut output = String::new();
        for fragment in fragments {
            match fragment {
                Fragment::Text(text) => output.push_str(&text),
                Fragment::Rescan(text) => {
                    let expanded = self.expand_with_depth(&text, ctx, depth + 1).await?;
                    output.push_str(&expanded);
                }
            }
        }
        Ok(output)
    }
}
