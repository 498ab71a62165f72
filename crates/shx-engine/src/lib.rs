//! Shortcode resolution and expansion engine with async handlers.
//!
//! This crate scans content for embedded *shortcode* invocations (inline or
//! block directives with a name, key/value arguments, and an optional nested
//! body) and replaces each one with the output of the handler registered
//! under that name, preserving all surrounding text byte-for-byte.
//!
//! # Architecture
//!
//! Expansion is one pipeline per document, run by
//! [`ShortcodeProcessor::expand`]:
//!
//! 1. **Parse**: scan for markers between the configured delimiters
//!    ([`SyntaxConfig`], default `<%` / `%>`) and collect the top-level
//!    invocations. A block body stays one opaque raw substring; markers
//!    inside it are only discovered when a handler's output asks to be
//!    re-expanded.
//! 2. **Resolve**: look up every invocation name in the
//!    [`ShortcodeRegistry`] before any handler runs. An unknown name fails
//!    the whole document.
//! 3. **Execute**: run one [`ShortcodeHandler`] future per invocation
//!    concurrently and join the results back in source order.
//! 4. **Substitute**: concatenate each invocation's [`Fragment`]s,
//!    re-running the full pipeline for rescan-flagged ones (depth-bounded),
//!    and splice them over the invocation spans into a fresh buffer.
//!
//! Expansion is all-or-nothing: a document either expands completely or
//! fails with an [`ExpandError`] carrying the offending shortcode name and
//! byte offset. The processor holds no per-document state, so one processor
//! serves parallel expansions across documents.
//!
//! # Example
//!
//! ```
//! use async_trait::async_trait;
//! use shx_engine::{
//!     Arguments, DocumentContext, Fragment, HandlerError, ShortcodeHandler,
//!     ShortcodeProcessor, ShortcodeRegistry,
//! };
//!
//! struct Note;
//!
//! #[async_trait]
//! impl ShortcodeHandler for Note {
//!     async fn execute(
//!         &self,
//!         _arguments: &Arguments,
//!         body: Option<&str>,
//!         _ctx: &DocumentContext,
//!     ) -> Result<Vec<Fragment>, HandlerError> {
//!         Ok(vec![Fragment::text(format!(
//!             "<aside>{}</aside>",
//!             body.unwrap_or("")
//!         ))])
//!     }
//! }
//!
//! let mut registry = ShortcodeRegistry::new();
//! registry.register("note", Note)?;
//!
//! let processor = ShortcodeProcessor::new(registry);
//! let ctx = DocumentContext::new();
//! let output = futures::executor::block_on(
//!     processor.expand("see <%note%>the docs<%/note%> here", &ctx),
//! )?;
//! assert_eq!(output, "see <aside>the docs</aside> here");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod arguments;
mod context;
mod error;
mod fragment;
mod handler;
mod parser;
mod processor;
mod registry;
mod substitute;
mod syntax;

pub use arguments::{Argument, Arguments};
pub use context::DocumentContext;
pub use error::ExpandError;
pub use fragment::Fragment;
pub use handler::{HandlerError, ShortcodeHandler};
pub use processor::{ProcessorConfig, ShortcodeProcessor};
pub use registry::{RegistryError, ShortcodeRegistry};
pub use syntax::{SyntaxConfig, SyntaxError};

// Re-export CancellationToken so hosts can wire cancellation without
// depending on tokio-util themselves.
pub use tokio_util::sync::CancellationToken;
