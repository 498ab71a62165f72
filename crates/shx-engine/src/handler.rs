//! The shortcode handler trait.

use async_trait::async_trait;

use crate::arguments::Arguments;
use crate::context::DocumentContext;
use crate::fragment::Fragment;

/// Boxed error a handler may fail with.
///
/// The engine wraps it into
/// [`ExpandError::HandlerFailed`](crate::ExpandError::HandlerFailed) together
/// with the shortcode name and invocation offset.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// Behavior registered under a shortcode name.
///
/// One value per shortcode, shared read-only across every document of a
/// build, so implementations must be stateless with respect to the engine:
/// they may read the [`DocumentContext`] but get no mutable access to
/// anything. Executions of independent invocations run concurrently.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use shx_engine::{Arguments, DocumentContext, Fragment, HandlerError, ShortcodeHandler};
///
/// struct Shout;
///
/// #[async_trait]
/// impl ShortcodeHandler for Shout {
///     async fn execute(
///         &self,
///         _arguments: &Arguments,
///         body: Option<&str>,
///         _ctx: &DocumentContext,
///     ) -> Result<Vec<Fragment>, HandlerError> {
///         Ok(vec![Fragment::text(body.unwrap_or("").to_uppercase())])
///     }
/// }
///
/// let ctx = DocumentContext::new();
/// let fragments = futures::executor::block_on(Shout.execute(
///     &Arguments::new(),
///     Some("quiet"),
///     &ctx,
/// ))?;
/// assert_eq!(fragments[0].content(), "QUIET");
/// # Ok::<(), shx_engine::HandlerError>(())
/// ```
#[async_trait]
pub trait ShortcodeHandler: Send + Sync {
    /// Produce the output fragments for one invocation.
    ///
    /// `arguments` preserves marker order, `body` is the raw text between the
    /// start and end markers (`None` for self-closing invocations), and
    /// `ctx` is the host's ambient document context.
    async fn execute(
        &self,
        arguments: &Arguments,
        body: Option<&str>,
        ctx: &DocumentContext,
    ) -> Result<Vec<Fragment>, HandlerError>;
}
