//! The `tick` shortcode.

use async_trait::async_trait;

use shx_engine::{Arguments, DocumentContext, Fragment, HandlerError, ShortcodeHandler};

/// Block shortcode wrapping its body in a checked-off callout.
///
/// Same structure as [`Info`](crate::Info) but with a green check icon, for
/// calling out completed or confirmed items. The HTML is emitted as a rescan
/// fragment, so shortcodes nested inside the body expand as well.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tick;

#[async_trait]
impl ShortcodeHandler for Tick {
    async fn execute(
        &self,
        _arguments: &Arguments,
        body: Option<&str>,
        _ctx: &DocumentContext,
    ) -> Result<Vec<Fragment>, HandlerError> {
        Ok(vec![Fragment::rescan(format!(
            r##"<blockquote class="info-block">
    <div>
        <div style="width: 5%; float: left; vertical-align: middle; padding-right: 60px;">
            <svg xmlns="http://www.w3.org/2000/svg" class="icon icon-tabler icon-tabler-circle-check" width="44" height="44" viewBox="0 0 24 24" stroke-width="2" stroke="#7bc62d" fill="none" stroke-linecap="round" stroke-linejoin="round">
                <path stroke="none" d="M0 0h24v24H0z" fill="none" />
                <circle cx="12" cy="12" r="9" />
                <path d="M9 12l2 2l4 -4" />
            </svg>
        </div>
        <div>
            <p>{}</p>
        </div>
    </div>
</blockquote>"##,
            body.unwrap_or("")
        ))])
    }
}
