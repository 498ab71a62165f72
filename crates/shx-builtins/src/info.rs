//! The `info` shortcode.

use async_trait::async_trait;

use shx_engine::{Arguments, DocumentContext, Fragment, HandlerError, ShortcodeHandler};

/// Block shortcode wrapping its body in an info callout.
///
/// `<%info%>Useful to know.<%/info%>` renders a `blockquote.info-block` with
/// an info-circle icon next to the body paragraph. The HTML is emitted as a
/// rescan fragment, so shortcodes nested inside the body expand as well. A
/// self-closing invocation renders an empty paragraph.
#[derive(Debug, Clone, Copy, Default)]
pub struct Info;

#[async_trait]
impl ShortcodeHandler for Info {
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
            <svg xmlns="http://www.w3.org/2000/svg" class="icon icon-tabler icon-tabler-info-circle" width="44" height="44" viewBox="0 0 24 24" stroke-width="1.5" stroke="#00abfb" fill="none" stroke-linecap="round" stroke-linejoin="round">
                <path stroke="none" d="M0 0h24v24H0z" fill="none" />
                <circle cx="12" cy="12" r="9" />
                <line x1="12" y1="8" x2="12.01" y2="8" />
                <polyline points="11 12 12 12 12 16 13 16" />
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

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[tokio::test]
    async fn test_body_in_paragraph() {
        let fragments = Info
            .execute(&Arguments::new(), Some("Useful to know."), &DocumentContext::new())
            .await
            .unwrap();

        assert_eq!(fragments.len(), 1);
        assert!(fragments[0].needs_rescan());

        let html = fragments[0].content();
        assert!(html.contains(r#"<blockquote class="info-block">"#));
        assert!(html.contains("<p>Useful to know.</p>"));
        assert!(html.contains("icon-tabler-info-circle"));
    }

    #[tokio::test]
    async fn test_missing_body_renders_empty() {
        let fragments = Info
            .execute(&Arguments::new(), None, &DocumentContext::new())
            .await
            .unwrap();

        assert!(fragments[0].content().contains("<p></p>"));
    }

    #[tokio::test]
    async fn test_output_is_marker_free() {
        // Emitted as a rescan fragment, so the fixed HTML must never contain
        // the default delimiters.
        let fragments = Info
            .execute(&Arguments::new(), Some("body"), &DocumentContext::new())
            .await
            .unwrap();

        assert!(!fragments[0].content().contains("<%"));
    }
}
