//! Built-in shortcode handlers for the shx engine.
//!
//! This crate provides the stock callout shortcodes:
//! - [`Info`]: `info`, an info blockquote around the body
//! - [`Tick`]: `tick`, the same blockquote with a green check icon
//! - [`DailyDrop`]: `daily-drop`, the Daily Drop series banner
//!
//! Each handler emits its HTML as a single rescan fragment, so shortcodes
//! nested inside a callout body are expanded as well. [`registry()`] builds a
//! [`ShortcodeRegistry`] with all of them registered.
//!
//! # Example
//!
//! ```
//! use shx_engine::{DocumentContext, ShortcodeProcessor};
//!
//! let processor = ShortcodeProcessor::new(shx_builtins::registry()?);
//! let ctx = DocumentContext::new();
//!
//! let html = futures::executor::block_on(
//!     processor.expand("<%tick%>Deployed to production.<%/tick%>", &ctx),
//! )?;
//! assert!(html.contains("<p>Deployed to production.</p>"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use shx_engine::{RegistryError, ShortcodeRegistry};

mod daily_drop;
mod info;
mod tick;

pub use daily_drop::DailyDrop;
pub use info::Info;
pub use tick::Tick;

/// Build a registry with every built-in handler registered under its name.
pub fn registry() -> Result<ShortcodeRegistry, RegistryError> {
    let mut registry = ShortcodeRegistry::new();
    registry.register("info", Info)?;
    registry.register("tick", Tick)?;
    registry.register("daily-drop", DailyDrop)?;
    Ok(registry)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use shx_engine::{DocumentContext, ExpandError, ShortcodeProcessor};

    use super::*;

    fn processor() -> ShortcodeProcessor {
        ShortcodeProcessor::new(registry().unwrap())
    }

    #[test]
    fn test_registry_has_all_builtins() {
        let registry = registry().unwrap();
        let mut names: Vec<_> = registry.names().collect();
        names.sort_unstable();
        assert_eq!(names, vec!["daily-drop", "info", "tick"]);
    }

    #[test]
    fn test_builtin_names_stay_reserved() {
        let mut registry = registry().unwrap();
        let err = registry.register("info", Info).unwrap_err();
        assert_eq!(
            err,
            RegistryError::DuplicateName {
                name: "info".to_owned()
            }
        );
    }

    #[tokio::test]
    async fn test_info_expands_in_document() {
        let ctx = DocumentContext::new().with_source("posts/learning.md");
        let output = processor()
            .expand(
                "Intro paragraph.\n<%info%>Useful to know.<%/info%>\nOutro paragraph.",
                &ctx,
            )
            .await
            .unwrap();

        assert!(output.starts_with("Intro paragraph.\n"));
        assert!(output.ends_with("\nOutro paragraph."));
        assert!(output.contains(r#"<blockquote class="info-block">"#));
        assert!(output.contains("<p>Useful to know.</p>"));
    }

    #[tokio::test]
    async fn test_tick_expands_in_document() {
        let ctx = DocumentContext::new();
        let output = processor()
            .expand("<%tick%>Database migrated.<%/tick%>", &ctx)
            .await
            .unwrap();

        assert!(output.contains("icon-tabler-circle-check"));
        assert!(output.contains("<p>Database migrated.</p>"));
    }

    #[tokio::test]
    async fn test_daily_drop_interpolates_header() {
        let ctx = DocumentContext::new();
        let output = processor()
            .expand("<%daily-drop%>#112: LINQ Chunk<%/daily-drop%>", &ctx)
            .await
            .unwrap();

        assert!(output.contains(r#"<blockquote class="daily-drop">"#));
        assert!(output.contains("Daily Drop #112: LINQ Chunk"));
        assert!(output.contains("At the start of 2022"));
    }

    #[tokio::test]
    async fn test_nested_builtin_expands() {
        let ctx = DocumentContext::new();
        let output = processor()
            .expand(
                "<%info%>Checklist: <%tick%>backups verified<%/tick%><%/info%>",
                &ctx,
            )
            .await
            .unwrap();

        // The tick inside the info body expanded through the rescan.
        assert!(output.contains("icon-tabler-info-circle"));
        assert!(output.contains("icon-tabler-circle-check"));
        assert!(output.contains("<p>backups verified</p>"));
        assert!(!output.contains("<%tick%>"));
    }

    #[tokio::test]
    async fn test_self_closing_info() {
        let ctx = DocumentContext::new();
        let output = processor().expand("<%info /%>", &ctx).await.unwrap();
        assert!(output.contains("<p></p>"));
    }

    #[tokio::test]
    async fn test_unknown_shortcode_rejected() {
        let ctx = DocumentContext::new();
        let err = processor()
            .expand("<%info%>ok<%/info%> <%youtube id=\"x\" /%>", &ctx)
            .await
            .unwrap_err();

        match err {
            ExpandError::UnknownShortcode { name, offset } => {
                assert_eq!(name, "youtube");
                assert_eq!(offset, 20);
            }
            other => panic!("expected UnknownShortcode, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_plain_document_untouched() {
        let ctx = DocumentContext::new();
        let input = "No shortcodes here, just 50% more prose.\n";
        let output = processor().expand(input, &ctx).await.unwrap();
        assert_eq!(output, input);
    }
}
