//! The embed page: header, card and the clipped workbook iframe.

use crate::shell::{Notification, PageShell};

use super::components::{base_html, card, html_escape, js_literal, page_header};

pub const PAGE_TITLE: &str = "Gurukul Reading Program";
pub const PAGE_SUBTITLE: &str = "View student reading conversations and progress from SharePoint";
pub const CARD_TITLE: &str = "Reading Progress Data";
pub const FRAME_TITLE: &str = "Student Reading Progress";
pub const FRAME_HEIGHT: u32 = 940;

/// Render the full page for `shell`.
///
/// The iframe `src` is the shell's embed URL verbatim (HTML-escaped only for
/// the attribute). A load error shows the failure toast once, reports it to
/// `/api/embed-error`, and leaves the iframe untouched.
pub fn render_embed_page(shell: &PageShell) -> String {
    let config = shell.config();

    let open_link = format!(
        r#"<a href="{}" target="_blank" rel="noopener noreferrer">Open in SharePoint</a>"#,
        html_escape(config.share_point_view_url)
    );

    let frame = format!(
        r#"<div class="embed-frame">
                <iframe id="embed-frame"
                        src="{src}"
                        width="100%"
                        height="{height}"
                        frameborder="0"
                        scrolling="no"
                        title="{title}"
                        onerror="embedLoadFailed(this)"></iframe>
            </div>"#,
        src = html_escape(shell.embed_url().as_str()),
        height = FRAME_HEIGHT,
        title = html_escape(FRAME_TITLE),
    );

    let content = format!(
        "{}\n{}",
        page_header(PAGE_TITLE, PAGE_SUBTITLE),
        card(CARD_TITLE, &open_link, &frame)
    );

    let script = format!(
        r#"
    // --- Embed load failure (terminal until reload) ---
    const EMBED_ERROR = {notification};
    let embedErrored = false;
    function embedLoadFailed(frame) {{
        if (embedErrored) return;
        embedErrored = true;
        showToast(EMBED_ERROR.message);
        try {{
            const body = JSON.stringify({{ src: frame.getAttribute('src') }});
            navigator.sendBeacon('/api/embed-error', new Blob([body], {{ type: 'application/json' }}));
        }} catch (e) {{
            console.error('Failed to report embed error:', e);
        }}
    }}"#,
        notification = js_literal(&Notification::embed_failed()),
    );

    base_html(PAGE_TITLE, &content, &script)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::embed::{embed_url, SHAREPOINT_CONFIG};
    use crate::shell::EMBED_FAILED_MESSAGE;

    fn render_default() -> String {
        render_embed_page(&PageShell::new(&SHAREPOINT_CONFIG))
    }

    /// Pull the iframe `src` attribute back out and undo the HTML escaping.
    fn iframe_src(html: &str) -> String {
        let start = html.find("<iframe").unwrap();
        let rest = &html[start..];
        let attr = rest.find("src=\"").unwrap() + 5;
        let end = rest[attr..].find('"').unwrap();
        rest[attr..attr + end]
            .replace("&#39;", "'")
            .replace("&quot;", "\"")
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&amp;", "&")
    }

    #[test]
    fn test_iframe_src_is_public_url() {
        let html = render_default();
        assert_eq!(iframe_src(&html), embed_url(None).as_str());
    }

    #[test]
    fn test_iframe_attributes() {
        let html = render_default();
        assert!(html.contains("height=\"940\""));
        assert!(html.contains("width=\"100%\""));
        assert!(html.contains("frameborder=\"0\""));
        assert!(html.contains("scrolling=\"no\""));
        assert!(html.contains("title=\"Student Reading Progress\""));
    }

    #[test]
    fn test_footer_is_clipped() {
        let html = render_default();
        assert!(html.contains("clip-path: inset(0 0 40px 0);"));
        assert!(html.contains("margin-bottom: -40px;"));
    }

    #[test]
    fn test_page_text() {
        let html = render_default();
        assert!(html.contains("<h1>Gurukul Reading Program</h1>"));
        assert!(html.contains("View student reading conversations and progress from SharePoint"));
        assert!(html.contains("<h2>Reading Progress Data</h2>"));
    }

    #[test]
    fn test_open_in_sharepoint_link() {
        let html = render_default();
        assert!(html.contains(SHAREPOINT_CONFIG.share_point_view_url));
        assert!(html.contains("Open in SharePoint"));
    }

    #[test]
    fn test_error_handler_is_one_shot() {
        let html = render_default();
        assert!(html.contains("onerror=\"embedLoadFailed(this)\""));
        assert!(html.contains("if (embedErrored) return;"));
        assert!(html.contains(EMBED_FAILED_MESSAGE));
        assert!(html.contains("/api/embed-error"));
    }

    #[test]
    fn test_error_handler_does_not_touch_src() {
        let html = render_default();
        let script = &html[html.find("function embedLoadFailed").unwrap()..];
        assert!(!script.contains(".src ="));
        assert!(!script.contains("setAttribute('src'"));
        assert!(!script.contains("location.reload"));
    }
}
