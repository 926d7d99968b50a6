//! Shared HTML components for the embed page.
//!
//! Contains escaping helpers, the page header, the card wrapper and the base
//! HTML template.

use super::styles::STYLE;

// ============================================================================
// Escaping
// ============================================================================

pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Serialize a value as a JS literal that is safe inside a `<script>` block.
pub fn js_literal<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value)
        .unwrap_or_else(|_| "null".to_string())
        .replace("</", "<\\/")
}

// ============================================================================
// Header and Card
// ============================================================================

pub fn page_header(title: &str, subtitle: &str) -> String {
    format!(
        r#"<header class="page-header">
            <h1>{}</h1>
            <p>{}</p>
        </header>"#,
        html_escape(title),
        html_escape(subtitle)
    )
}

/// Card with a title row. `action` is raw HTML placed opposite the title.
pub fn card(title: &str, action: &str, body: &str) -> String {
    format!(
        r#"<section class="card">
            <div class="card-header">
                <h2>{title}</h2>
                {action}
            </div>
            <div class="card-content">
                {body}
            </div>
        </section>"#,
        title = html_escape(title),
        action = action,
        body = body,
    )
}

// ============================================================================
// Base HTML Template
// ============================================================================

pub fn base_html(title: &str, content: &str, script: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{STYLE}</style>
</head>
<body>
    <div class="container">
        {content}
    </div>
    <script>
    // --- Toast notification (unobtrusive) ---
    let _toastEl = null;
    let _toastTimer = null;
    function showToast(msg, duration) {{
        if (!_toastEl) {{
            _toastEl = document.createElement('div');
            _toastEl.className = 'toast';
            _toastEl.setAttribute('role', 'status');
            document.body.appendChild(_toastEl);
        }}
        _toastEl.textContent = msg;
        _toastEl.classList.add('visible');
        clearTimeout(_toastTimer);
        _toastTimer = setTimeout(() => _toastEl.classList.remove('visible'), duration || 4000);
    }}
    {script}
    </script>
</body>
</html>"#,
        title = html_escape(title),
        content = content,
        script = script,
    )
}
