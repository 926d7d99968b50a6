//! CSS styles for the embed page.
//!
//! Contains the main STYLE constant with all CSS for the web interface.

// ============================================================================
// CSS Styles
// ============================================================================

pub const STYLE: &str = r#"
/* Solarized Light Theme */
:root {
    --base03: #002b36;
    --base02: #073642;
    --base01: #586e75;
    --base00: #657b83;
    --base1: #93a1a1;
    --base2: #eee8d5;
    --base3: #fdf6e3;

    --red: #dc322f;
    --blue: #268bd2;
    --cyan: #2aa198;

    --bg: var(--base3);
    --fg: var(--base00);
    --muted: var(--base1);
    --border: var(--base2);
    --link: var(--blue);
    --link-hover: var(--cyan);
    --accent: var(--base2);
}

* { box-sizing: border-box; margin: 0; padding: 0; }

body {
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, "Helvetica Neue", Arial, sans-serif;
    line-height: 1.6;
    color: var(--fg);
    background: var(--bg);
    min-height: 100vh;
}

.container {
    max-width: 80rem;
    margin: 0 auto;
    padding: 1rem;
    display: flex;
    flex-direction: column;
    gap: 1.5rem;
}

@media (min-width: 768px) {
    .container { padding: 1.5rem; }
}

a { color: var(--link); text-decoration: none; }
a:hover { color: var(--link-hover); text-decoration: underline; }

.page-header h1 {
    font-size: 1.5rem;
    font-weight: 600;
    letter-spacing: -0.01em;
    color: var(--base02);
}

.page-header p { font-size: 0.875rem; color: var(--muted); }

.card {
    border: 1px solid var(--border);
    border-radius: 8px;
    background: var(--bg);
    box-shadow: 0 1px 3px rgba(0,0,0,0.06);
    animation: card-enter 0.4s ease-out;
}

@keyframes card-enter {
    from { opacity: 0; transform: translateY(20px); }
    to { opacity: 1; transform: translateY(0); }
}

.card-header {
    display: flex;
    justify-content: space-between;
    align-items: center;
    padding: 1.5rem 1.5rem 0.75rem;
}

.card-header h2 { font-size: 1.125rem; font-weight: 600; color: var(--base02); }
.card-header a { font-size: 0.85rem; }

.card-content { padding: 0 1.5rem 1.5rem; }

.embed-frame {
    position: relative;
    width: 100%;
    overflow: hidden;
    border: 1px solid var(--border);
    border-radius: 6px;
    background: rgba(238, 232, 213, 0.2);
}

/* Hide the viewer's own footer bar */
.embed-frame iframe {
    display: block;
    width: 100%;
    clip-path: inset(0 0 40px 0);
    margin-bottom: -40px;
}

.toast {
    position: fixed;
    bottom: 60px; left: 50%; transform: translateX(-50%);
    z-index: 4000;
    background: var(--base02);
    color: var(--base1);
    border: 1px solid var(--border);
    border-left: 3px solid var(--red);
    border-radius: 6px;
    padding: 0.5rem 1rem;
    font-size: 0.82rem;
    box-shadow: 0 4px 16px rgba(0,0,0,0.2);
    pointer-events: none;
    opacity: 0;
    transition: opacity 0.2s;
}
.toast.visible { opacity: 1; }
"#;
