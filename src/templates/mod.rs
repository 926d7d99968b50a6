//! HTML templates and styling for the embed page.
//!
//! ## Module Structure
//!
//! - `styles` - CSS constants and theme definitions
//! - `components` - Shared HTML components (header, card, base template)
//! - `page` - The workbook embed page

mod components;
mod page;
mod styles;

pub use components::{base_html, card, html_escape, js_literal, page_header};
pub use page::{render_embed_page, FRAME_HEIGHT, PAGE_TITLE};
pub use styles::STYLE;
