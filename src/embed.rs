//! SharePoint embed URL construction.
//!
//! The workbook is shown through one of two Office Online surfaces:
//!
//! - the authenticated `xlembedpreview.aspx` viewer, addressed by WOPI source
//!   and an access token
//! - the public `Doc.aspx` viewer, addressed by document GUID
//!
//! Both carry the same chrome-suppression flags and open on the same sheet
//! and table.

use std::fmt;
use url::form_urlencoded;

// ============================================================================
// Configuration
// ============================================================================

/// Static description of the embedded workbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmbedConfig {
    /// Authenticated embed-preview endpoint.
    pub embed_base_url: &'static str,
    /// WOPI source location of the workbook.
    pub wopi_src: &'static str,
    /// Workbook GUID, without braces.
    pub document_id: &'static str,
    /// Public document-viewer endpoint.
    pub public_embed_url: &'static str,
    pub default_sheet: &'static str,
    pub default_table: &'static str,
    /// Human-readable link for opening the workbook in SharePoint.
    pub share_point_view_url: &'static str,
}

pub const SHAREPOINT_CONFIG: EmbedConfig = EmbedConfig {
    embed_base_url: "https://usc-excel.officeapps.live.com/x/_layouts/xlembedpreview.aspx",
    wopi_src: "https://gurukulweb-my.sharepoint.com/personal/nagaraj_patil_gurukul-wa_org/_vti_bin/wopi.ashx/files/53eb110dd5cd45a287328fcbc06b07dd",
    document_id: "53eb110d-d5cd-45a2-8732-8fcbc06b07dd",
    public_embed_url: "https://gurukulweb-my.sharepoint.com/personal/nagaraj_patil_gurukul-wa_org/_layouts/15/Doc.aspx",
    default_sheet: "All Students",
    default_table: "AllStudentsTable",
    share_point_view_url: "https://gurukulweb-my.sharepoint.com/:x:/g/personal/nagaraj_patil_gurukul-wa_org/EQ0R61PN1aJFhzKPy8BrB90B-uKyLj2NVIHRwoCKVRmfBQ",
};

/// Viewer flags shared by both embed surfaces.
const CHROME_FLAGS: &[(&str, &str)] = &[
    ("wdHideGridlines", "True"),
    ("wdInConfigurator", "True"),
    ("wdHideHeaders", "True"),
    ("wdDownloadButton", "False"),
    ("wdPrint", "False"),
    ("chrome", "False"),
    ("wdEmbedCode", "0"),
    ("wdCommandBar", "False"),
];

/// Flags only the authenticated viewer understands (collaboration, roaming, locale).
const SESSION_FLAGS: &[(&str, &str)] = &[
    ("dchat", "1,1"),
    ("wdenableroaming", "1"),
    ("wdodb", "1"),
    ("wdlcid", "en-US"),
    ("wdorigin", "Other"),
];

// ============================================================================
// Embed URL
// ============================================================================

/// A fully-qualified iframe source. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EmbedUrl(String);

impl EmbedUrl {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for EmbedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for EmbedUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// `ActiveCell` value selecting A1 on the given sheet, e.g. `'All Students'!A1`.
pub fn active_cell(sheet: &str) -> String {
    format!("'{}'!A1", sheet)
}

/// Build the iframe source for `config`.
///
/// A non-empty `access_token` selects the authenticated viewer; `None` and
/// `Some("")` both select the public viewer.
pub fn build_embed_url(config: &EmbedConfig, access_token: Option<&str>) -> EmbedUrl {
    let active_cell = active_cell(config.default_sheet);
    let mut query = form_urlencoded::Serializer::new(String::new());

    let base = match access_token.filter(|t| !t.is_empty()) {
        Some(token) => {
            query
                .append_pair("ui", "en-US")
                .append_pair("rs", "en-US")
                .append_pair("WOPISrc", config.wopi_src)
                .append_pair("access_token", token)
                .append_pair("AllowTyping", "True")
                .extend_pairs(CHROME_FLAGS)
                .extend_pairs(SESSION_FLAGS);
            config.embed_base_url
        }
        None => {
            let sourcedoc = format!("{{{}}}", config.document_id);
            query
                .append_pair("sourcedoc", &sourcedoc)
                .append_pair("action", "embedview")
                .extend_pairs(CHROME_FLAGS);
            config.public_embed_url
        }
    };

    query
        .append_pair("ActiveCell", &active_cell)
        .append_pair("Item", config.default_table);

    EmbedUrl(format!("{}?{}", base, query.finish()))
}

/// [`build_embed_url`] over [`SHAREPOINT_CONFIG`].
pub fn embed_url(access_token: Option<&str>) -> EmbedUrl {
    build_embed_url(&SHAREPOINT_CONFIG, access_token)
}

// ============================================================================
// Tests
// ============================================================================
