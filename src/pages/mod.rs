//! `config.js` generation and HTML page integration.
//!
//! The store's HTML pages read the configuration from a `window.APP_CONFIG`
//! global declared by a generated `config.js`. This module renders that
//! artifact from a validated [`AppConfig`] and rewires existing pages to it:
//! adds the script include and drops hard-coded backend URLs.

mod error;

pub use error::PagesError;

use once_cell::sync::Lazy;
use regex::Regex;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::config::AppConfig;

/// HTML pages of the store front-end, relative to the site root.
const STORE_PAGES: &[&str] = &[
    "index.html",
    "login.html",
    "profile.html",
    "order-history.html",
    "thank-you.html",
    "admin.html",
];

const CONFIG_SCRIPT_TAG: &str = "    <script src=\"config.js\"></script>\n";

/// Matches leftover hard-coded backend constants from the replit era,
/// e.g. `const backendBaseUrl = 'https://store.owner.repl.co';`.
static HARDCODED_BACKEND_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"const backendBaseUrl\s*=\s*['"]https://[^'"]+repl[^'"]*['"];"#)
        .expect("hard-coded backend pattern is valid")
});

const BACKEND_FROM_CONFIG: &str = "const backendBaseUrl = window.APP_CONFIG.BACKEND_URL;";

/// Render the `config.js` artifact for the given configuration.
///
/// The script declares one `CONFIG` object with the field names the pages
/// expect and assigns it to the `window.APP_CONFIG` global. Pages must
/// include it before any script that reads the global.
pub fn render_config_js(config: &AppConfig) -> String {
    format!(
        r#"/**
 * {name} - Frontend Configuration
 *
 * Generated by karyana-config. Do not edit by hand; change the YAML
 * config (or STORE_* environment variables) and re-run --emit instead.
 */

const CONFIG = {{
    BACKEND_URL: {backend_url},
    DELIVERY_FEE: {delivery_fee},
    FREE_DELIVERY_THRESHOLD: {free_delivery_threshold},
    STORE_NAME: {store_name},
    STORE_LOCATION: {store_location},
    SUPPORT_PHONE: {support_phone},
    SUPPORT_EMAIL: {support_email}
}};

// Make config available globally
window.APP_CONFIG = CONFIG;
"#,
        name = config.store_name,
        backend_url = js_string(&config.backend_url),
        delivery_fee = config.delivery_fee,
        free_delivery_threshold = config.free_delivery_threshold,
        store_name = js_string(&config.store_name),
        store_location = js_string(&config.store_location),
        support_phone = js_string(&config.support_phone),
        support_email = js_string(&config.support_email),
    )
}

/// Write the rendered `config.js` to the given path.
pub fn write_config_js(config: &AppConfig, path: &Path) -> Result<(), PagesError> {
    fs::write(path, render_config_js(config)).map_err(|source| PagesError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "config.js written");
    Ok(())
}

/// Rewire a single HTML page to the generated configuration.
///
/// Inserts the `config.js` script tag before `</head>` when the page does
/// not include it yet, and replaces hard-coded backend URL constants with a
/// read of `window.APP_CONFIG.BACKEND_URL`. Returns whether the file
/// changed; a second run is a no-op.
pub fn update_html_file(path: &Path) -> Result<bool, PagesError> {
    let content = fs::read_to_string(path).map_err(|source| PagesError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let mut updated = content.clone();

    if !updated.contains("config.js") {
        updated = updated.replacen("</head>", &format!("{}</head>", CONFIG_SCRIPT_TAG), 1);
    }

    if HARDCODED_BACKEND_RE.is_match(&updated) {
        updated = HARDCODED_BACKEND_RE
            .replace_all(&updated, BACKEND_FROM_CONFIG)
            .into_owned();
    }

    if updated == content {
        debug!(path = %path.display(), "no changes needed");
        return Ok(false);
    }

    fs::write(path, updated).map_err(|source| PagesError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    info!(path = %path.display(), "page updated");
    Ok(true)
}

/// Outcome of an [`update_pages`] pass.
#[derive(Debug, Default)]
pub struct UpdateSummary {
    /// Pages that were rewritten.
    pub updated: Vec<String>,
    /// Pages that already read the configuration.
    pub unchanged: Vec<String>,
    /// Known pages not present under the site root.
    pub missing: Vec<String>,
}

/// Rewire every known store page under the given site root.
///
/// Missing pages are skipped with a warning rather than failing the pass,
/// since not every deployment ships all pages.
pub fn update_pages(site_root: &Path) -> Result<UpdateSummary, PagesError> {
    let mut summary = UpdateSummary::default();

    for page in STORE_PAGES {
        let path = site_root.join(page);
        if !path.exists() {
            warn!(page = %page, "page not found, skipping");
            summary.missing.push(page.to_string());
            continue;
        }

        if update_html_file(&path)? {
            summary.updated.push(page.to_string());
        } else {
            summary.unchanged.push(page.to_string());
        }
    }

    info!(
        updated = summary.updated.len(),
        unchanged = summary.unchanged.len(),
        missing = summary.missing.len(),
        "page update pass finished"
    );

    Ok(summary)
}

/// Escape a value as a JS string literal (JSON escaping is valid JS).
fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}
