//! Reads optional configuration overrides embedded in the page.

use folio_core::config::SiteConfig;
use web_sys::Document;

/// `<script type="application/json" id="site-config">{ ... }</script>`
pub const CONFIG_ELEMENT_ID: &str = "site-config";

/// Defaults merged with the page's JSON override, if any. A malformed override is
/// logged and ignored.
pub fn load(document: &Document) -> SiteConfig {
    let Some(element) = document.get_element_by_id(CONFIG_ELEMENT_ID) else {
        return SiteConfig::default();
    };
    let json = element.text_content().unwrap_or_default();
    match SiteConfig::from_json(&json) {
        Ok(config) => {
            log::info!("config: loaded overrides from #{CONFIG_ELEMENT_ID}");
            config
        }
        Err(err) => {
            log::warn!("config: ignoring #{CONFIG_ELEMENT_ID}: {err:#}");
            SiteConfig::default()
        }
    }
}
