//! Page-shell configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The HTML shell carries deployment settings as
//! `<meta name="CYBERNET_..." content="...">` tags. A bad value is logged and
//! the defaults are used, so a misconfigured page still boots.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use cybernet::config::PortalConfig;

/// CSS selector for the meta tag holding `key`.
pub fn meta_selector(key: &str) -> String {
    format!("meta[name=\"{key}\"]")
}

/// Read config from the page's meta tags (environment on native builds).
pub fn load_config() -> PortalConfig {
    #[cfg(feature = "csr")]
    let result = PortalConfig::from_lookup(meta_content);
    #[cfg(not(feature = "csr"))]
    let result = PortalConfig::from_env();

    result.unwrap_or_else(|err| {
        tracing::warn!(error = %err, "invalid portal config; using defaults");
        PortalConfig::default()
    })
}

#[cfg(feature = "csr")]
fn meta_content(key: &str) -> Option<String> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()?.document()?;
    let element = document.query_selector(&meta_selector(key)).ok()??;
    let meta = element.dyn_into::<web_sys::HtmlMetaElement>().ok()?;
    Some(meta.content())
}
