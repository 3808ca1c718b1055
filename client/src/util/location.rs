//! URL helpers.

#[cfg(test)]
#[path = "location_test.rs"]
mod location_test;

const RESET_PREFIX: &str = "/reset-password/";

/// Token from a password-reset link path (`/reset-password/{token}`).
pub fn reset_token_from_path(path: &str) -> Option<String> {
    let token = path.strip_prefix(RESET_PREFIX)?.trim_end_matches('/');
    (!token.is_empty() && !token.contains('/')).then(|| token.to_owned())
}

/// Pathname of the current page; empty outside the browser.
pub fn current_path() -> String {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.location().pathname().ok()).unwrap_or_default()
    }
    #[cfg(not(feature = "csr"))]
    {
        String::new()
    }
}
