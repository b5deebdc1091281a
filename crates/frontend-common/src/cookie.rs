//! The `token` cookie: the one piece of state this client persists.
//!
//! The session token is carried as a plain cookie so a page reload can
//! re-verify the session. Parsing is split out as a pure function so it can
//! be unit-tested off the browser.

use crate::config::AuthConfig;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

/// Extract a cookie value from a `document.cookie` header string.
pub fn find_cookie(header: &str, name: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name).then(|| value.to_string())
    })
}

fn html_document() -> Option<HtmlDocument> {
    web_sys::window()?.document()?.dyn_into::<HtmlDocument>().ok()
}

/// Read a cookie by name from the live document.
pub fn get(name: &str) -> Option<String> {
    let header = html_document()?.cookie().ok()?;
    find_cookie(&header, name)
}

/// Set a cookie with the session-cookie attributes.
pub fn set(name: &str, value: &str, max_age_secs: u32) {
    if let Some(document) = html_document() {
        let cookie =
            format!("{name}={value}; path=/; max-age={max_age_secs}; secure; samesite=strict");
        if document.set_cookie(&cookie).is_err() {
            log::warn!("failed to set cookie {name}");
        }
    }
}

/// Delete a cookie by expiring it.
pub fn delete(name: &str) {
    if let Some(document) = html_document() {
        let cookie = format!("{name}=; expires=Thu, 01 Jan 1970 00:00:00 UTC; path=/");
        if document.set_cookie(&cookie).is_err() {
            log::warn!("failed to delete cookie {name}");
        }
    }
}

/// Read the session token cookie.
pub fn session_token() -> Option<String> {
    get(AuthConfig::TOKEN_COOKIE)
}

#[cfg(test)]
mod tests {
    use super::find_cookie;

    #[test]
    fn finds_token_among_other_cookies() {
        let header = "theme=dark; token=abc123; refreshToken=r-456";
        assert_eq!(find_cookie(header, "token"), Some("abc123".to_string()));
        assert_eq!(find_cookie(header, "refreshToken"), Some("r-456".to_string()));
    }

    #[test]
    fn returns_none_when_absent() {
        assert_eq!(find_cookie("theme=dark", "token"), None);
        assert_eq!(find_cookie("", "token"), None);
    }

    #[test]
    fn does_not_match_name_prefixes() {
        let header = "tokenish=nope; token=yes";
        assert_eq!(find_cookie(header, "token"), Some("yes".to_string()));
    }

    #[test]
    fn tolerates_whitespace_and_empty_values() {
        assert_eq!(find_cookie("  token=abc ", "token"), Some("abc ".to_string()));
        assert_eq!(find_cookie("token=", "token"), Some(String::new()));
    }
}
