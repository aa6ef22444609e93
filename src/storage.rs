//! Browser Local Storage Helpers
//!
//! Single-threaded access; concurrent tabs are not coordinated (last write
//! wins).

/// Theme mode, `"light"` or `"dark"`.
pub const THEME_KEY: &str = "theme";
/// Optional accent color applied as a CSS custom property.
pub const ACCENT_KEY: &str = "accent-color";
/// Legacy login flag still consulted by the result page.
pub const IS_LOGGED_IN_KEY: &str = "isLoggedIn";
/// Legacy serialized user record written by older clients.
pub const USER_KEY: &str = "user";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn get(key: &str) -> Option<String> {
    local_storage().and_then(|s| s.get_item(key).ok().flatten())
}

pub fn set(key: &str, value: &str) {
    if let Some(s) = local_storage() {
        let _ = s.set_item(key, value);
    }
}

pub fn remove(key: &str) {
    if let Some(s) = local_storage() {
        let _ = s.remove_item(key);
    }
}
