//! Theme Preference
//!
//! Light/dark mode persisted in local storage and mirrored onto the
//! document root as Tailwind's `dark` class. Provided once at startup via
//! context so no component reads storage ad hoc.

use leptos::prelude::*;

use crate::storage;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_class(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn from_class(v: &str) -> Option<Self> {
        match v {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Theme::Light => "\u{1F319}",
            Theme::Dark => "\u{2600}\u{FE0F}",
        }
    }
}

/// App-wide theme handle provided via context.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    mode: ReadSignal<Theme>,
    set_mode: WriteSignal<Theme>,
}

impl ThemeContext {
    pub fn mode(&self) -> Theme {
        self.mode.get()
    }

    pub fn toggle(&self) {
        self.set_mode.update(|m| *m = m.toggle());
    }
}

/// Read the stored preference, provide the context, and keep document class
/// and storage in sync with every change.
pub fn provide_theme() {
    let initial = storage::get(storage::THEME_KEY)
        .and_then(|v| Theme::from_class(&v))
        .unwrap_or_default();
    let (mode, set_mode) = signal(initial);

    Effect::new(move |_| {
        let theme = mode.get();
        apply_to_document(theme);
        storage::set(storage::THEME_KEY, theme.as_class());
    });

    // Accent color has no in-app mutator; honor a stored value at startup.
    if let Some(accent) = storage::get(storage::ACCENT_KEY) {
        apply_accent(&accent);
    }

    provide_context(ThemeContext { mode, set_mode });
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

fn apply_to_document(theme: Theme) {
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    let class_list = el.class_list();
    let _ = match theme {
        Theme::Dark => class_list.add_1("dark"),
        Theme::Light => class_list.remove_1("dark"),
    };
}

fn apply_accent(color: &str) {
    use wasm_bindgen::JsCast;
    let Some(el) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };
    if let Some(html) = el.dyn_ref::<web_sys::HtmlElement>() {
        let _ = html.style().set_property("--accent", color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_double_toggle_is_identity() {
        assert_eq!(Theme::Light.toggle().toggle(), Theme::Light);
        assert_eq!(Theme::Dark.toggle().toggle(), Theme::Dark);
    }

    #[test]
    fn test_class_round_trip() {
        for theme in [Theme::Light, Theme::Dark] {
            assert_eq!(Theme::from_class(theme.as_class()), Some(theme));
        }
        assert_eq!(Theme::from_class("solarized"), None);
    }

    #[test]
    fn test_default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }
}
