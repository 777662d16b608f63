use crate::i18n::locales::load_translations;
use countyguess_game::Locale;
use serde_json::Value;
use std::cell::RefCell;

pub(crate) const LOCALE_STORAGE_KEY: &str = "countyguess.locale";

pub struct I18nBundle {
    pub locale: Locale,
    pub translations: Value,
    pub fallback: Value,
}

fn empty_table() -> Value {
    Value::Object(serde_json::Map::new())
}

fn build_bundle(locale: Locale) -> I18nBundle {
    let fallback = load_translations(Locale::En).unwrap_or_else(empty_table);
    let translations = load_translations(locale).unwrap_or_else(|| fallback.clone());
    I18nBundle {
        locale,
        translations,
        fallback,
    }
}

fn saved_locale() -> Locale {
    #[cfg(all(not(test), target_arch = "wasm32"))]
    {
        crate::dom::local_storage()
            .ok()
            .and_then(|storage| storage.get_item(LOCALE_STORAGE_KEY).ok().flatten())
            .and_then(|code| Locale::from_code(&code))
            .unwrap_or_default()
    }

    #[cfg(any(test, not(target_arch = "wasm32")))]
    {
        Locale::default()
    }
}

thread_local! {
    static CURRENT: RefCell<I18nBundle> = RefCell::new(build_bundle(saved_locale()));
}

pub(super) fn with_bundle<R>(f: impl FnOnce(&I18nBundle) -> R) -> R {
    CURRENT.with(|cell| f(&cell.borrow()))
}

/// Switch the active string table.
///
/// Updates the `<html lang>` attribute and persists the choice to
/// localStorage so the next visit starts in the same language.
pub fn set_locale(locale: Locale) {
    CURRENT.with(|cell| cell.replace(build_bundle(locale)));
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(el) = crate::dom::document().and_then(|doc| doc.document_element())
        {
            let _ = el.set_attribute("lang", locale.code());
        }
        if let Ok(storage) = crate::dom::local_storage() {
            let _ = storage.set_item(LOCALE_STORAGE_KEY, locale.code());
        }
    }
}

/// The currently active locale.
#[must_use]
pub fn current_locale() -> Locale {
    with_bundle(|bundle| bundle.locale)
}
