use countyguess_game::Locale;
use once_cell::sync::Lazy;
use serde_json::Value;

#[derive(Clone, Copy, PartialEq, Eq)]
pub struct LocaleMeta {
    pub locale: Locale,
    pub name: &'static str,
}

pub const LOCALE_META: &[LocaleMeta] = &[
    LocaleMeta {
        locale: Locale::En,
        name: "English",
    },
    LocaleMeta {
        locale: Locale::Ga,
        name: "Gaeilge",
    },
];

static EN: Lazy<Option<Value>> =
    Lazy::new(|| serde_json::from_str(include_str!("../../i18n/en.json")).ok());
static GA: Lazy<Option<Value>> =
    Lazy::new(|| serde_json::from_str(include_str!("../../i18n/ga.json")).ok());

/// Supported locales with their native names.
#[must_use]
pub const fn locales() -> &'static [LocaleMeta] {
    LOCALE_META
}

pub fn load_translations(locale: Locale) -> Option<Value> {
    match locale {
        Locale::En => (*EN).clone(),
        Locale::Ga => (*GA).clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_locale_table_parses() {
        for meta in locales() {
            let table = load_translations(meta.locale).expect("table parses");
            assert!(table.is_object(), "{}", meta.name);
        }
    }
}
