use crate::i18n::bundle::with_bundle;
use serde_json::Value;
use std::collections::BTreeMap;

#[cfg(target_arch = "wasm32")]
use js_sys::{Array, Intl, Object};

fn get_nested_value<'a>(obj: &'a Value, key: &str) -> Option<&'a Value> {
    key.split('.').try_fold(obj, |current, k| current.get(k))
}

fn plural_category(lang: &str, count: f64) -> String {
    #[cfg(target_arch = "wasm32")]
    {
        let locales = {
            let arr = Array::new();
            arr.push(&wasm_bindgen::JsValue::from_str(lang));
            arr
        };
        let rules = Intl::PluralRules::new(&locales, &Object::new());
        if let Some(selected) = rules.select(count).as_string() {
            return selected;
        }
    }

    let _ = lang;
    if (count - 1.0).abs() < f64::EPSILON {
        "one".to_string()
    } else if count.abs() < f64::EPSILON {
        "zero".to_string()
    } else {
        "other".to_string()
    }
}

fn render_value(value: &Value, lang: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    let mut text = match value {
        Value::String(s) => s.clone(),
        Value::Object(map) => {
            let category = args
                .and_then(|m| m.get("count"))
                .and_then(|count| count.parse::<f64>().ok())
                .map(|count| plural_category(lang, count));
            category
                .and_then(|c| map.get(&c).or_else(|| map.get("other")))
                .or_else(|| map.get("_"))
                .and_then(Value::as_str)
                .map(str::to_string)?
        }
        _ => return None,
    };

    if let Some(args_map) = args {
        for (k, v) in args_map {
            text = text.replace(&format!("{{{{{k}}}}}"), v);
            text = text.replace(&format!("{{{k}}}"), v);
        }
    }
    Some(text)
}

fn resolve(key: &str, args: Option<&BTreeMap<&str, &str>>) -> Option<String> {
    with_bundle(|bundle| {
        let lang = bundle.locale.code();
        get_nested_value(&bundle.translations, key)
            .and_then(|v| render_value(v, lang, args))
            .or_else(|| {
                get_nested_value(&bundle.fallback, key).and_then(|v| render_value(v, lang, args))
            })
    })
}

/// Translate a key to the current language
///
/// Falls back to English, then to the key itself.
#[must_use]
pub fn t(key: &str) -> String {
    tr(key, None)
}

/// Translate a key with variable substitution
///
/// Variables in the translated string use the format {key} or {{key}}. A
/// `count` argument selects a plural form when the entry is an object.
#[must_use]
pub fn tr(key: &str, args: Option<&BTreeMap<&str, &str>>) -> String {
    resolve(key, args).unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plural_selection_defaults() {
        let mut map = serde_json::Map::new();
        map.insert("one".into(), Value::String("one county".into()));
        map.insert("other".into(), Value::String("{count} counties".into()));
        let value = Value::Object(map);
        let mut args = BTreeMap::new();
        args.insert("count", "1");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "one county");
        args.insert("count", "3");
        assert_eq!(render_value(&value, "en", Some(&args)).unwrap(), "3 counties");
    }

    #[test]
    fn plural_object_without_category_uses_default_form() {
        let mut map = serde_json::Map::new();
        map.insert("_".into(), Value::String("{count} contae".into()));
        let value = Value::Object(map);
        let mut args = BTreeMap::new();
        args.insert("count", "2");
        assert_eq!(render_value(&value, "ga", Some(&args)).unwrap(), "2 contae");
        assert!(render_value(&Value::Bool(true), "ga", None).is_none());
    }

    #[test]
    fn interpolation_handles_braced_forms() {
        let value = Value::String("Hello, {name}! {{name}}!".into());
        let mut args = BTreeMap::new();
        args.insert("name", "Tester");
        let resolved = render_value(&value, "en", Some(&args)).unwrap();
        assert_eq!(resolved, "Hello, Tester! Tester!");
    }

    #[test]
    fn missing_keys_echo_the_key() {
        assert_eq!(t("missing.key"), "missing.key");
    }
}
