use eisenmatrix_core::{quadrant_descriptors, Locale, Quadrant};
use serde_json::Value;
use std::collections::BTreeSet;

fn key_paths(value: &Value, prefix: &str, out: &mut BTreeSet<String>) {
    if let Value::Object(map) = value {
        for (key, child) in map {
            let path = format!("{prefix}{key}");
            key_paths(child, &format!("{path}."), out);
            out.insert(path);
        }
    }
}

fn keys_of(locale: Locale) -> BTreeSet<String> {
    let value = serde_json::to_value(locale.translations()).unwrap();
    let mut keys = BTreeSet::new();
    key_paths(&value, "", &mut keys);
    keys
}

#[test]
fn dictionaries_share_identical_key_structure() {
    let english = keys_of(Locale::En);
    assert!(english.contains("appTitle"));
    assert!(english.contains("quadrants.urgent-important.title"));
    assert!(english.contains("quadrants.not-urgent-not-important.subtitle"));

    for locale in [Locale::Ru, Locale::Zh] {
        assert_eq!(keys_of(locale), english, "key mismatch for {locale}");
    }
}

#[test]
fn every_string_is_non_empty() {
    fn assert_leaves(value: &Value, locale: Locale) {
        match value {
            Value::Object(map) => map.values().for_each(|child| assert_leaves(child, locale)),
            Value::String(text) => assert!(!text.trim().is_empty(), "blank string in {locale}"),
            other => panic!("unexpected value {other} in {locale}"),
        }
    }

    for locale in Locale::ALL {
        assert_leaves(&serde_json::to_value(locale.translations()).unwrap(), locale);
    }
}

#[test]
fn dictionaries_are_actually_localized() {
    let en = Locale::En.translations();
    let ru = Locale::Ru.translations();
    let zh = Locale::Zh.translations();

    assert_eq!(en.app_title, "Eisenhower Matrix");
    assert_eq!(ru.app_title, "Матрица Эйзенхауэра");
    assert_eq!(zh.app_title, "艾森豪威尔矩阵");
    assert_ne!(en.quadrants.urgent_important, ru.quadrants.urgent_important);
}

#[test]
fn locale_tags_resolve_by_prefix() {
    assert_eq!(Locale::from_tag("ru-RU"), Locale::Ru);
    assert_eq!(Locale::from_tag("zh_TW.UTF-8"), Locale::Zh);
    assert_eq!(Locale::from_tag("fr-FR"), Locale::En);
    assert_eq!(Locale::from_tag("  "), Locale::En);
}

#[test]
fn quadrant_descriptors_follow_display_order_and_locale() {
    let descriptors = quadrant_descriptors(Locale::Ru.translations());

    let order: Vec<Quadrant> = descriptors.iter().map(|descriptor| descriptor.id).collect();
    assert_eq!(order, Quadrant::ALL.to_vec());
    assert_eq!(descriptors[0].title, "Сделать сейчас");
    assert_eq!(descriptors[3].subtitle, "Не срочно и не важно");
    assert_eq!(descriptors[1].bg_color, "bg-quadrant-not-urgent-important");
}
