//! Integration tests for the site-i18n crate.
//!
//! These tests drive the public API the way a build pipeline would: parse a
//! pair of JSON translation documents, then resolve strings, lists, and
//! localized paths for both languages.

use site_i18n::{
    language_from_url, localized_path, Language, LanguageRegistry, TranslationNode, Translations,
};

// ==================== Test Helpers ====================

/// Spanish (default) document, shaped like the site's real locale files.
const SPANISH_DOC: &str = r#"{
    "nav": {
        "home": "Inicio",
        "about": "Sobre mí",
        "projects": "Proyectos"
    },
    "hero": {
        "greeting": "¡Hola! Soy",
        "cta": { "contact": "Contáctame" }
    },
    "typing": {
        "words": ["desarrollador", "escritor", "fotógrafo"]
    },
    "footer": {
        "rights": "Todos los derechos reservados"
    }
}"#;

/// English document, deliberately missing `footer.rights`.
const ENGLISH_DOC: &str = r#"{
    "nav": {
        "home": "Home",
        "about": "About me",
        "projects": "Projects"
    },
    "hero": {
        "greeting": "Hi! I'm",
        "cta": { "contact": "Contact me" }
    },
    "typing": {
        "words": ["developer", "writer", "photographer"]
    }
}"#;

fn load_translations() -> Translations {
    Translations::from_json(SPANISH_DOC, ENGLISH_DOC).expect("Documents should parse")
}

// ==================== String Resolution Tests ====================

#[test]
fn test_resolves_strings_for_each_language() {
    let translations = load_translations();

    assert_eq!(translations.resolve(Language::Spanish, "nav.home"), "Inicio");
    assert_eq!(translations.resolve(Language::English, "nav.home"), "Home");
    assert_eq!(
        translations.resolve(Language::English, "hero.cta.contact"),
        "Contact me"
    );
}

#[test]
fn test_missing_english_key_falls_back_to_spanish() {
    let translations = load_translations();

    assert_eq!(
        translations.resolve(Language::English, "footer.rights"),
        "Todos los derechos reservados"
    );
}

#[test]
fn test_key_missing_everywhere_renders_as_itself() {
    let translations = load_translations();

    assert_eq!(
        translations.resolve(Language::English, "hero.subtitle"),
        "hero.subtitle"
    );
    assert_eq!(
        translations.resolve(Language::Spanish, "hero.subtitle"),
        "hero.subtitle"
    );
}

#[test]
fn test_list_valued_key_is_not_a_string() {
    let translations = load_translations();

    // "typing.words" is a list in both documents, so the string lookup
    // misses twice and degrades to the key path
    assert_eq!(
        translations.resolve(Language::English, "typing.words"),
        "typing.words"
    );
}

// ==================== List Resolution Tests ====================

#[test]
fn test_resolves_lists_without_fallback() {
    let translations = load_translations();

    assert_eq!(
        translations.resolve_list(Language::Spanish, "typing.words"),
        ["desarrollador", "escritor", "fotógrafo"]
    );
    assert_eq!(
        translations.resolve_list(Language::English, "typing.words"),
        ["developer", "writer", "photographer"]
    );
}

#[test]
fn test_list_lookup_on_string_key_is_empty() {
    let translations = load_translations();

    assert!(translations
        .resolve_list(Language::English, "nav.home")
        .is_empty());
}

#[test]
fn test_list_lookup_does_not_use_default_tree() {
    let translations = load_translations();

    // Present in the Spanish document only; the English list lookup must
    // come back empty rather than borrowing the Spanish value
    assert!(translations
        .resolve_list(Language::English, "footer.rights")
        .is_empty());
}

// ==================== Bulk Tree Access Tests ====================

#[test]
fn test_whole_tree_access() {
    let translations = load_translations();
    let english = translations.tree(Language::English);

    assert_eq!(
        english
            .lookup("nav.projects")
            .and_then(TranslationNode::as_text),
        Some("Projects")
    );
    assert!(english.lookup("footer.rights").is_none());
}

// ==================== Path & Language Tests ====================

#[test]
fn test_localized_paths_for_site_navigation() {
    assert_eq!(localized_path(Language::Spanish, "/about"), "/about");
    assert_eq!(localized_path(Language::English, "/about"), "/en/about");
    assert_eq!(localized_path(Language::Spanish, "about"), "/about");
    assert_eq!(localized_path(Language::Spanish, ""), "/");
    assert_eq!(localized_path(Language::English, ""), "/en/");
}

#[test]
fn test_language_detection_from_request_paths() {
    assert_eq!(language_from_url("/en/about"), Language::English);
    assert_eq!(language_from_url("/about"), Language::Spanish);
    assert_eq!(
        language_from_url("https://example.com/en/projects?tab=web"),
        Language::English
    );
}

#[test]
fn test_language_switcher_round_trip() {
    // A language switcher toggles to the alternate language and links to
    // the equivalent page there
    let current = language_from_url("/en/about");
    let other = current.alternate();

    assert_eq!(other, Language::Spanish);
    assert_eq!(localized_path(other, "/about"), "/about");
    assert_eq!(other.alternate(), current);
}

#[test]
fn test_registry_surface_for_language_switcher() {
    let registry = LanguageRegistry::get();
    let all = registry.list_all();

    assert_eq!(all.len(), Language::ALL.len());
    for (config, lang) in all.iter().zip(Language::ALL) {
        assert_eq!(config.code, lang.code());
        assert_eq!(config.native_name, lang.native_name());
    }
}

// ==================== Property Tests ====================

mod properties {
    use super::*;
    use proptest::prelude::*;
    use site_i18n::TranslationTree;

    fn any_language() -> impl Strategy<Value = Language> {
        prop_oneof![Just(Language::Spanish), Just(Language::English)]
    }

    proptest! {
        #[test]
        fn alternate_is_an_involution(lang in any_language()) {
            prop_assert_eq!(lang.alternate().alternate(), lang);
            prop_assert_ne!(lang.alternate(), lang);
        }

        #[test]
        fn localized_path_normalizes_exactly_one_leading_slash(
            lang in any_language(),
            path in "[a-z0-9/_-]{0,24}",
        ) {
            let normalized = if path.starts_with('/') {
                path.clone()
            } else {
                format!("/{}", path)
            };

            let localized = localized_path(lang, &path);
            if lang.is_default() {
                prop_assert_eq!(localized, normalized);
            } else {
                prop_assert_eq!(localized, format!("/{}{}", lang.code(), normalized));
            }
        }

        #[test]
        fn unknown_key_paths_resolve_to_themselves(
            lang in any_language(),
            key_path in "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}",
        ) {
            let translations =
                Translations::new(TranslationTree::new(), TranslationTree::new());
            prop_assert_eq!(translations.resolve(lang, &key_path), key_path);
        }

        #[test]
        fn unknown_key_paths_resolve_to_empty_lists(
            lang in any_language(),
            key_path in "[a-z]{1,6}(\\.[a-z]{1,6}){0,3}",
        ) {
            let translations =
                Translations::new(TranslationTree::new(), TranslationTree::new());
            prop_assert!(translations.resolve_list(lang, &key_path).is_empty());
        }

        #[test]
        fn first_path_segment_decides_the_language(
            rest in "[a-z]{0,10}",
        ) {
            prop_assert_eq!(
                language_from_url(&format!("/en/{}", rest)),
                Language::English
            );
            prop_assert_eq!(
                language_from_url(&format!("/es/{}", rest)),
                Language::Spanish
            );
        }
    }
}
