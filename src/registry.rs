//! Language registry: single source of truth for the supported languages.
//!
//! The registry holds the closed two-language set the site is published in,
//! together with the display metadata templates need (language switchers,
//! `lang` attributes, hreflang links). It uses a singleton pattern with
//! `OnceLock` to ensure thread-safe initialization and access.

use std::sync::OnceLock;

/// Configuration for a supported language.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "es", "en")
    pub code: &'static str,

    /// English name of the language (e.g., "Spanish", "English")
    pub name: &'static str,

    /// Native name of the language (e.g., "Español", "English")
    pub native_name: &'static str,

    /// Whether this is the default language (exactly one entry is).
    /// The default language's tree is the authoritative fallback for lookups
    /// and its pages live at the site root, unprefixed.
    pub is_default: bool,
}

/// Global language registry singleton.
///
/// Initialized once on first access and immutable thereafter.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: declared_languages(),
        })
    }

    /// Get a language configuration by its code.
    ///
    /// # Returns
    /// * `Some(&LanguageConfig)` if the language is declared
    /// * `None` otherwise
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Get all declared languages, in declaration order.
    pub fn list_all(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().collect()
    }

    /// Get the default language configuration.
    ///
    /// # Panics
    /// Panics if no default language is found or if multiple default
    /// languages are declared (this indicates a configuration error).
    pub fn default_language(&self) -> &LanguageConfig {
        let defaults: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_default)
            .collect();

        match defaults.len() {
            0 => panic!("No default language found in registry"),
            1 => defaults[0],
            _ => panic!("Multiple default languages found in registry"),
        }
    }

    /// Check if a language code names a declared language.
    pub fn is_declared(&self, code: &str) -> bool {
        self.get_by_code(code).is_some()
    }
}

/// The closed language set.
///
/// The site is published in Spanish at the root and English under `/en`.
fn declared_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "es",
            name: "Spanish",
            native_name: "Español",
            is_default: true,
        },
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_default: false,
        },
    ]
}
