//! Language type: the closed set of locales the site is published in.
//!
//! `Language` is a true two-member enum rather than an open code-carrying
//! struct. Every `match` on it is total, so declaring a third language stops
//! compiling until each decision point (most importantly
//! [`Language::alternate`]) has been revisited.

use crate::registry::{LanguageConfig, LanguageRegistry};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A language the site is published in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Spanish: the default language, served at the site root and used as
    /// the fallback tree for lookups.
    Spanish,
    /// English: the alternate language, served under `/en`.
    English,
}

/// Error returned when a code does not name a declared language.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown language code: '{code}'")]
pub struct ParseLanguageError {
    /// The code that failed to parse
    pub code: String,
}

impl Language {
    /// The default language. Lookups in any other language fall back here.
    pub const DEFAULT: Language = Language::Spanish;

    /// Every declared language, in registry declaration order.
    pub const ALL: [Language; 2] = [Language::Spanish, Language::English];

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code names a declared language
    /// * `Err(ParseLanguageError)` otherwise
    pub fn from_code(code: &str) -> Result<Language, ParseLanguageError> {
        Language::ALL
            .into_iter()
            .find(|lang| lang.code() == code)
            .ok_or_else(|| ParseLanguageError {
                code: code.to_string(),
            })
    }

    /// The ISO 639-1 language code (e.g., "es", "en").
    pub fn code(&self) -> &'static str {
        match self {
            Language::Spanish => "es",
            Language::English => "en",
        }
    }

    /// The full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the variant's code is missing from the registry, which
    /// would mean the enum and the registry have drifted apart.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code())
            .expect("every Language variant is declared in the registry")
    }

    /// The English name of the language (e.g., "Spanish").
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// The native name of the language (e.g., "Español").
    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    /// Whether this is the default language.
    pub fn is_default(&self) -> bool {
        self.config().is_default
    }

    /// The other member of the two-language set.
    ///
    /// Total match: a third variant will not compile until this is decided
    /// for it. An involution: `lang.alternate().alternate() == lang`.
    pub fn alternate(&self) -> Language {
        match self {
            Language::Spanish => Language::English,
            Language::English => Language::Spanish,
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = ParseLanguageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Language::from_code(s)
    }
}
