//! Internationalization for a bilingual static site.
//!
//! This crate is the lookup layer between pre-loaded translation documents
//! and page templates: localized strings, localized lists, and locale-aware
//! URL paths for a site published in Spanish (the default, at the site
//! root) and English (under `/en`).
//!
//! # Architecture
//!
//! - `registry`: single source of truth for the supported languages and their metadata
//! - `language`: closed `Language` enum over the two-member set
//! - `tree`: typed model of one language's nested translation document
//! - `resolver`: string/list lookups with fallback to the default language
//! - `paths`: locale-aware URL path helpers
//!
//! # Example
//!
//! ```rust,ignore
//! use site_i18n::{language_from_url, localized_path, Language, Translations};
//!
//! let translations = Translations::from_json(&spanish_json, &english_json)?;
//!
//! let lang = language_from_url(&request_path);
//! let greeting = translations.resolve(lang, "hero.greeting");
//! let about = localized_path(lang, "/about");
//! ```
//!
//! Missing translations never fail a build: a string lookup degrades to the
//! key path itself and a list lookup to an empty list, so a gap in a
//! document renders as visible, greppable text.

mod language;
mod paths;
mod registry;
mod resolver;
mod tree;

pub use language::{Language, ParseLanguageError};
pub use paths::{language_from_url, localized_path};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::Translations;
pub use tree::{TranslationNode, TranslationTree};
