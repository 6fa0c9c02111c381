//! Translation resolver: localized string and list lookups with fallback.
//!
//! The resolver never fails. A missing or mis-typed translation degrades to
//! a defined sentinel (the key path itself for strings, an empty list for
//! lists) so a gap in a translation document renders as visible, greppable
//! text instead of crashing page generation.

use crate::language::Language;
use crate::tree::{TranslationNode, TranslationTree};
use tracing::{debug, warn};

/// The pre-loaded translation documents for every declared language.
///
/// Built once at the start of a site build and never mutated; parallel page
/// renders may share it freely.
pub struct Translations {
    spanish: TranslationTree,
    english: TranslationTree,
}

impl Translations {
    /// Assemble from one already-built tree per language.
    pub fn new(spanish: TranslationTree, english: TranslationTree) -> Self {
        Translations { spanish, english }
    }

    /// Parse a pair of JSON documents, one per language.
    ///
    /// Reading the files is the build pipeline's job; this is the boundary
    /// where a malformed document fails, so lookups never see one.
    pub fn from_json(spanish: &str, english: &str) -> Result<Self, serde_json::Error> {
        Ok(Translations::new(
            serde_json::from_str(spanish)?,
            serde_json::from_str(english)?,
        ))
    }

    /// The whole tree for `lang`, for bulk consumption (e.g., handing a
    /// page template every string it needs at once).
    pub fn tree(&self, lang: Language) -> &TranslationTree {
        match lang {
            Language::Spanish => &self.spanish,
            Language::English => &self.english,
        }
    }

    /// Resolve a dot-separated key path to a localized string.
    ///
    /// The path is looked up in `lang`'s tree first. Any miss (an absent
    /// segment, a walk through a leaf, or a terminal that is not a string)
    /// triggers one retry of the same path against the default language's
    /// tree. If that also misses (or `lang` already is the default), the
    /// key path itself is returned.
    pub fn resolve(&self, lang: Language, key_path: &str) -> String {
        if let Some(text) = lookup_text(self.tree(lang), key_path) {
            return text.to_string();
        }

        if !lang.is_default() {
            if let Some(text) = lookup_text(self.tree(Language::DEFAULT), key_path) {
                debug!(
                    key_path,
                    requested = lang.code(),
                    "translation missing, using default language"
                );
                return text.to_string();
            }
        }

        warn!(
            key_path,
            requested = lang.code(),
            "translation missing in every tree, rendering key path"
        );
        key_path.to_string()
    }

    /// Resolve a dot-separated key path to a localized list of strings.
    ///
    /// Unlike [`Translations::resolve`] there is no fallback: the lookup
    /// runs against `lang`'s tree only, and a failed walk or a terminal
    /// that is not a list yields an empty list.
    pub fn resolve_list(&self, lang: Language, key_path: &str) -> Vec<String> {
        match self.tree(lang).lookup(key_path).and_then(TranslationNode::as_list) {
            Some(items) => items.to_vec(),
            None => Vec::new(),
        }
    }
}

/// Single-tree walk that only accepts a terminal string.
fn lookup_text<'a>(tree: &'a TranslationTree, key_path: &str) -> Option<&'a str> {
    tree.lookup(key_path).and_then(TranslationNode::as_text)
}
