//! Translation document model.
//!
//! One language's translations form an arbitrarily-nested mapping from
//! string keys to strings, lists of strings, or further mappings. The model
//! is a recursive tagged variant so the shape of a document is checked once,
//! when it is deserialized, and lookups never have to reason about malformed
//! data.

use serde::Deserialize;
use std::collections::HashMap;

/// A single value inside a translation document.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum TranslationNode {
    /// A leaf string, the terminal of a successful string lookup.
    Text(String),
    /// A leaf list of strings (e.g., the rotating words of a typing effect).
    List(Vec<String>),
    /// A nested subtree addressed by further key-path segments.
    Branch(TranslationTree),
}

impl TranslationNode {
    /// The leaf string, if this node is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TranslationNode::Text(text) => Some(text),
            _ => None,
        }
    }

    /// The leaf list, if this node is one.
    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            TranslationNode::List(items) => Some(items),
            _ => None,
        }
    }
}

/// One language's entire translation document.
///
/// Deserializes directly from a JSON object whose values are strings,
/// arrays of strings, or nested objects of the same shape; anything else
/// (numbers, nulls, mixed arrays) is rejected at the deserialization
/// boundary. Read-only once constructed.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct TranslationTree(HashMap<String, TranslationNode>);

impl TranslationTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        TranslationTree(HashMap::new())
    }

    /// Add a string leaf under `key`.
    pub fn with_text(mut self, key: &str, text: &str) -> Self {
        self.0
            .insert(key.to_string(), TranslationNode::Text(text.to_string()));
        self
    }

    /// Add a list leaf under `key`.
    pub fn with_list(mut self, key: &str, items: &[&str]) -> Self {
        let items = items.iter().map(|item| item.to_string()).collect();
        self.0.insert(key.to_string(), TranslationNode::List(items));
        self
    }

    /// Add a nested subtree under `key`.
    pub fn with_branch(mut self, key: &str, branch: TranslationTree) -> Self {
        self.0
            .insert(key.to_string(), TranslationNode::Branch(branch));
        self
    }

    /// Direct child under `key`, if any.
    pub fn get(&self, key: &str) -> Option<&TranslationNode> {
        self.0.get(key)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the tree has no children at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Walk a dot-separated key path down the tree.
    ///
    /// Segments are consumed strictly left-to-right with no backtracking.
    /// Returns `None` as soon as a segment is absent or the walk would have
    /// to descend through a leaf.
    pub fn lookup(&self, key_path: &str) -> Option<&TranslationNode> {
        let mut segments = key_path.split('.');
        let mut node = self.get(segments.next()?)?;
        for segment in segments {
            match node {
                TranslationNode::Branch(subtree) => node = subtree.get(segment)?,
                TranslationNode::Text(_) | TranslationNode::List(_) => return None,
            }
        }
        Some(node)
    }
}
