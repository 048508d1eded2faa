//! Canonical identity keys for matching names across datasets.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Punctuation that carries no meaning in a person's name.
const STRIPPED_PUNCTUATION: &[char] = &['.', ','];

/// Canonical form of a name. Two names with equal keys are the same person.
///
/// The empty key is produced for unusable input and never matches anything.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NormalizedIdentity(String);

impl NormalizedIdentity {
    /// The canonical text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this key is unusable for matching.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NormalizedIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Normalize a raw name: case-fold, drop periods and commas, trim, and
/// collapse whitespace runs to a single space.
///
/// Punctuation is removed before whitespace is collapsed so a single pass is
/// already a fixed point.
pub fn normalize(raw: &str) -> NormalizedIdentity {
    let folded: String = raw
        .to_lowercase()
        .chars()
        .filter(|c| !STRIPPED_PUNCTUATION.contains(c))
        .collect();

    let mut key = String::with_capacity(folded.len());
    for word in folded.split_whitespace() {
        if !key.is_empty() {
            key.push(' ');
        }
        key.push_str(word);
    }

    NormalizedIdentity(key)
}
