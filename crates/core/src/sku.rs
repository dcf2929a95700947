//! Stock-keeping unit identifier.

use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// SKU: the unique key of a product.
///
/// Comparison, hashing and ordering ignore case; the spelling the operator
/// typed is kept for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Sku {
    raw: String,
    key: String,
}

impl Sku {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let key = raw.to_lowercase();
        Self { raw, key }
    }

    /// The SKU as entered.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Case-folded form used for uniqueness checks and ordering.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl PartialEq for Sku {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Sku {}

impl Hash for Sku {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Sku {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Sku {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}

impl core::fmt::Display for Sku {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl From<String> for Sku {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<&str> for Sku {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<&Sku> for Sku {
    fn from(value: &Sku) -> Self {
        value.clone()
    }
}

impl From<Sku> for String {
    fn from(value: Sku) -> Self {
        value.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::HashSet;

    #[test]
    fn equality_ignores_case_but_display_keeps_spelling() {
        let a = Sku::new("Ab-12");
        let b = Sku::new("aB-12");
        assert_eq!(a, b);
        assert_eq!(a.to_string(), "Ab-12");
        assert_eq!(b.as_str(), "aB-12");
        assert_eq!(a.key(), "ab-12");
    }

    #[test]
    fn hash_set_treats_case_variants_as_one_key() {
        let mut set = HashSet::new();
        assert!(set.insert(Sku::new("WIDGET")));
        assert!(!set.insert(Sku::new("widget")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&Sku::new("A1")).unwrap();
        assert_eq!(json, "\"A1\"");

        let back: Sku = serde_json::from_str("\"a1\"").unwrap();
        assert_eq!(back, Sku::new("A1"));
        assert_eq!(back.as_str(), "a1");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: ordering agrees with comparing lower-cased spellings.
        #[test]
        fn ordering_is_case_insensitive(a in "[A-Za-z0-9-]{1,12}", b in "[A-Za-z0-9-]{1,12}") {
            let expected = a.to_lowercase().cmp(&b.to_lowercase());
            prop_assert_eq!(Sku::new(a.as_str()).cmp(&Sku::new(b.as_str())), expected);
            prop_assert_eq!(Sku::new(a.to_uppercase()), Sku::new(a.to_lowercase()));
        }
    }
}
