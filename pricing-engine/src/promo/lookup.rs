//! Promo lookup strategy
//!
//! The evaluator never talks to a backend directly; hosts inject a
//! [`PromoLookup`] (HTTP client, cache, fixture map).

use async_trait::async_trait;
use shared::models::PromoDefinition;
use std::collections::HashMap;
use std::sync::Arc;

/// Resolve a normalized promo code to its definition
///
/// `Ok(None)` means the code does not exist. `Err` means the lookup itself
/// failed; the evaluator reports both as an invalid code.
#[async_trait]
pub trait PromoLookup: Send + Sync {
    async fn lookup(&self, code: &str) -> anyhow::Result<Option<PromoDefinition>>;
}

#[async_trait]
impl<T: PromoLookup + ?Sized> PromoLookup for Arc<T> {
    async fn lookup(&self, code: &str) -> anyhow::Result<Option<PromoDefinition>> {
        (**self).lookup(code).await
    }
}

/// Normalize user input: trim and upper-case
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// In-memory promo table
///
/// Keys are stored normalized, so `"save10 "` and `"SAVE10"` hit the same entry.
#[derive(Debug, Clone, Default)]
pub struct StaticPromoLookup {
    codes: HashMap<String, PromoDefinition>,
}

impl StaticPromoLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, code: &str, definition: PromoDefinition) -> Self {
        self.insert(code, definition);
        self
    }

    pub fn insert(&mut self, code: &str, definition: PromoDefinition) {
        self.codes.insert(normalize_code(code), definition);
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, PromoDefinition)> for StaticPromoLookup {
    fn from_iter<I: IntoIterator<Item = (&'a str, PromoDefinition)>>(iter: I) -> Self {
        let mut lookup = Self::new();
        for (code, definition) in iter {
            lookup.insert(code, definition);
        }
        lookup
    }
}

#[async_trait]
impl PromoLookup for StaticPromoLookup {
    async fn lookup(&self, code: &str) -> anyhow::Result<Option<PromoDefinition>> {
        Ok(self.codes.get(&normalize_code(code)).cloned())
    }
}
