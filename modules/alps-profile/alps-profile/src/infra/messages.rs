//! Locale-aware message bundles.

use std::collections::HashMap;

use alps_profile_sdk::{DescriptionRef, MessageSource};

/// Resolves description keys against per-locale bundles.
///
/// For locale `de_DE` the lookup order is `de_DE`, `de`, the default bundle
/// (empty locale), then the reference's own default text.
#[derive(Debug, Clone, Default)]
pub struct BundleMessageSource {
    bundles: HashMap<String, HashMap<String, String>>,
    chain: Vec<String>,
}

impl BundleMessageSource {
    /// `locale` may use `_` or `-` as separator; both resolve the same bundles.
    #[must_use]
    pub fn new(bundles: HashMap<String, HashMap<String, String>>, locale: &str) -> Self {
        let bundles = bundles
            .into_iter()
            .map(|(locale, entries)| (normalize(&locale), entries))
            .collect();
        Self {
            bundles,
            chain: fallback_chain(locale),
        }
    }

    fn lookup(&self, key: &str) -> Option<&str> {
        self.chain.iter().find_map(|locale| {
            self.bundles
                .get(locale)
                .and_then(|bundle| bundle.get(key))
                .map(String::as_str)
        })
    }
}

impl MessageSource for BundleMessageSource {
    fn message(&self, description: &DescriptionRef) -> String {
        description
            .key
            .as_deref()
            .and_then(|key| self.lookup(key))
            .map_or_else(|| description.default_text.clone(), str::to_owned)
    }
}

fn normalize(locale: &str) -> String {
    locale.trim().replace('-', "_")
}

fn fallback_chain(locale: &str) -> Vec<String> {
    let locale = normalize(locale);
    let mut chain = Vec::new();
    let mut current = locale.as_str();
    while !current.is_empty() {
        chain.push(current.to_owned());
        current = current.rsplit_once('_').map_or("", |(head, _)| head);
    }
    chain.push(String::new());
    chain
}
