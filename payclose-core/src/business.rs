//! Heuristic business-card detection from display names.

use serde::{Deserialize, Serialize};

use crate::profile::BillingProfile;

/// Indicators of a card product that does not report utilization to
/// personal credit bureaus.
pub const DEFAULT_BUSINESS_KEYWORDS: [&str; 6] = [
    "business",
    "negocio",
    "corporate",
    "commercial",
    "ink",
    "amex business",
];

/// Case-insensitive substring matcher over card name and bank.
///
/// A heuristic, not authoritative card-product data: false positives and
/// negatives are tolerated, and the keyword list is swappable by the
/// caller (the CLI feeds it from config).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BusinessCardMatcher {
    keywords: Vec<String>,
}

impl Default for BusinessCardMatcher {
    fn default() -> Self {
        Self::new(DEFAULT_BUSINESS_KEYWORDS.iter().map(|k| k.to_string()))
    }
}

impl BusinessCardMatcher {
    pub fn new(keywords: impl IntoIterator<Item = String>) -> Self {
        Self {
            keywords: keywords.into_iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn matches(&self, profile: &BillingProfile) -> bool {
        let name = profile.name.to_lowercase();
        let bank = profile.bank.to_lowercase();
        self.keywords
            .iter()
            .any(|k| name.contains(k) || bank.contains(k))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ink_card_by_name() {
        let card = BillingProfile::new("cc-1", "Chase Ink Business", "Chase");
        assert!(BusinessCardMatcher::default().matches(&card));
    }

    #[test]
    fn test_matches_by_bank() {
        let card = BillingProfile::new("cc-1", "Platinum", "Banco Negocios SA");
        assert!(BusinessCardMatcher::default().matches(&card));
    }

    #[test]
    fn test_personal_card_does_not_match() {
        let card = BillingProfile::new("cc-1", "Freedom Flex", "Chase");
        assert!(!BusinessCardMatcher::default().matches(&card));
    }

    #[test]
    fn test_custom_keywords_replace_defaults() {
        let matcher = BusinessCardMatcher::new(["fleet".to_string()]);
        let fleet = BillingProfile::new("cc-1", "Fleet Card", "Shell");
        let ink = BillingProfile::new("cc-2", "Chase Ink", "Chase");
        assert!(matcher.matches(&fleet));
        assert!(!matcher.matches(&ink));
    }
}
