//! Trigger Configuration
//!
//! Ordered trigger tables for intent scoring and category detection.
//! Both tables are sequences, not maps: their order is the tie-break order
//! for intents and the first-match order for categories.
//!
//! ```yaml
//! intents:
//!   - intent: GREETING
//!     patterns: [bonjour, salut]
//! categories:
//!   - name: Sports
//!     keywords: [sport, tennis]
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashSet;
use std::path::Path;

use shop_agent_core::{Intent, CATEGORY_TAXONOMY};

use crate::ConfigError;

const BUILTIN_INTENTS: &[(Intent, &[&str])] = &[
    (
        Intent::Greeting,
        &["bonjour", "salut", "hello", "hey", "coucou", "bonsoir", "hi", "salam"],
    ),
    (
        Intent::ProductSearch,
        &[
            "cherche", "recherche", "trouve", "trouver", "où", "avoir", "acheter", "besoin",
            "veux", "voudrais",
        ],
    ),
    (
        Intent::CategoryBrowse,
        &[
            "catégorie", "categories", "électronique", "accessoires", "maison", "mode", "sports",
            "beauté",
        ],
    ),
    (
        Intent::Recommendation,
        &[
            "recommand", "suggér", "conseil", "proposer", "idée", "meilleur", "populaire",
            "tendance",
        ],
    ),
    (
        Intent::OrderStatus,
        &["commande", "commandes", "mes commandes", "historique", "statut", "état"],
    ),
    (
        Intent::DeliveryTracking,
        &["livraison", "suivre", "suivi", "tracking", "colis", "expédition"],
    ),
    (
        Intent::PriceInquiry,
        &[
            "prix", "coût", "combien", "tarif", "promotion", "solde", "réduction", "moins de",
            "budget", "pas cher",
        ],
    ),
    (
        Intent::Help,
        &["aide", "help", "problème", "question", "support", "comment"],
    ),
    (
        Intent::Payment,
        &["paiement", "carte", "payer", "cb", "paypal", "visa"],
    ),
    (Intent::Return, &["retour", "rembours", "échanger", "annuler"]),
    (
        Intent::Thanks,
        &["merci", "super", "parfait", "génial", "excellent"],
    ),
];

const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        "Électronique",
        &[
            "électronique", "electronique", "tech", "gadget", "écouteur", "montre", "caméra",
            "drone", "bluetooth",
        ],
    ),
    (
        "Accessoires",
        &["accessoire", "câble", "cable", "batterie", "chargeur", "support", "housse"],
    ),
    (
        "Maison",
        &["maison", "lampe", "thermostat", "sonnette", "serrure", "connecté", "smart home"],
    ),
    (
        "Mode",
        &["mode", "montre luxe", "sac", "lunettes", "portefeuille", "ceinture"],
    ),
    (
        "Sports",
        &["sport", "ballon", "football", "tennis", "raquette", "boxe", "fitness"],
    ),
    (
        "Beauté",
        &["beauté", "maquillage", "sérum", "cosmétique", "soin"],
    ),
];

/// Trigger patterns for one intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntentTriggers {
    /// Wire name in any case, e.g. `GREETING` or `greeting`
    #[serde(deserialize_with = "intent_by_name")]
    pub intent: Intent,
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Trigger keywords for one category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTriggers {
    pub name: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

fn intent_by_name<'de, D>(deserializer: D) -> Result<Intent, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    name.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Deserialize)]
struct RawTriggerSet {
    #[serde(default)]
    intents: Vec<IntentTriggers>,
    #[serde(default)]
    categories: Vec<CategoryTriggers>,
}

/// Immutable trigger tables
///
/// There is no mutating method: build one with [`TriggerSet::default`],
/// [`TriggerSet::load`] or [`TriggerSet::from_yaml_str`] and share it behind
/// an `Arc`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TriggerSet {
    intents: Vec<IntentTriggers>,
    categories: Vec<CategoryTriggers>,
}

impl Default for TriggerSet {
    fn default() -> Self {
        let intents = BUILTIN_INTENTS
            .iter()
            .map(|(intent, patterns)| IntentTriggers {
                intent: *intent,
                patterns: patterns.iter().map(|p| p.to_string()).collect(),
            })
            .collect();
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, keywords)| CategoryTriggers {
                name: name.to_string(),
                keywords: keywords.iter().map(|k| k.to_string()).collect(),
            })
            .collect();

        Self { intents, categories }
    }
}

impl TriggerSet {
    /// Build from explicit tables. Patterns are lowercased and trimmed.
    pub fn new(
        intents: Vec<IntentTriggers>,
        categories: Vec<CategoryTriggers>,
    ) -> Result<Self, ConfigError> {
        let intents = intents
            .into_iter()
            .map(|mut entry| {
                entry.patterns = normalize_patterns(entry.patterns);
                entry
            })
            .collect();
        let categories = categories
            .into_iter()
            .map(|mut entry| {
                entry.name = entry.name.trim().to_string();
                entry.keywords = normalize_patterns(entry.keywords);
                entry
            })
            .collect();

        let set = Self { intents, categories };
        set.validate()?;
        Ok(set)
    }

    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileNotFound(format!("{}: {}", path.display(), e)))?;

        let set = Self::from_yaml_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            intents = set.intents.len(),
            categories = set.categories.len(),
            "Loaded trigger set from file"
        );
        Ok(set)
    }

    /// Parse from YAML text
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let raw: RawTriggerSet = serde_yaml::from_str(yaml)?;
        Self::new(raw.intents, raw.categories)
    }

    /// Intent tables in canonical order
    pub fn intents(&self) -> &[IntentTriggers] {
        &self.intents
    }

    /// Category tables in canonical order
    pub fn categories(&self) -> &[CategoryTriggers] {
        &self.categories
    }

    /// Patterns for one intent; empty for `Unknown` or unlisted intents
    pub fn patterns_for(&self, intent: Intent) -> &[String] {
        self.intents
            .iter()
            .find(|entry| entry.intent == intent)
            .map(|entry| entry.patterns.as_slice())
            .unwrap_or(&[])
    }

    /// Check structural rules
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen_intents = HashSet::new();
        for entry in &self.intents {
            if entry.intent.is_unknown() {
                return Err(ConfigError::invalid(
                    "intents",
                    "UNKNOWN is the fallback and cannot have triggers",
                ));
            }
            if !seen_intents.insert(entry.intent) {
                return Err(ConfigError::invalid(
                    "intents",
                    format!("duplicate entry for {}", entry.intent),
                ));
            }
            if entry.patterns.iter().any(|p| p.is_empty()) {
                return Err(ConfigError::invalid(
                    format!("intents.{}", entry.intent),
                    "empty pattern",
                ));
            }
        }

        let mut seen_categories = HashSet::new();
        for entry in &self.categories {
            if !CATEGORY_TAXONOMY.contains(&entry.name.as_str()) {
                return Err(ConfigError::invalid(
                    "categories",
                    format!(
                        "'{}' is not one of {}",
                        entry.name,
                        CATEGORY_TAXONOMY.join(", ")
                    ),
                ));
            }
            if !seen_categories.insert(entry.name.as_str()) {
                return Err(ConfigError::invalid(
                    "categories",
                    format!("duplicate entry for {}", entry.name),
                ));
            }
            if entry.keywords.iter().any(|k| k.is_empty()) {
                return Err(ConfigError::invalid(
                    format!("categories.{}", entry.name),
                    "empty keyword",
                ));
            }
        }

        if self.intents.is_empty() {
            tracing::warn!("Trigger set has no intents, every message will be UNKNOWN");
        }

        Ok(())
    }
}

fn normalize_patterns(patterns: Vec<String>) -> Vec<String> {
    patterns
        .into_iter()
        .map(|p| p.trim().to_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_table_is_valid() {
        let set = TriggerSet::default();
        assert!(set.validate().is_ok());

        let order: Vec<Intent> = set.intents().iter().map(|e| e.intent).collect();
        assert_eq!(order, Intent::ALL[..11].to_vec());

        let names: Vec<&str> = set.categories().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, CATEGORY_TAXONOMY.to_vec());
    }

    #[test]
    fn test_patterns_for() {
        let set = TriggerSet::default();
        assert!(set
            .patterns_for(Intent::Greeting)
            .contains(&"bonjour".to_string()));
        assert!(set.patterns_for(Intent::Unknown).is_empty());
    }

    #[test]
    fn test_yaml_is_normalized() {
        let yaml = r#"
intents:
  - intent: THANKS
    patterns: ["  MERCI ", "Super"]
  - intent: GREETING
    patterns: [bonjour]
categories:
  - name: Sports
    keywords: [" Tennis"]
"#;
        let set = TriggerSet::from_yaml_str(yaml).unwrap();

        assert_eq!(set.intents()[0].intent, Intent::Thanks);
        assert_eq!(set.intents()[0].patterns, vec!["merci", "super"]);
        assert_eq!(set.categories()[0].keywords, vec!["tennis"]);
    }

    #[test]
    fn test_intent_names_are_case_insensitive() {
        let yaml = r#"
intents:
  - intent: price_inquiry
    patterns: [prix]
  - intent: " Help "
    patterns: [aide]
"#;
        let set = TriggerSet::from_yaml_str(yaml).unwrap();
        assert_eq!(set.intents()[0].intent, Intent::PriceInquiry);
        assert_eq!(set.intents()[1].intent, Intent::Help);
    }

    #[test]
    fn test_unrecognised_intent_name_is_a_parse_error() {
        let yaml = "intents:\n  - intent: SHOPPING\n    patterns: [achat]\n";
        let err = TriggerSet::from_yaml_str(yaml).unwrap_err();
        match err {
            ConfigError::ParseError(message) => {
                assert!(message.contains("unknown intent 'SHOPPING'"))
            }
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_entry() {
        let yaml = "intents:\n  - intent: UNKNOWN\n    patterns: [x]\n";
        assert!(TriggerSet::from_yaml_str(yaml).is_err());
    }

    #[test]
    fn test_rejects_duplicates_and_empty_patterns() {
        let dup = "intents:\n  - intent: HELP\n    patterns: [aide]\n  \
                   - intent: HELP\n    patterns: [help]\n";
        assert!(TriggerSet::from_yaml_str(dup).is_err());

        let empty = "intents:\n  - intent: HELP\n    patterns: [\"  \"]\n";
        assert!(TriggerSet::from_yaml_str(empty).is_err());
    }

    #[test]
    fn test_rejects_category_outside_taxonomy() {
        let yaml = "categories:\n  - name: Jardin\n    keywords: [pelle]\n";
        let err = TriggerSet::from_yaml_str(yaml).unwrap_err();
        assert!(err.to_string().contains("Jardin"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "intents:\n  - intent: PAYMENT\n    patterns: [paypal]\ncategories: []"
        )
        .unwrap();

        let set = TriggerSet::load(file.path()).unwrap();
        assert_eq!(set.patterns_for(Intent::Payment), ["paypal".to_string()]);
        assert!(set.categories().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let err = TriggerSet::load("/nonexistent/triggers.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn test_shipped_yaml_matches_builtin() {
        let shipped = TriggerSet::from_yaml_str(include_str!("../../../../config/triggers.yaml"))
            .expect("config/triggers.yaml parses");
        assert_eq!(shipped, TriggerSet::default());
    }
}
