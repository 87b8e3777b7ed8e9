// src/fallback.rs
//! Keyword fallback applied when category normalization comes up empty.
//!
//! The closed taxonomy cannot express many real beverage, diet, and
//! technique concepts ("kombucha", "sous vide"). This stage keeps a fixed,
//! ordered table of trigger→augmentation rules matched case-insensitively
//! against the original user text. At most one rule fires per invocation:
//! the first whose trigger substring is found, in table order.
//!
//! The table ships as a JSON asset (`config/fallback_rules.json`) embedded
//! into the binary; `FALLBACK_RULES_PATH` injects an alternate file.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::record::ExtractionRecord;

pub const DEFAULT_FALLBACK_RULES_PATH: &str = "config/fallback_rules.json";
pub const ENV_FALLBACK_RULES_PATH: &str = "FALLBACK_RULES_PATH";

static BUILTIN: Lazy<FallbackTable> = Lazy::new(|| {
    let raw = include_str!("../config/fallback_rules.json");
    FallbackTable::from_json_str(raw).expect("valid embedded fallback rules")
});

/// One trigger→augmentation rule. `trigger` is matched as a lowercase
/// substring of the user text; the two lists are appended to the record's
/// `keywords` / `keywords_name` when the rule fires.
#[derive(Debug, Clone, Deserialize)]
pub struct FallbackRule {
    pub trigger: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub keyword_names: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct FallbackTable {
    pub rules: Vec<FallbackRule>,
}

impl FallbackTable {
    pub fn from_json_str(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).context("invalid fallback rules JSON")
    }

    pub fn from_path(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read fallback rules at {}", path.display()))?;
        Self::from_json_str(&raw)
    }

    /// Resolve the process rule table: `FALLBACK_RULES_PATH` when set, then
    /// the default config file when present, otherwise the embedded asset.
    pub fn load() -> anyhow::Result<Self> {
        if let Ok(p) = std::env::var(ENV_FALLBACK_RULES_PATH) {
            return Self::from_path(&PathBuf::from(p));
        }
        let default = Path::new(DEFAULT_FALLBACK_RULES_PATH);
        if default.exists() {
            return Self::from_path(default);
        }
        Ok(BUILTIN.clone())
    }

    /// The embedded default table.
    pub fn builtin() -> &'static FallbackTable {
        &BUILTIN
    }

    /// First rule (table order) whose trigger occurs in `original_text`.
    pub fn find_rule(&self, original_text: &str) -> Option<&FallbackRule> {
        let haystack = original_text.to_lowercase();
        self.rules.iter().find(|r| {
            let trigger = r.trigger.to_lowercase();
            !trigger.is_empty() && haystack.contains(&trigger)
        })
    }

    /// Append the matching rule's keyword lists to `record`, preserving
    /// existing entries and order. Exactly one rule can fire; when no
    /// trigger is found the record is left untouched. Returns the rule that
    /// fired, if any.
    pub fn augment<'a>(
        &'a self,
        record: &mut ExtractionRecord,
        original_text: &str,
    ) -> Option<&'a FallbackRule> {
        let rule = self.find_rule(original_text)?;
        record.keywords.extend(rule.keywords.iter().cloned());
        record.keywords_name.extend(rule.keyword_names.iter().cloned());
        Some(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> FallbackTable {
        FallbackTable::from_json_str(
            r#"{
                "rules": [
                    { "trigger": "coffee",
                      "keywords": ["coffee", "beverages"],
                      "keyword_names": ["beverages", "coffee"] },
                    { "trigger": "espresso",
                      "keywords": ["beverages", "espresso"],
                      "keyword_names": ["beverages", "espresso"] }
                ]
            }"#,
        )
        .expect("parse test table")
    }

    #[test]
    fn first_matching_rule_wins_and_is_exclusive() {
        let t = table();
        let mut rec = ExtractionRecord::default();
        // both triggers present; only the coffee rule may fire
        let fired = t.augment(&mut rec, "an espresso coffee please");
        assert_eq!(fired.map(|r| r.trigger.as_str()), Some("coffee"));
        assert_eq!(rec.keywords, ["coffee", "beverages"]);
        assert_eq!(rec.keywords_name, ["beverages", "coffee"]);
    }

    #[test]
    fn trigger_match_is_case_insensitive() {
        let t = table();
        let mut rec = ExtractionRecord::default();
        assert!(t.augment(&mut rec, "ESPRESSO with sugar").is_some());
        assert_eq!(rec.keywords, ["beverages", "espresso"]);
    }

    #[test]
    fn no_trigger_leaves_the_record_unchanged() {
        let t = table();
        let mut rec = ExtractionRecord {
            keywords: vec!["existing".into()],
            ..Default::default()
        };
        let before = rec.clone();
        assert!(t.augment(&mut rec, "plain porridge").is_none());
        assert_eq!(rec, before);
    }

    #[test]
    fn augmentation_appends_after_existing_keywords() {
        let t = table();
        let mut rec = ExtractionRecord {
            keywords: vec!["morning".into()],
            keywords_name: vec!["morning".into()],
            ..Default::default()
        };
        t.augment(&mut rec, "coffee to start the day");
        assert_eq!(rec.keywords, ["morning", "coffee", "beverages"]);
        assert_eq!(rec.keywords_name, ["morning", "beverages", "coffee"]);
    }

    #[test]
    fn builtin_table_parses_and_keeps_chain_order() {
        let t = FallbackTable::builtin();
        assert!(t.rules.len() >= 20);
        let triggers: Vec<&str> = t.rules.iter().map(|r| r.trigger.as_str()).collect();
        let pos = |s: &str| triggers.iter().position(|t| *t == s).unwrap();
        // "smoothie bowl" must shadow the plain "smoothie" trigger
        assert!(pos("smoothie bowl") < pos("smoothie"));
        // latte shares the coffee augmentation and precedes espresso
        assert!(pos("coffee") < pos("latte"));
        assert!(pos("latte") < pos("espresso"));
    }
}
